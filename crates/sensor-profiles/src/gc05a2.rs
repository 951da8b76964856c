//! GalaxyCore GC05A2, 5 MP sensor on a two-lane link

use std::time::Duration;

use sensor_control::{
    BusFormat, Catalogue, ChipIdentity, ChipProfile, ControlLimits, ControlRange,
    ControlRegisters, FlipRegister, FrameInterval, Mode, PowerTiming, RegWidth, RegisterField,
    StreamRegister, VtsRegister,
};

use crate::tables::{GC05A2_2592X1944, GC05A2_GLOBAL};

pub const CHIP_ID: u16 = 0x05a2;
pub const VTS_MAX: u32 = 0xfffe;

static MODES_2LANE: [Mode; 1] = [Mode {
    width: 2592,
    height: 1944,
    frame_interval: FrameInterval::new(10_000, 300_000),
    hts_default: 3168,
    vts_default: 2032,
    exposure_default: 0x0733,
    register_sequence: &GC05A2_2592X1944,
}];

static CATALOGUES: [Catalogue; 1] = [Catalogue {
    lanes: 2,
    modes: &MODES_2LANE,
}];

pub static GC05A2: ChipProfile = ChipProfile {
    name: "gc05a2",
    bus_format: BusFormat::Sgrbg10_1x10,
    identity: ChipIdentity {
        high: 0x03f0,
        low: 0x03f1,
        expected: CHIP_ID,
    },
    supplies: &["avdd", "dovdd", "dvdd"],
    power: PowerTiming {
        xvclk_hz: 24_000_000,
        pre_supply_settle: Some(Duration::from_micros(1000)),
        inter_supply_settle: Duration::from_micros(50),
        post_supply_settle: Duration::from_micros(1000),
        reset_settle: Duration::from_micros(500),
        boot_cycles: 8192,
        supply_off_settle: &[
            Duration::from_micros(10_000),
            Duration::from_micros(3000),
            Duration::from_micros(3000),
        ],
    },
    link_frequency: 480_000_000,
    init_sequence: &GC05A2_GLOBAL,
    catalogues: &CATALOGUES,
    limits: ControlLimits {
        exposure_min: 4,
        exposure_step: 1,
        exposure_margin: 16,
        analog_gain: ControlRange::new(0x400, 0x4000, 1, 0x400),
        digital_gain: None,
        vts_min: None,
        vts_max: VTS_MAX,
        test_patterns: 5,
        flip: true,
    },
    registers: ControlRegisters {
        exposure: RegisterField::per_byte(0x0202, RegWidth::Bits16),
        analog_gain: RegisterField::per_byte(0x0204, RegWidth::Bits16),
        digital_gain: None,
        vts: VtsRegister {
            field: RegisterField::per_byte(0x0340, RegWidth::Bits16),
            offset: 16,
            max: VTS_MAX,
        },
        // pattern menu is exposed but the chip has no generator wired up
        test_pattern: None,
    },
    stream: StreamRegister {
        address: 0x0100,
        streaming: 0x01,
        standby: 0x00,
        on_delay: Some(Duration::from_millis(100)),
    },
    flip: Some(FlipRegister {
        address: 0x0101,
        mirror: 0x01,
        flip: 0x02,
    }),
};
