//! OmniVision OV9734, 1280x720 single-lane sensor

use std::time::Duration;

use sensor_control::{
    BusFormat, Catalogue, ChipIdentity, ChipProfile, ControlLimits, ControlRange,
    ControlRegisters, DigitalGainGroup, FrameInterval, Mode, PowerTiming, RegWidth, RegisterField,
    StreamRegister, TestPatternRegister, VtsRegister,
};

use crate::tables::{OV9734_1280X720, OV9734_GLOBAL};

pub const CHIP_ID: u16 = 0x9734;
pub const VTS_30FPS: u32 = 0x322;
pub const VTS_MAX: u32 = 0x7fff;

static MODES: [Mode; 1] = [Mode {
    width: 1280,
    height: 720,
    frame_interval: FrameInterval::new(10_000, 300_000),
    hts_default: 0x5c6,
    vts_default: VTS_30FPS,
    exposure_default: 0x131,
    register_sequence: &OV9734_1280X720,
}];

static CATALOGUES: [Catalogue; 1] = [Catalogue {
    lanes: 1,
    modes: &MODES,
}];

pub static OV9734: ChipProfile = ChipProfile {
    name: "ov9734",
    bus_format: BusFormat::Sbggr10_1x10,
    identity: ChipIdentity::at(0x300a, CHIP_ID),
    supplies: &["avdd", "dovdd", "dvdd"],
    power: PowerTiming {
        xvclk_hz: 24_000_000,
        pre_supply_settle: None,
        inter_supply_settle: Duration::ZERO,
        post_supply_settle: Duration::ZERO,
        reset_settle: Duration::from_micros(500),
        boot_cycles: 8192,
        supply_off_settle: &[],
    },
    link_frequency: 180_000_000,
    init_sequence: &OV9734_GLOBAL,
    catalogues: &CATALOGUES,
    limits: ControlLimits {
        exposure_min: 4,
        exposure_step: 1,
        exposure_margin: 4,
        analog_gain: ControlRange::new(16, 248, 1, 16),
        digital_gain: Some(ControlRange::new(256, 1023, 1, 256)),
        vts_min: Some(VTS_30FPS),
        vts_max: VTS_MAX,
        test_patterns: 5,
        flip: false,
    },
    registers: ControlRegisters {
        // low four bits are fractional lines
        exposure: RegisterField::burst(0x3500, RegWidth::Bits24).shifted(4),
        analog_gain: RegisterField::burst(0x350a, RegWidth::Bits16),
        digital_gain: Some(DigitalGainGroup {
            group_register: 0x3208,
            hold_start: 0x00,
            hold_end: 0x10,
            launch: 0xa0,
            channels: [
                RegisterField::burst(0x5180, RegWidth::Bits16),
                RegisterField::burst(0x5182, RegWidth::Bits16),
                RegisterField::burst(0x5184, RegWidth::Bits16),
            ],
        }),
        vts: VtsRegister {
            field: RegisterField::burst(0x380e, RegWidth::Bits16),
            offset: 0,
            max: VTS_MAX,
        },
        test_pattern: Some(TestPatternRegister {
            address: 0x5080,
            enable: 0x80,
            bar_shift: 2,
        }),
    },
    stream: StreamRegister {
        address: 0x0100,
        streaming: 0x01,
        standby: 0x00,
        on_delay: None,
    },
    flip: None,
};
