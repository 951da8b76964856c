//! Scripted bus and power resources for running the engine without hardware
//!
//! Every mock records into a shared [`Journal`], so tests can assert the
//! relative order of bus traffic, delays, clock, line and supply events.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, ErrorKind, I2c, NoAcknowledgeSource, Operation, SevenBitAddress};

use crate::channel::{RegVal, RegWidth, RegisterChannel};
use crate::config::SensorConfig;
use crate::controls::{ControlLimits, ControlRange};
use crate::device::SensorDevice;
use crate::error::{ResourceError, Result};
use crate::identity::ChipIdentity;
use crate::layout::{
    ControlRegisters, DigitalGainGroup, FlipRegister, RegisterField, TestPatternRegister,
    VtsRegister,
};
use crate::mode::{BusFormat, Catalogue, FrameInterval, Mode};
use crate::power::{
    Clock, PinConfig, PinControl, PowerResources, PowerTiming, Regulator,
};
use crate::profile::{ChipProfile, StreamRegister};

/// Bus address used by [`Harness`]
pub const MOCK_ADDRESS: SevenBitAddress = 0x36;

/// Which delay source slept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelaySource {
    Bus,
    Power,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Write { reg: u16, bytes: Vec<u8> },
    Read { reg: u16, len: usize },
    Delay { source: DelaySource, us: u32 },
    ClockRate(u32),
    ClockOn,
    ClockOff,
    SupplyOn(String),
    SupplyOff(String),
    Line { name: &'static str, high: bool },
    Pins(PinConfig),
}

impl Event {
    pub fn line(name: &'static str, high: bool) -> Self {
        Event::Line { name, high }
    }

    pub fn supply_on(name: &str) -> Self {
        Event::SupplyOn(name.to_string())
    }

    pub fn supply_off(name: &str) -> Self {
        Event::SupplyOff(name.to_string())
    }
}

/// Shared, ordered record of everything the mocks observed
#[derive(Debug, Clone, Default)]
pub struct Journal {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, event: Event) {
        self.entries().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.entries().clone()
    }

    /// Successful register writes as `(register, payload)`
    pub fn writes(&self) -> Vec<(u16, Vec<u8>)> {
        self.entries()
            .iter()
            .filter_map(|event| match event {
                Event::Write { reg, bytes } => Some((*reg, bytes.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, predicate: impl Fn(&Event) -> bool) -> usize {
        self.entries().iter().filter(|event| predicate(event)).count()
    }

    pub fn clear(&self) {
        self.entries().clear();
    }

    pub fn delay(&self, source: DelaySource) -> MockDelay {
        MockDelay {
            journal: self.clone(),
            source,
        }
    }

    /// Register channel on `bus` whose sleeps land in this journal
    pub fn channel(&self, bus: &MockBus) -> RegisterChannel<MockBus, MockDelay> {
        RegisterChannel::new(bus.clone(), MOCK_ADDRESS, self.delay(DelaySource::Bus))
    }

    fn entries(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Debug, Default)]
struct BusState {
    registers: HashMap<u16, u8>,
    writes: usize,
    fail_at: Option<usize>,
    fail_register: Option<u16>,
    fail_reads: bool,
}

/// Register-map bus. Clones share state, so a test can keep a handle for
/// fault injection after handing the bus to a device.
#[derive(Debug, Clone)]
pub struct MockBus {
    journal: Journal,
    state: Arc<Mutex<BusState>>,
}

impl MockBus {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            state: Arc::default(),
        }
    }

    pub fn with_register(self, reg: u16, value: u8) -> Self {
        self.set_register(reg, value);
        self
    }

    pub fn set_register(&self, reg: u16, value: u8) {
        self.state().registers.insert(reg, value);
    }

    /// Last value written to, or preset for, `reg`
    pub fn register(&self, reg: u16) -> Option<u8> {
        self.state().registers.get(&reg).copied()
    }

    /// Fail the `n`-th upcoming register write (0 is the next one)
    pub fn fail_write(&self, n: usize) {
        let mut state = self.state();
        state.fail_at = Some(state.writes + n);
    }

    /// Fail every write to `reg`
    pub fn fail_writes_to(&self, reg: u16) {
        self.state().fail_register = Some(reg);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.state().fail_reads = fail;
    }

    pub fn clear_failures(&self) {
        let mut state = self.state();
        state.fail_at = None;
        state.fail_register = None;
        state.fail_reads = false;
    }

    fn state(&self) -> MutexGuard<'_, BusState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

const NACK: ErrorKind = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);

impl i2c::ErrorType for MockBus {
    type Error = ErrorKind;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        _address: SevenBitAddress,
        operations: &mut [Operation<'_>],
    ) -> std::result::Result<(), Self::Error> {
        let mut state = self.state();
        let mut pointer = None;

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    let (&[high, low], payload) = bytes.split_at(2.min(bytes.len())) else {
                        return Err(ErrorKind::Other);
                    };
                    let reg = u16::from_be_bytes([high, low]);
                    if payload.is_empty() {
                        pointer = Some(reg);
                        continue;
                    }

                    let index = state.writes;
                    state.writes += 1;
                    if state.fail_at == Some(index) || state.fail_register == Some(reg) {
                        return Err(NACK);
                    }
                    for (offset, byte) in (0u16..).zip(payload.iter()) {
                        state.registers.insert(reg.wrapping_add(offset), *byte);
                    }
                    self.journal.record(Event::Write {
                        reg,
                        bytes: payload.to_vec(),
                    });
                }
                Operation::Read(buffer) => {
                    let reg = pointer.ok_or(ErrorKind::Other)?;
                    if state.fail_reads {
                        return Err(NACK);
                    }
                    for (offset, slot) in (0u16..).zip(buffer.iter_mut()) {
                        *slot = state
                            .registers
                            .get(&reg.wrapping_add(offset))
                            .copied()
                            .unwrap_or(0);
                    }
                    self.journal.record(Event::Read {
                        reg,
                        len: buffer.len(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Delay that records instead of sleeping
#[derive(Debug, Clone)]
pub struct MockDelay {
    journal: Journal,
    source: DelaySource,
}

impl MockDelay {
    fn sleep(&mut self, us: u32) {
        self.journal.record(Event::Delay {
            source: self.source,
            us,
        });
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.sleep(ns.div_ceil(1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.sleep(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.sleep(ms.saturating_mul(1_000));
    }
}

pub struct MockClock {
    journal: Journal,
    rate: u32,
    fixed_rate: Option<u32>,
    fail: bool,
}

impl MockClock {
    pub fn new(journal: &Journal) -> Self {
        Self {
            journal: journal.clone(),
            rate: 0,
            fixed_rate: None,
            fail: false,
        }
    }

    /// Refuse to enable
    pub fn failing(self) -> Self {
        Self { fail: true, ..self }
    }

    /// Ignore rate requests and always run at `hz`
    pub fn fixed_rate(self, hz: u32) -> Self {
        Self {
            fixed_rate: Some(hz),
            ..self
        }
    }
}

impl Clock for MockClock {
    fn set_rate(&mut self, hz: u32) -> std::result::Result<(), ResourceError> {
        self.journal.record(Event::ClockRate(hz));
        self.rate = hz;
        Ok(())
    }

    fn rate(&self) -> u32 {
        self.fixed_rate.unwrap_or(self.rate)
    }

    fn enable(&mut self) -> std::result::Result<(), ResourceError> {
        if self.fail {
            return Err(ResourceError::new("clock enable refused"));
        }
        self.journal.record(Event::ClockOn);
        Ok(())
    }

    fn disable(&mut self) {
        self.journal.record(Event::ClockOff);
    }
}

pub struct MockRegulator {
    name: String,
    journal: Journal,
    fault: Arc<AtomicBool>,
}

impl MockRegulator {
    pub fn new(name: &str, journal: &Journal) -> Self {
        Self::with_fault_switch(name, journal, Arc::default())
    }

    /// Regulator that fails to enable while `fault` is set
    pub fn with_fault_switch(name: &str, journal: &Journal, fault: Arc<AtomicBool>) -> Self {
        Self {
            name: name.to_string(),
            journal: journal.clone(),
            fault,
        }
    }

    pub fn failing(self) -> Self {
        self.fault.store(true, Ordering::SeqCst);
        self
    }
}

impl Regulator for MockRegulator {
    fn name(&self) -> &str {
        &self.name
    }

    fn enable(&mut self) -> std::result::Result<(), ResourceError> {
        if self.fault.load(Ordering::SeqCst) {
            return Err(ResourceError::new(format!("{} over-current", self.name)));
        }
        self.journal.record(Event::SupplyOn(self.name.clone()));
        Ok(())
    }

    fn disable(&mut self) -> std::result::Result<(), ResourceError> {
        self.journal.record(Event::SupplyOff(self.name.clone()));
        Ok(())
    }
}

pub struct MockPins {
    journal: Journal,
    has_sleep: bool,
}

impl MockPins {
    pub fn new(journal: &Journal, has_sleep: bool) -> Self {
        Self {
            journal: journal.clone(),
            has_sleep,
        }
    }
}

impl PinControl for MockPins {
    fn has_state(&self, state: PinConfig) -> bool {
        match state {
            PinConfig::Default => true,
            PinConfig::Sleep => self.has_sleep,
        }
    }

    fn select(&mut self, state: PinConfig) -> std::result::Result<(), ResourceError> {
        self.journal.record(Event::Pins(state));
        Ok(())
    }
}

/// Output line that records its level
pub struct MockLine {
    name: &'static str,
    journal: Journal,
}

impl MockLine {
    pub fn new(name: &'static str, journal: &Journal) -> Self {
        Self {
            name,
            journal: journal.clone(),
        }
    }
}

impl digital::ErrorType for MockLine {
    type Error = Infallible;
}

impl OutputPin for MockLine {
    fn set_low(&mut self) -> std::result::Result<(), Infallible> {
        self.journal.record(Event::line(self.name, false));
        Ok(())
    }

    fn set_high(&mut self) -> std::result::Result<(), Infallible> {
        self.journal.record(Event::line(self.name, true));
        Ok(())
    }
}

/// One journal, one bus and a full set of power resources for a profile
pub struct Harness {
    pub journal: Journal,
    pub bus: MockBus,
    profile: &'static ChipProfile,
    supply_faults: Vec<(&'static str, Arc<AtomicBool>)>,
}

impl Harness {
    /// Bus preloaded with the profile's identity registers
    pub fn new(profile: &'static ChipProfile) -> Self {
        let journal = Journal::new();
        let [high, low] = profile.identity.expected.to_be_bytes();
        let bus = MockBus::new(&journal)
            .with_register(profile.identity.high, high)
            .with_register(profile.identity.low, low);
        let supply_faults = profile
            .supplies
            .iter()
            .map(|name| (*name, Arc::default()))
            .collect();

        Self {
            journal,
            bus,
            profile,
            supply_faults,
        }
    }

    /// Make supply `name` fail to enable from now on, or recover
    pub fn fail_supply(&self, name: &str, fail: bool) {
        for (supply, fault) in &self.supply_faults {
            if *supply == name {
                fault.store(fail, Ordering::SeqCst);
            }
        }
    }

    pub fn resources(&self) -> PowerResources {
        PowerResources {
            clock: Box::new(MockClock::new(&self.journal)),
            reset: Some(Box::new(MockLine::new("reset", &self.journal))),
            powerdown: Some(Box::new(MockLine::new("powerdown", &self.journal))),
            supplies: self
                .supply_faults
                .iter()
                .map(|(name, fault)| {
                    Box::new(MockRegulator::with_fault_switch(
                        name,
                        &self.journal,
                        Arc::clone(fault),
                    )) as Box<dyn Regulator>
                })
                .collect(),
            pins: Some(Box::new(MockPins::new(&self.journal, true))),
            delay: Box::new(self.journal.delay(DelaySource::Power)),
        }
    }

    pub fn attach(&self, config: SensorConfig) -> Result<SensorDevice<MockBus, MockDelay>> {
        SensorDevice::attach(
            self.profile,
            self.journal.channel(&self.bus),
            self.resources(),
            config,
        )
    }
}

static TEST_INIT: [RegVal; 3] = [
    RegVal::new(0x0103, 0x01),
    RegVal::new(0x0100, 0x00),
    RegVal::END,
];

static TEST_720P: [RegVal; 3] = [
    RegVal::new(0x3808, 0x05),
    RegVal::new(0x3809, 0x00),
    RegVal::END,
];

static TEST_VGA: [RegVal; 3] = [
    RegVal::new(0x3808, 0x02),
    RegVal::new(0x3809, 0x80),
    RegVal::END,
];

static TEST_MODES: [Mode; 2] = [
    Mode {
        width: 1280,
        height: 720,
        frame_interval: FrameInterval::new(10_000, 300_000),
        hts_default: 0x5c6,
        vts_default: 0x322,
        exposure_default: 0x131,
        register_sequence: &TEST_720P,
    },
    Mode {
        width: 640,
        height: 480,
        frame_interval: FrameInterval::new(10_000, 300_000),
        hts_default: 0x5c6,
        vts_default: 0x322,
        exposure_default: 0x100,
        register_sequence: &TEST_VGA,
    },
];

static TEST_CATALOGUES: [Catalogue; 1] = [Catalogue {
    lanes: 1,
    modes: &TEST_MODES,
}];

/// Single-lane profile with every optional control present
pub static TEST_PROFILE: ChipProfile = ChipProfile {
    name: "mock",
    bus_format: BusFormat::Sbggr10_1x10,
    identity: ChipIdentity::at(0x300a, 0x9734),
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
    init_sequence: &TEST_INIT,
    catalogues: &TEST_CATALOGUES,
    limits: ControlLimits {
        exposure_min: 4,
        exposure_step: 1,
        exposure_margin: 4,
        analog_gain: ControlRange::new(16, 248, 1, 16),
        digital_gain: Some(ControlRange::new(256, 1023, 1, 256)),
        vts_min: Some(0x322),
        vts_max: 0x7fff,
        test_patterns: 5,
        flip: true,
    },
    registers: ControlRegisters {
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
            max: 0x7fff,
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
    flip: Some(FlipRegister {
        address: 0x0101,
        mirror: 0x01,
        flip: 0x02,
    }),
};
