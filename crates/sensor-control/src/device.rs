//! Attached sensor instance
//!
//! [`SensorDevice`] owns the register channel, power resources, mode and
//! control state of one sensor. All host operations go through a single
//! mutex, so concurrent callers are serialized.

use std::sync::{Mutex, MutexGuard, PoisonError};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use tracing::{debug, info, warn};

use crate::channel::RegisterChannel;
use crate::config::SensorConfig;
use crate::controls::{Control, ControlGraph, ControlId, ControlRange, FlipBits};
use crate::error::{ConfigError, PreconditionError, Result, SensorError};
use crate::mode::{Format, FrameInterval, Mode, ModeTable};
use crate::power::{PowerResources, PowerSequencer};
use crate::profile::ChipProfile;
use crate::stream::{start_streaming, stop_streaming, DeviceState};
use crate::subdev::{ModuleInfo, SensorSubdev};

struct Inner<I, D> {
    channel: RegisterChannel<I, D>,
    power: PowerSequencer,
    state: DeviceState,
    mode: &'static Mode,
    controls: ControlGraph,
}

impl<I: I2c, D: DelayNs> Inner<I, D> {
    fn power_up(&mut self, profile: &ChipProfile) -> Result<()> {
        if self.state.is_powered() {
            return Ok(());
        }

        self.power.power_on()?;
        if let Err(e) = self.initialize(profile) {
            self.power.power_off();
            return Err(e);
        }

        self.state = DeviceState::PoweredIdle;
        Ok(())
    }

    fn initialize(&mut self, profile: &ChipProfile) -> Result<()> {
        profile.identity.check_identity(&mut self.channel)?;
        self.channel.write_sequence(profile.init_sequence)?;
        Ok(())
    }

    /// Stop streaming if needed, then cut power. Power always ends up off.
    fn power_down(&mut self, profile: &ChipProfile) -> Result<()> {
        let stopped = stop_streaming(&mut self.state, &mut self.channel, profile);
        self.power.power_off();
        self.state = DeviceState::Unpowered;
        stopped.map_err(Into::into)
    }
}

/// One attached sensor
pub struct SensorDevice<I: I2c, D: DelayNs> {
    profile: &'static ChipProfile,
    config: SensorConfig,
    modes: ModeTable,
    inner: Mutex<Inner<I, D>>,
}

impl<I: I2c, D: DelayNs> SensorDevice<I, D> {
    /// Claim the sensor: resolve its mode catalogue, take the power
    /// resources, and confirm the chip identity with a short power cycle.
    ///
    /// The device is left unpowered.
    pub fn attach(
        profile: &'static ChipProfile,
        channel: RegisterChannel<I, D>,
        resources: PowerResources,
        config: SensorConfig,
    ) -> Result<Self> {
        let modes = profile.mode_table(config.lane_count).ok_or(
            ConfigError::UnsupportedLaneCount {
                sensor: profile.name,
                lanes: config.lane_count,
            },
        )?;
        let power = PowerSequencer::new(resources, profile.power, profile.supplies)?;

        let mode = modes.default_mode();
        let mut inner = Inner {
            channel,
            power,
            state: DeviceState::Unpowered,
            mode,
            controls: ControlGraph::new(profile.limits, mode),
        };

        inner.power.power_on()?;
        let identity = profile.identity.check_identity(&mut inner.channel);
        inner.power.power_off();
        identity?;

        info!(
            "Attached {} at {:#04x}: {} lane(s), {} mode(s), module {} lens {}",
            profile.name,
            inner.channel.address(),
            config.lane_count,
            modes.modes().len(),
            config.module_name,
            config.lens_name
        );

        Ok(Self {
            profile,
            config,
            modes,
            inner: Mutex::new(inner),
        })
    }

    /// Stop streaming and power down before releasing the device
    pub fn detach(self) -> Result<()> {
        let result = self
            .lock()
            .and_then(|mut inner| inner.power_down(self.profile));
        info!("Detached {}", self.profile.name);
        result
    }

    pub fn profile(&self) -> &'static ChipProfile {
        self.profile
    }

    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    pub fn state(&self) -> Result<DeviceState> {
        Ok(self.lock()?.state)
    }

    pub fn flip(&self) -> Result<FlipBits> {
        Ok(self.lock()?.controls.flip())
    }

    /// Host-visible name for this instance on `device`
    pub fn subdev_name(&self, device: &str) -> String {
        self.config.subdev_name(self.profile.name, device)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<I, D>>> {
        self.inner.lock().map_err(|_| SensorError::LockPoisoned)
    }
}

impl<I: I2c, D: DelayNs> SensorSubdev for SensorDevice<I, D> {
    fn set_power(&self, on: bool) -> Result<()> {
        let mut inner = self.lock()?;
        if on {
            inner.power_up(self.profile)
        } else {
            inner.power_down(self.profile)
        }
    }

    fn enumerate_modes(&self) -> &'static [Mode] {
        self.modes.modes()
    }

    fn format(&self) -> Result<Format> {
        let inner = self.lock()?;
        Ok(Format::from_mode(inner.mode, self.profile.bus_format))
    }

    fn try_format(&self, width: u32, height: u32) -> Format {
        Format::from_mode(
            self.modes.find_best_fit(width, height),
            self.profile.bus_format,
        )
    }

    fn set_format(&self, width: u32, height: u32) -> Result<&'static Mode> {
        let mut inner = self.lock()?;
        if inner.state.is_streaming() {
            return Err(PreconditionError::Streaming.into());
        }

        let mode = self.modes.find_best_fit(width, height);
        if !std::ptr::eq(mode, inner.mode) {
            inner.mode = mode;
            inner.controls.retune(mode);
        }
        info!(
            "{} format {}x{} (requested {}x{})",
            self.profile.name, mode.width, mode.height, width, height
        );
        Ok(mode)
    }

    fn set_stream(&self, on: bool) -> Result<()> {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        if on {
            start_streaming(
                &mut inner.state,
                &mut inner.channel,
                self.profile,
                inner.mode,
                &inner.controls,
            )
        } else {
            stop_streaming(&mut inner.state, &mut inner.channel, self.profile)
                .map_err(Into::into)
        }
    }

    fn set_control(&self, control: Control) -> Result<()> {
        let mut guard = self.lock()?;
        let inner = &mut *guard;
        let writes = inner.controls.set(control)?;

        if !inner.state.is_powered() {
            debug!("{:?} stored, applied at next stream start", control);
            return Ok(());
        }
        for write in writes {
            self.profile
                .registers
                .apply(&mut inner.channel, inner.controls.frame_height(), write)?;
        }
        Ok(())
    }

    fn control(&self, id: ControlId) -> Result<u32> {
        self.lock()?.controls.value(id)
    }

    fn control_range(&self, id: ControlId) -> Result<ControlRange> {
        self.lock()?.controls.range(id)
    }

    fn frame_interval(&self) -> Result<FrameInterval> {
        Ok(self.lock()?.mode.frame_interval)
    }

    fn quick_stream(&self, on: bool) -> Result<()> {
        let mut inner = self.lock()?;
        if !inner.state.is_powered() {
            return Err(PreconditionError::NotPowered.into());
        }
        let stream = self.profile.stream;
        let value = if on { stream.streaming } else { stream.standby };
        inner.channel.write_u8(stream.address, value)?;
        Ok(())
    }

    fn module_info(&self) -> ModuleInfo {
        ModuleInfo {
            sensor: self.profile.name.to_string(),
            module: self.config.module_name.clone(),
            lens: self.config.lens_name.clone(),
        }
    }

    fn link_frequency(&self) -> u64 {
        self.profile.link_frequency
    }

    fn pixel_rate(&self) -> u64 {
        self.profile.pixel_rate(self.config.lane_count)
    }
}

impl<I: I2c, D: DelayNs> Drop for SensorDevice<I, D> {
    fn drop(&mut self) {
        let inner = self.inner.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = inner.power_down(self.profile) {
            warn!("Failed to shut down {} cleanly: {}", self.profile.name, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IdentityError, IoError, PowerError};
    use crate::mock::{Event, Harness, TEST_PROFILE};
    use std::sync::Arc;
    use std::thread;

    fn powered() -> (Harness, SensorDevice<crate::mock::MockBus, crate::mock::MockDelay>) {
        let harness = Harness::new(&TEST_PROFILE);
        let device = harness.attach(SensorConfig::default()).unwrap();
        device.set_power(true).unwrap();
        harness.journal.clear();
        (harness, device)
    }

    #[test]
    fn test_attach_checks_identity_and_leaves_power_off() {
        let harness = Harness::new(&TEST_PROFILE);
        let device = harness.attach(SensorConfig::default()).unwrap();

        assert_eq!(device.state().unwrap(), DeviceState::Unpowered);
        let events = harness.journal.events();
        assert!(events.contains(&Event::Read { reg: 0x300a, len: 1 }));
        assert!(events.contains(&Event::Read { reg: 0x300b, len: 1 }));
        assert_eq!(events.last(), Some(&Event::supply_off("avdd")));
        assert!(harness.journal.writes().is_empty());
    }

    #[test]
    fn test_attach_rejects_foreign_chip() {
        let harness = Harness::new(&TEST_PROFILE);
        harness.bus.set_register(0x300b, 0x35);

        let err = harness.attach(SensorConfig::default()).err().unwrap();
        assert!(matches!(
            err,
            SensorError::Identity(IdentityError {
                expected: 0x9734,
                found: 0x9735
            })
        ));
        assert_eq!(harness.journal.count(|e| *e == Event::ClockOff), 1);
    }

    #[test]
    fn test_attach_rejects_unsupported_lane_count() {
        let harness = Harness::new(&TEST_PROFILE);
        let config = SensorConfig {
            lane_count: 4,
            ..Default::default()
        };

        let err = harness.attach(config).err().unwrap();
        assert!(matches!(
            err,
            SensorError::Config(ConfigError::UnsupportedLaneCount { lanes: 4, .. })
        ));
        assert!(harness.journal.events().is_empty());
    }

    #[test]
    fn test_power_on_writes_init_sequence() {
        let harness = Harness::new(&TEST_PROFILE);
        let device = harness.attach(SensorConfig::default()).unwrap();
        harness.journal.clear();

        device.set_power(true).unwrap();
        assert_eq!(device.state().unwrap(), DeviceState::PoweredIdle);
        assert_eq!(
            harness.journal.writes(),
            vec![(0x0103, vec![0x01]), (0x0100, vec![0x00])]
        );

        // second power-on is a no-op
        harness.journal.clear();
        device.set_power(true).unwrap();
        assert!(harness.journal.events().is_empty());
    }

    #[test]
    fn test_power_on_failure_stays_unpowered() {
        let harness = Harness::new(&TEST_PROFILE);
        let device = harness.attach(SensorConfig::default()).unwrap();
        harness.fail_supply("dvdd", true);

        let err = device.set_power(true).unwrap_err();
        assert!(matches!(err, SensorError::Power(PowerError::Regulator { .. })));
        assert_eq!(device.state().unwrap(), DeviceState::Unpowered);

        harness.fail_supply("dvdd", false);
        device.set_power(true).unwrap();
        assert_eq!(device.state().unwrap(), DeviceState::PoweredIdle);
    }

    #[test]
    fn test_stream_requires_power() {
        let harness = Harness::new(&TEST_PROFILE);
        let device = harness.attach(SensorConfig::default()).unwrap();

        assert!(matches!(
            device.set_stream(true),
            Err(SensorError::Precondition(PreconditionError::NotPowered))
        ));
        assert!(matches!(
            device.quick_stream(true),
            Err(SensorError::Precondition(PreconditionError::NotPowered))
        ));
    }

    #[test]
    fn test_full_lifecycle() {
        let (harness, device) = powered();

        device.set_stream(true).unwrap();
        assert_eq!(device.state().unwrap(), DeviceState::Streaming);
        assert_eq!(harness.bus.register(0x0100), Some(0x01));

        harness.journal.clear();
        device.set_stream(true).unwrap();
        assert!(harness.journal.writes().is_empty());

        device.set_stream(false).unwrap();
        assert_eq!(device.state().unwrap(), DeviceState::PoweredIdle);
        assert_eq!(harness.bus.register(0x0100), Some(0x00));

        device.set_power(false).unwrap();
        assert_eq!(device.state().unwrap(), DeviceState::Unpowered);
    }

    #[test]
    fn test_control_stored_while_unpowered_and_replayed() {
        let harness = Harness::new(&TEST_PROFILE);
        let device = harness.attach(SensorConfig::default()).unwrap();

        device.set_control(Control::Exposure(0x200)).unwrap();
        assert!(harness.journal.writes().is_empty());
        assert_eq!(device.control(ControlId::Exposure).unwrap(), 0x200);

        device.set_power(true).unwrap();
        device.set_stream(true).unwrap();
        assert!(harness
            .journal
            .writes()
            .contains(&(0x3500, vec![0x00, 0x20, 0x00])));
    }

    #[test]
    fn test_control_written_when_powered() {
        let (harness, device) = powered();

        device.set_control(Control::AnalogGain(0x40)).unwrap();
        assert_eq!(harness.journal.writes(), vec![(0x350a, vec![0x00, 0x40])]);
    }

    #[test]
    fn test_vblank_shrink_writes_exposure_before_vts() {
        let (harness, device) = powered();
        device.set_control(Control::VerticalBlank(1000)).unwrap();
        device.set_control(Control::Exposure(1500)).unwrap();
        harness.journal.clear();

        device.set_control(Control::VerticalBlank(82)).unwrap();
        assert_eq!(
            harness.journal.writes(),
            vec![
                (0x3500, vec![0x00, 0x31, 0xe0]),
                (0x380e, vec![0x03, 0x22]),
            ]
        );
        assert_eq!(device.control(ControlId::Exposure).unwrap(), 798);
    }

    #[test]
    fn test_rejected_control_changes_nothing() {
        let (harness, device) = powered();

        assert!(matches!(
            device.set_control(Control::DigitalGain(1024)),
            Err(SensorError::Range(_))
        ));
        assert!(matches!(
            device.set_control(Control::HorizontalBlank(10)),
            Err(SensorError::Precondition(PreconditionError::ReadOnlyControl(_)))
        ));
        assert_eq!(device.control(ControlId::DigitalGain).unwrap(), 256);
        assert!(harness.journal.writes().is_empty());
    }

    #[test]
    fn test_digital_gain_failure_keeps_stored_value() {
        let (harness, device) = powered();
        // hold start, R, G, B, then the hold end fails
        harness.bus.fail_write(4);

        let err = device.set_control(Control::DigitalGain(512)).unwrap_err();
        assert!(matches!(err, SensorError::Io(IoError::Bus { address: 0x3208, .. })));
        assert_eq!(device.control(ControlId::DigitalGain).unwrap(), 512);
        assert!(!harness.journal.writes().contains(&(0x3208, vec![0xa0])));
    }

    #[test]
    fn test_set_format_rejected_while_streaming() {
        let (_harness, device) = powered();
        device.set_stream(true).unwrap();

        assert!(matches!(
            device.set_format(640, 480),
            Err(SensorError::Precondition(PreconditionError::Streaming))
        ));
        assert_eq!(device.format().unwrap().width, 1280);
    }

    #[test]
    fn test_set_format_selects_and_retunes() {
        let (_harness, device) = powered();

        let probe = device.try_format(600, 400);
        assert_eq!((probe.width, probe.height), (640, 480));
        assert_eq!(device.format().unwrap().width, 1280);

        let mode = device.set_format(600, 400).unwrap();
        assert_eq!((mode.width, mode.height), (640, 480));
        assert_eq!(device.format().unwrap().height, 480);
        assert_eq!(
            device.control_range(ControlId::VerticalBlank).unwrap().min,
            0x322 - 480
        );
        assert_eq!(
            device.control(ControlId::HorizontalBlank).unwrap(),
            0x5c6 - 640
        );
    }

    #[test]
    fn test_stop_failure_still_idles() {
        let (harness, device) = powered();
        device.start_stream().unwrap();
        harness.bus.fail_writes_to(0x0100);

        assert!(device.stop_stream().is_err());
        assert_eq!(device.state().unwrap(), DeviceState::PoweredIdle);
    }

    #[test]
    fn test_power_off_while_streaming_stops_first() {
        let (harness, device) = powered();
        device.set_stream(true).unwrap();
        harness.journal.clear();

        device.set_power(false).unwrap();
        let events = harness.journal.events();
        assert_eq!(
            events.first(),
            Some(&Event::Write {
                reg: 0x0100,
                bytes: vec![0x00]
            })
        );
        assert!(events.contains(&Event::ClockOff));
        assert_eq!(device.state().unwrap(), DeviceState::Unpowered);
    }

    #[test]
    fn test_quick_stream_leaves_state_alone() {
        let (harness, device) = powered();

        device.quick_stream(true).unwrap();
        assert_eq!(harness.journal.writes(), vec![(0x0100, vec![0x01])]);
        assert_eq!(device.state().unwrap(), DeviceState::PoweredIdle);
    }

    #[test]
    fn test_flip_committed_at_stream_start() {
        let (harness, device) = powered();
        device.set_control(Control::VerticalFlip(true)).unwrap();
        assert!(harness.journal.writes().is_empty());

        device.set_stream(true).unwrap();
        assert_eq!(harness.bus.register(0x0101), Some(0x02));
        assert!(device.flip().unwrap().flip());
    }

    #[test]
    fn test_info_and_rates() {
        let harness = Harness::new(&TEST_PROFILE);
        let config = SensorConfig {
            module_name: "CMK-OT1607".to_string(),
            lens_name: "FV1".to_string(),
            ..SensorConfig::front(2, 1)
        };
        let device = harness.attach(config).unwrap();

        let info = device.module_info();
        assert_eq!(info.sensor, "mock");
        assert_eq!(info.module, "CMK-OT1607");
        assert_eq!(info.lens, "FV1");
        assert_eq!(device.link_frequency(), 180_000_000);
        assert_eq!(device.pixel_rate(), 36_000_000);
        assert_eq!(device.subdev_name("1-0036"), "m02_f_mock 1-0036");
        assert_eq!(device.enumerate_modes().len(), 2);
        assert_eq!(device.frame_interval().unwrap().denominator, 300_000);
    }

    #[test]
    fn test_drop_powers_down() {
        let (harness, device) = powered();
        device.set_stream(true).unwrap();
        harness.journal.clear();

        drop(device);
        let events = harness.journal.events();
        assert!(events.contains(&Event::Write {
            reg: 0x0100,
            bytes: vec![0x00]
        }));
        assert!(events.contains(&Event::ClockOff));
    }

    #[test]
    fn test_detach_then_no_double_shutdown() {
        let (harness, device) = powered();

        device.detach().unwrap();
        assert_eq!(harness.journal.count(|e| *e == Event::ClockOff), 1);
    }

    #[test]
    fn test_concurrent_control_writes() {
        let (_harness, device) = powered();
        let device = Arc::new(device);

        let handles: Vec<_> = (0..4u32)
            .map(|i| {
                let device = Arc::clone(&device);
                thread::spawn(move || {
                    for step in 0..25u32 {
                        let gain = 16 + i * 50 + step;
                        device.set_control(Control::AnalogGain(gain)).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let gain = device.control(ControlId::AnalogGain).unwrap();
        assert!((16..=248).contains(&gain));
    }
}
