//! Power sequencing
//!
//! Brings the sensor's input clock, reset and power-down lines, and supplies
//! up and down in the order the silicon requires. A failure part-way through
//! power-on releases whatever was already enabled.

use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error as _, OutputPin, PinState};
use tracing::{debug, error, info, warn};

use crate::error::{PowerError, ResourceError};

/// Sensor input clock
pub trait Clock: Send {
    fn set_rate(&mut self, hz: u32) -> Result<(), ResourceError>;
    /// Rate the clock actually runs at
    fn rate(&self) -> u32;
    fn enable(&mut self) -> Result<(), ResourceError>;
    fn disable(&mut self);
}

/// Named supply rail
pub trait Regulator: Send {
    fn name(&self) -> &str;
    fn enable(&mut self) -> Result<(), ResourceError>;
    fn disable(&mut self) -> Result<(), ResourceError>;
}

/// Pin-mux configuration of the sensor pads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinConfig {
    Default,
    Sleep,
}

/// Pin-mux handle
pub trait PinControl: Send {
    fn has_state(&self, state: PinConfig) -> bool;
    fn select(&mut self, state: PinConfig) -> Result<(), ResourceError>;
}

/// Reset or power-down control line
pub trait ControlLine: Send {
    fn drive(&mut self, level: PinState) -> Result<(), ResourceError>;
}

impl<P> ControlLine for P
where
    P: OutputPin + Send,
{
    fn drive(&mut self, level: PinState) -> Result<(), ResourceError> {
        self.set_state(level)
            .map_err(|e| ResourceError::new(format!("{:?}", e.kind())))
    }
}

/// Hardware handles owned by one sensor instance
pub struct PowerResources {
    pub clock: Box<dyn Clock>,
    /// Active-low reset line, absent when strapped on the board
    pub reset: Option<Box<dyn ControlLine>>,
    /// Active-low power-down line
    pub powerdown: Option<Box<dyn ControlLine>>,
    pub supplies: Vec<Box<dyn Regulator>>,
    pub pins: Option<Box<dyn PinControl>>,
    pub delay: Box<dyn DelayNs + Send>,
}

/// Chip-specific power timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerTiming {
    /// Input clock rate in Hz
    pub xvclk_hz: u32,
    /// When set, power-down is driven low before the supplies and held this long
    pub pre_supply_settle: Option<Duration>,
    /// Gap between consecutive supply enables
    pub inter_supply_settle: Duration,
    /// Wait after the last supply before releasing reset
    pub post_supply_settle: Duration,
    /// Wait after releasing reset
    pub reset_settle: Duration,
    /// Input clock cycles the chip needs before its first bus access
    pub boot_cycles: u32,
    /// Wait after each supply disable, in disable order (last supply first)
    pub supply_off_settle: &'static [Duration],
}

impl PowerTiming {
    /// Microseconds covering `boot_cycles` input clock cycles, rounded up
    pub fn boot_delay(&self) -> Duration {
        let cycles_per_us = (self.xvclk_hz / 1_000_000).max(1);
        Duration::from_micros(u64::from(self.boot_cycles.div_ceil(cycles_per_us)))
    }
}

/// Drives [`PowerResources`] through the power-on and power-off sequences
pub struct PowerSequencer {
    resources: PowerResources,
    timing: PowerTiming,
    /// Supplies currently enabled, in enable order
    enabled_supplies: usize,
    clock_enabled: bool,
    powered: bool,
}

impl PowerSequencer {
    /// Take ownership of `resources`, ordering supplies as `supply_names` declares
    pub fn new(
        mut resources: PowerResources,
        timing: PowerTiming,
        supply_names: &[&str],
    ) -> Result<Self, PowerError> {
        let mut ordered = Vec::with_capacity(supply_names.len());
        for name in supply_names {
            let index = resources
                .supplies
                .iter()
                .position(|supply| supply.name() == *name)
                .ok_or_else(|| PowerError::MissingSupply((*name).to_string()))?;
            ordered.push(resources.supplies.swap_remove(index));
        }
        if !resources.supplies.is_empty() {
            debug!(
                "Ignoring {} undeclared supplies",
                resources.supplies.len()
            );
        }
        resources.supplies = ordered;

        Ok(Self {
            resources,
            timing,
            enabled_supplies: 0,
            clock_enabled: false,
            powered: false,
        })
    }

    pub fn is_powered(&self) -> bool {
        self.powered
    }

    pub fn timing(&self) -> &PowerTiming {
        &self.timing
    }

    /// Run the power-on sequence. A no-op when already powered.
    pub fn power_on(&mut self) -> Result<(), PowerError> {
        if self.powered {
            return Ok(());
        }

        if let Some(pins) = self.resources.pins.as_mut() {
            if pins.has_state(PinConfig::Default) {
                if let Err(e) = pins.select(PinConfig::Default) {
                    error!("Failed to select default pin state: {}", e);
                }
            }
        }

        let clock = &mut self.resources.clock;
        if let Err(e) = clock.set_rate(self.timing.xvclk_hz) {
            warn!("Failed to set input clock to {} Hz: {}", self.timing.xvclk_hz, e);
        }
        if clock.rate() != self.timing.xvclk_hz {
            warn!(
                "Input clock runs at {} Hz, expected {} Hz",
                clock.rate(),
                self.timing.xvclk_hz
            );
        }
        clock.enable().map_err(|e| {
            error!("Failed to enable input clock: {}", e);
            PowerError::Clock(e)
        })?;
        self.clock_enabled = true;

        if let Err(e) = self.bring_up() {
            error!("Power-on failed: {}", e);
            self.unwind();
            return Err(e);
        }

        self.powered = true;
        info!("Sensor powered on");
        Ok(())
    }

    /// Run the power-off sequence. A no-op when already off; never fails.
    pub fn power_off(&mut self) {
        if !self.powered {
            return;
        }

        if let Some(line) = self.resources.powerdown.as_mut() {
            if let Err(e) = line.drive(PinState::Low) {
                warn!("Failed to assert power-down: {}", e);
            }
        }
        self.resources.clock.disable();
        self.clock_enabled = false;
        if let Some(line) = self.resources.reset.as_mut() {
            if let Err(e) = line.drive(PinState::Low) {
                warn!("Failed to assert reset: {}", e);
            }
        }
        if let Some(pins) = self.resources.pins.as_mut() {
            if pins.has_state(PinConfig::Sleep) {
                if let Err(e) = pins.select(PinConfig::Sleep) {
                    debug!("Failed to select sleep pin state: {}", e);
                }
            }
        }
        self.disable_supplies();

        self.powered = false;
        info!("Sensor powered off");
    }

    fn bring_up(&mut self) -> Result<(), PowerError> {
        drive(&mut self.resources.reset, "reset", PinState::Low)?;
        if let Some(settle) = self.timing.pre_supply_settle {
            drive(&mut self.resources.powerdown, "powerdown", PinState::Low)?;
            self.settle(settle);
        }

        for index in 0..self.resources.supplies.len() {
            if index > 0 {
                self.settle(self.timing.inter_supply_settle);
            }
            let supply = &mut self.resources.supplies[index];
            supply.enable().map_err(|source| PowerError::Regulator {
                name: supply.name().to_string(),
                source,
            })?;
            self.enabled_supplies = index + 1;
        }
        self.settle(self.timing.post_supply_settle);

        drive(&mut self.resources.reset, "reset", PinState::High)?;
        self.settle(self.timing.reset_settle);

        drive(&mut self.resources.powerdown, "powerdown", PinState::High)?;
        self.settle(self.timing.boot_delay());
        Ok(())
    }

    /// Release whatever a failed power-on left enabled
    fn unwind(&mut self) {
        self.disable_supplies();
        if self.clock_enabled {
            self.resources.clock.disable();
            self.clock_enabled = false;
        }
        let lines = [
            ("reset", &mut self.resources.reset),
            ("powerdown", &mut self.resources.powerdown),
        ];
        for (name, line) in lines {
            if let Some(line) = line.as_mut() {
                if let Err(e) = line.drive(PinState::Low) {
                    warn!("Failed to drive {} low during unwind: {}", name, e);
                }
            }
        }
    }

    fn disable_supplies(&mut self) {
        let mut step = 0;
        while self.enabled_supplies > 0 {
            self.enabled_supplies -= 1;
            let supply = &mut self.resources.supplies[self.enabled_supplies];
            if let Err(e) = supply.disable() {
                warn!("Failed to disable supply {}: {}", supply.name(), e);
            }
            if let Some(settle) = self.timing.supply_off_settle.get(step).copied() {
                self.settle(settle);
            }
            step += 1;
        }
    }

    fn settle(&mut self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        let us = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.resources.delay.delay_us(us);
    }
}

fn drive(
    line: &mut Option<Box<dyn ControlLine>>,
    name: &'static str,
    level: PinState,
) -> Result<(), PowerError> {
    match line {
        Some(line) => line
            .drive(level)
            .map_err(|source| PowerError::Gpio { line: name, source }),
        None => Ok(()),
    }
}
