//! Chip profiles
//!
//! A [`ChipProfile`] is the static description of one sensor model. The
//! engine is generic; everything chip-specific lives here.

use std::time::Duration;

use crate::channel::RegVal;
use crate::controls::ControlLimits;
use crate::identity::ChipIdentity;
use crate::layout::{ControlRegisters, FlipRegister};
use crate::mode::{BusFormat, Catalogue, ModeTable};
use crate::power::PowerTiming;

/// Stream control register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamRegister {
    pub address: u16,
    pub streaming: u8,
    pub standby: u8,
    /// Settle time between the last setup write and the stream-on write
    pub on_delay: Option<Duration>,
}

/// Static description of one sensor model
#[derive(Debug, Clone, Copy)]
pub struct ChipProfile {
    /// Short chip name used in device names and logs
    pub name: &'static str,
    pub bus_format: BusFormat,
    pub identity: ChipIdentity,
    /// Supply names in power-on order
    pub supplies: &'static [&'static str],
    pub power: PowerTiming,
    /// Link frequency of the data lanes in Hz
    pub link_frequency: u64,
    /// Registers programmed after every power-up
    pub init_sequence: &'static [RegVal],
    pub catalogues: &'static [Catalogue],
    pub limits: ControlLimits,
    pub registers: ControlRegisters,
    pub stream: StreamRegister,
    /// Register the mirror/flip state is committed to when streaming starts
    pub flip: Option<FlipRegister>,
}

impl ChipProfile {
    /// Mode catalogue for a data-lane count
    pub fn mode_table(&self, lanes: u32) -> Option<ModeTable> {
        ModeTable::resolve(self.catalogues, lanes)
    }

    /// Pixel rate in Hz: `link_frequency * 2 * lanes / bits_per_sample`
    pub fn pixel_rate(&self, lanes: u32) -> u64 {
        self.link_frequency * 2 * u64::from(lanes) / u64::from(self.bus_format.bits_per_sample())
    }

    /// Data-lane counts this chip has catalogues for
    pub fn lane_counts(&self) -> impl Iterator<Item = u32> + '_ {
        self.catalogues.iter().map(|catalogue| catalogue.lanes)
    }
}
