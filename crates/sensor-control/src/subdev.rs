//! Host-facing sensor contract

use serde::{Deserialize, Serialize};

use crate::controls::{Control, ControlId, ControlRange};
use crate::error::Result;
use crate::mode::{Format, FrameInterval, Mode};

/// Names reported for module identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleInfo {
    pub sensor: String,
    pub module: String,
    pub lens: String,
}

/// Operations a capture host performs on an attached sensor.
///
/// Every method is safe to call from several threads; calls on one device
/// are serialized.
pub trait SensorSubdev {
    /// Power the sensor up (identity check and init registers included) or down
    fn set_power(&self, on: bool) -> Result<()>;

    /// Supported modes, in catalogue order
    fn enumerate_modes(&self) -> &'static [Mode];

    /// Active format
    fn format(&self) -> Result<Format>;

    /// Format that `set_format` would select, without changing anything
    fn try_format(&self, width: u32, height: u32) -> Format;

    /// Select the closest mode to the requested resolution
    fn set_format(&self, width: u32, height: u32) -> Result<&'static Mode>;

    fn set_stream(&self, on: bool) -> Result<()>;

    fn start_stream(&self) -> Result<()> {
        self.set_stream(true)
    }

    /// Stop streaming; the device ends up idle even if the stop write fails
    fn stop_stream(&self) -> Result<()> {
        self.set_stream(false)
    }

    fn set_control(&self, control: Control) -> Result<()>;

    fn control(&self, id: ControlId) -> Result<u32>;

    fn control_range(&self, id: ControlId) -> Result<ControlRange>;

    fn frame_interval(&self) -> Result<FrameInterval>;

    /// Toggle the stream register directly, leaving the state machine alone
    fn quick_stream(&self, on: bool) -> Result<()>;

    fn module_info(&self) -> ModuleInfo;

    /// Link frequency in Hz
    fn link_frequency(&self) -> u64;

    /// Pixel rate in Hz
    fn pixel_rate(&self) -> u64;
}
