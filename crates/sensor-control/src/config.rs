//! Per-instance module configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which side of the device the camera module faces
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Back,
    Front,
}

impl Facing {
    /// Single-letter tag used in device names
    pub const fn tag(self) -> char {
        match self {
            Facing::Back => 'b',
            Facing::Front => 'f',
        }
    }
}

/// Board description of one camera module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConfig {
    /// Module slot number
    pub module_index: u32,
    pub module_facing: Facing,
    /// Camera module name
    pub module_name: String,
    /// Lens name
    pub lens_name: String,
    /// Data lanes wired between sensor and receiver
    pub lane_count: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            module_index: 0,
            module_facing: Facing::Back,
            module_name: "default".to_string(),
            lens_name: "default".to_string(),
            lane_count: 1,
        }
    }
}

impl SensorConfig {
    /// Load from a file, overlaid with `SENSOR_*` environment variables
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path.as_ref()))
            .add_source(::config::Environment::with_prefix("SENSOR"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Parse a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from_str(toml, ::config::FileFormat::Toml))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Host-visible device name, `m<index>_<b|f>_<sensor> <device>`
    pub fn subdev_name(&self, sensor: &str, device: &str) -> String {
        format!(
            "m{:02}_{}_{} {}",
            self.module_index,
            self.module_facing.tag(),
            sensor,
            device
        )
    }

    /// Front-facing module preset
    pub fn front(module_index: u32, lane_count: u32) -> Self {
        Self {
            module_index,
            module_facing: Facing::Front,
            lane_count,
            ..Default::default()
        }
    }
}
