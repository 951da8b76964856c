//! Sensor control error types

use embedded_hal::i2c::ErrorKind;
use thiserror::Error;

use crate::controls::ControlId;

/// Failure reported by a clock, regulator, pin-control or GPIO handle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ResourceError(pub String);

impl ResourceError {
    /// Create a resource error from any message
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Register bus transaction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IoError {
    /// The bus rejected or truncated the transfer
    #[error("Bus transfer at register {address:#06x} failed: {kind}")]
    Bus { address: u16, kind: ErrorKind },

    /// Register accesses carry between one and four bytes
    #[error("Invalid access length {len} at register {address:#06x}")]
    InvalidLength { address: u16, len: usize },
}

/// Errors raised while sequencing clock, lines and supplies
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PowerError {
    /// The input clock could not be enabled
    #[error("Failed to enable input clock: {0}")]
    Clock(ResourceError),

    /// A supply failed to come up
    #[error("Failed to enable supply {name}: {source}")]
    Regulator { name: String, source: ResourceError },

    /// A reset or power-down line could not be driven
    #[error("Failed to drive {line} line: {source}")]
    Gpio {
        line: &'static str,
        source: ResourceError,
    },

    /// The resource provider did not hand over a declared supply
    #[error("Supply {0} was not provided")]
    MissingSupply(String),
}

/// The chip answered with an unexpected identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unexpected sensor id {found:#06x}, expected {expected:#06x}")]
pub struct IdentityError {
    pub expected: u16,
    pub found: u16,
}

/// A control value outside its declared bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{control} value {value} outside [{min}, {max}]")]
pub struct RangeError {
    pub control: ControlId,
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

/// Operation not valid in the current device state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("Sensor is not powered")]
    NotPowered,

    #[error("Sensor is streaming")]
    Streaming,

    #[error("Control {0} is read-only")]
    ReadOnlyControl(ControlId),

    #[error("Control {0} is not supported by this sensor")]
    UnsupportedControl(ControlId),
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{sensor} has no mode catalogue for {lanes} data lane(s)")]
    UnsupportedLaneCount { sensor: &'static str, lanes: u32 },

    #[error("Failed to load sensor configuration: {0}")]
    Load(#[from] ::config::ConfigError),
}

/// Top-level error for every public sensor operation
#[derive(Debug, Error)]
pub enum SensorError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Power(#[from] PowerError),

    #[error(transparent)]
    Identity(#[from] IdentityError),

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Device state lock poisoned")]
    LockPoisoned,
}

/// Result type for sensor operations
pub type Result<T> = std::result::Result<T, SensorError>;
