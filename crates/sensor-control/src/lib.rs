//! Image Sensor Control Core
//!
//! Chip-independent engine for raw Bayer camera sensors on a two-wire
//! register bus: power sequencing, identity check, mode selection, control
//! ranges and the streaming state machine. Individual chips are described
//! by a static [`ChipProfile`].

mod channel;
mod config;
mod controls;
mod device;
mod error;
mod identity;
mod layout;
mod mode;
mod power;
mod profile;
mod stream;
mod subdev;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use channel::{RegVal, RegWidth, RegisterChannel, REG_DELAY, REG_NULL};
pub use config::{Facing, SensorConfig};
pub use controls::{Control, ControlGraph, ControlId, ControlLimits, ControlRange, FlipBits};
pub use device::SensorDevice;
pub use error::{
    ConfigError, IdentityError, IoError, PowerError, PreconditionError, RangeError, ResourceError,
    Result, SensorError,
};
pub use identity::ChipIdentity;
pub use layout::{
    ControlRegisters, DigitalGainGroup, FieldEncoding, FlipRegister, RegisterField,
    TestPatternRegister, VtsRegister,
};
pub use mode::{find_best_fit, BusFormat, Catalogue, Format, FrameInterval, Mode, ModeTable};
pub use power::{
    Clock, ControlLine, PinConfig, PinControl, PowerResources, PowerSequencer, PowerTiming,
    Regulator,
};
pub use profile::{ChipProfile, StreamRegister};
pub use stream::{start_streaming, stop_streaming, DeviceState};
pub use subdev::{ModuleInfo, SensorSubdev};
