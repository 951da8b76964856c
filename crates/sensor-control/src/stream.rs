//! Streaming state machine
//!
//! `Unpowered -> PoweredIdle -> Streaming` and back. Start replays the mode
//! registers and every control before the stream-on write; any failure leaves
//! the state where it was. Stop always lands in `PoweredIdle`.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::channel::RegisterChannel;
use crate::controls::ControlGraph;
use crate::error::{IoError, PreconditionError, SensorError};
use crate::mode::Mode;
use crate::profile::ChipProfile;

/// Host-visible device state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceState {
    #[default]
    Unpowered,
    PoweredIdle,
    Streaming,
}

impl DeviceState {
    pub fn is_powered(self) -> bool {
        self != DeviceState::Unpowered
    }

    pub fn is_streaming(self) -> bool {
        self == DeviceState::Streaming
    }
}

/// Program `mode` and the current controls, then start the stream
pub fn start_streaming<I: I2c, D: DelayNs>(
    state: &mut DeviceState,
    channel: &mut RegisterChannel<I, D>,
    profile: &ChipProfile,
    mode: &Mode,
    controls: &ControlGraph,
) -> Result<(), SensorError> {
    match *state {
        DeviceState::Streaming => return Ok(()),
        DeviceState::Unpowered => return Err(PreconditionError::NotPowered.into()),
        DeviceState::PoweredIdle => {}
    }

    let result = program(channel, profile, mode, controls);
    if let Err(e) = &result {
        error!("Failed to start {} stream: {}", profile.name, e);
        return result;
    }

    *state = DeviceState::Streaming;
    debug!("{} streaming {}x{}", profile.name, mode.width, mode.height);
    Ok(())
}

/// Stop the stream. The state becomes `PoweredIdle` even when the standby
/// write fails; the failure is still returned.
pub fn stop_streaming<I: I2c, D: DelayNs>(
    state: &mut DeviceState,
    channel: &mut RegisterChannel<I, D>,
    profile: &ChipProfile,
) -> Result<(), IoError> {
    if *state != DeviceState::Streaming {
        return Ok(());
    }

    let result = channel.write_u8(profile.stream.address, profile.stream.standby);
    if let Err(e) = &result {
        warn!("Failed to stop {} stream: {}", profile.name, e);
    }
    *state = DeviceState::PoweredIdle;
    debug!("{} stream stopped", profile.name);
    result
}

fn program<I: I2c, D: DelayNs>(
    channel: &mut RegisterChannel<I, D>,
    profile: &ChipProfile,
    mode: &Mode,
    controls: &ControlGraph,
) -> Result<(), SensorError> {
    channel.write_sequence(mode.register_sequence)?;

    if let Some(flip) = &profile.flip {
        flip.write(channel, controls.flip())?;
    }

    for control in controls.setup_controls() {
        profile
            .registers
            .apply(channel, controls.frame_height(), control)?;
    }

    if let Some(delay) = profile.stream.on_delay {
        channel.pause(delay);
    }
    channel.write_u8(profile.stream.address, profile.stream.streaming)?;
    Ok(())
}
