//! Chip identity check

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;
use tracing::{error, info};

use crate::channel::RegisterChannel;
use crate::error::{IdentityError, SensorError};

/// Where a chip keeps its identifier and what it should read back
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipIdentity {
    /// Register holding the identifier's high byte
    pub high: u16,
    /// Register holding the identifier's low byte
    pub low: u16,
    pub expected: u16,
}

impl ChipIdentity {
    /// Identifier split over two consecutive registers
    pub const fn at(address: u16, expected: u16) -> Self {
        Self {
            high: address,
            low: address + 1,
            expected,
        }
    }

    /// Read the identifier and compare it with the expected value
    pub fn check_identity<I: I2c, D: DelayNs>(
        &self,
        channel: &mut RegisterChannel<I, D>,
    ) -> Result<(), SensorError> {
        let high = channel.read_u8(self.high)?;
        let low = channel.read_u8(self.low)?;
        let found = u16::from_be_bytes([high, low]);

        if found != self.expected {
            error!(
                "Unexpected sensor id {:#06x}, expected {:#06x}",
                found, self.expected
            );
            return Err(IdentityError {
                expected: self.expected,
                found,
            }
            .into());
        }

        info!("Detected sensor id {:#06x}", found);
        Ok(())
    }
}
