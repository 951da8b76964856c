//! Chip register layout for controls
//!
//! Maps control values onto the register writes a particular chip expects.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::channel::{RegWidth, RegisterChannel};
use crate::controls::{Control, FlipBits};
use crate::error::IoError;

/// How a multi-byte field goes out on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    /// One transfer, value MSB first
    Burst,
    /// One single-byte transfer per consecutive register, high byte first
    PerByte,
}

/// A control value's home in the register map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterField {
    pub address: u16,
    pub width: RegWidth,
    /// Left shift applied to the value before writing
    pub shift: u32,
    pub encoding: FieldEncoding,
}

impl RegisterField {
    pub const fn burst(address: u16, width: RegWidth) -> Self {
        Self {
            address,
            width,
            shift: 0,
            encoding: FieldEncoding::Burst,
        }
    }

    pub const fn per_byte(address: u16, width: RegWidth) -> Self {
        Self {
            address,
            width,
            shift: 0,
            encoding: FieldEncoding::PerByte,
        }
    }

    pub const fn shifted(self, shift: u32) -> Self {
        Self { shift, ..self }
    }

    pub fn write<I: I2c, D: DelayNs>(
        &self,
        channel: &mut RegisterChannel<I, D>,
        value: u32,
    ) -> Result<(), IoError> {
        let raw = value.checked_shl(self.shift).unwrap_or(0);
        let len = self.width.bytes();
        match self.encoding {
            FieldEncoding::Burst => channel.write(self.address, len, raw),
            FieldEncoding::PerByte => {
                for (offset, byte) in (0u16..).zip(&raw.to_be_bytes()[4 - len..]) {
                    channel.write_u8(self.address + offset, *byte)?;
                }
                Ok(())
            }
        }
    }
}

/// Frame length register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VtsRegister {
    pub field: RegisterField,
    /// Lines added to `height + vblank` before writing
    pub offset: u32,
    /// Largest value the register accepts
    pub max: u32,
}

impl VtsRegister {
    pub fn write<I: I2c, D: DelayNs>(
        &self,
        channel: &mut RegisterChannel<I, D>,
        frame_height: u32,
        vblank: u32,
    ) -> Result<(), IoError> {
        let vts = (frame_height + vblank + self.offset).min(self.max);
        self.field.write(channel, vts)
    }
}

/// Per-channel white-balance gains applied atomically through a group hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitalGainGroup {
    pub group_register: u16,
    pub hold_start: u8,
    pub hold_end: u8,
    pub launch: u8,
    /// Red, green and blue gain registers
    pub channels: [RegisterField; 3],
}

impl DigitalGainGroup {
    /// Open the hold, write all channels, close and launch. Stops at the
    /// first failure; the group is then left open until the next write.
    pub fn write<I: I2c, D: DelayNs>(
        &self,
        channel: &mut RegisterChannel<I, D>,
        gain: u32,
    ) -> Result<(), IoError> {
        channel.write_u8(self.group_register, self.hold_start)?;
        for field in &self.channels {
            field.write(channel, gain)?;
        }
        channel.write_u8(self.group_register, self.hold_end)?;
        channel.write_u8(self.group_register, self.launch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestPatternRegister {
    pub address: u16,
    pub enable: u8,
    /// Position of the bar-type field
    pub bar_shift: u8,
}

impl TestPatternRegister {
    /// Pattern 0 disables; pattern `n` selects bar type `n - 1`
    pub fn encode(&self, pattern: u32) -> u8 {
        match pattern {
            0 => 0,
            n => {
                let bar = u8::try_from(n - 1).unwrap_or(u8::MAX);
                (bar << self.bar_shift) | self.enable
            }
        }
    }
}

/// Mirror/flip register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlipRegister {
    pub address: u16,
    pub mirror: u8,
    pub flip: u8,
}

impl FlipRegister {
    pub fn encode(&self, bits: FlipBits) -> u8 {
        let mut value = 0;
        if bits.mirror() {
            value |= self.mirror;
        }
        if bits.flip() {
            value |= self.flip;
        }
        value
    }

    pub fn write<I: I2c, D: DelayNs>(
        &self,
        channel: &mut RegisterChannel<I, D>,
        bits: FlipBits,
    ) -> Result<(), IoError> {
        channel.write_u8(self.address, self.encode(bits))
    }
}

/// Register homes for every control a chip exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlRegisters {
    pub exposure: RegisterField,
    pub analog_gain: RegisterField,
    pub digital_gain: Option<DigitalGainGroup>,
    pub vts: VtsRegister,
    pub test_pattern: Option<TestPatternRegister>,
}

impl ControlRegisters {
    /// Write one control value. Controls without a register are accepted
    /// without bus traffic.
    pub fn apply<I: I2c, D: DelayNs>(
        &self,
        channel: &mut RegisterChannel<I, D>,
        frame_height: u32,
        control: Control,
    ) -> Result<(), IoError> {
        match control {
            Control::Exposure(lines) => self.exposure.write(channel, lines),
            Control::AnalogGain(gain) => self.analog_gain.write(channel, gain),
            Control::DigitalGain(gain) => match &self.digital_gain {
                Some(group) => group.write(channel, gain),
                None => Ok(()),
            },
            Control::VerticalBlank(vblank) => self.vts.write(channel, frame_height, vblank),
            Control::TestPattern(pattern) => match &self.test_pattern {
                Some(reg) => channel.write_u8(reg.address, reg.encode(pattern)),
                None => Ok(()),
            },
            Control::HorizontalBlank(_) | Control::HorizontalFlip(_) | Control::VerticalFlip(_) => {
                Ok(())
            }
        }
    }
}
