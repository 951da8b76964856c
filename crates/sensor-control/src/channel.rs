//! Register channel over a two-wire bus
//!
//! Sensor registers live at 16-bit addresses sent big-endian. Values are one
//! to four bytes wide and travel most-significant byte first.

use std::time::Duration;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{Error as _, I2c, SevenBitAddress};
use tracing::trace;

use crate::error::IoError;

/// Sequence entry address meaning "sleep for `val` microseconds"
pub const REG_DELAY: u16 = 0xFFFE;

/// Sequence entry address terminating a register sequence
pub const REG_NULL: u16 = 0xFFFF;

/// One entry of a register sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegVal {
    pub addr: u16,
    pub val: u8,
}

impl RegVal {
    pub const END: RegVal = RegVal::new(REG_NULL, 0x00);

    pub const fn new(addr: u16, val: u8) -> Self {
        Self { addr, val }
    }

    /// Delay marker, `us` microseconds
    pub const fn delay(us: u8) -> Self {
        Self::new(REG_DELAY, us)
    }
}

/// Register value width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegWidth {
    Bits8,
    Bits16,
    Bits24,
    Bits32,
}

impl RegWidth {
    pub const fn bytes(self) -> usize {
        match self {
            RegWidth::Bits8 => 1,
            RegWidth::Bits16 => 2,
            RegWidth::Bits24 => 3,
            RegWidth::Bits32 => 4,
        }
    }
}

/// Typed register access to one sensor on a shared bus
pub struct RegisterChannel<I, D> {
    i2c: I,
    address: SevenBitAddress,
    delay: D,
}

impl<I: I2c, D: DelayNs> RegisterChannel<I, D> {
    /// Create a channel to the sensor at `address`
    pub fn new(i2c: I, address: SevenBitAddress, delay: D) -> Self {
        Self {
            i2c,
            address,
            delay,
        }
    }

    /// Bus address of the sensor
    pub fn address(&self) -> SevenBitAddress {
        self.address
    }

    /// Give back the bus and delay handles
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }

    /// Write the low `len` bytes of `value` to `reg`
    pub fn write(&mut self, reg: u16, len: usize, value: u32) -> Result<(), IoError> {
        check_len(reg, len)?;

        let mut frame = [0u8; 6];
        frame[..2].copy_from_slice(&reg.to_be_bytes());
        frame[2..2 + len].copy_from_slice(&value.to_be_bytes()[4 - len..]);

        trace!("write {:#06x} <- {:#x} ({} bytes)", reg, value, len);
        self.i2c
            .write(self.address, &frame[..2 + len])
            .map_err(|e| IoError::Bus {
                address: reg,
                kind: e.kind(),
            })
    }

    pub fn write_u8(&mut self, reg: u16, value: u8) -> Result<(), IoError> {
        self.write(reg, 1, u32::from(value))
    }

    /// Read `len` bytes from `reg`, assembled MSB first
    pub fn read(&mut self, reg: u16, len: usize) -> Result<u32, IoError> {
        check_len(reg, len)?;

        let mut value = [0u8; 4];
        self.i2c
            .write_read(self.address, &reg.to_be_bytes(), &mut value[4 - len..])
            .map_err(|e| IoError::Bus {
                address: reg,
                kind: e.kind(),
            })?;

        let value = u32::from_be_bytes(value);
        trace!("read {:#06x} -> {:#x} ({} bytes)", reg, value, len);
        Ok(value)
    }

    pub fn read_u8(&mut self, reg: u16) -> Result<u8, IoError> {
        let [.., low] = self.read(reg, 1)?.to_be_bytes();
        Ok(low)
    }

    /// Apply a register sequence in order.
    ///
    /// Stops at the first [`REG_NULL`] entry or the end of the slice and
    /// sleeps on [`REG_DELAY`] entries. The first failed write aborts the
    /// sequence; earlier writes stay applied.
    pub fn write_sequence(&mut self, regs: &[RegVal]) -> Result<(), IoError> {
        for entry in regs {
            match entry.addr {
                REG_NULL => break,
                REG_DELAY => self.delay.delay_us(u32::from(entry.val)),
                addr => self.write_u8(addr, entry.val)?,
            }
        }
        Ok(())
    }

    /// Sleep on the channel's delay source
    pub fn pause(&mut self, duration: Duration) {
        self.delay
            .delay_us(u32::try_from(duration.as_micros()).unwrap_or(u32::MAX));
    }
}

fn check_len(reg: u16, len: usize) -> Result<(), IoError> {
    if (1..=4).contains(&len) {
        Ok(())
    } else {
        Err(IoError::InvalidLength { address: reg, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};
    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};

    const ADDR: u8 = 0x36;

    fn channel(expectations: &[I2cTransaction]) -> RegisterChannel<I2cMock, NoopDelay> {
        RegisterChannel::new(I2cMock::new(expectations), ADDR, NoopDelay::new())
    }

    fn finish(channel: RegisterChannel<I2cMock, NoopDelay>) {
        let (mut i2c, _) = channel.release();
        i2c.done();
    }

    #[test]
    fn test_write_sends_address_then_value_msb_first() {
        let mut ch = channel(&[
            I2cTransaction::write(ADDR, vec![0x35, 0x00, 0x00, 0x13, 0x10]),
            I2cTransaction::write(ADDR, vec![0x38, 0x0e, 0x03, 0x22]),
            I2cTransaction::write(ADDR, vec![0x01, 0x00, 0x01]),
        ]);

        ch.write(0x3500, 3, 0x131 << 4).unwrap();
        ch.write(0x380e, 2, 0x322).unwrap();
        ch.write_u8(0x0100, 0x01).unwrap();
        finish(ch);
    }

    #[test]
    fn test_write_truncates_to_length() {
        let mut ch = channel(&[I2cTransaction::write(ADDR, vec![0x35, 0x0a, 0x34])]);
        ch.write(0x350a, 1, 0x1234).unwrap();
        finish(ch);
    }

    #[test]
    fn test_read_assembles_big_endian() {
        let mut ch = channel(&[
            I2cTransaction::write_read(ADDR, vec![0x30, 0x0a], vec![0x97, 0x34]),
            I2cTransaction::write_read(ADDR, vec![0x03, 0xf0], vec![0x05]),
        ]);

        assert_eq!(ch.read(0x300a, 2).unwrap(), 0x9734);
        assert_eq!(ch.read_u8(0x03f0).unwrap(), 0x05);
        finish(ch);
    }

    #[test]
    fn test_invalid_length_rejected_without_bus_traffic() {
        let mut ch = channel(&[]);

        assert_eq!(
            ch.write(0x0100, 0, 1),
            Err(IoError::InvalidLength {
                address: 0x0100,
                len: 0
            })
        );
        assert!(matches!(
            ch.read(0x0100, 5),
            Err(IoError::InvalidLength { len: 5, .. })
        ));
        finish(ch);
    }

    #[test]
    fn test_bus_failure_reports_register() {
        let nack = ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data);
        let mut ch = channel(&[I2cTransaction::write(ADDR, vec![0x01, 0x00, 0x01]).with_error(nack)]);

        let err = ch.write_u8(0x0100, 0x01).unwrap_err();
        assert_eq!(
            err,
            IoError::Bus {
                address: 0x0100,
                kind: nack
            }
        );
        finish(ch);
    }

    #[test]
    fn test_sequence_stops_at_terminator() {
        let mut ch = channel(&[
            I2cTransaction::write(ADDR, vec![0x01, 0x03, 0x01]),
            I2cTransaction::write(ADDR, vec![0x01, 0x00, 0x00]),
        ]);

        ch.write_sequence(&[
            RegVal::new(0x0103, 0x01),
            RegVal::delay(10),
            RegVal::new(0x0100, 0x00),
            RegVal::END,
            RegVal::new(0x3000, 0xff),
        ])
        .unwrap();
        finish(ch);
    }

    #[test]
    fn test_sequence_without_terminator_runs_to_end() {
        let mut ch = channel(&[I2cTransaction::write(ADDR, vec![0x30, 0x00, 0x0f])]);
        ch.write_sequence(&[RegVal::new(0x3000, 0x0f)]).unwrap();
        finish(ch);
    }

    #[test]
    fn test_sequence_aborts_on_first_failure() {
        let mut ch = channel(&[
            I2cTransaction::write(ADDR, vec![0x30, 0x00, 0x01]),
            I2cTransaction::write(ADDR, vec![0x30, 0x01, 0x02]).with_error(ErrorKind::Other),
        ]);

        let err = ch
            .write_sequence(&[
                RegVal::new(0x3000, 0x01),
                RegVal::new(0x3001, 0x02),
                RegVal::new(0x3002, 0x03),
            ])
            .unwrap_err();
        assert!(matches!(err, IoError::Bus { address: 0x3001, .. }));
        finish(ch);
    }

    #[test]
    fn test_empty_sequence_is_noop() {
        let mut ch = channel(&[]);
        ch.write_sequence(&[]).unwrap();
        ch.write_sequence(&[RegVal::END]).unwrap();
        finish(ch);
    }

    #[test]
    fn test_reg_width_bytes() {
        assert_eq!(RegWidth::Bits8.bytes(), 1);
        assert_eq!(RegWidth::Bits24.bytes(), 3);
        assert_eq!(RegWidth::Bits32.bytes(), 4);
    }
}
