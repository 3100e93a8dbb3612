//! Register access layer
//!
//! Every register access is one 2-byte frame with chip-select held for the
//! whole frame:
//!
//! ```text
//!            byte 1                         byte 2
//! MOSI   0 | R | A4 A3 A2 A1 A0 | 0     data (write) / 0x00 (read)
//! MISO   status (FAULT, top two bits high)   register data
//! ```
//!
//! For a write, byte 2 on MISO is the register's previous value. The device
//! only latches a write when chip-select is released, so every frame is
//! closed before returning, including frames that failed part way.

use drv8461_core::registers::{Register, ADDRESS_MASK};
use drv8461_hal::ByteTransport;

use crate::fmt::trace;

/// Read marker in the unshifted header
pub const READ_FLAG: u8 = 0x20;

/// First frame byte for a register read
pub const fn read_header(addr: u8) -> u8 {
    (READ_FLAG | (addr & ADDRESS_MASK)) << 1
}

/// First frame byte for a register write
pub const fn write_header(addr: u8) -> u8 {
    (addr & ADDRESS_MASK) << 1
}

/// Register reads and writes over a [`ByteTransport`]
pub struct RegisterBus<T: ByteTransport> {
    transport: T,
    last_status: u8,
}

impl<T: ByteTransport> RegisterBus<T> {
    /// Wrap a transport; no bus traffic
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            last_status: 0,
        }
    }

    /// Status byte returned by the most recent frame
    ///
    /// Same flags as the FAULT register, except the upper two bits are
    /// always set. Zero until the first frame.
    pub fn last_status(&self) -> u8 {
        self.last_status
    }

    /// Read a register by raw address
    ///
    /// The address is truncated to the 5-bit frame field; it is not
    /// validated.
    pub fn read_register(&mut self, addr: u8) -> Result<u8, T::Error> {
        self.frame(read_header(addr), 0x00)
    }

    /// Write a register by raw address, returning its previous value
    ///
    /// The address is truncated to the 5-bit frame field; it is not
    /// validated.
    pub fn write_register(&mut self, addr: u8, value: u8) -> Result<u8, T::Error> {
        self.frame(write_header(addr), value)
    }

    /// Read a register
    pub fn read(&mut self, reg: Register) -> Result<u8, T::Error> {
        self.read_register(reg.addr())
    }

    /// Write a register, returning its previous value
    pub fn write(&mut self, reg: Register, value: u8) -> Result<u8, T::Error> {
        self.write_register(reg.addr(), value)
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Release the transport
    pub fn release(self) -> T {
        self.transport
    }

    fn frame(&mut self, header: u8, payload: u8) -> Result<u8, T::Error> {
        self.transport.begin_transaction()?;
        let exchanged = self.exchange(header, payload);
        let released = self.transport.end_transaction();

        let data = exchanged?;
        released?;

        trace!(
            "frame {=u8:#x} {=u8:#x} -> status {=u8:#x} data {=u8:#x}",
            header,
            payload,
            self.last_status,
            data
        );
        Ok(data)
    }

    fn exchange(&mut self, header: u8, payload: u8) -> Result<u8, T::Error> {
        self.last_status = self.transport.exchange_byte(header)?;
        self.transport.exchange_byte(payload)
    }
}
