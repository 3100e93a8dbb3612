//! Byte transport
//!
//! The register protocol is built from single-byte exchanges made while
//! chip-select is held asserted. [`ByteTransport`] is that capability;
//! [`SelectedBus`] implements it on top of any [`SpiBus`] and chip-select
//! [`OutputPin`].

use crate::gpio::{ChipSelect, OutputPin};
use crate::spi::SpiBus;

/// Synchronous, ordering-preserving byte transport
///
/// Every frame is bracketed by `begin_transaction` / `end_transaction`.
/// Implementations must not reorder exchanges, and `end_transaction` must
/// not return before the select line has been released.
pub trait ByteTransport {
    /// Error type for bus operations
    type Error;

    /// Assert chip-select and claim the bus for one frame
    fn begin_transaction(&mut self) -> Result<(), Self::Error>;

    /// Shift `out` to the device, returning the byte shifted in
    fn exchange_byte(&mut self, out: u8) -> Result<u8, Self::Error>;

    /// Release the bus and de-assert chip-select
    fn end_transaction(&mut self) -> Result<(), Self::Error>;
}

impl<T: ByteTransport + ?Sized> ByteTransport for &mut T {
    type Error = T::Error;

    fn begin_transaction(&mut self) -> Result<(), Self::Error> {
        (**self).begin_transaction()
    }

    fn exchange_byte(&mut self, out: u8) -> Result<u8, Self::Error> {
        (**self).exchange_byte(out)
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        (**self).end_transaction()
    }
}

/// SPI bus with a dedicated chip-select pin
///
/// Owns the bus exclusively. Sharing one physical bus between several
/// devices needs external serialisation.
pub struct SelectedBus<B: SpiBus, P: OutputPin> {
    bus: B,
    cs: ChipSelect<P>,
}

impl<B: SpiBus, P: OutputPin> SelectedBus<B, P> {
    /// Create a transport; the chip-select pin is driven high immediately
    pub fn new(bus: B, cs: P) -> Self {
        Self {
            bus,
            cs: ChipSelect::new(cs),
        }
    }

    /// Whether a frame is currently in progress
    pub fn is_selected(&self) -> bool {
        self.cs.is_selected()
    }

    /// Release the bus and pin
    pub fn release(self) -> (B, P) {
        (self.bus, self.cs.into_inner())
    }
}

impl<B: SpiBus, P: OutputPin> ByteTransport for SelectedBus<B, P> {
    type Error = B::Error;

    fn begin_transaction(&mut self) -> Result<(), Self::Error> {
        self.cs.select();
        Ok(())
    }

    fn exchange_byte(&mut self, out: u8) -> Result<u8, Self::Error> {
        let mut buf = [out];
        self.bus.transfer_in_place(&mut buf)?;
        Ok(buf[0])
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        // Deselect even if the flush fails
        let flushed = self.bus.flush();
        self.cs.deselect();
        flushed
    }
}
