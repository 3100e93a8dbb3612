//! `embedded-hal` 1.0 transport
//!
//! Drives an [`embedded_hal::spi::SpiBus`] and a chip-select
//! [`embedded_hal::digital::OutputPin`] directly. `SpiDevice` is not used
//! because a frame is built one exchanged byte at a time.

use drv8461_hal::{ByteTransport, SpiConfig};
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::{self, SpiBus};

/// SPI mode the DRV8461 expects (CPOL=0, CPHA=1)
pub const SPI_MODE: spi::Mode = spi::MODE_1;

/// Bus clock used with the DRV8461
pub const SPI_FREQUENCY_HZ: u32 = SpiConfig::DRV8461.frequency;

/// Transport errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError<S, P> {
    /// SPI transfer or flush failed
    Spi(S),
    /// Chip-select pin could not be driven
    ChipSelect(P),
}

/// [`ByteTransport`] over an `embedded-hal` bus and chip-select pin
pub struct EhTransport<SPI, CS> {
    spi: SPI,
    cs: CS,
}

impl<SPI, CS> EhTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    /// Take the bus and pin; chip-select is driven high (idle) first
    pub fn new(spi: SPI, mut cs: CS) -> Result<Self, TransportError<SPI::Error, CS::Error>> {
        cs.set_high().map_err(TransportError::ChipSelect)?;
        Ok(Self { spi, cs })
    }

    /// Release the bus and pin
    pub fn release(self) -> (SPI, CS) {
        (self.spi, self.cs)
    }
}

impl<SPI, CS> ByteTransport for EhTransport<SPI, CS>
where
    SPI: SpiBus<u8>,
    CS: OutputPin,
{
    type Error = TransportError<SPI::Error, CS::Error>;

    fn begin_transaction(&mut self) -> Result<(), Self::Error> {
        self.cs.set_low().map_err(TransportError::ChipSelect)
    }

    fn exchange_byte(&mut self, out: u8) -> Result<u8, Self::Error> {
        let mut word = [out];
        self.spi
            .transfer_in_place(&mut word)
            .map_err(TransportError::Spi)?;
        Ok(word[0])
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        // The last byte must be fully clocked out before chip-select rises
        let flushed = self.spi.flush().map_err(TransportError::Spi);
        self.cs.set_high().map_err(TransportError::ChipSelect)?;
        flushed
    }
}
