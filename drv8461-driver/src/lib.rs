//! DRV8461 stepper driver over SPI
//!
//! Register-level driver for the TI DRV8461:
//!
//! - [`spi::RegisterBus`] - 2-byte register frames over a
//!   [`ByteTransport`], capturing the status byte of every frame
//! - [`driver::Drv8461`] - shadow-cached settings (current limit, decay,
//!   microstepping, direction, SPI step/direction overrides) with
//!   verify/apply for recovery after a device reset
//! - [`eh::EhTransport`] - transport for `embedded-hal` 1.0 buses
//!
//! Everything is blocking and single-owner. A bus shared with other
//! devices must be serialised by the caller.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub(crate) mod fmt;

pub mod driver;
pub mod eh;
pub mod spi;

#[cfg(test)]
mod mock;

pub use driver::Drv8461;
pub use eh::{EhTransport, TransportError, SPI_FREQUENCY_HZ, SPI_MODE};
pub use spi::RegisterBus;

pub use drv8461_core::{DecayMode, DriverConfig, MicrostepMode, Register};
pub use drv8461_hal::ByteTransport;
