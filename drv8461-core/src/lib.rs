//! Board-agnostic core logic for the DRV8461 stepper driver
//!
//! This crate contains everything about the device that does not touch a
//! bus:
//!
//! - Register map and bit-field constants
//! - Decay and microstep mode encodings
//! - Current limit scaling (TRQ_DAC)
//! - Shadow register set with power-on defaults and apply order
//! - Persisted driver configuration

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod registers;
pub mod scaling;
pub mod shadow;

pub use config::DriverConfig;
pub use registers::ctrl::{DecayMode, MicrostepMode};
pub use registers::Register;
pub use shadow::ShadowRegisters;
