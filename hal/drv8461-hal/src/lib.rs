//! DRV8461 Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the register driver
//! is written against. A board support crate implements them for its chip
//! (or uses the `embedded-hal` adapter shipped with `drv8461-driver`).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  drv8461-driver (Drv8461, RegisterBus)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  drv8461-hal (this crate - traits)      │
//! │           ByteTransport                 │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  SelectedBus  │       │  EhTransport  │
//! │ SpiBus + CS   │       │ embedded-hal  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip-select line
//! - [`spi::SpiBus`] - SPI bus operations
//! - [`transport::ByteTransport`] - One selected byte-for-byte exchange

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;
pub mod transport;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{SpiBus, SpiConfig};
pub use transport::{ByteTransport, SelectedBus};
