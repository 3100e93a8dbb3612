//! FAULT register (0x00) bits
//!
//! The status byte returned on the first byte of every frame carries the
//! same flags as FAULT, with the upper two bits forced high.

/// nFAULT output is asserted (logic low)
pub const FAULT: u8 = 0x80;
/// SPI protocol error
pub const SPI_ERROR: u8 = 0x40;
/// Supply undervoltage lockout
pub const UVLO: u8 = 0x20;
/// Charge pump undervoltage
pub const CPUV: u8 = 0x10;
/// Overcurrent
pub const OCP: u8 = 0x08;
/// Motor stall
pub const STL: u8 = 0x04;
/// Overtemperature warning or shutdown
pub const TF: u8 = 0x02;
/// Open load
pub const OL: u8 = 0x01;

/// Bits that are always high in a frame status byte
pub const STATUS_FIXED_BITS: u8 = 0xC0;

/// Flags that remain meaningful in a frame status byte
pub const STATUS_FLAGS: u8 = !STATUS_FIXED_BITS;
