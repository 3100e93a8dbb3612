//! DRV8461 register map
//!
//! Register addresses and bit-field constants. Addresses are sparse in
//! 0x00-0x3C; the status registers (FAULT, DIAG1-3) are read-only.

pub mod ctrl;
pub mod diag;
pub mod fault;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of registers in the map
pub const REGISTER_COUNT: usize = 55;

/// Width of the address field carried in a register frame
pub const ADDRESS_MASK: u8 = 0b1_1111;

/// DRV8461 register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Register {
    /// Fault status
    Fault = 0x00,
    /// Diagnostic status 1
    Diag1 = 0x01,
    /// Diagnostic status 2
    Diag2 = 0x02,
    /// Diagnostic status 3
    Diag3 = 0x03,
    /// Control 1
    Ctrl1 = 0x04,
    /// Control 2
    Ctrl2 = 0x05,
    /// Control 3
    Ctrl3 = 0x06,
    /// Control 4
    Ctrl4 = 0x07,
    /// Control 5
    Ctrl5 = 0x08,
    /// Control 6
    Ctrl6 = 0x09,
    /// Control 7
    Ctrl7 = 0x0A,
    /// Control 8
    Ctrl8 = 0x0B,
    /// Control 9
    Ctrl9 = 0x0C,
    /// Control 10
    Ctrl10 = 0x0D,
    /// Control 11
    Ctrl11 = 0x0E,
    /// Control 12
    Ctrl12 = 0x0F,
    /// Control 13
    Ctrl13 = 0x10,
    /// Indexer position 1
    Index1 = 0x11,
    /// Indexer position 2
    Index2 = 0x12,
    /// Indexer position 3
    Index3 = 0x13,
    /// Indexer position 4
    Index4 = 0x14,
    /// Indexer position 5
    Index5 = 0x15,
    /// Custom microstep table 1
    CustomCtrl1 = 0x16,
    /// Custom microstep table 2
    CustomCtrl2 = 0x17,
    /// Custom microstep table 3
    CustomCtrl3 = 0x18,
    /// Custom microstep table 4
    CustomCtrl4 = 0x19,
    /// Custom microstep table 5
    CustomCtrl5 = 0x1A,
    /// Custom microstep table 6
    CustomCtrl6 = 0x1B,
    /// Custom microstep table 7
    CustomCtrl7 = 0x1C,
    /// Custom microstep table 8
    CustomCtrl8 = 0x1D,
    /// Custom microstep table 9
    CustomCtrl9 = 0x1E,
    /// Auto-torque 1
    AtqCtrl1 = 0x1F,
    /// Auto-torque 2
    AtqCtrl2 = 0x20,
    /// Auto-torque 3
    AtqCtrl3 = 0x21,
    /// Auto-torque 4
    AtqCtrl4 = 0x22,
    /// Auto-torque 5
    AtqCtrl5 = 0x23,
    /// Auto-torque 6
    AtqCtrl6 = 0x24,
    /// Auto-torque 7
    AtqCtrl7 = 0x25,
    /// Auto-torque 8
    AtqCtrl8 = 0x26,
    /// Auto-torque 9
    AtqCtrl9 = 0x27,
    /// Auto-torque 10
    AtqCtrl10 = 0x28,
    /// Auto-torque 11
    AtqCtrl11 = 0x29,
    /// Auto-torque 12
    AtqCtrl12 = 0x2A,
    /// Auto-torque 13
    AtqCtrl13 = 0x2B,
    /// Auto-torque 14
    AtqCtrl14 = 0x2C,
    /// Auto-torque 15
    AtqCtrl15 = 0x2D,
    /// Auto-torque 16
    AtqCtrl16 = 0x2E,
    /// Auto-torque 17
    AtqCtrl17 = 0x2F,
    /// Auto-torque 18
    AtqCtrl18 = 0x30,
    /// Silent-step 1
    SsCtrl1 = 0x31,
    /// Silent-step 2
    SsCtrl2 = 0x32,
    /// Silent-step 3
    SsCtrl3 = 0x33,
    /// Silent-step 4
    SsCtrl4 = 0x34,
    /// Silent-step 5
    SsCtrl5 = 0x35,
    /// Control 14
    Ctrl14 = 0x3C,
}

impl Register {
    /// Every register, in address order
    pub const ALL: [Register; REGISTER_COUNT] = [
        Register::Fault,
        Register::Diag1,
        Register::Diag2,
        Register::Diag3,
        Register::Ctrl1,
        Register::Ctrl2,
        Register::Ctrl3,
        Register::Ctrl4,
        Register::Ctrl5,
        Register::Ctrl6,
        Register::Ctrl7,
        Register::Ctrl8,
        Register::Ctrl9,
        Register::Ctrl10,
        Register::Ctrl11,
        Register::Ctrl12,
        Register::Ctrl13,
        Register::Index1,
        Register::Index2,
        Register::Index3,
        Register::Index4,
        Register::Index5,
        Register::CustomCtrl1,
        Register::CustomCtrl2,
        Register::CustomCtrl3,
        Register::CustomCtrl4,
        Register::CustomCtrl5,
        Register::CustomCtrl6,
        Register::CustomCtrl7,
        Register::CustomCtrl8,
        Register::CustomCtrl9,
        Register::AtqCtrl1,
        Register::AtqCtrl2,
        Register::AtqCtrl3,
        Register::AtqCtrl4,
        Register::AtqCtrl5,
        Register::AtqCtrl6,
        Register::AtqCtrl7,
        Register::AtqCtrl8,
        Register::AtqCtrl9,
        Register::AtqCtrl10,
        Register::AtqCtrl11,
        Register::AtqCtrl12,
        Register::AtqCtrl13,
        Register::AtqCtrl14,
        Register::AtqCtrl15,
        Register::AtqCtrl16,
        Register::AtqCtrl17,
        Register::AtqCtrl18,
        Register::SsCtrl1,
        Register::SsCtrl2,
        Register::SsCtrl3,
        Register::SsCtrl4,
        Register::SsCtrl5,
        Register::Ctrl14,
    ];

    /// Register address
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Look up a register by address
    pub const fn from_addr(addr: u8) -> Option<Self> {
        match addr {
            0x00 => Some(Register::Fault),
            0x01 => Some(Register::Diag1),
            0x02 => Some(Register::Diag2),
            0x03 => Some(Register::Diag3),
            0x04 => Some(Register::Ctrl1),
            0x05 => Some(Register::Ctrl2),
            0x06 => Some(Register::Ctrl3),
            0x07 => Some(Register::Ctrl4),
            0x08 => Some(Register::Ctrl5),
            0x09 => Some(Register::Ctrl6),
            0x0A => Some(Register::Ctrl7),
            0x0B => Some(Register::Ctrl8),
            0x0C => Some(Register::Ctrl9),
            0x0D => Some(Register::Ctrl10),
            0x0E => Some(Register::Ctrl11),
            0x0F => Some(Register::Ctrl12),
            0x10 => Some(Register::Ctrl13),
            0x11 => Some(Register::Index1),
            0x12 => Some(Register::Index2),
            0x13 => Some(Register::Index3),
            0x14 => Some(Register::Index4),
            0x15 => Some(Register::Index5),
            0x16 => Some(Register::CustomCtrl1),
            0x17 => Some(Register::CustomCtrl2),
            0x18 => Some(Register::CustomCtrl3),
            0x19 => Some(Register::CustomCtrl4),
            0x1A => Some(Register::CustomCtrl5),
            0x1B => Some(Register::CustomCtrl6),
            0x1C => Some(Register::CustomCtrl7),
            0x1D => Some(Register::CustomCtrl8),
            0x1E => Some(Register::CustomCtrl9),
            0x1F => Some(Register::AtqCtrl1),
            0x20 => Some(Register::AtqCtrl2),
            0x21 => Some(Register::AtqCtrl3),
            0x22 => Some(Register::AtqCtrl4),
            0x23 => Some(Register::AtqCtrl5),
            0x24 => Some(Register::AtqCtrl6),
            0x25 => Some(Register::AtqCtrl7),
            0x26 => Some(Register::AtqCtrl8),
            0x27 => Some(Register::AtqCtrl9),
            0x28 => Some(Register::AtqCtrl10),
            0x29 => Some(Register::AtqCtrl11),
            0x2A => Some(Register::AtqCtrl12),
            0x2B => Some(Register::AtqCtrl13),
            0x2C => Some(Register::AtqCtrl14),
            0x2D => Some(Register::AtqCtrl15),
            0x2E => Some(Register::AtqCtrl16),
            0x2F => Some(Register::AtqCtrl17),
            0x30 => Some(Register::AtqCtrl18),
            0x31 => Some(Register::SsCtrl1),
            0x32 => Some(Register::SsCtrl2),
            0x33 => Some(Register::SsCtrl3),
            0x34 => Some(Register::SsCtrl4),
            0x35 => Some(Register::SsCtrl5),
            0x3C => Some(Register::Ctrl14),
            _ => None,
        }
    }

    /// FAULT and DIAG registers only report status and hold no settings
    pub const fn is_status(self) -> bool {
        matches!(
            self,
            Register::Fault | Register::Diag1 | Register::Diag2 | Register::Diag3
        )
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> Self {
        reg.addr()
    }
}

impl TryFrom<u8> for Register {
    type Error = u8;

    fn try_from(addr: u8) -> Result<Self, Self::Error> {
        Register::from_addr(addr).ok_or(addr)
    }
}
