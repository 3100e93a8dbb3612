//! Shadow register set
//!
//! Host-side copy of every writable register. The driver updates a slot
//! and writes the same value to the device, so each slot holds the last
//! value written through it. Nothing here reads the device; a device that
//! reset behind our back is only noticed by an explicit verify.

use crate::config::DriverConfig;
use crate::registers::ctrl::{ctrl1, ctrl2, DecayMode, MicrostepMode};
use crate::registers::Register;

/// Number of shadowed registers (CTRL1-13, INDEX, CUSTOM, ATQ, SS, CTRL14)
pub const SHADOW_LEN: usize = 51;

/// Registers that carry driver settings, in address order
///
/// These are the registers compared by verify and rewritten by apply.
pub const TRACKED: [Register; 12] = [
    Register::Ctrl1,
    Register::Ctrl2,
    Register::Ctrl3,
    Register::Ctrl4,
    Register::Ctrl5,
    Register::Ctrl6,
    Register::Ctrl9,
    Register::Ctrl10,
    Register::Ctrl11,
    Register::Ctrl12,
    Register::Ctrl13,
    Register::Ctrl14,
];

/// Register holding EN_OUT
pub const OUTPUT_ENABLE_REGISTER: Register = Register::Ctrl1;

/// Order in which tracked registers are written back to the device
///
/// CTRL1 goes last: it holds EN_OUT, and the outputs must not be energized
/// before every other setting is in place.
pub const APPLY_ORDER: [Register; 12] = [
    Register::Ctrl2,
    Register::Ctrl3,
    Register::Ctrl4,
    Register::Ctrl5,
    Register::Ctrl6,
    Register::Ctrl9,
    Register::Ctrl10,
    Register::Ctrl11,
    Register::Ctrl12,
    Register::Ctrl13,
    Register::Ctrl14,
    OUTPUT_ENABLE_REGISTER,
];

/// Shadow slot index for a register, or `None` for the status registers
pub const fn slot(reg: Register) -> Option<usize> {
    match reg {
        Register::Fault | Register::Diag1 | Register::Diag2 | Register::Diag3 => None,
        Register::Ctrl14 => Some(SHADOW_LEN - 1),
        // CTRL1 (0x04) through SS_CTRL5 (0x35) are contiguous
        other => Some((other.addr() - Register::Ctrl1.addr()) as usize),
    }
}

/// Documented power-on value of a register
///
/// Registers without a documented default start at zero.
pub const fn power_on_default(reg: Register) -> u8 {
    match reg {
        Register::Ctrl1 => 0x0F,
        Register::Ctrl2 => 0x06,
        Register::Ctrl3 => 0x38,
        Register::Ctrl4 => 0x49,
        Register::Ctrl5 => 0x03,
        Register::Ctrl6 => 0x20,
        Register::Ctrl9 => 0x10,
        Register::Ctrl10 => 0x80,
        Register::Ctrl11 => 0xFF,
        Register::Ctrl12 => 0x20,
        Register::Ctrl13 => 0x10,
        Register::Ctrl14 => 0x58,
        _ => 0x00,
    }
}

/// Cached register values
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShadowRegisters {
    values: [u8; SHADOW_LEN],
}

impl Default for ShadowRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl ShadowRegisters {
    /// Shadow set holding the power-on defaults
    pub fn new() -> Self {
        let mut values = [0u8; SHADOW_LEN];
        for reg in Register::ALL {
            if let Some(index) = slot(reg) {
                values[index] = power_on_default(reg);
            }
        }
        Self { values }
    }

    /// Restore the tracked registers to their power-on defaults
    ///
    /// Untracked slots keep their value, since nothing rewrites them.
    pub fn reset_tracked(&mut self) {
        for reg in TRACKED {
            self.set(reg, power_on_default(reg));
        }
    }

    /// Cached value, or `None` if the register has no slot
    pub fn get(&self, reg: Register) -> Option<u8> {
        slot(reg).map(|index| self.values[index])
    }

    /// Store a value; returns false (and stores nothing) if there is no slot
    pub fn set(&mut self, reg: Register, value: u8) -> bool {
        match slot(reg) {
            Some(index) => {
                self.values[index] = value;
                true
            }
            None => false,
        }
    }

    /// Replace the bits under `mask` with `value`, returning the new value
    pub fn write_field(&mut self, reg: Register, mask: u8, value: u8) -> Option<u8> {
        let index = slot(reg)?;
        let updated = (self.values[index] & !mask) | (value & mask);
        self.values[index] = updated;
        Some(updated)
    }

    /// Set or clear the bits under `mask`, returning the new value
    pub fn write_flag(&mut self, reg: Register, mask: u8, on: bool) -> Option<u8> {
        self.write_field(reg, mask, if on { mask } else { 0 })
    }

    /// Tracked registers with their cached values, in apply order
    pub fn apply_sequence(&self) -> impl Iterator<Item = (Register, u8)> + '_ {
        APPLY_ORDER
            .into_iter()
            .filter_map(move |reg| self.get(reg).map(|value| (reg, value)))
    }

    /// Fold a configuration into the cached CTRL1, CTRL2 and CTRL11 values
    ///
    /// Only the fields the configuration covers are touched.
    pub fn apply_config(&mut self, config: &DriverConfig) {
        self.write_flag(Register::Ctrl1, ctrl1::EN_OUT, config.enabled);
        self.write_field(Register::Ctrl1, ctrl1::DECAY_MASK, config.decay_mode.bits());

        self.write_flag(Register::Ctrl2, ctrl2::DIR, config.direction);
        self.write_flag(Register::Ctrl2, ctrl2::SPI_DIR, config.spi_direction);
        self.write_flag(Register::Ctrl2, ctrl2::SPI_STEP, config.spi_step);
        self.write_field(
            Register::Ctrl2,
            ctrl2::MICROSTEP_MODE_MASK,
            config.microstep_mode.bits(),
        );

        self.set(Register::Ctrl11, config.trq_dac);
    }

    /// Cached EN_OUT
    pub fn output_enabled(&self) -> bool {
        self.flag(Register::Ctrl1, ctrl1::EN_OUT)
    }

    /// Cached DIR
    pub fn direction(&self) -> bool {
        self.flag(Register::Ctrl2, ctrl2::DIR)
    }

    /// Cached DECAY field
    pub fn decay_mode(&self) -> DecayMode {
        DecayMode::from_bits(self.get(Register::Ctrl1).unwrap_or_default())
    }

    /// Cached MICROSTEP_MODE field, `None` if a raw write left a reserved code
    pub fn microstep_mode(&self) -> Option<MicrostepMode> {
        MicrostepMode::from_bits(self.get(Register::Ctrl2).unwrap_or_default())
    }

    /// Cached TRQ_DAC
    pub fn trq_dac(&self) -> u8 {
        self.get(Register::Ctrl11).unwrap_or_default()
    }

    fn flag(&self, reg: Register, mask: u8) -> bool {
        self.get(reg).unwrap_or_default() & mask != 0
    }
}
