//! Driver configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::registers::ctrl::{DecayMode, MicrostepMode};
use crate::scaling;

/// Current configuration layout version
pub const CONFIG_VERSION: u8 = 1;

/// Settings carried by CTRL1, CTRL2 and CTRL11
///
/// The default is the device's power-on state: outputs disabled, smart
/// tune ripple control, 1/16 microstepping, full current, and pin control
/// of DIR and STEP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Layout version
    pub version: u8,
    /// Output stage enabled (EN_OUT)
    pub enabled: bool,
    /// Current decay mode
    pub decay_mode: DecayMode,
    /// Stepping mode
    pub microstep_mode: MicrostepMode,
    /// Current scalar (TRQ_DAC, 1-255)
    pub trq_dac: u8,
    /// Direction bit, used when `spi_direction` is set
    pub direction: bool,
    /// Direction controlled over SPI instead of the DIR pin
    pub spi_direction: bool,
    /// Stepping controlled over SPI instead of the STEP pin
    pub spi_step: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            enabled: false,
            decay_mode: DecayMode::SmartTuneRippleControl,
            microstep_mode: MicrostepMode::MicroStep16,
            trq_dac: scaling::MAX_TRQ_DAC,
            direction: false,
            spi_direction: false,
            spi_step: false,
        }
    }
}

impl DriverConfig {
    /// Set the current scalar from a percentage of full scale
    pub fn with_current_percent(mut self, percent: u8) -> Self {
        self.trq_dac = scaling::trq_dac_from_percent(percent);
        self
    }

    /// Set the current scalar from a target and full-scale current (mA)
    pub fn with_current_milliamps(mut self, current_ma: u16, full_current_ma: u16) -> Self {
        self.trq_dac = scaling::trq_dac_from_milliamps(current_ma, full_current_ma);
        self
    }

    /// Set the stepping mode from a ratio; unknown ratios select 1/16
    pub fn with_microsteps(mut self, ratio: u16) -> Self {
        self.microstep_mode = MicrostepMode::from_ratio(ratio).unwrap_or_default();
        self
    }
}
