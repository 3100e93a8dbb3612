//! Control register bit fields and mode encodings

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CTRL1 (0x04): output enable, slew rate, off time, decay mode
pub mod ctrl1 {
    /// Output enable (EN_OUT)
    pub const EN_OUT: u8 = 1 << 7;
    /// Output slew rate (SR)
    pub const SR: u8 = 1 << 6;
    /// Indexer reset (IDX_RST)
    pub const IDX_RST: u8 = 1 << 5;
    /// PWM off time (TOFF)
    pub const TOFF_MASK: u8 = 0b0001_1000;
    /// Decay mode (DECAY)
    pub const DECAY_MASK: u8 = 0b0000_0111;
}

/// CTRL2 (0x05): direction, step, SPI overrides, microstep mode
pub mod ctrl2 {
    /// Direction (DIR)
    pub const DIR: u8 = 1 << 7;
    /// One-shot step pulse (STEP); cleared by the device after the write
    pub const STEP: u8 = 1 << 6;
    /// Direction controlled over SPI instead of the DIR pin (SPI_DIR)
    pub const SPI_DIR: u8 = 1 << 5;
    /// Stepping controlled over SPI instead of the STEP pin (SPI_STEP)
    pub const SPI_STEP: u8 = 1 << 4;
    /// Microstep mode (MICROSTEP_MODE)
    pub const MICROSTEP_MODE_MASK: u8 = 0b0000_1111;
}

/// CTRL3 (0x06): fault clear and protection options
pub mod ctrl3 {
    /// Clear latched faults (CLR_FLT); cleared by the device after the write
    pub const CLR_FLT: u8 = 1 << 7;
    /// Register lock (LOCK)
    pub const LOCK_MASK: u8 = 0b0111_0000;
    /// Open-load detection enable (EN_OL)
    pub const EN_OL: u8 = 1 << 3;
}

/// CTRL11 (0x0E): torque DAC
pub mod ctrl11 {
    /// Current scalar (TRQ_DAC); the whole register
    pub const TRQ_DAC_MASK: u8 = 0xFF;
}

/// Current decay mode (CTRL1 DECAY field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum DecayMode {
    /// Slow decay, both increasing and decreasing current
    Slow = 0b000,
    /// Slow decay while increasing, 30% mixed while decreasing
    IncSlowDecMixed30 = 0b001,
    /// Slow decay while increasing, 60% mixed while decreasing
    IncSlowDecMixed60 = 0b010,
    /// Slow decay while increasing, fast while decreasing
    IncSlowDecFast = 0b011,
    /// 30% mixed decay
    Mixed30 = 0b100,
    /// 60% mixed decay
    Mixed60 = 0b101,
    /// Smart tune dynamic decay
    SmartTuneDynamicDecay = 0b110,
    /// Smart tune ripple control (power-on default)
    #[default]
    SmartTuneRippleControl = 0b111,
}

impl DecayMode {
    /// Field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the DECAY field; bits outside the field are ignored
    pub const fn from_bits(bits: u8) -> Self {
        match bits & ctrl1::DECAY_MASK {
            0b000 => DecayMode::Slow,
            0b001 => DecayMode::IncSlowDecMixed30,
            0b010 => DecayMode::IncSlowDecMixed60,
            0b011 => DecayMode::IncSlowDecFast,
            0b100 => DecayMode::Mixed30,
            0b101 => DecayMode::Mixed60,
            0b110 => DecayMode::SmartTuneDynamicDecay,
            _ => DecayMode::SmartTuneRippleControl,
        }
    }
}

/// Stepping mode (CTRL2 MICROSTEP_MODE field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum MicrostepMode {
    /// Full step, 100% current
    FullStep100 = 0b0000,
    /// Full step, 71% current
    FullStep71 = 0b0001,
    /// Non-circular 1/2 step
    NonCircular2 = 0b0010,
    /// 1/2 step
    MicroStep2 = 0b0011,
    /// 1/4 step
    MicroStep4 = 0b0100,
    /// 1/8 step
    MicroStep8 = 0b0101,
    /// 1/16 step (power-on default)
    #[default]
    MicroStep16 = 0b0110,
    /// 1/32 step
    MicroStep32 = 0b0111,
    /// 1/64 step
    MicroStep64 = 0b1000,
    /// 1/128 step
    MicroStep128 = 0b1001,
    /// 1/256 step
    MicroStep256 = 0b1010,
}

impl MicrostepMode {
    /// Field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the MICROSTEP_MODE field
    ///
    /// Returns `None` for the reserved encodings 0b1011-0b1111.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits & ctrl2::MICROSTEP_MODE_MASK {
            0b0000 => Some(MicrostepMode::FullStep100),
            0b0001 => Some(MicrostepMode::FullStep71),
            0b0010 => Some(MicrostepMode::NonCircular2),
            0b0011 => Some(MicrostepMode::MicroStep2),
            0b0100 => Some(MicrostepMode::MicroStep4),
            0b0101 => Some(MicrostepMode::MicroStep8),
            0b0110 => Some(MicrostepMode::MicroStep16),
            0b0111 => Some(MicrostepMode::MicroStep32),
            0b1000 => Some(MicrostepMode::MicroStep64),
            0b1001 => Some(MicrostepMode::MicroStep128),
            0b1010 => Some(MicrostepMode::MicroStep256),
            _ => None,
        }
    }

    /// Mode for a microstepping ratio (1, 2, 4, ... 256)
    ///
    /// A ratio of 1 selects full step at 71% current.
    pub const fn from_ratio(ratio: u16) -> Option<Self> {
        match ratio {
            1 => Some(MicrostepMode::FullStep71),
            2 => Some(MicrostepMode::MicroStep2),
            4 => Some(MicrostepMode::MicroStep4),
            8 => Some(MicrostepMode::MicroStep8),
            16 => Some(MicrostepMode::MicroStep16),
            32 => Some(MicrostepMode::MicroStep32),
            64 => Some(MicrostepMode::MicroStep64),
            128 => Some(MicrostepMode::MicroStep128),
            256 => Some(MicrostepMode::MicroStep256),
            _ => None,
        }
    }

    /// Microsteps per full step
    pub const fn ratio(self) -> u16 {
        match self {
            MicrostepMode::FullStep100 | MicrostepMode::FullStep71 => 1,
            MicrostepMode::NonCircular2 | MicrostepMode::MicroStep2 => 2,
            MicrostepMode::MicroStep4 => 4,
            MicrostepMode::MicroStep8 => 8,
            MicrostepMode::MicroStep16 => 16,
            MicrostepMode::MicroStep32 => 32,
            MicrostepMode::MicroStep64 => 64,
            MicrostepMode::MicroStep128 => 128,
            MicrostepMode::MicroStep256 => 256,
        }
    }
}
