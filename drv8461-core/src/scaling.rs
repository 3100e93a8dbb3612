//! Current limit scaling
//!
//! The DRV8461 scales the full-scale current (set by VREF) by TRQ_DAC/256.
//! TRQ_DAC is an 8-bit field; zero is never written, so the smallest
//! setting is 1/256 of full scale.
//!
//! Integer arithmetic only, so this is usable on cores without an FPU.

/// Smallest accepted percentage
pub const MIN_PERCENT: u8 = 1;

/// Largest accepted percentage
pub const MAX_PERCENT: u8 = 100;

/// Full-scale current assumed when the caller does not give one (mA)
pub const DEFAULT_FULL_CURRENT_MA: u16 = 2000;

/// Largest full-scale current the device supports (mA)
pub const MAX_FULL_CURRENT_MA: u16 = 4000;

/// Smallest TRQ_DAC code ever produced
pub const MIN_TRQ_DAC: u8 = 1;

/// Largest TRQ_DAC code (100%)
pub const MAX_TRQ_DAC: u8 = 255;

/// Convert a percentage of full scale to a TRQ_DAC code
///
/// The percentage is clamped to 1-100. Settings come in steps of
/// 0.390625%; the result rounds down to the nearest available step
/// unless the next step is no more than 0.75% higher, in which case it
/// rounds up.
pub fn trq_dac_from_percent(percent: u8) -> u8 {
    let percent = percent.clamp(MIN_PERCENT, MAX_PERCENT) as u16;

    // 100% -> 6400 / 25 - 1 = 255, so this always fits
    let code = (percent * 64 / 25).saturating_sub(1);
    (code as u8).max(MIN_TRQ_DAC)
}

/// Convert a target current to a TRQ_DAC code
///
/// `full_current_ma` is the limit at 100% scaling; it is capped at
/// 4000 mA, and `current_ma` is clamped to it. The result rounds down,
/// but never below 1. A request for exactly full scale computes 256, which
/// saturates at 255. A zero full scale selects the lowest setting.
pub fn trq_dac_from_milliamps(current_ma: u16, full_current_ma: u16) -> u8 {
    if full_current_ma == 0 {
        return MIN_TRQ_DAC;
    }
    let full = full_current_ma.min(MAX_FULL_CURRENT_MA) as u32;
    let current = (current_ma as u32).min(full);

    let code = current * 256 / full;
    code.clamp(MIN_TRQ_DAC as u32, MAX_TRQ_DAC as u32) as u8
}

/// Scaled current limit produced by a TRQ_DAC code (mA, rounded down)
pub fn scaled_current_ma(trq_dac: u8, full_current_ma: u16) -> u16 {
    let full = full_current_ma.min(MAX_FULL_CURRENT_MA) as u32;
    (full * trq_dac as u32 / 256) as u16
}

/// TRQ_DAC code as a percentage of full scale, in tenths of a percent
pub fn trq_dac_permille(trq_dac: u8) -> u16 {
    (trq_dac as u32 * 1000 / 256) as u16
}
