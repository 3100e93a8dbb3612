//! GPIO pin abstractions
//!
//! The driver only needs one digital output: the active-low chip-select
//! line of the DRV8461.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Active-low chip-select wrapper
///
/// Translates "selected"/"deselected" into the pin levels the DRV8461
/// expects (nSCS is asserted low). Starts deselected.
pub struct ChipSelect<P: OutputPin> {
    pin: P,
}

impl<P: OutputPin> ChipSelect<P> {
    /// Take ownership of the pin and drive it to the idle (high) level
    pub fn new(mut pin: P) -> Self {
        pin.set_high();
        Self { pin }
    }

    /// Assert chip-select (drive low)
    pub fn select(&mut self) {
        self.pin.set_low();
    }

    /// Release chip-select (drive high)
    pub fn deselect(&mut self) {
        self.pin.set_high();
    }

    /// Whether the device is currently selected
    pub fn is_selected(&self) -> bool {
        self.pin.is_set_low()
    }

    /// Release the underlying pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}
