//! Buttons wired straight to GPIO inputs.

use embedded_hal::digital::InputPin;

use crate::buttons::ButtonReader;

/// An error reading a [`GpioButtons`] pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError<E> {
    /// No input is connected at this pin number.
    UnknownPin(u8),
    /// The input pin itself failed.
    Pin(E),
}

/// A [`ButtonReader`] over plain input pins.
///
/// `pins[n]` is the input read for pin number `n` of the
/// [`ButtonPins`](crate::pins::ButtonPins) map, so a board without an I/O
/// expander can reuse the same map with GPIO numbers or a compact
/// numbering of its own.
pub struct GpioButtons<P, const N: usize> {
    pins: [Option<P>; N],
    active_low: bool,
}

impl<P: InputPin, const N: usize> GpioButtons<P, N> {
    /// Creates a new `GpioButtons`.
    ///
    /// # Arguments
    ///
    /// * `pins` - Inputs indexed by pin number. `None` marks an unused number.
    /// * `active_low` - Whether a pressed button pulls its input low.
    pub fn new(pins: [Option<P>; N], active_low: bool) -> Self {
        Self { pins, active_low }
    }
}

impl<P: InputPin, const N: usize> ButtonReader for GpioButtons<P, N> {
    type Error = GpioError<P::Error>;

    async fn read_pin(&mut self, pin: u8) -> Result<bool, Self::Error> {
        let input = self
            .pins
            .get_mut(pin as usize)
            .and_then(Option::as_mut)
            .ok_or(GpioError::UnknownPin(pin))?;
        let high = input.is_high().map_err(GpioError::Pin)?;
        Ok(high != self.active_low)
    }
}
