//! Digital output port — relay coil, indicator LED.

use gatelink_domain::error::OutputError;

/// A push-pull output pin.
///
/// Writes are synchronous and cheap, so they are safe to issue from a drop
/// guard.
pub trait DigitalOutput {
    /// Drive the pin high (`true`) or low (`false`).
    ///
    /// # Errors
    ///
    /// Returns [`OutputError`] when the pin cannot be driven.
    fn set(&mut self, high: bool) -> Result<(), OutputError>;
}

impl<T: DigitalOutput + ?Sized> DigitalOutput for Box<T> {
    fn set(&mut self, high: bool) -> Result<(), OutputError> {
        (**self).set(high)
    }
}
