//! Pushing the canvas to the physical panel.

use core::fmt::Debug;

/// A sink that copies a drawn frame to the screen.
///
/// `C` is the canvas the bridge draws on. Implementations usually own the bus
/// to the panel controller and send the canvas' pixel buffer in one go.
#[allow(async_fn_in_trait)]
pub trait DisplayOutput<C> {
    /// Error returned when the transfer fails.
    type Error: Debug;

    /// Sends the current contents of `frame` to the panel.
    async fn flush(&mut self, frame: &C) -> Result<(), Self::Error>;
}
