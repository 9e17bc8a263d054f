//! The contract of the external on-screen keyboard engine.
//!
//! The bridge does not know how the keyboard lays out keys, tracks the cursor
//! or renders glyphs. It only forwards [`KeyEvent`]s, ticks the engine and asks
//! it to draw itself onto the canvas.

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::PixelColor, primitives::Rectangle};

/// An action understood by the keyboard engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the selection up.
    Up,
    /// Move the selection down.
    Down,
    /// Move the selection left.
    Left,
    /// Move the selection right.
    Right,
    /// Shift modifier.
    Shift,
    /// Type the selected character.
    CharSelect,
    /// Delete the character before the cursor.
    DeleteBefore,
    /// Cycle between letters, numbers and symbols.
    ModeSelect,
}

/// A press or release of a [`KeyAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// The button mapped to the action went down.
    Press(KeyAction),
    /// The button mapped to the action went up.
    Release(KeyAction),
}

/// Colors the keyboard draws with. The bridge uses them for the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<C> {
    /// Fill color behind everything.
    pub background: C,
    /// Color of text and lines.
    pub foreground: C,
}

/// A live text-entry session of the keyboard engine.
///
/// The session is owned by the bridge for one interaction and dropped when the
/// interaction ends, whichever way it ends.
pub trait TextEntry {
    /// Pixel color the keyboard renders with.
    type Color: PixelColor;

    /// Handles a button going down.
    fn press(&mut self, action: KeyAction);

    /// Handles a button going up.
    fn release(&mut self, action: KeyAction);

    /// Forwards `event` to [`press`](Self::press) or [`release`](Self::release).
    fn handle(&mut self, event: KeyEvent) {
        match event {
            KeyEvent::Press(action) => self.press(action),
            KeyEvent::Release(action) => self.release(action),
        }
    }

    /// Advances time based behaviour such as cursor blink or key repeat.
    fn tick(&mut self);

    /// Draws the whole keyboard into its area.
    fn render<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;

    /// Draws only what changed and clears the dirty flag.
    fn redraw<D>(&mut self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>;

    /// `true` when the keyboard needs a [`redraw`](Self::redraw).
    fn is_dirty(&self) -> bool;

    /// `true` once the user confirmed the input inside the keyboard.
    fn is_accepted(&self) -> bool;

    /// The text entered so far.
    fn content(&self) -> &str;

    /// The part of the canvas the keyboard occupies.
    fn area(&self) -> Rectangle;

    /// Moves or resizes the keyboard. Only called before the first render.
    fn set_area(&mut self, area: Rectangle);

    /// Colors used by the keyboard.
    fn palette(&self) -> Palette<Self::Color>;
}
