//! Button polling and edge detection.

use core::fmt::Debug;

use heapless::Vec;
use log::trace;

use crate::pins::{Button, ButtonPins};
use crate::widget::{KeyAction, KeyEvent};

/// Number of buttons whose edges are forwarded to the keyboard.
pub const TRACKED_BUTTONS: usize = 8;

/// Reads the level of a single button input.
///
/// On the badge this is an input pin of the PCA9555 I/O expander; `pin` is the
/// expander pin number from [`ButtonPins`]. A returned `true` means pressed.
#[allow(async_fn_in_trait)]
pub trait ButtonReader {
    /// Error returned when the pin could not be read.
    type Error: Debug;

    /// Reads whether the button on `pin` is pressed.
    async fn read_pin(&mut self, pin: u8) -> Result<bool, Self::Error>;
}

/// Reads `pin`, falling back to `fallback` when the read fails.
pub(crate) async fn read_or<R: ButtonReader>(reader: &mut R, pin: u8, fallback: bool) -> bool {
    match reader.read_pin(pin).await {
        Ok(level) => level,
        Err(err) => {
            trace!("Reading pin {pin} failed, keeping {fallback}: {err:?}");
            fallback
        }
    }
}

/// Snapshot of the edge tracked buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    /// Joystick up.
    pub up: bool,
    /// Joystick down.
    pub down: bool,
    /// Joystick left.
    pub left: bool,
    /// Joystick right.
    pub right: bool,
    /// Joystick center press.
    pub shift: bool,
    /// Accept button.
    pub accept: bool,
    /// Back button.
    pub back: bool,
    /// Select button.
    pub select: bool,
    /// Start button.
    pub start: bool,
}

impl ButtonState {
    /// The state assumed before the first poll.
    ///
    /// The keyboard buttons start out pressed so that idle buttons on the first
    /// poll only ever produce releases. Start starts out released so a Start
    /// held on entry has to be seen pressed before its release confirms.
    pub const BASELINE: Self = Self {
        up: true,
        down: true,
        left: true,
        right: true,
        shift: true,
        accept: true,
        back: true,
        select: true,
        start: false,
    };

    /// Reads all tracked buttons.
    ///
    /// A button whose read fails keeps its value from `previous`.
    pub async fn poll<R: ButtonReader>(
        reader: &mut R,
        pins: &ButtonPins,
        previous: &ButtonState,
    ) -> Self {
        Self {
            up: read_or(reader, pins.pin(Button::JoyUp), previous.up).await,
            down: read_or(reader, pins.pin(Button::JoyDown), previous.down).await,
            left: read_or(reader, pins.pin(Button::JoyLeft), previous.left).await,
            right: read_or(reader, pins.pin(Button::JoyRight), previous.right).await,
            shift: read_or(reader, pins.pin(Button::JoyPress), previous.shift).await,
            accept: read_or(reader, pins.pin(Button::Accept), previous.accept).await,
            back: read_or(reader, pins.pin(Button::Back), previous.back).await,
            select: read_or(reader, pins.pin(Button::Select), previous.select).await,
            start: read_or(reader, pins.pin(Button::Start), previous.start).await,
        }
    }

    fn tracked(&self) -> [(KeyAction, bool); TRACKED_BUTTONS] {
        [
            (KeyAction::Up, self.up),
            (KeyAction::Down, self.down),
            (KeyAction::Left, self.left),
            (KeyAction::Right, self.right),
            (KeyAction::Shift, self.shift),
            (KeyAction::CharSelect, self.accept),
            (KeyAction::DeleteBefore, self.back),
            (KeyAction::ModeSelect, self.select),
        ]
    }

    /// Key events produced by going from `self` to `current`.
    ///
    /// Presses come first, then releases, each in keyboard button order.
    pub fn edges(&self, current: &ButtonState) -> Vec<KeyEvent, TRACKED_BUTTONS> {
        let before = self.tracked();
        let after = current.tracked();
        let mut events = Vec::new();

        // A button changes at most once, so the vector never overflows.
        for (&(action, was), &(_, is)) in before.iter().zip(after.iter()) {
            if !was && is {
                let _ = events.push(KeyEvent::Press(action));
            }
        }
        for (&(action, was), &(_, is)) in before.iter().zip(after.iter()) {
            if was && !is {
                let _ = events.push(KeyEvent::Release(action));
            }
        }
        events
    }

    /// `true` when Start was held in `self` and is released in `current`.
    pub fn start_released(&self, current: &ButtonState) -> bool {
        self.start && !current.start
    }
}
