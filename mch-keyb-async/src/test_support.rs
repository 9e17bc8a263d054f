//! Host-side stand-ins for the expander, the panel and the keyboard engine.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    primitives::Rectangle,
    Pixel,
};

use crate::buttons::ButtonReader;
use crate::display::DisplayOutput;
use crate::pins::{Button, ButtonPins};
use crate::widget::{KeyAction, KeyEvent, Palette, TextEntry};

/// Levels of all expander pins for one poll. `None` makes the read fail.
#[derive(Debug, Clone, Copy)]
pub struct Frame([Option<bool>; 16]);

impl Frame {
    pub fn idle() -> Self {
        Self([Some(false); 16])
    }

    pub fn with(mut self, button: Button) -> Self {
        self.0[ButtonPins::default().pin(button) as usize] = Some(true);
        self
    }

    pub fn failing(mut self, button: Button) -> Self {
        self.0[ButtonPins::default().pin(button) as usize] = None;
        self
    }
}

#[derive(Debug)]
pub struct ReadFailed;

/// Plays back one [`Frame`] per bridge iteration.
///
/// The bridge reads Menu last in every iteration, so that read moves to the
/// next frame. Once the script runs out Home is held, which ends any session.
pub struct ScriptedButtons {
    frames: Vec<Frame>,
    index: usize,
}

impl ScriptedButtons {
    pub fn new<I: IntoIterator<Item = Frame>>(frames: I) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            index: 0,
        }
    }

    pub fn polls(&self) -> usize {
        self.index
    }
}

impl ButtonReader for ScriptedButtons {
    type Error = ReadFailed;

    async fn read_pin(&mut self, pin: u8) -> Result<bool, Self::Error> {
        let frame = self
            .frames
            .get(self.index)
            .copied()
            .unwrap_or_else(|| Frame::idle().with(Button::Home));
        if pin == ButtonPins::default().menu {
            self.index += 1;
        }
        frame.0[pin as usize].ok_or(ReadFailed)
    }
}

/// Counts frames pushed to the panel.
#[derive(Debug, Default)]
pub struct CountingDisplay {
    pub flushes: usize,
}

impl<C> DisplayOutput<C> for CountingDisplay {
    type Error = Infallible;

    async fn flush(&mut self, _frame: &C) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// A frame buffer that rejects every draw.
#[derive(Debug, Default)]
pub struct BrokenCanvas {
    pub attempts: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub struct CanvasFault;

impl OriginDimensions for BrokenCanvas {
    fn size(&self) -> Size {
        Size::new(64, 64)
    }
}

impl DrawTarget for BrokenCanvas {
    type Color = BinaryColor;
    type Error = CanvasFault;

    fn draw_iter<I>(&mut self, _pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.attempts += 1;
        Err(CanvasFault)
    }
}

/// Everything the stub keyboard saw, kept alive past the session.
#[derive(Debug, Default)]
pub struct WidgetLog {
    pub opened_with: Option<Rectangle>,
    pub area: Option<Rectangle>,
    pub events: Vec<KeyEvent>,
    pub ticks: usize,
    pub renders: usize,
    pub redraws: usize,
    pub drops: usize,
}

/// A keyboard that types `a` on every character select.
pub struct StubKeyboard {
    log: Rc<RefCell<WidgetLog>>,
    area: Rectangle,
    text: String,
    dirty: bool,
    accepted: bool,
    accept_on_select: bool,
}

impl StubKeyboard {
    pub fn open(log: &Rc<RefCell<WidgetLog>>, area: Rectangle) -> Self {
        log.borrow_mut().opened_with = Some(area);
        Self {
            log: Rc::clone(log),
            area,
            text: String::new(),
            dirty: false,
            accepted: false,
            accept_on_select: false,
        }
    }

    /// Makes the keyboard report itself accepted after typing a character.
    pub fn accepting(mut self) -> Self {
        self.accept_on_select = true;
        self
    }
}

impl TextEntry for StubKeyboard {
    type Color = BinaryColor;

    fn press(&mut self, action: KeyAction) {
        self.log.borrow_mut().events.push(KeyEvent::Press(action));
        match action {
            KeyAction::CharSelect => {
                self.text.push('a');
                self.accepted = self.accept_on_select;
            }
            KeyAction::DeleteBefore => {
                self.text.pop();
            }
            _ => {}
        }
        self.dirty = true;
    }

    fn release(&mut self, action: KeyAction) {
        self.log.borrow_mut().events.push(KeyEvent::Release(action));
    }

    fn tick(&mut self) {
        self.log.borrow_mut().ticks += 1;
    }

    fn render<D>(&mut self, _target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.log.borrow_mut().renders += 1;
        self.dirty = false;
        Ok(())
    }

    fn redraw<D>(&mut self, _target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        self.log.borrow_mut().redraws += 1;
        self.dirty = false;
        Ok(())
    }

    fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn is_accepted(&self) -> bool {
        self.accepted
    }

    fn content(&self) -> &str {
        &self.text
    }

    fn area(&self) -> Rectangle {
        self.area
    }

    fn set_area(&mut self, area: Rectangle) {
        self.log.borrow_mut().area = Some(area);
        self.area = area;
    }

    fn palette(&self) -> Palette<Self::Color> {
        Palette {
            background: BinaryColor::Off,
            foreground: BinaryColor::On,
        }
    }
}

impl Drop for StubKeyboard {
    fn drop(&mut self) {
        self.log.borrow_mut().drops += 1;
    }
}
