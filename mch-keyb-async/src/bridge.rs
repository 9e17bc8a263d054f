//! The polling loop tying buttons, keyboard and screen together.

use alloc::string::String;
use core::fmt::Debug;

use embassy_futures::yield_now;
use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoFont,
    },
    prelude::*,
    primitives::Rectangle,
};
use log::{debug, info, warn};

use crate::buttons::{read_or, ButtonReader, ButtonState};
use crate::display::DisplayOutput;
use crate::pins::{Button, ButtonPins};
use crate::title::TitleLayout;
use crate::widget::TextEntry;

/// Configuration of a [`KeyboardBridge`].
#[derive(Debug, Clone, Copy)]
pub struct BridgeConfig {
    /// Where the buttons are wired on the expander.
    pub pins: ButtonPins,
    /// Font tried first for the title.
    pub title_font: &'static MonoFont<'static>,
    /// Font used when the title does not fit with `title_font`.
    pub title_font_small: &'static MonoFont<'static>,
    /// Tallest title allowed with `title_font`, in pixels.
    pub title_max_height: u32,
    /// Rows between the bottom of the title text and the keyboard. The
    /// separator is drawn on the last of them. Values below 2 are treated as
    /// 2, which keeps one blank row between the text and the separator.
    pub title_margin: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            pins: ButtonPins::default(),
            title_font: &FONT_10X20,
            title_font_small: &FONT_6X10,
            title_max_height: 20,
            title_margin: 2,
        }
    }
}

/// Why a keyboard session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Home was pressed.
    Home,
    /// Menu was pressed.
    Menu,
    /// The keyboard accepted the input and Accept is no longer held.
    InputAccepted,
    /// Start was released.
    StartReleased,
}

impl ExitReason {
    /// `true` when the entered text should be handed back.
    pub fn is_accepted(self) -> bool {
        matches!(self, ExitReason::InputAccepted | ExitReason::StartReleased)
    }
}

/// Runs on-screen keyboard sessions on a canvas, a panel and the badge buttons.
///
/// The bridge borrows all three for its lifetime; nothing else may draw to the
/// canvas or read the buttons while a session runs.
pub struct KeyboardBridge<'a, C, D, B> {
    canvas: &'a mut C,
    display: &'a mut D,
    buttons: &'a mut B,
    config: BridgeConfig,
}

impl<'a, C, D, B> KeyboardBridge<'a, C, D, B>
where
    C: DrawTarget,
    C::Error: Debug,
    D: DisplayOutput<C>,
    B: ButtonReader,
{
    /// Creates a bridge with the default [`BridgeConfig`].
    ///
    /// # Arguments
    ///
    /// * `canvas` - The frame buffer the keyboard draws on.
    /// * `display` - Pushes the canvas to the panel.
    /// * `buttons` - Reads the badge buttons.
    pub fn new(canvas: &'a mut C, display: &'a mut D, buttons: &'a mut B) -> Self {
        Self::with_config(canvas, display, buttons, BridgeConfig::default())
    }

    /// Creates a bridge with a custom configuration.
    pub fn with_config(
        canvas: &'a mut C,
        display: &'a mut D,
        buttons: &'a mut B,
        config: BridgeConfig,
    ) -> Self {
        Self {
            canvas,
            display,
            buttons,
            config,
        }
    }

    /// Runs one keyboard session until the user accepts or cancels.
    ///
    /// `open` creates the keyboard for the full canvas area. When a `title` is
    /// given it is drawn at the top and the keyboard is moved below it.
    ///
    /// Returns the entered text, or `None` when the user pressed Home or Menu.
    /// The keyboard is dropped before this returns.
    pub async fn run<W, F>(&mut self, title: Option<&str>, open: F) -> Option<String>
    where
        W: TextEntry<Color = C::Color>,
        F: FnOnce(Rectangle) -> W,
    {
        let mut widget = open(self.canvas.bounding_box());
        info!("Keyboard session started");

        if let Some(title) = title {
            self.place_title(&mut widget, title);
        }

        if let Err(err) = widget.render(&mut *self.canvas) {
            warn!("Error rendering keyboard: {err:?}");
        }
        self.flush().await;

        let reason = self.interact(&mut widget).await;
        info!("Keyboard session ended: {reason:?}");

        let text = reason
            .is_accepted()
            .then(|| String::from(widget.content()));
        drop(widget);
        text
    }

    fn place_title<W>(&mut self, widget: &mut W, title: &str)
    where
        W: TextEntry<Color = C::Color>,
    {
        let width = self.canvas.bounding_box().size.width;
        let layout = TitleLayout::measure(title, width, &self.config);
        let margin = self.config.title_margin;
        if let Err(err) = layout.draw(&mut *self.canvas, title, margin, widget.palette()) {
            warn!("Error drawing title: {err:?}");
        }

        let reserved = layout.reserved_height(margin);
        let area = widget.area();
        widget.set_area(Rectangle::new(
            area.top_left + Point::new(0, reserved as i32),
            Size::new(area.size.width, area.size.height.saturating_sub(reserved)),
        ));
    }

    async fn interact<W>(&mut self, widget: &mut W) -> ExitReason
    where
        W: TextEntry<Color = C::Color>,
    {
        let pins = self.config.pins;
        let mut previous = ButtonState::BASELINE;

        loop {
            let current = ButtonState::poll(&mut *self.buttons, &pins, &previous).await;

            for event in previous.edges(&current) {
                debug!("Key event: {event:?}");
                widget.handle(event);
            }

            widget.tick();
            if widget.is_dirty() {
                if let Err(err) = widget.redraw(&mut *self.canvas) {
                    warn!("Error redrawing keyboard: {err:?}");
                }
                self.flush().await;
            }

            // Escape buttons are level triggered and count as released when
            // they cannot be read.
            let home = read_or(&mut *self.buttons, pins.pin(Button::Home), false).await;
            let menu = read_or(&mut *self.buttons, pins.pin(Button::Menu), false).await;
            if home {
                return ExitReason::Home;
            }
            if menu {
                return ExitReason::Menu;
            }

            if widget.is_accepted() && !current.accept {
                return ExitReason::InputAccepted;
            }
            if previous.start_released(&current) {
                return ExitReason::StartReleased;
            }

            previous = current;
            yield_now().await;
        }
    }

    async fn flush(&mut self) {
        if let Err(err) = self.display.flush(&*self.canvas).await {
            warn!("Error writing frame to display: {err:?}");
        }
    }
}

/// Runs a single keyboard session with the default configuration.
///
/// See [`KeyboardBridge::run`].
pub async fn keyb_simple<C, D, B, W, F>(
    canvas: &mut C,
    display: &mut D,
    buttons: &mut B,
    title: Option<&str>,
    open: F,
) -> Option<String>
where
    C: DrawTarget,
    C::Error: Debug,
    D: DisplayOutput<C>,
    B: ButtonReader,
    W: TextEntry<Color = C::Color>,
    F: FnOnce(Rectangle) -> W,
{
    KeyboardBridge::new(canvas, display, buttons)
        .run(title, open)
        .await
}
