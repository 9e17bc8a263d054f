//! An asynchronous, `no_std` text input helper for badges with an on-screen keyboard.
//!
//! This crate provides a `KeyboardBridge` that shows an on-screen keyboard on an
//! `embedded-graphics` canvas, polls the badge buttons (on the MCH2022 badge
//! through a PCA9555 I/O expander), forwards button presses and releases to the
//! keyboard and pushes the canvas to the panel whenever the keyboard changed.
//! It returns the entered text once the user accepts, or `None` when the user
//! cancels with Home or Menu.
//!
//! The keyboard itself is not part of this crate. Anything implementing
//! [`TextEntry`] can be driven by the bridge.
//!
//! Button mapping:
//!
//! | Button           | Action                                         |
//! |------------------|------------------------------------------------|
//! | Joystick         | Navigate the keyboard / selection              |
//! | Joystick center  | Shift                                          |
//! | Accept           | Type the selected key                          |
//! | Back             | Backspace                                      |
//! | Select           | Switch keyboard (letters, numbers, symbols)    |
//! | Start            | Exit and accept the input                      |
//! | Home / Menu      | Exit and reject the input                      |
//!
//! # Usage
//!
//! You need a canvas implementing `DrawTarget`, a [`DisplayOutput`] that sends
//! the canvas to the panel, a [`ButtonReader`] for the buttons and a keyboard
//! implementing [`TextEntry`].
//!
//! ```ignore
//! use mch_keyb_async::keyb_simple;
//!
//! #[embassy_executor::task]
//! async fn ask_name(
//!     mut framebuffer: FrameBuffer,
//!     mut panel: Ili9341Output,
//!     mut expander: Pca9555Buttons,
//! ) {
//!     let name = keyb_simple(
//!         &mut framebuffer,
//!         &mut panel,
//!         &mut expander,
//!         Some("Nickname"),
//!         |area| Keyboard::new(area),
//!     )
//!     .await;
//!
//!     match name {
//!         Some(name) => log::info!("Hello {name}"),
//!         None => log::info!("Cancelled"),
//!     }
//! }
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

extern crate alloc;

pub mod bridge;
pub mod buttons;
pub mod display;
pub mod gpio;
pub mod pins;
pub mod title;
pub mod widget;

#[cfg(test)]
mod test_support;

pub use bridge::{keyb_simple, BridgeConfig, ExitReason, KeyboardBridge};
pub use buttons::{ButtonReader, ButtonState};
pub use display::DisplayOutput;
pub use gpio::{GpioButtons, GpioError};
pub use pins::{Button, ButtonPins};
pub use widget::{KeyAction, KeyEvent, Palette, TextEntry};
