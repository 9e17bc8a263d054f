//! Logical badge buttons and where they are wired on the I/O expander.

/// A physical button on the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// The start button. Releasing it confirms the input.
    Start,
    /// The select button. Cycles the keyboard mode.
    Select,
    /// The menu button. Cancels the input.
    Menu,
    /// The home button. Cancels the input.
    Home,
    /// Joystick left.
    JoyLeft,
    /// Joystick center press. Acts as shift.
    JoyPress,
    /// Joystick down.
    JoyDown,
    /// Joystick up.
    JoyUp,
    /// Joystick right.
    JoyRight,
    /// The back button. Deletes the character before the cursor.
    Back,
    /// The accept button. Types the selected character.
    Accept,
}

impl Button {
    /// All buttons, in expander pin order of the default map.
    pub const ALL: [Button; 11] = [
        Button::Start,
        Button::Select,
        Button::Menu,
        Button::Home,
        Button::JoyLeft,
        Button::JoyPress,
        Button::JoyDown,
        Button::JoyUp,
        Button::JoyRight,
        Button::Back,
        Button::Accept,
    ];
}

/// Maps every [`Button`] to an input pin on the expander.
///
/// The default is the PCA9555 wiring of the MCH2022 badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPins {
    /// Pin of [`Button::Start`].
    pub start: u8,
    /// Pin of [`Button::Select`].
    pub select: u8,
    /// Pin of [`Button::Menu`].
    pub menu: u8,
    /// Pin of [`Button::Home`].
    pub home: u8,
    /// Pin of [`Button::JoyLeft`].
    pub joy_left: u8,
    /// Pin of [`Button::JoyPress`].
    pub joy_press: u8,
    /// Pin of [`Button::JoyDown`].
    pub joy_down: u8,
    /// Pin of [`Button::JoyUp`].
    pub joy_up: u8,
    /// Pin of [`Button::JoyRight`].
    pub joy_right: u8,
    /// Pin of [`Button::Back`].
    pub back: u8,
    /// Pin of [`Button::Accept`].
    pub accept: u8,
}

impl Default for ButtonPins {
    fn default() -> Self {
        Self {
            start: 5,
            select: 6,
            menu: 7,
            home: 8,
            joy_left: 9,
            joy_press: 10,
            joy_down: 11,
            joy_up: 12,
            joy_right: 13,
            back: 14,
            accept: 15,
        }
    }
}

impl ButtonPins {
    /// Returns the expander pin `button` is wired to.
    pub fn pin(&self, button: Button) -> u8 {
        match button {
            Button::Start => self.start,
            Button::Select => self.select,
            Button::Menu => self.menu,
            Button::Home => self.home,
            Button::JoyLeft => self.joy_left,
            Button::JoyPress => self.joy_press,
            Button::JoyDown => self.joy_down,
            Button::JoyUp => self.joy_up,
            Button::JoyRight => self.joy_right,
            Button::Back => self.back,
            Button::Accept => self.accept,
        }
    }
}
