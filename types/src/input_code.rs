//! Input code vocabulary shared by keyboard and mouse watchers.
//!
//! A single `InputCode` covers both devices so one watcher type can observe
//! either. Codes have a canonical text form used in configuration files:
//!
//! - Keys by name: `"Space"`, `"A"`, `"Digit1"`, `"F5"`, `"LeftShift"`
//! - Mouse buttons with a `Mouse` prefix: `"MouseLeft"`, `"MouseX1"`
//!
//! Parsing is case-insensitive and accepts a few common modifier aliases.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Keyboard keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    LeftShift,
    RightShift,
    LeftControl,
    RightControl,
    LeftAlt,
    RightAlt,
}

impl Key {
    /// Every key, in declaration order
    pub const ALL: &'static [Key] = &[
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::Space,
        Key::Enter,
        Key::Escape,
        Key::Tab,
        Key::Backspace,
        Key::Delete,
        Key::Insert,
        Key::Home,
        Key::End,
        Key::PageUp,
        Key::PageDown,
        Key::LeftShift,
        Key::RightShift,
        Key::LeftControl,
        Key::RightControl,
        Key::LeftAlt,
        Key::RightAlt,
    ];

    /// Canonical name used in configuration text
    pub fn name(self) -> &'static str {
        match self {
            Key::A => "A",
            Key::B => "B",
            Key::C => "C",
            Key::D => "D",
            Key::E => "E",
            Key::F => "F",
            Key::G => "G",
            Key::H => "H",
            Key::I => "I",
            Key::J => "J",
            Key::K => "K",
            Key::L => "L",
            Key::M => "M",
            Key::N => "N",
            Key::O => "O",
            Key::P => "P",
            Key::Q => "Q",
            Key::R => "R",
            Key::S => "S",
            Key::T => "T",
            Key::U => "U",
            Key::V => "V",
            Key::W => "W",
            Key::X => "X",
            Key::Y => "Y",
            Key::Z => "Z",
            Key::Digit0 => "Digit0",
            Key::Digit1 => "Digit1",
            Key::Digit2 => "Digit2",
            Key::Digit3 => "Digit3",
            Key::Digit4 => "Digit4",
            Key::Digit5 => "Digit5",
            Key::Digit6 => "Digit6",
            Key::Digit7 => "Digit7",
            Key::Digit8 => "Digit8",
            Key::Digit9 => "Digit9",
            Key::F1 => "F1",
            Key::F2 => "F2",
            Key::F3 => "F3",
            Key::F4 => "F4",
            Key::F5 => "F5",
            Key::F6 => "F6",
            Key::F7 => "F7",
            Key::F8 => "F8",
            Key::F9 => "F9",
            Key::F10 => "F10",
            Key::F11 => "F11",
            Key::F12 => "F12",
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Space => "Space",
            Key::Enter => "Enter",
            Key::Escape => "Escape",
            Key::Tab => "Tab",
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Insert => "Insert",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
            Key::LeftShift => "LeftShift",
            Key::RightShift => "RightShift",
            Key::LeftControl => "LeftControl",
            Key::RightControl => "RightControl",
            Key::LeftAlt => "LeftAlt",
            Key::RightAlt => "RightAlt",
        }
    }

    /// Look up a key by name (case-insensitive, with modifier aliases)
    pub fn from_name(name: &str) -> Option<Key> {
        let lower = name.to_ascii_lowercase();
        // Aliases map to the left-hand modifier
        let lower = match lower.as_str() {
            "ctrl" | "control" => "leftcontrol",
            "shift" => "leftshift",
            "alt" => "leftalt",
            "esc" => "escape",
            "return" => "enter",
            other => other,
        };
        Key::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(lower))
    }
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    X1,
    X2,
}

impl MouseButton {
    pub const ALL: &'static [MouseButton] = &[
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::X1,
        MouseButton::X2,
    ];

    /// Canonical name without the `Mouse` prefix
    pub fn name(self) -> &'static str {
        match self {
            MouseButton::Left => "Left",
            MouseButton::Right => "Right",
            MouseButton::Middle => "Middle",
            MouseButton::X1 => "X1",
            MouseButton::X2 => "X2",
        }
    }
}

/// A watchable input on either device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InputCode {
    Key(Key),
    Mouse(MouseButton),
}

impl InputCode {
    pub fn is_key(&self) -> bool {
        matches!(self, InputCode::Key(_))
    }

    pub fn is_mouse(&self) -> bool {
        matches!(self, InputCode::Mouse(_))
    }
}

impl From<Key> for InputCode {
    fn from(key: Key) -> Self {
        InputCode::Key(key)
    }
}

impl From<MouseButton> for InputCode {
    fn from(button: MouseButton) -> Self {
        InputCode::Mouse(button)
    }
}

impl fmt::Display for InputCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputCode::Key(key) => f.write_str(key.name()),
            InputCode::Mouse(button) => write!(f, "Mouse{}", button.name()),
        }
    }
}

/// Error returned when an input code name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseInputCodeError {
    #[error("input code is empty")]
    Empty,
    #[error("unknown key '{0}'")]
    UnknownKey(String),
    #[error("unknown mouse button '{0}'")]
    UnknownMouseButton(String),
}

impl FromStr for InputCode {
    type Err = ParseInputCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseInputCodeError::Empty);
        }

        // "MouseLeft" / "mouse_left" / "mouse-left"
        let lower = s.to_ascii_lowercase();
        if let Some(rest) = lower.strip_prefix("mouse") {
            let rest = rest.trim_start_matches(['_', '-', ':']);
            return MouseButton::ALL
                .iter()
                .copied()
                .find(|b| b.name().eq_ignore_ascii_case(rest))
                .map(InputCode::Mouse)
                .ok_or_else(|| ParseInputCodeError::UnknownMouseButton(s.to_string()));
        }

        Key::from_name(s)
            .map(InputCode::Key)
            .ok_or_else(|| ParseInputCodeError::UnknownKey(s.to_string()))
    }
}

impl TryFrom<String> for InputCode {
    type Error = ParseInputCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InputCode> for String {
    fn from(code: InputCode) -> Self {
        code.to_string()
    }
}
