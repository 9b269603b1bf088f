//! Key input and arrow directions.
//!
//! Hosts map their native key events to [`KeyEvent`]; the navigation
//! engine never sees raw platform input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four arrow directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions in the order the auditor records them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// `true` for left and right.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
        }
    }

    /// Parse a lowercase direction name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "left" => Some(Self::Left),
            "up" => Some(Self::Up),
            "right" => Some(Self::Right),
            "down" => Some(Self::Down),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys the navigator reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Tab,
    Other,
}

impl Key {
    /// The arrow direction for this key, if it is an arrow key.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::ArrowLeft => Some(Direction::Left),
            Self::ArrowUp => Some(Direction::Up),
            Self::ArrowRight => Some(Direction::Right),
            Self::ArrowDown => Some(Direction::Down),
            Self::Tab | Self::Other => None,
        }
    }
}

/// A key press delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub shift: bool,
    /// Set when something upstream already handled the key.
    pub default_prevented: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            shift: false,
            default_prevented: false,
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn arrow(dir: Direction) -> Self {
        Self::new(match dir {
            Direction::Left => Key::ArrowLeft,
            Direction::Up => Key::ArrowUp,
            Direction::Right => Key::ArrowRight,
            Direction::Down => Key::ArrowDown,
        })
    }
}

/// Which key chord triggers spatial navigation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyMode {
    /// Plain arrow keys navigate; Shift+arrow is left alone.
    #[default]
    #[serde(rename = "ARROW")]
    Arrow,
    /// Only Shift+arrow navigates.
    #[serde(rename = "SHIFTARROW")]
    ShiftArrow,
    /// Navigation is disabled.
    #[serde(rename = "NONE")]
    None,
}

impl KeyMode {
    /// Parse a mode name; anything unrecognised falls back to `ARROW`.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "SHIFTARROW" => Self::ShiftArrow,
            "NONE" => Self::None,
            _ => Self::Arrow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Arrow => "ARROW",
            Self::ShiftArrow => "SHIFTARROW",
            Self::None => "NONE",
        }
    }

    /// Whether an arrow press with the given Shift state should navigate.
    pub fn accepts(self, shift: bool) -> bool {
        match self {
            Self::Arrow => !shift,
            Self::ShiftArrow => shift,
            Self::None => false,
        }
    }
}
