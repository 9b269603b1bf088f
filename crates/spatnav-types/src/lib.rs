//! Foundation types and traits for spatial navigation.
//!
//! This crate contains the host-agnostic types shared by all spatnav
//! crates: rectangles and points, arrow directions and key input,
//! element metadata (kind, computed style, focusability, scroll state),
//! navigation events, the [`host::VisualTree`] trait a rendering engine
//! implements, and the error type.

pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod host;
pub mod input;

pub use element::{
    ActionMode, ComputedStyle, ContainMode, Display, ElementKind, FocusFlags, InputType,
    Overflow, Position, ScrollMetrics, TextSelection, Visibility,
};
pub use error::{Result, SpatNavError};
pub use event::{NavEvent, NavEventKind};
pub use geometry::{Point, Rect};
pub use host::VisualTree;
pub use input::{Direction, Key, KeyEvent, KeyMode};
