//! Cancellable navigation lifecycle events.

use serde::{Deserialize, Serialize};

use crate::input::Direction;

/// The three points where a listener can veto a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavEventKind {
    /// Fired on the candidate before focus moves to it.
    BeforeFocus,
    /// Fired on a container before it is scrolled.
    BeforeScroll,
    /// Fired on a container that yielded neither a candidate nor a
    /// scroll, before the search moves to its ancestor container.
    NoTarget,
}

impl NavEventKind {
    /// The DOM event type name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BeforeFocus => "navbeforefocus",
            Self::BeforeScroll => "navbeforescroll",
            Self::NoTarget => "navnotarget",
        }
    }
}

/// A navigation event as dispatched to the host. Events bubble from
/// `target` towards the document root and are cancellable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEvent<N> {
    pub kind: NavEventKind,
    pub target: N,
    pub dir: Direction,
}

impl<N> NavEvent<N> {
    pub fn new(kind: NavEventKind, target: N, dir: Direction) -> Self {
        Self { kind, target, dir }
    }
}
