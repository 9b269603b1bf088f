//! In-memory visual tree for spatial navigation.
//!
//! [`Document`] is an arena of laid-out elements that implements
//! [`spatnav_types::VisualTree`]: parent/child links, layout rectangles
//! with ancestor scroll offsets applied, clipping-aware hit testing,
//! focus, scrolling, bubbling cancellable listeners, and embedded
//! frames. Layouts can be built in code with [`ElementSpec`] or loaded
//! from a TOML/JSON [`fixture::LayoutFixture`].

pub mod document;
pub mod fixture;
mod host;
pub mod listener;

pub use document::{Document, ElementSpec, Node, NodeId, ScrollState};
pub use fixture::{ElementFixture, FrameFixture, LayoutFixture};
pub use listener::ListenerAction;
