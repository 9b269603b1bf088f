//! Spatial navigation engine.
//!
//! Moves focus between elements of a [`spatnav_types::VisualTree`] with
//! the arrow keys. A gesture collects the focusable areas of the
//! origin's container, keeps those lying in the pressed direction,
//! scores them by directional distance and focuses the best one. When a
//! container has nothing to offer it is scrolled one step, and when it
//! cannot scroll either the search escalates to the enclosing container,
//! crossing out of embedded frames. Listeners can veto each step through
//! the `navbeforefocus`, `navbeforescroll` and `navnotarget` events.
//!
//! [`SpatialNavigator`] is the entry point. The free functions in
//! [`geometry`] and [`distance`] are usable on their own.

pub mod cache;
pub mod candidates;
pub mod classify;
pub mod config;
pub mod context;
pub mod distance;
pub mod editable;
pub mod experimental;
pub mod geometry;
pub mod nav;
pub mod navigator;
pub mod scroll;
pub mod search;

#[cfg(test)]
pub(crate) mod test_utils;

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use cache::RectCache;
pub use candidates::FocusableMode;
pub use config::NavConfig;
pub use context::SearchContext;
pub use distance::Weights;
pub use experimental::Experimental;
pub use nav::{NavOutcome, NavState, Navigation};
pub use navigator::SpatialNavigator;
pub use search::{SearchOptions, SearchOrigin};
