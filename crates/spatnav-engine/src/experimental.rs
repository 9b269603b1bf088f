//! Read-only introspection used by the auditor and devtools.
//!
//! Every query replays the navigation state machine without touching the
//! host: no event is dispatched, focus and scroll offsets stay put.

use spatnav_types::{Direction, VisualTree};

use crate::cache::RectCache;
use crate::candidates::FocusableMode;
use crate::config::NavConfig;
use crate::context::SearchContext;
use crate::nav::{DryRun, Machine, NavOutcome, Navigation};

/// Handle returned by [`crate::SpatialNavigator::experimental`] when the
/// experimental APIs are enabled.
pub struct Experimental<'a, T: VisualTree> {
    tree: &'a T,
    config: &'a NavConfig,
}

impl<'a, T: VisualTree> Experimental<'a, T> {
    pub(crate) fn new(tree: &'a T, config: &'a NavConfig) -> Self {
        Self { tree, config }
    }

    fn dry_run(&self, node: T::Node, dir: Direction, mode: FocusableMode) -> Navigation<T::Node> {
        Machine::<T>::new(self.config, dir, mode).run(&mut DryRun { tree: self.tree }, node)
    }

    pub fn is_container(&self, node: T::Node) -> bool {
        let cache = RectCache::new();
        SearchContext::new(self.tree, self.config, &cache).is_container(node)
    }

    /// The candidates the gesture from `node` would choose among. Empty
    /// when the gesture would scroll or do nothing.
    pub fn find_candidates(&self, node: T::Node, dir: Direction, mode: FocusableMode) -> Vec<T::Node> {
        self.dry_run(node, dir, mode).candidates
    }

    /// Where focus would go from `node`. `node` itself when the gesture
    /// would scroll instead, `None` when it would fail.
    pub fn find_next_target(
        &self,
        node: T::Node,
        dir: Direction,
        mode: FocusableMode,
    ) -> Option<T::Node> {
        match self.dry_run(node, dir, mode).outcome {
            NavOutcome::Focused(next) => Some(next),
            NavOutcome::Scrolled(_) => Some(node),
            NavOutcome::Failed => None,
        }
    }

    pub fn distance_from_target(&self, node: T::Node, candidate: T::Node, dir: Direction) -> f64 {
        let cache = RectCache::new();
        SearchContext::new(self.tree, self.config, &cache).distance_from_target(node, candidate, dir)
    }
}
