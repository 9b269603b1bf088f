use spatnav_types::{Rect, VisualTree};

use crate::cache::RectCache;
use crate::config::NavConfig;

/// Read-only view of the host used by every query of one gesture: the
/// tree, the navigator's configuration and the gesture's rect cache.
///
/// Classification, candidate collection, scroll predicates and search
/// are implemented as methods on this type in their own modules.
pub struct SearchContext<'a, T: VisualTree> {
    pub tree: &'a T,
    pub config: &'a NavConfig,
    cache: &'a RectCache<T::Node>,
}

impl<'a, T: VisualTree> SearchContext<'a, T> {
    pub fn new(tree: &'a T, config: &'a NavConfig, cache: &'a RectCache<T::Node>) -> Self {
        Self {
            tree,
            config,
            cache,
        }
    }

    /// Rounded bounding rect of `node`, memoized for the gesture.
    pub fn rect(&self, node: T::Node) -> Rect {
        self.cache
            .get_or_insert_with(node, || self.tree.bounding_rect(node))
    }
}
