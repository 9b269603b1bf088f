//! Per-gesture bounding-rect memo.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;

use spatnav_types::Rect;

/// Rounded bounding rects keyed by element, valid for one gesture.
///
/// A navigation gesture creates one cache, threads it through every
/// search it performs and drops it when the gesture ends. Entries are
/// never invalidated in between: the same element always yields the
/// same rect for the cache's lifetime.
#[derive(Debug)]
pub struct RectCache<N> {
    rects: RefCell<HashMap<N, Rect>>,
}

impl<N: Copy + Eq + Hash> Default for RectCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Copy + Eq + Hash> RectCache<N> {
    pub fn new() -> Self {
        Self {
            rects: RefCell::new(HashMap::new()),
        }
    }

    /// Cached rect of `node`, computing and rounding it on first use.
    pub fn get_or_insert_with(&self, node: N, compute: impl FnOnce() -> Rect) -> Rect {
        if let Some(rect) = self.rects.borrow().get(&node) {
            return *rect;
        }
        let rect = compute().rounded();
        self.rects.borrow_mut().insert(node, rect);
        rect
    }

    pub fn len(&self) -> usize {
        self.rects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn computes_once_per_node() {
        let cache = RectCache::new();
        let calls = Cell::new(0);
        let compute = || {
            calls.set(calls.get() + 1);
            Rect::new(0.0, 0.0, 10.0, 10.0)
        };
        cache.get_or_insert_with(1usize, compute);
        cache.get_or_insert_with(1usize, compute);
        assert_eq!(calls.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn stored_rects_are_rounded() {
        let cache = RectCache::new();
        let r = cache.get_or_insert_with(7usize, || Rect::new(0.333_33, 1.0, 10.0, 10.0));
        assert_eq!(r.left, 0.33);
    }

    #[test]
    fn later_layout_changes_are_not_observed() {
        let cache = RectCache::new();
        let first = cache.get_or_insert_with(1usize, || Rect::new(0.0, 0.0, 10.0, 10.0));
        let second = cache.get_or_insert_with(1usize, || Rect::new(50.0, 50.0, 10.0, 10.0));
        assert_eq!(first, second);
    }

    #[test]
    fn new_cache_is_empty() {
        let cache: RectCache<usize> = RectCache::default();
        assert!(cache.is_empty());
    }
}
