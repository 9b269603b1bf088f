//! Directional scroll predicates.

use spatnav_types::{Direction, ScrollMetrics, VisualTree};

use crate::context::SearchContext;
use crate::geometry::is_entirely_within;

impl<T: VisualTree> SearchContext<'_, T> {
    /// Content overflows on the axis of `dir`.
    pub fn is_overflow(&self, node: T::Node, dir: Direction) -> bool {
        let m = self.tree.scroll_metrics(node);
        if dir.is_horizontal() {
            m.overflows_x()
        } else {
            m.overflows_y()
        }
    }

    /// Content overflows on the axis of `dir` and that axis scrolls.
    pub fn is_scrollable(&self, node: T::Node, dir: Direction) -> bool {
        if !self.is_overflow(node, dir) {
            return false;
        }
        let style = self.tree.style(node);
        if dir.is_horizontal() {
            style.overflow_x.is_scrolling()
        } else {
            style.overflow_y.is_scrolling()
        }
    }

    /// A scrollable element already scrolled as far as it goes in `dir`.
    /// Elements that cannot scroll in `dir` are never at a boundary.
    pub fn is_scroll_boundary(&self, node: T::Node, dir: Direction) -> bool {
        if !self.is_scrollable(node, dir) {
            return false;
        }
        at_limit(&self.tree.scroll_metrics(node), dir, self.config.scroll_tolerance)
    }

    /// The document element `root` is scrolled as far as it goes in
    /// `dir`, whatever its overflow style says.
    pub fn is_html_scroll_boundary(&self, root: T::Node, dir: Direction) -> bool {
        at_limit(&self.tree.scroll_metrics(root), dir, self.config.scroll_tolerance)
    }

    /// The element that a scroll gesture in `dir` at `container` would
    /// move: the container itself when it can scroll further, or a
    /// document element that has not reached its limit.
    pub fn scroll_target(&self, container: T::Node, dir: Direction) -> Option<T::Node> {
        if self.is_scrollable(container, dir) && !self.is_scroll_boundary(container, dir) {
            return Some(container);
        }
        if self.tree.parent(container).is_none() && !self.is_html_scroll_boundary(container, dir) {
            return Some(container);
        }
        None
    }

    pub fn can_scroll(&self, container: T::Node, dir: Direction) -> bool {
        self.scroll_target(container, dir).is_some()
    }

    /// `node` lies wholly inside its container's box.
    pub fn is_entirely_visible(&self, node: T::Node) -> bool {
        match self.nearest_container(node) {
            Some(container) => is_entirely_within(&self.rect(container), &self.rect(node)),
            None => true,
        }
    }
}

fn at_limit(m: &ScrollMetrics, dir: Direction, tolerance: f64) -> bool {
    match dir {
        Direction::Left => m.scroll_left <= 0.0,
        Direction::Up => m.scroll_top <= 0.0,
        Direction::Right => (m.scroll_left - m.max_scroll_left()).abs() <= tolerance,
        Direction::Down => (m.scroll_top - m.max_scroll_top()).abs() <= tolerance,
    }
}

/// Offsets after scrolling `step + offset` pixels in `dir`. Hosts clamp.
pub fn scrolled_position(m: &ScrollMetrics, dir: Direction, step: f64, offset: f64) -> (f64, f64) {
    let delta = step + offset;
    match dir {
        Direction::Left => (m.scroll_left - delta, m.scroll_top),
        Direction::Right => (m.scroll_left + delta, m.scroll_top),
        Direction::Up => (m.scroll_left, m.scroll_top - delta),
        Direction::Down => (m.scroll_left, m.scroll_top + delta),
    }
}
