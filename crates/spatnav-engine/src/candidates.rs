//! Candidate collection and directional filtering.

use serde::{Deserialize, Serialize};
use spatnav_types::{Direction, Rect, VisualTree};

use crate::context::SearchContext;
use crate::geometry::is_outside;
use crate::search::SearchOrigin;

/// Which focusable areas to enumerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusableMode {
    /// Only areas a hit test finds on screen.
    #[default]
    Visible,
    /// Every focusable area, on screen or not.
    All,
}

impl<T: VisualTree> SearchContext<'_, T> {
    /// Focusable descendants of `node` in tree order. A document element
    /// enumerates from its `<body>`. Framed documents are not entered.
    pub fn focusable_areas(&self, node: T::Node, mode: FocusableMode) -> Vec<T::Node> {
        let scope = if self.tree.parent(node).is_none() {
            self.tree.body(node).unwrap_or(node)
        } else {
            node
        };
        let areas: Vec<_> = self
            .tree
            .descendants(scope)
            .into_iter()
            .filter(|&n| self.is_focusable(n))
            .filter(|&n| mode == FocusableMode::All || self.is_visible(n))
            .collect();
        log::trace!("{} focusable areas under {:?} ({:?})", areas.len(), node, mode);
        areas
    }

    /// The rect directional filtering measures from. An off-screen
    /// element searching outside its own container is replaced by that
    /// container, unless the container is a document element.
    pub(crate) fn origin_rect(&self, origin: SearchOrigin<T::Node>, container: T::Node) -> Rect {
        match origin {
            SearchOrigin::Point(p) => Rect::at_point(p),
            SearchOrigin::Element(el) => match self.nearest_container(el) {
                Some(home)
                    if self.tree.parent(home).is_some()
                        && home != container
                        && !self.is_visible(el) =>
                {
                    self.rect(home)
                },
                _ => self.rect(el),
            },
        }
    }

    /// Keep candidates that lie in `dir` from the origin and whose own
    /// container is inside `container`. The origin itself is always
    /// dropped. Without a direction nothing is filtered.
    pub fn filtered_candidates(
        &self,
        origin: SearchOrigin<T::Node>,
        candidates: &[T::Node],
        dir: Option<Direction>,
        container: T::Node,
    ) -> Vec<T::Node> {
        let Some(dir) = dir else {
            return candidates.to_vec();
        };
        let origin_rect = self.origin_rect(origin, container);
        let origin_node = origin.element();
        candidates
            .iter()
            .copied()
            .filter(|&c| Some(c) != origin_node)
            .filter(|&c| {
                self.nearest_container(c)
                    .is_some_and(|home| self.tree.contains(container, home))
            })
            .filter(|&c| is_outside(&self.rect(c), &origin_rect, dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use spatnav_dom::{Document, ElementSpec};
    use spatnav_types::{ElementKind, Point};

    use crate::test_utils::{Fixture, row, scroll_list};

    use super::*;

    #[test]
    fn areas_in_tree_order() {
        let (doc, boxes) = row(3);
        let fx = Fixture::new();
        let ctx = fx.ctx(&doc);
        assert_eq!(ctx.focusable_areas(doc.root, FocusableMode::Visible), boxes);
        assert_eq!(ctx.focusable_areas(doc.body_id(), FocusableMode::Visible), boxes);
    }

    #[test]
    fn visible_mode_drops_clipped_items() {
        let s = scroll_list();
        let fx = Fixture::new();
        let ctx = fx.ctx(&s.doc);
        let visible = ctx.focusable_areas(s.list, FocusableMode::Visible);
        assert_eq!(visible, vec![s.items[0], s.items[1]]);
        let all = ctx.focusable_areas(s.list, FocusableMode::All);
        assert_eq!(all, s.items);
        let page = ctx.focusable_areas(s.doc.root, FocusableMode::Visible);
        assert_eq!(page, vec![s.above, s.list, s.items[0], s.items[1]]);
    }

    #[test]
    fn frames_are_not_entered() {
        let mut doc = Document::new(800.0, 600.0);
        let body = doc.body_id();
        let frame = doc.append(
            body,
            ElementSpec::new(ElementKind::Iframe).rect(0.0, 0.0, 300.0, 300.0),
        );
        let inner_body = doc.attach_frame(frame);
        let inner = doc.append(inner_body, ElementSpec::button().rect(0.0, 0.0, 50.0, 20.0));
        let fx = Fixture::new();
        let ctx = fx.ctx(&doc);
        assert_eq!(ctx.focusable_areas(doc.root, FocusableMode::All), vec![frame]);
        let inner_root = doc.frame_content(frame).unwrap();
        assert_eq!(ctx.focusable_areas(inner_root, FocusableMode::All), vec![inner]);
    }

    #[test]
    fn filter_keeps_only_direction() {
        let (doc, boxes) = row(3);
        let fx = Fixture::new();
        let ctx = fx.ctx(&doc);
        let origin = SearchOrigin::Element(boxes[1]);
        let right = ctx.filtered_candidates(origin, &boxes, Some(Direction::Right), doc.root);
        assert_eq!(right, vec![boxes[2]]);
        let left = ctx.filtered_candidates(origin, &boxes, Some(Direction::Left), doc.root);
        assert_eq!(left, vec![boxes[0]]);
        assert!(ctx
            .filtered_candidates(origin, &boxes, Some(Direction::Up), doc.root)
            .is_empty());
        let all = ctx.filtered_candidates(origin, &boxes, None, doc.root);
        assert_eq!(all, boxes);
    }

    #[test]
    fn filter_respects_container() {
        let s = scroll_list();
        let fx = Fixture::new();
        let ctx = fx.ctx(&s.doc);
        let page = ctx.focusable_areas(s.doc.root, FocusableMode::All);
        let origin = SearchOrigin::Element(s.above);
        let in_list = ctx.filtered_candidates(origin, &page, Some(Direction::Down), s.list);
        assert_eq!(in_list, s.items);
        let in_page = ctx.filtered_candidates(origin, &page, Some(Direction::Down), s.doc.root);
        assert_eq!(in_page.len(), 6);
    }

    #[test]
    fn point_origin_filters_from_point() {
        let (doc, boxes) = row(3);
        let fx = Fixture::new();
        let ctx = fx.ctx(&doc);
        let origin = SearchOrigin::Point(Point::new(300.0, 40.0));
        let right = ctx.filtered_candidates(origin, &boxes, Some(Direction::Right), doc.root);
        assert_eq!(right, vec![boxes[2]]);
    }

    #[test]
    fn offscreen_origin_measures_from_its_container() {
        let mut s = scroll_list();
        let below = s.doc.append(
            s.doc.body_id(),
            ElementSpec::button().id("below").rect(0.0, 400.0, 200.0, 40.0),
        );
        let fx = Fixture::new();
        let ctx = fx.ctx(&s.doc);
        // item4 is scrolled out of view; searching the page measures from
        // the list's box instead.
        let origin = SearchOrigin::Element(s.items[4]);
        assert_eq!(ctx.origin_rect(origin, s.doc.root), ctx.rect(s.list));
        let up = ctx.filtered_candidates(origin, &[s.above, below], Some(Direction::Up), s.doc.root);
        assert_eq!(up, vec![s.above]);
    }
}
