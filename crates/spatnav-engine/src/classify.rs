//! Focusability, visibility and container classification.

use spatnav_types::{ContainMode, ElementKind, Point, VisualTree};

use crate::context::SearchContext;

impl<T: VisualTree> SearchContext<'_, T> {
    // -- Containers -----------------------------------------------------

    /// A navigation container bounds an independent sub-search: a tree
    /// root, an iframe, a scroll container, or an element opting in
    /// through its containment mode.
    pub fn is_container(&self, node: T::Node) -> bool {
        let style = self.tree.style(node);
        self.tree.parent(node).is_none()
            || self.tree.kind(node) == ElementKind::Iframe
            || style.is_scroll_container()
            || style.contain != ContainMode::Auto
    }

    pub fn is_delegable(&self, node: T::Node) -> bool {
        self.tree.style(node).contain == ContainMode::Delegable
    }

    /// Containers and `<body>` (but never inputs) search their own
    /// contents before looking outwards.
    pub fn searches_inward(&self, node: T::Node) -> bool {
        let kind = self.tree.kind(node);
        (self.is_container(node) || kind == ElementKind::Body)
            && !matches!(kind, ElementKind::Input(_))
    }

    /// Nearest strict ancestor that is a container, within the node's
    /// own document. `None` for a document element.
    pub fn nearest_container(&self, node: T::Node) -> Option<T::Node> {
        let mut cursor = self.tree.parent(node);
        while let Some(n) = cursor {
            if self.is_container(n) {
                return Some(n);
            }
            cursor = self.tree.parent(n);
        }
        None
    }

    /// The container a search escalates to from `container`: its nearest
    /// container, or for a framed document element the embedding
    /// document's element.
    pub fn parent_container(&self, container: T::Node) -> Option<T::Node> {
        self.nearest_container(container).or_else(|| {
            let root = self.tree.document_root(container);
            self.tree
                .frame_owner(root)
                .map(|owner| self.tree.document_root(owner))
        })
    }

    /// Inclusive descendant test that also walks out of framed
    /// documents through their owners.
    pub fn contains_across_frames(&self, ancestor: T::Node, node: T::Node) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if n == ancestor {
                return true;
            }
            cursor = self.tree.parent(n).or_else(|| self.tree.frame_owner(n));
        }
        false
    }

    // -- Focusability ---------------------------------------------------

    /// Scroll container whose content overflows on either axis.
    pub fn is_scrollable_container(&self, node: T::Node) -> bool {
        if !self.tree.style(node).is_scroll_container() {
            return false;
        }
        let m = self.tree.scroll_metrics(node);
        m.overflows_x() || m.overflows_y()
    }

    /// Whether spatial navigation may move focus to `node`.
    pub fn is_focusable(&self, node: T::Node) -> bool {
        let kind = self.tree.kind(node);
        let flags = self.tree.focus_flags(node);

        if flags.tab_index.is_some_and(|i| i < 0) {
            return false;
        }
        if kind == ElementKind::Anchor && !flags.has_href && flags.tab_index.is_none() {
            return false;
        }
        if (kind.is_form_control() && flags.disabled) || flags.inert {
            return false;
        }
        if !self.is_being_rendered(node) {
            return false;
        }

        self.tree.parent(node).is_none()
            || self.is_scrollable_container(node)
            || flags.tab_index.is_some()
            || kind.is_focusable_by_default()
    }

    /// Visible style on the element and its parent, non-zero opacity, and
    /// a non-empty box.
    pub fn is_being_rendered(&self, node: T::Node) -> bool {
        if let Some(parent) = self.tree.parent(node)
            && !self.tree.style(parent).is_visible()
        {
            return false;
        }
        let style = self.tree.style(node);
        let rect = self.rect(node);
        style.is_visible() && style.opacity != 0.0 && !(rect.width == 0.0 && rect.height == 0.0)
    }

    // -- Visibility -----------------------------------------------------

    /// Style says visible and a hit test finds the element (or one of
    /// its descendants) on screen. Document elements are always visible.
    pub fn is_visible(&self, node: T::Node) -> bool {
        self.tree.parent(node).is_none()
            || (self.tree.style(node).is_visible() && self.hit_test(node))
    }

    /// Fixture the center and the four corners (inset by a fraction of the
    /// size) with `element_from_point`.
    pub fn hit_test(&self, node: T::Node) -> bool {
        let r = self.rect(node);
        let dx = r.width * self.config.hit_test_inset;
        let dy = r.height * self.config.hit_test_inset;
        let probes = [
            r.center(),
            Point::new(r.left + dx, r.top + dy),
            Point::new(r.left + dx, r.bottom - dy),
            Point::new(r.right - dx, r.top + dy),
            Point::new(r.right - dx, r.bottom - dy),
        ];
        probes.into_iter().any(|p| {
            self.tree
                .element_from_point(p)
                .is_some_and(|hit| self.contains_across_frames(node, hit))
        })
    }
}
