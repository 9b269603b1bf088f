//! The interface a rendering engine implements so spatial navigation can
//! run over its visual tree.
//!
//! The navigation engine only reads through this trait during a search;
//! it writes (`focus`, `set_scroll_position`, `scroll_into_view`,
//! `dispatch`) only at the terminal step of a gesture.

use std::fmt::Debug;
use std::hash::Hash;

use crate::element::{ComputedStyle, ElementKind, FocusFlags, ScrollMetrics, TextSelection};
use crate::event::NavEvent;
use crate::geometry::{Point, Rect};

/// A live visual tree owned by the host.
pub trait VisualTree {
    /// Opaque element handle. Equality is element identity.
    type Node: Copy + Eq + Hash + Debug;

    // -- Tree structure ---------------------------------------------------

    /// Parent element within the same document. `None` for a document
    /// element.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Children in DOM order.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Document element of the top-level document.
    fn document_element(&self) -> Self::Node;

    /// The `<body>` of the document rooted at `document_root`.
    fn body(&self, document_root: Self::Node) -> Option<Self::Node>;

    /// Document element of the document embedded by a frame element.
    fn frame_content(&self, frame: Self::Node) -> Option<Self::Node>;

    /// The frame element embedding the document rooted at
    /// `document_root`, or `None` for the top-level document.
    fn frame_owner(&self, document_root: Self::Node) -> Option<Self::Node>;

    // -- Element data -----------------------------------------------------

    fn kind(&self, node: Self::Node) -> ElementKind;

    fn style(&self, node: Self::Node) -> ComputedStyle;

    fn focus_flags(&self, node: Self::Node) -> FocusFlags;

    /// Border box in viewport coordinates, after layout and scrolling.
    fn bounding_rect(&self, node: Self::Node) -> Rect;

    fn scroll_metrics(&self, node: Self::Node) -> ScrollMetrics;

    /// Caret state for text fields, `None` for everything else.
    fn text_selection(&self, node: Self::Node) -> Option<TextSelection>;

    /// Topmost element painted at `point`, if any.
    fn element_from_point(&self, point: Point) -> Option<Self::Node>;

    /// The focused element, `None` when nothing has focus.
    fn active_element(&self) -> Option<Self::Node>;

    // -- Mutation -----------------------------------------------------------

    fn focus(&mut self, node: Self::Node);

    /// Set the scroll offsets of `node`. Hosts clamp to the valid range.
    fn set_scroll_position(&mut self, node: Self::Node, left: f64, top: f64);

    /// Scroll the nearest scrollable ancestor so `node` becomes visible.
    fn scroll_into_view(&mut self, node: Self::Node);

    /// Dispatch a navigation event. Returns `false` when a listener
    /// cancelled it.
    fn dispatch(&mut self, event: &NavEvent<Self::Node>) -> bool;

    // -- Provided ---------------------------------------------------------

    /// Inclusive descendant test within one document.
    fn contains(&self, ancestor: Self::Node, node: Self::Node) -> bool {
        let mut cursor = Some(node);
        while let Some(n) = cursor {
            if n == ancestor {
                return true;
            }
            cursor = self.parent(n);
        }
        false
    }

    /// Document element of the document `node` belongs to.
    fn document_root(&self, node: Self::Node) -> Self::Node {
        let mut root = node;
        while let Some(p) = self.parent(root) {
            root = p;
        }
        root
    }

    /// Element descendants of `node` in tree order, excluding `node`.
    fn descendants(&self, node: Self::Node) -> Vec<Self::Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Self::Node> = self.children(node).iter().rev().copied().collect();
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }
}
