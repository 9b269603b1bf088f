use spatnav_types::{
    ComputedStyle, ElementKind, FocusFlags, NavEvent, Point, Rect, ScrollMetrics, TextSelection,
    VisualTree,
};

use crate::document::{Document, NodeId};

impl VisualTree for Document {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node].parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node].children
    }

    fn document_element(&self) -> NodeId {
        self.root
    }

    fn body(&self, document_root: NodeId) -> Option<NodeId> {
        self.body_of(document_root)
    }

    fn frame_content(&self, frame: NodeId) -> Option<NodeId> {
        self.nodes[frame].frame_content
    }

    fn frame_owner(&self, document_root: NodeId) -> Option<NodeId> {
        self.nodes[document_root].frame_owner
    }

    fn kind(&self, node: NodeId) -> ElementKind {
        self.nodes[node].kind
    }

    fn style(&self, node: NodeId) -> ComputedStyle {
        self.nodes[node].style
    }

    fn focus_flags(&self, node: NodeId) -> FocusFlags {
        self.nodes[node].flags
    }

    fn bounding_rect(&self, node: NodeId) -> Rect {
        Document::bounding_rect(self, node)
    }

    fn scroll_metrics(&self, node: NodeId) -> ScrollMetrics {
        Document::scroll_metrics(self, node)
    }

    fn text_selection(&self, node: NodeId) -> Option<TextSelection> {
        let n = &self.nodes[node];
        if n.kind.is_editable() {
            Some(n.selection.unwrap_or_default())
        } else {
            None
        }
    }

    fn element_from_point(&self, point: Point) -> Option<NodeId> {
        self.hit_test(point)
    }

    fn active_element(&self) -> Option<NodeId> {
        self.focused
    }

    fn focus(&mut self, node: NodeId) {
        log::debug!("focus -> {}", self.describe(node));
        self.focused = Some(node);
    }

    fn set_scroll_position(&mut self, node: NodeId, left: f64, top: f64) {
        self.set_scroll(node, left, top);
    }

    fn scroll_into_view(&mut self, node: NodeId) {
        Document::scroll_into_view(self, node);
    }

    fn dispatch(&mut self, event: &NavEvent<NodeId>) -> bool {
        let path = self.bubble_path(event.target);
        self.listeners.dispatch(event, &path)
    }
}
