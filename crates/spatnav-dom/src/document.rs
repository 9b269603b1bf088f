//! Arena-based visual tree.
//!
//! Nodes are stored in a flat `Vec` arena and linked by index. Every
//! document, including those embedded by `<iframe>` elements, lives in
//! the same arena; a frame's content document is linked to its owner
//! through [`Node::frame_owner`] / [`Node::frame_content`].
//!
//! Layout rectangles are stored unscrolled, in the coordinate space of
//! the owning document. [`Document::bounding_rect`] applies ancestor
//! scroll offsets and frame positions to produce viewport coordinates.

use std::fmt;

use spatnav_types::{
    ActionMode, ComputedStyle, ContainMode, Display, ElementKind, FocusFlags, NavEvent,
    NavEventKind, Overflow, Point, Position, Rect, ScrollMetrics, TextSelection, Visibility,
};

use crate::listener::{ListenerAction, ListenerRegistry};

/// Index into the [`Document`]'s node arena.
pub type NodeId = usize;

// ------------------------------------------------------------------
// Node
// ------------------------------------------------------------------

/// Scroll offsets of one element, plus an optional explicit content
/// size. Without one the content size is derived from the laid-out
/// descendants.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    pub left: f64,
    pub top: f64,
    pub content_width: Option<f64>,
    pub content_height: Option<f64>,
}

/// A single element.
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: ElementKind,
    /// The `id` attribute.
    pub id: Option<String>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Unscrolled border box in document coordinates.
    pub layout: Rect,
    pub style: ComputedStyle,
    pub flags: FocusFlags,
    pub scroll: ScrollState,
    pub selection: Option<TextSelection>,
    /// Document element of the embedded document (iframes only).
    pub frame_content: Option<NodeId>,
    /// Embedding iframe (framed document elements only).
    pub frame_owner: Option<NodeId>,
}

impl Node {
    fn new(kind: ElementKind, layout: Rect) -> Self {
        Self {
            kind,
            id: None,
            parent: None,
            children: Vec::new(),
            layout,
            style: ComputedStyle::default(),
            flags: FocusFlags::default(),
            scroll: ScrollState::default(),
            selection: None,
            frame_content: None,
            frame_owner: None,
        }
    }

    /// Overflow on either axis clips descendants.
    pub fn clips(&self) -> bool {
        self.style.overflow_x != Overflow::Visible || self.style.overflow_y != Overflow::Visible
    }
}

// ------------------------------------------------------------------
// ElementSpec
// ------------------------------------------------------------------

/// Builder describing an element to append.
#[derive(Debug, Clone)]
pub struct ElementSpec {
    kind: ElementKind,
    id: Option<String>,
    rect: Rect,
    style: ComputedStyle,
    flags: FocusFlags,
    content_size: (Option<f64>, Option<f64>),
    selection: Option<TextSelection>,
}

impl ElementSpec {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            id: None,
            rect: Rect::default(),
            style: ComputedStyle::default(),
            flags: FocusFlags::default(),
            content_size: (None, None),
            selection: None,
        }
    }

    pub fn button() -> Self {
        Self::new(ElementKind::Button)
    }

    pub fn div() -> Self {
        Self::new(ElementKind::Generic)
    }

    /// An anchor with an `href`.
    pub fn link() -> Self {
        Self::new(ElementKind::Anchor).href()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn rect(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.rect = Rect::new(x, y, width, height);
        self
    }

    pub fn tab_index(mut self, index: i32) -> Self {
        self.flags.tab_index = Some(index);
        self
    }

    pub fn href(mut self) -> Self {
        self.flags.has_href = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.flags.disabled = true;
        self
    }

    pub fn inert(mut self) -> Self {
        self.flags.inert = true;
        self
    }

    pub fn click_handler(mut self) -> Self {
        self.flags.has_click_handler = true;
        self
    }

    pub fn style(mut self, style: ComputedStyle) -> Self {
        self.style = style;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.style = self.style.with_overflow(overflow);
        self
    }

    pub fn contain(mut self, contain: ContainMode) -> Self {
        self.style.contain = contain;
        self
    }

    pub fn action(mut self, action: ActionMode) -> Self {
        self.style.action = action;
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.style.position = position;
        self
    }

    pub fn display(mut self, display: Display) -> Self {
        self.style.display = display;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.style.visibility = visibility;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.style.opacity = opacity;
        self
    }

    /// Explicit scrollable content size.
    pub fn content_size(mut self, width: f64, height: f64) -> Self {
        self.content_size = (Some(width), Some(height));
        self
    }

    /// Value length and caret range of a text field.
    pub fn text(mut self, len: usize, start: usize, end: usize) -> Self {
        self.selection = Some(TextSelection { start, end, len });
        self
    }
}

// ------------------------------------------------------------------
// Document
// ------------------------------------------------------------------

/// An arena of documents: the top-level one plus any framed ones.
pub struct Document {
    pub nodes: Vec<Node>,
    pub root: NodeId,
    pub(crate) focused: Option<NodeId>,
    pub(crate) listeners: ListenerRegistry,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .field("focused", &self.focused)
            .finish()
    }
}

impl Document {
    /// A document with an `<html>` and a `<body>` filling a viewport of
    /// the given size.
    pub fn new(width: f64, height: f64) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: 0,
            focused: None,
            listeners: ListenerRegistry::default(),
        };
        doc.root = doc.new_document(Rect::new(0.0, 0.0, width, height));
        doc
    }

    fn new_document(&mut self, viewport: Rect) -> NodeId {
        let html = self.push(Node::new(ElementKind::Html, viewport));
        let body = self.push(Node::new(ElementKind::Body, viewport));
        self.link(html, body);
        html
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(node);
        id
    }

    fn link(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    /// The `<body>` of the top-level document.
    pub fn body_id(&self) -> NodeId {
        self.body_of(self.root).unwrap_or(self.root)
    }

    pub(crate) fn body_of(&self, document_root: NodeId) -> Option<NodeId> {
        self.nodes[document_root]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c].kind == ElementKind::Body)
    }

    /// Append a new element as the last child of `parent`.
    pub fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let mut node = Node::new(spec.kind, spec.rect);
        node.id = spec.id;
        node.style = spec.style;
        node.flags = spec.flags;
        node.scroll.content_width = spec.content_size.0;
        node.scroll.content_height = spec.content_size.1;
        node.selection = spec.selection;
        let id = self.push(node);
        self.link(parent, id);
        id
    }

    /// Give `iframe` a content document sized to the frame and return the
    /// new document's `<body>`.
    pub fn attach_frame(&mut self, iframe: NodeId) -> NodeId {
        let size = self.nodes[iframe].layout;
        let html = self.new_document(Rect::new(0.0, 0.0, size.width, size.height));
        self.nodes[html].frame_owner = Some(iframe);
        self.nodes[iframe].frame_content = Some(html);
        self.body_of(html).unwrap_or(html)
    }

    /// First element (in arena order) with the given `id` attribute.
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
    }

    /// Short human-readable label: `tag#id`, or `tag@index` without an id.
    pub fn describe(&self, id: NodeId) -> String {
        match self.nodes.get(id) {
            Some(node) => match &node.id {
                Some(name) => format!("{}#{}", node.kind.tag_name(), name),
                None => format!("{}@{}", node.kind.tag_name(), id),
            },
            None => format!("?@{id}"),
        }
    }

    pub fn set_content_size(&mut self, id: NodeId, width: f64, height: f64) {
        let scroll = &mut self.nodes[id].scroll;
        scroll.content_width = Some(width);
        scroll.content_height = Some(height);
    }

    pub fn set_selection(&mut self, id: NodeId, start: usize, end: usize) {
        let len = self.nodes[id].selection.map(|s| s.len).unwrap_or(0);
        self.nodes[id].selection = Some(TextSelection {
            start: start.min(len),
            end: end.min(len),
            len,
        });
    }

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Current `(left, top)` scroll offsets of `id`.
    pub fn scroll_position(&self, id: NodeId) -> (f64, f64) {
        let s = self.nodes[id].scroll;
        (s.left, s.top)
    }

    // -- Listeners ----------------------------------------------------

    pub fn add_listener(
        &mut self,
        node: NodeId,
        kind: NavEventKind,
        callback: impl FnMut(&NavEvent<NodeId>) -> ListenerAction + 'static,
    ) {
        self.listeners.add(node, kind, callback);
    }

    /// Every event dispatched so far, oldest first.
    pub fn dispatched(&self) -> &[NavEvent<NodeId>] {
        self.listeners.log()
    }

    pub fn clear_dispatched(&mut self) {
        self.listeners.clear_log();
    }

    pub(crate) fn bubble_path(&self, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut cursor = self.nodes[target].parent;
        while let Some(p) = cursor {
            path.push(p);
            cursor = self.nodes[p].parent;
        }
        path
    }

    // -- Geometry -----------------------------------------------------

    fn root_of(&self, id: NodeId) -> NodeId {
        let mut root = id;
        while let Some(p) = self.nodes[root].parent {
            root = p;
        }
        root
    }

    /// Border box in viewport coordinates.
    pub fn bounding_rect(&self, id: NodeId) -> Rect {
        let node = &self.nodes[id];
        let (mut dx, mut dy) = (0.0, 0.0);
        let mut cursor = node.parent;
        while let Some(p) = cursor {
            dx -= self.nodes[p].scroll.left;
            dy -= self.nodes[p].scroll.top;
            cursor = self.nodes[p].parent;
        }
        if let Some(owner) = self.nodes[self.root_of(id)].frame_owner {
            let frame = self.bounding_rect(owner);
            dx += frame.left;
            dy += frame.top;
        }
        node.layout.offset(dx, dy)
    }

    /// Size of the scrollable content of `id`. Descendants of clipping
    /// elements do not contribute to an outer element's extent.
    fn content_size(&self, id: NodeId) -> (f64, f64) {
        let node = &self.nodes[id];
        let origin = node.layout;
        let (mut right, mut bottom) = (origin.right, origin.bottom);
        let mut stack: Vec<NodeId> = node.children.clone();
        while let Some(n) = stack.pop() {
            let child = &self.nodes[n];
            if child.style.display == Display::None {
                continue;
            }
            right = right.max(child.layout.right);
            bottom = bottom.max(child.layout.bottom);
            if !child.clips() {
                stack.extend(child.children.iter().copied());
            }
        }
        (
            node.scroll.content_width.unwrap_or(right - origin.left),
            node.scroll.content_height.unwrap_or(bottom - origin.top),
        )
    }

    pub fn scroll_metrics(&self, id: NodeId) -> ScrollMetrics {
        let node = &self.nodes[id];
        let (scroll_width, scroll_height) = self.content_size(id);
        ScrollMetrics {
            scroll_left: node.scroll.left,
            scroll_top: node.scroll.top,
            scroll_width,
            scroll_height,
            client_width: node.layout.width,
            client_height: node.layout.height,
        }
    }

    /// Set scroll offsets, clamped to the scrollable range.
    pub fn set_scroll(&mut self, id: NodeId, left: f64, top: f64) {
        let m = self.scroll_metrics(id);
        let scroll = &mut self.nodes[id].scroll;
        scroll.left = left.clamp(0.0, m.max_scroll_left());
        scroll.top = top.clamp(0.0, m.max_scroll_top());
        log::trace!("scroll {} to ({}, {})", id, scroll.left, scroll.top);
    }

    /// Scroll every enclosing scroll container of `id` (and finally its
    /// document) so that `id` is centered wherever it is out of view.
    pub fn scroll_into_view(&mut self, id: NodeId) {
        let mut cursor = self.nodes[id].parent;
        while let Some(container) = cursor {
            let node = &self.nodes[container];
            let is_root = node.parent.is_none();
            if is_root || node.style.is_scroll_container() {
                let target = self.bounding_rect(id);
                let view = self.bounding_rect(container);
                let (mut left, mut top) = self.scroll_position(container);
                if target.left < view.left || target.right > view.right {
                    left += target.center().x - view.center().x;
                }
                if target.top < view.top || target.bottom > view.bottom {
                    top += target.center().y - view.center().y;
                }
                self.set_scroll(container, left, top);
            }
            cursor = self.nodes[container].parent;
        }
    }

    // -- Hit testing --------------------------------------------------

    /// Topmost element painted at `point`. Paint order is tree order with
    /// a frame's content painted right after the frame element.
    pub fn hit_test(&self, point: Point) -> Option<NodeId> {
        let viewport = self.bounding_rect(self.root);
        let mut hit = None;
        self.hit_walk(self.root, viewport, point, &mut hit);
        hit
    }

    fn hit_walk(&self, id: NodeId, clip: Rect, point: Point, hit: &mut Option<NodeId>) {
        let node = &self.nodes[id];
        if node.style.display == Display::None {
            return;
        }
        let rect = self.bounding_rect(id);
        if node.style.visibility == Visibility::Visible
            && rect.contains_point(point)
            && clip.contains_point(point)
        {
            *hit = Some(id);
        }
        let inner = if node.clips() || node.kind == ElementKind::Iframe {
            match rect.intersection(&clip) {
                Some(r) => r,
                None => return,
            }
        } else {
            clip
        };
        for &child in &node.children {
            self.hit_walk(child, inner, point, hit);
        }
        if let Some(content) = node.frame_content {
            self.hit_walk(content, inner, point, hit);
        }
    }
}
