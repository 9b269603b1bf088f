//! The navigator: key and pointer front end plus the public search API.

use spatnav_types::{Direction, Key, KeyEvent, KeyMode, Point, VisualTree};

use crate::cache::RectCache;
use crate::candidates::FocusableMode;
use crate::config::NavConfig;
use crate::context::SearchContext;
use crate::editable::arrow_navigates;
use crate::experimental::Experimental;
use crate::nav::{LiveDriver, Machine, Navigation};
use crate::search::{SearchOptions, SearchOrigin};

/// Spatial navigation for one page.
///
/// Owns the configuration and the last pointer position. Each gesture
/// builds its own rect cache and drops it when the gesture ends.
#[derive(Debug, Clone, Default)]
pub struct SpatialNavigator {
    config: NavConfig,
    pointer: Option<Point>,
}

impl SpatialNavigator {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            pointer: None,
        }
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut NavConfig {
        &mut self.config
    }

    pub fn set_key_mode(&mut self, mode: KeyMode) {
        self.config.key_mode = mode;
    }

    /// Set the key mode by name. Unknown names select `ARROW`.
    pub fn set_key_mode_str(&mut self, mode: &str) {
        self.config.set_key_mode_str(mode);
    }

    /// Turn the experimental introspection API on or off. The key mode is
    /// kept either way.
    pub fn enable_experimental_apis(&mut self, enabled: bool) {
        self.config.experimental_apis = enabled;
    }

    /// Remember where the pointer was released. The next gesture starts
    /// from the element under it when that element lies inside the
    /// current starting point.
    pub fn handle_pointer_up(&mut self, point: Point) {
        self.pointer = Some(point);
    }

    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    /// Feed a key press. Returns `true` when the key was consumed by a
    /// navigation gesture.
    pub fn handle_key<T: VisualTree>(&mut self, tree: &mut T, event: KeyEvent) -> bool {
        if event.key == Key::Tab {
            self.pointer = None;
            return false;
        }
        let Some(dir) = event.key.direction() else {
            return false;
        };
        if !self.config.key_mode.accepts(event.shift) || event.default_prevented {
            return false;
        }
        if let Some(active) = tree.active_element() {
            let kind = tree.kind(active);
            if kind.is_editable() && !arrow_navigates(kind, tree.text_selection(active), dir) {
                log::trace!("{} kept by {:?}", dir, kind);
                return false;
            }
        }
        self.navigate(tree, dir);
        true
    }

    /// Run one gesture in `dir` from the focused element.
    pub fn navigate<T: VisualTree>(&mut self, tree: &mut T, dir: Direction) -> Navigation<T::Node> {
        let origin = self.starting_point(tree);
        Machine::<T>::new(&self.config, dir, FocusableMode::Visible)
            .run(&mut LiveDriver { tree }, origin)
    }

    /// The focused element (a document element stands in for its body),
    /// or the element under the remembered pointer when it lies inside
    /// it. Consumes the pointer.
    fn starting_point<T: VisualTree>(&mut self, tree: &T) -> T::Node {
        let active = tree
            .active_element()
            .unwrap_or_else(|| tree.document_element());
        let origin = if tree.parent(active).is_none() {
            tree.body(active).unwrap_or(active)
        } else {
            active
        };
        let Some(point) = self.pointer.take() else {
            return origin;
        };
        let cache = RectCache::new();
        let ctx = SearchContext::new(tree, &self.config, &cache);
        match tree.element_from_point(point) {
            Some(hit) if ctx.contains_across_frames(origin, hit) => {
                log::debug!("starting from pointer at ({}, {}): {:?}", point.x, point.y, hit);
                hit
            },
            _ => origin,
        }
    }

    // -- Queries ----------------------------------------------------------

    /// Best candidate from `origin` towards `dir` without moving focus.
    pub fn search<T: VisualTree>(
        &self,
        tree: &T,
        origin: SearchOrigin<T::Node>,
        dir: Direction,
        options: &SearchOptions<T::Node>,
    ) -> Option<T::Node> {
        let cache = RectCache::new();
        SearchContext::new(tree, &self.config, &cache).search(origin, dir, options)
    }

    pub fn focusable_areas<T: VisualTree>(
        &self,
        tree: &T,
        node: T::Node,
        mode: FocusableMode,
    ) -> Vec<T::Node> {
        let cache = RectCache::new();
        SearchContext::new(tree, &self.config, &cache).focusable_areas(node, mode)
    }

    /// The container enclosing `node`. A framed document element resolves
    /// to the embedding document's element; the top document element has
    /// none.
    pub fn spatial_navigation_container<T: VisualTree>(
        &self,
        tree: &T,
        node: T::Node,
    ) -> Option<T::Node> {
        let cache = RectCache::new();
        SearchContext::new(tree, &self.config, &cache).parent_container(node)
    }

    /// The experimental API, when enabled.
    pub fn experimental<'a, T: VisualTree>(&'a self, tree: &'a T) -> Option<Experimental<'a, T>> {
        self.config
            .experimental_apis
            .then(|| Experimental::new(tree, &self.config))
    }
}
