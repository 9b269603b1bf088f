//! The navigation state machine.
//!
//! One gesture runs from [`NavState::Idle`] to a terminal outcome: focus
//! moved, a container scrolled, or nothing happened. Reads go through a
//! [`SearchContext`] over the gesture's own rect cache. Writes go through
//! a [`Driver`], so the live navigator and the read-only experimental API
//! share the same walk.

use serde::Serialize;
use spatnav_types::{ActionMode, Direction, ElementKind, NavEvent, NavEventKind, VisualTree};

use crate::cache::RectCache;
use crate::candidates::FocusableMode;
use crate::config::NavConfig;
use crate::context::SearchContext;
use crate::scroll::scrolled_position;
use crate::search::{SearchOptions, SearchOrigin};

/// States a gesture passes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavState {
    Idle,
    SearchingWithinContainer,
    Scrolling,
    EscalatingToAncestor,
    CrossingFrameBoundary,
    Failed,
}

/// How a gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome<N> {
    /// Focus moved to the element.
    Focused(N),
    /// The container was scrolled one step.
    Scrolled(N),
    /// Nothing changed.
    Failed,
}

impl<N: Copy> NavOutcome<N> {
    pub fn focused(&self) -> Option<N> {
        match self {
            Self::Focused(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Record of one gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<N> {
    /// The element the gesture started from.
    pub origin: N,
    pub outcome: NavOutcome<N>,
    /// Every state entered, `Idle` first.
    pub path: Vec<NavState>,
    /// Candidates of the search that produced the focus move. Empty for
    /// scrolls and failures.
    pub candidates: Vec<N>,
}

// ---------------------------------------------------------------------------
// Drivers
// ---------------------------------------------------------------------------

/// The host side of a gesture: where events go and how focus and scroll
/// changes are applied.
pub(crate) trait Driver<T: VisualTree> {
    fn tree(&self) -> &T;

    /// Dispatch `event`. `false` when a listener cancelled it.
    fn notify(&mut self, event: NavEvent<T::Node>) -> bool;

    fn focus(&mut self, node: T::Node, scroll_into_view: bool);

    fn scroll(&mut self, node: T::Node, left: f64, top: f64);
}

/// Applies every step to the host.
pub(crate) struct LiveDriver<'a, T> {
    pub tree: &'a mut T,
}

impl<T: VisualTree> Driver<T> for LiveDriver<'_, T> {
    fn tree(&self) -> &T {
        &*self.tree
    }

    fn notify(&mut self, event: NavEvent<T::Node>) -> bool {
        self.tree.dispatch(&event)
    }

    fn focus(&mut self, node: T::Node, scroll_into_view: bool) {
        if scroll_into_view {
            self.tree.scroll_into_view(node);
        }
        self.tree.focus(node);
    }

    fn scroll(&mut self, node: T::Node, left: f64, top: f64) {
        self.tree.set_scroll_position(node, left, top);
    }
}

/// Walks the gesture without touching the host. No listener runs, so
/// nothing is ever cancelled.
pub(crate) struct DryRun<'a, T> {
    pub tree: &'a T,
}

impl<T: VisualTree> Driver<T> for DryRun<'_, T> {
    fn tree(&self) -> &T {
        self.tree
    }

    fn notify(&mut self, _event: NavEvent<T::Node>) -> bool {
        true
    }

    fn focus(&mut self, _node: T::Node, _scroll_into_view: bool) {}

    fn scroll(&mut self, _node: T::Node, _left: f64, _top: f64) {}
}

// ---------------------------------------------------------------------------
// Machine
// ---------------------------------------------------------------------------

struct Trace<N> {
    path: Vec<NavState>,
    candidates: Vec<N>,
}

impl<N> Trace<N> {
    fn new() -> Self {
        Self {
            path: vec![NavState::Idle],
            candidates: Vec::new(),
        }
    }

    fn enter(&mut self, state: NavState) {
        log::debug!("-> {:?}", state);
        self.path.push(state);
    }
}

/// One gesture in one direction. Owns the gesture's rect cache, so a
/// machine must not outlive the gesture it was built for.
pub(crate) struct Machine<'a, T: VisualTree> {
    config: &'a NavConfig,
    cache: RectCache<T::Node>,
    dir: Direction,
    mode: FocusableMode,
}

impl<'a, T: VisualTree> Machine<'a, T> {
    pub(crate) fn new(config: &'a NavConfig, dir: Direction, mode: FocusableMode) -> Self {
        Self {
            config,
            cache: RectCache::new(),
            dir,
            mode,
        }
    }

    fn ctx<'s>(&'s self, tree: &'s T) -> SearchContext<'s, T> {
        SearchContext::new(tree, self.config, &self.cache)
    }

    pub(crate) fn run<D: Driver<T>>(&self, driver: &mut D, origin: T::Node) -> Navigation<T::Node> {
        let mut trace = Trace::new();
        let outcome = self.drive(driver, origin, &mut trace);
        if outcome.is_failed() {
            trace.enter(NavState::Failed);
        }
        log::debug!("{} from {:?}: {:?}", self.dir, origin, outcome);
        Navigation {
            origin,
            outcome,
            path: trace.path,
            candidates: trace.candidates,
        }
    }

    fn drive<D: Driver<T>>(
        &self,
        driver: &mut D,
        origin: T::Node,
        trace: &mut Trace<T::Node>,
    ) -> NavOutcome<T::Node> {
        let mut target = origin;

        if self.ctx(driver.tree()).searches_inward(target) {
            trace.enter(NavState::SearchingWithinContainer);
            let (best, candidates, inner) = {
                let ctx = self.ctx(driver.tree());
                let options = SearchOptions {
                    mode: self.mode,
                    ..Default::default()
                };
                let (from, candidates) =
                    ctx.search_candidates(SearchOrigin::Element(target), self.dir, &options);
                let best = ctx.select_best(from, &candidates, self.dir, self.mode);
                (best, candidates, ctx.inward_target(target))
            };
            if let Some(best) = best
                && self.try_focus(driver, best)
            {
                trace.candidates = candidates;
                return NavOutcome::Focused(best);
            }
            trace.enter(NavState::Scrolling);
            target = inner;
            let scroller = {
                let tree = driver.tree();
                if tree.kind(target) == ElementKind::Body {
                    tree.document_root(target)
                } else {
                    target
                }
            };
            if self.try_scroll(driver, scroller) {
                return NavOutcome::Scrolled(scroller);
            }
        }

        let (mut container, mut parent) = {
            let ctx = self.ctx(driver.tree());
            let container = ctx
                .nearest_container(target)
                .unwrap_or_else(|| ctx.tree.document_root(target));
            let parent = ctx
                .parent_container(container)
                .or_else(|| Some(ctx.tree.document_root(container)));
            (container, parent)
        };

        while let Some(next) = parent {
            trace.enter(NavState::SearchingWithinContainer);
            if let Some(outcome) = self.focus_step(driver, target, container, trace) {
                return outcome;
            }
            trace.enter(NavState::Scrolling);
            if self.try_scroll(driver, container) {
                return NavOutcome::Scrolled(container);
            }
            if !driver.notify(NavEvent::new(NavEventKind::NoTarget, container, self.dir)) {
                return NavOutcome::Failed;
            }

            let ctx = self.ctx(driver.tree());
            if ctx.tree.parent(container).is_none() {
                let Some(owner) = ctx.tree.frame_owner(container) else {
                    return NavOutcome::Failed;
                };
                trace.enter(NavState::CrossingFrameBoundary);
                target = owner;
                container = ctx.tree.document_root(owner);
            } else {
                trace.enter(NavState::EscalatingToAncestor);
                if ctx.is_focusable(container) {
                    target = container;
                }
                container = next;
            }
            parent = ctx.parent_container(container);
        }

        trace.enter(NavState::SearchingWithinContainer);
        if let Some(outcome) = self.focus_step(driver, target, container, trace) {
            return outcome;
        }
        trace.enter(NavState::Scrolling);
        if self.try_scroll(driver, container) {
            return NavOutcome::Scrolled(container);
        }
        NavOutcome::Failed
    }

    /// Search `container`'s focusable areas from `target` and focus the
    /// winner.
    fn focus_step<D: Driver<T>>(
        &self,
        driver: &mut D,
        target: T::Node,
        container: T::Node,
        trace: &mut Trace<T::Node>,
    ) -> Option<NavOutcome<T::Node>> {
        let (best, candidates) = {
            let ctx = self.ctx(driver.tree());
            let areas = ctx.focusable_areas(container, self.mode);
            if areas.is_empty() {
                return None;
            }
            let options = SearchOptions::within(container, areas, self.mode);
            let (from, candidates) =
                ctx.search_candidates(SearchOrigin::Element(target), self.dir, &options);
            (ctx.select_best(from, &candidates, self.dir, self.mode), candidates)
        };
        let best = best?;
        if !self.try_focus(driver, best) {
            return None;
        }
        trace.candidates = candidates;
        Some(NavOutcome::Focused(best))
    }

    /// Fire `navbeforefocus` on `best` and move focus unless cancelled
    /// or its container only scrolls.
    fn try_focus<D: Driver<T>>(&self, driver: &mut D, best: T::Node) -> bool {
        let needs_scroll = {
            let ctx = self.ctx(driver.tree());
            let home = ctx.nearest_container(best);
            if let Some(home) = home
                && ctx.tree.style(home).action == ActionMode::Scroll
            {
                log::debug!("{:?} is scroll-only, not focusing {:?}", home, best);
                return false;
            }
            home.is_some_and(|c| ctx.tree.style(c).is_scroll_container())
                && !ctx.is_entirely_visible(best)
        };
        if !driver.notify(NavEvent::new(NavEventKind::BeforeFocus, best, self.dir)) {
            return false;
        }
        log::debug!("focusing {:?}{}", best, if needs_scroll { " (scrolled into view)" } else { "" });
        driver.focus(best, needs_scroll);
        true
    }

    /// Fire `navbeforescroll` on the scroll target of `container` and
    /// scroll it one step unless cancelled or the container only takes
    /// focus.
    fn try_scroll<D: Driver<T>>(&self, driver: &mut D, container: T::Node) -> bool {
        let (target, (left, top)) = {
            let ctx = self.ctx(driver.tree());
            if ctx.tree.style(container).action == ActionMode::Focus {
                return false;
            }
            let Some(target) = ctx.scroll_target(container, self.dir) else {
                return false;
            };
            let metrics = ctx.tree.scroll_metrics(target);
            (
                target,
                scrolled_position(&metrics, self.dir, self.config.scroll_step, 0.0),
            )
        };
        if !driver.notify(NavEvent::new(NavEventKind::BeforeScroll, target, self.dir)) {
            return false;
        }
        log::debug!("scrolling {:?} to ({}, {})", target, left, top);
        driver.scroll(target, left, top);
        true
    }
}
