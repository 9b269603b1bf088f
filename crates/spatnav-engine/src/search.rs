//! Best-candidate search.

use spatnav_types::{Direction, ElementKind, Point, Rect, VisualTree};

use crate::candidates::FocusableMode;
use crate::context::SearchContext;
use crate::distance::{Weights, distance, inner_distance, nearest};

/// Where a search measures from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOrigin<N> {
    /// An element's border box.
    Element(N),
    /// A zero-size box at a screen point.
    Point(Point),
}

impl<N: Copy> SearchOrigin<N> {
    pub fn element(&self) -> Option<N> {
        match self {
            Self::Element(n) => Some(*n),
            Self::Point(_) => None,
        }
    }
}

/// Optional inputs of [`SearchContext::search`].
#[derive(Debug, Clone)]
pub struct SearchOptions<N> {
    /// Explicit candidates; filtered directionally before scoring.
    pub candidates: Option<Vec<N>>,
    /// Container bounding the search. Defaults to the origin's nearest
    /// container (or the document element for a point).
    pub container: Option<N>,
    pub mode: FocusableMode,
}

impl<N> Default for SearchOptions<N> {
    fn default() -> Self {
        Self {
            candidates: None,
            container: None,
            mode: FocusableMode::Visible,
        }
    }
}

impl<N> SearchOptions<N> {
    pub fn within(container: N, candidates: Vec<N>, mode: FocusableMode) -> Self {
        Self {
            candidates: Some(candidates),
            container: Some(container),
            mode,
        }
    }
}

impl<T: VisualTree> SearchContext<'_, T> {
    fn default_container(&self, origin: SearchOrigin<T::Node>) -> T::Node {
        match origin {
            SearchOrigin::Element(el) => self
                .nearest_container(el)
                .unwrap_or_else(|| self.tree.document_root(el)),
            SearchOrigin::Point(_) => self.tree.document_element(),
        }
    }

    /// An iframe searches inside its content document's body.
    pub(crate) fn inward_target(&self, node: T::Node) -> T::Node {
        if self.tree.kind(node) == ElementKind::Iframe {
            self.tree
                .frame_content(node)
                .and_then(|root| self.tree.body(root))
                .unwrap_or(node)
        } else {
            node
        }
    }

    pub(crate) fn origin_box(&self, origin: SearchOrigin<T::Node>) -> Rect {
        match origin {
            SearchOrigin::Element(el) => self.rect(el),
            SearchOrigin::Point(p) => Rect::at_point(p),
        }
    }

    /// The candidate set a search from `origin` considers, along with the
    /// origin it is scored from (an iframe searching inward is replaced
    /// by its content body).
    ///
    /// Without explicit candidates, an origin that searches inward takes
    /// all of its own focusable areas; anything else takes its
    /// container's areas, filtered towards `dir`.
    pub fn search_candidates(
        &self,
        origin: SearchOrigin<T::Node>,
        dir: Direction,
        options: &SearchOptions<T::Node>,
    ) -> (SearchOrigin<T::Node>, Vec<T::Node>) {
        let container = options
            .container
            .unwrap_or_else(|| self.default_container(origin));
        if let Some(candidates) = &options.candidates
            && !candidates.is_empty()
        {
            return (
                origin,
                self.filtered_candidates(origin, candidates, Some(dir), container),
            );
        }
        if let SearchOrigin::Element(el) = origin
            && self.searches_inward(el)
        {
            let target = self.inward_target(el);
            return (
                SearchOrigin::Element(target),
                self.focusable_areas(target, options.mode),
            );
        }
        let areas = self.focusable_areas(container, options.mode);
        (
            origin,
            self.filtered_candidates(origin, &areas, Some(dir), container),
        )
    }

    /// Best candidate from `origin` towards `dir`, or `None`.
    pub fn search(
        &self,
        origin: SearchOrigin<T::Node>,
        dir: Direction,
        options: &SearchOptions<T::Node>,
    ) -> Option<T::Node> {
        let (origin, candidates) = self.search_candidates(origin, dir, options);
        self.select_best(origin, &candidates, dir, options.mode)
    }

    /// Pick among already-collected candidates. Candidates that all lie
    /// within an inward-searching origin are ranked by edge distance;
    /// otherwise by directional distance. A delegable winner hands the
    /// search on to its own focusable areas.
    pub fn select_best(
        &self,
        origin: SearchOrigin<T::Node>,
        candidates: &[T::Node],
        dir: Direction,
        mode: FocusableMode,
    ) -> Option<T::Node> {
        if candidates.is_empty() {
            return None;
        }
        let from = self.origin_box(origin);
        let scored = candidates.iter().map(|&c| (c, self.rect(c)));
        let weights = Weights::from(self.config);

        let inward = origin.element().is_some_and(|el| {
            self.searches_inward(el) && {
                let inside = self.focusable_areas(el, mode);
                candidates.iter().all(|c| inside.contains(c))
            }
        });
        let best = if inward {
            nearest(scored, |r| inner_distance(&from, r, dir))
        } else {
            nearest(scored, |r| distance(&from, r, dir, &weights))
        }?;
        log::trace!(
            "best of {} candidates towards {}: {:?}{}",
            candidates.len(),
            dir,
            best,
            if inward { " (inward)" } else { "" }
        );
        Some(self.delegate(best, &from, dir, mode, &weights))
    }

    fn delegate(
        &self,
        mut best: T::Node,
        from: &Rect,
        dir: Direction,
        mode: FocusableMode,
        weights: &Weights,
    ) -> T::Node {
        while self.is_delegable(best) {
            let inner = self.focusable_areas(best, mode);
            let scored = inner.iter().map(|&n| (n, self.rect(n)));
            match nearest(scored, |r| distance(from, r, dir, weights)) {
                Some(next) => {
                    log::debug!("delegating {:?} -> {:?}", best, next);
                    best = next;
                },
                None => break,
            }
        }
        best
    }

    /// Score of `candidate` as seen from `origin`: edge distance when the
    /// origin searches inward and contains the candidate, directional
    /// distance otherwise.
    pub fn distance_from_target(
        &self,
        origin: T::Node,
        candidate: T::Node,
        dir: Direction,
    ) -> f64 {
        let from = self.rect(origin);
        let to = self.rect(candidate);
        if self.searches_inward(origin)
            && self
                .focusable_areas(origin, FocusableMode::Visible)
                .contains(&candidate)
        {
            return inner_distance(&from, &to, dir);
        }
        distance(&from, &to, dir, &Weights::from(self.config))
    }
}
