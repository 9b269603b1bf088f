//! The navigation graph: where each arrow key leads from each focusable
//! element.

use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use spatnav_engine::{FocusableMode, NavConfig, SearchOptions, SearchOrigin, SpatialNavigator};
use spatnav_types::{Direction, Result, SpatNavError, VisualTree};

/// One row per focusable element: `[self, up, down, left, right]` as
/// indices into [`NavGraph::nodes`]. A target equal to the row's own
/// index means the arrow scrolls instead of moving focus.
pub type Row = [Option<usize>; 5];

#[derive(Debug, Clone, PartialEq)]
pub struct NavGraph<N> {
    /// The focusable snapshot. Indices in rows refer to it.
    pub nodes: Vec<N>,
    pub rows: Vec<Row>,
    /// Where a "down" press from the body lands, the likely first focus.
    pub entry: Option<usize>,
}

impl<N: Copy + Eq + Hash + Debug> NavGraph<N> {
    /// Snapshot every focusable element of `tree` (framed documents
    /// included) and ask the engine, without moving focus, where each
    /// arrow leads from each of them.
    pub fn build<T: VisualTree<Node = N>>(tree: &T, config: &NavConfig) -> Result<Self> {
        let mut config = config.clone();
        config.experimental_apis = true;
        let navigator = SpatialNavigator::new(config);
        let api = navigator
            .experimental(tree)
            .ok_or_else(|| SpatNavError::Config("experimental APIs are disabled".into()))?;

        let nodes = snapshot(&navigator, tree);
        let entry = tree.body(tree.document_element()).and_then(|body| {
            navigator.search(
                tree,
                SearchOrigin::Element(body),
                Direction::Down,
                &SearchOptions::default(),
            )
        });
        Self::from_targets(nodes, entry, |node, dir| {
            api.find_next_target(node, dir, FocusableMode::All)
        })
    }

    /// Build from an explicit target function. Fails with
    /// [`SpatNavError::StaleSnapshot`] when a target is not one of
    /// `nodes`; no partial graph is returned.
    pub fn from_targets(
        nodes: Vec<N>,
        entry: Option<N>,
        mut target: impl FnMut(N, Direction) -> Option<N>,
    ) -> Result<Self> {
        let index: HashMap<N, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        let lookup = |n: N| -> Result<usize> {
            index.get(&n).copied().ok_or_else(|| {
                log::warn!("navigation target {:?} is not in the focusable snapshot", n);
                SpatNavError::StaleSnapshot(format!("{n:?}"))
            })
        };

        let mut rows = Vec::with_capacity(nodes.len());
        for (i, &node) in nodes.iter().enumerate() {
            let mut row: Row = [Some(i), None, None, None, None];
            for (slot, dir) in Direction::ALL.into_iter().enumerate() {
                row[slot + 1] = target(node, dir).map(&lookup).transpose()?;
            }
            rows.push(row);
        }
        let entry = entry.and_then(|n| index.get(&n).copied());
        log::debug!("navigation graph: {} nodes, entry {:?}", nodes.len(), entry);
        Ok(Self { nodes, rows, entry })
    }
}

impl<N> NavGraph<N> {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Target of `dir` from node `i`, `None` when `i` is out of range.
    pub fn target(&self, i: usize, dir: Direction) -> Option<usize> {
        self.rows.get(i).and_then(|row| row[column(dir)])
    }

    /// Adjacency over all four arrows. Duplicates and self-loops are
    /// dropped.
    pub fn forward(&self) -> Vec<Vec<usize>> {
        self.edges(&Direction::ALL)
    }

    /// Adjacency over a single arrow.
    pub fn forward_in(&self, dir: Direction) -> Vec<Vec<usize>> {
        self.edges(&[dir])
    }

    fn edges(&self, dirs: &[Direction]) -> Vec<Vec<usize>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut out: Vec<usize> = Vec::new();
                for &dir in dirs {
                    if let Some(t) = row[column(dir)]
                        && t != i
                        && !out.contains(&t)
                    {
                        out.push(t);
                    }
                }
                out
            })
            .collect()
    }
}

fn column(dir: Direction) -> usize {
    match dir {
        Direction::Up => 1,
        Direction::Down => 2,
        Direction::Left => 3,
        Direction::Right => 4,
    }
}

/// Focusable areas of the top document, then of each framed document in
/// the order their frames were found.
fn snapshot<T: VisualTree>(navigator: &SpatialNavigator, tree: &T) -> Vec<T::Node> {
    let mut nodes = Vec::new();
    let mut roots = VecDeque::from([tree.document_element()]);
    while let Some(root) = roots.pop_front() {
        for node in navigator.focusable_areas(tree, root, FocusableMode::All) {
            if let Some(content) = tree.frame_content(node) {
                roots.push_back(content);
            }
            nodes.push(node);
        }
    }
    nodes
}
