//! Detectors.
//!
//! The structural ones classify components of the condensed navigation
//! graph. The static ones look at elements directly and need no graph.

use std::collections::VecDeque;

use spatnav_types::{ElementKind, VisualTree};

use crate::scc::{self, Components};

// -----------------------------------------------------------------------
// Structural
// -----------------------------------------------------------------------

/// Components with no way out. Only meaningful when there is more than
/// one component: a single component covering the graph is closed.
pub fn traps(condensed: &[Vec<usize>]) -> Vec<usize> {
    if condensed.len() < 2 {
        return Vec::new();
    }
    (0..condensed.len())
        .filter(|&c| condensed[c].is_empty())
        .collect()
}

/// Components with neither incoming nor outgoing edges. A single
/// component holding the whole multi-element graph is closed, not
/// isolated; a lone element still is.
pub fn isolated(condensed: &[Vec<usize>], components: &Components) -> Vec<usize> {
    if condensed.len() == 1 && components.members.first().is_some_and(|m| m.len() > 1) {
        return Vec::new();
    }
    let mut has_in = vec![false; condensed.len()];
    for targets in condensed {
        for &t in targets {
            has_in[t] = true;
        }
    }
    (0..condensed.len())
        .filter(|&c| condensed[c].is_empty() && !has_in[c])
        .collect()
}

/// Components that fan out to two or more others while holding more than
/// one element. Measures branching rather than cycles; reported as a
/// suspect signal next to [`loops`].
pub fn branching(condensed: &[Vec<usize>], components: &Components) -> Vec<usize> {
    (0..condensed.len())
        .filter(|&c| condensed[c].len() >= 2 && components.members[c].len() > 1)
        .collect()
}

/// Components that cannot be reached by navigating from `entry`.
/// Everything is unreachable without an entry.
pub fn unreachable(condensed: &[Vec<usize>], entry: Option<usize>) -> Vec<usize> {
    let mut seen = vec![false; condensed.len()];
    let mut queue: VecDeque<usize> = entry.into_iter().collect();
    for &start in &queue {
        seen[start] = true;
    }
    while let Some(c) = queue.pop_front() {
        for &next in &condensed[c] {
            if !seen[next] {
                seen[next] = true;
                queue.push_back(next);
            }
        }
    }
    (0..condensed.len()).filter(|&c| !seen[c]).collect()
}

/// Groups of elements that pressing the same arrow cycles through.
/// `forward` holds one direction's edges only.
pub fn loops(forward: &[Vec<usize>]) -> Vec<Vec<usize>> {
    scc::kosaraju(forward)
        .members
        .into_iter()
        .filter(|m| m.len() > 1)
        .collect()
}

// -----------------------------------------------------------------------
// Static
// -----------------------------------------------------------------------

/// Every element of the page in tree order, framed documents after the
/// document embedding them.
pub fn elements<T: VisualTree>(tree: &T) -> Vec<T::Node> {
    let mut out = Vec::new();
    let mut roots = VecDeque::from([tree.document_element()]);
    while let Some(root) = roots.pop_front() {
        for node in tree.descendants(root) {
            if let Some(content) = tree.frame_content(node) {
                roots.push_back(content);
            }
            out.push(node);
        }
    }
    out
}

/// The tab index the element behaves as having.
fn effective_tab_index<T: VisualTree>(tree: &T, node: T::Node) -> i32 {
    let flags = tree.focus_flags(node);
    if let Some(index) = flags.tab_index {
        return index;
    }
    match tree.kind(node) {
        ElementKind::Anchor if !flags.has_href => -1,
        kind if kind.is_focusable_by_default() => 0,
        _ => -1,
    }
}

/// Elements reacting to clicks that the keyboard cannot reach.
pub fn non_focusable_clickables<T: VisualTree>(tree: &T, elements: &[T::Node]) -> Vec<T::Node> {
    elements
        .iter()
        .copied()
        .filter(|&n| tree.focus_flags(n).has_click_handler && effective_tab_index(tree, n) < 0)
        .collect()
}

/// `position: fixed` and `position: sticky` elements, which stay put
/// while the page scrolls and can confuse directional search.
pub fn out_of_flow<T: VisualTree>(tree: &T, elements: &[T::Node]) -> Vec<T::Node> {
    elements
        .iter()
        .copied()
        .filter(|&n| tree.style(n).position.is_out_of_flow())
        .collect()
}

pub fn frames<T: VisualTree>(tree: &T, elements: &[T::Node]) -> Vec<T::Node> {
    elements
        .iter()
        .copied()
        .filter(|&n| tree.kind(n) == ElementKind::Iframe)
        .collect()
}

#[cfg(test)]
mod tests {
    use spatnav_dom::{Document, ElementSpec};
    use spatnav_types::Position;

    use super::*;

    #[test]
    fn single_component_is_never_a_trap() {
        assert!(traps(&[vec![]]).is_empty());
    }

    #[test]
    fn lone_element_is_isolated_but_closed_group_is_not() {
        let lone = vec![vec![]];
        let c = scc::kosaraju(&lone);
        assert_eq!(isolated(&scc::condense(&lone, &c), &c), vec![0]);

        let pair = vec![vec![1], vec![0]];
        let c = scc::kosaraju(&pair);
        assert!(isolated(&scc::condense(&pair, &c), &c).is_empty());
    }

    #[test]
    fn sinks_are_traps() {
        // 0 -> 1, 0 -> 2, 3 alone
        let condensed = vec![vec![1, 2], vec![], vec![], vec![]];
        assert_eq!(traps(&condensed), vec![1, 2, 3]);
        let c = scc::kosaraju(&condensed);
        let lonely: Vec<_> = isolated(&scc::condense(&condensed, &c), &c)
            .into_iter()
            .map(|i| c.members[i].clone())
            .collect();
        assert_eq!(lonely, vec![vec![3]]);
    }

    #[test]
    fn unreachable_follows_edges_from_entry() {
        let condensed = vec![vec![1], vec![], vec![1]];
        assert_eq!(unreachable(&condensed, Some(0)), vec![2]);
        assert_eq!(unreachable(&condensed, Some(2)), vec![0]);
        assert_eq!(unreachable(&condensed, None), vec![0, 1, 2]);
    }

    #[test]
    fn branching_needs_two_exits_and_two_members() {
        let forward = vec![vec![1], vec![0, 2, 3], vec![], vec![]];
        let c = scc::kosaraju(&forward);
        let condensed = scc::condense(&forward, &c);
        let flagged = branching(&condensed, &c);
        assert_eq!(flagged.len(), 1);
        assert_eq!(c.members[flagged[0]], vec![0, 1]);
    }

    #[test]
    fn loops_are_nontrivial_components() {
        // Right: 0 -> 1 -> 2 -> 0, 3 -> 0
        let forward = vec![vec![1], vec![2], vec![0], vec![0]];
        assert_eq!(loops(&forward), vec![vec![0, 1, 2]]);
        assert!(loops(&[vec![1], vec![]]).is_empty());
    }

    #[test]
    fn static_detectors() {
        let mut doc = Document::new(800.0, 600.0);
        let body = doc.body_id();
        let clickable_div = doc.append(
            body,
            ElementSpec::div().click_handler().rect(0.0, 0.0, 50.0, 50.0),
        );
        // Focusable, so not flagged.
        doc.append(
            body,
            ElementSpec::div().click_handler().tab_index(0).rect(60.0, 0.0, 50.0, 50.0),
        );
        doc.append(
            body,
            ElementSpec::button().click_handler().rect(120.0, 0.0, 50.0, 50.0),
        );
        let bare_anchor = doc.append(
            body,
            ElementSpec::new(ElementKind::Anchor)
                .click_handler()
                .rect(180.0, 0.0, 50.0, 50.0),
        );
        let opted_out = doc.append(
            body,
            ElementSpec::button().click_handler().tab_index(-1).rect(240.0, 0.0, 50.0, 50.0),
        );
        let header = doc.append(
            body,
            ElementSpec::div().position(Position::Fixed).rect(0.0, 0.0, 800.0, 40.0),
        );
        let sticky = doc.append(
            body,
            ElementSpec::div().position(Position::Sticky).rect(0.0, 40.0, 800.0, 40.0),
        );
        let frame = doc.append(
            body,
            ElementSpec::new(ElementKind::Iframe).rect(0.0, 100.0, 300.0, 200.0),
        );
        let inner_body = doc.attach_frame(frame);
        let inner = doc.append(
            inner_body,
            ElementSpec::div().click_handler().rect(0.0, 0.0, 20.0, 20.0),
        );

        let all = elements(&doc);
        assert!(all.contains(&inner));
        assert!(!all.contains(&doc.root));
        assert_eq!(
            non_focusable_clickables(&doc, &all),
            vec![clickable_div, bare_anchor, opted_out, inner]
        );
        assert_eq!(out_of_flow(&doc, &all), vec![header, sticky]);
        assert_eq!(frames(&doc, &all), vec![frame]);
    }
}
