//! Keyboard accessibility audit for spatial navigation.
//!
//! [`audit`] asks the navigation engine, without moving focus, where each
//! arrow key leads from every focusable element, and analyses the
//! resulting directed graph:
//!
//! - **traps**: components with no edge leading out
//! - **isolated**: components nothing leads into or out of
//! - **unreachable**: elements that cannot be reached from the element a
//!   "down" press from the page body lands on
//! - **loops**: elements that pressing one arrow repeatedly cycles through
//!
//! A handful of static checks that need no graph ride along.

pub mod detect;
pub mod graph;
pub mod report;
pub mod scc;

use spatnav_engine::NavConfig;
use spatnav_types::{Direction, Result, VisualTree};

// -----------------------------------------------------------------------
// Public re-exports
// -----------------------------------------------------------------------

pub use graph::NavGraph;
pub use report::{AuditReport, LoopReport};
pub use scc::Components;

/// Audit the page in `tree`. Elements are named in the report by
/// `label`.
///
/// Fails with [`spatnav_types::SpatNavError::StaleSnapshot`] when a
/// navigation target falls outside the focusable snapshot.
pub fn audit<T: VisualTree>(
    tree: &T,
    config: &NavConfig,
    label: impl Fn(T::Node) -> String,
) -> Result<AuditReport> {
    let graph = NavGraph::build(tree, config)?;
    Ok(analyse(tree, &graph, label))
}

/// Run every detector over an already built graph of `tree`.
pub fn analyse<T: VisualTree>(
    tree: &T,
    graph: &NavGraph<T::Node>,
    label: impl Fn(T::Node) -> String,
) -> AuditReport {
    let forward = graph.forward();
    let components = scc::kosaraju(&forward);
    let condensed = scc::condense(&forward, &components);
    let entry = graph.entry.map(|i| components.of[i]);

    let name = |i: usize| label(graph.nodes[i]);
    let members = |c: usize| components.members[c].iter().map(|&i| name(i)).collect::<Vec<_>>();
    let names = |nodes: Vec<T::Node>| nodes.into_iter().map(&label).collect::<Vec<_>>();
    // Component ids follow the condensation order; report in tree order.
    let in_tree_order = |mut ids: Vec<usize>| {
        ids.sort_by_key(|&c| components.members[c][0]);
        ids
    };

    let unreachable = if graph.is_empty() {
        Vec::new()
    } else {
        let mut nodes: Vec<usize> = detect::unreachable(&condensed, entry)
            .into_iter()
            .flat_map(|c| components.members[c].iter().copied())
            .collect();
        nodes.sort_unstable();
        nodes.into_iter().map(name).collect()
    };

    let loops = Direction::ALL
        .into_iter()
        .flat_map(|dir| {
            detect::loops(&graph.forward_in(dir))
                .into_iter()
                .map(move |group| (dir, group))
        })
        .map(|(direction, group)| LoopReport {
            direction,
            members: group.into_iter().map(name).collect(),
        })
        .collect();

    let elements = detect::elements(tree);
    let report = AuditReport {
        focusable: graph.len(),
        components: components.len(),
        entry: graph.entry.map(name),
        traps: in_tree_order(detect::traps(&condensed))
            .into_iter()
            .map(members)
            .collect(),
        isolated: in_tree_order(detect::isolated(&condensed, &components))
            .into_iter()
            .map(members)
            .collect(),
        unreachable,
        loops,
        branching: in_tree_order(detect::branching(&condensed, &components))
            .into_iter()
            .map(members)
            .collect(),
        non_focusable_clickables: names(detect::non_focusable_clickables(tree, &elements)),
        out_of_flow: names(detect::out_of_flow(tree, &elements)),
        frames: names(detect::frames(tree, &elements)),
    };
    log::info!(
        "audited {} focusable elements: {} components, {} traps, {} loops",
        report.focusable,
        report.components,
        report.traps.len(),
        report.loops.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use spatnav_dom::{Document, ElementSpec};
    use spatnav_types::Position;

    use super::*;

    fn label(doc: &Document) -> impl Fn(usize) -> String + '_ {
        move |n| doc.describe(n)
    }

    fn button(doc: &mut Document, id: &str, x: f64, y: f64) -> usize {
        let body = doc.body_id();
        doc.append(body, ElementSpec::button().id(id).rect(x, y, 80.0, 40.0))
    }

    #[test]
    fn grid_is_one_closed_component() {
        let mut doc = Document::new(800.0, 600.0);
        for (i, (x, y)) in [(20.0, 20.0), (140.0, 20.0), (20.0, 100.0), (140.0, 100.0)]
            .into_iter()
            .enumerate()
        {
            button(&mut doc, &format!("b{i}"), x, y);
        }
        let report = audit(&doc, &NavConfig::default(), label(&doc)).unwrap();
        assert_eq!(report.focusable, 4);
        assert_eq!(report.components, 1);
        assert_eq!(report.entry.as_deref(), Some("button#b0"));
        assert!(report.traps.is_empty());
        assert!(report.unreachable.is_empty());
        assert!(report.loops.is_empty());
        assert!(!report.has_errors());
    }

    #[test]
    fn empty_page_reports_nothing() {
        let doc = Document::new(800.0, 600.0);
        let report = audit(&doc, &NavConfig::default(), label(&doc)).unwrap();
        assert_eq!(report.focusable, 0);
        assert_eq!(report.entry, None);
        assert!(!report.has_errors());
    }

    #[test]
    fn lone_button_is_isolated() {
        let mut doc = Document::new(800.0, 600.0);
        button(&mut doc, "only", 20.0, 20.0);
        let report = audit(&doc, &NavConfig::default(), label(&doc)).unwrap();
        assert_eq!(report.components, 1);
        assert_eq!(report.isolated, vec![vec!["button#only"]]);
        assert!(report.traps.is_empty());
        assert!(report.has_errors());
    }

    #[test]
    fn dead_end_is_a_trap() {
        let mut doc = Document::new(800.0, 600.0);
        let a = button(&mut doc, "a", 20.0, 20.0);
        let b = button(&mut doc, "b", 140.0, 20.0);
        let c = button(&mut doc, "c", 20.0, 300.0);
        // a -> b to the right, nothing leaves b, c is cut off.
        let graph = NavGraph::from_targets(vec![a, b, c], Some(a), |n, dir| {
            (n == a && dir == Direction::Right).then_some(b)
        })
        .unwrap();
        let report = analyse(&doc, &graph, label(&doc));
        assert_eq!(report.components, 3);
        assert_eq!(report.entry.as_deref(), Some("button#a"));
        assert_eq!(report.traps, vec![vec!["button#b"], vec!["button#c"]]);
        assert_eq!(report.isolated, vec![vec!["button#c"]]);
        assert_eq!(report.unreachable, vec!["button#c"]);
        assert!(report.has_errors());
    }

    #[test]
    fn arrow_cycle_is_a_loop() {
        let mut doc = Document::new(800.0, 600.0);
        let ids: Vec<usize> = (0..3)
            .map(|i| button(&mut doc, &format!("n{i}"), 20.0 + i as f64 * 120.0, 20.0))
            .collect();
        // Right wraps around: n0 -> n1 -> n2 -> n0.
        let graph = NavGraph::from_targets(ids.clone(), Some(ids[0]), |n, dir| {
            let i = ids.iter().position(|&x| x == n)?;
            (dir == Direction::Right).then(|| ids[(i + 1) % 3])
        })
        .unwrap();
        let report = analyse(&doc, &graph, label(&doc));
        assert_eq!(report.components, 1);
        assert!(report.traps.is_empty());
        assert_eq!(
            report.loops,
            vec![LoopReport {
                direction: Direction::Right,
                members: vec!["button#n0".into(), "button#n1".into(), "button#n2".into()],
            }]
        );
    }

    #[test]
    fn stale_target_fails_the_audit() {
        let mut doc = Document::new(800.0, 600.0);
        let a = button(&mut doc, "a", 20.0, 20.0);
        let err = NavGraph::from_targets(vec![a], None, |_, _| Some(a + 100)).unwrap_err();
        assert!(matches!(err, spatnav_types::SpatNavError::StaleSnapshot(_)));
    }

    #[test]
    fn static_findings_are_labelled() {
        let mut doc = Document::new(800.0, 600.0);
        let body = doc.body_id();
        button(&mut doc, "ok", 20.0, 20.0);
        doc.append(
            body,
            ElementSpec::div().id("fake").click_handler().rect(200.0, 20.0, 80.0, 40.0),
        );
        doc.append(
            body,
            ElementSpec::div()
                .id("bar")
                .position(Position::Fixed)
                .rect(0.0, 500.0, 800.0, 100.0),
        );
        let report = audit(&doc, &NavConfig::default(), label(&doc)).unwrap();
        assert_eq!(report.non_focusable_clickables, vec!["div#fake"]);
        assert_eq!(report.out_of_flow, vec!["div#bar"]);
        assert!(report.has_errors());
    }
}
