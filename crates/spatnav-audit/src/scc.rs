//! Strongly connected components and condensation.
//!
//! Graphs are adjacency lists over dense node indices. Both DFS passes of
//! Kosaraju's algorithm run on explicit work stacks, so graph depth never
//! touches the call stack.

use std::collections::BTreeSet;

/// Component assignment of a graph's nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// Component id of each node.
    pub of: Vec<usize>,
    /// Sorted members of each component. Ids follow a topological order
    /// of the condensation: every condensed edge goes to a higher id.
    pub members: Vec<Vec<usize>>,
}

impl Components {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Reverse every edge.
pub fn reverse(forward: &[Vec<usize>]) -> Vec<Vec<usize>> {
    let mut rev = vec![Vec::new(); forward.len()];
    for (from, targets) in forward.iter().enumerate() {
        for &to in targets {
            rev[to].push(from);
        }
    }
    rev
}

/// Kosaraju's algorithm: finish order on the forward graph, then
/// components by DFS on the reverse graph in reverse finish order.
pub fn kosaraju(forward: &[Vec<usize>]) -> Components {
    let n = forward.len();

    // Pass 1: postorder.
    let mut visited = vec![false; n];
    let mut finished = Vec::with_capacity(n);
    let mut stack: Vec<(usize, usize)> = Vec::new();
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        stack.push((start, 0));
        while let Some(top) = stack.last_mut() {
            let (node, next) = *top;
            match forward[node].get(next) {
                Some(&child) => {
                    top.1 += 1;
                    if !visited[child] {
                        visited[child] = true;
                        stack.push((child, 0));
                    }
                },
                None => {
                    finished.push(node);
                    stack.pop();
                },
            }
        }
    }

    // Pass 2: reverse graph.
    let rev = reverse(forward);
    let mut of: Vec<Option<usize>> = vec![None; n];
    let mut members = Vec::new();
    for &start in finished.iter().rev() {
        if of[start].is_some() {
            continue;
        }
        let id = members.len();
        let mut group = Vec::new();
        let mut work = vec![start];
        of[start] = Some(id);
        while let Some(node) = work.pop() {
            group.push(node);
            for &prev in &rev[node] {
                if of[prev].is_none() {
                    of[prev] = Some(id);
                    work.push(prev);
                }
            }
        }
        group.sort_unstable();
        members.push(group);
    }

    Components {
        of: of.into_iter().map(|c| c.unwrap_or_default()).collect(),
        members,
    }
}

/// Edges between components, deduplicated and sorted, without
/// self-loops.
pub fn condense(forward: &[Vec<usize>], components: &Components) -> Vec<Vec<usize>> {
    let mut out = vec![BTreeSet::new(); components.len()];
    for (from, targets) in forward.iter().enumerate() {
        let a = components.of[from];
        for &to in targets {
            let b = components.of[to];
            if a != b {
                out[a].insert(b);
            }
        }
    }
    out.into_iter().map(|set| set.into_iter().collect()).collect()
}
