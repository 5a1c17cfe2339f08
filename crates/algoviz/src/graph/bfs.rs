//! Breadth-first search with level relaxation.

use std::collections::VecDeque;

use crate::error::SolveError;

use super::types::{AdjacencyMatrix, TraversalKind, TraversalResult};

/// BFS from `source`.
///
/// A node `v` is relaxed from `u` only when `distance[v] > distance[u] + 1`
/// (unset distance counts as infinite); relaxation records the predecessor,
/// enqueues `v`, and appends it to the discovery order. Tree edges are the
/// `(predecessor[v], v)` pairs replayed in discovery order afterwards.
pub fn bfs(g: &AdjacencyMatrix, source: usize) -> Result<TraversalResult, SolveError> {
    g.check_source(source)?;
    let n = g.node_count();

    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut enqueued = vec![false; n];
    distance[source] = Some(0);
    enqueued[source] = true;

    let mut queue = VecDeque::with_capacity(n);
    queue.push_back(source);
    let mut order = vec![source];

    while let Some(u) = queue.pop_front() {
        let Some(du) = distance[u] else { continue };
        let next = du + 1;
        for v in g.neighbors(u) {
            if distance[v].map_or(true, |dv| dv > next) {
                // Levels are processed in order, so a relaxed node is never relaxed again.
                debug_assert!(!enqueued[v], "node {v} enqueued twice");
                enqueued[v] = true;
                distance[v] = Some(next);
                predecessor[v] = Some(u);
                queue.push_back(v);
                order.push(v);
            }
        }
    }

    let tree_edges: Vec<(usize, usize)> = order
        .iter()
        .skip(1)
        .filter_map(|&v| predecessor[v].map(|u| (u, v)))
        .collect();
    tracing::debug!(
        n,
        source,
        discovered = order.len(),
        tree_edges = tree_edges.len(),
        "bfs"
    );

    Ok(TraversalResult {
        kind: TraversalKind::Bfs,
        node_count: n,
        source,
        distance: Some(distance),
        predecessor: Some(predecessor),
        discovery_order: order,
        tree_edges,
    })
}
