//! Iterative depth-first search with an explicit stack.

use crate::error::SolveError;

use super::types::{AdjacencyMatrix, TraversalKind, TraversalResult};

/// DFS from `source`.
///
/// Nodes are marked on pop, so a node may sit on the stack several times
/// before it is first popped; later copies are skipped. For each popped node
/// the columns are scanned left to right and every still-unvisited neighbour
/// `w` yields a tree edge `(v, w)` at push time. The stack holds at most `n²`
/// entries.
pub fn dfs(g: &AdjacencyMatrix, source: usize) -> Result<TraversalResult, SolveError> {
    g.check_source(source)?;
    let n = g.node_count();

    let mut visited = vec![false; n];
    let mut stack = vec![source];
    let mut order = Vec::with_capacity(n);
    let mut tree_edges = Vec::new();

    while let Some(v) = stack.pop() {
        if visited[v] {
            continue;
        }
        visited[v] = true;
        order.push(v);
        for w in g.neighbors(v) {
            if !visited[w] {
                tree_edges.push((v, w));
                stack.push(w);
            }
        }
    }

    tracing::debug!(
        n,
        source,
        discovered = order.len(),
        tree_edges = tree_edges.len(),
        "dfs"
    );

    Ok(TraversalResult {
        kind: TraversalKind::Dfs,
        node_count: n,
        source,
        distance: None,
        predecessor: None,
        discovery_order: order,
        tree_edges,
    })
}
