//! Graph traversal over adjacency matrices.
//!
//! Purpose
//! - BFS and DFS from a chosen source, producing the discovery order and the
//!   tree edges a renderer reveals one by one.
//! - A circle layout so the renderer can place nodes without its own geometry.
//!
//! Both solvers are pure: the matrix is borrowed immutably and every working
//! container (queue, stack, marks) lives only for the call.
//!
//! Code cross-refs: `parse::parse_adjacency_matrix`, `api::Algorithm`.

mod bfs;
mod dfs;
mod layout;
mod types;

pub use bfs::bfs;
pub use dfs::dfs;
pub use layout::layout_circle;
pub use types::{AdjacencyMatrix, TraversalKind, TraversalParams, TraversalResult};

use crate::error::SolveError;
use crate::parse::parse_adjacency_matrix;

/// Parse `text` as an adjacency matrix and run BFS.
pub fn bfs_from_text(text: &str, params: TraversalParams) -> Result<TraversalResult, SolveError> {
    let g = parse_adjacency_matrix(text)?;
    bfs(&g, params.source)
}

/// Parse `text` as an adjacency matrix and run DFS.
pub fn dfs_from_text(text: &str, params: TraversalParams) -> Result<TraversalResult, SolveError> {
    let g = parse_adjacency_matrix(text)?;
    dfs(&g, params.source)
}

#[cfg(test)]
mod tests;
