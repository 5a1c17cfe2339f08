//! Data types for traversal: the input matrix, parameters, and results.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::error::SolveError;

/// Square adjacency matrix; entry `(u, v) == 1` means a directed edge `u → v`.
///
/// Other integer values are kept as parsed but never count as edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    m: DMatrix<i32>,
}

impl AdjacencyMatrix {
    /// Build from row vectors. None unless the rows form a non-empty square.
    pub fn from_rows(rows: &[Vec<i32>]) -> Option<Self> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|r| r.len() != n) {
            return None;
        }
        let flat: Vec<i32> = rows.iter().flatten().copied().collect();
        Some(Self {
            m: DMatrix::from_row_slice(n, n, &flat),
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.m[(u, v)] == 1
    }

    /// Out-neighbours of `u` in increasing index order.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count()).filter(move |&v| self.has_edge(u, v))
    }

    pub fn edge_count(&self) -> usize {
        self.m.iter().filter(|&&e| e == 1).count()
    }

    /// Entries row by row.
    pub fn rows(&self) -> Vec<Vec<i32>> {
        self.m
            .row_iter()
            .map(|r| r.iter().copied().collect())
            .collect()
    }

    pub(crate) fn check_source(&self, source: usize) -> Result<(), SolveError> {
        if source < self.node_count() {
            Ok(())
        } else {
            Err(SolveError::SourceOutOfRange {
                node: source,
                node_count: self.node_count(),
            })
        }
    }
}

impl From<DMatrix<i32>> for AdjacencyMatrix {
    /// Callers must pass a square matrix.
    fn from(m: DMatrix<i32>) -> Self {
        debug_assert!(m.is_square(), "adjacency matrix must be square");
        Self { m }
    }
}

/// Traversal parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalParams {
    pub source: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TraversalKind {
    Bfs,
    Dfs,
}

/// Result of one BFS or DFS run.
///
/// `distance`/`predecessor` are only filled by BFS; `None` entries mark
/// nodes not reached from `source`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalResult {
    pub kind: TraversalKind,
    pub node_count: usize,
    pub source: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Vec<Option<usize>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<Vec<Option<usize>>>,
    pub discovery_order: Vec<usize>,
    pub tree_edges: Vec<(usize, usize)>,
}
