//! Solver selection by name and response shaping.
//!
//! `Algorithm` is a closed set; names match case-insensitively and anything
//! else is an `UnknownAlgorithm`, kept apart from input errors so callers can
//! report "no such solver" differently from "bad file".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::error::SolveError;
use crate::graph::{self, TraversalParams, TraversalResult};
use crate::hull::{self, HullResult};
use crate::skyline::{self, SkylineResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Algorithm {
    Bfs,
    Dfs,
    Skyline,
    Hull,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

/// Per-call parameters; fields a solver does not use are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveParams {
    pub traversal: TraversalParams,
}

impl SolveParams {
    pub fn with_source(source: usize) -> Self {
        Self {
            traversal: TraversalParams { source },
        }
    }
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Skyline,
        Algorithm::Hull,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::Skyline => "SKYLINE",
            Algorithm::Hull => "HULL",
        }
    }

    /// Parse `text` for this solver kind and run it.
    pub fn solve(self, text: &str, params: &SolveParams) -> Result<Solution, SolveError> {
        let _span = tracing::debug_span!("solve", algo = self.name()).entered();
        Ok(match self {
            Algorithm::Bfs => Solution::Traversal(graph::bfs_from_text(text, params.traversal)?),
            Algorithm::Dfs => Solution::Traversal(graph::dfs_from_text(text, params.traversal)?),
            Algorithm::Skyline => Solution::Skyline(skyline::solve_from_text(text)?),
            Algorithm::Hull => Solution::Hull(hull::solve_from_text(text)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Result of any solver.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Solution {
    Traversal(TraversalResult),
    Hull(HullResult),
    Skyline(SkylineResult),
}

impl Solution {
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Solution::Traversal(r) => match r.kind {
                graph::TraversalKind::Bfs => Algorithm::Bfs,
                graph::TraversalKind::Dfs => Algorithm::Dfs,
            },
            Solution::Hull(_) => Algorithm::Hull,
            Solution::Skyline(_) => Algorithm::Skyline,
        }
    }

    /// JSON document in the shape the browser front end consumes.
    ///
    /// - BFS/DFS: `{algo, n, source, order, edges, layout}` (+ `distance` for BFS).
    /// - HULL: `{meta, inputPoints, hullPoints, inputRaw, hullRaw, steps}`.
    /// - SKYLINE: `{meta, points}`.
    pub fn to_response(&self) -> Value {
        match self {
            Solution::Traversal(r) => {
                let mut doc = json!({
                    "algo": self.algorithm().name(),
                    "n": r.node_count,
                    "source": r.source,
                    "order": r.discovery_order,
                    "edges": r.tree_edges,
                    "layout": graph::layout_circle(r.node_count),
                });
                if let Some(distance) = &r.distance {
                    doc["distance"] = json!(distance);
                }
                doc
            }
            Solution::Hull(r) => json!({
                "meta": {
                    "minX": r.extent.min_x,
                    "maxX": r.extent.max_x,
                    "minY": r.extent.min_y,
                    "maxY": r.extent.max_y,
                },
                "inputPoints": r.input_normalized,
                "hullPoints": r.hull_normalized,
                "inputRaw": r.input_raw,
                "hullRaw": r.hull_raw,
                "steps": r.steps,
            }),
            Solution::Skyline(r) => json!({
                "meta": {
                    "minX": r.extent.min_x,
                    "maxX": r.extent.max_x,
                    "maxY": r.extent.max_y,
                },
                "points": r.key_points,
            }),
        }
    }
}
