//! Classical algorithms with replayable, renderer-ready output.
//!
//! Four solvers over text-encoded inputs: breadth-first and depth-first
//! traversal of an adjacency matrix, monotone-chain convex hull with a full
//! push/pop trace, and the sweep-line skyline. Geometric results are mapped
//! into the unit square so a renderer can draw them without knowing the input
//! extent.
//!
//! Layout
//! - `parse`: raw text → adjacency matrix, point list, building list.
//! - `graph`: BFS/DFS over `AdjacencyMatrix`, circle layout for drawing.
//! - `hull`: monotone chain with `HullStep` replay log.
//! - `skyline`: sweep line over `Building` intervals.
//! - `normalize`: extents and unit-square maps (both directions).
//! - `api`: closed `Algorithm` selector and response shaping.
//! - `randgen`: seeded random inputs for tests, benches, and the CLI.
//!
//! Every entry point is a pure function of its input; nothing is shared
//! between calls.

pub mod api;
pub mod error;
pub mod graph;
pub mod hull;
pub mod normalize;
pub mod parse;
pub mod randgen;
pub mod skyline;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{Algorithm, Solution, SolveParams, UnknownAlgorithm};
pub use error::{ParseError, SolveError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{Algorithm, Solution, SolveParams, UnknownAlgorithm};
    pub use crate::error::{ParseError, SolveError};
    pub use crate::graph::{AdjacencyMatrix, TraversalKind, TraversalParams, TraversalResult};
    pub use crate::hull::{HullResult, HullStep, IntPoint, Phase, StepAction};
    pub use crate::normalize::{HullExtent, Point2, SkylineExtent};
    pub use crate::skyline::{Building, KeyPoint, SkylineResult};
}
