//! Convex hull with a replayable scan log.
//!
//! Purpose
//! - Compute the hull of an integer point set with the monotone chain and
//!   record every push and pop, each with a full chain snapshot, so a renderer
//!   can animate the scan step by step.
//! - Hand back raw and unit-square coordinates; the normalized log uses the
//!   same extent as the input points, so replay and final hull line up.
//!
//! Code cross-refs: `normalize::HullExtent`, `parse::parse_points`.

mod chain;
mod types;

pub use chain::convex_hull_with_steps;
pub use types::{HullResult, HullStep, HullTrace, IntPoint, Phase, StepAction};

use crate::error::SolveError;
use crate::normalize::HullExtent;
use crate::parse::parse_points;

/// Hull of `points` with normalized coordinates and replay log.
pub fn solve(points: &[IntPoint]) -> HullResult {
    let extent = HullExtent::of(points);
    let trace = convex_hull_with_steps(points);
    let norm = |p: &IntPoint| extent.normalize(*p);
    HullResult {
        extent,
        input_normalized: points.iter().map(norm).collect(),
        hull_normalized: trace.hull.iter().map(norm).collect(),
        steps: trace.steps.iter().map(|s| s.map(norm)).collect(),
        input_raw: points.to_vec(),
        hull_raw: trace.hull,
        raw_steps: trace.steps,
    }
}

/// Parse a point list and solve.
pub fn solve_from_text(text: &str) -> Result<HullResult, SolveError> {
    let points = parse_points(text)?;
    Ok(solve(&points))
}
