//! Points, replay steps, and the hull result.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::normalize::{HullExtent, Point2};

/// Integer input point. `Ord` is lexicographic on `(x, y)`, the hull sort order.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct IntPoint {
    pub x: i32,
    pub y: i32,
}

impl IntPoint {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
    /// Widened copy for exact cross products.
    #[inline]
    pub fn to_i64(self) -> Vector2<i64> {
        Vector2::new(i64::from(self.x), i64::from(self.y))
    }
    #[inline]
    pub fn to_f64(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Lower,
    Upper,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepAction {
    Push,
    Pop,
}

/// One chain mutation of the monotone-chain scan.
///
/// `stack` is the full chain right after the action, so each step can be drawn
/// on its own. `cross` is the turn value that caused a pop (0 for pushes).
/// Generic over the point type: the solver records `IntPoint`s, the result
/// carries the normalized `Point2` version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullStep<P> {
    pub phase: Phase,
    pub action: StepAction,
    pub candidate: P,
    pub removed: Option<P>,
    pub stack: Vec<P>,
    pub cross: i64,
}

impl<P> HullStep<P> {
    /// Same step with every point mapped through `f`.
    pub fn map<Q>(&self, mut f: impl FnMut(&P) -> Q) -> HullStep<Q> {
        HullStep {
            phase: self.phase,
            action: self.action,
            candidate: f(&self.candidate),
            removed: self.removed.as_ref().map(&mut f),
            stack: self.stack.iter().map(f).collect(),
            cross: self.cross,
        }
    }
}

/// Raw output of the scan, before normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HullTrace {
    /// Hull in counter-clockwise order.
    pub hull: Vec<IntPoint>,
    /// Final chains before dropping their duplicated end points.
    pub lower: Vec<IntPoint>,
    pub upper: Vec<IntPoint>,
    pub steps: Vec<HullStep<IntPoint>>,
}

/// Hull with raw and unit-square coordinates plus the normalized replay log.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HullResult {
    pub extent: HullExtent,
    pub input_raw: Vec<IntPoint>,
    pub hull_raw: Vec<IntPoint>,
    pub input_normalized: Vec<Point2>,
    pub hull_normalized: Vec<Point2>,
    pub steps: Vec<HullStep<Point2>>,
    /// Same log in input coordinates.
    #[serde(skip)]
    pub raw_steps: Vec<HullStep<IntPoint>>,
}
