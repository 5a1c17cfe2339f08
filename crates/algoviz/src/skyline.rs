//! Skyline (upper envelope of buildings) by sweep line.
//!
//! Purpose
//! - Turn `(left, right, height)` intervals into the key points where the
//!   envelope height changes, ready to be drawn as a step function.
//!
//! Model
//! - Each building contributes a start event `(left, -height)` and an end event
//!   `(right, height)`. Sorting by `(x, key)` puts starts before ends at equal
//!   `x`, and the tallest start first.
//! - A height → count multiset, seeded with the ground `{0: 1}`, tracks the
//!   active buildings. A key point is emitted whenever its maximum changes;
//!   afterwards only the last key point per `x` is kept.
//!
//! Code cross-refs: `normalize::SkylineExtent`, `parse::parse_buildings`.

use std::collections::btree_map::{BTreeMap, Entry};

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::normalize::{Point2, SkylineExtent};
use crate::parse::parse_buildings;

/// Rectangle standing on the ground between `left` and `right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Building {
    pub left: i32,
    pub right: i32,
    pub height: i32,
}

impl Building {
    /// Only `left < right` and `height > 0` describe a real building.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.left < self.right && self.height > 0
    }
}

/// Envelope height `height` starting at `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPoint {
    pub x: i32,
    pub height: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkylineResult {
    pub extent: SkylineExtent,
    pub key_points_raw: Vec<KeyPoint>,
    pub key_points: Vec<Point2>,
}

/// Key points of the skyline of `buildings`. Invalid buildings are ignored.
pub fn compute(buildings: &[Building]) -> Vec<KeyPoint> {
    let mut events: Vec<(i32, i32)> = buildings
        .iter()
        .filter(|b| b.is_valid())
        .flat_map(|b| [(b.left, -b.height), (b.right, b.height)])
        .collect();
    if events.is_empty() {
        return Vec::new();
    }
    events.sort_unstable();

    let mut active: BTreeMap<i32, usize> = BTreeMap::from([(0, 1)]);
    let mut prev_max = 0;
    let mut key_points = Vec::new();
    for (x, key) in events {
        if key < 0 {
            *active.entry(-key).or_insert(0) += 1;
        } else if let Entry::Occupied(mut slot) = active.entry(key) {
            if *slot.get() <= 1 {
                slot.remove();
            } else {
                *slot.get_mut() -= 1;
            }
        }
        let cur_max = active.last_key_value().map_or(0, |(h, _)| *h);
        if cur_max != prev_max {
            key_points.push(KeyPoint { x, height: cur_max });
            prev_max = cur_max;
        }
    }
    tracing::debug!(
        buildings = buildings.len(),
        key_points = key_points.len(),
        "skyline sweep"
    );
    compress_same_x(key_points)
}

/// Keep only the last key point at each `x` (input is sorted by `x`).
fn compress_same_x(key_points: Vec<KeyPoint>) -> Vec<KeyPoint> {
    let mut out: Vec<KeyPoint> = Vec::with_capacity(key_points.len());
    for kp in key_points {
        match out.last_mut() {
            Some(last) if last.x == kp.x => *last = kp,
            _ => out.push(kp),
        }
    }
    out
}

/// Skyline with normalized key points.
pub fn solve(buildings: &[Building]) -> SkylineResult {
    let key_points_raw = compute(buildings);
    let extent = SkylineExtent::of(&key_points_raw);
    SkylineResult {
        extent,
        key_points: key_points_raw
            .iter()
            .map(|&k| extent.normalize(k))
            .collect(),
        key_points_raw,
    }
}

/// Parse a building list and solve.
pub fn solve_from_text(text: &str) -> Result<SkylineResult, SolveError> {
    let buildings = parse_buildings(text)?;
    Ok(solve(&buildings))
}
