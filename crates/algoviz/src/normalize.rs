//! Unit-square normalization for geometric results.
//!
//! - Hull: `x' = (x - min_x) / max(1, max_x - min_x)`, same for `y` with the
//!   input point extent.
//! - Skyline: `x` as above over the key points; `y' = y / max(1, max_y)` so the
//!   ground stays at 0.
//!
//! The `max(1, ·)` keeps single-value extents finite. Inverses are provided for
//! callers that print raw values from normalized data.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::hull::IntPoint;
use crate::skyline::KeyPoint;

/// Normalized point in `[0, 1]²`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl From<Vector2<f64>> for Point2 {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point2> for Vector2<f64> {
    #[inline]
    fn from(p: Point2) -> Self {
        Vector2::new(p.x, p.y)
    }
}

#[inline]
fn span(lo: i32, hi: i32) -> f64 {
    (i64::from(hi) - i64::from(lo)).max(1) as f64
}

/// Bounding box of a hull input. All zero for an empty input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullExtent {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl HullExtent {
    pub fn of(points: &[IntPoint]) -> Self {
        let Some(first) = points.first() else {
            return Self::default();
        };
        points.iter().fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                min_y: first.y,
                max_y: first.y,
            },
            |e, p| Self {
                min_x: e.min_x.min(p.x),
                max_x: e.max_x.max(p.x),
                min_y: e.min_y.min(p.y),
                max_y: e.max_y.max(p.y),
            },
        )
    }

    #[inline]
    fn origin(&self) -> Vector2<f64> {
        Vector2::new(f64::from(self.min_x), f64::from(self.min_y))
    }

    #[inline]
    fn scale(&self) -> Vector2<f64> {
        Vector2::new(span(self.min_x, self.max_x), span(self.min_y, self.max_y))
    }

    pub fn normalize(&self, p: IntPoint) -> Point2 {
        (p.to_f64() - self.origin())
            .component_div(&self.scale())
            .into()
    }

    /// Inverse of `normalize` (exact up to rounding).
    pub fn denormalize(&self, q: Point2) -> Vector2<f64> {
        Vector2::from(q).component_mul(&self.scale()) + self.origin()
    }
}

/// Horizontal range and peak height of a skyline. All zero when empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkylineExtent {
    pub min_x: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl SkylineExtent {
    pub fn of(key_points: &[KeyPoint]) -> Self {
        let Some(first) = key_points.first() else {
            return Self::default();
        };
        key_points.iter().fold(
            Self {
                min_x: first.x,
                max_x: first.x,
                max_y: first.height,
            },
            |e, k| Self {
                min_x: e.min_x.min(k.x),
                max_x: e.max_x.max(k.x),
                max_y: e.max_y.max(k.height),
            },
        )
    }

    #[inline]
    fn scale(&self) -> Vector2<f64> {
        Vector2::new(span(self.min_x, self.max_x), span(0, self.max_y))
    }

    pub fn normalize(&self, k: KeyPoint) -> Point2 {
        let dx = (i64::from(k.x) - i64::from(self.min_x)) as f64;
        let raw = Vector2::new(dx, f64::from(k.height));
        raw.component_div(&self.scale()).into()
    }

    /// Inverse of `normalize`: `(x, height)` in input units.
    pub fn denormalize(&self, q: Point2) -> Vector2<f64> {
        Vector2::from(q).component_mul(&self.scale()) + Vector2::new(f64::from(self.min_x), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hull_extent_maps_corners_to_unit_square() {
        let pts = [
            IntPoint::new(-2, 3),
            IntPoint::new(6, 7),
            IntPoint::new(0, 5),
        ];
        let e = HullExtent::of(&pts);
        assert_eq!(
            e,
            HullExtent {
                min_x: -2,
                max_x: 6,
                min_y: 3,
                max_y: 7
            }
        );
        assert_eq!(e.normalize(pts[0]), Point2 { x: 0.0, y: 0.0 });
        assert_eq!(e.normalize(pts[1]), Point2 { x: 1.0, y: 1.0 });
        assert_eq!(e.normalize(pts[2]), Point2 { x: 0.25, y: 0.5 });
        let back = e.denormalize(e.normalize(pts[2]));
        assert!((back.x - 0.0).abs() < 1e-12 && (back.y - 5.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_extent_does_not_divide_by_zero() {
        let pts = [IntPoint::new(4, 9), IntPoint::new(4, 9)];
        let e = HullExtent::of(&pts);
        assert_eq!(e.normalize(pts[0]), Point2 { x: 0.0, y: 0.0 });
        assert_eq!(HullExtent::of(&[]), HullExtent::default());
    }

    #[test]
    fn skyline_uses_ground_as_baseline() {
        let kps = [
            KeyPoint { x: 2, height: 10 },
            KeyPoint { x: 3, height: 15 },
            KeyPoint { x: 7, height: 10 },
            KeyPoint { x: 9, height: 0 },
        ];
        let e = SkylineExtent::of(&kps);
        assert_eq!(
            e,
            SkylineExtent {
                min_x: 2,
                max_x: 9,
                max_y: 15
            }
        );
        let q = e.normalize(kps[2]);
        assert!((q.x - 5.0 / 7.0).abs() < 1e-12);
        assert!((q.y - 10.0 / 15.0).abs() < 1e-12);
        assert_eq!(e.normalize(kps[3]).y, 0.0);
        let back = e.denormalize(q);
        assert!((back.x - 7.0).abs() < 1e-9 && (back.y - 10.0).abs() < 1e-9);
    }
}
