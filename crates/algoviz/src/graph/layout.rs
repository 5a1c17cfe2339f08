use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;

use crate::normalize::Point2;

/// Node positions on a circle inscribed in the unit square.
///
/// Screen convention (y grows downward): node 0 sits at the top centre and ids
/// increase clockwise on screen.
pub fn layout_circle(n: usize) -> Vec<Point2> {
    let center = Vector2::new(0.5, 0.5);
    (0..n)
        .map(|i| {
            let angle = TAU * (i as f64) / (n as f64) - FRAC_PI_2;
            Point2::from(center + Vector2::new(angle.cos(), angle.sin()) * 0.5)
        })
        .collect()
}
