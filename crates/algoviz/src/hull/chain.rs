//! Andrew's monotone chain with a recorded push/pop log.

use super::types::{HullStep, HullTrace, IntPoint, Phase, StepAction};

/// Convex hull (CCW) of `points` plus the step-by-step chain log.
///
/// - Points are sorted by `(x, y)`; the lower chain is built left to right,
///   the upper chain right to left.
/// - A chain pops while its last two points and the candidate make a non-left
///   turn (`cross <= 0`), so collinear points never survive on the hull.
/// - Fewer than two points: empty log, hull equals the input.
pub fn convex_hull_with_steps(points: &[IntPoint]) -> HullTrace {
    if points.len() <= 1 {
        return HullTrace {
            hull: points.to_vec(),
            lower: Vec::new(),
            upper: Vec::new(),
            steps: Vec::new(),
        };
    }
    let mut pts = points.to_vec();
    pts.sort_unstable();

    let mut steps = Vec::with_capacity(4 * pts.len());
    let lower = build_chain(Phase::Lower, pts.iter().copied(), &mut steps);
    let upper = build_chain(Phase::Upper, pts.iter().rev().copied(), &mut steps);

    let mut hull = Vec::with_capacity(lower.len() + upper.len());
    for chain in [&lower, &upper] {
        if let Some((_, body)) = chain.split_last() {
            hull.extend_from_slice(body);
        }
    }
    tracing::debug!(
        points = points.len(),
        hull = hull.len(),
        steps = steps.len(),
        "convex hull"
    );
    HullTrace {
        hull,
        lower,
        upper,
        steps,
    }
}

fn build_chain(
    phase: Phase,
    candidates: impl Iterator<Item = IntPoint>,
    steps: &mut Vec<HullStep<IntPoint>>,
) -> Vec<IntPoint> {
    let mut chain: Vec<IntPoint> = Vec::new();
    for p in candidates {
        while let [.., a, b] = chain.as_slice() {
            let (a, b) = (*a, *b);
            let c = cross(a, b, p);
            if c > 0 {
                break;
            }
            chain.pop();
            steps.push(HullStep {
                phase,
                action: StepAction::Pop,
                candidate: p,
                removed: Some(b),
                stack: chain.clone(),
                cross: saturate(c),
            });
        }
        chain.push(p);
        steps.push(HullStep {
            phase,
            action: StepAction::Push,
            candidate: p,
            removed: None,
            stack: chain.clone(),
            cross: 0,
        });
    }
    chain
}

/// `(a - o) × (b - o)`; positive for a counter-clockwise turn o → a → b.
///
/// Coordinate differences fit `i64`, their products need `i128` at the
/// extremes of the `i32` range.
#[inline]
pub(crate) fn cross(o: IntPoint, a: IntPoint, b: IntPoint) -> i128 {
    let oa = a.to_i64() - o.to_i64();
    let ob = b.to_i64() - o.to_i64();
    i128::from(oa.x) * i128::from(ob.y) - i128::from(oa.y) * i128::from(ob.x)
}

#[inline]
fn saturate(c: i128) -> i64 {
    i64::try_from(c).unwrap_or(if c < 0 { i64::MIN } else { i64::MAX })
}
