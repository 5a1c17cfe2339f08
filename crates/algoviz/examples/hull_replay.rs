//! Print the monotone-chain log for a small point set, one step per line.
//!
//! Usage:
//!   cargo run -p algoviz --example hull_replay
//!   cargo run -p algoviz --example hull_replay -- 30 7   # random: count, seed

use algoviz::hull::{self, IntPoint, StepAction};
use algoviz::randgen::{random_points, PointCfg, ReplayToken};

fn main() {
    let mut args = std::env::args().skip(1);
    let points = match (args.next(), args.next()) {
        (Some(count), Some(seed)) => {
            let count = count.parse().unwrap_or(12);
            let seed = seed.parse().unwrap_or(0);
            random_points(
                PointCfg {
                    count,
                    min: 0,
                    max: 20,
                },
                ReplayToken::new(seed),
            )
        }
        _ => [(0, 0), (1, 1), (2, 2), (2, 0), (0, 2)]
            .into_iter()
            .map(|(x, y)| IntPoint::new(x, y))
            .collect(),
    };

    let res = hull::solve(&points);
    for (i, s) in res.raw_steps.iter().enumerate() {
        let stack: Vec<String> = s.stack.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
        match s.action {
            StepAction::Push => println!(
                "{i:>3} {:?} push ({},{})          [{}]",
                s.phase,
                s.candidate.x,
                s.candidate.y,
                stack.join(" ")
            ),
            StepAction::Pop => println!(
                "{i:>3} {:?} pop  ({},{}) cross={} [{}]",
                s.phase,
                s.removed.map_or(0, |p| p.x),
                s.removed.map_or(0, |p| p.y),
                s.cross,
                stack.join(" ")
            ),
        }
    }
    let hull: Vec<String> = res.hull_raw.iter().map(|p| format!("({},{})", p.x, p.y)).collect();
    println!("hull (ccw): {}", hull.join(" "));
}
