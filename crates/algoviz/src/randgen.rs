//! Seeded random inputs (graphs, point clouds, buildings) and their text form.
//!
//! Purpose
//! - Produce valid solver inputs for benches, property tests, and the CLI
//!   `gen` command. Each generator is deterministic in its `ReplayToken`.
//! - Render inputs in the same text format the parser reads, so generated
//!   files go through the full pipeline.

use std::fmt::Write as _;

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::AdjacencyMatrix;
use crate::hull::IntPoint;
use crate::skyline::Building;

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    #[inline]
    pub fn advance(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Random directed (or symmetric) graph without self loops.
#[derive(Clone, Copy, Debug)]
pub struct GraphCfg {
    pub nodes: usize,
    /// Probability of each off-diagonal edge. Clamped to [0, 1].
    pub edge_prob: f64,
    /// Mirror every edge so the graph is undirected.
    pub symmetric: bool,
}

impl Default for GraphCfg {
    fn default() -> Self {
        Self {
            nodes: 8,
            edge_prob: 0.3,
            symmetric: true,
        }
    }
}

/// Uniform integer points in the box `[min, max]²`.
#[derive(Clone, Copy, Debug)]
pub struct PointCfg {
    pub count: usize,
    pub min: i32,
    pub max: i32,
}

impl Default for PointCfg {
    fn default() -> Self {
        Self {
            count: 20,
            min: 0,
            max: 100,
        }
    }
}

/// Buildings with `left ∈ [x_min, x_max]`, width in `[1, max_width]`,
/// height in `[1, max_height]`.
#[derive(Clone, Copy, Debug)]
pub struct BuildingCfg {
    pub count: usize,
    pub x_min: i32,
    pub x_max: i32,
    pub max_width: i32,
    pub max_height: i32,
}

impl Default for BuildingCfg {
    fn default() -> Self {
        Self {
            count: 10,
            x_min: 0,
            x_max: 50,
            max_width: 15,
            max_height: 30,
        }
    }
}

pub fn random_graph(cfg: GraphCfg, tok: ReplayToken) -> AdjacencyMatrix {
    let mut rng = tok.to_std_rng();
    let n = cfg.nodes.max(1);
    let p = cfg.edge_prob.clamp(0.0, 1.0);
    let mut m = DMatrix::<i32>::zeros(n, n);
    for u in 0..n {
        let first = if cfg.symmetric { u + 1 } else { 0 };
        for v in first..n {
            if u == v || !rng.gen_bool(p) {
                continue;
            }
            m[(u, v)] = 1;
            if cfg.symmetric {
                m[(v, u)] = 1;
            }
        }
    }
    AdjacencyMatrix::from(m)
}

pub fn random_points(cfg: PointCfg, tok: ReplayToken) -> Vec<IntPoint> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (cfg.min.min(cfg.max), cfg.min.max(cfg.max));
    (0..cfg.count)
        .map(|_| IntPoint::new(rng.gen_range(lo..=hi), rng.gen_range(lo..=hi)))
        .collect()
}

pub fn random_buildings(cfg: BuildingCfg, tok: ReplayToken) -> Vec<Building> {
    let mut rng = tok.to_std_rng();
    let (lo, hi) = (cfg.x_min.min(cfg.x_max), cfg.x_min.max(cfg.x_max));
    (0..cfg.count)
        .map(|_| {
            let left = rng.gen_range(lo..=hi);
            let width = rng.gen_range(1..=cfg.max_width.max(1));
            Building {
                left,
                right: left.saturating_add(width),
                height: rng.gen_range(1..=cfg.max_height.max(1)),
            }
        })
        .collect()
}

/// `n` header followed by the rows, space separated.
pub fn matrix_to_text(g: &AdjacencyMatrix) -> String {
    let mut out = format!("{}\n", g.node_count());
    for row in g.rows() {
        let cells: Vec<String> = row.iter().map(i32::to_string).collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Count line followed by one `x y` line per point.
pub fn points_to_text(points: &[IntPoint]) -> String {
    let mut out = format!("{}\n", points.len());
    for p in points {
        let _ = writeln!(out, "{} {}", p.x, p.y);
    }
    out
}

/// Count line followed by `left height right` lines.
pub fn buildings_to_text(buildings: &[Building]) -> String {
    let mut out = format!("{}\n", buildings.len());
    for b in buildings {
        let _ = writeln!(out, "{} {} {}", b.left, b.height, b.right);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_adjacency_matrix, parse_buildings, parse_points};

    #[test]
    fn reproducible_draws() {
        let tok = ReplayToken { seed: 42, index: 7 };
        assert_eq!(
            random_points(PointCfg::default(), tok),
            random_points(PointCfg::default(), tok)
        );
        assert_ne!(
            random_points(PointCfg::default(), tok),
            random_points(PointCfg::default(), tok.advance())
        );
    }

    #[test]
    fn symmetric_graph_has_no_self_loops() {
        let cfg = GraphCfg {
            nodes: 12,
            edge_prob: 0.5,
            symmetric: true,
        };
        let g = random_graph(cfg, ReplayToken::new(3));
        for u in 0..12 {
            assert!(!g.has_edge(u, u));
            for v in 0..12 {
                assert_eq!(g.has_edge(u, v), g.has_edge(v, u));
            }
        }
        let full = random_graph(
            GraphCfg {
                nodes: 4,
                edge_prob: 1.0,
                symmetric: false,
            },
            ReplayToken::new(0),
        );
        assert_eq!(full.edge_count(), 12);
    }

    #[test]
    fn generated_text_parses_back() {
        let tok = ReplayToken::new(11);
        let g = random_graph(GraphCfg::default(), tok);
        assert_eq!(parse_adjacency_matrix(&matrix_to_text(&g)).unwrap(), g);

        let pts = random_points(PointCfg::default(), tok);
        assert_eq!(parse_points(&points_to_text(&pts)).unwrap(), pts);

        let bs = random_buildings(BuildingCfg::default(), tok);
        assert!(bs.iter().all(Building::is_valid));
        assert_eq!(parse_buildings(&buildings_to_text(&bs)).unwrap(), bs);
    }
}
