//! Tabular export of per-step data for offline analysis.
//!
//! - HULL: one row per monotone-chain step (raw coordinates).
//! - SKYLINE: one row per key point, raw and normalized.
//! - BFS/DFS: one row per tree edge in recording order.
//!
//! `.parquet` paths are written as Parquet, anything else as CSV with header.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use algoviz::hull::{Phase, StepAction};
use algoviz::Solution;

pub fn to_frame(solution: &Solution) -> PolarsResult<DataFrame> {
    match solution {
        Solution::Hull(r) => {
            let steps = &r.raw_steps;
            df!(
                "step" => (0..steps.len() as i64).collect::<Vec<_>>(),
                "phase" => steps.iter().map(|s| match s.phase {
                    Phase::Lower => "lower",
                    Phase::Upper => "upper",
                }).collect::<Vec<_>>(),
                "action" => steps.iter().map(|s| match s.action {
                    StepAction::Push => "push",
                    StepAction::Pop => "pop",
                }).collect::<Vec<_>>(),
                "candidate_x" => steps.iter().map(|s| s.candidate.x).collect::<Vec<_>>(),
                "candidate_y" => steps.iter().map(|s| s.candidate.y).collect::<Vec<_>>(),
                "removed_x" => steps.iter().map(|s| s.removed.map(|p| p.x)).collect::<Vec<_>>(),
                "removed_y" => steps.iter().map(|s| s.removed.map(|p| p.y)).collect::<Vec<_>>(),
                "stack_len" => steps.iter().map(|s| s.stack.len() as i64).collect::<Vec<_>>(),
                "cross" => steps.iter().map(|s| s.cross).collect::<Vec<_>>()
            )
        }
        Solution::Skyline(r) => df!(
            "x" => r.key_points_raw.iter().map(|k| k.x).collect::<Vec<_>>(),
            "height" => r.key_points_raw.iter().map(|k| k.height).collect::<Vec<_>>(),
            "x_norm" => r.key_points.iter().map(|p| p.x).collect::<Vec<_>>(),
            "y_norm" => r.key_points.iter().map(|p| p.y).collect::<Vec<_>>()
        ),
        Solution::Traversal(r) => df!(
            "step" => (0..r.tree_edges.len() as i64).collect::<Vec<_>>(),
            "from" => r.tree_edges.iter().map(|&(u, _)| u as i64).collect::<Vec<_>>(),
            "to" => r.tree_edges.iter().map(|&(_, v)| v as i64).collect::<Vec<_>>()
        ),
    }
}

pub fn write_steps(solution: &Solution, path: &Path) -> Result<()> {
    let mut df = to_frame(solution)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if parquet {
        ParquetWriter::new(&mut file).finish(&mut df)?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut df)?;
    }
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "steps table"
    );
    Ok(())
}
