use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use algoviz::randgen::{self, BuildingCfg, GraphCfg, PointCfg, ReplayToken};
use algoviz::{Algorithm, SolveParams};

mod provenance;
mod render;
mod table;

use provenance::RunRecord;

#[derive(Parser)]
#[command(name = "algoviz")]
#[command(about = "Run classical algorithms on text inputs and export their traces")]
struct Cmd {
    /// Log verbosity (error, warn, info, debug, trace); logs go to stderr
    #[arg(long, global = true, default_value = "info")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum InputKind {
    Graph,
    Points,
    Buildings,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one input file with the named algorithm
    Run {
        /// BFS, DFS, HULL, or SKYLINE (any case)
        #[arg(long)]
        algo: String,
        #[arg(long)]
        input: PathBuf,
        /// Start node for BFS/DFS
        #[arg(long, default_value_t = 0)]
        source: usize,
        /// Output file; stdout when omitted. Writes a provenance sidecar.
        #[arg(long)]
        out: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Per-step table (.parquet, otherwise CSV)
        #[arg(long)]
        steps_out: Option<PathBuf>,
    },
    /// Write a seeded random input in the solver text format
    Gen {
        #[arg(long, value_enum)]
        kind: InputKind,
        /// Node, point, or building count
        #[arg(long, default_value_t = 10)]
        size: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List the available algorithms
    List,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Run {
            algo,
            input,
            source,
            out,
            format,
            steps_out,
        } => run(
            &algo,
            &input,
            source,
            out.as_deref(),
            format,
            steps_out.as_deref(),
        ),
        Action::Gen {
            kind,
            size,
            seed,
            out,
        } => gen(kind, size, seed, out.as_deref()),
        Action::List => {
            for a in Algorithm::ALL {
                println!("{a}");
            }
            Ok(())
        }
    }
}

fn run(
    algo: &str,
    input: &Path,
    source: usize,
    out: Option<&Path>,
    format: Format,
    steps_out: Option<&Path>,
) -> Result<()> {
    let algorithm: Algorithm = algo.parse()?;
    tracing::info!(algo = %algorithm, input = %input.display(), source, "run");
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let solution = algorithm
        .solve(&text, &SolveParams::with_source(source))
        .with_context(|| format!("{algorithm} on {}", input.display()))?;

    let body = match format {
        Format::Json => serde_json::to_string_pretty(&solution.to_response())?,
        Format::Text => render::to_text(&solution),
    };
    emit(&body, out)?;

    if let Some(path) = steps_out {
        table::write_steps(&solution, path)?;
    }
    if let Some(path) = out {
        let params = json!({
            "algo": algorithm.name(),
            "source": source,
            "format": format!("{format:?}").to_lowercase(),
            "steps_out": steps_out.map(|p| p.to_string_lossy().into_owned()),
        });
        RunRecord::new(params).input(input).write_beside(path)?;
    }
    Ok(())
}

fn gen(kind: InputKind, size: usize, seed: u64, out: Option<&Path>) -> Result<()> {
    let tok = ReplayToken::new(seed);
    let text = match kind {
        InputKind::Graph => randgen::matrix_to_text(&randgen::random_graph(
            GraphCfg {
                nodes: size,
                ..GraphCfg::default()
            },
            tok,
        )),
        InputKind::Points => randgen::points_to_text(&randgen::random_points(
            PointCfg {
                count: size,
                ..PointCfg::default()
            },
            tok,
        )),
        InputKind::Buildings => randgen::buildings_to_text(&randgen::random_buildings(
            BuildingCfg {
                count: size,
                ..BuildingCfg::default()
            },
            tok,
        )),
    };
    tracing::info!(kind = ?kind, size, seed, "gen");
    emit(&text, out)?;
    if let Some(path) = out {
        let params = json!({
            "kind": format!("{kind:?}").to_lowercase(),
            "size": size,
            "seed": seed,
        });
        RunRecord::new(params).write_beside(path)?;
    }
    Ok(())
}

fn emit(body: &str, out: Option<&Path>) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            if !body.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
