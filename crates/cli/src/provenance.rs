//! Run records written next to every file the CLI produces.
//!
//! `out/bfs.json` gets `out/bfs.provenance.json` holding the algoviz version,
//! the source revision, the CLI callsite that wrote it, the solver or
//! generator parameters, and the input files read. Re-running the recorded
//! command at the recorded revision reproduces the artifact.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug)]
pub struct RunRecord {
    params: Value,
    inputs: Vec<PathBuf>,
    callsite: &'static Location<'static>,
}

impl RunRecord {
    /// Record for a command with `params`; the callsite is the caller of `new`.
    #[track_caller]
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
            callsite: Location::caller(),
        }
    }

    pub fn input(mut self, path: &Path) -> Self {
        self.inputs.push(path.to_path_buf());
        self
    }

    fn to_json(&self, artifact: &Path) -> Value {
        let paths = |ps: &[PathBuf]| -> Vec<String> {
            ps.iter().map(|p| p.display().to_string()).collect()
        };
        json!({
            "tool": { "name": "algoviz", "version": algoviz::VERSION },
            "code_rev": source_revision(),
            "callsite": format!("{}:{}", self.callsite.file(), self.callsite.line()),
            "params": self.params,
            "inputs": paths(&self.inputs),
            "outputs": [artifact.display().to_string()],
        })
    }

    /// Write the record beside `artifact`; returns the record path.
    pub fn write_beside(&self, artifact: &Path) -> Result<PathBuf> {
        let target = sidecar_path(artifact);
        let body = serde_json::to_vec_pretty(&self.to_json(artifact))?;
        fs::write(&target, body).with_context(|| format!("writing {}", target.display()))?;
        tracing::debug!(record = %target.display(), "run record");
        Ok(target)
    }
}

/// `dir/name.ext` → `dir/name.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy().into_owned());
    artifact.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` baked in at build time or set at run time, else `git rev-parse HEAD`.
fn source_revision() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            out.status
                .success()
                .then(|| String::from_utf8_lossy(&out.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_artifact() {
        assert_eq!(
            sidecar_path(Path::new("runs/hull.steps.csv")),
            Path::new("runs/hull.steps.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("graph.txt")),
            Path::new("graph.provenance.json")
        );
    }

    #[test]
    fn record_lists_params_inputs_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("dfs.json");
        let written = RunRecord::new(json!({"algo": "DFS", "source": 2}))
            .input(Path::new("graph.txt"))
            .write_beside(&artifact)
            .unwrap();
        assert_eq!(written, dir.path().join("dfs.provenance.json"));

        let doc: Value = serde_json::from_slice(&fs::read(written).unwrap()).unwrap();
        assert_eq!(doc["tool"]["version"], algoviz::VERSION);
        assert_eq!(doc["params"]["source"], 2);
        assert_eq!(doc["inputs"], json!(["graph.txt"]));
        assert_eq!(doc["outputs"][0], artifact.display().to_string());
        assert!(doc["callsite"].as_str().unwrap().contains("provenance.rs"));
        assert!(!doc["code_rev"].as_str().unwrap().is_empty());
    }

    #[test]
    fn generator_record_has_no_inputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("pts.txt");
        let written = RunRecord::new(json!({"kind": "points"}))
            .write_beside(&artifact)
            .unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(written).unwrap()).unwrap();
        assert_eq!(doc["inputs"], json!([]));
    }
}
