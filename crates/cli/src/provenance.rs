use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write `<artifact stem>.provenance.json` beside a shape file: git revision,
/// engine version, the calling line, construction `params` and the artifact path.
#[track_caller]
pub fn write_sidecar(artifact: &Path, params: Value) -> Result<PathBuf> {
    let path = sidecar_path(artifact);
    let caller = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "engine_version": hyperdisk::VERSION,
        "callsite": format!("{}:{}", caller.file(), caller.line()),
        "params": params,
        "outputs": [artifact.display().to_string()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// `GIT_COMMIT` (compile time, then runtime), else `git rev-parse HEAD`, else "unknown".
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
