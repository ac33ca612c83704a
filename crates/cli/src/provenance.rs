use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced a balancing artifact: search parameters and the optional ticket.
pub struct RunRecord {
    pub params: Value,
    pub ticket: Option<String>,
}

impl RunRecord {
    pub fn new(params: Value, ticket: Option<String>) -> Self {
        Self { params, ticket }
    }
}

/// Write `<artifact>.provenance.json` with git rev, callsite, crate version, params and outputs.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, record: RunRecord) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let callsite = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "rotorbal_version": rotorbal::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "ticket": record.ticket,
        "params": record.params,
        "outputs": [artifact.to_string_lossy()]
    });
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("balance"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(baked) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return baked.to_string();
    }
    if let Ok(runtime) = std::env::var("GIT_COMMIT") {
        if !runtime.is_empty() {
            return runtime;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        let derived = sidecar_path(Path::new("/tmp/runs/rotor_a.json"));
        assert_eq!(derived, Path::new("/tmp/runs/rotor_a.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_and_ticket() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("balance.json");
        fs::write(&artifact, "{}").unwrap();
        let record = RunRecord::new(json!({"seed": 7, "restarts": 10}), Some("rb-12".into()));
        let path = write_sidecar(&artifact, record).unwrap();
        assert!(path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["ticket"], "rb-12");
        assert_eq!(parsed["params"]["seed"], 7);
        assert_eq!(parsed["rotorbal_version"], rotorbal::VERSION);
    }
}
