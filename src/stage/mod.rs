//! Per-environment deployment stages.
//!
//! Each stage is a JSON file named after the stage inside the stages
//! directory. The handler reads the active stage to find its endpoint.

mod types;
mod validate;

pub use types::*;
pub use validate::{MEMORY_SIZES_MB, REGIONS, validate_stage_name};

use crate::{Error, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const STAGE_EXTENSION: &str = "json";

pub fn stage_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{name}.{STAGE_EXTENSION}"))
}

/// Reads and validates `<dir>/<name>.json`.
pub async fn load(dir: impl AsRef<Path>, name: &str) -> Result<StageEnvironment> {
    validate_stage_name(name)?;
    let path = stage_path(dir, name);

    debug!("Loading stage from: {}", path.display());

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::StageNotFound {
                stage: name.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let stage: StageEnvironment = serde_json::from_str(&content)?;
    stage.validate()?;

    Ok(stage)
}

/// Names of all stage files in `dir`, sorted. A missing directory has no stages.
pub async fn list(dir: impl AsRef<Path>) -> Result<Vec<String>> {
    let mut entries = match tokio::fs::read_dir(dir.as_ref()).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some(STAGE_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
            names.push(stem.to_string());
        }
    }
    names.sort();

    Ok(names)
}

/// Validates `stage` and writes it as `<dir>/<name>.json`, replacing any
/// previous file of that name.
pub async fn save(dir: impl AsRef<Path>, name: &str, stage: &StageEnvironment) -> Result<PathBuf> {
    validate_stage_name(name)?;
    stage.validate()?;

    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir).await?;

    let path = stage_path(dir, name);
    let json = serde_json::to_string_pretty(stage)?;
    tokio::fs::write(&path, json).await?;

    info!("Created new stage: {}", name);

    Ok(path)
}
