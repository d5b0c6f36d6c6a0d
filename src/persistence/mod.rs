//! Level save/load
//!
//! A versioned JSON envelope around the flat [`LevelData`] records. Loading
//! never touches sim state: callers get a `LevelData` back and apply it to a
//! [`World`](crate::sim::World) themselves only on success, so a failed load
//! can't leave a half-overwritten level behind.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::LevelData;

/// Newest level file version this build reads and writes
pub const LEVEL_VERSION: u32 = 1;

/// Why a level failed to save or load
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("level io: {0}")]
    Io(#[from] std::io::Error),
    #[error("level encoding: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported level file version {found}")]
    UnsupportedVersion { found: u32 },
}

#[derive(Debug, Serialize, Deserialize)]
struct LevelFile {
    version: u32,
    level: LevelData,
}

/// Write a level to disk as a versioned JSON document
pub fn save_level(path: &Path, level: &LevelData) -> Result<(), PersistError> {
    let file = LevelFile { version: LEVEL_VERSION, level: level.clone() };
    let json = serde_json::to_string_pretty(&file)?;
    fs::write(path, json)?;
    log::info!(
        "Saved level to {} ({} platforms, {} spikes)",
        path.display(),
        level.platforms.len(),
        level.spikes.len()
    );
    Ok(())
}

/// Read a level back from disk
///
/// Rejects files written by a newer build rather than misreading them.
pub fn load_level(path: &Path) -> Result<LevelData, PersistError> {
    let json = fs::read_to_string(path)?;
    let file: LevelFile = serde_json::from_str(&json)?;
    if file.version > LEVEL_VERSION {
        return Err(PersistError::UnsupportedVersion { found: file.version });
    }
    Ok(file.level)
}
