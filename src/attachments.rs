// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory for expense attachments, created on demand.
pub fn attachments_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com.alphavelocity", "Tripclip", "tripclip")
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().join("attachments");
    fs::create_dir_all(&dir).context("Failed to create attachments dir")?;
    Ok(dir)
}

pub fn save(bytes: &[u8], preferred_name: Option<&str>) -> Result<PathBuf> {
    save_in(&attachments_dir()?, bytes, preferred_name)
}

/// Write attachment bytes under `dir` and return the stable path. The write
/// goes through a temp file and rename so a crash never leaves a half-written
/// attachment behind.
pub fn save_in(dir: &Path, bytes: &[u8], preferred_name: Option<&str>) -> Result<PathBuf> {
    let name = match preferred_name {
        Some(n) => n.to_string(),
        None => format!("att-{}.bin", Utc::now().format("%Y%m%d%H%M%S%f")),
    };
    let path = dir.join(&name);
    let tmp = dir.join(format!("{}.tmp", name));
    fs::write(&tmp, bytes).with_context(|| format!("Write attachment {}", tmp.display()))?;
    fs::rename(&tmp, &path).with_context(|| format!("Finalize attachment {}", path.display()))?;
    Ok(path)
}

/// Absent file reads as None rather than an error.
pub fn load(path: &Path) -> Option<Vec<u8>> {
    fs::read(path).ok()
}

/// Fire-and-forget: a missing file is not an error.
pub fn delete(path: Option<&str>) {
    if let Some(p) = path {
        let _ = fs::remove_file(p);
    }
}
