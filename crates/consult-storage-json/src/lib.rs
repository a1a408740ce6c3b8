use std::{
    fs,
    path::{Path, PathBuf},
};

use consult_config::persist::write_atomic;
use consult_core::{
    storage::{SnapshotInfo, SnapshotStorage},
    CoreError,
};
use consult_domain::FinancialSnapshot;
use tracing::info;

const SNAPSHOT_EXTENSION: &str = "json";

/// Filesystem-backed JSON persistence for period snapshots.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStorage {
    root: PathBuf,
}

impl JsonSnapshotStorage {
    pub fn new(root: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        self.root
            .join(format!("{}.{}", canonical_name(name), SNAPSHOT_EXTENSION))
    }
}

impl SnapshotStorage for JsonSnapshotStorage {
    fn save_snapshot(&self, name: &str, snapshot: &FinancialSnapshot) -> Result<(), CoreError> {
        let path = self.snapshot_path(name);
        save_snapshot_to_path(snapshot, &path)?;
        info!("saved snapshot `{}` to {}", name, path.display());
        Ok(())
    }

    fn load_snapshot(&self, name: &str) -> Result<FinancialSnapshot, CoreError> {
        let path = self.snapshot_path(name);
        if !path.exists() {
            return Err(CoreError::SnapshotNotFound(name.to_string()));
        }
        load_snapshot_from_path(&path)
    }

    fn list_snapshots(&self) -> Result<Vec<SnapshotInfo>, CoreError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let size_bytes = fs::metadata(&path).map(|meta| meta.len()).unwrap_or(0);
            entries.push(SnapshotInfo {
                name: stem.to_string(),
                size_bytes,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn delete_snapshot(&self, name: &str) -> Result<(), CoreError> {
        let path = self.snapshot_path(name);
        if !path.exists() {
            return Err(CoreError::SnapshotNotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

/// Reads a snapshot document from an arbitrary path.
pub fn load_snapshot_from_path(path: &Path) -> Result<FinancialSnapshot, CoreError> {
    let data = fs::read_to_string(path)?;
    serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
}

/// Writes a snapshot document to `path` through a temporary sibling file.
pub fn save_snapshot_to_path(snapshot: &FinancialSnapshot, path: &Path) -> Result<(), CoreError> {
    let json =
        serde_json::to_string_pretty(snapshot).map_err(|err| CoreError::Serde(err.to_string()))?;
    write_atomic(path, &json)?;
    Ok(())
}

/// Lowercase slug used for file names; falls back to `snapshot` when nothing survives.
pub fn canonical_name(name: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !slug.is_empty() && !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    let trimmed = slug.trim_matches('-').to_string();
    if trimmed.is_empty() {
        "snapshot".into()
    } else {
        trimmed
    }
}
