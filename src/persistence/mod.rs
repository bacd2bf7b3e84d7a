//! Save/load plumbing
//!
//! Features:
//! - Single error type for storage collaborators
//! - Atomic writes (tmp → rename) so a crash never leaves a truncated file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage errors (never fatal to gameplay)
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not encode data: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("storage unavailable")]
    Unavailable,
}

/// Write `bytes` to `path` by writing a sibling temp file and renaming it over
/// the target.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, bytes)?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
