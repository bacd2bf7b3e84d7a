//! All-time best level storage
//!
//! The persisted value is a single integer. Anything missing or unreadable
//! loads as 1 so a new session is always playable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::{StoreError, write_atomic};

/// Lowest possible highscore (level 1 is always reached)
pub const MIN_HIGHSCORE: u32 = 1;

/// Persistence collaborator for the best level reached
pub trait HighscoreStore {
    /// Load the stored highscore. Absent or malformed data yields 1.
    fn load_highscore(&self) -> u32;

    /// Persist a new highscore
    fn save_highscore(&mut self, highscore: u32) -> Result<(), StoreError>;
}

/// On-disk record: `{"highscore": 12}`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct HighscoreRecord {
    highscore: u32,
}

/// JSON file store
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighscoreStore for JsonFileStore {
    fn load_highscore(&self) -> u32 {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                log::info!(
                    "No highscore at {} ({}), starting fresh",
                    self.path.display(),
                    e
                );
                return MIN_HIGHSCORE;
            }
        };

        match serde_json::from_str::<HighscoreRecord>(&json) {
            Ok(record) => {
                let highscore = record.highscore.max(MIN_HIGHSCORE);
                log::info!("Loaded highscore {}", highscore);
                highscore
            }
            Err(e) => {
                log::warn!(
                    "Ignoring malformed highscore file {}: {}",
                    self.path.display(),
                    e
                );
                MIN_HIGHSCORE
            }
        }
    }

    fn save_highscore(&mut self, highscore: u32) -> Result<(), StoreError> {
        let json = serde_json::to_string(&HighscoreRecord { highscore })?;
        write_atomic(&self.path, json.as_bytes())?;
        log::info!("Highscore {} saved to {}", highscore, self.path.display());
        Ok(())
    }
}

/// In-memory store (no durability)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    highscore: Option<u32>,
    fail_saves: bool,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a value
    pub fn with_highscore(highscore: u32) -> Self {
        Self {
            highscore: Some(highscore),
            ..Self::default()
        }
    }

    /// Make every save fail with `StoreError::Unavailable`
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    /// Number of successful saves
    pub fn saves(&self) -> u32 {
        self.saves
    }

    /// Last saved value
    pub fn stored(&self) -> Option<u32> {
        self.highscore
    }
}

impl HighscoreStore for MemoryStore {
    fn load_highscore(&self) -> u32 {
        self.highscore.unwrap_or(MIN_HIGHSCORE).max(MIN_HIGHSCORE)
    }

    fn save_highscore(&mut self, highscore: u32) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Unavailable);
        }
        self.highscore = Some(highscore);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_file(tag: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("elevator-jump-hs-{}-{}", tag, std::process::id()))
            .join("highscore.json")
    }

    #[test]
    fn test_missing_file_loads_one() {
        let store = JsonFileStore::new(scratch_file("missing"));
        assert_eq!(store.load_highscore(), 1);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_file("roundtrip");
        let mut store = JsonFileStore::new(&path);
        store.save_highscore(17).unwrap();

        let on_disk = fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, r#"{"highscore":17}"#);
        assert_eq!(JsonFileStore::new(&path).load_highscore(), 17);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_malformed_file_loads_one() {
        let path = scratch_file("malformed");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        let inputs = [
            "not json",
            r#"{"highscore":"ten"}"#,
            r#"{"best":4}"#,
            r#"{"highscore":-3}"#,
        ];
        for garbage in inputs {
            fs::write(&path, garbage).unwrap();
            assert_eq!(JsonFileStore::new(&path).load_highscore(), 1, "input: {garbage}");
        }
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_zero_is_clamped_to_one() {
        let path = scratch_file("zero");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"highscore":0}"#).unwrap();
        assert_eq!(JsonFileStore::new(&path).load_highscore(), 1);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load_highscore(), 1);
        store.save_highscore(5).unwrap();
        assert_eq!(store.load_highscore(), 5);
        assert_eq!(store.saves(), 1);

        let mut broken = MemoryStore::failing();
        assert!(matches!(
            broken.save_highscore(5),
            Err(StoreError::Unavailable)
        ));
        assert_eq!(broken.load_highscore(), 1);
    }
}
