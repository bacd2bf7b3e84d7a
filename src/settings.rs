//! Host settings
//!
//! Persisted as JSON next to the highscore file. Missing or malformed files
//! fall back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{StoreError, write_atomic};
use crate::sim::Viewport;

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    pub viewport_width: i32,
    pub viewport_height: i32,
    /// Distance from the bottom of the viewport to the ground line
    pub ground_margin: i32,

    // === Timing ===
    /// Ticks per second driven by the host loop
    pub tick_rate: u32,

    // === Storage ===
    pub highscore_path: PathBuf,

    // === Presentation flavor ===
    /// Chance the platform gets nudged down before a round starts
    pub nudge_chance: f64,
    /// How far the nudge moves the platform
    pub nudge_offset: f32,
    /// Player trail positions kept for rendering
    pub trail_length: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,
            ground_margin: GROUND_MARGIN,

            tick_rate: TICK_RATE,

            highscore_path: PathBuf::from("highscore.json"),

            nudge_chance: 0.3,
            nudge_offset: 20.0,
            trail_length: TRAIL_LENGTH,
        }
    }
}

impl Settings {
    /// Viewport handed to the round generator
    pub fn viewport(&self) -> Viewport {
        Viewport {
            width: self.viewport_width,
            ground_y: self.viewport_height - self.ground_margin,
        }
    }

    /// Nudge chance clamped to a valid probability
    pub fn effective_nudge_chance(&self) -> f64 {
        if self.nudge_chance.is_nan() {
            0.0
        } else {
            self.nudge_chance.clamp(0.0, 1.0)
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, json.as_bytes())?;
        log::info!("Settings saved");
        Ok(())
    }
}
