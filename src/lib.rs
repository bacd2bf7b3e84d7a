//! Elevator Jump - a one-button timing arcade game
//!
//! Core modules:
//! - `sim`: Round rules (config generation, physics, timing judgment, progression)
//! - `platform`: Host abstractions (monotonic clock)
//! - `persistence`: Error type and atomic file writes
//! - `highscores`: Best-level storage
//! - `settings`: Host configuration
//! - `ui`: Read-only presentation snapshots
//! - `game`: Host-facing driver wiring the pieces together

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use game::Game;
pub use highscores::{HighscoreStore, JsonFileStore, MemoryStore};
pub use persistence::StoreError;
pub use settings::Settings;

/// Game configuration constants
///
/// Distances are pixels, speeds are pixels per tick.
pub mod consts {
    use std::time::Duration;

    /// Nominal tick rate driven by the host render loop
    pub const TICK_RATE: u32 = 60;

    /// Default viewport
    pub const VIEWPORT_WIDTH: i32 = 400;
    pub const VIEWPORT_HEIGHT: i32 = 700;
    /// Ground line sits this far above the bottom of the viewport
    pub const GROUND_MARGIN: i32 = 50;

    /// Platform geometry
    pub const PLATFORM_MIN_WIDTH: i32 = 180;
    pub const PLATFORM_MAX_WIDTH: i32 = 220;
    pub const PLATFORM_HEIGHT: i32 = 200;
    /// Platform starts this far above the viewport (randomized)
    pub const PLATFORM_MIN_START_OFFSET: i32 = 300;
    pub const PLATFORM_MAX_START_OFFSET: i32 = 800;

    /// Player geometry
    pub const PLAYER_SIZE: i32 = 40;
    /// Player sits this far above the platform's bottom edge
    pub const SURFACE_INSET: i32 = 10;

    /// Fall speed: BASE + level * PER_LEVEL
    pub const BASE_FALL_SPEED: f32 = 5.0;
    pub const FALL_SPEED_PER_LEVEL: f32 = 1.2;
    pub const SLOW_MOTION_FACTOR: f32 = 0.6;

    pub const GRAVITY: f32 = 0.6;
    pub const JUMP_STRENGTH: f32 = -6.0;

    /// Modifier schedule (level divisors)
    pub const DOUBLE_JUMP_EVERY: u32 = 7;
    pub const SLOW_MOTION_EVERY: u32 = 5;
    pub const SAFE_PAD_EVERY: u32 = 9;

    /// Jump must precede impact by less than this to survive
    pub const SAVE_WINDOW: Duration = Duration::from_millis(300);
    /// ...and by less than this to count as perfect
    pub const PERFECT_WINDOW: Duration = Duration::from_millis(100);

    /// Every Nth consecutive perfect earns one extra level
    pub const COMBO_BONUS_EVERY: u32 = 3;
    pub const PERFECT_LEVEL_BONUS: u32 = 2;

    /// Player trail length (positions kept for rendering)
    pub const TRAIL_LENGTH: usize = 5;
}
