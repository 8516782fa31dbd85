//! Dino Run - A side-scrolling endless runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `platform`: Input sampling and the per-frame driver
//! - `persistence`: Key-value stores for the high score
//! - `tuning`: Data-driven game balance

pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::{HIGH_SCORE_KEY, HighScore, format_hud};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Maximum playfield dimensions (pixels)
    pub const MAX_FIELD_WIDTH: f32 = 800.0;
    pub const MAX_FIELD_HEIGHT: f32 = 400.0;
    /// Ground line sits this far above the bottom of the field
    pub const GROUND_OFFSET: f32 = 20.0;

    /// Actor horizontal position (fixed for the actor's lifetime)
    pub const ACTOR_X: f32 = 50.0;
    /// Standing size profile
    pub const ACTOR_STAND_WIDTH: f32 = 44.0;
    pub const ACTOR_STAND_HEIGHT: f32 = 47.0;
    /// Crouched size profile (60% of standing height, wider body)
    pub const ACTOR_DUCK_WIDTH: f32 = 59.0;
    pub const ACTOR_DUCK_HEIGHT: f32 = ACTOR_STAND_HEIGHT * 0.6;

    /// Ground hazard sizes: three width variants each
    pub const SMALL_HAZARD_WIDTHS: [f32; 3] = [17.0, 34.0, 51.0];
    pub const SMALL_HAZARD_HEIGHT: f32 = 35.0;
    pub const LARGE_HAZARD_WIDTHS: [f32; 3] = [25.0, 50.0, 75.0];
    pub const LARGE_HAZARD_HEIGHT: f32 = 50.0;

    /// Aerial hazard size
    pub const AERIAL_WIDTH: f32 = 46.0;
    pub const AERIAL_HEIGHT: f32 = 40.0;
    /// Aerial altitude bands: top edge measured up from the field bottom
    pub const AERIAL_ALTITUDES: [f32; 3] = [50.0, 80.0, 110.0];
    /// Wing animation period in ticks (two frames per period)
    pub const WING_PERIOD: u32 = 20;

    /// Cloud size and altitude band (top edge, measured down from the top)
    pub const CLOUD_WIDTH: f32 = 46.0;
    pub const CLOUD_HEIGHT: f32 = 13.5;
    pub const CLOUD_MIN_Y: f32 = 50.0;
    pub const CLOUD_Y_RANGE: f32 = 100.0;

    /// Horizontal jitter added beyond the right edge at spawn
    pub const SPAWN_JITTER: f32 = 200.0;

    /// Ground track texture width; background offset wraps at this value
    pub const TRACK_WIDTH: f32 = 2400.0;
}
