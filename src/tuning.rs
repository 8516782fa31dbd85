//! Data-driven game balance
//!
//! Every pacing knob (speeds, cadences, spawn odds, physics) lives here so a
//! JSON file can rebalance the game without touching simulation code.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Balance values for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Difficulty ===
    /// Scroll speed at the start of a run (pixels/tick)
    pub initial_speed: f32,
    /// Speed added at each score milestone
    pub speed_increment: f32,
    /// Speed never exceeds this
    pub max_speed: f32,
    /// Score milestone spacing that triggers a speed-up
    pub speed_up_every: u64,
    /// Running ticks per score point
    pub ticks_per_point: u64,

    // === Obstacles ===
    /// Spawn roll happens every N frames
    pub obstacle_interval: u64,
    /// Probability a spawn roll is skipped
    pub obstacle_skip_chance: f32,
    /// Aerial hazards only appear once score exceeds this
    pub aerial_min_score: u64,
    /// Type roll above this picks an aerial hazard (when allowed)
    pub aerial_band: f32,
    /// Type roll above this picks a large ground hazard
    pub large_band: f32,

    // === Clouds ===
    /// Spawn roll happens every N frames
    pub cloud_interval: u64,
    /// Probability a cloud spawn roll succeeds
    pub cloud_chance: f32,
    /// Cloud speed as a fraction of scroll speed at spawn time
    pub cloud_speed_factor: f32,

    // === Physics ===
    /// Upward velocity applied on jump (pixels/tick)
    pub jump_impulse: f32,
    /// Downward acceleration while airborne (pixels/tick²)
    pub gravity: f32,
    /// Inward shrink applied to both boxes for the narrow-phase test
    pub collision_padding: f32,

    // === Animation ===
    /// Run/duck frame flips once the counter exceeds this
    pub run_frame_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: 5.0,
            speed_increment: 0.5,
            max_speed: 20.0,
            speed_up_every: 200,
            ticks_per_point: 5,

            obstacle_interval: 100,
            obstacle_skip_chance: 0.3,
            aerial_min_score: 500,
            aerial_band: 0.8,
            large_band: 0.4,

            cloud_interval: 200,
            cloud_chance: 0.8,
            cloud_speed_factor: 0.5,

            jump_impulse: 12.0,
            gravity: 0.6,
            collision_padding: 10.0,

            run_frame_ticks: 10,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults
    ///
    /// Missing keys take their default value, so partial files are fine.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Malformed tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
