//! Decorative background clouds
//!
//! Same spawn/scroll/cull lifecycle as obstacles, but with a speed frozen at
//! spawn time and no part in collisions.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cloud {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Scroll speed captured when spawned
    pub speed: f32,
    pub marked_for_deletion: bool,
}

impl Cloud {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(CLOUD_WIDTH, CLOUD_HEIGHT),
            speed,
            marked_for_deletion: false,
        }
    }

    pub fn update(&mut self) {
        self.pos.x -= self.speed;
        if self.pos.x + self.size.x < 0.0 {
            self.marked_for_deletion = true;
        }
    }
}

/// Roll for a new cloud on this frame
pub fn maybe_spawn_cloud(
    frame: u64,
    world_speed: f32,
    field_width: f32,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<Cloud> {
    if tuning.cloud_interval == 0 || !frame.is_multiple_of(tuning.cloud_interval) {
        return None;
    }
    if rng.random::<f32>() >= tuning.cloud_chance {
        return None;
    }
    let x = field_width + rng.random::<f32>() * SPAWN_JITTER;
    let y = CLOUD_MIN_Y + rng.random::<f32>() * CLOUD_Y_RANGE;
    Some(Cloud::new(
        Vec2::new(x, y),
        world_speed * tuning.cloud_speed_factor,
    ))
}
