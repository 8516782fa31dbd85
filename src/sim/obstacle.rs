//! Obstacles: ground hazards and aerial hazards
//!
//! Spawned just past the right edge, scrolled left at world speed, culled
//! once fully off the left edge.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Obstacle archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Short cactus, `variant` picks one of three widths
    GroundSmall { variant: u8 },
    /// Tall cactus, `variant` picks one of three widths
    GroundLarge { variant: u8 },
    /// Bird flying at one of three altitude bands
    Aerial { band: u8 },
}

impl ObstacleKind {
    pub fn size(self) -> Vec2 {
        match self {
            ObstacleKind::GroundSmall { variant } => {
                Vec2::new(SMALL_HAZARD_WIDTHS[variant as usize % 3], SMALL_HAZARD_HEIGHT)
            }
            ObstacleKind::GroundLarge { variant } => {
                Vec2::new(LARGE_HAZARD_WIDTHS[variant as usize % 3], LARGE_HAZARD_HEIGHT)
            }
            ObstacleKind::Aerial { .. } => Vec2::new(AERIAL_WIDTH, AERIAL_HEIGHT),
        }
    }

    pub fn is_aerial(self) -> bool {
        matches!(self, ObstacleKind::Aerial { .. })
    }
}

/// A hazard scrolling toward the actor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Wing-flap counter (aerial only, stays 0 for ground hazards)
    pub phase: u32,
    pub marked_for_deletion: bool,
}

impl Obstacle {
    /// Place an obstacle of `kind` at horizontal position `x`
    ///
    /// Ground hazards rest on `ground_y`; aerial hazards hang at their band's
    /// altitude above the field bottom.
    pub fn new(kind: ObstacleKind, x: f32, ground_y: f32, field_height: f32) -> Self {
        let size = kind.size();
        let y = match kind {
            ObstacleKind::Aerial { band } => field_height - AERIAL_ALTITUDES[band as usize % 3],
            _ => ground_y - size.y,
        };
        Self {
            kind,
            pos: Vec2::new(x, y),
            size,
            phase: 0,
            marked_for_deletion: false,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Scroll left by `speed` and flag when fully off-screen
    pub fn update(&mut self, speed: f32) {
        self.pos.x -= speed;
        if self.pos.x + self.size.x < 0.0 {
            self.marked_for_deletion = true;
        }
        if self.kind.is_aerial() {
            self.phase += 1;
        }
    }

    /// Wing animation frame index (0 or 1)
    pub fn wing_frame(&self) -> usize {
        wing_frame(self.phase)
    }
}

/// Map a wing phase to a frame index: first half of the period is frame 0
pub fn wing_frame(phase: u32) -> usize {
    if phase % WING_PERIOD < WING_PERIOD / 2 { 0 } else { 1 }
}

/// Pick an obstacle kind from the type roll
///
/// Bands are checked top-down: aerial (score-gated), then large, then small.
pub fn choose_kind(roll: f32, score: u64, tuning: &Tuning, rng: &mut impl Rng) -> ObstacleKind {
    if score > tuning.aerial_min_score && roll > tuning.aerial_band {
        ObstacleKind::Aerial {
            band: rng.random_range(0..3),
        }
    } else if roll > tuning.large_band {
        ObstacleKind::GroundLarge {
            variant: rng.random_range(0..3),
        }
    } else {
        ObstacleKind::GroundSmall {
            variant: rng.random_range(0..3),
        }
    }
}

/// Roll for a new obstacle on this frame
///
/// Returns `None` off-cadence or when the skip roll fails.
pub fn maybe_spawn_obstacle(
    frame: u64,
    score: u64,
    field: Vec2,
    ground_y: f32,
    tuning: &Tuning,
    rng: &mut impl Rng,
) -> Option<Obstacle> {
    if tuning.obstacle_interval == 0 || !frame.is_multiple_of(tuning.obstacle_interval) {
        return None;
    }
    if rng.random::<f32>() <= tuning.obstacle_skip_chance {
        return None;
    }
    let x = field.x + rng.random::<f32>() * SPAWN_JITTER;
    let roll = rng.random::<f32>();
    let kind = choose_kind(roll, score, tuning, rng);
    Some(Obstacle::new(kind, x, ground_y, field.y))
}
