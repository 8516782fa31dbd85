//! The player character
//!
//! Simple arcade physics: a fixed jump impulse, cumulative gravity with no
//! terminal velocity, and a hard snap to the ground line on landing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Feet within this distance of the ground count as grounded (f32 slack for
/// the crouched height, which isn't exactly representable)
const GROUND_EPSILON: f32 = 1e-3;

/// Locomotion state of the actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locomotion {
    Running,
    Jumping,
    Ducking,
    /// Only ever set by the world on game over
    Dead,
}

/// The two hitbox profiles; size is always exactly one of these
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Profile {
    Standing,
    Crouched,
}

impl Profile {
    pub fn size(self) -> Vec2 {
        match self {
            Profile::Standing => Vec2::new(ACTOR_STAND_WIDTH, ACTOR_STAND_HEIGHT),
            Profile::Crouched => Vec2::new(ACTOR_DUCK_WIDTH, ACTOR_DUCK_HEIGHT),
        }
    }
}

/// Per-tick movement intent for the actor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorInput {
    pub jump: bool,
    pub duck: bool,
}

/// Physics constants the actor needs each tick
#[derive(Debug, Clone, Copy)]
pub struct ActorPhysics {
    pub jump_impulse: f32,
    pub gravity: f32,
    pub run_frame_ticks: u32,
}

/// The running character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner; x never changes
    pub pos: Vec2,
    /// Vertical velocity (negative = up)
    pub vel_y: f32,
    pub profile: Profile,
    pub state: Locomotion,
    /// Feet left the ground and haven't landed yet
    pub airborne: bool,
    /// Animation counter for run/duck frame swapping
    pub anim_ticks: u32,
}

impl Actor {
    /// A fresh actor standing on the ground line
    pub fn new(ground_y: f32) -> Self {
        let profile = Profile::Standing;
        Self {
            pos: Vec2::new(ACTOR_X, ground_y - profile.size().y),
            vel_y: 0.0,
            profile,
            state: Locomotion::Running,
            airborne: false,
            anim_ticks: 0,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.profile.size()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size().x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size().y
    }

    /// Feet y-coordinate
    #[inline]
    pub fn feet(&self) -> f32 {
        self.pos.y + self.height()
    }

    pub fn hitbox(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size(),
        }
    }

    pub fn is_ducking(&self) -> bool {
        self.profile == Profile::Crouched
    }

    /// Advance one tick
    pub fn update(&mut self, input: ActorInput, ground_y: f32, physics: &ActorPhysics) {
        // Frame flip is shown for one tick, then the counter starts over
        if self.anim_ticks > physics.run_frame_ticks {
            self.anim_ticks = 0;
        }

        if input.jump && !self.airborne && !self.is_ducking() {
            self.vel_y = -physics.jump_impulse;
            self.airborne = true;
            self.state = Locomotion::Jumping;
        }

        self.pos.y += self.vel_y;

        if self.feet() < ground_y - GROUND_EPSILON {
            self.vel_y += physics.gravity;
            self.airborne = true;
        } else {
            self.vel_y = 0.0;
            self.airborne = false;
            if self.state != Locomotion::Ducking {
                self.pos.y = ground_y - self.height();
            }
            self.state = Locomotion::Running;
        }

        if input.duck && !self.airborne {
            self.set_profile(Profile::Crouched, ground_y);
            self.state = Locomotion::Ducking;
        } else if self.is_ducking() && !input.duck {
            self.set_profile(Profile::Standing, ground_y);
        }

        if self.airborne {
            self.state = Locomotion::Jumping;
            self.profile = Profile::Standing;
        }

        self.anim_ticks += 1;
    }

    fn set_profile(&mut self, profile: Profile, ground_y: f32) {
        self.profile = profile;
        self.pos.y = ground_y - profile.size().y;
    }

    /// Mark the actor dead (game over)
    pub fn kill(&mut self) {
        self.state = Locomotion::Dead;
    }

    /// Current run/duck animation frame index (0 or 1)
    pub fn animation_frame(&self, run_frame_ticks: u32) -> usize {
        animation_frame(self.anim_ticks, run_frame_ticks)
    }
}

/// Map an animation counter to a frame index
///
/// Frame 1 is shown only on the tick the counter exceeds the threshold.
pub fn animation_frame(anim_ticks: u32, run_frame_ticks: u32) -> usize {
    if anim_ticks > run_frame_ticks { 1 } else { 0 }
}
