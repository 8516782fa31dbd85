//! Read-only view of the world for the presentation layer
//!
//! Plain data, serializable to JSON so a browser or terminal front end can
//! draw it without touching simulation types.

use serde::Serialize;

use super::actor::Locomotion;
use super::obstacle::ObstacleKind;
use super::state::{GamePhase, World};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub state: Locomotion,
    /// Raw animation counter
    pub anim_ticks: u32,
    /// Run/duck frame index derived from the counter
    pub anim_frame: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObstacleView {
    pub kind: ObstacleKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub phase: u32,
    pub wing_frame: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub actor: ActorView,
    pub obstacles: Vec<ObstacleView>,
    pub clouds: Vec<CloudView>,
    pub background_x: f32,
    pub ground_y: f32,
    pub field_width: f32,
    pub field_height: f32,
    pub speed: f32,
    pub score: u64,
    pub high_score: u64,
}

impl World {
    pub fn snapshot(&self) -> Snapshot {
        let actor = &self.actor;
        Snapshot {
            phase: self.phase,
            actor: ActorView {
                x: actor.pos.x,
                y: actor.pos.y,
                width: actor.width(),
                height: actor.height(),
                state: actor.state,
                anim_ticks: actor.anim_ticks,
                anim_frame: actor.animation_frame(self.tuning.run_frame_ticks),
            },
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    kind: o.kind,
                    x: o.pos.x,
                    y: o.pos.y,
                    width: o.size.x,
                    height: o.size.y,
                    phase: o.phase,
                    wing_frame: o.wing_frame(),
                })
                .collect(),
            clouds: self
                .clouds
                .iter()
                .map(|c| CloudView {
                    x: c.pos.x,
                    y: c.pos.y,
                    width: c.size.x,
                    height: c.size.y,
                })
                .collect(),
            background_x: self.background_x,
            ground_y: self.ground_y(),
            field_width: self.viewport.width,
            field_height: self.viewport.height,
            speed: self.speed,
            score: self.score,
            high_score: self.high_score.best,
        }
    }
}
