//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, no wall-clock time
//! - Seeded RNG only
//! - Fixed update order within a tick
//! - No rendering or platform dependencies

pub mod actor;
pub mod autopilot;
pub mod cloud;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use actor::{Actor, ActorInput, Locomotion, Profile, animation_frame};
pub use autopilot::{autopilot, demo_input};
pub use cloud::Cloud;
pub use collision::{Contact, check_contact};
pub use obstacle::{Obstacle, ObstacleKind, wing_frame};
pub use rect::Rect;
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, Viewport, World};
pub use tick::{TickInput, tick};
