//! Idle/demo mode: the simulation plays itself
//!
//! Looks at the nearest obstacle still ahead of the actor and decides
//! whether to run under it, duck under it, or jump over it.

use super::actor::{ActorInput, Profile};
use super::obstacle::Obstacle;
use super::state::World;
use super::tick::TickInput;

/// Jump this many ticks of travel before reaching an obstacle
const JUMP_LEAD_TICKS: f32 = 10.0;
/// Start ducking this many ticks of travel before an aerial hazard
const DUCK_LEAD_TICKS: f32 = 2.0;

/// Whether an actor of `profile` standing on `ground_y` vertically clears
/// the obstacle, using the same padding as the collision test
fn clears(obstacle: &Obstacle, profile: Profile, ground_y: f32, padding: f32) -> bool {
    let actor_top = ground_y - profile.size().y + padding;
    let actor_bottom = ground_y - padding;
    let top = obstacle.pos.y + padding;
    let bottom = obstacle.pos.y + obstacle.size.y - padding;
    !(actor_top < bottom && actor_bottom > top)
}

/// Choose jump/duck for this tick
pub fn autopilot(world: &World) -> ActorInput {
    let actor = &world.actor;
    let actor_left = actor.pos.x;
    let actor_right = actor.pos.x + Profile::Standing.size().x;

    let Some(next) = world
        .obstacles
        .iter()
        .filter(|o| o.pos.x + o.size.x > actor_left)
        .min_by(|a, b| a.pos.x.total_cmp(&b.pos.x))
    else {
        return ActorInput::default();
    };

    let gap = next.pos.x - actor_right;
    let ground_y = world.ground_y();
    let padding = world.tuning.collision_padding;
    let speed = world.speed.max(1.0);

    if clears(next, Profile::Standing, ground_y, padding) {
        ActorInput::default()
    } else if clears(next, Profile::Crouched, ground_y, padding) {
        ActorInput {
            jump: false,
            duck: gap <= speed * DUCK_LEAD_TICKS,
        }
    } else {
        ActorInput {
            jump: gap <= speed * JUMP_LEAD_TICKS,
            duck: false,
        }
    }
}

/// Whole-frame input for a self-playing game
///
/// Also requests start and restart so a demo keeps going across game overs.
pub fn demo_input(world: &World) -> TickInput {
    let ActorInput { jump, duck } = autopilot(world);
    TickInput {
        jump,
        duck,
        start: true,
        restart: true,
    }
}
