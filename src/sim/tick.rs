//! Per-frame simulation tick
//!
//! Order inside a running tick matters: background and clouds, then
//! obstacles with collision against the actor's pre-update box, then the
//! actor, then score and difficulty.

use super::actor::ActorInput;
use super::cloud::maybe_spawn_cloud;
use super::collision::first_hit;
use super::obstacle::maybe_spawn_obstacle;
use super::rect::Rect;
use super::state::{GameEvent, GamePhase, World};
use crate::consts::TRACK_WIDTH;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump held
    pub jump: bool,
    /// Duck held
    pub duck: bool,
    /// Start the first run (honoured only while idle)
    pub start: bool,
    /// Restart after game over (honoured only at game over)
    pub restart: bool,
}

/// Advance the world by one frame
pub fn tick(state: &mut World, input: &TickInput) {
    match state.phase {
        GamePhase::Idle => {
            if !input.start {
                return;
            }
            state.start();
        }
        GamePhase::GameOver => {
            if !input.restart {
                return;
            }
            state.reset();
        }
        GamePhase::Running => {}
    }

    scroll_background(state);
    update_clouds(state);

    if update_obstacles(state) {
        state.game_over();
        return;
    }

    let ground_y = state.ground_y();
    let physics = state.actor_physics();
    state.actor.update(
        ActorInput {
            jump: input.jump,
            duck: input.duck,
        },
        ground_y,
        &physics,
    );

    update_score(state);
    state.frame += 1;
}

fn scroll_background(state: &mut World) {
    state.background_x -= state.speed;
    if state.background_x <= -TRACK_WIDTH {
        state.background_x = 0.0;
    }
}

fn update_clouds(state: &mut World) {
    let frame = state.frame;
    let speed = state.speed;
    let width = state.viewport.width;
    let tuning = state.tuning;
    if let Some(cloud) = maybe_spawn_cloud(frame, speed, width, &tuning, state.rng()) {
        state.clouds.push(cloud);
    }

    for cloud in &mut state.clouds {
        cloud.update();
    }
    state.clouds.retain(|c| !c.marked_for_deletion);
}

/// Spawn, move, collide and cull obstacles; true when the actor was hit
fn update_obstacles(state: &mut World) -> bool {
    let frame = state.frame;
    let score = state.score;
    let field = state.viewport.size();
    let ground_y = state.ground_y();
    let tuning = state.tuning;
    if let Some(obstacle) = maybe_spawn_obstacle(frame, score, field, ground_y, &tuning, state.rng())
    {
        log::debug!("Spawned {:?} at x={:.1}", obstacle.kind, obstacle.pos.x);
        state.push_event(GameEvent::ObstacleSpawned(obstacle.kind));
        state.obstacles.push(obstacle);
    }

    let speed = state.speed;
    for obstacle in &mut state.obstacles {
        obstacle.update(speed);
    }

    // Actor hasn't moved yet this tick
    let actor_box = state.actor.hitbox();
    let boxes: Vec<Rect> = state.obstacles.iter().map(|o| o.hitbox()).collect();
    let hit = first_hit(&actor_box, &boxes, tuning.collision_padding);

    state.obstacles.retain(|o| !o.marked_for_deletion);
    hit.is_some()
}

fn update_score(state: &mut World) {
    let tuning = state.tuning;
    state.score_ticks += 1;
    if !state.score_ticks.is_multiple_of(tuning.ticks_per_point.max(1)) {
        return;
    }
    state.score += 1;

    if state.score.is_multiple_of(tuning.speed_up_every) && state.speed < tuning.max_speed {
        state.speed = (state.speed + tuning.speed_increment).min(tuning.max_speed);
        let speed = state.speed;
        log::info!("Speed up to {:.1} at score {}", speed, state.score);
        state.push_event(GameEvent::SpeedUp { speed });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::highscores::HighScore;
    use crate::sim::actor::Locomotion;
    use crate::sim::autopilot::demo_input;
    use crate::sim::cloud::Cloud;
    use crate::sim::obstacle::{Obstacle, ObstacleKind};
    use crate::sim::state::Viewport;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    /// Tuning with obstacle spawning disabled
    fn quiet() -> Tuning {
        Tuning {
            obstacle_skip_chance: 1.0,
            ..Tuning::default()
        }
    }

    fn running_world(tuning: Tuning) -> World {
        let mut world = World::new(12345, tuning, Viewport::default(), HighScore::default());
        world.start();
        world.drain_events();
        world
    }

    fn start() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_idle_until_start() {
        let mut world = World::new(1, quiet(), Viewport::default(), HighScore::default());
        for _ in 0..10 {
            tick(&mut world, &TickInput::default());
        }
        assert_eq!(world.phase, GamePhase::Idle);
        assert_eq!(world.frame, 0);

        tick(&mut world, &start());
        assert_eq!(world.phase, GamePhase::Running);
        assert_eq!(world.frame, 1);
        assert_eq!(world.drain_events(), vec![GameEvent::Started]);
    }

    #[test]
    fn test_thousand_ticks_scenario() {
        let mut world = World::new(9, quiet(), Viewport::default(), HighScore::default());
        tick(&mut world, &start());
        for _ in 1..1000 {
            tick(&mut world, &TickInput::default());
        }
        assert_eq!(world.phase, GamePhase::Running);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.score, 200);
        assert_eq!(world.speed, 5.5);
    }

    #[test]
    fn test_score_tick_coupling() {
        let mut world = running_world(quiet());
        for k in 0..50u64 {
            assert_eq!(world.score, k);
            for _ in 0..5 {
                tick(&mut world, &TickInput::default());
            }
        }
    }

    #[test]
    fn test_speed_up_fires_once_per_milestone() {
        let mut world = running_world(quiet());
        // Sit on score 200 for several ticks
        for _ in 0..1004 {
            tick(&mut world, &TickInput::default());
        }
        assert_eq!(world.score, 200);
        let speedups = world
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::SpeedUp { .. }))
            .count();
        assert_eq!(speedups, 1);
        assert_eq!(world.speed, 5.5);
    }

    #[test]
    fn test_speed_capped() {
        let tuning = Tuning {
            max_speed: 6.0,
            speed_up_every: 1,
            ..quiet()
        };
        let mut world = running_world(tuning);
        for _ in 0..500 {
            tick(&mut world, &TickInput::default());
        }
        assert_eq!(world.speed, 6.0);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut world = running_world(quiet());
        world.score = 42;
        let ground_y = world.ground_y();
        // Large cactus right on top of the actor after this tick's scroll
        world.obstacles.push(Obstacle::new(
            ObstacleKind::GroundLarge { variant: 1 },
            ACTOR_X + 5.0 + world.speed,
            ground_y,
            world.viewport.height,
        ));
        tick(&mut world, &TickInput::default());

        assert_eq!(world.phase, GamePhase::GameOver);
        assert_eq!(world.speed, 0.0);
        assert_eq!(world.actor.state, Locomotion::Dead);
        assert_eq!(world.score, 42);
        assert!(world.drain_events().contains(&GameEvent::GameOver {
            score: 42,
            high_score: 42,
            new_high_score: true,
        }));

        // Frozen until restart
        let frame = world.frame;
        tick(&mut world, &TickInput::default());
        tick(&mut world, &start());
        assert_eq!(world.frame, frame);
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_graze_does_not_end_run() {
        let mut world = running_world(quiet());
        let ground_y = world.ground_y();
        // Lands with a 15px overlap on the actor's right side
        let actor_right = ACTOR_X + ACTOR_STAND_WIDTH;
        world.obstacles.push(Obstacle::new(
            ObstacleKind::GroundSmall { variant: 0 },
            actor_right - 15.0 + world.speed,
            ground_y,
            world.viewport.height,
        ));
        tick(&mut world, &TickInput::default());
        assert_eq!(world.phase, GamePhase::Running);
    }

    #[test]
    fn test_collision_uses_pre_update_box() {
        let mut world = running_world(quiet());
        let ground_y = world.ground_y();
        world.obstacles.push(Obstacle::new(
            ObstacleKind::GroundLarge { variant: 1 },
            ACTOR_X + world.speed,
            ground_y,
            world.viewport.height,
        ));
        // Jumping this tick doesn't help: the hit is tested before the actor moves
        tick(
            &mut world,
            &TickInput {
                jump: true,
                ..Default::default()
            },
        );
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_cactus_still_hits_after_shrink() {
        let mut world = running_world(quiet());
        world.obstacles.push(Obstacle::new(
            ObstacleKind::GroundLarge { variant: 1 },
            200.0,
            world.ground_y(),
            world.viewport.height,
        ));
        world.resize(800.0, 300.0);
        for _ in 0..60 {
            tick(&mut world, &TickInput::default());
        }
        assert_eq!(world.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_restart_resets_run() {
        let mut world = running_world(quiet());
        world.obstacles.push(Obstacle::new(
            ObstacleKind::GroundLarge { variant: 2 },
            ACTOR_X,
            world.ground_y(),
            world.viewport.height,
        ));
        tick(&mut world, &TickInput::default());
        assert_eq!(world.phase, GamePhase::GameOver);

        tick(
            &mut world,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(world.phase, GamePhase::Running);
        assert_eq!(world.speed, 5.0);
        assert_eq!(world.frame, 1);
        assert!(world.obstacles.is_empty());
        assert_eq!(world.actor.state, Locomotion::Running);
    }

    #[test]
    fn test_offscreen_obstacle_culled() {
        let tuning = Tuning {
            cloud_chance: 0.0,
            ..quiet()
        };
        let mut world = running_world(tuning);
        world.obstacles.push(Obstacle::new(
            ObstacleKind::GroundSmall { variant: 0 },
            -13.0,
            world.ground_y(),
            world.viewport.height,
        ));
        world.clouds.push(Cloud::new(Vec2::new(-44.0, 60.0), 2.5));
        tick(&mut world, &TickInput::default());
        assert!(world.obstacles.is_empty());
        assert!(world.clouds.is_empty());
    }

    #[test]
    fn test_background_wraps() {
        let mut world = running_world(quiet());
        world.background_x = -TRACK_WIDTH + 3.0;
        tick(&mut world, &TickInput::default());
        assert_eq!(world.background_x, 0.0);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.background_x, -5.0);
    }

    #[test]
    fn test_cloud_speed_frozen_at_spawn() {
        let tuning = Tuning {
            cloud_chance: 1.0,
            ..quiet()
        };
        let mut world = running_world(tuning);
        tick(&mut world, &TickInput::default());
        assert_eq!(world.clouds.len(), 1);
        assert_eq!(world.clouds[0].speed, 2.5);
        world.speed = 10.0;
        tick(&mut world, &TickInput::default());
        assert_eq!(world.clouds[0].speed, 2.5);
    }

    #[test]
    fn test_determinism() {
        let mut a = World::new(777, Tuning::default(), Viewport::default(), HighScore::default());
        let mut b = World::new(777, Tuning::default(), Viewport::default(), HighScore::default());
        for _ in 0..3000 {
            let input_a = demo_input(&a);
            let input_b = demo_input(&b);
            assert_eq!(input_a, input_b);
            tick(&mut a, &input_a);
            tick(&mut b, &input_b);
        }
        assert_eq!(a.frame, b.frame);
        assert_eq!(a.score, b.score);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        assert_eq!(a.drain_events(), b.drain_events());
    }

    proptest! {
        #[test]
        fn prop_speed_monotonic_and_capped(
            ticks in 1usize..4000,
            step in 1u64..50,
            increment in 0.1f32..3.0,
        ) {
            let tuning = Tuning {
                speed_up_every: step,
                speed_increment: increment,
                ..quiet()
            };
            let mut world = running_world(tuning);
            let mut last = world.speed;
            for _ in 0..ticks {
                tick(&mut world, &TickInput::default());
                prop_assert!(world.speed >= last);
                prop_assert!(world.speed <= world.tuning.max_speed);
                if world.speed != last {
                    prop_assert!(world.score % step == 0);
                    // Exactly one increment, unless clamped to the ceiling
                    prop_assert!(
                        (world.speed - last - increment).abs() < 1e-4
                            || world.speed == world.tuning.max_speed,
                        "speed jumped {} -> {} with increment {}",
                        last,
                        world.speed,
                        increment
                    );
                }
                last = world.speed;
            }
        }
    }
}
