//! Frame driver
//!
//! One `frame()` call per host refresh: sample input, tick the world, and
//! write the high score back the moment a run ends with a new record. The
//! host owns scheduling; the driver never loops on its own.

use crate::highscores::HighScore;
use crate::persistence::KeyValueStore;
use crate::sim::{GameEvent, Snapshot, Viewport, World, demo_input, tick};
use crate::tuning::Tuning;

use super::input::InputSampler;

pub struct FrameDriver<S: KeyValueStore> {
    world: World,
    store: S,
    input: InputSampler,
    /// Let the autopilot play
    pub idle_mode: bool,
}

impl<S: KeyValueStore> FrameDriver<S> {
    /// Build an idle world, reading the stored high score once
    pub fn new(seed: u64, tuning: Tuning, viewport: Viewport, store: S) -> Self {
        let high_score = HighScore::load(&store);
        Self {
            world: World::new(seed, tuning, viewport, high_score),
            store,
            input: InputSampler::new(),
            idle_mode: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn input_mut(&mut self) -> &mut InputSampler {
        &mut self.input
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resize(width, height);
    }

    pub fn snapshot(&self) -> Snapshot {
        self.world.snapshot()
    }

    /// Advance one frame and return what happened
    pub fn frame(&mut self) -> Vec<GameEvent> {
        // Edges are consumed even when the autopilot is playing
        let sampled = self.input.sample();
        let input = if self.idle_mode {
            demo_input(&self.world)
        } else {
            sampled
        };
        tick(&mut self.world, &input);

        let events = self.world.drain_events();
        for event in &events {
            if let GameEvent::GameOver {
                high_score,
                new_high_score: true,
                ..
            } = event
            {
                if let Err(e) = HighScore::new(*high_score).save(&mut self.store) {
                    log::warn!("Failed to save high score {}: {}", high_score, e);
                }
            }
        }
        events
    }
}
