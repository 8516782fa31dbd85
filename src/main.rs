//! Dino Run entry point
//!
//! The browser build is driven from JS through `dino_run::web::WebGame`.
//! Natively this runs the simulation headless with the autopilot playing,
//! which is handy for balancing tuning files and soak-testing the sim.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use clap::Parser;

    use dino_run::persistence::{FileStore, StoreError};
    use dino_run::platform::FrameDriver;
    use dino_run::sim::{GameEvent, Viewport};
    use dino_run::{Tuning, format_hud};

    #[derive(Parser)]
    #[command(name = "dino-run")]
    #[command(about = "Run the endless-runner simulation headless with the autopilot", long_about = None)]
    #[command(version)]
    pub struct Cli {
        /// RNG seed for the run
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Number of frames to simulate
        #[arg(long, default_value_t = 10_000)]
        ticks: u64,

        /// Field width in pixels (capped at 800)
        #[arg(long, default_value_t = 800.0)]
        width: f32,

        /// Field height in pixels (capped at 400)
        #[arg(long, default_value_t = 400.0)]
        height: f32,

        /// Tuning JSON file (missing keys use defaults)
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// High score store
        #[arg(long, default_value = "dino_run_scores.json")]
        store: PathBuf,

        /// Print the final snapshot as JSON
        #[arg(long)]
        dump: bool,
    }

    pub fn run(cli: Cli) -> Result<(), StoreError> {
        let tuning = cli
            .tuning
            .as_deref()
            .map(Tuning::load)
            .unwrap_or_default();
        let store = FileStore::open(&cli.store);

        let mut driver = FrameDriver::new(
            cli.seed,
            tuning,
            Viewport::new(cli.width, cli.height),
            store,
        );
        driver.idle_mode = true;

        let mut runs = 0u32;
        let mut best_run = 0u64;
        for _ in 0..cli.ticks {
            for event in driver.frame() {
                if let GameEvent::GameOver { score, .. } = event {
                    runs += 1;
                    best_run = best_run.max(score);
                }
            }
        }

        let world = driver.world();
        log::info!(
            "{} frames, {} finished runs, best run {}, current score {} at speed {:.1}",
            cli.ticks,
            runs,
            best_run,
            world.score,
            world.speed
        );
        println!("{}", format_hud(world.high_score.best, world.score));

        if cli.dump {
            println!("{}", serde_json::to_string_pretty(&driver.snapshot())?);
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    log::info!("Dino Run (headless) starting...");

    if let Err(e) = headless::run(headless::Cli::parse()) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is dino_run::web::WebGame, this is just to satisfy the compiler
}
