//! Cosmic Dodger entry point
//!
//! Native builds run a headless session: the autopilot flies the ship on a
//! simulated frame clock and the best score is kept in a JSON store file.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use cosmic_dodger::persistence::{FileStorage, Storage};
    use cosmic_dodger::platform::{Clock, ManualClock};
    use cosmic_dodger::render::{Renderer, TraceRenderer};
    use cosmic_dodger::sim::{TickInput, autopilot};
    use cosmic_dodger::{Command, FrameDriver, FrameOutcome, Tuning};

    /// Dodge falling asteroids on a scrolling starfield
    #[derive(Parser, Debug)]
    #[command(author, version, about, long_about = None)]
    struct Args {
        /// RNG seed (defaults to the current time)
        #[arg(long)]
        seed: Option<u64>,

        /// Stop after this many simulated seconds if still alive
        #[arg(long, default_value_t = 120.0)]
        seconds: f64,

        /// Simulated display refresh rate
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// Best score / theme store
        #[arg(long, default_value = "cosmic-dodger.json")]
        store: PathBuf,

        /// JSON file overriding game balance
        #[arg(long)]
        tuning: Option<PathBuf>,

        /// Let the ship sit still instead of using the autopilot
        #[arg(long)]
        manual: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    }

    fn init_logging(verbose: bool) {
        let default = if verbose { "debug" } else { "info" };
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
            .init();
    }

    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        init_logging(args.verbose);

        anyhow::ensure!(args.fps > 0.0, "--fps must be positive");
        anyhow::ensure!(args.seconds >= 0.0, "--seconds must not be negative");

        let tuning = match &args.tuning {
            Some(path) => Tuning::load(path)
                .with_context(|| format!("loading tuning from {}", path.display()))?,
            None => Tuning::default(),
        };
        let storage = FileStorage::open(&args.store)
            .with_context(|| format!("opening store {}", args.store.display()))?;
        let seed = args.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });

        log::info!("Cosmic Dodger (native) starting...");
        let clock = ManualClock::new(0.0);
        let mut driver = FrameDriver::new(tuning, seed, &clock, storage);
        let mut renderer = TraceRenderer::default();
        let frame_ms = 1000.0 / args.fps;
        let max_frames = (args.seconds * args.fps).ceil() as u64;

        driver.apply(Command::Begin);
        let outcome = play(
            &mut driver,
            &clock,
            &mut renderer,
            max_frames,
            frame_ms,
            args.manual,
        );

        match outcome {
            FrameOutcome::GameOver { score, new_best } => {
                println!(
                    "Game over after {:.1}s. Final score: {}{}",
                    clock.now_ms() / 1000.0,
                    score,
                    if new_best { " (new best!)" } else { "" }
                );
            }
            _ => {
                println!(
                    "Survived {:.1}s with {} lives. Score: {}",
                    clock.now_ms() / 1000.0,
                    driver.state().lives,
                    driver.state().display_score()
                );
            }
        }
        println!("Best score: {}", driver.best_score());
        log::debug!("Rendered {} frames", renderer.frames);
        Ok(())
    }

    /// Run frames `0..=max_frames`, one `frame_ms` apart, until the run ends.
    /// The clock is left at the timestamp of the last simulated frame.
    fn play<S: Storage, R: Renderer>(
        driver: &mut FrameDriver<&ManualClock, S>,
        clock: &ManualClock,
        renderer: &mut R,
        max_frames: u64,
        frame_ms: f64,
        manual: bool,
    ) -> FrameOutcome {
        let mut outcome = FrameOutcome::Continue;
        for frame in 0..=max_frames {
            if frame > 0 {
                clock.advance(frame_ms);
            }
            let input = if manual {
                TickInput::default()
            } else {
                autopilot::steer(driver.state())
            };
            outcome = driver.frame(&input, renderer);
            if !outcome.wants_next_frame() {
                break;
            }
        }
        outcome
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use cosmic_dodger::persistence::MemoryStorage;
        use cosmic_dodger::render::NullRenderer;

        #[test]
        fn test_survived_time_matches_simulated_frames() {
            let clock = ManualClock::new(0.0);
            let mut driver =
                FrameDriver::new(Tuning::default(), 7, &clock, MemoryStorage::new());
            driver.apply(Command::Begin);
            // Keep the field empty so the run survives
            driver.state_mut().spawn_timer = f32::MAX;

            let outcome = play(&mut driver, &clock, &mut NullRenderer, 60, 1000.0 / 60.0, true);
            assert_eq!(outcome, FrameOutcome::Continue);
            assert!((clock.now_ms() - 1000.0).abs() < 1e-6);
            assert!((driver.state().score - 12.0).abs() < 1e-3);
        }

        #[test]
        fn test_zero_seconds_runs_a_single_frame() {
            let clock = ManualClock::new(0.0);
            let mut driver =
                FrameDriver::new(Tuning::default(), 7, &clock, MemoryStorage::new());
            driver.apply(Command::Begin);

            play(&mut driver, &clock, &mut NullRenderer, 0, 1000.0 / 60.0, true);
            assert_eq!(clock.now_ms(), 0.0);
            assert_eq!(driver.state().score, 0.0);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser front end drives `FrameDriver` from requestAnimationFrame
}
