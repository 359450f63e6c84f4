//! Frame driver
//!
//! Owns the clock, the session and the preference store, and runs the
//! update-then-render cycle once per display refresh. The phase guard at the
//! top of [`FrameDriver::frame`] makes late or duplicate frame callbacks
//! harmless: they return [`FrameOutcome::Skipped`] without touching anything.

use glam::Vec2;

use crate::best_score::BestScore;
use crate::persistence::{Preferences, Storage};
use crate::platform::Clock;
use crate::render::{FrameView, Notice, Renderer};
use crate::settings::Theme;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Zero-argument control surface commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start a run from the title card or after game over
    Begin,
    /// Pause or resume
    TogglePause,
    /// Start over from any state, including mid-run and paused
    Restart,
    /// Switch between light and dark
    ToggleTheme,
}

/// What a scheduled frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Not running; nothing happened and no further frame is needed
    Skipped,
    /// Frame advanced; schedule the next one
    Continue,
    /// The run ended on this frame
    GameOver { score: u64, new_best: bool },
}

impl FrameOutcome {
    /// Whether the caller should request another frame
    pub fn wants_next_frame(&self) -> bool {
        matches!(self, FrameOutcome::Continue)
    }
}

/// Session state machine: `Idle -> Running <-> Paused`, `Running -> Ended`,
/// `Ended -> Running`. Restart reaches `Running` from anywhere.
pub struct FrameDriver<C: Clock, S: Storage> {
    clock: C,
    prefs: Preferences<S>,
    state: GameState,
    best: BestScore,
    theme: Theme,
    notice: Option<Notice>,
    /// Timestamp of the previous frame; `None` until the first frame of a run
    last_timestamp: Option<f64>,
}

impl<C: Clock, S: Storage> FrameDriver<C, S> {
    /// Load preferences and show the title card
    pub fn new(tuning: Tuning, seed: u64, clock: C, storage: S) -> Self {
        let prefs = Preferences::new(storage);
        let best = BestScore::new(prefs.load_best_score());
        let theme = prefs.load_theme();
        log::info!(
            "Loaded preferences (best {}, theme {}), seed {}",
            best.value,
            theme,
            seed
        );

        Self {
            clock,
            prefs,
            state: GameState::new(tuning, seed),
            best,
            theme,
            notice: Some(Notice::Title),
            last_timestamp: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for front ends that script scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn best_score(&self) -> u64 {
        self.best.value
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.prefs
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Begin a run from `Idle` or `Ended`. A run in progress, paused or not,
    /// is left alone.
    pub fn start(&mut self) -> bool {
        match self.state.phase {
            GamePhase::Idle | GamePhase::Ended => {
                self.begin_run();
                true
            }
            phase => {
                log::debug!("Start ignored in {:?}", phase);
                false
            }
        }
    }

    /// Begin a fresh run from any state
    pub fn restart(&mut self) {
        self.begin_run();
    }

    fn begin_run(&mut self) {
        self.state.reset();
        self.last_timestamp = None;
        self.notice = None;
        log::info!("Session started");
    }

    /// Pause a running game or resume a paused one
    pub fn toggle_pause(&mut self) {
        match self.state.toggle_pause() {
            GamePhase::Paused => {
                self.notice = Some(Notice::Paused);
                log::debug!("Paused at score {}", self.state.display_score());
            }
            GamePhase::Running => {
                self.notice = None;
                // Fresh baseline so the paused interval isn't counted as one huge frame
                self.last_timestamp = Some(self.clock.now_ms());
                log::debug!("Resumed");
            }
            phase => log::debug!("Pause ignored in {:?}", phase),
        }
    }

    /// Flip the theme and persist it
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(e) = self.prefs.save_theme(self.theme) {
            log::warn!("Failed to save theme: {}", e);
        }
        log::debug!("Theme: {}", self.theme);
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Begin => {
                self.start();
            }
            Command::TogglePause => self.toggle_pause(),
            Command::Restart => self.restart(),
            Command::ToggleTheme => self.toggle_theme(),
        }
    }

    /// Run one scheduled frame: update from the clock, then render
    pub fn frame<R: Renderer + ?Sized>(
        &mut self,
        input: &TickInput,
        renderer: &mut R,
    ) -> FrameOutcome {
        if !self.state.is_running() {
            return FrameOutcome::Skipped;
        }

        let now = self.clock.now_ms();
        let last = *self.last_timestamp.get_or_insert(now);
        let dt = ((now - last) / 1000.0).max(0.0) as f32;
        self.last_timestamp = Some(now);

        tick(&mut self.state, input, dt);

        let mut outcome = FrameOutcome::Continue;
        for event in self.state.drain_events() {
            match event {
                GameEvent::LifeLost { remaining } => {
                    log::info!("Ship hit, {} lives left", remaining);
                }
                GameEvent::GameOver { score } => outcome = self.finalize(score),
                GameEvent::ObstacleSpawned { .. } => {}
            }
        }

        self.render(renderer);
        outcome
    }

    /// Record the final score and surface the game-over notice
    fn finalize(&mut self, score: f64) -> FrameOutcome {
        let floored = score.max(0.0).floor() as u64;
        let previous = self.best.value;
        let new_best = self.best.submit(score).is_some_and(|best| best > previous);

        if new_best {
            log::info!("New best score: {} (was {})", self.best.value, previous);
            if let Err(e) = self.prefs.save_best_score(self.best.value) {
                log::warn!("Failed to save best score: {}", e);
            }
        }

        self.notice = Some(Notice::GameOver { score: floored });
        self.last_timestamp = None;
        log::info!("Game over. Final score: {}", floored);

        FrameOutcome::GameOver {
            score: floored,
            new_best,
        }
    }

    /// Read-only snapshot for renderers
    pub fn view(&self) -> FrameView<'_> {
        let tuning = &self.state.tuning;
        FrameView {
            field: Vec2::new(tuning.field_width, tuning.field_height),
            player: &self.state.player,
            obstacles: &self.state.obstacles,
            stars: &self.state.stars,
            score: self.state.display_score(),
            lives: self.state.lives,
            best: self.best.value,
            theme: self.theme,
            notice: self.notice,
        }
    }

    /// Draw the current state without advancing it (e.g. under a pause overlay)
    pub fn render<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        renderer.draw(&self.view());
    }
}
