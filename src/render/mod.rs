//! Presentation seam
//!
//! Renderers receive a read-only [`FrameView`] once per frame and never feed
//! anything back into the simulation. Painting itself lives in the front end.

use glam::Vec2;

use crate::settings::Theme;
use crate::sim::{Obstacle, Player, Star};

/// Overlay message shown over the field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// Title card before the first run
    Title,
    /// Run is paused
    Paused,
    /// Run ended; carries the floored final score
    GameOver { score: u64 },
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Notice::Title => "Cosmic Dodger Neon",
            Notice::Paused => "Game Paused",
            Notice::GameOver { .. } => "Game Over",
        }
    }

    pub fn body(&self) -> String {
        match self {
            Notice::Title => "Press Start or Space to begin.".to_string(),
            Notice::Paused => "Press Pause to resume or Restart to start over.".to_string(),
            Notice::GameOver { score } => format!("Final score: {}.", score),
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub field: Vec2,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub stars: &'a [Star],
    /// Floored score for the HUD
    pub score: u64,
    pub lives: u8,
    pub best: u64,
    pub theme: Theme,
    pub notice: Option<Notice>,
}

/// A front end that paints frames
pub trait Renderer {
    fn draw(&mut self, view: &FrameView<'_>);
}

/// Discards frames (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _view: &FrameView<'_>) {}
}

/// Logs a one-line HUD summary per frame at trace level
#[derive(Debug, Clone, Default)]
pub struct TraceRenderer {
    pub frames: u64,
}

impl Renderer for TraceRenderer {
    fn draw(&mut self, view: &FrameView<'_>) {
        self.frames += 1;
        log::trace!(
            "frame {} | score {} best {} lives {} | ship x={:.1} | asteroids {} | theme {}",
            self.frames,
            view.score,
            view.best,
            view.lives,
            view.player.pos.x,
            view.obstacles.len(),
            view.theme
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_text() {
        assert_eq!(Notice::Paused.title(), "Game Paused");
        assert_eq!(
            Notice::Paused.body(),
            "Press Pause to resume or Restart to start over."
        );
        assert_eq!(Notice::GameOver { score: 42 }.body(), "Final score: 42.");
    }
}
