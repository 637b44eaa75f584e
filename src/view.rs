//! `GameView`: the board, its surface and audio, and the single drop in flight.

use crate::animation::{AnimationState, AnimationToken, AudioCues, DEFAULT_SPEED, TickOutcome};
use crate::config::validate_speed;
use crate::error::ConfigError;
use crate::geometry::{BoardGeometry, Point};
use crate::path::{MoveSequence, Path, build_path};
use crate::render::{Surface, draw_board};

/// Owns the drawing surface, the peg layout and the in-flight animation.
/// Only one drop animates at a time; `animate` replaces whatever was running.
pub struct GameView<S, A> {
    geometry: BoardGeometry,
    pegs: Vec<Point>,
    surface: S,
    audio: A,
    speed: f64,
    generation: u64,
    state: Option<AnimationState>,
}

impl<S: Surface, A: AudioCues> GameView<S, A> {
    pub fn new(geometry: BoardGeometry, surface: S, audio: A) -> Self {
        Self {
            pegs: geometry.pegs(),
            geometry,
            surface,
            audio,
            speed: DEFAULT_SPEED,
            generation: 0,
            state: None,
        }
    }

    /// Progress per frame; rejects anything outside `(0, 1]`.
    pub fn with_speed(mut self, speed: f64) -> Result<Self, ConfigError> {
        self.speed = validate_speed(speed)?;
        Ok(self)
    }

    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_some()
    }

    /// Static board with no ball (page load).
    pub fn draw_idle(&mut self) {
        draw_board(&mut self.surface, &self.geometry, &self.pegs);
    }

    pub fn build_path(&self, moves: &MoveSequence) -> Path {
        build_path(&self.geometry, moves)
    }

    /// Starts animating `path`, cancelling any animation still in flight.
    pub fn animate(&mut self, path: Path) -> AnimationToken {
        self.generation += 1;
        let token = AnimationToken(self.generation);
        self.state = Some(AnimationState::new(path, token));
        token
    }

    /// One frame for the animation identified by `token`.
    pub fn tick(&mut self, token: AnimationToken) -> TickOutcome {
        let Some(state) = self.state.as_mut() else {
            return TickOutcome::Superseded;
        };
        if state.token() != token {
            return TickOutcome::Superseded;
        }
        let outcome = state.tick(
            &self.geometry,
            &self.pegs,
            self.speed,
            &mut self.surface,
            &mut self.audio,
        );
        if outcome == TickOutcome::Finished {
            self.state = None;
        }
        outcome
    }
}
