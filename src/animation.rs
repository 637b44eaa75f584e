//! Animation driver: an explicit state machine stepped once per frame.
//!
//! Each tick redraws the static board, places the ball between the current
//! pair of waypoints using an eased progress value, and fires the peg and
//! landing cues. Progress advances by a fixed amount per frame, so the drop
//! runs at display-refresh speed rather than wall-clock speed. Frames are
//! counted as integers and progress is derived from the count, so a segment
//! always takes exactly `frames_per_segment(speed)` ticks.

use crate::geometry::{BoardGeometry, Point};
use crate::path::Path;
use crate::render::{Surface, draw_ball, draw_board};

/// Progress added per frame (~34 frames per peg).
pub const DEFAULT_SPEED: f64 = 0.03;

/// Ticks spent between two waypoints: `ceil(1 / speed)`, at least one.
pub fn frames_per_segment(speed: f64) -> u32 {
    // shave rounding noise so 1/0.1 doesn't ceil to 11
    let frames = (1.0 / speed - 1e-9).ceil();
    if frames.is_finite() && frames >= 1.0 { frames as u32 } else { 1 }
}

/// Sound hooks fired by the driver. Implementations must not fail; missing
/// or blocked audio is simply skipped.
pub trait AudioCues {
    /// Ball arrived at an interior peg; restarts the sound if still playing.
    fn peg_hit(&mut self);
    /// Ball is about to settle in its slot.
    fn slot_landing(&mut self);
}

/// Cue sink for boards without sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AudioCues for Silent {
    fn peg_hit(&mut self) {}
    fn slot_landing(&mut self) {}
}

/// Symmetric ease-in-ease-out: `2t²` below the midpoint, `1 - 2(1-t)²` above.
pub fn ease(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

/// Identifies one `animate` call. A tick carrying an older token is stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationToken(pub(crate) u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Schedule another frame.
    Continue,
    /// Ball is at rest in its slot; stop scheduling.
    Finished,
    /// A newer animation replaced this one; stop scheduling.
    Superseded,
}

/// Progress through one drop. Created fresh by every `animate`.
#[derive(Clone, Debug)]
pub struct AnimationState {
    path: Path,
    token: AnimationToken,
    i: usize,     // index of the waypoint the ball is leaving
    frame: u32,   // ticks spent on the current segment
    t: f64,       // raw progress towards waypoint i + 1
    landed: bool,
}

impl AnimationState {
    pub fn new(path: Path, token: AnimationToken) -> Self {
        Self { path, token, i: 0, frame: 0, t: 0.0, landed: false }
    }

    pub fn token(&self) -> AnimationToken {
        self.token
    }

    pub fn waypoint_index(&self) -> usize {
        self.i
    }

    pub fn progress(&self) -> f64 {
        self.t
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ball position for the current state.
    pub fn ball_position(&self) -> Option<Point> {
        let from = self.path.get(self.i)?;
        let to = self.path.get(self.i + 1).unwrap_or(from);
        Some(from.lerp(to, ease(self.t)))
    }

    /// Renders one frame and advances the state.
    pub fn tick<S, A>(
        &mut self,
        geometry: &BoardGeometry,
        pegs: &[Point],
        speed: f64,
        surface: &mut S,
        audio: &mut A,
    ) -> TickOutcome
    where
        S: Surface + ?Sized,
        A: AudioCues + ?Sized,
    {
        draw_board(surface, geometry, pegs);
        let Some(at) = self.ball_position() else {
            return TickOutcome::Finished;
        };
        draw_ball(surface, geometry, at, self.i);

        let last = self.path.len() - 1;
        if self.frame == 0 && self.i > 0 && self.i < last {
            audio.peg_hit();
        }
        if self.i + 1 == last && self.t > 0.5 && !self.landed {
            self.landed = true;
            audio.slot_landing();
        }
        if self.i >= last {
            // rest frame on the final slot has been drawn
            return TickOutcome::Finished;
        }

        self.frame += 1;
        if self.frame >= frames_per_segment(speed) {
            self.frame = 0;
            self.t = 0.0;
            self.i += 1;
        } else {
            self.t = f64::from(self.frame) * speed;
        }
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::Recorder;

    #[derive(Default)]
    struct Counter {
        pegs: usize,
        landings: usize,
    }

    impl AudioCues for Counter {
        fn peg_hit(&mut self) {
            self.pegs += 1;
        }
        fn slot_landing(&mut self) {
            self.landings += 1;
        }
    }

    fn straight_path(n: usize) -> Path {
        let pts = (0..n).map(|k| Point::new(0.0, k as f64 * 40.0)).collect();
        Path::from_waypoints(pts, 0)
    }

    fn run(state: &mut AnimationState, audio: &mut Counter) -> usize {
        run_at(state, audio, DEFAULT_SPEED)
    }

    fn run_at(state: &mut AnimationState, audio: &mut Counter, speed: f64) -> usize {
        let g = BoardGeometry::with_grid(3, 4);
        let mut rec = Recorder::default();
        let mut ticks = 0;
        while state.tick(&g, &[], speed, &mut rec, audio) == TickOutcome::Continue {
            ticks += 1;
            assert!(ticks < 10_000, "animation did not terminate");
        }
        ticks + 1
    }

    #[test]
    fn ease_is_symmetric_and_pinned() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(0.5), 0.5);
        assert_eq!(ease(0.25), 0.125);
        assert!((ease(0.75) - 0.875).abs() < 1e-12);
        assert!((ease(0.3) + ease(0.7) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn terminates_within_bound_and_rests_on_last_waypoint() {
        let path = straight_path(4);
        let end = path.last().unwrap();
        let mut state = AnimationState::new(path, AnimationToken(1));
        let ticks = run(&mut state, &mut Counter::default());
        let per_segment = (1.0 / DEFAULT_SPEED).ceil() as usize;
        assert!(ticks <= per_segment * 3 + 1, "{ticks} ticks");
        assert_eq!(state.waypoint_index(), 3);
        assert_eq!(state.ball_position(), Some(end));
    }

    #[test]
    fn segment_length_is_exact_for_decimal_speeds() {
        assert_eq!(frames_per_segment(DEFAULT_SPEED), 34);
        assert_eq!(frames_per_segment(0.1), 10);
        assert_eq!(frames_per_segment(0.2), 5);
        assert_eq!(frames_per_segment(1.0), 1);

        // 0.1 summed ten times stays below 1.0; the frame count must not care
        for speed in [0.1, 0.2, 0.3, 0.07] {
            let mut audio = Counter::default();
            let mut state = AnimationState::new(straight_path(4), AnimationToken(1));
            let ticks = run_at(&mut state, &mut audio, speed);
            let bound = (1.0 / speed).ceil() as usize * 3 + 1;
            assert!(ticks <= bound, "speed {speed}: {ticks} ticks, bound {bound}");
            assert_eq!(state.waypoint_index(), 3);
            assert_eq!(audio.pegs, 2);
        }
    }

    #[test]
    fn peg_cue_once_per_interior_waypoint() {
        let mut audio = Counter::default();
        let mut state = AnimationState::new(straight_path(6), AnimationToken(1));
        run(&mut state, &mut audio);
        assert_eq!(audio.pegs, 4);
    }

    #[test]
    fn landing_cue_fires_once() {
        let mut audio = Counter::default();
        let mut state = AnimationState::new(straight_path(5), AnimationToken(1));
        run(&mut state, &mut audio);
        assert_eq!(audio.landings, 1);
    }

    #[test]
    fn single_waypoint_renders_once_and_stops() {
        let g = BoardGeometry::classic();
        let mut rec = Recorder::default();
        let mut state = AnimationState::new(straight_path(1), AnimationToken(1));
        let out = state.tick(&g, &[], DEFAULT_SPEED, &mut rec, &mut Silent);
        assert_eq!(out, TickOutcome::Finished);
    }

    #[test]
    fn empty_path_draws_board_only() {
        let g = BoardGeometry::classic();
        let mut rec = Recorder::default();
        let mut state = AnimationState::new(straight_path(0), AnimationToken(1));
        assert_eq!(state.tick(&g, &[], DEFAULT_SPEED, &mut rec, &mut Silent), TickOutcome::Finished);
        assert!(rec.ops.iter().all(|op| !matches!(op, crate::render::testing::Op::Circle { .. })));
    }
}
