//! Timed playback of remote-driven move sequences.
//!
//! The animator never sleeps. It exposes the instant of its next transition
//! through [`ReplayAnimator::deadline`], and the event loop calls
//! [`ReplayAnimator::advance`] once that instant has passed. Between
//! transitions the loop stays free to handle user input.
//!
//! Per step: mark the piece in motion, hold, relocate it, hold, clear the
//! mark. After the last step the final snapshot is rendered in full, so the
//! animation never has the last word on what the board shows.

use tokio::time::{Duration, Instant};

use crate::board::Board;
use crate::common::{Color, MoveStep};
use crate::config::STEP_DELAY_MS;
use crate::render::BoardRenderer;

/// Hold between the phases of one step.
pub const STEP_DELAY: Duration = Duration::from_millis(STEP_DELAY_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The piece is marked in motion and waits to be relocated.
    Lifted,
    /// The piece stands on its destination and waits for the mark to clear.
    Landed,
}

#[derive(Debug, Clone)]
struct Playback {
    steps: Vec<MoveStep>,
    index: usize,
    phase: Phase,
    deadline: Instant,
    final_board: Board,
    local: Option<Color>,
}

#[derive(Debug, Clone, Default)]
enum State {
    #[default]
    Idle,
    Playing(Playback),
}

#[derive(Debug, Clone, Default)]
pub struct ReplayAnimator {
    state: State,
}

impl ReplayAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, State::Playing(_))
    }

    /// Index and phase of the step being played.
    pub fn position(&self) -> Option<(usize, Phase)> {
        match &self.state {
            State::Playing(p) => Some((p.index, p.phase)),
            State::Idle => None,
        }
    }

    /// When the next transition is due.
    pub fn deadline(&self) -> Option<Instant> {
        match &self.state {
            State::Playing(p) => Some(p.deadline),
            State::Idle => None,
        }
    }

    /// Begin playing `steps`, ending on `final_board`.
    ///
    /// A sequence already in flight is fast-forwarded first: its final
    /// snapshot is rendered at once and the new sequence starts from there.
    /// An empty sequence renders `final_board` immediately.
    pub fn start<R>(
        &mut self,
        steps: Vec<MoveStep>,
        final_board: Board,
        local: Option<Color>,
        now: Instant,
        renderer: &mut R,
    ) where
        R: BoardRenderer + ?Sized,
    {
        if self.is_playing() {
            log::debug!("replay preempted by a newer push");
            self.finish(renderer);
        }
        self.state = State::Playing(Playback {
            steps,
            index: 0,
            phase: Phase::Lifted,
            deadline: now,
            final_board,
            local,
        });
        self.enter_step(now, renderer);
    }

    /// Perform the transition that is due at `now`, if any.
    ///
    /// Returns `true` when this call rendered the final snapshot.
    pub fn advance<R>(&mut self, now: Instant, renderer: &mut R) -> bool
    where
        R: BoardRenderer + ?Sized,
    {
        let State::Playing(playback) = &mut self.state else {
            return false;
        };
        if now < playback.deadline {
            return false;
        }
        let step = playback.steps[playback.index];
        match playback.phase {
            Phase::Lifted => {
                if !renderer.relocate(step.start, step.end) {
                    log::debug!("visual on {} vanished before relocation", step.start);
                }
                playback.phase = Phase::Landed;
                playback.deadline = now + STEP_DELAY;
                false
            }
            Phase::Landed => {
                renderer.end_motion(step.end);
                playback.index += 1;
                self.enter_step(now, renderer)
            }
        }
    }

    /// Jump to the end: render the final snapshot and go idle.
    /// Returns `false` when nothing was playing.
    pub fn finish<R>(&mut self, renderer: &mut R) -> bool
    where
        R: BoardRenderer + ?Sized,
    {
        match core::mem::take(&mut self.state) {
            State::Playing(playback) => {
                renderer.render(Some(&playback.final_board), playback.local);
                true
            }
            State::Idle => false,
        }
    }

    /// Abandon playback without rendering anything.
    pub fn cancel(&mut self) {
        self.state = State::Idle;
    }

    /// Lift the piece of the current step, skipping steps whose source has no visual.
    /// Returns `true` when no step was left and the final snapshot was rendered.
    fn enter_step<R>(&mut self, now: Instant, renderer: &mut R) -> bool
    where
        R: BoardRenderer + ?Sized,
    {
        let State::Playing(playback) = &mut self.state else {
            return false;
        };
        while let Some(step) = playback.steps.get(playback.index).copied() {
            if renderer.begin_motion(step.start) {
                playback.phase = Phase::Lifted;
                playback.deadline = now + STEP_DELAY;
                return false;
            }
            log::debug!("no visual on {}, skipping step {}", step.start, playback.index);
            playback.index += 1;
        }
        self.finish(renderer)
    }
}
