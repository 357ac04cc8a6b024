//! The frame-level state machine: queued commands, then one simulation tick.

use std::thread;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::compute::{player_shoot, tick};
use crate::config::FRAME;
use crate::entities::{Controls, EndReason, GameSession, GameStatus};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Fire,
}

/// Run one loop iteration on `state`.
///
/// Commands are applied in arrival order.  `Quit` ends the session at once,
/// skipping the rest of the queue and the tick.  A player↔enemy collision
/// during the tick ends it on this frame whatever else was queued.
pub fn run_frame<R: Rng>(
    state: &GameSession,
    commands: &[Command],
    controls: Controls,
    rng: &mut R,
) -> GameSession {
    if !state.is_running() {
        return state.clone();
    }

    let mut next = state.clone();
    for command in commands {
        match command {
            Command::Quit => {
                info!(frame = next.frame, score = next.score, "quit requested");
                next.status = GameStatus::GameOver(EndReason::Quit);
                return next;
            }
            Command::Fire => next = player_shoot(&next),
        }
    }
    tick(&next, controls, rng)
}

/// Fixed-rate throttle: each call to `wait` sleeps out whatever remains of
/// the frame interval started by the previous call.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_interval(FRAME)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            frame_start: Instant::now(),
        }
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.interval.saturating_sub(self.frame_start.elapsed())
    }

    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.frame_start = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
