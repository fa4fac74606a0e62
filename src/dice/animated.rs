//! Display-oriented rolling: a fixed number of cosmetic frames shown in rapid
//! succession, then exactly one committed result. Cosmetic frames carry no
//! semantic weight; the committed result is always a fresh roll so the
//! animation's pacing cannot couple to the outcome.

use crate::dice::rng::Rng;
use crate::dice::roller::{roll_multiple, roll_sum, RollSum};

/// Cosmetic frames emitted before the result commits.
pub const COSMETIC_FRAMES: u32 = 12;

/// Suggested host-timer interval between frames, in milliseconds. The engine
/// itself never sleeps; pacing belongs to the display layer.
pub const FRAME_INTERVAL_MS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Transient values for display only.
    Cosmetic(Vec<u32>),
    /// The single committed result. Emitted exactly once, after all cosmetic
    /// frames.
    Committed(RollSum),
}

/// A fire-and-forget roll animation. Drive it with `next_frame` from a host
/// timer; dropping it mid-sequence abandons the roll without committing.
#[derive(Debug, Clone)]
pub struct AnimatedRoll {
    count: u32,
    sides: u32,
    frames_emitted: u32,
    committed: bool,
}

impl AnimatedRoll {
    pub fn new(count: u32, sides: u32) -> Self {
        Self {
            count,
            sides,
            frames_emitted: 0,
            committed: false,
        }
    }

    /// Next frame of the sequence, or None once the result has committed.
    /// The committed frame can never be produced twice.
    pub fn next_frame(&mut self, rng: &mut Rng) -> Option<Frame> {
        if self.committed {
            return None;
        }
        if self.frames_emitted < COSMETIC_FRAMES {
            self.frames_emitted += 1;
            return Some(Frame::Cosmetic(roll_multiple(rng, self.count, self.sides)));
        }
        self.committed = true;
        Some(Frame::Committed(roll_sum(rng, self.count, self.sides)))
    }

    pub fn is_complete(&self) -> bool {
        self.committed
    }
}

/// Runs a whole animation synchronously: `on_frame` for each cosmetic frame,
/// then `on_commit` exactly once with the fresh committed result.
pub fn run<F, C>(rng: &mut Rng, count: u32, sides: u32, mut on_frame: F, on_commit: C)
where
    F: FnMut(&[u32]),
    C: FnOnce(RollSum),
{
    let mut animation = AnimatedRoll::new(count, sides);
    loop {
        match animation.next_frame(rng) {
            Some(Frame::Cosmetic(rolls)) => on_frame(&rolls),
            Some(Frame::Committed(result)) => {
                on_commit(result);
                return;
            }
            None => return,
        }
    }
}
