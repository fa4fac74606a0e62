//! Turn sequencer: a cursor over the static phase/step table. Advancing past
//! the last step of the last phase rolls the turn over; the sequence cycles
//! indefinitely with no terminal state.

use serde::{Deserialize, Serialize};

use crate::rules::phases::{Phase, Step, TURN_PHASES};
use crate::store::{StateStore, TURN_KEY};

/// What an `advance` call did. `NewTurn` is the turn-boundary signal
/// observers use to clear turn-scoped state such as reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Advance {
    Step,
    Phase,
    NewTurn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTracker {
    turn: u32,
    phase_index: usize,
    step_index: usize,
}

/// Persisted cursor. Missing fields default; out-of-range indices are
/// clamped on load rather than trusted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TurnSnapshot {
    #[serde(default = "default_turn")]
    turn: u32,
    #[serde(default)]
    phase: usize,
    #[serde(default)]
    step: usize,
}

fn default_turn() -> u32 {
    1
}

impl Default for TurnTracker {
    fn default() -> Self {
        Self {
            turn: 1,
            phase_index: 0,
            step_index: 0,
        }
    }
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn step_index(&self) -> usize {
        self.step_index
    }

    pub fn current_phase(&self) -> &'static Phase {
        &TURN_PHASES[self.phase_index]
    }

    pub fn current_step(&self) -> &'static Step {
        &self.current_phase().steps[self.step_index]
    }

    /// Moves to the next step, next phase, or (from the last step of the
    /// last phase) the next turn.
    pub fn advance(&mut self) -> Advance {
        let phase = self.current_phase();
        if self.step_index + 1 < phase.steps.len() {
            self.step_index += 1;
            Advance::Step
        } else if self.phase_index + 1 < TURN_PHASES.len() {
            self.phase_index += 1;
            self.step_index = 0;
            Advance::Phase
        } else {
            self.new_turn();
            Advance::NewTurn
        }
    }

    /// Starts the next turn from anywhere in the sequence.
    pub fn new_turn(&mut self) {
        self.turn += 1;
        self.phase_index = 0;
        self.step_index = 0;
    }

    /// Back to turn 1, phase 0, step 0.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Loads the cursor; malformed or missing data yields a fresh tracker.
    pub fn load(store: &dyn StateStore) -> Self {
        let snapshot: TurnSnapshot = match store
            .get(TURN_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
        {
            Some(snapshot) => snapshot,
            None => return Self::default(),
        };
        let phase_index = snapshot.phase.min(TURN_PHASES.len() - 1);
        let step_index = snapshot
            .step
            .min(TURN_PHASES[phase_index].steps.len() - 1);
        Self {
            turn: snapshot.turn.max(1),
            phase_index,
            step_index,
        }
    }

    pub fn save(&self, store: &dyn StateStore) {
        let snapshot = TurnSnapshot {
            turn: self.turn,
            phase: self.phase_index,
            step: self.step_index,
        };
        if let Ok(raw) = serde_json::to_string(&snapshot) {
            store.put(TURN_KEY, &raw);
        }
    }
}
