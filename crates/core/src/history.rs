//! Bounded undo history
//!
//! Push-before-mutate snapshots of the match state. The stack holds at most
//! `UNDO_HISTORY_DEPTH` entries; the oldest is evicted first so a long rally
//! of taps can always be walked back twenty steps.

use arrayvec::ArrayVec;

use padel_score_types::UNDO_HISTORY_DEPTH;

use crate::state::MatchState;

#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    stack: ArrayVec<MatchState, UNDO_HISTORY_DEPTH>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot, evicting the oldest entry when full
    pub fn push(&mut self, state: MatchState) {
        if self.stack.is_full() {
            self.stack.remove(0);
        }
        self.stack.push(state);
    }

    /// Remove and return the most recent snapshot
    pub fn pop(&mut self) -> Option<MatchState> {
        self.stack.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}
