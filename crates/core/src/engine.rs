//! Score engine - action dispatch over the pure rule modules
//!
//! `transition` is a pure, total function from (state, action) to the next
//! state; it never fails and absorbs invalid input by returning the state
//! unchanged. `ScoreEngine` owns the canonical state plus the undo history
//! and is the only thing that mutates either.

use padel_score_types::{GameMode, ScoreAction};

use crate::history::HistoryStack;
use crate::state::MatchState;
use crate::{mexicano, reset, vinnarbana};

/// Pure transition for every action except `Undo` (which needs the history
/// and is therefore handled by [`ScoreEngine::apply`]; here it is identity)
pub fn transition(state: &MatchState, action: ScoreAction) -> MatchState {
    match action {
        ScoreAction::PointWon(player) => match state.mode {
            GameMode::Vinnarbana => vinnarbana::point_won(state, player),
            GameMode::Mexicano => mexicano::point_won(state, player),
        },
        ScoreAction::ResetGame => reset::reset_game(state),
        ScoreAction::ResetMatch => reset::reset_match(state, true),
        ScoreAction::Undo => state.clone(),
        ScoreAction::SetGameMode(mode) => reset::set_game_mode(state, mode),
        ScoreAction::SetMexicanoLimit(limit) => reset::set_mexicano_limit(state, limit),
        ScoreAction::SetSetsToWin(sets) => reset::set_sets_to_win(state, sets),
        ScoreAction::SetInitialServer(player) => reset::set_initial_server(state, player),
        ScoreAction::SetScoringVariant(variant) => reset::set_scoring_variant(state, variant),
    }
}

/// Owns the canonical match state and its undo history
#[derive(Debug, Clone, Default)]
pub struct ScoreEngine {
    state: MatchState,
    history: HistoryStack,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a prepared state (restored preferences, tests)
    pub fn from_state(state: MatchState) -> Self {
        Self {
            state,
            history: HistoryStack::new(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// True iff there is a snapshot to undo to
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Apply one action and return the resulting state.
    ///
    /// Every action that actually changes the state pushes the pre-action
    /// snapshot first, so `Undo` restores exactly what was on the board
    /// before the previous tap. Actions that change nothing push nothing.
    pub fn apply(&mut self, action: ScoreAction) -> &MatchState {
        if action == ScoreAction::Undo {
            if let Some(previous) = self.history.pop() {
                self.state = previous;
            }
            return &self.state;
        }

        let next = transition(&self.state, action);
        if next != self.state {
            self.history.push(self.state.clone());
            self.state = next;
        }
        &self.state
    }
}
