//! Reset and configuration transitions
//!
//! `reset_game` keeps its deliberate dual behavior: tapped at 0-0 it wipes
//! the whole scoreboard, otherwise it only clears the two point counters.
//! Both branches leave mode, variant, limits and serve untouched.

use padel_score_types::*;

use crate::state::{GamePhase, MatchState};

pub fn reset_game(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.points = ScorePair::default();

    if state.points.is_zero() {
        // Second tap at 0-0 clears everything on the board
        next.games = ScorePair::default();
        next.sets = ScorePair::default();
        next.completed_sets.clear();
        next.last_completed_set = SetScore::default();
        next.win_sequence.clear();
        next.phase = GamePhase::Rally;
    }

    next
}

pub fn reset_match(state: &MatchState, show_mode_selector: bool) -> MatchState {
    let mut next = state.clone();
    next.points = ScorePair::default();
    next.games = ScorePair::default();
    next.sets = ScorePair::default();
    next.completed_sets.clear();
    next.last_completed_set = SetScore::default();
    next.win_sequence.clear();
    next.phase = GamePhase::Rally;
    next.serving = Player::One;
    next.show_mode_selector = show_mode_selector;
    next.show_serve_selector = false;
    next
}

pub fn set_game_mode(state: &MatchState, mode: GameMode) -> MatchState {
    let mut next = reset_match(state, false);
    next.mode = mode;
    // Vinnarbana wants an initial server choice before play starts
    next.show_serve_selector = mode == GameMode::Vinnarbana;
    next
}

pub fn set_initial_server(state: &MatchState, player: Player) -> MatchState {
    let mut next = state.clone();
    next.serving = player;
    next.show_serve_selector = false;
    next
}

pub fn set_mexicano_limit(state: &MatchState, limit: u16) -> MatchState {
    let mut next = state.clone();
    next.mexicano_limit = limit.max(1);
    next
}

pub fn set_sets_to_win(state: &MatchState, sets: u8) -> MatchState {
    let mut next = state.clone();
    next.sets_to_win = sets.clamp(MIN_SETS_TO_WIN, MAX_SETS_TO_WIN);
    next
}

pub fn set_scoring_variant(state: &MatchState, variant: ScoringVariant) -> MatchState {
    let mut next = state.clone();
    next.variant = variant;
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_match_state() -> MatchState {
        let mut state = MatchState::new();
        state.show_mode_selector = false;
        state.points = ScorePair::new(30, 15);
        state.games = ScorePair::new(3, 2);
        state.sets = ScorePair::new(1, 0);
        state.completed_sets = vec![SetScore::new(6, 4)];
        state.last_completed_set = SetScore::new(6, 4);
        state.win_sequence = vec![Player::One, Player::Two, Player::One];
        state.serving = Player::Two;
        state
    }

    #[test]
    fn test_reset_game_mid_game_clears_points_only() {
        let state = mid_match_state();
        let after = reset_game(&state);

        assert!(after.points.is_zero());
        assert_eq!(after.games, ScorePair::new(3, 2));
        assert_eq!(after.sets, ScorePair::new(1, 0));
        assert_eq!(after.completed_sets, vec![SetScore::new(6, 4)]);
        assert_eq!(after.last_completed_set, SetScore::new(6, 4));
    }

    #[test]
    fn test_reset_game_at_zero_clears_everything() {
        let mut state = mid_match_state();
        state.points = ScorePair::default();

        let after = reset_game(&state);
        assert!(after.points.is_zero());
        assert!(after.games.is_zero());
        assert!(after.sets.is_zero());
        assert!(after.completed_sets.is_empty());
        assert_eq!(after.last_completed_set, SetScore::default());
        assert!(after.win_sequence.is_empty());
        // Config and serve survive the full clear
        assert_eq!(after.serving, Player::Two);
        assert_eq!(after.mode, state.mode);
    }

    #[test]
    fn test_reset_match_clears_all_and_resets_serve() {
        let state = mid_match_state();
        let after = reset_match(&state, true);

        assert!(after.points.is_zero());
        assert!(after.games.is_zero());
        assert!(after.sets.is_zero());
        assert!(after.completed_sets.is_empty());
        assert_eq!(after.serving, Player::One);
        assert!(after.show_mode_selector);
        assert!(!after.show_serve_selector);
        // Mode and limits are kept; a reset is not a reconfiguration
        assert_eq!(after.mode, state.mode);
        assert_eq!(after.mexicano_limit, state.mexicano_limit);
    }

    #[test]
    fn test_set_game_mode_resets_and_prompts_server() {
        let state = mid_match_state();
        let after = set_game_mode(&state, GameMode::Vinnarbana);
        assert!(!after.show_mode_selector);
        assert!(after.show_serve_selector);
        assert!(after.points.is_zero());

        let after = set_game_mode(&state, GameMode::Mexicano);
        assert_eq!(after.mode, GameMode::Mexicano);
        assert!(!after.show_serve_selector);
    }

    #[test]
    fn test_set_initial_server() {
        let mut state = mid_match_state();
        state.show_serve_selector = true;

        let after = set_initial_server(&state, Player::One);
        assert_eq!(after.serving, Player::One);
        assert!(!after.show_serve_selector);
    }

    #[test]
    fn test_sets_to_win_is_clamped() {
        let state = MatchState::new();
        assert_eq!(set_sets_to_win(&state, 0).sets_to_win, MIN_SETS_TO_WIN);
        assert_eq!(set_sets_to_win(&state, 3).sets_to_win, 3);
        assert_eq!(set_sets_to_win(&state, 9).sets_to_win, MAX_SETS_TO_WIN);
    }

    #[test]
    fn test_mexicano_limit_floor() {
        let state = MatchState::new();
        assert_eq!(set_mexicano_limit(&state, 0).mexicano_limit, 1);
        assert_eq!(set_mexicano_limit(&state, 32).mexicano_limit, 32);
    }
}
