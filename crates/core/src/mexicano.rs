//! Mexicano rules - bounded point-count accumulation
//!
//! No games, sets or tiebreaks: every point is +1 for the acting side until
//! the combined total reaches the configured limit. The limit is a hard cap,
//! not a reset trigger.

use padel_score_types::Player;

use crate::state::MatchState;

/// Apply one won point for `winner`; a no-op once the limit is reached
pub fn point_won(state: &MatchState, winner: Player) -> MatchState {
    if state.points.total() >= state.mexicano_limit {
        return state.clone();
    }

    let mut next = state.clone();
    next.points = next.points.plus_one(winner);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use padel_score_types::{GameMode, ScorePair};

    fn mexicano_state(p1: u16, p2: u16, limit: u16) -> MatchState {
        let mut state = MatchState::new();
        state.mode = GameMode::Mexicano;
        state.show_mode_selector = false;
        state.points = ScorePair::new(p1, p2);
        state.mexicano_limit = limit;
        state
    }

    #[test]
    fn test_point_increments_by_one() {
        let state = mexicano_state(5, 3, 24);
        let after = point_won(&state, Player::One);
        assert_eq!(after.points, ScorePair::new(6, 3));

        let after = point_won(&after, Player::Two);
        assert_eq!(after.points, ScorePair::new(6, 4));
    }

    #[test]
    fn test_point_at_limit_is_a_no_op() {
        let state = mexicano_state(12, 12, 24);
        let after = point_won(&state, Player::One);
        assert_eq!(after, state);
        assert!(after.is_match_complete());
        assert_eq!(after.match_winner(), None);
    }

    #[test]
    fn test_last_point_before_limit_lands() {
        let state = mexicano_state(11, 12, 24);
        let after = point_won(&state, Player::One);
        assert_eq!(after.points, ScorePair::new(12, 12));
        assert!(after.is_match_complete());
    }

    #[test]
    fn test_completion_with_winner() {
        let state = mexicano_state(12, 13, 24);
        assert!(state.is_match_complete());
        assert_eq!(state.match_winner(), Some(Player::Two));
    }

    #[test]
    fn test_limit_already_exceeded_is_absorbed() {
        // A lowered limit can leave the total past the cap
        let state = mexicano_state(10, 9, 16);
        let after = point_won(&state, Player::Two);
        assert_eq!(after, state);
    }
}
