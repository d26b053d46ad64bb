//! Vinnarbana rules - point ladder, games, sets, tiebreak and deuce
//!
//! Tennis-style progression: 0 -> 15 -> 30 -> 40 -> game. Six games with a
//! two-game lead take the set; six games all starts a tiebreak. At 40-40 the
//! behavior is governed by the scoring variant: advantage play or golden
//! point.

use padel_score_types::*;

use crate::state::{GamePhase, MatchState};

/// Apply one won point for `winner`; total over every reachable state
pub fn point_won(state: &MatchState, winner: Player) -> MatchState {
    match state.phase {
        GamePhase::TieBreak { points } => tiebreak_point(state, points, winner),
        GamePhase::Deuce { advantage } => deuce_point(state, advantage, winner),
        GamePhase::Rally => rally_point(state, winner),
    }
}

fn rally_point(state: &MatchState, winner: Player) -> MatchState {
    let own = state.points.get(winner);
    let opponent = state.points.get(winner.other());

    let next_rung = match own {
        POINTS_INITIAL => POINTS_FIRST_STEP,
        POINTS_FIRST_STEP => POINTS_SECOND_STEP,
        POINTS_SECOND_STEP => POINTS_THIRD_STEP,
        POINTS_THIRD_STEP => {
            if opponent == POINTS_THIRD_STEP && state.variant == ScoringVariant::Advantage {
                let mut next = state.clone();
                next.phase = GamePhase::Deuce {
                    advantage: Some(winner),
                };
                return next;
            }
            // Golden point, or the opponent is below 40: game over
            return award_game(state, winner);
        }
        // Off-ladder value: absorb the point rather than guess
        _ => return state.clone(),
    };

    let mut next = state.clone();
    next.points = next.points.with(winner, next_rung);
    next
}

fn deuce_point(state: &MatchState, advantage: Option<Player>, winner: Player) -> MatchState {
    match advantage {
        Some(holder) if holder == winner => award_game(state, winner),
        Some(_) => {
            // Advantage cancelled, back to plain deuce at 40-40
            let mut next = state.clone();
            next.phase = GamePhase::Deuce { advantage: None };
            next
        }
        None => {
            let mut next = state.clone();
            next.phase = GamePhase::Deuce {
                advantage: Some(winner),
            };
            next
        }
    }
}

/// Clear the game, credit the winner, flip serve, then settle the set
fn award_game(state: &MatchState, winner: Player) -> MatchState {
    let mut next = state.clone();
    next.points = ScorePair::default();
    next.games = next.games.plus_one(winner);
    next.serving = next.serving.other();
    next.win_sequence.push(winner);
    next.phase = GamePhase::Rally;
    settle_set(next, winner)
}

/// Evaluate the set after a game award. Six games all supersedes the
/// lead-of-two rule and opens the tiebreak instead.
fn settle_set(mut next: MatchState, winner: Player) -> MatchState {
    if next.games.p1 == GAMES_TO_WIN_SET && next.games.p2 == GAMES_TO_WIN_SET {
        next.phase = GamePhase::TieBreak {
            points: ScorePair::default(),
        };
        next.games = ScorePair::default();
        next.show_serve_selector = true;
        return next;
    }

    if next.games.get(winner) >= GAMES_TO_WIN_SET && next.games.lead(winner) >= MIN_GAME_DIFFERENCE
    {
        let result = next.games;
        return award_set(next, winner, result);
    }

    next
}

fn award_set(mut next: MatchState, winner: Player, result: SetScore) -> MatchState {
    next.completed_sets.push(result);
    next.last_completed_set = result;
    next.sets = next.sets.plus_one(winner);
    next.games = ScorePair::default();
    next.win_sequence.clear();
    next
}

fn tiebreak_point(state: &MatchState, points: ScorePair, winner: Player) -> MatchState {
    let mut next = state.clone();
    let points = points.plus_one(winner);

    // Serve changes hands after every odd combined total (1, 3, 5, ...)
    if points.total() % 2 == 1 {
        next.serving = next.serving.other();
    }

    if points.get(winner) >= TIEBREAK_POINTS_TO_WIN
        && points.lead(winner) >= TIEBREAK_MIN_POINT_DIFFERENCE
    {
        next.phase = GamePhase::Rally;
        next.show_serve_selector = false;
        // The final tiebreak points stand in as the set result
        return award_set(next, winner, points);
    }

    next.phase = GamePhase::TieBreak { points };
    next
}
