//! Scoreboard view: pure projection of the match state into screen lines.
//!
//! The points line carries the scoring semantics (deuce/advantage display,
//! tiebreak counters, the last-set fallback after a reset to 0-0), so it
//! lives here as a testable function rather than inline drawing code.

use padel_score_core::MatchState;
use padel_score_types::{GameMode, Player, ScoringVariant};

/// Current-game score as shown on the board.
pub fn points_line(state: &MatchState) -> String {
    if state.is_tie_break() {
        let tb = state.tie_break_points();
        return format!("Tiebreak  {} - {}", tb.p1, tb.p2);
    }

    match state.mode {
        GameMode::Mexicano => {
            format!(
                "{} - {}  (to {})",
                state.points.p1, state.points.p2, state.mexicano_limit
            )
        }
        GameMode::Vinnarbana => match state.advantage() {
            Some(Player::One) => "Ad - 40".to_string(),
            Some(Player::Two) => "40 - Ad".to_string(),
            None => format!("{} - {}", state.points.p1, state.points.p2),
        },
    }
}

/// Games line with the last-set fallback: right after a set the live games
/// read 0-0, so the finished set stands in.
pub fn games_line(state: &MatchState) -> String {
    let games = if state.games.is_zero() && !state.last_completed_set.is_zero() {
        state.last_completed_set
    } else {
        state.games
    };
    format!(
        "Games {} - {}   Sets {} - {}",
        games.p1, games.p2, state.sets.p1, state.sets.p2
    )
}

/// Full scoreboard frame. `duration` is preformatted by the caller.
pub fn render(state: &MatchState, can_undo: bool, duration: &str) -> Vec<String> {
    let mut lines = Vec::new();

    let header = match state.mode {
        GameMode::Vinnarbana => {
            let variant = match state.variant {
                ScoringVariant::Advantage => "advantage",
                ScoringVariant::GoldenPoint => "golden point",
            };
            format!(
                "VINNARBANA  ({variant}, first to {} set{})",
                state.sets_to_win,
                if state.sets_to_win == 1 { "" } else { "s" }
            )
        }
        GameMode::Mexicano => format!("MEXICANO  (to {} points)", state.mexicano_limit),
    };
    lines.push(header);
    lines.push(format!("match time {duration}"));
    lines.push(String::new());

    lines.push(format!("   {}", points_line(state)));

    if state.mode == GameMode::Vinnarbana {
        lines.push(format!("   {}", games_line(state)));
        let server = match state.serving {
            Player::One => "player 1",
            Player::Two => "player 2",
        };
        lines.push(format!("   serving: {server}"));
    }

    if state.is_match_complete() {
        let result = match state.match_winner() {
            Some(Player::One) => "match over - player 1 wins",
            Some(Player::Two) => "match over - player 2 wins",
            None => "match over - level score",
        };
        lines.push(String::new());
        lines.push(result.to_string());
    }

    if state.show_serve_selector {
        lines.push(String::new());
        lines.push("choose first server: [s] player 1  [d] player 2".to_string());
    }
    if state.show_mode_selector {
        lines.push(String::new());
        lines.push("choose mode: [m] cycles vinnarbana / mexicano".to_string());
    }

    lines.push(String::new());
    let undo = if can_undo { "[u]ndo " } else { "" };
    lines.push(format!(
        "keys: [1]/[2] point  {undo}[r] reset game  [R] reset match  [v] variant  [q]uit"
    ));

    lines
}
