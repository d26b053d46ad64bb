//! Match records - persistable point-in-time summaries
//!
//! A record is never mutated after it is built; a correction is a new
//! record. `session_id` groups repeated saves of the same ongoing match and
//! defaults to the record's own id when the caller supplies none.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use padel_score_core::MatchState;
use padel_score_types::{GameMode, Player, ScorePair, ScoringVariant, SetScore};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Stable across repeated saves of one match; equals `id` by default
    pub session_id: String,
    pub mode: GameMode,
    pub variant: ScoringVariant,
    pub points: ScorePair,
    pub games: ScorePair,
    pub sets: ScorePair,
    pub last_completed_set: SetScore,
    /// Only present for Mexicano records
    pub mexicano_limit: Option<u16>,
    pub sets_to_win: u8,
    pub duration_seconds: u64,
    pub completed: bool,
    /// `None` while incomplete or level
    pub winner: Option<Player>,
}

impl MatchRecord {
    /// Build a record stamped with the current wall clock and a fresh id
    pub fn build(
        state: &MatchState,
        duration_seconds: u64,
        completed: bool,
        session_id: Option<&str>,
    ) -> Self {
        Self::build_at(
            state,
            duration_seconds,
            completed,
            session_id,
            Utc::now(),
            Uuid::new_v4().to_string(),
        )
    }

    /// Pure build with explicit identity, the deterministic core of [`build`]
    pub fn build_at(
        state: &MatchState,
        duration_seconds: u64,
        completed: bool,
        session_id: Option<&str>,
        created_at: DateTime<Utc>,
        id: String,
    ) -> Self {
        let winner = if completed {
            state.leading_player()
        } else {
            None
        };

        Self {
            session_id: session_id.unwrap_or(&id).to_string(),
            id,
            created_at,
            mode: state.mode,
            variant: state.variant,
            points: state.points,
            games: state.games,
            sets: state.sets,
            last_completed_set: state.last_completed_set,
            mexicano_limit: match state.mode {
                GameMode::Mexicano => Some(state.mexicano_limit),
                GameMode::Vinnarbana => None,
            },
            sets_to_win: state.sets_to_win,
            duration_seconds,
            completed,
            winner,
        }
    }

    /// Display score for history lists.
    ///
    /// Right after a set or tiebreak the live game counters read 0-0, so the
    /// last completed set stands in for them.
    pub fn formatted_score(&self) -> String {
        match self.mode {
            GameMode::Mexicano => format!("{} - {}", self.points.p1, self.points.p2),
            GameMode::Vinnarbana => {
                let games = if self.games.is_zero() && !self.last_completed_set.is_zero() {
                    self.last_completed_set
                } else {
                    self.games
                };

                if self.sets.total() > 0 {
                    format!(
                        "Sets: {} - {}\nGames: {} - {}",
                        self.sets.p1, self.sets.p2, games.p1, games.p2
                    )
                } else {
                    format!("Games: {} - {}", games.p1, games.p2)
                }
            }
        }
    }

    pub fn formatted_duration(&self) -> String {
        format_duration(self.duration_seconds)
    }

    pub fn winner_text(&self) -> &'static str {
        match self.winner {
            Some(Player::One) => "Player 1 Won",
            Some(Player::Two) => "Player 2 Won",
            None => "Incomplete",
        }
    }
}

/// `MM:SS`, or `HH:MM:SS` once an hour has passed
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record_from(state: &MatchState, completed: bool) -> MatchRecord {
        let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        MatchRecord::build_at(state, 754, completed, None, created, "rec-1".into())
    }

    #[test]
    fn test_session_id_defaults_to_record_id() {
        let record = record_from(&MatchState::new(), false);
        assert_eq!(record.session_id, record.id);

        let created = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let grouped = MatchRecord::build_at(
            &MatchState::new(),
            10,
            false,
            Some("session-7"),
            created,
            "rec-2".into(),
        );
        assert_eq!(grouped.session_id, "session-7");
    }

    #[test]
    fn test_winner_requires_completion() {
        let mut state = MatchState::new();
        state.sets = ScorePair::new(2, 0);
        state.sets_to_win = 2;

        assert_eq!(record_from(&state, false).winner, None);
        assert_eq!(record_from(&state, true).winner, Some(Player::One));
    }

    #[test]
    fn test_mexicano_winner_by_points() {
        let mut state = MatchState::new();
        state.mode = GameMode::Mexicano;
        state.points = ScorePair::new(10, 14);

        let record = record_from(&state, true);
        assert_eq!(record.winner, Some(Player::Two));
        assert_eq!(record.mexicano_limit, Some(state.mexicano_limit));
        assert_eq!(record.formatted_score(), "10 - 14");
    }

    #[test]
    fn test_level_match_has_no_winner() {
        let mut state = MatchState::new();
        state.mode = GameMode::Mexicano;
        state.points = ScorePair::new(12, 12);

        let record = record_from(&state, true);
        assert_eq!(record.winner, None);
        assert_eq!(record.winner_text(), "Incomplete");
    }

    #[test]
    fn test_formatted_score_falls_back_to_last_set() {
        let mut state = MatchState::new();
        state.sets = ScorePair::new(1, 0);
        state.last_completed_set = SetScore::new(6, 0);

        // Games just reset to 0-0 after the set: show the set result
        let record = record_from(&state, false);
        assert_eq!(record.formatted_score(), "Sets: 1 - 0\nGames: 6 - 0");
    }

    #[test]
    fn test_formatted_score_live_games() {
        let mut state = MatchState::new();
        state.games = ScorePair::new(3, 2);

        let record = record_from(&state, false);
        assert_eq!(record.formatted_score(), "Games: 3 - 2");
    }

    #[test]
    fn test_duration_formats() {
        assert_eq!(format_duration(0), "00:00");
        assert_eq!(format_duration(754), "12:34");
        assert_eq!(format_duration(3600), "01:00:00");
        assert_eq!(format_duration(3723), "01:02:03");
    }

    #[test]
    fn test_json_round_trip() {
        let record = record_from(&MatchState::new(), false);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"mode\":\"vinnarbana\""));
        let back: MatchRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
