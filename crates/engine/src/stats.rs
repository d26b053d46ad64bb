//! Aggregate statistics over stored match records

use padel_score_types::{GameMode, Player};

use crate::record::{format_duration, MatchRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchStatistics {
    pub total_matches: usize,
    pub completed_matches: usize,
    pub player_one_wins: usize,
    pub player_two_wins: usize,
    pub vinnarbana_matches: usize,
    pub mexicano_matches: usize,
    pub average_duration_seconds: u64,
}

impl MatchStatistics {
    /// Summarize a record slice; wins and averages count completed matches only
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let completed: Vec<&MatchRecord> = records.iter().filter(|r| r.completed).collect();

        let average_duration_seconds = if completed.is_empty() {
            0
        } else {
            completed.iter().map(|r| r.duration_seconds).sum::<u64>() / completed.len() as u64
        };

        Self {
            total_matches: records.len(),
            completed_matches: completed.len(),
            player_one_wins: completed
                .iter()
                .filter(|r| r.winner == Some(Player::One))
                .count(),
            player_two_wins: completed
                .iter()
                .filter(|r| r.winner == Some(Player::Two))
                .count(),
            vinnarbana_matches: completed
                .iter()
                .filter(|r| r.mode == GameMode::Vinnarbana)
                .count(),
            mexicano_matches: completed
                .iter()
                .filter(|r| r.mode == GameMode::Mexicano)
                .count(),
            average_duration_seconds,
        }
    }

    pub fn average_duration_formatted(&self) -> String {
        format_duration(self.average_duration_seconds)
    }
}
