//! Match session - the running match above the pure core
//!
//! Wraps a [`ScoreEngine`] with the things the core deliberately knows
//! nothing about: wall-clock duration, a stable session id for grouping
//! saves, and record construction. Starting over (match reset or mode
//! change) begins a new session.

use std::time::Instant;

use uuid::Uuid;

use padel_score_core::{MatchState, ScoreEngine};
use padel_score_types::{Player, ScoreAction};

use crate::record::MatchRecord;

#[derive(Debug, Clone)]
pub struct MatchSession {
    engine: ScoreEngine,
    started_at: Instant,
    session_id: String,
}

impl MatchSession {
    pub fn new() -> Self {
        Self::from_state(MatchState::new())
    }

    pub fn from_state(state: MatchState) -> Self {
        Self {
            engine: ScoreEngine::from_state(state),
            started_at: Instant::now(),
            session_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn state(&self) -> &MatchState {
        self.engine.state()
    }

    pub fn can_undo(&self) -> bool {
        self.engine.can_undo()
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn is_complete(&self) -> bool {
        self.engine.state().is_match_complete()
    }

    pub fn winner(&self) -> Option<Player> {
        self.engine.state().match_winner()
    }

    /// Apply an action; a match reset or mode change starts a new session
    pub fn apply(&mut self, action: ScoreAction) -> &MatchState {
        let starts_over = matches!(
            action,
            ScoreAction::ResetMatch | ScoreAction::SetGameMode(_)
        );

        self.engine.apply(action);

        if starts_over {
            self.session_id = Uuid::new_v4().to_string();
            self.started_at = Instant::now();
        }

        self.engine.state()
    }

    /// Snapshot the session as a persistable record
    pub fn record(&self) -> MatchRecord {
        MatchRecord::build(
            self.engine.state(),
            self.elapsed_seconds(),
            self.is_complete(),
            Some(&self.session_id),
        )
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use padel_score_types::{GameMode, ScorePair};

    #[test]
    fn test_records_share_the_session_id() {
        let mut session = MatchSession::new();
        session.apply(ScoreAction::PointWon(Player::One));

        let first = session.record();
        let second = session.record();
        assert_eq!(first.session_id, second.session_id);
        assert_ne!(first.id, second.id);
        assert_eq!(first.session_id, session.session_id());
    }

    #[test]
    fn test_mode_change_starts_a_new_session() {
        let mut session = MatchSession::new();
        let old_id = session.session_id().to_string();

        session.apply(ScoreAction::SetGameMode(GameMode::Mexicano));
        assert_ne!(session.session_id(), old_id);
    }

    #[test]
    fn test_reset_match_starts_a_new_session() {
        let mut session = MatchSession::new();
        session.apply(ScoreAction::PointWon(Player::Two));
        let old_id = session.session_id().to_string();

        session.apply(ScoreAction::ResetMatch);
        assert_ne!(session.session_id(), old_id);
    }

    #[test]
    fn test_point_keeps_the_session() {
        let mut session = MatchSession::new();
        let old_id = session.session_id().to_string();

        session.apply(ScoreAction::PointWon(Player::One));
        session.apply(ScoreAction::Undo);
        assert_eq!(session.session_id(), old_id);
    }

    #[test]
    fn test_completed_mexicano_record() {
        let mut session = MatchSession::new();
        session.apply(ScoreAction::SetGameMode(GameMode::Mexicano));
        session.apply(ScoreAction::SetMexicanoLimit(4));
        for _ in 0..3 {
            session.apply(ScoreAction::PointWon(Player::One));
        }
        session.apply(ScoreAction::PointWon(Player::Two));

        assert!(session.is_complete());
        assert_eq!(session.winner(), Some(Player::One));

        let record = session.record();
        assert!(record.completed);
        assert_eq!(record.winner, Some(Player::One));
        assert_eq!(record.points, ScorePair::new(3, 1));
        assert_eq!(record.mexicano_limit, Some(4));
    }
}
