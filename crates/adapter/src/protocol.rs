//! Protocol module - JSON message types for external controllers
//!
//! Line-delimited JSON. A client sends `hello` once, then `action` messages;
//! the scoreboard answers every accepted action with an `observation` of the
//! full state and rejects anything unparseable with an `error`.

use serde::{Deserialize, Serialize};

use padel_score_core::MatchState;
use padel_score_types::{
    GameMode, Player, ScoreAction, ScorePair, ScoringVariant, SetScore,
};

pub const PROTOCOL_VERSION: &str = "1.0.0";

// ============== Client -> Scoreboard Messages ==============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Incoming {
    Hello {
        client: String,
    },
    Action(ActionRequest),
    /// Ask for an observation without changing anything
    Observe,
}

/// An action by protocol name plus its optional payload fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u16>,
}

impl ActionRequest {
    /// Resolve into a [`ScoreAction`]; `None` when the name is unknown or a
    /// required payload field is missing or malformed
    pub fn to_action(&self) -> Option<ScoreAction> {
        let player = self.player.as_deref().and_then(Player::from_str);
        match self.name.as_str() {
            "pointWon" => player.map(ScoreAction::PointWon),
            "resetGame" => Some(ScoreAction::ResetGame),
            "resetMatch" => Some(ScoreAction::ResetMatch),
            "undo" => Some(ScoreAction::Undo),
            "setGameMode" => self
                .mode
                .as_deref()
                .and_then(GameMode::from_str)
                .map(ScoreAction::SetGameMode),
            "setMexicanoLimit" => self.value.map(ScoreAction::SetMexicanoLimit),
            "setSetsToWin" => self
                .value
                .map(|v| ScoreAction::SetSetsToWin(v.min(u8::MAX as u16) as u8)),
            "setInitialServer" => player.map(ScoreAction::SetInitialServer),
            "setScoringVariant" => self
                .variant
                .as_deref()
                .and_then(ScoringVariant::from_str)
                .map(ScoreAction::SetScoringVariant),
            _ => None,
        }
    }
}

// ============== Scoreboard -> Client Messages ==============

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Outgoing {
    #[serde(rename_all = "camelCase")]
    Welcome {
        protocol_version: String,
    },
    Observation(Observation),
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TieBreakView {
    pub active: bool,
    pub points: ScorePair,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeuceView {
    pub active: bool,
    pub advantage: Option<Player>,
}

/// Full state snapshot sent after every accepted message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub seq: u64,
    pub mode: GameMode,
    pub variant: ScoringVariant,
    pub points: ScorePair,
    pub games: ScorePair,
    pub sets: ScorePair,
    pub completed_sets: Vec<SetScore>,
    pub last_completed_set: SetScore,
    pub tie_break: TieBreakView,
    pub deuce: DeuceView,
    pub serving: Player,
    pub mexicano_limit: u16,
    pub sets_to_win: u8,
    pub can_undo: bool,
    pub match_complete: bool,
    pub winner: Option<Player>,
    pub show_mode_selector: bool,
    pub show_serve_selector: bool,
}

impl Observation {
    pub fn from_state(state: &MatchState, can_undo: bool, seq: u64) -> Self {
        Self {
            seq,
            mode: state.mode,
            variant: state.variant,
            points: state.points,
            games: state.games,
            sets: state.sets,
            completed_sets: state.completed_sets.clone(),
            last_completed_set: state.last_completed_set,
            tie_break: TieBreakView {
                active: state.is_tie_break(),
                points: state.tie_break_points(),
            },
            deuce: DeuceView {
                active: state.is_deuce(),
                advantage: state.advantage(),
            },
            serving: state.serving,
            mexicano_limit: state.mexicano_limit,
            sets_to_win: state.sets_to_win,
            can_undo,
            match_complete: state.is_match_complete(),
            winner: state.match_winner(),
            show_mode_selector: state.show_mode_selector,
            show_serve_selector: state.show_serve_selector,
        }
    }
}
