//! Core types shared across the application
//! This module contains pure data types with no required external dependencies

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Point ladder values for a Vinnarbana game
pub const POINTS_INITIAL: u16 = 0;
pub const POINTS_FIRST_STEP: u16 = 15;
pub const POINTS_SECOND_STEP: u16 = 30;
pub const POINTS_THIRD_STEP: u16 = 40;

/// Set and tiebreak thresholds
pub const GAMES_TO_WIN_SET: u16 = 6;
pub const MIN_GAME_DIFFERENCE: u16 = 2;
pub const TIEBREAK_POINTS_TO_WIN: u16 = 7;
pub const TIEBREAK_MIN_POINT_DIFFERENCE: u16 = 2;

/// Match configuration bounds
pub const DEFAULT_MEXICANO_LIMIT: u16 = 24;
pub const DEFAULT_SETS_TO_WIN: u8 = 1;
pub const MIN_SETS_TO_WIN: u8 = 1;
pub const MAX_SETS_TO_WIN: u8 = 6;

/// Undo history depth (oldest snapshot evicted first)
pub const UNDO_HISTORY_DEPTH: usize = 20;

/// Stored match records are capped at this many entries, newest first
pub const MAX_STORED_MATCHES: usize = 50;

/// One of the two sides on court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Player {
    #[cfg_attr(feature = "serde", serde(rename = "p1"))]
    One,
    #[cfg_attr(feature = "serde", serde(rename = "p2"))]
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "p1" | "one" | "playerone" => Some(Player::One),
            "p2" | "two" | "playertwo" => Some(Player::Two),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "p1",
            Player::Two => "p2",
        }
    }
}

/// Scoring mode selected for the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum GameMode {
    Vinnarbana,
    Mexicano,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Vinnarbana => GameMode::Mexicano,
            GameMode::Mexicano => GameMode::Vinnarbana,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vinnarbana" => Some(GameMode::Vinnarbana),
            "mexicano" => Some(GameMode::Mexicano),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Vinnarbana => "vinnarbana",
            GameMode::Mexicano => "mexicano",
        }
    }
}

/// How 40-40 is resolved in a Vinnarbana game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum ScoringVariant {
    Advantage,
    GoldenPoint,
}

impl ScoringVariant {
    pub fn toggled(self) -> Self {
        match self {
            ScoringVariant::Advantage => ScoringVariant::GoldenPoint,
            ScoringVariant::GoldenPoint => ScoringVariant::Advantage,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "advantage" => Some(ScoringVariant::Advantage),
            "goldenpoint" | "golden_point" | "golden" => Some(ScoringVariant::GoldenPoint),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringVariant::Advantage => "advantage",
            ScoringVariant::GoldenPoint => "goldenPoint",
        }
    }
}

/// A per-player pair of counters (points, games, sets or tiebreak points)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScorePair {
    pub p1: u16,
    pub p2: u16,
}

impl ScorePair {
    pub fn new(p1: u16, p2: u16) -> Self {
        Self { p1, p2 }
    }

    pub fn get(self, player: Player) -> u16 {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    pub fn with(self, player: Player, value: u16) -> Self {
        match player {
            Player::One => Self { p1: value, ..self },
            Player::Two => Self { p2: value, ..self },
        }
    }

    pub fn plus_one(self, player: Player) -> Self {
        let value = self.get(player) + 1;
        self.with(player, value)
    }

    pub fn total(self) -> u16 {
        self.p1 + self.p2
    }

    pub fn is_zero(self) -> bool {
        self.p1 == 0 && self.p2 == 0
    }

    /// Winner's margin over the other side, zero when trailing
    pub fn lead(self, player: Player) -> u16 {
        self.get(player).saturating_sub(self.get(player.other()))
    }

    /// Side with the strictly greater counter, if any
    pub fn leader(self) -> Option<Player> {
        if self.p1 > self.p2 {
            Some(Player::One)
        } else if self.p2 > self.p1 {
            Some(Player::Two)
        } else {
            None
        }
    }
}

/// Result of a finished set, recorded in chronological order
pub type SetScore = ScorePair;

/// Discrete user actions accepted by the score engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    PointWon(Player),
    ResetGame,
    ResetMatch,
    Undo,
    SetGameMode(GameMode),
    SetMexicanoLimit(u16),
    SetSetsToWin(u8),
    SetInitialServer(Player),
    SetScoringVariant(ScoringVariant),
}

impl ScoreAction {
    /// Protocol name of the action (payload carried separately)
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreAction::PointWon(_) => "pointWon",
            ScoreAction::ResetGame => "resetGame",
            ScoreAction::ResetMatch => "resetMatch",
            ScoreAction::Undo => "undo",
            ScoreAction::SetGameMode(_) => "setGameMode",
            ScoreAction::SetMexicanoLimit(_) => "setMexicanoLimit",
            ScoreAction::SetSetsToWin(_) => "setSetsToWin",
            ScoreAction::SetInitialServer(_) => "setInitialServer",
            ScoreAction::SetScoringVariant(_) => "setScoringVariant",
        }
    }
}
