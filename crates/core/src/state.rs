//! Match state - the canonical scoreboard value
//!
//! The state is an immutable value: every transition builds a new `MatchState`
//! and the engine swaps it in wholesale. Sub-phases of a Vinnarbana set are a
//! sum type so that a deuce inside a tiebreak cannot be represented.

use padel_score_types::*;

/// Where the current Vinnarbana set stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Plain point-ladder play (0/15/30/40)
    Rally,
    /// 40-40 under the advantage variant; `advantage` is the side one point
    /// from the game, or `None` right after the advantage was cancelled
    Deuce { advantage: Option<Player> },
    /// Set decider entered at six games all
    TieBreak { points: ScorePair },
}

/// Complete scoreboard for one match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    /// Current-game point counters: ladder values in Vinnarbana, raw totals
    /// in Mexicano
    pub points: ScorePair,
    /// Games won in the current set (Vinnarbana only)
    pub games: ScorePair,
    /// Sets won in the match (Vinnarbana only)
    pub sets: ScorePair,
    /// Finished sets in chronological order; always `sets.total()` long
    pub completed_sets: Vec<SetScore>,
    /// Most recent finished set, kept so a just-reset 0-0 display can still
    /// show what the prior set ended as
    pub last_completed_set: SetScore,
    /// Game wins inside the current set, cleared when the set is awarded
    pub win_sequence: Vec<Player>,
    pub phase: GamePhase,
    /// Alternates every game; re-chosen by the user at tiebreak start
    pub serving: Player,
    pub mode: GameMode,
    pub variant: ScoringVariant,
    /// Combined point total that ends a Mexicano match
    pub mexicano_limit: u16,
    /// Sets needed to win a Vinnarbana match, clamped to 1..=6
    pub sets_to_win: u8,
    /// Presentation routing: prompt for a mode choice
    pub show_mode_selector: bool,
    /// Presentation routing: prompt for the serving side (tiebreak start,
    /// new Vinnarbana match)
    pub show_serve_selector: bool,
}

impl MatchState {
    pub fn new() -> Self {
        Self {
            points: ScorePair::default(),
            games: ScorePair::default(),
            sets: ScorePair::default(),
            completed_sets: Vec::new(),
            last_completed_set: SetScore::default(),
            win_sequence: Vec::new(),
            phase: GamePhase::Rally,
            serving: Player::One,
            mode: GameMode::Vinnarbana,
            variant: ScoringVariant::Advantage,
            mexicano_limit: DEFAULT_MEXICANO_LIMIT,
            sets_to_win: DEFAULT_SETS_TO_WIN,
            show_mode_selector: true,
            show_serve_selector: false,
        }
    }

    pub fn is_tie_break(&self) -> bool {
        matches!(self.phase, GamePhase::TieBreak { .. })
    }

    /// Tiebreak point counters, zero outside a tiebreak
    pub fn tie_break_points(&self) -> ScorePair {
        match self.phase {
            GamePhase::TieBreak { points } => points,
            _ => ScorePair::default(),
        }
    }

    pub fn is_deuce(&self) -> bool {
        matches!(self.phase, GamePhase::Deuce { .. })
    }

    /// Side currently holding the advantage, if any
    pub fn advantage(&self) -> Option<Player> {
        match self.phase {
            GamePhase::Deuce { advantage } => advantage,
            _ => None,
        }
    }

    /// Whether the match is logically over under the current mode's rules
    pub fn is_match_complete(&self) -> bool {
        match self.mode {
            GameMode::Mexicano => self.points.total() >= self.mexicano_limit,
            GameMode::Vinnarbana => {
                let target = self.sets_to_win as u16;
                self.sets.p1 >= target || self.sets.p2 >= target
            }
        }
    }

    /// Side strictly ahead on the mode's deciding counter (points for
    /// Mexicano, sets for Vinnarbana); `None` when level
    pub fn leading_player(&self) -> Option<Player> {
        match self.mode {
            GameMode::Mexicano => self.points.leader(),
            GameMode::Vinnarbana => self.sets.leader(),
        }
    }

    /// Winner of a finished match, `None` while still in progress or level
    pub fn match_winner(&self) -> Option<Player> {
        if self.is_match_complete() {
            self.leading_player()
        } else {
            None
        }
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::new()
    }
}
