//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate holds the match scoring state machine and nothing else: no UI,
//! no I/O, no clocks. Every transition is a pure function from an immutable
//! [`MatchState`] and a [`ScoreAction`](padel_score_types::ScoreAction) to
//! the next state, which makes the rules:
//!
//! - **Total**: defined for every state/action pair; invalid or exhausted
//!   inputs are absorbed as no-ops instead of raised as errors
//! - **Testable**: every rule edge (deuce, golden point, tiebreak serve
//!   rotation, the dual-behavior game reset) is unit tested in place
//! - **Undoable**: the engine snapshots the pre-action state before each
//!   change, so undo is an exact round trip
//!
//! # Module Structure
//!
//! - [`state`]: the `MatchState` value and its sum-typed set phase
//! - [`vinnarbana`]: point ladder, games, sets, deuce/advantage, tiebreak
//! - [`mexicano`]: bounded point-count accumulation
//! - [`reset`]: reset and configuration transitions
//! - [`history`]: bounded push-before-mutate undo stack
//! - [`engine`]: action dispatch and state ownership
//!
//! # Example
//!
//! ```
//! use padel_score_core::ScoreEngine;
//! use padel_score_types::{Player, ScoreAction};
//!
//! let mut engine = ScoreEngine::new();
//! engine.apply(ScoreAction::PointWon(Player::One));
//! assert_eq!(engine.state().points.p1, 15);
//!
//! engine.apply(ScoreAction::Undo);
//! assert_eq!(engine.state().points.p1, 0);
//! ```

pub mod engine;
pub mod history;
pub mod mexicano;
pub mod reset;
pub mod state;
pub mod vinnarbana;

pub use padel_score_types as types;

// Re-export commonly used items for convenience
pub use engine::{transition, ScoreEngine};
pub use history::HistoryStack;
pub use state::{GamePhase, MatchState};
