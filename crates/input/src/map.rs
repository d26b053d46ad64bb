//! Key mapping from terminal events to scoreboard commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use padel_score_types::{Player, ScoreAction};

/// A resolved key press.
///
/// Most keys map straight to a [`ScoreAction`]; the cycling/stepping keys
/// need the current state to know their target, so they stay symbolic and
/// the caller resolves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Apply(ScoreAction),
    CycleMode,
    ToggleVariant,
    RaiseLimit,
    LowerLimit,
    MoreSets,
    FewerSets,
}

/// Map keyboard input to scoreboard commands.
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Scoring
        KeyCode::Left | KeyCode::Char('1') => {
            Some(KeyCommand::Apply(ScoreAction::PointWon(Player::One)))
        }
        KeyCode::Right | KeyCode::Char('2') => {
            Some(KeyCommand::Apply(ScoreAction::PointWon(Player::Two)))
        }

        // Undo and resets
        KeyCode::Char('u') | KeyCode::Char('U') | KeyCode::Backspace => {
            Some(KeyCommand::Apply(ScoreAction::Undo))
        }
        KeyCode::Char('r') => Some(KeyCommand::Apply(ScoreAction::ResetGame)),
        KeyCode::Char('R') => Some(KeyCommand::Apply(ScoreAction::ResetMatch)),

        // Serve selection
        KeyCode::Char('s') => Some(KeyCommand::Apply(ScoreAction::SetInitialServer(
            Player::One,
        ))),
        KeyCode::Char('d') => Some(KeyCommand::Apply(ScoreAction::SetInitialServer(
            Player::Two,
        ))),

        // Configuration
        KeyCode::Char('m') | KeyCode::Char('M') => Some(KeyCommand::CycleMode),
        KeyCode::Char('v') | KeyCode::Char('V') => Some(KeyCommand::ToggleVariant),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(KeyCommand::RaiseLimit),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(KeyCommand::LowerLimit),
        KeyCode::Char(']') => Some(KeyCommand::MoreSets),
        KeyCode::Char('[') => Some(KeyCommand::FewerSets),

        _ => None,
    }
}

/// Check if key should quit the scoreboard.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
