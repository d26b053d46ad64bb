//! Terminal scoreboard runner (default binary).
//!
//! Owns the single mutable reference to the running match session: keys are
//! mapped to actions, the engine computes the next state, the view re-renders.
//! Persistence runs on a tokio runtime beside the synchronous UI loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::runtime::Runtime;

use padel_score::core::MatchState;
use padel_score::engine::{format_duration, MatchSession};
use padel_score::input::{handle_key_event, should_quit, KeyCommand};
use padel_score::store::ScoreStore;
use padel_score::term::{render, TerminalRenderer};
use padel_score::types::ScoreAction;

/// Step for the +/- Mexicano limit keys
const LIMIT_STEP: u16 = 4;

fn main() -> Result<()> {
    let rt = Runtime::new()?;
    let store = ScoreStore::new(data_dir());

    // Restore the last used configuration before the first frame
    let mut initial = MatchState::new();
    initial.mode = rt.block_on(store.last_game_mode());
    initial.mexicano_limit = rt.block_on(store.mexicano_limit());
    let mut session = MatchSession::from_state(initial);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &store, &rt);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn data_dir() -> String {
    std::env::var("PADEL_SCORE_DATA").unwrap_or_else(|_| ".padel-score".to_string())
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut MatchSession,
    store: &ScoreStore,
    rt: &Runtime,
) -> Result<()> {
    // Session id of the match whose completed record was already written
    let mut saved_session: Option<String> = None;

    loop {
        let duration = format_duration(session.elapsed_seconds());
        let lines = render(session.state(), session.can_undo(), &duration);
        term.draw(&lines)?;

        if !event::poll(Duration::from_millis(200))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }
        let Some(command) = handle_key_event(key) else {
            continue;
        };

        let action = resolve(command, session.state());
        let (old_mode, old_limit) = (session.state().mode, session.state().mexicano_limit);
        session.apply(action);

        // Remember configuration changes for the next start. A failed save
        // must not interrupt a live match.
        if session.state().mode != old_mode {
            let _ = rt.block_on(store.save_last_game_mode(session.state().mode));
        }
        if session.state().mexicano_limit != old_limit {
            let _ = rt.block_on(store.save_mexicano_limit(session.state().mexicano_limit));
        }

        // Write one record per completed match
        if session.is_complete() && saved_session.as_deref() != Some(session.session_id()) {
            let record = session.record();
            saved_session = Some(record.session_id.clone());
            let _ = rt.block_on(store.save_match_record(record));
        }
    }
}

/// Resolve symbolic key commands against the current state
fn resolve(command: KeyCommand, state: &MatchState) -> ScoreAction {
    match command {
        KeyCommand::Apply(action) => action,
        KeyCommand::CycleMode => ScoreAction::SetGameMode(state.mode.toggled()),
        KeyCommand::ToggleVariant => ScoreAction::SetScoringVariant(state.variant.toggled()),
        KeyCommand::RaiseLimit => {
            ScoreAction::SetMexicanoLimit(state.mexicano_limit.saturating_add(LIMIT_STEP))
        }
        KeyCommand::LowerLimit => ScoreAction::SetMexicanoLimit(
            state.mexicano_limit.saturating_sub(LIMIT_STEP).max(LIMIT_STEP),
        ),
        KeyCommand::MoreSets => ScoreAction::SetSetsToWin(state.sets_to_win.saturating_add(1)),
        KeyCommand::FewerSets => ScoreAction::SetSetsToWin(state.sets_to_win.saturating_sub(1)),
    }
}
