//! Adapter runtime - drives a match session from a line stream
//!
//! `AdapterRuntime` is synchronous and testable; `run_stdio` wraps it in an
//! async stdin/stdout loop for the headless binary.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use padel_score_engine::MatchSession;

use crate::protocol::{Incoming, Observation, Outgoing, PROTOCOL_VERSION};

pub struct AdapterRuntime {
    session: MatchSession,
    seq: u64,
}

impl AdapterRuntime {
    pub fn new() -> Self {
        Self {
            session: MatchSession::new(),
            seq: 0,
        }
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// Snapshot the current state as the next observation
    pub fn observe(&mut self) -> Outgoing {
        self.seq += 1;
        Outgoing::Observation(Observation::from_state(
            self.session.state(),
            self.session.can_undo(),
            self.seq,
        ))
    }

    /// Handle one protocol line and produce the reply
    pub fn handle_line(&mut self, line: &str) -> Outgoing {
        let msg: Incoming = match serde_json::from_str(line) {
            Ok(msg) => msg,
            Err(err) => {
                return Outgoing::Error {
                    message: format!("invalid message: {err}"),
                }
            }
        };

        match msg {
            Incoming::Hello { .. } => Outgoing::Welcome {
                protocol_version: PROTOCOL_VERSION.to_string(),
            },
            Incoming::Observe => self.observe(),
            Incoming::Action(request) => match request.to_action() {
                Some(action) => {
                    self.session.apply(action);
                    self.observe()
                }
                None => Outgoing::Error {
                    message: format!("unknown or incomplete action: {}", request.name),
                },
            },
        }
    }
}

impl Default for AdapterRuntime {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the adapter over stdin/stdout until the input stream closes.
///
/// Emits one observation up front so a client can render before sending
/// anything.
pub async fn run_stdio() -> Result<()> {
    let mut runtime = AdapterRuntime::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    let first = runtime.observe();
    write_message(&mut stdout, &first).await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = runtime.handle_line(&line);
        write_message(&mut stdout, &reply).await?;
    }

    Ok(())
}

async fn write_message(out: &mut tokio::io::Stdout, msg: &Outgoing) -> Result<()> {
    let mut json = serde_json::to_vec(msg)?;
    json.push(b'\n');
    out.write_all(&json).await?;
    out.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_gets_welcome() {
        let mut runtime = AdapterRuntime::new();
        let reply = runtime.handle_line(r#"{"type":"hello","client":"test"}"#);
        assert!(matches!(reply, Outgoing::Welcome { .. }));
    }

    #[test]
    fn test_action_gets_observation() {
        let mut runtime = AdapterRuntime::new();
        let reply = runtime.handle_line(r#"{"type":"action","name":"pointWon","player":"p1"}"#);
        match reply {
            Outgoing::Observation(obs) => {
                assert_eq!(obs.points.p1, 15);
                assert!(obs.can_undo);
            }
            other => panic!("unexpected reply: {other:?}"),
        }
    }

    #[test]
    fn test_garbage_gets_error() {
        let mut runtime = AdapterRuntime::new();
        assert!(matches!(
            runtime.handle_line("not json"),
            Outgoing::Error { .. }
        ));
        assert!(matches!(
            runtime.handle_line(r#"{"type":"action","name":"fly"}"#),
            Outgoing::Error { .. }
        ));
        // The session is untouched by rejected input
        assert!(runtime.session().state().points.is_zero());
    }

    #[test]
    fn test_observation_seq_increases() {
        let mut runtime = AdapterRuntime::new();
        let first = runtime.observe();
        let second = runtime.handle_line(r#"{"type":"observe"}"#);
        match (first, second) {
            (Outgoing::Observation(a), Outgoing::Observation(b)) => {
                assert!(b.seq > a.seq);
            }
            other => panic!("unexpected replies: {other:?}"),
        }
    }
}
