//! Adapter module - external control via a line-delimited JSON protocol
//!
//! Lets another process (a companion app, a test harness, a second display)
//! drive and observe the scoreboard without touching the terminal UI.
//!
//! # Protocol Overview
//!
//! 1. **Handshake**: client sends `hello`, the scoreboard answers `welcome`
//! 2. **Actions**: client sends `action` messages naming a score action plus
//!    its payload fields
//! 3. **Observations**: every accepted message is answered with an
//!    `observation` carrying the full match state
//! 4. **Errors**: unparseable lines and unknown actions get an `error` reply
//!    and leave the state untouched
//!
//! # Example Protocol Flow
//!
//! ```text
//! Client -> Board: {"type":"hello","client":"companion","..."}
//! Board  -> Client: {"type":"welcome","protocolVersion":"1.0.0"}
//! Client -> Board: {"type":"action","name":"pointWon","player":"p1"}
//! Board  -> Client: {"type":"observation","seq":2,"points":{"p1":15,"p2":0},...}
//! ```
//!
//! See [`protocol`] for message definitions and [`runtime`] for the stdio
//! loop used by the `score-adapter` binary.

pub mod protocol;
pub mod runtime;

pub use padel_score_core as core;
pub use padel_score_types as types;

pub use protocol::{ActionRequest, Incoming, Observation, Outgoing, PROTOCOL_VERSION};
pub use runtime::{run_stdio, AdapterRuntime};
