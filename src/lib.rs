//! Padel scoreboard (workspace facade crate).
//!
//! This package keeps a stable `padel_score::{core,engine,store,adapter,term,input,types}`
//! public API while the implementation lives in dedicated crates under `crates/`.

pub use padel_score_adapter as adapter;
pub use padel_score_core as core;
pub use padel_score_engine as engine;
pub use padel_score_input as input;
pub use padel_score_store as store;
pub use padel_score_term as term;
pub use padel_score_types as types;
