//! Match session layer - duration, records and statistics
//!
//! Sits between the pure scoring core and the outside world. The core never
//! touches clocks or identifiers; this crate owns both and projects the
//! running match into persistable [`MatchRecord`] summaries.

pub mod record;
pub mod session;
pub mod stats;

pub use padel_score_core as core;
pub use padel_score_types as types;

pub use record::{format_duration, MatchRecord};
pub use session::MatchSession;
pub use stats::MatchStatistics;
