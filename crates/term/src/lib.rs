//! Terminal presentation for the scoreboard.
//!
//! Strictly a view: consumes the core's state, never mutates it, and holds
//! no scoring logic beyond display fallbacks.

pub mod renderer;
pub mod scoreboard;

pub use renderer::TerminalRenderer;
pub use scoreboard::{games_line, points_line, render};
