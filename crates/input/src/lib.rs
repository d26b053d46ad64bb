//! Terminal input handling for the scoreboard.

pub mod map;

pub use map::{handle_key_event, should_quit, KeyCommand};
