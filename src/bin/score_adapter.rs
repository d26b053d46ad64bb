//! Headless adapter runner.
//!
//! Speaks the line-delimited JSON protocol over stdin/stdout so another
//! process can drive and observe the scoreboard. Exits when stdin closes.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    padel_score::adapter::run_stdio().await
}
