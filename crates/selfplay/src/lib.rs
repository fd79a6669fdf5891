//! Self-play Runner for the chess rules engine
//!
//! Pits two capture-first random players against each other through the
//! full game controller and records how each game ended.
//!
//! # Usage
//!
//! ```bash
//! # Ten games with the default ply cap
//! cargo run -p selfplay
//!
//! # Reproducible run from a config file, summary written as JSON
//! cargo run -p selfplay -- --config selfplay.toml --seed 7 --out results.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
