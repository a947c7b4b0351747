//! Command workflows behind the `semanver` binary
//!
//! Kept separate from `main.rs` so the workflows can be called and tested
//! without going through clap.

pub mod commands;

pub use commands::{CommandContext, Comparison, ParseReport, Relation};
