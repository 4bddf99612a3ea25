//! Command-line front end for roster reports.
//!
//! `main.rs` only parses arguments and wires logging; the commands live here
//! so integration tests can drive them directly.

pub mod cli;
pub mod commands;
pub mod config;
pub mod export;
pub mod logging;
pub mod summary;
pub mod types;
