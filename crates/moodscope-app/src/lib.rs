//! Moodscope - lexicon sentiment and readability analysis from the terminal.
//!
//! This crate provides the pieces behind the `moodscope` binary:
//!
//! - Configuration file loading ([`config`])
//! - Transcript providers for argument, file and stdin input ([`input`])
//! - Terminal rendering of results and history ([`render`])

pub mod config;
pub mod input;
pub mod render;

pub use config::{AppConfig, ConfigError};
pub use input::{select_provider, InputError, TranscriptProvider};
