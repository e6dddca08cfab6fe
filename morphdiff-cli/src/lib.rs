//! morphdiff CLI library
//!
//! This library provides the command-line interface for comparing
//! dictionary lemmatization with rule-based stemming.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
