//! Command-line interface layer
//!
//! Argument parsing and the handlers that turn parsed arguments into
//! library configuration.

pub mod args;
pub mod commands;
