//! CLI module for ordr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for listing, adding,
//! editing, and removing orders.

pub mod commands;

pub use commands::Cli;
