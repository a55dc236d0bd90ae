//! CLI module - Command-line interface for the dealership service
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// Dealership - reviews, dealers and car inventory API
#[derive(Parser)]
#[command(name = "dealership")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Replace every collection with the fixture contents
    Seed,

    /// Check the database and print collection counts
    Check,

    /// Populate and list the car make/model catalog
    Catalog,

    /// Create default config file
    Init,
}

pub use commands::*;
