//! CLI module for the store sales prediction service
//!
//! Provides subcommands for running the service in different modes:
//! - `serve`: API + form UI combined (default)
//! - `api`: API server only
//! - `predict`: one-shot prediction from the command line

pub mod api;
pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Store sales prediction service
#[derive(Parser)]
#[command(name = "store-sales-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run API + form UI server combined (default mode)
    Serve,

    /// Run API server only
    Api,

    /// Predict once from command-line flags and print the result as JSON
    Predict(predict::PredictArgs),
}
