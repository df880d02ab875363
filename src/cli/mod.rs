//! CLI module for the QA Testgen Gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// QA Testgen Gateway - generate QA test cases from user stories
#[derive(Parser)]
#[command(name = "qa-testgen-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
