//! CLI command definitions for publication-io
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod env;
pub mod save;
pub mod yaml;

use clap::{Parser, Subcommand};
use env::EnvArgs;
use save::SaveArgs;
use yaml::YamlArgs;

/// Publication, YAML config, dotenv and text-output helpers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to settings file (overrides project and user settings)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to publication file (overrides settings)
    #[arg(short, long, global = true)]
    pub publication: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the publication file
    Publication,

    /// Parse a YAML file and print the resulting mapping
    Yaml(YamlArgs),

    /// Load the dotenv file and check required variables
    Env(EnvArgs),

    /// Write text to a file, optionally under a header
    Save(SaveArgs),

    /// Print the effective settings
    Settings,
}
