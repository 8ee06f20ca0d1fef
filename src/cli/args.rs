//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::Overrides;

/// depensure - Ensure a Python library is installed.
#[derive(Debug, Parser)]
#[command(name = "depensure")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Library to ensure (default: libcst)
    #[arg(short, long, global = true, env = "DEPENSURE_LIBRARY")]
    pub library: Option<String>,

    /// Import name to look up, when it differs from the library name
    #[arg(short, long, global = true, env = "DEPENSURE_MODULE")]
    pub module: Option<String>,

    /// Python interpreter used to check and install
    #[arg(long, global = true, env = "DEPENSURE_PYTHON")]
    pub python: Option<PathBuf>,

    /// Path to config file (overrides default .depensure.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Settings overrides from flags and environment variables.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            library: self.library.clone(),
            module: self.module.clone(),
            python: self
                .python
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Install the library if it is missing (default if no command specified)
    Ensure,

    /// Report whether the library is installed, without installing it
    Check,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
