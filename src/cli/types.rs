//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "scm-insights")]
#[command(about = "Tech-insights facts about source repositories of catalog entities", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to .scm-insights/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration to .scm-insights/config.yaml
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Run the README fact retriever over the catalog
    Run {
        /// Read entities from a YAML/JSON catalog file instead of the catalog API
        #[arg(long)]
        catalog_file: Option<PathBuf>,
    },

    /// Check a single entity for a README (not throttled)
    Check {
        /// Entity reference, e.g. component:default/backstage
        entity_ref: String,

        /// Read entities from a YAML/JSON catalog file instead of the catalog API
        #[arg(long)]
        catalog_file: Option<PathBuf>,
    },

    /// Show the README fact retriever's descriptor and fact schema
    Schema,
}
