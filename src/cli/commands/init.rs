//! Implementation of the `scm-insights init` command.

use anyhow::{Context, Result};

use crate::cli::models::InitOutput;
use crate::cli::output::output;
use crate::infrastructure::setup::init_project;

pub fn execute(force: bool, json_mode: bool) -> Result<()> {
    let root = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = init_project(&root, force)?;
    output(&InitOutput { config_path }, json_mode);
    Ok(())
}
