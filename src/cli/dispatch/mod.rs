use crate::cli::actions::{Action, OutputFormat};
use anyhow::{Context, Result};
use std::path::PathBuf;

pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let config = matches
        .get_one::<PathBuf>("config")
        .context("missing config file")?
        .to_path_buf();

    let format = matches
        .get_one::<OutputFormat>("format")
        .copied()
        .unwrap_or_default();

    Ok(Action::Run { config, format })
}
