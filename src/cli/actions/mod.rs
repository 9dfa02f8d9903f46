pub mod metrics;
pub mod run;

use anyhow::{anyhow, Result};
use std::{env, path::PathBuf};
use strum::{Display, EnumString};
use tokio::process::Command;

#[derive(Debug)]
pub enum Action {
    Run {
        config: PathBuf,
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Summary,
    Table,
    Json,
    Prometheus,
}

/// Runs `cmd` through the user's shell and returns its exit code
async fn execute_command(cmd: &str) -> Result<i32> {
    let shell = env::var("SHELL").unwrap_or_else(|_| "sh".to_string());
    let output = Command::new(shell).arg("-c").arg(cmd).output().await?;

    let exit_code = match output.status.code() {
        Some(code) => code,
        None => Err(anyhow!("Process terminated by signal"))?,
    };

    Ok(exit_code)
}
