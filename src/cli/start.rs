use crate::cli::{actions::Action, commands, dispatch::handler, telemetry};
use anyhow::Result;

/// Start the CLI
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbose = matches.get_one::<u8>("verbose").copied().unwrap_or(0);

    telemetry::init(telemetry::verbosity_level(verbose))?;

    let action = handler(&matches)?;

    Ok(action)
}
