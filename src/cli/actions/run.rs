use crate::{
    cli::{
        actions::{execute_command, metrics::TimerMetrics, Action, OutputFormat},
        config::{Config, TimerConfig},
    },
    name::TimerName,
    registry::Registry,
    summary::{write_stats_table, write_summary},
};
use anyhow::Result;
use std::{
    io::{self, Write},
    time::Duration,
};
use tokio::{
    task::{self, LocalSet},
    time::sleep,
};
use tracing::{debug, info, instrument, warn};

/// Handle the run action
#[instrument(skip(action))]
pub async fn handle(action: Action) -> Result<()> {
    let Action::Run { config, format } = action;

    let config = Config::new(config)?;

    let report = run_timers(&config).await?;

    let mut stdout = io::stdout().lock();
    render(format, &report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Runs every configured timer and collects the samples into one registry.
///
/// Each timer runs on its own task with its own registry, entries sharing a
/// name end up as one timer in the report.
pub async fn run_timers(config: &Config) -> Result<Registry> {
    let local = LocalSet::new();

    local
        .run_until(async {
            let mut handles = Vec::new();

            for timer in &config.timers {
                // Spawn a task for each timer
                handles.push(task::spawn_local(run_timer(timer.clone())));
            }

            let report = Registry::new();

            for result in futures::future::join_all(handles).await {
                let (name, timings) = result??;

                let timer = report.timer(name);
                for timing in timings {
                    timer.record(Duration::from_secs_f64(timing));
                }
            }

            Ok::<_, anyhow::Error>(report)
        })
        .await
}

/// Runs the command of a single timer `repeat` times, one sample per run
async fn run_timer(timer: TimerConfig) -> Result<(TimerName, Vec<f64>)> {
    // private to this task
    let registry = Registry::new();
    let name = timer.name;

    for run in 1..=timer.repeat {
        if run > 1 && !timer.every.is_zero() {
            sleep(timer.every).await;
        }

        debug!("Running command for timer: {}", name);

        registry.start(&name);
        let exit_code = execute_command(&timer.cmd).await;
        let elapsed = registry.stop(&name)?;

        let exit_code = exit_code?;

        if exit_code == 0 {
            debug!(timer = %name, run, elapsed, "command finished");
        } else {
            warn!(
                timer = %name,
                cmd = %timer.cmd,
                run,
                exit_code,
                "command exited with a non-zero code"
            );
        }
    }

    // make sure the timer exists even when repeat is 0
    let timings = registry.timer(&name).timings();

    info!(
        timer = %name,
        runs = timings.len(),
        elapsed = registry.elapsed(&name)?,
        "timer finished"
    );

    Ok((name, timings))
}

/// Writes the report in the requested format
pub fn render<W: Write>(format: OutputFormat, report: &Registry, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Summary => write_summary(report, out)?,
        OutputFormat::Table => write_stats_table(report, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report.all_stats())?;
            writeln!(out)?;
        }
        OutputFormat::Prometheus => {
            let metrics = TimerMetrics::new()?;
            metrics.observe(report)?;
            out.write_all(metrics.encode()?.as_bytes())?;
        }
    }

    Ok(())
}
