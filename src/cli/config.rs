use crate::name::TimerName;
use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::{fs::File, path::PathBuf, time::Duration};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub timers: Vec<TimerConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TimerConfig {
    pub name: TimerName,
    pub cmd: String,
    #[serde(default = "default_repeat")]
    pub repeat: u32,
    // pause between repetitions
    #[serde(default, deserialize_with = "parse_duration")]
    pub every: Duration,
}

fn default_repeat() -> u32 {
    1
}

impl Config {
    pub fn new(config_path: PathBuf) -> Result<Self> {
        let file = File::open(&config_path)
            .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;

        let config: Self = serde_yaml::from_reader(file).context("Failed to parse config file")?;

        Ok(config)
    }
}

/// Parses a duration string (e.g., "500ms", "5s", "3m", "1h", "2d") into a `Duration`.
fn parse_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_duration_str(&s).map_err(serde::de::Error::custom)
}

/// Converts a string like "500ms", "5s", "3m", "1h", "2d" into `Duration`.
fn parse_duration_str(input: &str) -> Result<Duration> {
    let input = input.trim();
    let split = input
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| anyhow!("Missing unit in duration: {}", input))?;
    let (value, unit) = input.split_at(split);

    let value: u64 = value
        .parse()
        .map_err(|_| anyhow!("Invalid number in duration: {}", input))?;

    let factor: u64 = match unit {
        "ms" => return Ok(Duration::from_millis(value)),
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 60 * 60 * 24,
        _ => return Err(anyhow!("Invalid duration unit: {}", unit)),
    };

    value
        .checked_mul(factor)
        .map(Duration::from_secs)
        .ok_or_else(|| anyhow!("Duration out of range: {}", input))
}
