use std::{fs::OpenOptions, path::Path, sync::Mutex};

use ::time::UtcOffset;
use chrono::DateTime;
use eyre::Result;
use tracing_subscriber::{EnvFilter, fmt::time::OffsetTime};

pub const SEPARATOR: &str = "-----------------------------------------------------------------------------------------------";

pub const PLACEHOLDER_HINT: &str = "press 'G' to enter a block height";

/// Initializes the global subscriber. With `log_file` set, output is appended
/// to that file instead of stderr so it doesn't corrupt the terminal UI.
pub fn init_logs(log_file: Option<&Path>) -> Result<()> {
    let time_format =
        time::format_description::parse("[year]-[month]-[day]T[hour]:[minute]:[second]")?;
    let timer = OffsetTime::new(UtcOffset::UTC, time_format);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_timer(timer)
        .with_env_filter(filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(|e| eyre::eyre!(e))?;
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| eyre::eyre!(e))?;
        }
    }

    Ok(())
}

/// Zero-padded height, `------` when nothing is selected yet.
pub fn format_height(height: Option<u64>) -> String {
    match height {
        Some(height) => format!("{height:06}"),
        None => "------".to_string(),
    }
}

pub fn format_placeholder(height: Option<u64>) -> String {
    format!(
        "height: {} (no block information loaded)",
        format_height(height)
    )
}

pub fn format_size(size: u64) -> String {
    format!("{} bytes ({} KB)", size, size / 1024)
}

/// Integer part of the difficulty with `,` thousands separators.
pub fn format_difficulty(difficulty: f64) -> String {
    let digits = (difficulty.max(0.0) as u128).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("diff: {out}")
}

/// Block time rendered in UTC.
pub fn format_block_time(time: i64) -> String {
    match DateTime::from_timestamp(time, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}

pub fn format_version(version: i64) -> String {
    format!("v{version}")
}
