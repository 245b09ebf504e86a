use std::path::PathBuf;

use color_eyre::Result;
use tracing::{Level, debug};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config;

lazy_static::lazy_static! {
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", config::PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

/// Filter used when no level is forced: `RUST_LOG`, then `TODOTXT_CORE_LOGLEVEL`, then `INFO`.
fn filter_from_env() -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(Level::INFO.into());
    builder
        .try_from_env()
        .or_else(|_| builder.with_env_var(LOG_ENV.clone()).from_env())
        .unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy()
        })
}

/// Sends `tracing` events to a log file in the data directory and returns its path.
/// `level` overrides the environment.
///
/// # Errors
///
/// Fails if the log file can't be created or if a global subscriber is already set.
pub fn init(level: Option<Level>) -> Result<PathBuf> {
    let directory = config::get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_path = directory.join(LOG_FILE.as_str());
    let log_file = std::fs::File::create(&log_path)?;

    let env_filter = level.map_or_else(filter_from_env, |level| {
        EnvFilter::builder()
            .with_default_directive(level.into())
            .parse_lossy("")
    });

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;

    debug!("Logging initialized, writing to {}", log_path.display());
    Ok(log_path)
}
