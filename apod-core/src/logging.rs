use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};
use tokio::task;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Keeps the file writer flushing; drop it only on shutdown.
#[allow(dead_code)]
pub struct LogGuard(WorkerGuard);

/// Parse a configured level, falling back to `info`.
pub fn parse_level(level: &str) -> (LevelFilter, bool) {
    match level.trim().parse::<LevelFilter>() {
        Ok(filter) => (filter, true),
        Err(_) => (LevelFilter::INFO, false),
    }
}

/// Install stdout and daily-rotated file logging.
///
/// `RUST_LOG` directives are layered on top of `level`. Files named
/// `<prefix>.*.log` in `log_dir` older than `retention_days` are removed
/// by an hourly background task.
pub fn init_logging(
    log_dir: impl AsRef<Path>,
    prefix: &str,
    level: &str,
    retention_days: u64,
) -> Result<LogGuard> {
    let log_dir = log_dir.as_ref().to_path_buf();
    let (default_level, level_ok) = parse_level(level);

    let builder = EnvFilter::builder().with_default_directive(default_level.into());
    let rust_log = std::env::var("RUST_LOG").unwrap_or_default();
    let console_filter = builder.clone().parse_lossy(&rust_log);
    let file_filter = builder.parse_lossy(&rust_log);

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(&log_dir)
        .with_context(|| format!("Failed to create log appender in {}", log_dir.display()))?;
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if !level_ok {
        tracing::warn!("Invalid log level '{}', defaulting to 'info'", level);
    }

    let max_age = Duration::from_secs(60 * 60 * 24 * retention_days);
    start_log_cleanup_task(log_dir, prefix.to_string(), max_age);

    Ok(LogGuard(guard))
}

fn start_log_cleanup_task(log_dir: PathBuf, prefix: String, max_age: Duration) {
    task::spawn(async move {
        loop {
            match cleanup_old_logs(&log_dir, &prefix, max_age) {
                Ok(0) => {}
                Ok(removed) => tracing::info!("Removed {} old log file(s)", removed),
                Err(e) => tracing::warn!("Failed to delete old log file: {}", e),
            }
            tokio::time::sleep(CLEANUP_INTERVAL).await;
        }
    });
}

/// Delete `<prefix>*.log` files last modified more than `max_age` ago.
fn cleanup_old_logs(log_dir: &Path, prefix: &str, max_age: Duration) -> std::io::Result<usize> {
    let now = SystemTime::now();
    let mut removed = 0;

    for entry in fs::read_dir(log_dir)? {
        let path = entry?.path();

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !(file_name.starts_with(prefix) && file_name.ends_with(".log")) {
            continue;
        }

        let modified = fs::metadata(&path)?.modified()?;
        if now.duration_since(modified).unwrap_or_default() > max_age {
            fs::remove_file(&path)?;
            tracing::debug!("Old log file deleted: {}", file_name);
            removed += 1;
        }
    }

    Ok(removed)
}
