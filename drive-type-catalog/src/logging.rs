// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_DIR_ENV: &str = "DRIVE_TYPE_CATALOG_LOG_DIR";
const DEFAULT_LOG_PREFIX: &str = "drive-type-catalog.log";

/// Install the process-wide tracing subscriber
///
/// Events go to stderr, filtered by `RUST_LOG` or else `default_directive`.
/// When `DRIVE_TYPE_CATALOG_LOG_DIR` is set they are also written to a daily
/// rolling file there; keep the returned guard alive to flush it. Calling
/// this again after a subscriber is installed does nothing.
pub fn init(default_directive: &str) -> Option<WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let (file_layer, guard) = match log_dir().map(file_writer) {
        Some(Ok((writer, guard))) => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        Some(Err(e)) => {
            eprintln!("drive-type-catalog: failed to initialize file logging: {e}");
            (None, None)
        }
        None => (None, None),
    };

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    match installed {
        Ok(()) => guard,
        Err(_) => None,
    }
}

fn log_dir() -> Option<PathBuf> {
    std::env::var_os(LOG_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
}

fn file_writer(
    dir: PathBuf,
) -> std::io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::daily(&dir, DEFAULT_LOG_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}
