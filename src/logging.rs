//! Logging setup
//!
//! Logs go to stderr so that stdout only carries the matrix output.

use tracing::metadata::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Installs the global subscriber. `RUST_LOG` overrides the default `warn` level.
///
/// The returned guard flushes pending records on drop and must be held
/// until the program exits.
pub fn init(json: bool) -> anyhow::Result<WorkerGuard> {
    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    if json {
        tracing_subscriber::registry()
            .with(layer.json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(layer.with_filter(env_filter))
            .try_init()?;
    }

    Ok(guard)
}
