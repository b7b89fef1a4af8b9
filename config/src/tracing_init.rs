//! Tracing subscriber setup shared by the `relation` binary.
//!
//! `RUST_LOG` sets the filter (default `info`). Where logs go depends on [`LogTarget`].

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Where log lines go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Stderr, with ANSI colors. Used by the server.
    Stderr,
    /// Append to the file at `LOG_FILE` when set, otherwise drop everything.
    /// Used by interactive commands so the terminal shows only the UI.
    FileOrSink,
}

/// Keeps the non-blocking file writer alive; drop it at exit to flush.
pub struct TracingGuard(#[allow(dead_code)] Option<WorkerGuard>);

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,hyper_util=off"))
}

/// Installs the global subscriber. Call once, early in `main`.
pub fn init_tracing(target: LogTarget) -> Result<TracingGuard, Box<dyn std::error::Error>> {
    match target {
        LogTarget::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter());
            tracing_subscriber::registry().with(layer).try_init()?;
            Ok(TracingGuard(None))
        }
        LogTarget::FileOrSink => match std::env::var("LOG_FILE") {
            Ok(path) => {
                let path = Path::new(&path);
                let dir = path.parent().filter(|d| !d.as_os_str().is_empty()).unwrap_or(Path::new("."));
                let name = path.file_name().ok_or("LOG_FILE has no file name")?;
                let appender = tracing_appender::rolling::never(dir, name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_filter(filter());
                tracing_subscriber::registry().with(layer).try_init()?;
                tracing::info!(path = %path.display(), "logging to file");
                Ok(TracingGuard(Some(guard)))
            }
            Err(_) => {
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(std::io::sink)
                    .with_filter(filter());
                tracing_subscriber::registry().with(layer).try_init()?;
                Ok(TracingGuard(None))
            }
        },
    }
}
