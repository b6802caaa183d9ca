//! Tracing subscriber setup.

use crate::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "employee-registry.log";

/// Install the global subscriber: stderr always, plus a daily rolling file
/// when a log directory is configured. Keep the returned guard alive until
/// exit so buffered file output is flushed.
pub fn init(verbose: bool, config: &LoggingConfig) -> Option<WorkerGuard> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(verbose, directives.as_deref());
    let console = fmt::layer().with_writer(std::io::stderr);

    match &config.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            tracing::debug!("File logging to {:?}", dir);
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(console).init();
            None
        }
    }
}

/// `RUST_LOG`-style directives when given, otherwise `info` (`debug` when verbose).
fn env_filter(verbose: bool, directives: Option<&str>) -> EnvFilter {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(env_filter(false, None).to_string(), "info");
        assert_eq!(env_filter(true, None).to_string(), "debug");
        assert_eq!(env_filter(false, Some("")).to_string(), "info");
    }

    #[test]
    fn test_rust_log_overrides_level() {
        assert_eq!(env_filter(false, Some("warn")).to_string(), "warn");
        assert_eq!(env_filter(false, Some("debug")).to_string(), "debug");
        assert_eq!(env_filter(true, Some("error")).to_string(), "error");
    }

    #[test]
    fn test_target_directives_kept() {
        let filter = env_filter(false, Some("sqlx=debug")).to_string();
        assert!(filter.contains("sqlx=debug"), "{filter}");
        assert!(!filter.contains("info"), "{filter}");
    }
}
