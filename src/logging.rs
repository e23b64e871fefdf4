use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory the binaries write their logs to.
pub const LOG_DIR: &str = "logs";

/// Installs a global subscriber that writes to a daily rolling file under `dir`.
///
/// The level comes from `RUST_LOG` and defaults to `info`. Keep the returned guard alive
/// for as long as logs should be flushed.
pub fn init_tracing(dir: &str, file_prefix: &str) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(dir, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    guard
}
