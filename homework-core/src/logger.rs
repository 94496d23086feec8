//! Tracing setup for the bot process. Every event goes to stdout and to an
//! append-only log file in the same plain-text layout.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    fmt::writer::MakeWriterExt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Filter used when `RUST_LOG` is unset: debug for this workspace, info for dependencies.
pub const DEFAULT_LOG_FILTER: &str = "info,homework_core=debug,practicum_client=debug,homework_bot=debug";

/// Wall-clock stamp at the head of each line, e.g. `2026-10-16 09:30:00`.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Opens the log file for appending, creating parent directories as needed.
pub fn open_log_file(log_file_path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(log_file_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)
}

/// Installs the process-wide subscriber writing to stdout and `log_file_path`.
///
/// Lines look like `2026-10-16 09:30:00 ERROR homework_bot::poller: Сбой в работе бота: ... error=...`.
/// `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`], so call this after the `.env` file is loaded.
/// Fails if the file cannot be opened or a global subscriber is already set.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let writer = io::stdout.and(Arc::new(open_log_file(log_file_path)?));

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(DEFAULT_LOG_FILTER),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}
