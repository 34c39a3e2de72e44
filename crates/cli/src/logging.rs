use hugo_utils_core::config::types::ResolvedConfig;
use std::fs::File;
use std::io::{self, IsTerminal};
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Logs go to stderr so stdout only carries `list` output. `RUST_LOG`
/// overrides the configured levels.
pub fn init(cfg: &ResolvedConfig) {
    let logging = &cfg.logging;

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_filter(filter(&logging.level, LevelFilter::WARN));

    let file_layer = logging.file.as_ref().map(|path| {
        let file = File::create(path).unwrap_or_else(|e| {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            std::process::exit(1);
        });
        let (writer, guard) = tracing_appender::non_blocking(file);
        if let Ok(mut g) = LOG_GUARD.lock() {
            *g = Some(guard);
        }

        let level = logging.file_level.as_deref().unwrap_or(&logging.level);
        fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .with_filter(filter(level, LevelFilter::DEBUG))
    });

    tracing_subscriber::registry().with(stderr_layer).with(file_layer).init();
}

fn filter(level: &str, fallback: LevelFilter) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level_or(level, fallback).into())
        .from_env_lossy()
}

/// Level names are case-insensitive; anything unrecognised is `fallback`.
fn level_or(level: &str, fallback: LevelFilter) -> LevelFilter {
    level.parse().unwrap_or(fallback)
}
