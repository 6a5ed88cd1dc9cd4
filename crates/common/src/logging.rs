//! Logging and tracing initialization.
//!
//! Logs go to stderr unless a log file is configured: stdout carries the
//! edited cast when no `--out` file is given, so nothing else may write there.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{CasteditError, CasteditResult};

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` takes precedence over `config.level`. Installing a second
/// subscriber is a no-op, so tests may call this repeatedly.
pub fn init_logging(config: &LoggingConfig) -> CasteditResult<()> {
    match &config.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CasteditError::path_io(path, e))?;
            install(config, Mutex::new(file));
        }
        None => install(config, std::io::stderr),
    }
    Ok(())
}

fn install<W>(config: &LoggingConfig, writer: W)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(config.file.is_none());

    if config.json {
        let subscriber = builder.json().finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = builder
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default()).ok();
}
