//! Logging setup for the browser.
//!
//! # Design
//! - `tracing` everywhere; one fmt subscriber installed at boot.
//! - Each formatted event is buffered and handed to a line sink on drop,
//!   which in the browser forwards to the console at the event's level.
//! - Timestamps are left to the console; the wasm target has no clock.

use crate::core::config::LOG_DIRECTIVE;
use std::io;
use thiserror::Error;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default logging directive when `AUXSHARE_LOG` is not provided.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Receives one formatted log line with its level.
pub type LineSink = fn(Level, &str);

/// Errors raised while installing logging.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Another global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig<'a> {
    /// Filter directive, e.g. `info` or `auxshare_ui=debug`.
    pub level: &'a str,
}

impl Default for LoggingConfig<'_> {
    fn default() -> Self {
        Self {
            level: LOG_DIRECTIVE.unwrap_or(DEFAULT_LOG_LEVEL),
        }
    }
}

/// Parse a filter directive, falling back to [`DEFAULT_LOG_LEVEL`] when invalid.
#[must_use]
pub fn build_env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Buffers one formatted event and emits it when dropped.
pub struct LineWriter {
    level: Level,
    buffer: Vec<u8>,
    sink: LineSink,
}

impl LineWriter {
    /// Writer for a single event at `level`.
    #[must_use]
    pub const fn new(level: Level, sink: LineSink) -> Self {
        Self {
            level,
            buffer: Vec::new(),
            sink,
        }
    }
}

impl io::Write for LineWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for LineWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if !line.is_empty() {
            (self.sink)(self.level, line);
        }
    }
}

/// [`MakeWriter`] producing a [`LineWriter`] per event.
#[derive(Clone, Copy)]
pub struct MakeLineWriter {
    sink: LineSink,
}

impl MakeLineWriter {
    /// Route every formatted event to `sink`.
    #[must_use]
    pub const fn new(sink: LineSink) -> Self {
        Self { sink }
    }
}

impl<'a> MakeWriter<'a> for MakeLineWriter {
    type Writer = LineWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LineWriter::new(Level::INFO, self.sink)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        LineWriter::new(*meta.level(), self.sink)
    }
}

/// Install the global subscriber writing through `sink`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig<'_>, sink: LineSink) -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(build_env_filter(config.level))
        .with(
            fmt::layer()
                .with_writer(MakeLineWriter::new(sink))
                .with_ansi(false)
                .without_time()
                .with_target(false),
        )
        .try_init()
        .map_err(|err| TelemetryError::Install(err.to_string()))
}

/// Line sink writing to the browser console.
#[cfg(target_arch = "wasm32")]
pub fn console_sink(level: Level, line: &str) {
    if level == Level::ERROR {
        gloo::console::error!(line);
    } else if level == Level::WARN {
        gloo::console::warn!(line);
    } else if level == Level::INFO {
        gloo::console::info!(line);
    } else {
        gloo::console::debug!(line);
    }
}
