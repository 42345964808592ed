//! Installing the `tracing` subscriber described by [`LoggingConfig`].
//!
//! Every formatted line lands in an in-memory [`LogBuffer`]; stderr and an append-only
//! file are optional extra sinks.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::LoggingConfig;

/// The most recent formatted log lines, oldest first.
#[derive(Debug)]
pub struct LogBuffer {
    capacity: usize,
    lines: parking_lot::Mutex<VecDeque<String>>,
}

impl LogBuffer {
    /// A zero capacity is bumped to one line.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: parking_lot::Mutex::new(VecDeque::with_capacity(capacity.min(1_024))),
        }
    }

    pub fn push_line(&self, line: impl Into<String>) {
        let mut lines = self.lines.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line.into());
    }

    pub fn last_lines(&self, n: usize) -> Vec<String> {
        let lines = self.lines.lock();
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }
}

// `Arc<LogBuffer>` is a `MakeWriter` through this impl. The fmt layer hands over one
// complete event per write.
impl Write for &LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        for line in text.lines().filter(|line| !line.is_empty()) {
            self.push_line(line);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A subscriber built from a [`LoggingConfig`], not yet installed.
pub(crate) struct LoggingSetup {
    pub(crate) subscriber: Box<dyn tracing::Subscriber + Send + Sync>,
    /// The configured log file, when it could not be opened.
    pub(crate) unopened_file: Option<PathBuf>,
}

impl LoggingSetup {
    pub(crate) fn new(logging: &LoggingConfig, filter: EnvFilter, buffer: Arc<LogBuffer>) -> Self {
        let mut unopened_file = None;
        let file = match &logging.file {
            Some(path) => match open_for_append(path) {
                Ok(file) => Some(file),
                Err(_) => {
                    unopened_file = Some(path.clone());
                    None
                }
            },
            None => None,
        };

        let mut writer = BoxMakeWriter::new(buffer);
        if logging.stderr {
            writer = BoxMakeWriter::new(writer.and(io::stderr));
        }
        if let Some(file) = file {
            writer = BoxMakeWriter::new(writer.and(Mutex::new(file)));
        }

        let fmt = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false);
        let layer: Box<dyn tracing_subscriber::Layer<_> + Send + Sync> = if logging.json {
            fmt.json().boxed()
        } else {
            fmt.boxed()
        };

        Self {
            subscriber: Box::new(tracing_subscriber::registry().with(filter).with(layer)),
            unopened_file,
        }
    }
}

fn open_for_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn warn_file_disabled(path: &Path) {
    tracing::warn!(
        target: "jtc_config",
        path = %path.display(),
        "failed to open log file; file logging disabled"
    );
}

static LOG_BUFFER: OnceLock<Arc<LogBuffer>> = OnceLock::new();

/// Install the global subscriber for `logging` and return its log buffer.
///
/// The filter is the configured level merged with `RUST_LOG`. Only the first call installs
/// anything; later calls return the same buffer and ignore their argument.
pub fn init_tracing(logging: &LoggingConfig) -> Arc<LogBuffer> {
    LOG_BUFFER
        .get_or_init(|| {
            let buffer = Arc::new(LogBuffer::new(logging.buffer_lines));
            let setup = LoggingSetup::new(logging, logging.env_filter(), buffer.clone());
            if tracing::subscriber::set_global_default(setup.subscriber).is_ok() {
                if let Some(path) = &setup.unopened_file {
                    warn_file_disabled(path);
                }
            }
            buffer
        })
        .clone()
}
