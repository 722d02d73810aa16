/*
[INPUT]:  Log level filter, optional log directory, shared log buffer
[OUTPUT]: Installed tracing subscriber; bounded in-memory log lines for the TUI
[POS]:    Logging layer - tracing setup for TUI and plain CLI modes
[UPDATE]: When changing log sinks, formats, or buffer capacity
*/

use std::collections::VecDeque;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_BUFFER_CAPACITY: usize = 2000;
pub const LOG_FILE_NAME: &str = "hecate-dashboard.log";

pub type LogBufferHandle = Arc<StdMutex<LogBuffer>>;

#[derive(Debug, Default)]
pub struct LogBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity,
        }
    }

    pub fn handle(capacity: usize) -> LogBufferHandle {
        Arc::new(StdMutex::new(Self::new(capacity)))
    }

    pub fn push_line(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() >= self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    /// The last `count` lines, oldest first.
    pub fn tail(&self, count: usize) -> Vec<String> {
        let start = self.lines.len().saturating_sub(count);
        self.lines.iter().skip(start).cloned().collect()
    }
}

#[derive(Clone)]
pub struct LogWriterFactory {
    buffer: LogBufferHandle,
}

impl LogWriterFactory {
    pub fn new(buffer: LogBufferHandle) -> Self {
        Self { buffer }
    }
}

pub struct LogWriter {
    buffer: LogBufferHandle,
    partial: Vec<u8>,
}

impl LogWriter {
    /// Decode one complete line; a multi-byte char split across writes is
    /// whole by now.
    fn push(&self, bytes: &[u8]) {
        let line = String::from_utf8_lossy(bytes);
        let mut guard = self.buffer.lock().expect("log buffer lock");
        guard.push_line(line.trim_end_matches('\r').to_string());
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.partial.extend_from_slice(buf);
        while let Some(pos) = self.partial.iter().position(|byte| *byte == b'\n') {
            let line: Vec<u8> = self.partial.drain(..=pos).collect();
            self.push(&line[..pos]);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.partial.is_empty() {
            let line = std::mem::take(&mut self.partial);
            self.push(&line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            buffer: self.buffer.clone(),
            partial: Vec::new(),
        }
    }
}

/// TUI mode: log lines go to the in-memory buffer and, when `log_dir` is
/// set, to a daily rolling file. Keep the returned guard alive until exit.
pub fn init_tui_tracing(
    log_level: &str,
    buffer: LogBufferHandle,
    log_dir: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(LogWriterFactory::new(buffer));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

/// Plain CLI mode: log to stderr.
pub fn init_stderr_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_buffer_drops_oldest() {
        let mut buffer = LogBuffer::new(2);
        buffer.push_line("a".to_string());
        buffer.push_line("b".to_string());
        buffer.push_line("c".to_string());
        assert_eq!(buffer.snapshot(), vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut buffer = LogBuffer::new(0);
        buffer.push_line("a".to_string());
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_tail() {
        let mut buffer = LogBuffer::new(10);
        for line in ["1", "2", "3"] {
            buffer.push_line(line.to_string());
        }
        assert_eq!(buffer.tail(2), vec!["2".to_string(), "3".to_string()]);
        assert_eq!(buffer.tail(10).len(), 3);
    }

    #[test]
    fn test_writer_splits_lines_and_flushes_partial() {
        let handle = LogBuffer::handle(10);
        let factory = LogWriterFactory::new(handle.clone());
        {
            let mut writer = factory.make_writer();
            writer.write_all(b"first\r\nsecond\nthi").unwrap();
            writer.write_all(b"rd").unwrap();
        }
        let lines = handle.lock().unwrap().snapshot();
        assert_eq!(lines, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_writer_keeps_multibyte_char_split_across_writes() {
        let handle = LogBuffer::handle(10);
        let factory = LogWriterFactory::new(handle.clone());
        let text = "creating task Übergabe…\n".as_bytes();
        let split = text.iter().position(|byte| *byte == 0xC3).unwrap() + 1;
        {
            let mut writer = factory.make_writer();
            writer.write_all(&text[..split]).unwrap();
            writer.write_all(&text[split..]).unwrap();
        }
        let lines = handle.lock().unwrap().snapshot();
        assert_eq!(lines, vec!["creating task Übergabe…"]);
    }
}
