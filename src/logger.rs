//! Application log
//!
//! Records made through `app_log!` are kept in a bounded in-process ring so
//! the binary can print them after a demonstration (`--show-log`), and are
//! also forwarded to the `log` facade for the stderr subscriber.

use crate::error::NexusError;
use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Entries kept before the oldest are overwritten
const LOG_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl From<u8> for LogLevel {
    fn from(value: u8) -> Self {
        match value {
            0 => LogLevel::Debug,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

/// Accepts `tracing`-style filter names, case-insensitively
impl FromStr for LogLevel {
    type Err = NexusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" | "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(NexusError::ConfigError(format!("Unknown log level: {}", other))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    pub source: String,
    /// Structured fields attached by `log_with_context`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<HashMap<String, serde_json::Value>>,
}

/// Fixed-size ring; once full, each push replaces the oldest entry
struct LogRing {
    entries: Vec<LogEntry>,
    oldest: usize,
    capacity: usize,
}

impl LogRing {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            oldest: 0,
            capacity,
        }
    }

    fn push(&mut self, entry: LogEntry) {
        if self.entries.len() < self.capacity {
            self.entries.push(entry);
            return;
        }
        self.entries[self.oldest] = entry;
        self.oldest = (self.oldest + 1) % self.capacity;
    }

    /// Oldest first
    fn snapshot(&self) -> Vec<LogEntry> {
        let (newer, older) = self.entries.split_at(self.oldest);
        older.iter().chain(newer).cloned().collect()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.oldest = 0;
    }
}

enum Command {
    Record(LogEntry),
    Snapshot(Sender<Vec<LogEntry>>),
    Clear,
}

/// Handle to the ring owned by a background thread
pub struct Logger {
    commands: Sender<Command>,
    min_level: Arc<AtomicU8>,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (commands, inbox) = bounded(capacity);
        std::thread::spawn(move || Self::serve(inbox, capacity));

        Self {
            commands,
            min_level: Arc::new(AtomicU8::new(LogLevel::Debug as u8)),
        }
    }

    fn serve(inbox: Receiver<Command>, capacity: usize) {
        let mut ring = LogRing::new(capacity);
        for command in inbox {
            match command {
                Command::Record(entry) => ring.push(entry),
                Command::Snapshot(reply) => {
                    let _ = reply.send(ring.snapshot());
                }
                Command::Clear => ring.clear(),
            }
        }
    }

    fn record(
        &self,
        level: LogLevel,
        message: &str,
        source: &str,
        context: Option<HashMap<String, serde_json::Value>>,
    ) {
        if (level as u8) < self.min_level.load(Ordering::Relaxed) {
            return;
        }
        let entry = LogEntry {
            timestamp: Utc::now(),
            level,
            message: message.to_string(),
            source: source.to_string(),
            context,
        };
        // Never blocks; a full queue drops the entry
        let _ = self.commands.try_send(Command::Record(entry));
    }

    pub fn log(&self, level: LogLevel, message: &str, source: &str) {
        self.record(level, message, source, None);
    }

    pub fn log_with_context(
        &self,
        level: LogLevel,
        message: &str,
        source: &str,
        context: HashMap<String, serde_json::Value>,
    ) {
        self.record(level, message, source, Some(context));
    }

    pub fn set_min_level(&self, level: LogLevel) {
        self.min_level.store(level as u8, Ordering::Relaxed);
    }

    pub fn get_min_level(&self) -> LogLevel {
        LogLevel::from(self.min_level.load(Ordering::Relaxed))
    }

    /// Everything currently buffered, oldest first
    pub fn get_logs(&self) -> Vec<LogEntry> {
        let (reply, response) = bounded(1);
        if self.commands.send(Command::Snapshot(reply)).is_err() {
            return Vec::new();
        }
        response.recv().unwrap_or_default()
    }

    pub fn clear_logs(&self) {
        let _ = self.commands.send(Command::Clear);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    pub static ref LOGGER: Logger = Logger::new();
}

/// Install the stderr subscriber used by the binary
///
/// `NEXUS_LOG` takes precedence over `default_filter`. Records emitted through
/// the `log` facade reach the subscriber through its `tracing-log` bridge.
pub fn init_tracing(default_filter: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_env("NEXUS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Record into `LOGGER` and forward to the `log` facade
#[macro_export]
macro_rules! app_log {
    (target: $source:expr, $level:expr, $($arg:tt)*) => {
        {
            let level: $crate::logger::LogLevel = $level;
            let message = format!($($arg)*);
            $crate::logger::LOGGER.log(level, &message, $source);
            match level {
                $crate::logger::LogLevel::Error => ::log::error!(target: $source, "{}", message),
                $crate::logger::LogLevel::Warn => ::log::warn!(target: $source, "{}", message),
                $crate::logger::LogLevel::Info => ::log::info!(target: $source, "{}", message),
                $crate::logger::LogLevel::Debug => ::log::debug!(target: $source, "{}", message),
            }
        }
    };
    ($level:expr, $($arg:tt)*) => {
        $crate::app_log!(target: "nexus", $level, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::Info,
            message: message.to_string(),
            source: "test".to_string(),
            context: None,
        }
    }

    #[test]
    fn test_ring_wraps_oldest_first() {
        let mut buffer = LogRing::new(3);
        for i in 0..5 {
            buffer.push(entry(&format!("m{}", i)));
        }
        let messages: Vec<String> = buffer.snapshot().into_iter().map(|e| e.message).collect();
        assert_eq!(messages, vec!["m2", "m3", "m4"]);
    }

    #[test]
    fn test_ring_clear() {
        let mut buffer = LogRing::new(2);
        buffer.push(entry("a"));
        buffer.clear();
        assert!(buffer.snapshot().is_empty());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("debug".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("loud".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_logger_min_level_filters() {
        let logger = Logger::with_capacity(16);
        logger.set_min_level(LogLevel::Warn);
        logger.log(LogLevel::Info, "dropped", "test");
        logger.log(LogLevel::Error, "kept", "test");

        let logs = logger.get_logs();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].message, "kept");
        assert_eq!(logger.get_min_level(), LogLevel::Warn);
    }

    #[test]
    fn test_logger_clear() {
        let logger = Logger::with_capacity(16);
        logger.log(LogLevel::Info, "one", "test");
        logger.clear_logs();
        assert!(logger.get_logs().is_empty());
    }

    #[test]
    fn test_log_with_context() {
        let logger = Logger::with_capacity(16);
        let mut context = HashMap::new();
        context.insert("stage".to_string(), serde_json::json!("Input"));
        logger.log_with_context(LogLevel::Info, "stage done", "pipeline", context);

        let logs = logger.get_logs();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].context.is_some());
    }
}
