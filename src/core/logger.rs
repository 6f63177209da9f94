//! Verbosity-gated match logger.
//!
//! Each match owns a `GameLogger`. Messages below the configured verbosity are
//! dropped; the rest go to stdout, to an in-memory buffer, or both. Logging
//! takes `&self` so resolvers can log while holding shared references.
//!
//! The buffer is bounded: once it holds `capacity` entries the oldest entry is
//! evicted for each new one.

use serde::{Deserialize, Serialize};
use std::cell::{Ref, RefCell};
use std::collections::VecDeque;

/// Entries kept in memory before the oldest are evicted.
pub const DEFAULT_LOG_CAPACITY: usize = 4096;

/// How much the engine reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Verbosity {
    /// Nothing is recorded.
    Silent,
    /// Rejected operations only.
    Minimal,
    /// Match lifecycle and successful plays.
    #[default]
    Normal,
    /// Every draw, spend and effect.
    Verbose,
}

/// Output destination for log messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OutputMode {
    /// Print to stdout only
    Stdout,
    /// Capture only to in-memory buffer (no stdout)
    #[default]
    Memory,
    /// Both stdout and in-memory buffer
    Both,
}

/// A captured log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub level: Verbosity,
    /// Short source tag, e.g. "match", "deck", "effect", "rules".
    pub category: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct GameLogger {
    verbosity: Verbosity,
    output_mode: OutputMode,
    capacity: usize,
    buffer: RefCell<VecDeque<LogEntry>>,
}

impl Default for GameLogger {
    fn default() -> Self {
        Self::new(Verbosity::default(), OutputMode::default())
    }
}

impl Clone for GameLogger {
    fn clone(&self) -> Self {
        Self {
            verbosity: self.verbosity,
            output_mode: self.output_mode,
            capacity: self.capacity,
            buffer: RefCell::new(self.buffer.borrow().clone()),
        }
    }
}

impl GameLogger {
    pub fn new(verbosity: Verbosity, output_mode: OutputMode) -> Self {
        Self::with_capacity(verbosity, output_mode, DEFAULT_LOG_CAPACITY)
    }

    /// A logger keeping at most `capacity` entries in memory.
    pub fn with_capacity(verbosity: Verbosity, output_mode: OutputMode, capacity: usize) -> Self {
        Self {
            verbosity,
            output_mode,
            capacity,
            buffer: RefCell::new(VecDeque::new()),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_mode
    }

    pub fn set_output_mode(&mut self, mode: OutputMode) {
        self.output_mode = mode;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Shrinking below the current length evicts the oldest entries.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        let buffer = self.buffer.get_mut();
        while buffer.len() > capacity {
            buffer.pop_front();
        }
    }

    /// Check whether a message at `level` would be kept.
    ///
    /// Callers building expensive messages should test this first.
    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && level <= self.verbosity
    }

    pub fn log(&self, level: Verbosity, category: &'static str, message: impl Into<String>) {
        if !self.enabled(level) {
            return;
        }
        let message = message.into();

        if matches!(self.output_mode, OutputMode::Stdout | OutputMode::Both) {
            println!("[{}] {}", category, message);
        }
        if matches!(self.output_mode, OutputMode::Memory | OutputMode::Both) {
            if self.capacity == 0 {
                return;
            }
            let mut buffer = self.buffer.borrow_mut();
            if buffer.len() == self.capacity {
                buffer.pop_front();
            }
            buffer.push_back(LogEntry {
                level,
                category,
                message,
            });
        }
    }

    #[inline]
    pub fn minimal(&self, category: &'static str, message: impl Into<String>) {
        self.log(Verbosity::Minimal, category, message);
    }

    #[inline]
    pub fn normal(&self, category: &'static str, message: impl Into<String>) {
        self.log(Verbosity::Normal, category, message);
    }

    #[inline]
    pub fn verbose(&self, category: &'static str, message: impl Into<String>) {
        self.log(Verbosity::Verbose, category, message);
    }

    /// Read access to captured entries, oldest first.
    pub fn logs(&self) -> Ref<'_, VecDeque<LogEntry>> {
        self.buffer.borrow()
    }

    pub fn clear(&self) {
        self.buffer.borrow_mut().clear();
    }
}
