// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The line writer itself, in an owned and a mutex-guarded flavour.

use crate::level::Level;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{self, Display, Write as _};
use std::io::{self, Write};
use std::panic::Location;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

/// Renders the prefix of a log line: timestamp with milliseconds, level
/// code, process id and call site, followed by a space.
pub fn format_prefix<Tz>(now: &DateTime<Tz>, level: Level, file: &str, line: u32) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut prefix = String::with_capacity(64);
    write_prefix(&mut prefix, now, level, file, line);
    prefix
}

fn write_prefix<Tz>(buf: &mut String, now: &DateTime<Tz>, level: Level, file: &str, line: u32)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    // Writing into a String cannot fail.
    let _ = write!(
        buf,
        "{} {} [{} {}:{}] ",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        level.code(),
        std::process::id(),
        file,
        line
    );
}

/// Reduces a source path to the file stem shown in log lines
/// (`src/net/server.rs` becomes `server`).
pub fn source_name(file: &str) -> &str {
    Path::new(file)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file)
}

/// A logger owned by a single thread. It takes `&mut self` and never locks.
pub struct Logger<W: Write> {
    writer: W,
    level: Level,
    buf: String,
}

impl<W: Write> Logger<W> {
    /// Creates a logger writing to `writer` that drops records below `level`.
    pub fn new(writer: W, level: Level) -> Self {
        Self {
            writer,
            level,
            buf: String::with_capacity(128),
        }
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Changes the minimum level.
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Returns `true` if a record at `level` would be written.
    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level
    }

    /// Writes one record attributed to `file:line`, if `level` is enabled.
    ///
    /// # Errors
    /// Returns the underlying writer's error.
    pub fn write_record(
        &mut self,
        level: Level,
        file: &str,
        line: u32,
        message: &dyn Display,
    ) -> io::Result<()> {
        if !self.enabled(level) {
            return Ok(());
        }
        self.buf.clear();
        write_prefix(&mut self.buf, &Local::now(), level, file, line);
        let _ = writeln!(self.buf, "{message}");
        self.writer.write_all(self.buf.as_bytes())
    }

    /// Writes one record attributed to `location`. Write errors are ignored.
    pub fn log_at(&mut self, level: Level, location: &Location<'_>, message: impl Display) {
        let _ = self.write_record(
            level,
            source_name(location.file()),
            location.line(),
            &message,
        );
    }

    /// Writes one record attributed to the caller.
    #[track_caller]
    pub fn log(&mut self, level: Level, message: impl Display) {
        self.log_at(level, Location::caller(), message);
    }

    /// Logs at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&mut self, message: impl Display) {
        self.log_at(Level::Debug, Location::caller(), message);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn info(&mut self, message: impl Display) {
        self.log_at(Level::Info, Location::caller(), message);
    }

    /// Logs at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&mut self, message: impl Display) {
        self.log_at(Level::Warn, Location::caller(), message);
    }

    /// Logs at [`Level::Error`].
    #[track_caller]
    pub fn error(&mut self, message: impl Display) {
        self.log_at(Level::Error, Location::caller(), message);
    }

    /// Logs at [`Level::Fatal`]. The process keeps running.
    #[track_caller]
    pub fn fatal(&mut self, message: impl Display) {
        self.log_at(Level::Fatal, Location::caller(), message);
    }

    /// Pushes buffered output to the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Borrows the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consumes the logger and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> fmt::Debug for Logger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

/// A logger that may be shared between threads. Each record is written
/// under a mutex so lines never interleave.
pub struct SharedLogger<W: Write + Send> {
    inner: Mutex<Logger<W>>,
}

impl<W: Write + Send> SharedLogger<W> {
    /// Creates a shared logger writing to `writer`.
    pub fn new(writer: W, level: Level) -> Self {
        Self::from_logger(Logger::new(writer, level))
    }

    /// Wraps an existing logger.
    pub fn from_logger(logger: Logger<W>) -> Self {
        Self {
            inner: Mutex::new(logger),
        }
    }

    /// The current minimum level.
    pub fn level(&self) -> Level {
        self.inner
            .lock()
            .map(|logger| logger.level())
            .unwrap_or_default()
    }

    /// Changes the minimum level.
    pub fn set_level(&self, level: Level) {
        if let Ok(mut logger) = self.inner.lock() {
            logger.set_level(level);
        }
    }

    /// Writes one record attributed to `location`.
    pub fn log_at(&self, level: Level, location: &Location<'_>, message: impl Display) {
        if let Ok(mut logger) = self.inner.lock() {
            logger.log_at(level, location, message);
        }
    }

    /// Writes one record attributed to the caller.
    #[track_caller]
    pub fn log(&self, level: Level, message: impl Display) {
        self.log_at(level, Location::caller(), message);
    }

    /// Logs at [`Level::Debug`].
    #[track_caller]
    pub fn debug(&self, message: impl Display) {
        self.log_at(Level::Debug, Location::caller(), message);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn info(&self, message: impl Display) {
        self.log_at(Level::Info, Location::caller(), message);
    }

    /// Logs at [`Level::Warn`].
    #[track_caller]
    pub fn warn(&self, message: impl Display) {
        self.log_at(Level::Warn, Location::caller(), message);
    }

    /// Logs at [`Level::Error`].
    #[track_caller]
    pub fn error(&self, message: impl Display) {
        self.log_at(Level::Error, Location::caller(), message);
    }

    /// Logs at [`Level::Fatal`]. The process keeps running.
    #[track_caller]
    pub fn fatal(&self, message: impl Display) {
        self.log_at(Level::Fatal, Location::caller(), message);
    }

    /// Pushes buffered output to the underlying writer.
    pub fn flush(&self) -> io::Result<()> {
        match self.inner.lock() {
            Ok(mut logger) => logger.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }

    /// Consumes the shared logger and returns the inner one.
    pub fn into_inner(self) -> Logger<W> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> fmt::Debug for SharedLogger<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedLogger")
            .field("level", &self.level())
            .finish_non_exhaustive()
    }
}

impl<W: Write + Send> log::Log for SharedLogger<W> {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        Level::from(metadata.level()) >= self.level()
    }

    fn log(&self, record: &log::Record<'_>) {
        let file = record.file().unwrap_or_else(|| record.target());
        let line = record.line().unwrap_or(0);
        if let Ok(mut logger) = self.inner.lock() {
            let _ = logger.write_record(
                Level::from(record.level()),
                source_name(file),
                line,
                record.args(),
            );
        }
    }

    fn flush(&self) {
        let _ = SharedLogger::flush(self);
    }
}
