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

//! Explicit logger configuration and one-time installation into `log`.

use crate::error::LogError;
use crate::level::Level;
use crate::logger::{Logger, SharedLogger};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// The writer type produced by [`LoggerConfig::open`].
pub type BoxWriter = Box<dyn Write + Send>;

static GLOBAL: OnceLock<&'static SharedLogger<BoxWriter>> = OnceLock::new();

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "path")]
pub enum LogTarget {
    /// Standard output.
    #[default]
    Stdout,
    /// Standard error.
    Stderr,
    /// A file, created if missing and appended to.
    File(PathBuf),
}

/// Whether the logger guards its writer with a mutex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockPolicy {
    /// Mutex-guarded, usable from any thread.
    #[default]
    Shared,
    /// No locking. The logger has a single owner.
    Unsynchronized,
}

/// Everything needed to build a logger.
///
/// ```
/// use loam_log::{Level, LoggerConfig};
///
/// let config = LoggerConfig::from_json(r#"{ "level": "warn", "target": { "kind": "stderr" } }"#)?;
/// assert_eq!(config.level, Level::Warn);
/// # Ok::<(), loam_log::LogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Destination of the log lines.
    pub target: LogTarget,
    /// Records below this level are dropped.
    pub level: Level,
    /// Locking strategy.
    pub lock: LockPolicy,
}

/// A logger built from a [`LoggerConfig`], in the flavour its lock policy asks for.
#[derive(Debug)]
pub enum ConfiguredLogger {
    /// Built with [`LockPolicy::Shared`].
    Shared(SharedLogger<BoxWriter>),
    /// Built with [`LockPolicy::Unsynchronized`].
    Unsynchronized(Logger<BoxWriter>),
}

impl LoggerConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, LogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LogError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Serializes the configuration as pretty JSON.
    pub fn to_json(&self) -> Result<String, LogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Opens the configured target.
    pub fn open(&self) -> Result<BoxWriter, LogError> {
        match &self.target {
            LogTarget::Stdout => Ok(Box::new(io::stdout())),
            LogTarget::Stderr => Ok(Box::new(io::stderr())),
            LogTarget::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|source| LogError::Open {
                        path: path.clone(),
                        source,
                    })?;
                Ok(Box::new(file))
            }
        }
    }

    /// Opens the target and builds a logger honouring the lock policy.
    pub fn build(&self) -> Result<ConfiguredLogger, LogError> {
        let writer = self.open()?;
        Ok(match self.lock {
            LockPolicy::Shared => ConfiguredLogger::Shared(SharedLogger::new(writer, self.level)),
            LockPolicy::Unsynchronized => {
                ConfiguredLogger::Unsynchronized(Logger::new(writer, self.level))
            }
        })
    }

    /// Builds a shared logger and registers it with the `log` facade.
    ///
    /// Meant to be called once from the host's startup sequence.
    ///
    /// # Errors
    /// * [`LogError::UnsynchronizedGlobal`] if the lock policy is not shared.
    /// * [`LogError::AlreadyInitialized`] on a second call.
    /// * [`LogError::SetLogger`] if another `log` implementation is installed.
    pub fn install(&self) -> Result<&'static SharedLogger<BoxWriter>, LogError> {
        if self.lock != LockPolicy::Shared {
            return Err(LogError::UnsynchronizedGlobal);
        }
        if GLOBAL.get().is_some() {
            return Err(LogError::AlreadyInitialized);
        }

        // Only a logger the facade accepted is recorded in `GLOBAL`. A
        // rejected one is leaked.
        let logger: &'static SharedLogger<BoxWriter> =
            Box::leak(Box::new(SharedLogger::new(self.open()?, self.level)));
        if let Err(err) = log::set_logger(logger) {
            return Err(match GLOBAL.get() {
                Some(_) => LogError::AlreadyInitialized,
                None => err.into(),
            });
        }
        GLOBAL
            .set(logger)
            .map_err(|_| LogError::AlreadyInitialized)?;

        // Filtering happens in the logger so `set_level` keeps working.
        log::set_max_level(log::LevelFilter::Trace);
        log::debug!("Logger installed at level {:?}.", self.level);
        Ok(logger)
    }
}

/// The logger registered by [`LoggerConfig::install`], if any.
pub fn global() -> Option<&'static SharedLogger<BoxWriter>> {
    GLOBAL.get().copied()
}
