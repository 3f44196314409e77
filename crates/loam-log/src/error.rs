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

//! Errors raised while configuring or installing a logger.

use std::io;
use std::path::PathBuf;

/// Errors raised while configuring or installing a logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The log file named by the configuration could not be opened.
    #[error("failed to open log file '{}'", path.display())]
    Open {
        /// The log file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The configuration file could not be read.
    #[error("failed to read logger config '{}'", path.display())]
    ReadConfig {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The configuration is not valid JSON for [`crate::LoggerConfig`].
    #[error("invalid logger config: {0}")]
    Config(#[from] serde_json::Error),
    /// [`crate::LoggerConfig::install`] was already called in this process.
    #[error("logger has already been initialized")]
    AlreadyInitialized,
    /// A process-wide logger is reachable from every thread and needs the
    /// shared lock policy.
    #[error("a process-wide logger requires the shared lock policy")]
    UnsynchronizedGlobal,
    /// Another `log` implementation was installed first.
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}
