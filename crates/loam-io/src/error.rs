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

//! Error type for the file helpers.

use std::io;
use std::path::PathBuf;

/// Errors raised by the file helpers. Every variant names the file involved.
#[derive(Debug, thiserror::Error)]
pub enum FioError {
    /// The file could not be opened.
    #[error("failed to open '{}'", path.display())]
    Open {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Reading from the file failed.
    #[error("failed to read '{}'", path.display())]
    Read {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing or syncing the file failed.
    #[error("failed to write '{}'", path.display())]
    Write {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line was not valid UTF-8.
    #[error("line {line} of '{}' is not valid UTF-8", path.display())]
    InvalidUtf8 {
        /// The file path.
        path: PathBuf,
        /// One-based number of the offending line.
        line: usize,
    },
}

impl FioError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FioError::Open {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FioError::Read {
            path: path.into(),
            source,
        }
    }
}
