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

//! Error type for the file system helpers.

use std::io;
use std::path::PathBuf;

/// Errors raised by the file system helpers.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// The path could not be stat'ed.
    #[error("cannot stat '{}'", path.display())]
    Stat {
        /// The path that was queried.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The path could not be made absolute.
    #[error("cannot resolve '{}' to an absolute path", path.display())]
    Absolute {
        /// The path that was resolved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The running executable could not be located.
    #[error("cannot locate the current executable")]
    CurrentExe(#[source] io::Error),
}
