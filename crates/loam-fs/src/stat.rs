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

//! File metadata and recursive directory traversal.

use crate::error::FsError;
use crate::path::{absolute, dir_name};
use std::fs::{self, Metadata};
use std::path::{Path, PathBuf, MAIN_SEPARATOR};
use walkdir::WalkDir;

/// A stat record enriched with the different spellings of its path.
#[derive(Debug, Clone)]
pub struct FileStat {
    /// The path as given to [`FileStat::new`].
    pub name: PathBuf,
    /// The absolute, cleaned path.
    pub abs: PathBuf,
    /// The last component of `name`.
    pub base: String,
    /// The absolute directory containing the file.
    pub parent: PathBuf,
    /// `abs` split after every separator, so `/a/b` gives `["/", "a/", "b"]`.
    pub seps: Vec<String>,
    /// Metadata of the file, following symlinks.
    pub metadata: Metadata,
}

impl FileStat {
    /// Stats `path` and resolves its absolute form.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FsError> {
        let path = path.as_ref();
        let metadata = fs::metadata(path).map_err(|source| FsError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        let abs = absolute(path)?;

        let base = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => path.to_string_lossy().into_owned(),
        };
        let seps = abs
            .to_string_lossy()
            .split_inclusive(MAIN_SEPARATOR)
            .map(str::to_owned)
            .collect();

        Ok(Self {
            name: path.to_path_buf(),
            parent: dir_name(&abs),
            abs,
            base,
            seps,
            metadata,
        })
    }

    /// Returns `true` if the entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.metadata.is_dir()
    }

    /// Size of the file in bytes.
    pub fn len(&self) -> u64 {
        self.metadata.len()
    }

    /// Returns `true` for a zero-length file.
    pub fn is_empty(&self) -> bool {
        self.metadata.len() == 0
    }
}

/// Returns the size of `path` in bytes, or `None` if it cannot be stat'ed.
pub fn file_size(path: impl AsRef<Path>) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}

/// Walks `path` recursively and returns a [`FileStat`] for every entry,
/// the root included, in file-name order within each directory.
///
/// The walk stops at the first entry it cannot read and returns what was
/// collected so far. Entries that vanish between listing and stat are
/// skipped.
pub fn list_dir(path: impl AsRef<Path>) -> Vec<FileStat> {
    let root = match absolute(path.as_ref()) {
        Ok(root) => root,
        Err(e) => {
            log::warn!("{e}");
            return Vec::new();
        }
    };

    let mut list = Vec::with_capacity(10);
    for entry in WalkDir::new(&root).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if let Ok(stat) = FileStat::new(entry.path()) {
                    list.push(stat);
                }
            }
            Err(e) => {
                log::warn!("Stopped listing '{}': {e}", root.display());
                break;
            }
        }
    }
    list
}

/// Walks `path` recursively, calling `callback` with each entry's path and
/// whether it is a directory. Unreadable entries are logged and skipped.
/// Symlinks are reported but not followed.
pub fn scan_dir(path: impl AsRef<Path>, mut callback: impl FnMut(&Path, bool)) {
    for entry in WalkDir::new(path).sort_by_file_name() {
        match entry {
            Ok(entry) => callback(entry.path(), entry.file_type().is_dir()),
            Err(e) => log::warn!("Skipping unreadable entry: {e}"),
        }
    }
}
