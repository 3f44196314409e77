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

//! # Loam FS
//!
//! Helpers over the file system: a richer stat record, recursive directory
//! listing, home-directory expansion and lexical path manipulation.

#![warn(missing_docs)]

pub mod error;
pub mod path;
pub mod stat;

pub use error::FsError;
pub use path::{
    dir_exists, dir_name, expand_abs, expand_home, file_exists, grand_name, home_dir, is_root,
    is_symlink, is_win_root, parent_name, program_dir, remove_ext, replace_ext,
};
pub use stat::{file_size, list_dir, scan_dir, FileStat};
