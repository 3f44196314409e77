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

//! The public face of the Loam toolkit.
//!
//! Each helper crate is re-exported under a short module name, and the most
//! common items are gathered in [`prelude`].
//!
//! ```no_run
//! use loam::prelude::*;
//!
//! # fn main() -> anyhow::Result<()> {
//! let logger = LoggerConfig::from_json(r#"{ "level": "info" }"#)?.install()?;
//! logger.info(format!("started on {}", platform()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub use loam_fs as fs;
pub use loam_io as io;
pub use loam_log as log;
pub use loam_sys as sys;
pub use loam_text as text;
pub use loam_time as time;

/// The items most programs reach for.
pub mod prelude {
    pub use loam_fs::{
        dir_exists, expand_abs, expand_home, file_exists, list_dir, scan_dir, FileStat, FsError,
    };
    pub use loam_io::{
        first_line, has_bom, read_bytes_line, read_line, read_lines, write_file, FioError,
    };
    pub use loam_log::{
        assert_no_exit, assert_or_exit, Level, LogError, LogTarget, Logger, LoggerConfig,
        SharedLogger,
    };
    pub use loam_sys::{build_runtime, platform, worker_threads, HostInfo, Os};
    pub use loam_text::{atof64, atoi64, ftoa64, ssplit, trim_blanks};
    pub use loam_time::{strftime, wait_until, Timedelta, TimeError};
}
