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

//! # Loam Log
//!
//! A small line-oriented logger. Every record is one line of the form
//!
//! ```text
//! 2019-04-12 18:01:29.244 I [6460 main:62] this is a info
//! ```
//!
//! There is no package-level singleton. The host builds a [`Logger`] (single
//! owner, no locking) or a [`SharedLogger`] (mutex-guarded) from a
//! [`LoggerConfig`], and may install one shared logger into the `log` facade
//! once at startup with [`LoggerConfig::install`].

#![warn(missing_docs)]

pub mod assert;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;

pub use assert::{assert_no_exit, assert_or_exit};
pub use config::{global, BoxWriter, ConfiguredLogger, LockPolicy, LogTarget, LoggerConfig};
pub use error::LogError;
pub use level::Level;
pub use logger::{format_prefix, source_name, Logger, SharedLogger};
