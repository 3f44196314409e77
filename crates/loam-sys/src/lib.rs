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

//! # Loam Sys
//!
//! Thin helpers over the operating system: platform detection, environment
//! lookups, one-shot signal handlers, stack capture, async runtime sizing and
//! host information gathered through `sysinfo`.

#![warn(missing_docs)]

pub mod host;
pub mod platform;
pub mod runtime;
#[cfg(unix)]
pub mod signal;
pub mod stack;

pub use host::{ipv4_addresses, HostInfo};
pub use platform::{
    cargo_home, change_work_dir, is_darwin, is_linux, is_windows, lookup_env, os, platform, Os,
};
pub use runtime::{build_runtime, worker_threads};
#[cfg(unix)]
pub use signal::register_signal_handler;
pub use stack::{print_stack, stack_info};
