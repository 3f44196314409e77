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

//! Operating system detection and process environment helpers.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// The operating systems this crate tells apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    /// Linux.
    Linux,
    /// Windows.
    Windows,
    /// macOS.
    Darwin,
    /// Anything else.
    Unknown,
}

impl Os {
    /// Lowercase name of the system, as used in [`platform`].
    pub fn as_str(self) -> &'static str {
        match self {
            Os::Linux => "linux",
            Os::Windows => "windows",
            Os::Darwin => "darwin",
            Os::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the operating system this binary was compiled for.
pub const fn os() -> Os {
    if cfg!(target_os = "linux") {
        Os::Linux
    } else if cfg!(target_os = "windows") {
        Os::Windows
    } else if cfg!(target_os = "macos") {
        Os::Darwin
    } else {
        Os::Unknown
    }
}

/// Returns `true` on Linux.
pub const fn is_linux() -> bool {
    matches!(os(), Os::Linux)
}

/// Returns `true` on Windows.
pub const fn is_windows() -> bool {
    matches!(os(), Os::Windows)
}

/// Returns `true` on macOS.
pub const fn is_darwin() -> bool {
    matches!(os(), Os::Darwin)
}

/// Returns `"<os>-<arch>"`, for example `linux-x86_64`.
pub fn platform() -> String {
    format!("{}-{}", os(), std::env::consts::ARCH)
}

/// Returns the value of an environment variable, or `None` if it is unset
/// or not valid unicode.
pub fn lookup_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Returns the Cargo home directory, honouring `CARGO_HOME`.
pub fn cargo_home() -> Option<PathBuf> {
    home::cargo_home().ok()
}

/// Changes the working directory to `dir`. Nothing happens if the process is
/// already there. With `verbose`, the new directory is logged at `info`.
pub fn change_work_dir(dir: impl AsRef<Path>, verbose: bool) -> io::Result<()> {
    let dir = dir.as_ref();
    if std::env::current_dir()? == dir {
        return Ok(());
    }
    std::env::set_current_dir(dir)?;
    if verbose {
        log::info!("Working directory: {}", std::env::current_dir()?.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn exactly_one_os_matches() {
        let hits = [is_linux(), is_windows(), is_darwin()]
            .iter()
            .filter(|&&hit| hit)
            .count();
        if os() == Os::Unknown {
            assert_eq!(hits, 0);
        } else {
            assert_eq!(hits, 1);
        }
    }

    #[test]
    fn platform_names_os_and_arch() {
        let platform = platform();
        assert!(platform.starts_with(os().as_str()));
        assert!(platform.ends_with(std::env::consts::ARCH));
        assert!(platform.contains('-'));
    }

    #[test]
    fn env_lookup() {
        assert!(lookup_env("PATH").is_some());
        assert_eq!(lookup_env("LOAM_SURELY_UNSET_VARIABLE"), None);
    }

    #[test]
    fn change_work_dir_round_trip() -> Result<()> {
        let _ = env_logger::builder().is_test(true).try_init();
        let start = std::env::current_dir()?;
        let target = std::env::temp_dir().canonicalize()?;

        change_work_dir(&target, true)?;
        assert_eq!(std::env::current_dir()?.canonicalize()?, target);
        change_work_dir(&target, true)?;

        change_work_dir(&start, false)?;
        assert_eq!(std::env::current_dir()?, start);
        assert!(change_work_dir("/no/such/dir/anywhere", false).is_err());
        Ok(())
    }
}
