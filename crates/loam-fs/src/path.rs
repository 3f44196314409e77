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

//! Path expansion and lexical path helpers.
//!
//! Functions that only inspect the text of a path never touch the file
//! system. The `*_exists` and [`is_symlink`] checks do, and treat any stat
//! failure as "no".

use crate::error::FsError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Returns the current user's home directory, if it can be determined.
pub fn home_dir() -> Option<PathBuf> {
    home::home_dir()
}

/// Replaces a leading `~` component with the home directory.
///
/// Only `~` itself and `~/...` are expanded. `~user` forms and paths for
/// which no home directory is known are returned unchanged.
pub fn expand_home(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match (path.strip_prefix("~"), home_dir()) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home,
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Expands `~` and resolves the result against the working directory.
/// The returned path is lexically cleaned of `.` and `..` components.
pub fn expand_abs(path: impl AsRef<Path>) -> Result<PathBuf, FsError> {
    absolute(&expand_home(path))
}

/// Returns the directory holding the running executable.
pub fn program_dir() -> Result<PathBuf, FsError> {
    let exe = std::env::current_exe().map_err(FsError::CurrentExe)?;
    Ok(dir_name(exe))
}

/// Returns everything but the last component of `path`.
///
/// A bare file name yields `.`, and a root stays itself.
pub fn dir_name(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None if path.has_root() => path.to_path_buf(),
        None => PathBuf::from("."),
    }
}

/// Returns the absolute directory containing `path`.
pub fn parent_name(path: impl AsRef<Path>) -> Result<PathBuf, FsError> {
    Ok(dir_name(absolute(path.as_ref())?))
}

/// Returns the absolute directory two levels above `path`.
pub fn grand_name(path: impl AsRef<Path>) -> Result<PathBuf, FsError> {
    Ok(dir_name(dir_name(absolute(path.as_ref())?)))
}

/// Returns `true` for a Windows absolute path with a drive letter, such as
/// `C:\` or `D:\data`. The check is textual and works on every platform.
pub fn is_win_root(path: &str) -> bool {
    let mut chars = path.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic()) && chars.as_str().starts_with(":\\")
}

/// Returns `true` if `path` is the root of the file system: `/` on Unix,
/// a bare drive root such as `C:\` on Windows.
pub fn is_root(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    if cfg!(windows) {
        let text = path.to_string_lossy();
        text.len() == 3 && is_win_root(&text)
    } else {
        path == Path::new("/")
    }
}

/// Strips the extension from the final component of `path`.
///
/// Names starting with a dot, such as `.bashrc`, have no extension.
pub fn remove_ext(path: impl AsRef<Path>) -> PathBuf {
    path.as_ref().with_extension("")
}

/// Replaces the extension of the final component of `path` with `ext`,
/// adding one if there was none. A leading dot on `ext` is optional.
pub fn replace_ext(path: impl AsRef<Path>, ext: &str) -> PathBuf {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    path.as_ref().with_extension(ext)
}

/// Returns `true` if `path` exists and is not a directory.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

/// Returns `true` if `path` exists and is a directory.
pub fn dir_exists(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Returns `true` if `path` itself is a symbolic link, whether or not its
/// target exists.
pub fn is_symlink(path: impl AsRef<Path>) -> bool {
    fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink())
}

pub(crate) fn absolute(path: &Path) -> Result<PathBuf, FsError> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    std::path::absolute(path)
        .map(|abs| clean(&abs))
        .map_err(|source| FsError::Absolute {
            path: path.to_path_buf(),
            source,
        })
}

/// Removes `.` components and folds `..` into the preceding component.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn expands_leading_tilde_only() {
        let Some(home) = home_dir() else {
            return;
        };
        assert_eq!(expand_home("~"), home);
        assert_eq!(expand_home("~/notes.txt"), home.join("notes.txt"));
        assert_eq!(expand_home("~other/x"), PathBuf::from("~other/x"));
        assert_eq!(expand_home("a/~/b"), PathBuf::from("a/~/b"));
    }

    #[test]
    fn absolute_paths_are_cleaned() -> Result<()> {
        let cwd = std::env::current_dir()?;
        assert_eq!(expand_abs("a/../b/./c")?, cwd.join("b").join("c"));
        assert_eq!(expand_abs("")?, cwd);
        assert_eq!(parent_name("x/y")?, cwd.join("x"));
        assert_eq!(grand_name("x/y")?, cwd);
        Ok(())
    }

    #[test]
    fn dir_name_is_lexical() {
        assert_eq!(dir_name("file.txt"), PathBuf::from("."));
        assert_eq!(dir_name(""), PathBuf::from("."));
        assert_eq!(dir_name("a/b/c"), PathBuf::from("a/b"));
        #[cfg(unix)]
        {
            assert_eq!(dir_name("/"), PathBuf::from("/"));
            assert_eq!(dir_name("/etc"), PathBuf::from("/"));
        }
    }

    #[test]
    fn program_dir_contains_test_binary() -> Result<()> {
        let dir = program_dir()?;
        assert!(dir.is_absolute());
        assert!(dir_exists(&dir));
        Ok(())
    }

    #[test]
    fn recognises_roots() {
        assert!(is_win_root("C:\\"));
        assert!(is_win_root("d:\\data"));
        assert!(!is_win_root("C:"));
        assert!(!is_win_root("1:\\"));
        assert!(!is_win_root(""));

        #[cfg(unix)]
        {
            assert!(is_root("/"));
            assert!(!is_root("/tmp"));
            assert!(!is_root("C:\\"));
        }
        #[cfg(windows)]
        {
            assert!(is_root("C:\\"));
            assert!(!is_root("C:\\Windows"));
        }
    }

    #[test]
    fn extensions_of_final_component() {
        assert_eq!(remove_ext("report.tar.gz"), PathBuf::from("report.tar"));
        assert_eq!(remove_ext("dir.d/file"), PathBuf::from("dir.d/file"));
        assert_eq!(remove_ext(".bashrc"), PathBuf::from(".bashrc"));
        assert_eq!(remove_ext("trailing."), PathBuf::from("trailing"));

        assert_eq!(replace_ext("a/b.txt", "md"), PathBuf::from("a/b.md"));
        assert_eq!(replace_ext("a/b.txt", ".md"), PathBuf::from("a/b.md"));
        assert_eq!(replace_ext("dir.d/file", "rs"), PathBuf::from("dir.d/file.rs"));
        assert_eq!(replace_ext(".bashrc", "bak"), PathBuf::from(".bashrc.bak"));
    }

    #[test]
    fn existence_checks() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x")?;

        assert!(file_exists(&file));
        assert!(!dir_exists(&file));
        assert!(dir_exists(dir.path()));
        assert!(!file_exists(dir.path()));
        assert!(!file_exists(dir.path().join("missing")));
        assert!(!is_symlink(&file));
        Ok(())
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_still_a_symlink() -> Result<()> {
        let dir = tempdir()?;
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &link)?;

        assert!(is_symlink(&link));
        assert!(!file_exists(&link));
        assert!(!is_symlink(dir.path().join("missing")));
        Ok(())
    }
}
