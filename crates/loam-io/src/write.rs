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

use crate::error::FioError;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes `contents` to `path`, creating or truncating it, and syncs the
/// data to disk before returning.
pub fn write_file(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<(), FioError> {
    let path = path.as_ref();
    let write_err = |source| FioError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(write_err)?;
    file.write_all(contents.as_ref()).map_err(write_err)?;
    file.sync_all().map_err(write_err)?;

    log::debug!(
        "Wrote {} bytes to '{}'.",
        contents.as_ref().len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read::read_lines;
    use anyhow::Result;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_back() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.txt");

        write_file(&path, "first\nsecond")?;
        assert_eq!(read_lines(&path)?, vec!["first", "second"]);

        write_file(&path, b"replaced")?;
        assert_eq!(std::fs::read_to_string(&path)?, "replaced");
        Ok(())
    }

    #[test]
    fn missing_parent_is_a_write_error() -> Result<()> {
        let dir = tempdir()?;
        let err = write_file(dir.path().join("no/such/dir/out.txt"), "x").unwrap_err();
        assert!(matches!(err, FioError::Write { .. }));
        Ok(())
    }
}
