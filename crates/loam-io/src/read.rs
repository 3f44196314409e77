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

//! Reading files line by line or all at once.

use crate::error::FioError;
use crate::{BOM, IO_BUF_SIZE, LINE_END};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Opens `path` and wraps it in a reader with an [`IO_BUF_SIZE`] buffer.
pub fn make_reader(path: impl AsRef<Path>) -> Result<BufReader<File>, FioError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FioError::open(path, e))?;
    Ok(BufReader::with_capacity(IO_BUF_SIZE, file))
}

/// Feeds every line of `path`, without its terminator, to `visit` along
/// with its one-based number. A final line with no terminator is included.
fn scan_lines<F>(path: &Path, mut visit: F) -> Result<usize, FioError>
where
    F: FnMut(usize, &[u8]) -> Result<(), FioError>,
{
    let mut reader = make_reader(path)?;
    let mut buf = Vec::with_capacity(256);
    let mut count = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(LINE_END, &mut buf)
            .map_err(|e| FioError::read(path, e))?;
        if read == 0 {
            break;
        }
        if buf.last() == Some(&LINE_END) {
            buf.pop();
        }
        count += 1;
        visit(count, &buf)?;
    }

    log::trace!("Scanned {count} lines from '{}'.", path.display());
    Ok(count)
}

/// Calls `callback` with the bytes of every line in `path`, stripped of the
/// trailing `\n`, and returns the number of lines.
pub fn read_bytes_line(
    path: impl AsRef<Path>,
    mut callback: impl FnMut(&[u8]),
) -> Result<usize, FioError> {
    scan_lines(path.as_ref(), |_, line| {
        callback(line);
        Ok(())
    })
}

/// Calls `callback` with every line in `path`, stripped of the trailing
/// `\n`, and returns the number of lines.
///
/// # Errors
/// Besides I/O failures, returns [`FioError::InvalidUtf8`] for the first
/// line that is not UTF-8. Lines before it have already been delivered.
pub fn read_line(path: impl AsRef<Path>, mut callback: impl FnMut(&str)) -> Result<usize, FioError> {
    let path = path.as_ref();
    scan_lines(path, |number, line| {
        let line = std::str::from_utf8(line).map_err(|_| FioError::InvalidUtf8 {
            path: path.to_path_buf(),
            line: number,
        })?;
        callback(line);
        Ok(())
    })
}

/// Returns the first line of a text file, without `\n` or `\r\n`. An empty
/// file yields an empty string.
pub fn first_line(path: impl AsRef<Path>) -> Result<String, FioError> {
    let path = path.as_ref();
    let mut reader = make_reader(path)?;
    let mut buf = Vec::new();
    reader
        .read_until(LINE_END, &mut buf)
        .map_err(|e| FioError::read(path, e))?;

    if buf.last() == Some(&LINE_END) {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }

    String::from_utf8(buf).map_err(|_| FioError::InvalidUtf8 {
        path: path.to_path_buf(),
        line: 1,
    })
}

/// Reads the whole file and splits it on `\n`.
///
/// The split is literal: a file ending with a newline yields a trailing
/// empty string, and an empty file yields a single empty string.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, FioError> {
    let path = path.as_ref();
    let mut bytes = Vec::new();
    make_reader(path)?
        .read_to_end(&mut bytes)
        .map_err(|e| FioError::read(path, e))?;

    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        FioError::InvalidUtf8 {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == LINE_END).count() + 1,
        }
    })?;

    Ok(content.split(LINE_END as char).map(str::to_owned).collect())
}

/// Returns `true` if the file starts with the UTF-8 byte order mark.
/// Unreadable and short files return `false`.
pub fn has_bom(path: impl AsRef<Path>) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut head = Vec::with_capacity(BOM.len());
    match file.take(BOM.len() as u64).read_to_end(&mut head) {
        Ok(_) => head == BOM,
        Err(_) => false,
    }
}
