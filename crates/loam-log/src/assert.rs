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

//! Runtime assertions that report through a log line on stderr.

use crate::level::Level;
use crate::logger::Logger;
use std::io::{self, Write};
use std::panic::Location;

const ASSERT_FAILED: &str = "Assert Failed!";

fn report<W: Write>(writer: W, location: &Location<'_>) {
    Logger::new(writer, Level::Debug).log_at(Level::Error, location, ASSERT_FAILED);
}

/// Exits the process with status `-1` if `condition` is false, after writing
/// an error line attributed to the caller to stderr.
#[track_caller]
pub fn assert_or_exit(condition: bool) {
    if !condition {
        report(io::stderr().lock(), Location::caller());
        std::process::exit(-1);
    }
}

/// Writes an error line attributed to the caller to stderr if `condition`
/// is false, and returns `condition`.
#[track_caller]
pub fn assert_no_exit(condition: bool) -> bool {
    if !condition {
        report(io::stderr().lock(), Location::caller());
    }
    condition
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_writes_error_line() {
        let mut out = Vec::new();
        let location = Location::caller();
        report(&mut out, location);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" E ["));
        assert!(text.ends_with("] Assert Failed!\n"));
    }

    #[test]
    fn passing_assertions_return_true() {
        assert_or_exit(true);
        assert!(assert_no_exit(true));
        assert!(!assert_no_exit(false));
    }
}
