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

//! # Loam IO
//!
//! File-reading helpers: buffered readers, callback-driven line iteration,
//! whole-file line splitting, UTF-8 BOM detection and a one-shot writer.

#![warn(missing_docs)]

pub mod error;
pub mod read;
pub mod write;

pub use error::FioError;
pub use read::{first_line, has_bom, make_reader, read_bytes_line, read_line, read_lines};
pub use write::write_file;

/// One kibibyte.
pub const KB: u64 = 1 << 10;
/// One mebibyte.
pub const MB: u64 = 1 << 20;
/// One gibibyte.
pub const GB: u64 = 1 << 30;
/// One tebibyte.
pub const TB: u64 = 1 << 40;
/// One pebibyte.
pub const PB: u64 = 1 << 50;

/// Capacity of the buffered readers handed out by [`make_reader`].
pub const IO_BUF_SIZE: usize = 8192;

/// The line terminator.
pub const LINE_END: u8 = b'\n';

/// The UTF-8 byte order mark.
pub const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_units_are_powers_of_1024() {
        assert_eq!(KB, 1024);
        assert_eq!(MB, 1024 * KB);
        assert_eq!(GB, 1024 * MB);
        assert_eq!(TB, 1024 * GB);
        assert_eq!(PB, 1024 * TB);
    }
}
