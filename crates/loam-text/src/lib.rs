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

//! # Loam Text
//!
//! Small string helpers: lenient number parsing, compact number
//! formatting, counted splitting, blank trimming and GBK decoding.

#![warn(missing_docs)]

pub mod encoding;
pub mod number;
pub mod strings;

pub use encoding::{gbk_to_utf8, TextError};
pub use number::{
    atof32, atof64, atoi, atoi32, atoi64, ftoa32, ftoa64, itoa, itoa32, itoa64,
};
pub use strings::{
    bsplit, filter_strings, index_of, ssplit, to_debug_string, to_display_string, trim_blanks,
    trim_left_blanks, trim_right_blanks, BLANKS,
};
