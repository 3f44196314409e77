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

//! Error type for the time helpers.

/// Errors raised by the time helpers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    /// A wall-clock field passed to [`crate::wait_until`] is neither the
    /// `-1` wildcard nor inside its valid range.
    #[error("{field} is not correct: {value} (expected -1 or 0..={max})")]
    OutOfRange {
        /// Name of the offending field (`hour`, `minute` or `second`).
        field: &'static str,
        /// The rejected value.
        value: i32,
        /// The largest accepted value for the field.
        max: i32,
    },
}
