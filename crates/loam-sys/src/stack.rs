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

use std::backtrace::Backtrace;

/// Captures the calling thread's stack as text, regardless of
/// `RUST_BACKTRACE`.
pub fn stack_info() -> String {
    Backtrace::force_capture().to_string()
}

/// Writes the calling thread's stack to stderr.
pub fn print_stack() {
    eprintln!("{}", stack_info());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_current_frames() {
        let stack = stack_info();
        assert!(!stack.is_empty());
        print_stack();
    }
}
