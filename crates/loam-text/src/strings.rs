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

//! Splitting, searching and trimming strings.

use std::fmt::{Debug, Display};

/// The characters removed by the `trim_*blanks` functions.
pub const BLANKS: &[char] = &[' ', '\t', '\x0B', '\r', '\n', '\0'];

/// Renders `value` with its [`Display`] implementation.
pub fn to_display_string<T: Display + ?Sized>(value: &T) -> String {
    value.to_string()
}

/// Renders `value` with its [`Debug`] implementation.
pub fn to_debug_string<T: Debug + ?Sized>(value: &T) -> String {
    format!("{value:?}")
}

/// Splits `s` on `delim` into at most `expect` pieces, the last holding the
/// unsplit remainder, and reports whether exactly `expect` pieces came out.
///
/// An empty `delim` splits between characters.
pub fn ssplit<'a>(s: &'a str, delim: &str, expect: usize) -> (Vec<&'a str>, bool) {
    let parts: Vec<&str> = if delim.is_empty() {
        let mut parts = Vec::new();
        let mut rest = s;
        while parts.len() + 1 < expect {
            let Some(first) = rest.chars().next() else {
                break;
            };
            if rest.len() == first.len_utf8() {
                break;
            }
            let (head, tail) = rest.split_at(first.len_utf8());
            parts.push(head);
            rest = tail;
        }
        if expect > 0 && !rest.is_empty() {
            parts.push(rest);
        }
        parts
    } else {
        s.splitn(expect, delim).collect()
    };
    let ok = parts.len() == expect;
    (parts, ok)
}

/// Byte-slice counterpart of [`ssplit`]. An empty `delim` splits between
/// bytes.
pub fn bsplit<'a>(s: &'a [u8], delim: &[u8], expect: usize) -> (Vec<&'a [u8]>, bool) {
    let mut parts = Vec::new();
    if expect == 0 {
        return (parts, true);
    }

    let mut rest = s;
    while parts.len() + 1 < expect {
        let cut = if delim.is_empty() {
            (rest.len() > 1).then_some(1)
        } else {
            rest.windows(delim.len()).position(|window| window == delim)
        };
        let Some(pos) = cut else {
            break;
        };
        parts.push(&rest[..pos]);
        rest = &rest[pos + delim.len()..];
    }
    if !(delim.is_empty() && rest.is_empty()) {
        parts.push(rest);
    }

    let ok = parts.len() == expect;
    (parts, ok)
}

/// Returns the position of the first element of `seq` equal to `value`.
pub fn index_of<T: PartialEq>(value: &T, seq: &[T]) -> Option<usize> {
    seq.iter().position(|item| item == value)
}

/// Removes [`BLANKS`] from both ends of `s`.
pub fn trim_blanks(s: &str) -> &str {
    s.trim_matches(BLANKS)
}

/// Removes [`BLANKS`] from the start of `s`.
pub fn trim_left_blanks(s: &str) -> &str {
    s.trim_start_matches(BLANKS)
}

/// Removes [`BLANKS`] from the end of `s`.
pub fn trim_right_blanks(s: &str) -> &str {
    s.trim_end_matches(BLANKS)
}

/// Keeps the strings of `slice` for which `predicate` holds, in order.
pub fn filter_strings<'a, S: AsRef<str>>(
    slice: &'a [S],
    mut predicate: impl FnMut(&str) -> bool,
) -> Vec<&'a str> {
    slice
        .iter()
        .map(AsRef::as_ref)
        .filter(|s| predicate(*s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counted_splits() {
        let s = "A#B#C#D#E";

        let (parts, ok) = ssplit(s, "#", 3);
        assert!(ok);
        assert_eq!(parts, vec!["A", "B", "C#D#E"]);
        assert_eq!(index_of(&"B", &parts), Some(1));
        assert_eq!(index_of(&"Z", &parts), None);

        let (parts, ok) = bsplit(s.as_bytes(), b"#", 3);
        assert!(ok);
        assert_eq!(parts, vec![&b"A"[..], b"B", b"C#D#E"]);

        let (parts, ok) = ssplit("A#B", "#", 3);
        assert!(!ok);
        assert_eq!(parts, vec!["A", "B"]);

        let (parts, ok) = ssplit(s, "#", 0);
        assert!(ok && parts.is_empty());
    }

    #[test]
    fn multi_byte_delimiters() {
        let (parts, ok) = ssplit("k := v := w", " := ", 2);
        assert!(ok);
        assert_eq!(parts, vec!["k", "v := w"]);

        let (parts, ok) = bsplit(b"k::v::w", b"::", 5);
        assert!(!ok);
        assert_eq!(parts, vec![&b"k"[..], b"v", b"w"]);
    }

    #[test]
    fn empty_delimiter_explodes() {
        assert_eq!(ssplit("héllo", "", 3), (vec!["h", "é", "llo"], true));
        assert_eq!(ssplit("ab", "", 5), (vec!["a", "b"], false));
        assert_eq!(bsplit(b"abc", b"", 2), (vec![&b"a"[..], b"bc"], true));
        assert_eq!(bsplit(b"abc", b"", 9).0.len(), 3);
    }

    #[test]
    fn filter_keeps_order() {
        let words = vec!["alpha".to_string(), "beta".into(), "gamma".into()];
        assert_eq!(
            filter_strings(&words, |w| w.contains('a') && w.len() > 4),
            vec!["alpha", "gamma"]
        );
        assert!(filter_strings(&words, |w| w.contains('#')).is_empty());
    }

    #[test]
    fn trims_blanks() {
        assert_eq!(trim_blanks(" \x0Bgood boy\t\r\n"), "good boy");
        assert_eq!(trim_blanks("\0padded\0"), "padded");
        assert_eq!(trim_left_blanks("  x  "), "x  ");
        assert_eq!(trim_right_blanks("  x  "), "  x");
        assert_eq!(trim_blanks("\\0keep\\0"), "\\0keep\\0");
    }

    #[test]
    fn value_rendering() {
        assert_eq!(to_display_string(&3.5), "3.5");
        assert_eq!(to_display_string("text"), "text");
        assert_eq!(to_debug_string(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(to_debug_string("q"), "\"q\"");
    }
}
