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

//! Number parsing and formatting.
//!
//! The parsers never fail: anything that does not parse, including values
//! out of range for the target type, yields zero.

/// Parses a decimal `isize`, or returns 0.
pub fn atoi(s: &str) -> isize {
    s.parse().unwrap_or_default()
}

/// Parses a decimal `i32`, or returns 0.
pub fn atoi32(s: &str) -> i32 {
    s.parse().unwrap_or_default()
}

/// Parses a decimal `i64`, or returns 0.
pub fn atoi64(s: &str) -> i64 {
    s.parse().unwrap_or_default()
}

/// Parses an `f32`, or returns 0.
pub fn atof32(s: &str) -> f32 {
    s.parse().unwrap_or_default()
}

/// Parses an `f64`, or returns 0.
pub fn atof64(s: &str) -> f64 {
    s.parse().unwrap_or_default()
}

/// Formats an `isize` in decimal.
pub fn itoa(i: isize) -> String {
    i.to_string()
}

/// Formats an `i32` in decimal.
pub fn itoa32(i: i32) -> String {
    i.to_string()
}

/// Formats an `i64` in decimal.
pub fn itoa64(i: i64) -> String {
    i.to_string()
}

/// Formats an `f32` with the fewest digits that read back to the same
/// value. See [`ftoa64`] for the layout.
pub fn ftoa32(f: f32) -> String {
    if f.is_nan() {
        return "NaN".into();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.into();
    }
    general(&format!("{f:e}"))
}

/// Formats an `f64` with the fewest digits that read back to the same
/// value.
///
/// Values whose decimal exponent is below -4 or at least 6 use the
/// exponent form `d.dddE±XX`, everything else is written out in full:
/// `640640640.646464` gives `6.40640640646464E+08` while `3232.3232`
/// stays as is. Non-finite values are `NaN`, `+Inf` and `-Inf`.
pub fn ftoa64(f: f64) -> String {
    if f.is_nan() {
        return "NaN".into();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.into();
    }
    general(&format!("{f:e}"))
}

/// Lays out the output of `{:e}`, which already carries the shortest
/// round-trip digits, as either plain decimal or `E` notation.
fn general(scientific: &str) -> String {
    let (mantissa, exp) = scientific.split_once('e').unwrap_or((scientific, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::from(sign);
    if !(-4..6).contains(&exp) {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('E');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    } else if exp >= 0 {
        let int_len = exp as usize + 1;
        if digits.len() > int_len {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        } else {
            out.push_str(&digits);
            out.push_str(&"0".repeat(int_len - digits.len()));
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat(exp.unsigned_abs() as usize - 1));
        out.push_str(&digits);
    }
    out
}
