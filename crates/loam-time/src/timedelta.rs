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

//! An unnormalized, multi-field duration.

use chrono::TimeDelta;
use std::fmt;
use std::ops::{Add, Neg, Sub};

const MICROS_PER_MILLI: i128 = 1_000;
const MICROS_PER_SECOND: i128 = 1_000_000;
const MICROS_PER_MINUTE: i128 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i128 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i128 = 24 * MICROS_PER_HOUR;
const MICROS_PER_WEEK: i128 = 7 * MICROS_PER_DAY;

/// A duration expressed as seven independent signed counts.
///
/// Fields are never carried into one another: `seconds: 90` stays ninety
/// seconds and is not folded into `minutes`. The total duration is the
/// weighted sum of all fields, see [`Timedelta::to_duration`].
///
/// Field-wise arithmetic wraps, so `(a + b) - b == a` and `a + -a` is zero
/// for every value of every field.
///
/// ```
/// use loam_time::Timedelta;
///
/// let td = Timedelta { days: 10, minutes: 17, seconds: 56, ..Default::default() };
/// assert_eq!(td.to_string(), "240h17m56s");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Timedelta {
    /// Whole days of 24 hours.
    pub days: i64,
    /// Seconds.
    pub seconds: i64,
    /// Microseconds.
    pub microseconds: i64,
    /// Milliseconds.
    pub milliseconds: i64,
    /// Minutes.
    pub minutes: i64,
    /// Hours.
    pub hours: i64,
    /// Weeks of seven days.
    pub weeks: i64,
}

impl Timedelta {
    /// A timedelta with every field set to zero.
    pub const ZERO: Timedelta = Timedelta {
        days: 0,
        seconds: 0,
        microseconds: 0,
        milliseconds: 0,
        minutes: 0,
        hours: 0,
        weeks: 0,
    };

    fn map(self, f: impl Fn(i64) -> i64) -> Self {
        Self {
            days: f(self.days),
            seconds: f(self.seconds),
            microseconds: f(self.microseconds),
            milliseconds: f(self.milliseconds),
            minutes: f(self.minutes),
            hours: f(self.hours),
            weeks: f(self.weeks),
        }
    }

    fn zip_with(self, other: Self, f: impl Fn(i64, i64) -> i64) -> Self {
        Self {
            days: f(self.days, other.days),
            seconds: f(self.seconds, other.seconds),
            microseconds: f(self.microseconds, other.microseconds),
            milliseconds: f(self.milliseconds, other.milliseconds),
            minutes: f(self.minutes, other.minutes),
            hours: f(self.hours, other.hours),
            weeks: f(self.weeks, other.weeks),
        }
    }

    /// Returns the field-wise absolute value. Like every field-wise
    /// operation it wraps, so a field holding `i64::MIN` stays `i64::MIN`.
    pub fn abs(self) -> Self {
        self.map(i64::wrapping_abs)
    }

    /// Returns the total duration in microseconds.
    ///
    /// The weighted sum is taken in `i128` and clamped to the bounds of `i64`.
    pub fn total_microseconds(&self) -> i64 {
        let total = i128::from(self.days) * MICROS_PER_DAY
            + i128::from(self.seconds) * MICROS_PER_SECOND
            + i128::from(self.microseconds)
            + i128::from(self.milliseconds) * MICROS_PER_MILLI
            + i128::from(self.minutes) * MICROS_PER_MINUTE
            + i128::from(self.hours) * MICROS_PER_HOUR
            + i128::from(self.weeks) * MICROS_PER_WEEK;
        total.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Reduces the fields to a single signed duration that can be added to a
    /// `chrono::DateTime`.
    pub fn to_duration(&self) -> TimeDelta {
        TimeDelta::microseconds(self.total_microseconds())
    }

    /// Converts to a `std::time::Duration`, or `None` if the total is negative.
    pub fn to_std(&self) -> Option<std::time::Duration> {
        u64::try_from(self.total_microseconds())
            .ok()
            .map(std::time::Duration::from_micros)
    }
}

impl Add for Timedelta {
    type Output = Timedelta;

    fn add(self, rhs: Timedelta) -> Timedelta {
        self.zip_with(rhs, i64::wrapping_add)
    }
}

impl Sub for Timedelta {
    type Output = Timedelta;

    fn sub(self, rhs: Timedelta) -> Timedelta {
        self.zip_with(rhs, i64::wrapping_sub)
    }
}

impl Neg for Timedelta {
    type Output = Timedelta;

    fn neg(self) -> Timedelta {
        self.map(i64::wrapping_neg)
    }
}

impl From<Timedelta> for TimeDelta {
    fn from(value: Timedelta) -> Self {
        value.to_duration()
    }
}

/// Compact rendering with hours as the largest unit, e.g. `72h3m0.5s`.
impl fmt::Display for Timedelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_micros(self.total_microseconds()))
    }
}

/// Formats a microsecond count as `[-]XhYmZ.FFFs`, `Z.FFFms` or `Zµs`.
fn format_micros(total: i64) -> String {
    if total == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    if total < 0 {
        out.push('-');
    }
    let micros = total.unsigned_abs();

    if micros < 1_000 {
        out.push_str(&format!("{micros}µs"));
    } else if micros < 1_000_000 {
        out.push_str(&format!(
            "{}{}ms",
            micros / 1_000,
            fraction(micros % 1_000, 3)
        ));
    } else {
        let whole_seconds = micros / 1_000_000;
        let hours = whole_seconds / 3_600;
        if hours > 0 {
            out.push_str(&format!("{hours}h"));
        }
        if whole_seconds >= 60 {
            out.push_str(&format!("{}m", whole_seconds / 60 % 60));
        }
        out.push_str(&format!(
            "{}{}s",
            whole_seconds % 60,
            fraction(micros % 1_000_000, 6)
        ));
    }

    out
}

fn fraction(value: u64, width: usize) -> String {
    if value == 0 {
        return String::new();
    }
    let digits = format!("{value:0width$}");
    format!(".{}", digits.trim_end_matches('0'))
}
