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

//! A `strftime`-style formatter driven by a directive lookup table.
//!
//! A format string is scanned once, left to right. Literal characters are
//! copied to the output; a `%` followed by a character is looked up in a
//! [`DirectiveTable`] and replaced by what the matching [`RenderFn`]
//! produces. Unknown directives and a lone trailing `%` render nothing.
//!
//! | Directive | Output |
//! |---|---|
//! | `%a` `%A` | `Sun` / `Sunday` |
//! | `%w` | weekday, `0` = Sunday |
//! | `%d` `%m` `%y` | day, month, 2-digit year |
//! | `%b` `%B` | `Jan` / `January` |
//! | `%Y` | year, at least 2 digits |
//! | `%H` `%I` `%p` | 24h hour, 12h hour, `AM`/`PM` |
//! | `%M` `%S` `%f` | minute, second, microseconds |
//! | `%z` `%Z` | `±HHMM`, zone name |
//! | `%j` `%U` `%W` | day of year, Sunday and Monday week numbers |
//! | `%c` `%x` `%X` | `Thu Feb 3 04:05:06 2005`, `02/03/05`, `04:05:06` |
//! | `%%` | `%` |

use crate::calendar::{CalendarMoment, ZoneName};
use chrono::DateTime;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Renders one directive for a moment.
pub type RenderFn = fn(&CalendarMoment) -> String;

static STANDARD: LazyLock<DirectiveTable> = LazyLock::new(DirectiveTable::build_standard);

/// A mapping from directive characters to their rendering functions.
#[derive(Debug, Clone, Default)]
pub struct DirectiveTable {
    renderers: HashMap<char, RenderFn>,
}

impl DirectiveTable {
    /// Creates a table with no directives. Every `%x` sequence renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the process-wide table of standard directives.
    pub fn standard() -> &'static DirectiveTable {
        &STANDARD
    }

    /// Returns this table with `code` bound to `render`, replacing any
    /// previous binding.
    pub fn with(mut self, code: char, render: RenderFn) -> Self {
        self.renderers.insert(code, render);
        self
    }

    /// Looks up the rendering function for a directive character.
    pub fn get(&self, code: char) -> Option<RenderFn> {
        self.renderers.get(&code).copied()
    }

    /// Renders a single directive, or `None` if the table does not know it.
    pub fn render(&self, code: char, moment: &CalendarMoment) -> Option<String> {
        self.get(code).map(|render| render(moment))
    }

    /// Number of directives in the table.
    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    /// Returns `true` if the table has no directives.
    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }

    /// Formats `moment` according to `format`.
    pub fn format(&self, moment: &CalendarMoment, format: &str) -> String {
        let mut output = String::with_capacity(format.len() * 2);
        let mut chars = format.chars();

        while let Some(c) = chars.next() {
            if c != '%' {
                output.push(c);
                continue;
            }
            // A lone trailing '%' has no directive and is dropped.
            if let Some(code) = chars.next() {
                if let Some(render) = self.get(code) {
                    output.push_str(&render(moment));
                }
            }
        }

        output
    }

    fn build_standard() -> Self {
        log::trace!("Building standard strftime directive table.");
        Self::empty()
            .with('a', |m| m.short_weekday().to_string())
            .with('A', |m| m.weekday_name().to_string())
            .with('w', |m| m.weekday.to_string())
            .with('d', |m| format!("{:02}", m.day))
            .with('b', |m| m.short_month().to_string())
            .with('B', |m| m.month_name().to_string())
            .with('m', |m| format!("{:02}", m.month))
            .with('y', |m| format!("{:02}", m.year.rem_euclid(100)))
            .with('Y', |m| format!("{:02}", m.year))
            .with('H', |m| format!("{:02}", m.hour))
            .with('I', |m| format!("{:02}", twelve_hour(m.hour)))
            .with('p', |m| meridiem(m.hour).to_string())
            .with('M', |m| format!("{:02}", m.minute))
            .with('S', |m| format!("{:02}", m.second))
            .with('f', |m| format!("{:06}", m.microsecond))
            .with('z', |m| utc_offset(m.utc_offset))
            .with('Z', |m| m.zone.clone())
            .with('j', |m| format!("{:03}", m.day_of_year))
            .with('U', |m| format!("{:02}", week_number(m.day_of_year, m.weekday)))
            .with('W', |m| {
                format!("{:02}", week_number(m.day_of_year, m.weekday_from_monday()))
            })
            .with('c', |m| {
                format!(
                    "{} {} {} {:02}:{:02}:{:02} {:04}",
                    m.short_weekday(),
                    m.short_month(),
                    m.day,
                    m.hour,
                    m.minute,
                    m.second,
                    m.year
                )
            })
            .with('x', |m| {
                format!("{:02}/{:02}/{:02}", m.month, m.day, m.year.rem_euclid(100))
            })
            .with('X', |m| format!("{:02}:{:02}:{:02}", m.hour, m.minute, m.second))
            .with('%', |_| "%".to_string())
    }
}

/// Week of the year for a zero-based `weekday` where day 0 starts the week.
fn week_number(day_of_year: u32, weekday: u32) -> u32 {
    (day_of_year + 6 - weekday) / 7
}

fn twelve_hour(hour: u32) -> u32 {
    match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    }
}

fn meridiem(hour: u32) -> &'static str {
    if hour < 12 {
        "AM"
    } else {
        "PM"
    }
}

fn utc_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    format!("{sign}{:02}{:02}", seconds / 3600, seconds % 3600 / 60)
}

/// Formats a `chrono` date-time with the standard directive table.
pub fn strftime<Tz: ZoneName>(datetime: &DateTime<Tz>, format: &str) -> String {
    strftime_moment(&CalendarMoment::from(datetime), format)
}

/// Formats an already decomposed moment with the standard directive table.
pub fn strftime_moment(moment: &CalendarMoment, format: &str) -> String {
    DirectiveTable::standard().format(moment, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone, Timelike, Utc};

    const ALL_DIRECTIVES: &str =
        "%a %A %w %d %b %B %m %y %Y %H %I %p %M %S %f %z %Z %j %U %W %c %x %X %%";

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, nanos: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
            .unwrap()
            .with_nanosecond(nanos)
            .unwrap()
    }

    #[test]
    fn formats_every_directive() {
        let date = utc(2005, 2, 3, 4, 5, 6, 7_000);
        assert_eq!(
            strftime(&date, ALL_DIRECTIVES),
            "Thu Thursday 4 03 Feb February 02 05 2005 04 04 AM 05 06 000007 +0000 UTC 034 05 05 Thu Feb 3 04:05:06 2005 02/03/05 04:05:06 %"
        );

        let date = utc(1989, 12, 31, 15, 24, 30, 35_000);
        assert_eq!(
            strftime(&date, ALL_DIRECTIVES),
            "Sun Sunday 0 31 Dec December 12 89 1989 15 03 PM 24 30 000035 +0000 UTC 365 53 52 Sun Dec 31 15:24:30 1989 12/31/89 15:24:30 %"
        );
    }

    #[test]
    fn week_numbers_at_boundaries() {
        assert_eq!(strftime(&utc(2015, 7, 2, 15, 24, 30, 35), "%U %W"), "26 26");
        assert_eq!(strftime(&utc(1962, 3, 23, 15, 24, 30, 35), "%U %W"), "11 12");
        assert_eq!(strftime(&utc(1989, 12, 31, 15, 24, 30, 35_000), "%U %W"), "53 52");
    }

    #[test]
    fn midnight_is_twelve_am() {
        let date = utc(1989, 12, 31, 0, 24, 30, 35_000);
        assert_eq!(strftime(&date, "%I %p"), "12 AM");
        let noon = utc(1989, 12, 31, 12, 0, 0, 0);
        assert_eq!(strftime(&noon, "%I %p"), "12 PM");
    }

    #[test]
    fn trailing_percent_is_dropped() {
        let date = utc(1989, 12, 31, 0, 24, 30, 35_000);
        assert_eq!(
            strftime(&date, "%a %A %w %d %b %B %"),
            "Sun Sunday 0 31 Dec December "
        );
        assert_eq!(strftime(&date, "%"), "");
    }

    #[test]
    fn empty_and_literal_formats() {
        let date = utc(2005, 2, 3, 4, 5, 6, 0);
        assert_eq!(strftime(&date, ""), "");
        assert_eq!(strftime(&date, "%%"), "%");
        assert_eq!(strftime(&date, "at %H:%M!"), "at 04:05!");
    }

    #[test]
    fn unknown_directive_renders_nothing() {
        let date = utc(2005, 2, 3, 4, 5, 6, 0);
        assert_eq!(strftime(&date, "[%q]"), "[]");
    }

    #[test]
    fn negative_offset_and_small_year() {
        let offset = FixedOffset::west_opt(3 * 3600 + 30 * 60).unwrap();
        let date = offset.with_ymd_and_hms(2020, 1, 1, 9, 0, 0).unwrap();
        assert_eq!(strftime(&date, "%z"), "-0330");

        let mut moment = CalendarMoment::from(&utc(2005, 2, 3, 4, 5, 6, 0));
        moment.year = 7;
        assert_eq!(strftime_moment(&moment, "%Y %y"), "07 07");
    }

    #[test]
    fn custom_table_extends_standard() {
        let table = DirectiveTable::standard()
            .clone()
            .with('Q', |m| format!("Q{}", (m.month - 1) / 3 + 1));
        let moment = CalendarMoment::from(&utc(2005, 8, 3, 4, 5, 6, 0));
        assert_eq!(table.format(&moment, "%Y-%Q"), "2005-Q3");
        assert_eq!(table.len(), DirectiveTable::standard().len() + 1);
        assert!(DirectiveTable::empty().is_empty());
        assert_eq!(DirectiveTable::empty().format(&moment, "%Y!"), "!");
    }

    #[test]
    fn render_single_directive() {
        let moment = CalendarMoment::from(&utc(2005, 2, 3, 4, 5, 6, 0));
        let table = DirectiveTable::standard();
        assert_eq!(table.render('j', &moment).as_deref(), Some("034"));
        assert_eq!(table.render('k', &moment), None);
    }
}
