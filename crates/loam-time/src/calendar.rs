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

//! Calendar fields read by the formatter, and the English name tables.

use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, TimeZone, Timelike, Utc};

/// Full weekday names, indexed from Sunday.
pub const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Abbreviated weekday names, indexed from Sunday.
pub const SHORT_WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full month names. Index 0 is a placeholder so that month numbers index directly.
pub const MONTHS: [&str; 13] = [
    "---",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated month names. Index 0 is a placeholder so that month numbers index directly.
pub const SHORT_MONTHS: [&str; 13] = [
    "---", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A point in time decomposed into the calendar fields the formatter reads.
///
/// Build one from any `chrono::DateTime` with [`From`]; the fields are plain
/// data so a moment can also be assembled by hand in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMoment {
    /// Full year, e.g. `2005`.
    pub year: i32,
    /// Month of the year, `1..=12`.
    pub month: u32,
    /// Day of the month, `1..=31`.
    pub day: u32,
    /// Hour of the day, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Second, `0..=59`.
    pub second: u32,
    /// Sub-second fraction in microseconds, `0..=999_999`.
    pub microsecond: u32,
    /// Day of the week, `0` = Sunday through `6` = Saturday.
    pub weekday: u32,
    /// Day of the year, `1..=366`.
    pub day_of_year: u32,
    /// Offset from UTC in seconds, east positive.
    pub utc_offset: i32,
    /// Timezone abbreviation such as `EST`, see [`ZoneName`].
    pub zone: String,
}

impl CalendarMoment {
    /// Abbreviated weekday name (`Sun`..`Sat`).
    pub fn short_weekday(&self) -> &'static str {
        SHORT_WEEKDAYS[self.weekday as usize % 7]
    }

    /// Full weekday name (`Sunday`..`Saturday`).
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAYS[self.weekday as usize % 7]
    }

    /// Abbreviated month name (`Jan`..`Dec`).
    pub fn short_month(&self) -> &'static str {
        SHORT_MONTHS.get(self.month as usize).copied().unwrap_or("---")
    }

    /// Full month name (`January`..`December`).
    pub fn month_name(&self) -> &'static str {
        MONTHS.get(self.month as usize).copied().unwrap_or("---")
    }

    /// Weekday counted from Monday (`0`) to Sunday (`6`).
    pub fn weekday_from_monday(&self) -> u32 {
        (self.weekday + 6) % 7
    }
}

/// Time zones that can name the zone in effect at a given instant.
pub trait ZoneName: TimeZone {
    /// Abbreviation shown by `%Z`, e.g. `EST` or `CEST`.
    fn zone_name(datetime: &DateTime<Self>) -> String;
}

impl ZoneName for Utc {
    fn zone_name(_: &DateTime<Self>) -> String {
        "UTC".to_string()
    }
}

impl ZoneName for FixedOffset {
    fn zone_name(datetime: &DateTime<Self>) -> String {
        datetime.format("%Z").to_string()
    }
}

impl ZoneName for chrono_tz::Tz {
    fn zone_name(datetime: &DateTime<Self>) -> String {
        datetime.format("%Z").to_string()
    }
}

/// Resolves the host zone through [`host_zone`]. Falls back to the numeric
/// offset when the zone is unknown.
impl ZoneName for Local {
    fn zone_name(datetime: &DateTime<Self>) -> String {
        match host_zone() {
            Some(zone) => datetime.with_timezone(&zone).format("%Z").to_string(),
            None => datetime.format("%Z").to_string(),
        }
    }
}

/// Returns the host's IANA time zone: `TZ` when it names one, otherwise the
/// system setting.
pub fn host_zone() -> Option<chrono_tz::Tz> {
    let name = match std::env::var("TZ") {
        Ok(tz) if !tz.is_empty() => tz,
        _ => iana_time_zone::get_timezone().ok()?,
    };
    let name = name.trim_start_matches(':');
    let name = name
        .split_once("zoneinfo/")
        .map_or(name, |(_, zone)| zone);
    name.parse().ok()
}

impl<Tz: ZoneName> From<&DateTime<Tz>> for CalendarMoment {
    fn from(datetime: &DateTime<Tz>) -> Self {
        Self {
            year: datetime.year(),
            month: datetime.month(),
            day: datetime.day(),
            hour: datetime.hour(),
            minute: datetime.minute(),
            second: datetime.second(),
            // Leap seconds report nanoseconds past 1e9.
            microsecond: datetime.nanosecond() % 1_000_000_000 / 1_000,
            weekday: datetime.weekday().num_days_from_sunday(),
            day_of_year: datetime.ordinal(),
            utc_offset: datetime.offset().fix().local_minus_utc(),
            zone: Tz::zone_name(datetime),
        }
    }
}

/// Converts seconds since the Unix epoch to a local date-time.
///
/// Returns `None` when `seconds` is outside the range `chrono` can represent.
pub fn second_to_time(seconds: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp(seconds, 0).map(|utc| utc.with_timezone(&Local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn moment_from_utc_datetime() {
        let date = Utc
            .with_ymd_and_hms(2005, 2, 3, 4, 5, 6)
            .unwrap()
            .with_nanosecond(7_000)
            .unwrap();
        let moment = CalendarMoment::from(&date);

        assert_eq!(moment.year, 2005);
        assert_eq!(moment.month, 2);
        assert_eq!(moment.day, 3);
        assert_eq!((moment.hour, moment.minute, moment.second), (4, 5, 6));
        assert_eq!(moment.microsecond, 7);
        assert_eq!(moment.weekday, 4);
        assert_eq!(moment.day_of_year, 34);
        assert_eq!(moment.utc_offset, 0);
        assert_eq!(moment.zone, "UTC");
    }

    #[test]
    fn moment_keeps_fixed_offset() {
        let offset = FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap();
        let date = offset.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        let moment = CalendarMoment::from(&date);
        assert_eq!(moment.utc_offset, -(5 * 3600 + 30 * 60));
        assert_eq!(moment.hour, 12);
        assert!(moment.zone.starts_with("-05"));
    }

    #[test]
    fn named_zone_gives_abbreviation() {
        let winter = chrono_tz::America::New_York
            .with_ymd_and_hms(2020, 1, 15, 12, 0, 0)
            .unwrap();
        let summer = chrono_tz::Europe::Paris
            .with_ymd_and_hms(2020, 7, 15, 12, 0, 0)
            .unwrap();

        let moment = CalendarMoment::from(&winter);
        assert_eq!(moment.zone, "EST");
        assert_eq!(moment.utc_offset, -5 * 3600);
        assert_eq!(CalendarMoment::from(&summer).zone, "CEST");
    }

    #[test]
    fn weekday_names_and_monday_index() {
        let date = Utc.with_ymd_and_hms(1989, 12, 31, 0, 0, 0).unwrap();
        let moment = CalendarMoment::from(&date);
        assert_eq!(moment.short_weekday(), "Sun");
        assert_eq!(moment.weekday_name(), "Sunday");
        assert_eq!(moment.weekday_from_monday(), 6);
        assert_eq!(moment.short_month(), "Dec");
        assert_eq!(moment.month_name(), "December");
    }

    #[test]
    fn second_to_time_round_trips_timestamp() {
        let time = second_to_time(1_000_000_000).unwrap();
        assert_eq!(time.timestamp(), 1_000_000_000);
        assert!(second_to_time(i64::MAX).is_none());
    }
}
