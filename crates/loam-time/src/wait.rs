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

//! Blocking until the wall clock reaches a given hour, minute and second.

use crate::error::TimeError;
use chrono::{Local, Timelike};
use std::time::Duration;

/// How often the clock is polled while waiting.
pub const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// The wildcard value accepted for any field of a wait target.
pub const ANY: i32 = -1;

/// Hour, minute and second read from a wall clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallTime {
    /// Hour of the day, `0..=23`.
    pub hour: u32,
    /// Minute, `0..=59`.
    pub minute: u32,
    /// Second, `0..=59`.
    pub second: u32,
}

/// A source of wall-clock time that can also put the caller to sleep.
pub trait Clock {
    /// Returns the current wall-clock time.
    fn now(&self) -> WallTime;
    /// Blocks the calling thread for `interval`.
    fn sleep(&self, interval: Duration);
}

/// The host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> WallTime {
        let now = Local::now();
        WallTime {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    fn sleep(&self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// A validated wait target. `None` fields match any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitTarget {
    hour: Option<u32>,
    minute: Option<u32>,
    second: Option<u32>,
}

impl WaitTarget {
    /// Validates a target. Each field is either [`ANY`] or inside its range
    /// (`0..=23` for hours, `0..=59` for minutes and seconds).
    ///
    /// # Errors
    /// Returns [`TimeError::OutOfRange`] for the first field that fails,
    /// checked in hour, minute, second order.
    pub fn new(hour: i32, minute: i32, second: i32) -> Result<Self, TimeError> {
        Ok(Self {
            hour: field("hour", hour, 23)?,
            minute: field("minute", minute, 59)?,
            second: field("second", second, 59)?,
        })
    }

    /// Returns `true` if `time` satisfies every non-wildcard field.
    pub fn matches(&self, time: WallTime) -> bool {
        let hit = |want: Option<u32>, got: u32| want.map_or(true, |w| w == got);
        hit(self.hour, time.hour) && hit(self.minute, time.minute) && hit(self.second, time.second)
    }
}

fn field(name: &'static str, value: i32, max: i32) -> Result<Option<u32>, TimeError> {
    match value {
        ANY => Ok(None),
        v if (0..=max).contains(&v) => Ok(Some(v as u32)),
        v => Err(TimeError::OutOfRange {
            field: name,
            value: v,
            max,
        }),
    }
}

/// Blocks until the local wall clock matches `hour:minute:second`.
///
/// Pass `-1` for any field to match every value of it. The arguments are
/// validated before any waiting starts. There is no timeout.
///
/// # Errors
/// Returns [`TimeError::OutOfRange`] if a field is invalid.
pub fn wait_until(hour: i32, minute: i32, second: i32) -> Result<(), TimeError> {
    wait_until_with(&SystemClock, hour, minute, second)
}

/// Same as [`wait_until`], polling the given clock.
pub fn wait_until_with<C: Clock + ?Sized>(
    clock: &C,
    hour: i32,
    minute: i32,
    second: i32,
) -> Result<(), TimeError> {
    let target = WaitTarget::new(hour, minute, second)?;
    log::debug!("Waiting until {hour}:{minute}:{second} (-1 matches any).");

    loop {
        if target.matches(clock.now()) {
            return Ok(());
        }
        clock.sleep(POLL_INTERVAL);
    }
}
