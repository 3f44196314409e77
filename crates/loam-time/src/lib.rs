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

//! # Loam Time
//!
//! Date and time helpers: a `strftime`-style calendar formatter driven by a
//! directive table, the unnormalized [`Timedelta`] duration aggregate, and a
//! blocking [`wait_until`] primitive that polls the wall clock.

#![warn(missing_docs)]

pub mod calendar;
pub mod error;
pub mod strftime;
pub mod timedelta;
pub mod wait;

pub use calendar::{host_zone, second_to_time, CalendarMoment, ZoneName};
pub use error::TimeError;
pub use strftime::{strftime, strftime_moment, DirectiveTable, RenderFn};
pub use timedelta::Timedelta;
pub use wait::{wait_until, wait_until_with, Clock, SystemClock, WaitTarget, WallTime};
