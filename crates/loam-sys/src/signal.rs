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

//! One-shot signal handlers.

use signal_hook::iterator::Signals;
use std::io;
use std::thread::JoinHandle;

pub use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGUSR1, SIGUSR2};

/// Spawns a thread that waits for the first of `signals` and calls `handler`
/// with it.
///
/// Later deliveries are not reported. signal-hook keeps its low-level
/// handler installed after the iterator is dropped, so they are ignored
/// rather than running the default action (for example terminating on
/// `SIGTERM`).
///
/// # Errors
/// Fails if the process cannot install a handler for one of `signals`.
pub fn register_signal_handler<F>(handler: F, signals: &[i32]) -> io::Result<JoinHandle<()>>
where
    F: FnOnce(i32) + Send + 'static,
{
    let mut registered = Signals::new(signals)?;
    let watched = signals.to_vec();

    std::thread::Builder::new()
        .name("loam-signal".into())
        .spawn(move || {
            log::debug!("Waiting for signals {watched:?}.");
            if let Some(signal) = registered.forever().next() {
                log::debug!("Received signal {signal}.");
                handler(signal);
            }
        })
}
