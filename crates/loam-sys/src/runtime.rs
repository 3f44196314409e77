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

//! Sizing and building the async runtime.

use std::io;
use tokio::runtime::{Builder, Runtime};

/// Number of worker threads to run with.
///
/// A non-zero `max` is used as is. Otherwise a single-CPU host gets one
/// worker and larger hosts get half their CPUs plus one.
pub fn worker_threads(max: usize) -> usize {
    if max != 0 {
        return max;
    }
    let cpus = std::thread::available_parallelism().map_or(1, |n| n.get());
    if cpus == 1 {
        1
    } else {
        cpus / 2 + 1
    }
}

/// Builds a multi-threaded tokio runtime with [`worker_threads`]`(max)`
/// workers.
pub fn build_runtime(max: usize) -> io::Result<Runtime> {
    let workers = worker_threads(max);
    log::debug!("Building runtime with {workers} worker threads.");
    Builder::new_multi_thread()
        .worker_threads(workers)
        .thread_name("loam-worker")
        .enable_all()
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_count_wins() {
        assert_eq!(worker_threads(3), 3);
        assert_eq!(worker_threads(1), 1);
    }

    #[test]
    fn automatic_count_follows_cpus() {
        let cpus = std::thread::available_parallelism().map_or(1, |n| n.get());
        let workers = worker_threads(0);
        if cpus == 1 {
            assert_eq!(workers, 1);
        } else {
            assert_eq!(workers, cpus / 2 + 1);
        }
        assert!(workers >= 1 && workers <= cpus.max(1));
    }

    #[test]
    fn runtime_runs_tasks() -> anyhow::Result<()> {
        let runtime = build_runtime(2)?;
        let sum = runtime.block_on(async {
            let handle = tokio::spawn(async { 20 + 22 });
            handle.await
        })?;
        assert_eq!(sum, 42);
        Ok(())
    }
}
