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

use anyhow::Result;
use chrono::NaiveDateTime;
use loam::prelude::*;
use tempfile::tempdir;

// Installing the global logger is a one-shot operation, so this binary holds
// a single test.
#[test]
fn installed_logger_writes_prefixed_lines() -> Result<()> {
    let dir = tempdir()?;
    let path = dir.path().join("service.log");
    let config = LoggerConfig {
        target: LogTarget::File(path.clone()),
        level: Level::Info,
        ..Default::default()
    };

    let logger = config.install()?;
    assert!(loam::log::global().is_some());
    assert!(matches!(config.install(), Err(LogError::AlreadyInitialized)));

    log::debug!("below the threshold");
    log::info!("this is a info");
    logger.warn("direct warning");
    log::error!("code {}", 42);
    logger.flush()?;

    let lines: Vec<String> = read_lines(&path)?
        .into_iter()
        .filter(|line| !line.is_empty())
        .collect();
    assert_eq!(lines.len(), 3);

    let pid = format!("[{}", std::process::id());
    let expected = [("I", "this is a info"), ("W", "direct warning"), ("E", "code 42")];
    for (line, (code, message)) in lines.iter().zip(expected) {
        let (parts, ok) = ssplit(line, " ", 5);
        assert!(ok, "malformed line {line:?}");

        let stamp = format!("{} {}", parts[0], parts[1]);
        NaiveDateTime::parse_from_str(&stamp, "%Y-%m-%d %H:%M:%S%.3f")?;
        assert_eq!(parts[1].len(), "18:01:29.244".len());
        assert_eq!(parts[2], code);
        assert_eq!(parts[3], pid);
        assert!(parts[4].starts_with("logging_test:"), "{line:?}");
        assert!(parts[4].ends_with(&format!("] {message}")), "{line:?}");
    }
    Ok(())
}
