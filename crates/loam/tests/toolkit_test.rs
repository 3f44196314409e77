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
use chrono::{TimeZone, Utc};
use loam::prelude::*;
use loam::{fs, io, sys, text};
use tempfile::tempdir;

#[test]
fn report_written_and_read_back() -> Result<()> {
    let dir = tempdir()?;
    let path = fs::replace_ext(dir.path().join("uptime.log"), "txt");
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("txt"));

    let start = Utc.with_ymd_and_hms(1989, 12, 31, 23, 59, 58).unwrap();
    let uptime = Timedelta {
        days: 10,
        minutes: 17,
        seconds: 56,
        ..Default::default()
    };
    let report = format!(
        "{}\t{uptime}\t{}\n{}\n",
        strftime(&start, "%Y-%m-%d %H:%M:%S"),
        ftoa64(640640640.646464),
        strftime(&(start + uptime.to_duration()), "%a %b %d %H:%M:%S %Y"),
    );
    write_file(&path, &report)?;

    let header = first_line(&path)?;
    let (fields, ok) = ssplit(&header, "\t", 3);
    assert!(ok);
    assert_eq!(fields[0], "1989-12-31 23:59:58");
    assert_eq!(fields[1], "240h17m56s");
    assert_eq!(atof64(fields[2]), 640640640.646464);

    let mut lines = Vec::new();
    let count = read_line(&path, |line| lines.push(trim_blanks(line).to_string()))?;
    assert_eq!(count, 2);
    assert_eq!(lines[1], "Thu Jan 11 00:17:54 1990");
    assert!(!has_bom(&path));
    Ok(())
}

#[test]
fn runtime_workers_fill_a_directory() -> Result<()> {
    let dir = tempdir()?;
    let root = dir.path().to_path_buf();
    let runtime = build_runtime(2)?;

    let written = runtime.block_on(async {
        let mut handles = Vec::new();
        for i in 0..4i64 {
            let path = root.join(format!("part-{}", text::itoa64(i)));
            handles.push(tokio::task::spawn_blocking(move || {
                write_file(&path, "x".repeat(i as usize + 1)).map(|_| path)
            }));
        }
        let mut written = Vec::new();
        for handle in handles {
            written.push(handle.await??);
        }
        Ok::<_, anyhow::Error>(written)
    })?;
    assert_eq!(written.len(), 4);

    let listed = list_dir(&root);
    assert_eq!(listed.len(), 5);
    assert!(listed[0].is_dir());
    let sizes: Vec<u64> = listed[1..].iter().map(FileStat::len).collect();
    assert_eq!(sizes, vec![1, 2, 3, 4]);

    let mut files = 0;
    scan_dir(&root, |path, is_dir| {
        if !is_dir {
            files += 1;
            assert!(file_exists(path));
            let size = fs::file_size(path).unwrap_or(0);
            assert_eq!(io::read_lines(path).map(|lines| lines[0].len() as u64).ok(), Some(size));
        }
    });
    assert_eq!(files, 4);
    assert!(dir_exists(&root));
    Ok(())
}

#[test]
fn host_description() {
    let info = HostInfo::collect();
    let line = format!(
        "{} with {} cpus, {} workers",
        platform(),
        info.cpu_count,
        worker_threads(0)
    );
    assert!(line.starts_with(sys::os().as_str()));
    assert!(worker_threads(0) >= 1);
    assert!(atoi64(&text::itoa64(info.total_memory as i64)) > 0);
}
