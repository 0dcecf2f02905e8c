//! procfs directory source
//!
//! Reads `<root>/<pid>/stat` for every numeric entry under a procfs-style
//! root. Useful when the host's `/proc` is mounted somewhere else, e.g.
//! `/host/proc` inside a container.

use crate::core::models::ProcessRecord;
use crate::error::errors::{metadata_unreadable, source_unavailable};
use crate::error::ProcTreeResult;
use crate::source::ProcessSource;
use std::fs;
use std::path::PathBuf;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct ProcDirSource {
    root: PathBuf,
}

impl ProcDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_process(&self, pid: u32) -> ProcTreeResult<ProcessRecord> {
        let stat_path = self.root.join(pid.to_string()).join("stat");
        let raw = fs::read(&stat_path)
            .map_err(|err| metadata_unreadable(pid, format!("{}: {err}", stat_path.display())))?;
        // comm is arbitrary bytes (prctl PR_SET_NAME), not necessarily UTF-8.
        parse_stat(pid, &String::from_utf8_lossy(&raw))
    }
}

impl ProcessSource for ProcDirSource {
    fn origin(&self) -> String {
        self.root.display().to_string()
    }

    fn records(&mut self) -> ProcTreeResult<Vec<ProcessRecord>> {
        let entries =
            fs::read_dir(&self.root).map_err(|err| source_unavailable(self.origin(), err.to_string()))?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| source_unavailable(self.origin(), err.to_string()))?;
            // Only numeric entries are processes; `self`, `sys`, etc. are not.
            let Some(pid) = entry.file_name().to_str().and_then(|name| name.parse::<u32>().ok())
            else {
                continue;
            };
            let record = self.read_process(pid)?;
            trace!(pid = record.pid, ppid = record.ppid, "read stat file");
            records.push(record);
        }
        Ok(records)
    }
}

/// Parse a `/proc/<pid>/stat` line: `pid (comm) state ppid ...`.
///
/// `comm` may itself contain spaces and parentheses, so it spans from the
/// first `(` to the last `)`.
pub fn parse_stat(pid: u32, raw: &str) -> ProcTreeResult<ProcessRecord> {
    let open = raw
        .find('(')
        .ok_or_else(|| metadata_unreadable(pid, "stat line has no '('"))?;
    let close = raw
        .rfind(')')
        .filter(|close| *close > open)
        .ok_or_else(|| metadata_unreadable(pid, "stat line has no closing ')'"))?;

    let stat_pid = raw[..open].trim();
    if stat_pid.parse::<u32>().ok() != Some(pid) {
        return Err(metadata_unreadable(
            pid,
            format!("stat line belongs to pid {stat_pid:?}"),
        ));
    }

    let name = &raw[open + 1..close];
    let mut fields = raw[close + 1..].split_whitespace();
    let _state = fields
        .next()
        .ok_or_else(|| metadata_unreadable(pid, "stat line has no state field"))?;
    let ppid = fields
        .next()
        .ok_or_else(|| metadata_unreadable(pid, "stat line has no ppid field"))?
        .parse::<u32>()
        .map_err(|err| metadata_unreadable(pid, format!("invalid ppid: {err}")))?;

    Ok(ProcessRecord::new(name, pid, ppid))
}
