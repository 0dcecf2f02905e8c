//! Live process table
//!
//! Platform strategy:
//! - Unix: psutil enumerates `/proc` (or the platform equivalent) and reads
//!   each process's name and parent
//! - Elsewhere: the source reports itself unavailable

#[cfg(unix)]
use psutil::process::Process;

use crate::core::models::ProcessRecord;
use crate::error::ProcTreeResult;
#[cfg(not(unix))]
use crate::error::errors;
use crate::source::ProcessSource;
#[cfg(unix)]
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct LiveProcessSource;

impl LiveProcessSource {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSource for LiveProcessSource {
    fn origin(&self) -> String {
        "live process table".to_string()
    }

    fn records(&mut self) -> ProcTreeResult<Vec<ProcessRecord>> {
        #[cfg(unix)]
        {
            read_processes_unix(&self.origin())
        }

        #[cfg(not(unix))]
        {
            Err(errors::source_unavailable(
                self.origin(),
                "live process listing is only supported on Unix",
            ))
        }
    }
}

#[cfg(unix)]
fn read_processes_unix(origin: &str) -> ProcTreeResult<Vec<ProcessRecord>> {
    use crate::error::errors::source_unavailable;

    let pids =
        psutil::process::pids().map_err(|err| source_unavailable(origin, err.to_string()))?;

    let mut records = Vec::with_capacity(pids.len());
    for pid in pids {
        let record = read_process_unix(pid)?;
        trace!(pid = record.pid, ppid = record.ppid, "read live process");
        records.push(record);
    }
    Ok(records)
}

#[cfg(unix)]
fn read_process_unix(pid: u32) -> ProcTreeResult<ProcessRecord> {
    use crate::error::errors::metadata_unreadable;

    let unreadable = |err: psutil::process::ProcessError| metadata_unreadable(pid, err.to_string());

    let process = Process::new(pid).map_err(unreadable)?;
    let name = process.name().map_err(unreadable)?;
    // No parent means the process hangs off the kernel root.
    let ppid = process.ppid().map_err(unreadable)?.unwrap_or(0);
    Ok(ProcessRecord::new(name, pid, ppid))
}
