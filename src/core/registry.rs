//! Process registry
//!
//! Flat, bounded store for the records of one snapshot. Filled once from a
//! [`ProcessSource`], optionally sorted by pid, then only read.

use crate::core::models::ProcessRecord;
use crate::error::{ProcTreeError, ProcTreeResult};
use crate::source::ProcessSource;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone)]
pub struct ProcessRegistry {
    records: Vec<ProcessRecord>,
    capacity: usize,
}

impl ProcessRegistry {
    /// Create an empty registry holding at most `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::new(),
            capacity,
        }
    }

    /// Drain `source` into a fresh registry.
    ///
    /// The first failure aborts population; no partial registry is returned.
    pub fn populate(source: &mut dyn ProcessSource, capacity: usize) -> ProcTreeResult<Self> {
        let origin = source.origin();
        let records = source.records()?;
        debug!(origin = %origin, discovered = records.len(), "process snapshot taken");

        let mut registry = Self::with_capacity(capacity);
        for record in records {
            registry.add(record)?;
        }
        Ok(registry)
    }

    /// Append a validated record.
    pub fn add(&mut self, record: ProcessRecord) -> ProcTreeResult<()> {
        if self.records.len() >= self.capacity {
            warn!(capacity = self.capacity, pid = record.pid, "process registry is full");
            return Err(ProcTreeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        record.validate()?;
        trace!(pid = record.pid, ppid = record.ppid, name = %record.name, "registered");
        self.records.push(record);
        Ok(())
    }

    /// Order records by ascending pid. Pids are unique, so stability is moot.
    pub fn sort_by_pid_ascending(&mut self) {
        self.records.sort_unstable_by_key(|record| record.pid);
        debug!(count = self.records.len(), "registry sorted by pid");
    }

    /// Ordered read-only view for the renderer.
    pub fn all(&self) -> &[ProcessRecord] {
        &self.records
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessRecord> {
        self.records.iter().find(|record| record.pid == pid)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
