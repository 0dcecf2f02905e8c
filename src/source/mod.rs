//! Process sources
//!
//! A [`ProcessSource`] yields one [`ProcessRecord`] per visible process.
//! Enumeration is all-or-nothing: any process that cannot be read aborts
//! the snapshot.

pub mod live;
pub mod proc_dir;

pub use live::LiveProcessSource;
pub use proc_dir::ProcDirSource;

use crate::config::{SourceKind, TreeConfig};
use crate::core::models::ProcessRecord;
use crate::error::ProcTreeResult;

pub trait ProcessSource {
    /// Human-readable description used in diagnostics.
    fn origin(&self) -> String;

    /// Enumerate every visible process, in the order the host yields them.
    fn records(&mut self) -> ProcTreeResult<Vec<ProcessRecord>>;
}

/// Fixed, in-memory list of records.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ProcessRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self { records }
    }
}

impl ProcessSource for StaticSource {
    fn origin(&self) -> String {
        "static list".to_string()
    }

    fn records(&mut self) -> ProcTreeResult<Vec<ProcessRecord>> {
        Ok(self.records.clone())
    }
}

/// Pick the source the configuration asks for.
pub fn open_source(config: &TreeConfig) -> Box<dyn ProcessSource> {
    match &config.source {
        SourceKind::Live => Box::new(LiveProcessSource::new()),
        SourceKind::ProcDir(root) => Box::new(ProcDirSource::new(root.clone())),
    }
}
