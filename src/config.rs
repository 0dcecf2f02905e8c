//! Run configuration
//!
//! Constants shared across modules plus the immutable [`TreeConfig`] that is
//! built once from the parsed command line and threaded through population
//! and rendering.

use crate::commands::parser::Cli;
use crate::error::{ProcTreeError, ProcTreeResult};
use std::path::PathBuf;

pub const BINARY_NAME: &str = "proctree";

/// Indent token repeated once per tree level.
pub const INDENT: &str = "   ";
/// Longest accepted process name, in bytes.
pub const MAX_NAME_LEN: usize = 256;
/// Default registry capacity; matches the default kernel `pid_max`.
pub const DEFAULT_MAX_PROCESSES: usize = 32768;
/// Conceptual kernel root; never a stored record.
pub const DEFAULT_ROOT_PID: u32 = 0;
pub const DEFAULT_PROC_ROOT: &str = "/proc";

pub const MAX_PROCESSES_ENV: &str = "PROCTREE_MAX_PROCESSES";
pub const PROC_ROOT_ENV: &str = "PROCTREE_PROC_ROOT";
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where process records are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// The live process table through psutil.
    Live,
    /// `stat` files under a procfs-style directory.
    ProcDir(PathBuf),
}

/// Options for a single run. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeConfig {
    pub show_pids: bool,
    pub numeric_sort: bool,
    pub root_pid: u32,
    pub max_processes: usize,
    pub source: SourceKind,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            show_pids: false,
            numeric_sort: false,
            root_pid: DEFAULT_ROOT_PID,
            max_processes: DEFAULT_MAX_PROCESSES,
            source: SourceKind::Live,
        }
    }
}

impl TreeConfig {
    /// Build the run configuration from parsed arguments.
    ///
    /// clap already resolved the environment fallbacks, so this only applies
    /// defaults and validation.
    pub fn from_cli(cli: &Cli) -> ProcTreeResult<Self> {
        let source = match &cli.proc_root {
            Some(dir) => SourceKind::ProcDir(dir.clone()),
            None => SourceKind::Live,
        };

        let config = Self {
            show_pids: cli.show_pids,
            numeric_sort: cli.numeric_sort,
            root_pid: cli.root.unwrap_or(DEFAULT_ROOT_PID),
            max_processes: cli.max_processes.unwrap_or(DEFAULT_MAX_PROCESSES),
            source,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_show_pids(mut self, show_pids: bool) -> Self {
        self.show_pids = show_pids;
        self
    }

    pub fn with_numeric_sort(mut self, numeric_sort: bool) -> Self {
        self.numeric_sort = numeric_sort;
        self
    }

    pub fn with_root_pid(mut self, root_pid: u32) -> Self {
        self.root_pid = root_pid;
        self
    }

    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    pub fn validate(&self) -> ProcTreeResult<()> {
        if self.max_processes == 0 {
            return Err(ProcTreeError::Config {
                message: "max-processes must be at least 1".to_string(),
            });
        }
        if let SourceKind::ProcDir(dir) = &self.source {
            if dir.as_os_str().is_empty() {
                return Err(ProcTreeError::Config {
                    message: "proc-root cannot be empty".to_string(),
                });
            }
        }
        Ok(())
    }
}
