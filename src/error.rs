//! Unified error handling for proctree
//!
//! Every failure here is fatal to the run. Orphaned or cyclic parent links
//! are not errors and never reach this module.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum ProcTreeError {
    /// The process enumeration itself cannot be opened
    #[error("cannot enumerate processes from {origin}: {reason}")]
    SourceUnavailable { origin: String, reason: String },

    /// A discovered process could not be read or parsed
    #[error("cannot read metadata for process {pid}: {reason}")]
    MetadataUnreadable { pid: u32, reason: String },

    /// More processes than the registry may hold
    #[error("process table full: more than {capacity} processes")]
    CapacityExceeded { capacity: usize },

    #[error("process {pid} name is {len} bytes, limit is {max}")]
    NameTooLong { pid: u32, len: usize, max: usize },

    #[error("failed to write process tree: {0}")]
    Output(#[from] io::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Source,
    Metadata,
    Resource,
    Validation,
    Output,
    Config,
}

impl ErrorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::Source => "Source",
            ErrorCategory::Metadata => "Metadata",
            ErrorCategory::Resource => "Resource",
            ErrorCategory::Validation => "Validation",
            ErrorCategory::Output => "Output",
            ErrorCategory::Config => "Configuration",
        }
    }
}

impl ProcTreeError {
    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            ProcTreeError::SourceUnavailable { .. } => ErrorCategory::Source,
            ProcTreeError::MetadataUnreadable { .. } => ErrorCategory::Metadata,
            ProcTreeError::CapacityExceeded { .. } => ErrorCategory::Resource,
            ProcTreeError::NameTooLong { .. } => ErrorCategory::Validation,
            ProcTreeError::Output(_) => ErrorCategory::Output,
            ProcTreeError::Config { .. } => ErrorCategory::Config,
        }
    }

    /// One-line diagnostic for stderr.
    pub fn user_message(&self) -> String {
        format!("{} error: {}", self.category().display_name(), self)
    }

    /// A closed stdout (`proctree | head`) is not worth a diagnostic.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ProcTreeError::Output(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result type alias for convenience
pub type ProcTreeResult<T> = Result<T, ProcTreeError>;

/// Convenience functions for creating common errors
pub mod errors {
    use super::*;

    pub fn source_unavailable(
        origin: impl Into<String>,
        reason: impl Into<String>,
    ) -> ProcTreeError {
        ProcTreeError::SourceUnavailable {
            origin: origin.into(),
            reason: reason.into(),
        }
    }

    pub fn metadata_unreadable(pid: u32, reason: impl Into<String>) -> ProcTreeError {
        ProcTreeError::MetadataUnreadable {
            pid,
            reason: reason.into(),
        }
    }
}
