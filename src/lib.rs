//! proctree library
//!
//! Snapshot the process table and print it as an indented parent/child tree.

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod source;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::TreeConfig;
pub use crate::core::models::ProcessRecord;
pub use crate::core::process_tree::{render_to_string, render_tree, TreeRenderer};
pub use crate::core::registry::ProcessRegistry;
pub use error::{ProcTreeError, ProcTreeResult};
pub use source::{LiveProcessSource, ProcDirSource, ProcessSource, StaticSource};
