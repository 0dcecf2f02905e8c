//! Tree command
//!
//! One run: snapshot the source, optionally sort, render.

use crate::config::TreeConfig;
use crate::core::process_tree::render_tree;
use crate::core::registry::ProcessRegistry;
use crate::error::ProcTreeResult;
use crate::source::ProcessSource;
use std::io::Write;
use tracing::info;

/// Populate a registry from `source` and print the tree to `out`.
///
/// Population completes before anything is written, so a failing source
/// never leaves a partial tree behind.
pub fn run<W: Write>(
    config: &TreeConfig,
    source: &mut dyn ProcessSource,
    out: &mut W,
) -> ProcTreeResult<()> {
    let mut registry = ProcessRegistry::populate(source, config.max_processes)?;
    if config.numeric_sort {
        registry.sort_by_pid_ascending();
    }
    info!(
        processes = registry.len(),
        root_pid = config.root_pid,
        "rendering process tree"
    );

    render_tree(&registry, config, out)?;
    out.flush()?;
    Ok(())
}
