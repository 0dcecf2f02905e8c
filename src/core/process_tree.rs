//! Process tree rendering
//!
//! Walks the registry depth-first from a root pid and writes one indented
//! line per process in pre-order.
//!
//! Children are grouped by parent pid in one pass over the registry, each
//! list kept in registry order (insertion order, or ascending pid once
//! sorted). The walk keeps an explicit stack, so chain depth is bounded by
//! the registry capacity and not by the thread stack.

use crate::config::{TreeConfig, INDENT};
use crate::core::models::ProcessRecord;
use crate::core::registry::ProcessRegistry;
use crate::error::ProcTreeResult;
use std::collections::HashMap;
use std::io::Write;
use tracing::debug;

/// Traversal context for one render. Owns the visited markers.
pub struct TreeRenderer<'a> {
    records: &'a [ProcessRecord],
    children: HashMap<u32, Vec<usize>>,
    visited: Vec<bool>,
    show_pids: bool,
}

/// One open level of the walk: the parent whose children are being listed,
/// the next position in its child list, and the indentation of those children.
struct Frame {
    parent: u32,
    next: usize,
    depth: usize,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(registry: &'a ProcessRegistry, config: &TreeConfig) -> Self {
        let records = registry.all();
        let mut children: HashMap<u32, Vec<usize>> = HashMap::new();
        for (index, record) in records.iter().enumerate() {
            children.entry(record.ppid).or_default().push(index);
        }
        Self {
            records,
            children,
            visited: vec![false; records.len()],
            show_pids: config.show_pids,
        }
    }

    /// Print every not-yet-visited descendant of `root_pid`, starting at
    /// `depth` indentation units.
    ///
    /// A record is marked visited before its children are listed, so a
    /// cyclic ppid chain terminates and no record is printed twice. Records
    /// whose chain never reaches `root_pid` are skipped without error.
    pub fn print_tree<W: Write>(
        &mut self,
        out: &mut W,
        root_pid: u32,
        depth: usize,
    ) -> ProcTreeResult<()> {
        let mut stack = vec![Frame {
            parent: root_pid,
            next: 0,
            depth,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(index) = self.next_child(frame) else {
                stack.pop();
                continue;
            };
            let child_depth = frame.depth;

            let records = self.records;
            let record = &records[index];
            self.write_line(out, record, child_depth)?;
            self.visited[index] = true;
            stack.push(Frame {
                parent: record.pid,
                next: 0,
                depth: child_depth + 1,
            });
        }
        Ok(())
    }

    /// Advance `frame` to its next unvisited child, if any.
    fn next_child(&self, frame: &mut Frame) -> Option<usize> {
        let siblings = self.children.get(&frame.parent)?;
        while let Some(&index) = siblings.get(frame.next) {
            frame.next += 1;
            if !self.visited[index] {
                return Some(index);
            }
        }
        None
    }

    fn write_line<W: Write>(
        &self,
        out: &mut W,
        record: &ProcessRecord,
        depth: usize,
    ) -> ProcTreeResult<()> {
        let indent = INDENT.repeat(depth);
        if self.show_pids {
            writeln!(out, "{indent}{} (pid: {})", record.name, record.pid)?;
        } else {
            writeln!(out, "{indent}{}", record.name)?;
        }
        Ok(())
    }

    /// Number of records printed so far.
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|seen| **seen).count()
    }

    /// Records never reached from any root walked so far.
    pub fn unvisited(&self) -> impl Iterator<Item = &'a ProcessRecord> + '_ {
        self.records
            .iter()
            .zip(self.visited.iter())
            .filter(|(_, seen)| !**seen)
            .map(|(record, _)| record)
    }
}

/// Render the tree below `config.root_pid` into `out`.
pub fn render_tree<W: Write>(
    registry: &ProcessRegistry,
    config: &TreeConfig,
    out: &mut W,
) -> ProcTreeResult<()> {
    let mut renderer = TreeRenderer::new(registry, config);
    renderer.print_tree(out, config.root_pid, 0)?;

    let omitted = registry.len() - renderer.visited_count();
    debug!(
        printed = renderer.visited_count(),
        omitted,
        root_pid = config.root_pid,
        "process tree rendered"
    );
    Ok(())
}

/// Render the tree into a `String`.
pub fn render_to_string(registry: &ProcessRegistry, config: &TreeConfig) -> ProcTreeResult<String> {
    let mut buffer = Vec::new();
    render_tree(registry, config, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
