//! Rendering scenarios over hand-built process tables.

use pretty_assertions::assert_eq;
use proctree::commands::tree;
use proctree::config::DEFAULT_MAX_PROCESSES;
use proctree::{
    render_to_string, render_tree, ProcTreeError, ProcessRecord, ProcessRegistry, StaticSource,
    TreeConfig,
};
use std::io::{self, Write};
use test_case::test_case;

fn sample() -> Vec<ProcessRecord> {
    vec![
        ProcessRecord::new("A", 1, 0),
        ProcessRecord::new("B", 2, 1),
        ProcessRecord::new("C", 3, 1),
        ProcessRecord::new("D", 4, 2),
    ]
}

fn run(records: Vec<ProcessRecord>, config: &TreeConfig) -> Result<String, ProcTreeError> {
    let mut out = Vec::new();
    tree::run(config, &mut StaticSource::new(records), &mut out)?;
    Ok(String::from_utf8(out).expect("tree output is UTF-8"))
}

#[test_case(false, false, "A\n   B\n      D\n   C\n" ; "plain insertion order")]
#[test_case(false, true, "A\n   B\n      D\n   C\n" ; "numeric sort")]
#[test_case(true, false, "A (pid: 1)\n   B (pid: 2)\n      D (pid: 4)\n   C (pid: 3)\n" ; "show pids")]
#[test_case(true, true, "A (pid: 1)\n   B (pid: 2)\n      D (pid: 4)\n   C (pid: 3)\n" ; "show pids sorted")]
fn sample_tree(show_pids: bool, numeric_sort: bool, expected: &str) {
    let config = TreeConfig::default()
        .with_show_pids(show_pids)
        .with_numeric_sort(numeric_sort);
    assert_eq!(run(sample(), &config).unwrap(), expected);
}

#[test]
fn orphan_with_unknown_parent_is_not_printed() {
    let output = run(vec![ProcessRecord::new("X", 5, 99)], &TreeConfig::default()).unwrap();
    assert_eq!(output, "");
}

#[test]
fn orphan_subtree_is_dropped_but_rest_survives() {
    let mut records = sample();
    records.push(ProcessRecord::new("X", 5, 99));
    records.push(ProcessRecord::new("Y", 6, 5));
    let output = run(records, &TreeConfig::default()).unwrap();
    assert_eq!(output, "A\n   B\n      D\n   C\n");
}

#[test]
fn capacity_overflow_aborts_before_output() {
    let records = vec![
        ProcessRecord::new("A", 1, 0),
        ProcessRecord::new("B", 2, 1),
        ProcessRecord::new("C", 3, 1),
    ];
    let config = TreeConfig::default().with_max_processes(2);
    let err = run(records, &config).unwrap_err();
    assert!(matches!(err, ProcTreeError::CapacityExceeded { capacity: 2 }));
}

#[test]
fn several_top_level_processes_form_a_forest() {
    let records = vec![
        ProcessRecord::new("systemd", 1, 0),
        ProcessRecord::new("kthreadd", 2, 0),
        ProcessRecord::new("kworker/0:0", 5, 2),
        ProcessRecord::new("sshd", 700, 1),
        ProcessRecord::new("bash", 701, 700),
    ];
    let output = run(records, &TreeConfig::default().with_show_pids(true)).unwrap();
    assert_eq!(
        output,
        "systemd (pid: 1)\n   sshd (pid: 700)\n      bash (pid: 701)\nkthreadd (pid: 2)\n   kworker/0:0 (pid: 5)\n"
    );
}

#[test]
fn children_listed_before_parent_are_still_nested() {
    let records = vec![
        ProcessRecord::new("leaf", 30, 20),
        ProcessRecord::new("mid", 20, 10),
        ProcessRecord::new("top", 10, 0),
    ];
    let output = run(records, &TreeConfig::default()).unwrap();
    assert_eq!(output, "top\n   mid\n      leaf\n");
}

/// Counts output instead of buffering it; a chain of n records renders
/// quadratically many indent bytes.
#[derive(Default)]
struct CountingSink {
    bytes: usize,
    lines: usize,
}

impl Write for CountingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes += buf.len();
        self.lines += buf.iter().filter(|byte| **byte == b'\n').count();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn deep_chain_indents_three_spaces_per_level() {
    let mut registry = ProcessRegistry::with_capacity(64);
    for pid in 1..=50u32 {
        registry
            .add(ProcessRecord::new(format!("n{pid}"), pid, pid - 1))
            .unwrap();
    }
    let output = render_to_string(&registry, &TreeConfig::default()).unwrap();
    let last = output.lines().last().unwrap();
    assert_eq!(last, format!("{}n50", " ".repeat(3 * 49)));
    assert_eq!(output.lines().count(), 50);
}

#[test]
fn chain_as_deep_as_default_capacity_renders() {
    let depth = DEFAULT_MAX_PROCESSES as u32;
    let mut registry = ProcessRegistry::with_capacity(DEFAULT_MAX_PROCESSES);
    for pid in 1..=depth {
        registry.add(ProcessRecord::new("n", pid, pid - 1)).unwrap();
    }

    let mut sink = CountingSink::default();
    render_tree(&registry, &TreeConfig::default(), &mut sink).unwrap();

    // Line k is 3k spaces, "n" and a newline.
    let expected_bytes: usize = (0..DEFAULT_MAX_PROCESSES).map(|k| 3 * k + 2).sum();
    assert_eq!(sink.lines, DEFAULT_MAX_PROCESSES);
    assert_eq!(sink.bytes, expected_bytes);
}
