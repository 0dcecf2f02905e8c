//! Fake procfs trees for tests that go through the filesystem.

#![allow(dead_code)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write `<root>/<pid>/stat` for each `(name, pid, ppid)`, plus the usual
/// non-process entries a real procfs carries.
pub fn fake_proc(processes: &[(&str, u32, u32)]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp proc root");
    for (name, pid, ppid) in processes {
        write_stat(dir.path(), *pid, &format!("{pid} ({name}) S {ppid} {pid} {pid} 0 -1 4194560"));
    }
    fs::create_dir(dir.path().join("sys")).unwrap();
    fs::write(dir.path().join("uptime"), "1234.56 789.01\n").unwrap();
    dir
}

pub fn write_stat(root: &Path, pid: u32, line: &str) {
    write_stat_bytes(root, pid, format!("{line}\n").as_bytes());
}

/// Like [`write_stat`], for contents that are not valid UTF-8.
pub fn write_stat_bytes(root: &Path, pid: u32, contents: &[u8]) {
    let process_dir = root.join(pid.to_string());
    fs::create_dir_all(&process_dir).unwrap();
    fs::write(process_dir.join("stat"), contents).unwrap();
}

pub fn sample_proc() -> TempDir {
    fake_proc(&[("A", 1, 0), ("B", 2, 1), ("C", 3, 1), ("D", 4, 2)])
}
