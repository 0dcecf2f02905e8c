//! CLI 命令行参数解析
//!
//! 使用 clap 定义命令行接口；解析结果随后转换为不可变的 TreeConfig

use crate::config::{MAX_PROCESSES_ENV, PROC_ROOT_ENV};
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Show running processes as a tree
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "proctree",
    about = "Show running processes as a tree",
    disable_version_flag = true
)]
pub struct Cli {
    /// Append each process's PID to its line
    #[arg(short = 'p', long = "show-pids")]
    pub show_pids: bool,

    /// Sort processes by PID before walking the tree
    #[arg(short = 'n', long = "numeric-sort")]
    pub numeric_sort: bool,

    /// Print version and license information, then exit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// Print the descendants of PID instead of the whole tree
    #[arg(short = 'r', long = "root", value_name = "PID")]
    pub root: Option<u32>,

    /// Maximum number of processes to track
    #[arg(long, value_name = "N", env = MAX_PROCESSES_ENV)]
    pub max_processes: Option<usize>,

    /// Read process stat files from DIR instead of the live process table
    #[arg(long, value_name = "DIR", env = PROC_ROOT_ENV)]
    pub proc_root: Option<PathBuf>,

    /// Log filter directive (trace, debug, info, warn, error); defaults to RUST_LOG
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// 尝试解析命令行参数（用于测试或自定义 argv）
    pub fn try_parse_args_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// 解析命令行参数（失败时由 clap 处理错误输出和退出）
    pub fn parse_args() -> Self {
        match Self::try_parse_args_from(std::env::args_os()) {
            Ok(cli) => cli,
            Err(err) => err.exit(),
        }
    }
}
