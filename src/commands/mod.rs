//! 命令行入口
//!
//! clap 参数定义与进程树命令

pub mod parser;
pub mod tree;

pub use parser::Cli;
