//! 核心业务逻辑模块
//!
//! 包含进程记录、进程注册表和进程树渲染

pub mod models;
pub mod process_tree;
pub mod registry;
