//! 工具模块
//!
//! 日志初始化与版本信息

pub mod logger;
pub mod version;
