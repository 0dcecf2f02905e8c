//! 统一数据模型定义
//!
//! 进程快照中的单条记录

use crate::config::MAX_NAME_LEN;
use crate::error::{ProcTreeError, ProcTreeResult};

/// One process as captured at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProcessRecord {
    /// 进程名称（不超过 MAX_NAME_LEN 字节）
    pub name: String,
    /// 进程PID
    pub pid: u32,
    /// 父进程PID，0 表示没有父进程
    pub ppid: u32,
}

impl ProcessRecord {
    pub fn new(name: impl Into<String>, pid: u32, ppid: u32) -> Self {
        Self {
            name: name.into(),
            pid,
            ppid,
        }
    }

    /// 校验数据完整性
    pub fn validate(&self) -> ProcTreeResult<()> {
        if self.name.len() > MAX_NAME_LEN {
            return Err(ProcTreeError::NameTooLong {
                pid: self.pid,
                len: self.name.len(),
                max: MAX_NAME_LEN,
            });
        }
        Ok(())
    }
}
