//! 版本信息管理
//!
//! `-V/--version` 输出的名称、版本、版权与许可证信息

use std::io::{self, Write};

pub const COPYRIGHT: &str = "Copyright (C) 2025 proctree contributors";

/// 获取构建信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub license: &'static str,
}

impl BuildInfo {
    /// 获取当前构建信息
    pub fn get() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }

    /// 写出版本信息
    pub fn write_banner<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{} {}", self.name, self.version)?;
        writeln!(out, "{COPYRIGHT}")?;
        writeln!(out, "License: {}", self.license)?;
        writeln!(
            out,
            "This is free software: you are free to change and redistribute it."
        )?;
        out.flush()
    }
}
