//! 日志系统
//!
//! 提供统一的日志记录功能。日志只写入标准错误，标准输出留给进程树。

use crate::config::DEFAULT_LOG_FILTER;
use anyhow::Result;
use std::io::IsTerminal;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 初始化日志系统
///
/// # Arguments
/// * `log_level` - 日志级别 (trace, debug, info, warn, error)，如果为 None 则使用环境变量 RUST_LOG
///
/// # Examples
/// ```no_run
/// use proctree::utils::logger::init_logger;
///
/// // 使用默认配置（从环境变量读取）
/// init_logger(None).unwrap();
///
/// // 指定日志级别
/// init_logger(Some("debug")).unwrap();
/// ```
pub fn init_logger(log_level: Option<&str>) -> Result<()> {
    let env_filter = build_filter(log_level)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("Logger initialized");
    Ok(())
}

/// 构建 EnvFilter，优先使用参数指定的级别，其次使用 RUST_LOG 环境变量
fn build_filter(log_level: Option<&str>) -> Result<EnvFilter> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };
    Ok(filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_is_accepted() {
        assert!(build_filter(Some("debug")).is_ok());
        assert!(build_filter(Some("proctree=trace,warn")).is_ok());
    }

    #[test]
    fn malformed_level_is_rejected() {
        assert!(build_filter(Some("proctree=notalevel")).is_err());
    }
}
