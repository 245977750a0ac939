//! 服务器配置
//!
//! # 环境变量
//!
//! | 环境变量 | 默认值 | 说明 |
//! |----------|--------|------|
//! | WORK_DIR | /var/lib/coral/pos | 工作目录 (数据库、日志) |
//! | HTTP_PORT | 3000 | HTTP 服务端口 |
//! | TABLE_COUNT | 25 | 桌台数量 (编号 1..=N) |
//! | LOG_LEVEL | info | 日志级别 |
//! | ENVIRONMENT | development | 运行环境 |

use std::path::PathBuf;

/// Number of dine-in tables when `TABLE_COUNT` is not set
pub const DEFAULT_TABLE_COUNT: u8 = 25;

#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 桌台数量，桌号 1..=table_count
    pub table_count: u8,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置，未设置的使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/coral/pos".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            table_count: std::env::var("TABLE_COUNT")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_TABLE_COUNT),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Path of the redb database file
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("checkout.redb")
    }

    /// Directory for rotated log files
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }
}

/// 设置运行环境: dotenv + 日志
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("WORK_DIR")
        .ok()
        .map(|dir| format!("{dir}/logs"));
    if let Some(dir) = &log_dir {
        std::fs::create_dir_all(dir)?;
    }
    crate::utils::init_logger_with_file(level.as_deref(), log_dir.as_deref());

    Ok(())
}
