//! 时间工具函数
//!
//! 存储层统一使用 `i64` Unix millis。

/// Current time as Unix millis
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
