//! 公共工具模块

pub mod auth;

use chrono::{SecondsFormat, Utc};

/// 当前 UTC 时间的 RFC3339 字符串
///
/// 固定微秒精度，保证字典序与时间序一致（数据库按 TEXT 排序）
pub fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
