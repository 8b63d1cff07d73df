//! 通用 API 响应模型
//!
//! 定义错误响应和健康检查的固定格式

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// 所有数据源都失败时返回给调用方的提示
pub const ALL_SOURCES_UNAVAILABLE: &str = "All currency data sources are currently unavailable.";

/// 错误响应结构
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }

    /// 全部数据源不可用
    pub fn all_sources_unavailable() -> Self {
        Self::new(ALL_SOURCES_UNAVAILABLE)
    }
}

/// 健康检查响应
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    /// 固定为 "ok"
    pub status: String,
    /// 响应时间戳（RFC 3339，UTC）
    pub timestamp: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
