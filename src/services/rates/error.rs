//! 数据源错误类型

use thiserror::Error;

/// 单个数据源的失败原因
///
/// 任何一种都只记录日志并切换到下一个数据源，不会单独返回给调用方
#[derive(Debug, Error)]
pub enum FetchError {
    /// 网络层失败：DNS、连接、超时、读取响应体
    #[error("请求失败: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// 非 2xx 状态码
    #[error("数据源返回错误状态码: {0}")]
    Status(u16),

    /// 响应体不是合法 JSON
    #[error("响应不是合法的 JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// 缺少 rates 字段或为空值
    #[error("响应中缺少 rates 字段")]
    MissingRates,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Transport(Box::new(e))
    }
}
