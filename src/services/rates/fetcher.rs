//! 汇率获取核心逻辑
//!
//! 顺序尝试每个数据源，第一个通过校验的结果直接返回，不再请求后续数据源

use serde_json::Value;
use std::sync::Arc;

use super::endpoints::EndpointList;
use super::error::FetchError;
use super::source::{ProviderReply, RateSource};
use crate::models::RatesResponse;

/// 成功获取的汇率数据
#[derive(Debug, Clone)]
pub struct FetchedRates {
    /// 命中的数据源地址
    pub endpoint: String,
    /// 数据源原始 JSON
    pub body: Value,
}

/// 校验单个数据源的响应：2xx、合法 JSON、包含非空 rates
pub fn validate_reply(reply: ProviderReply) -> Result<Value, FetchError> {
    if !(200..300).contains(&reply.status) {
        return Err(FetchError::Status(reply.status));
    }

    let data: Value = serde_json::from_slice(&reply.body)?;

    match data.get("rates") {
        Some(rates) if is_truthy(rates) => Ok(data),
        _ => Err(FetchError::MissingRates),
    }
}

// null、false、0、"" 都视为缺失
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 汇率获取器
pub struct RateFetcher {
    endpoints: EndpointList,
    source: Arc<dyn RateSource>,
}

impl RateFetcher {
    pub fn new(endpoints: EndpointList, source: Arc<dyn RateSource>) -> Self {
        Self { endpoints, source }
    }

    pub fn endpoints(&self) -> &EndpointList {
        &self.endpoints
    }

    /// 依次尝试数据源，全部失败时返回 None
    pub async fn fetch(&self) -> Option<FetchedRates> {
        for url in self.endpoints.iter() {
            match self.try_endpoint(url).await {
                Ok(body) => {
                    return Some(FetchedRates {
                        endpoint: url.to_string(),
                        body,
                    });
                }
                Err(e) => {
                    log::error!("从 {} 获取汇率失败: {}", url, e);
                }
            }
        }

        log::warn!("全部 {} 个数据源均不可用", self.endpoints.len());
        None
    }

    async fn try_endpoint(&self, url: &str) -> Result<Value, FetchError> {
        let reply = self.source.get(url).await?;
        validate_reply(reply)
    }

    /// 处理一次汇率请求，返回完整响应
    pub async fn handle(&self) -> RatesResponse {
        match self.fetch().await {
            Some(rates) => {
                log::info!("使用数据源 {}", rates.endpoint);
                RatesResponse::ok(rates.body)
            }
            None => RatesResponse::unavailable(),
        }
    }
}
