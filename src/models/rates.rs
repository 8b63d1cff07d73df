//! 汇率响应模型
//!
//! 核心逻辑只产出 RatesResponse 值，由 HTTP 层负责写回客户端

use serde_json::Value;

use super::response::ErrorBody;

/// 允许 CDN 缓存一小时，过期后后台重新验证
pub const CACHE_CONTROL_VALUE: &str = "s-maxage=3600, stale-while-revalidate";
/// 允许任意来源的页面跨域读取
pub const ALLOW_ORIGIN_VALUE: &str = "*";

pub const CACHE_CONTROL: &str = "Cache-Control";
pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";

/// 一次请求的完整响应：状态码、响应头、JSON 响应体
#[derive(Debug, Clone, PartialEq)]
pub struct RatesResponse {
    pub status: u16,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Value,
}

impl RatesResponse {
    /// 成功响应，原样透传数据源返回的 JSON
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            headers: vec![
                (CACHE_CONTROL, CACHE_CONTROL_VALUE),
                (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN_VALUE),
            ],
            body,
        }
    }

    /// 所有数据源均失败，503 且不带缓存头
    pub fn unavailable() -> Self {
        Self {
            status: 503,
            headers: Vec::new(),
            body: serde_json::json!(ErrorBody::all_sources_unavailable()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_response_headers() {
        let res = RatesResponse::ok(json!({"rates": {"USD": 0.0012}}));
        assert_eq!(res.status, 200);
        assert_eq!(
            res.headers,
            vec![
                ("Cache-Control", "s-maxage=3600, stale-while-revalidate"),
                ("Access-Control-Allow-Origin", "*"),
            ]
        );
        assert_eq!(res.body, json!({"rates": {"USD": 0.0012}}));
    }

    #[test]
    fn test_unavailable_response() {
        let res = RatesResponse::unavailable();
        assert_eq!(res.status, 503);
        assert!(res.headers.is_empty());
        assert_eq!(
            res.body,
            json!({"error": "All currency data sources are currently unavailable."})
        );
    }
}
