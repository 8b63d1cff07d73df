//! 上游请求
//!
//! RateSource 只负责发出一次 GET，状态码和响应格式的判断交给 RateFetcher

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::error::FetchError;
use crate::config::ApiConfig;

/// 一次到达数据源的请求结果
#[derive(Debug, Clone)]
pub struct ProviderReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ProviderReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self { status, body: body.into() }
    }
}

/// 汇率数据源
///
/// 只在网络层失败时返回 FetchError::Transport
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn get(&self, url: &str) -> Result<ProviderReply, FetchError>;
}

/// 基于 reqwest 的数据源实现，不附加任何自定义请求头
pub struct HttpRateSource {
    client: Client,
}

impl HttpRateSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 按配置构建 HTTP 客户端，未配置的超时项保持不限
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = config.connect_timeout_secs {
            builder = builder.connect_timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?))
    }
}

#[async_trait]
impl RateSource for HttpRateSource {
    async fn get(&self, url: &str) -> Result<ProviderReply, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(ProviderReply::new(status, body.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{web, App, HttpResponse, HttpServer};

    /// 在随机端口启动一个本地假数据源
    fn spawn_provider() -> String {
        let server = HttpServer::new(|| {
            App::new()
                .route(
                    "/ok",
                    web::get().to(|| async {
                        HttpResponse::Ok()
                            .content_type("application/json")
                            .body(r#"{"base":"NGN","rates":{"USD":0.0012}}"#)
                    }),
                )
                .route(
                    "/down",
                    web::get().to(|| async { HttpResponse::InternalServerError().body("down") }),
                )
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        format!("http://{}", addr)
    }

    #[actix_web::test]
    async fn test_reply_carries_status_and_body() {
        let base = spawn_provider();
        let source = HttpRateSource::from_config(&ApiConfig::default()).unwrap();

        let reply = source.get(&format!("{}/ok", base)).await.unwrap();
        assert_eq!(reply.status, 200);
        assert_eq!(reply.body, br#"{"base":"NGN","rates":{"USD":0.0012}}"#.to_vec());

        // 非 2xx 也算请求到达，由上层判断
        let reply = source.get(&format!("{}/down", base)).await.unwrap();
        assert_eq!(reply.status, 500);
    }

    #[actix_web::test]
    async fn test_connection_refused_is_transport_error() {
        let source = HttpRateSource::from_config(&ApiConfig {
            timeout_secs: Some(5),
            connect_timeout_secs: Some(2),
        })
        .unwrap();

        let err = source.get("http://127.0.0.1:1/latest").await.unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "实际错误: {}", err);
    }
}
