//! 测试用数据源，按地址返回预设结果并记录调用顺序

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::endpoints::EndpointList;
use super::error::FetchError;
use super::fetcher::RateFetcher;
use super::source::{ProviderReply, RateSource};

/// 单个地址的预设行为
#[derive(Clone)]
pub enum Script {
    Reply(u16, String),
    /// 模拟连接被拒绝
    Refused,
}

impl Script {
    pub fn reply(status: u16, body: &str) -> Self {
        Script::Reply(status, body.to_string())
    }
}

#[derive(Default)]
pub struct ScriptedSource {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, url: &str, script: Script) -> Self {
        self.scripts.insert(url.to_string(), script);
        self
    }

    /// 按调用顺序返回已请求的地址
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RateSource for ScriptedSource {
    async fn get(&self, url: &str) -> Result<ProviderReply, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.scripts.get(url) {
            Some(Script::Reply(status, body)) => Ok(ProviderReply::new(*status, body.as_bytes())),
            Some(Script::Refused) => Err(FetchError::Transport("connection refused".into())),
            None => Err(FetchError::Transport(format!("no script for {}", url).into())),
        }
    }
}

/// 用给定地址和预设数据源创建 RateFetcher，同时返回数据源以便检查调用记录
pub fn fetcher_for(urls: &[&str], source: ScriptedSource) -> (RateFetcher, Arc<ScriptedSource>) {
    let endpoints = EndpointList::new(urls.iter().map(|u| u.to_string()).collect()).unwrap();
    let source = Arc::new(source);
    (RateFetcher::new(endpoints, source.clone()), source)
}
