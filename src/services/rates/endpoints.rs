//! 数据源地址列表

use anyhow::{anyhow, bail, Result};
use url::Url;

/// 默认数据源，按顺序尝试
pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "https://api.exchangerate.host/latest?base=NGN",
    "https://api.frankfurter.app/latest?from=NGN",
    "https://open.er-api.com/v6/latest/NGN",
];

/// 有序且非空的数据源地址列表，进程启动后不再变化
#[derive(Debug, Clone)]
pub struct EndpointList {
    urls: Vec<String>,
}

impl EndpointList {
    /// 校验并创建列表：至少一个地址，且每个都是 http/https 绝对地址
    pub fn new(urls: Vec<String>) -> Result<Self> {
        if urls.is_empty() {
            bail!("数据源列表不能为空");
        }

        for raw in &urls {
            let url = Url::parse(raw).map_err(|e| anyhow!("无效的数据源地址 {}: {}", raw, e))?;
            if url.scheme() != "http" && url.scheme() != "https" {
                bail!("数据源地址 {} 必须使用 http 或 https", raw);
            }
        }

        Ok(Self { urls })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub(crate) fn len(&self) -> usize {
        self.urls.len()
    }
}
