//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::services::rates::DEFAULT_ENDPOINTS;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 上游 API 请求配置
///
/// 默认不设超时，只受托管平台自身的请求时限约束
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 请求超时时间（秒）
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// 连接超时时间（秒）
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

/// 数据源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// 汇率 API 地址，按顺序尝试
    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<String>,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// 实际读取的配置文件，None 表示使用默认配置
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_log_level() -> String { "info".to_string() }
fn default_endpoints() -> Vec<String> {
    DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            endpoints: default_endpoints(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const CONFIG_PATHS: [&str; 2] = ["config.json", "config/config.json"];

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("读取配置文件 {} 失败", path.display()))?;
        let mut config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件 {} 失败", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// 加载配置，按顺序查找配置文件，都不存在则使用默认值
    ///
    /// 在日志系统初始化之前调用，文件存在但内容无效时直接返回错误
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&CONFIG_PATHS)
    }

    fn load_from<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<Self> {
        for path in paths {
            if path.as_ref().exists() {
                return Self::from_file(path);
            }
        }
        Ok(Self::default())
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
