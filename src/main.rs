//! 汇率中转服务
//!
//! 依次请求多个第三方汇率 API，返回第一个有效结果
//! 数据来源：exchangerate.host、frankfurter.app、er-api.com

mod config;     // 配置加载
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务

use actix_web::{web, App, HttpServer, middleware::Logger};
use env_logger::Env;
use std::io;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::rates::{EndpointList, HttpRateSource, RateFetcher};

/// 应用程序入口
///
/// 加载配置后启动 HTTP 服务器，默认监听 0.0.0.0:8080
#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::load().map_err(to_io_error)?;

    // 初始化日志系统，RUST_LOG 优先于配置文件
    env_logger::init_from_env(Env::default().default_filter_or(config.log.level.clone()));

    match &config.source {
        Some(path) => log::info!("从 {} 加载配置成功", path.display()),
        None => log::info!("未找到配置文件，使用默认配置"),
    }

    let endpoints = EndpointList::new(config.sources.endpoints.clone()).map_err(to_io_error)?;
    let source = HttpRateSource::from_config(&config.api).map_err(to_io_error)?;
    let fetcher = web::Data::new(RateFetcher::new(endpoints, Arc::new(source)));

    log::info!(
        "启动汇率服务，数据源 {} 个，监听 {}",
        fetcher.endpoints().len(),
        config.bind_addr()
    );

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(fetcher.clone())
            .configure(handlers::config)  // 配置路由
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server.bind(config.bind_addr())?.run().await
}

fn to_io_error(e: anyhow::Error) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("{:#}", e))
}
