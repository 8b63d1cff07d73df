//! 汇率接口
//!
//! 请求方法、查询参数和请求体都不影响结果

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, Result};

use crate::models::RatesResponse;
use crate::services::rates::RateFetcher;

pub async fn get_rates(fetcher: web::Data<RateFetcher>) -> Result<HttpResponse> {
    let response = fetcher.handle().await;
    Ok(into_http_response(response))
}

/// 把核心逻辑返回的响应值写成 actix 响应
fn into_http_response(response: RatesResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let mut builder = HttpResponse::build(status);
    for (name, value) in response.headers {
        builder.insert_header((name, value));
    }
    builder.json(response.body)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    // 任意请求方法
    cfg.route("/rates", web::route().to(get_rates));
}
