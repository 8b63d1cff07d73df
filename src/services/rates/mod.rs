//! 汇率数据服务模块
//!
//! 按顺序尝试多个汇率数据源，返回第一个有效结果

pub mod endpoints;
pub mod error;
pub mod fetcher;
pub mod source;

pub use endpoints::{EndpointList, DEFAULT_ENDPOINTS};
pub use fetcher::RateFetcher;
pub use source::HttpRateSource;

#[cfg(test)]
pub mod testing;
