//! Routes 模块
//!
//! 定义 API 路由。

pub mod content_routes;
pub mod page_routes;
