//! API 模块
//!
//! 提供页面、REST 和 SSE 支持。

#[cfg(test)]
mod api_tests;
pub mod app_state;
pub mod handlers;
pub mod routes;

use crate::api::app_state::AppState;
use crate::error::AppError;
use crate::security::middleware::security_headers_middleware;
use axum::Router;
use tower_http::trace::TraceLayer;

/// REST 前缀
pub const API_PREFIX: &str = "/api/v1";

/// 角色 SSE 流的完整路径
pub const ROLE_STREAM_PATH: &str = "/api/v1/roles/stream";

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new().merge(routes::content_routes::create_content_router());

    Router::new()
        .merge(routes::page_routes::create_page_router())
        .nest(API_PREFIX, api)
        .fallback(handlers::not_found)
        // Add security headers middleware to all routes
        .layer(axum::middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

pub async fn initialize_api(app_state: AppState) -> Result<Router, AppError> {
    tracing::info!("Initializing API router...");
    Ok(create_router(app_state))
}
