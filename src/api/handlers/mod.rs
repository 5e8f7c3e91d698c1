//! Handlers 模块

pub mod content_handler;
pub mod page_handler;
pub mod role_handler;

use axum::http::Uri;

use crate::error::AppError;

/// 未匹配路由
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
