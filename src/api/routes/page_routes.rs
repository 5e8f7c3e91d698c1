//! Page Routes

use crate::api::handlers::page_handler::{get_page, get_rotating_role_script};
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建页面路由器
pub fn create_page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_page))
        .route("/assets/rotating-role.js", get(get_rotating_role_script))
}
