//! Content Routes
//!
//! 作品集内容的 JSON 与 SSE 路由。

use crate::api::handlers::content_handler::*;
use crate::api::handlers::role_handler::stream_roles;
use axum::{Router, routing::get};

use crate::api::app_state::AppState;

/// 创建内容路由器
pub fn create_content_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile))
        .route("/hero-intro", get(get_hero_intro))
        .route("/skills", get(get_skills))
        .route("/timeline", get(get_timeline))
        .route("/projects", get(get_projects))
        .route("/roles/stream", get(stream_roles))
}
