use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};
use tracing::debug;

use crate::{api::app_state::AppState, error::Result, render::ROTATING_ROLE_SCRIPT, view::PortfolioView};

/// 挂载视图，等待所有字段绑定后渲染整页
pub async fn get_page(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let view = PortfolioView::mount(state.content.as_ref());
    let snapshot = view.wait_loaded().await?;
    drop(view);

    debug!(role = ?snapshot.rotating_role, "Rendering portfolio page");
    let html = state.renderer.render_page(&snapshot)?;
    Ok(Html(html))
}

pub async fn get_rotating_role_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        ROTATING_ROLE_SCRIPT,
    )
}
