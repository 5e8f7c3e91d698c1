use axum::{Json, extract::State, response::IntoResponse};
use futures_util::stream::{BoxStream, StreamExt};
use tracing::debug;

use crate::{
    api::app_state::AppState,
    error::{AppError, Result},
    view::hero_intro,
};

/// 等待单值流的唯一值
pub(crate) async fn first<T>(mut stream: BoxStream<'static, T>, what: &str) -> Result<T> {
    stream
        .next()
        .await
        .ok_or_else(|| AppError::Internal(format!("{what} stream completed without a value")))
}

pub async fn get_profile(State(state): State<AppState>) -> Result<impl IntoResponse> {
    debug!("Getting profile");
    let profile = first(state.content.profile(), "profile").await?;
    Ok(Json(profile))
}

pub async fn get_hero_intro(State(state): State<AppState>) -> Result<impl IntoResponse> {
    debug!("Getting hero intro");
    let intro = first(hero_intro(state.content.profile()).boxed(), "hero intro").await?;
    Ok(Json(intro))
}

pub async fn get_skills(State(state): State<AppState>) -> Result<impl IntoResponse> {
    debug!("Listing skills");
    let skills = first(state.content.skills(), "skills").await?;
    Ok(Json(skills))
}

pub async fn get_timeline(State(state): State<AppState>) -> Result<impl IntoResponse> {
    debug!("Listing timeline");
    let timeline = first(state.content.timeline(), "timeline").await?;
    Ok(Json(timeline))
}

pub async fn get_projects(State(state): State<AppState>) -> Result<impl IntoResponse> {
    debug!("Listing projects");
    let projects = first(state.content.projects(), "projects").await?;
    Ok(Json(projects))
}
