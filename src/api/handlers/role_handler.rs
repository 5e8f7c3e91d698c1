use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{Stream, StreamExt};
use std::convert::Infallible;
use tracing::info;

use crate::api::app_state::AppState;

/// SSE event name carrying the current role
pub const ROLE_EVENT: &str = "role";

/// Rotating role event stream
///
/// Each connection registers one observer on the shared ticker; closing the
/// connection drops the stream and deregisters it.
pub async fn stream_roles(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let roles = state.content.rotating_role();
    info!(observers = state.roles.observer_count(), "Role stream opened");

    let events = roles.map(|role| Ok::<_, Infallible>(Event::default().event(ROLE_EVENT).data(role)));
    Sse::new(events).keep_alive(KeepAlive::default())
}
