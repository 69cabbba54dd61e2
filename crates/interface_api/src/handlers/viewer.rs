//! System-flow diagram viewer handler

use axum::Json;

use crate::dto::viewer::{ViewerEventsRequest, ViewerEventsResponse};

/// Replays inputs against the given viewer state
///
/// The viewer lives in the client; this endpoint only applies the state
/// transitions and reports the side effects the client should perform.
pub async fn apply_events(Json(request): Json<ViewerEventsRequest>) -> Json<ViewerEventsResponse> {
    let mut state = request.state;
    let effects = request
        .inputs
        .into_iter()
        .filter_map(|input| state.apply(input))
        .collect();

    Json(ViewerEventsResponse {
        zoom_percent: state.zoom_percent(),
        state,
        effects,
    })
}
