//! Pipeline board handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};

use domain_claims::{
    ClaimType, ClaimsDataPort, DrawerView, PipelineBoard, PipelineFilter, SearchTerm, Source,
};

use crate::dto::pipeline::*;
use crate::{error::ApiError, AppState};

/// `all` and empty values mean no filter
fn selection(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case("all"))
}

fn pipeline_filter(params: &PipelineQueryParams) -> Result<PipelineFilter, ApiError> {
    Ok(PipelineFilter {
        search: SearchTerm::new(params.search.as_deref().unwrap_or_default()),
        source: selection(params.source.as_deref())
            .map(str::parse::<Source>)
            .transpose()?,
        claim_type: selection(params.claim_type.as_deref())
            .map(str::parse::<ClaimType>)
            .transpose()?,
    })
}

/// Gets the kanban board, filtered
pub async fn get_board(
    State(state): State<AppState>,
    Query(params): Query<PipelineQueryParams>,
) -> Result<Json<BoardResponse>, ApiError> {
    let filter = pipeline_filter(&params)?;
    let claims = state.claims.list_pipeline_claims().await?;

    let board = PipelineBoard::partition(&claims).filtered(&filter);
    Ok(Json(BoardResponse::new(
        &board,
        claims.len(),
        filter.is_active(),
        &state.config.display_timezone,
    )))
}

/// Gets the drawer contents for a pipeline claim
pub async fn get_drawer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let claim = state.claims.find_pipeline_claim(&id).await?;
    let view = DrawerView::build(&claim, &state.config.display_timezone);
    Ok(Json(view).into_response())
}
