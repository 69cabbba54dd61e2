//! Claims table, detail page and review handlers

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use validator::Validate;

use domain_claims::review;
use domain_claims::{
    ClaimDetailView, ClaimQuery, ClaimsDataPort, ReviewNotice, SearchTerm, SortDirection, SortField,
    SortState,
};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

/// Sort state from query parameters
///
/// A column without a direction sorts ascending, like a first header click.
fn sort_state(params: &ClaimsQueryParams) -> Result<SortState, ApiError> {
    let field = params.sort.as_deref().map(str::parse::<SortField>).transpose()?;
    let direction = params
        .direction
        .as_deref()
        .map(str::parse::<SortDirection>)
        .transpose()?;

    let default = SortState::default();
    Ok(match (field, direction) {
        (None, None) => default,
        (Some(field), direction) => SortState::new(field, direction.unwrap_or(SortDirection::Asc)),
        (None, Some(direction)) => SortState::new(default.field, direction),
    })
}

/// Lists claims, searched and sorted
pub async fn list_claims(
    State(state): State<AppState>,
    Query(params): Query<ClaimsQueryParams>,
) -> Result<Json<ClaimsTableResponse>, ApiError> {
    let query = ClaimQuery::new(
        SearchTerm::new(params.search.as_deref().unwrap_or_default()),
        sort_state(&params)?,
    );

    let claims = state.claims.list_claims().await?;
    let rows: Vec<ClaimRow> = query.apply(&claims).into_iter().map(ClaimRow::from).collect();

    Ok(Json(ClaimsTableResponse {
        search: query.search.as_str().to_string(),
        sort: query.sort,
        total: rows.len(),
        rows,
    }))
}

/// Gets the detail page for a claim
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let claim = state.claims.find_claim(&id).await?;
    let view = ClaimDetailView::build(&claim)?;
    Ok(Json(view).into_response())
}

/// Records a reviewer action and returns the confirmation notice
pub async fn review_claim(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ReviewNotice>, ApiError> {
    request.validate()?;

    let claim = state.claims.find_claim(&id).await?;
    Ok(Json(review::review(&claim, request.action, request.comment.as_deref())))
}
