//! KPI dashboard handler

use axum::{extract::State, Json};

use domain_claims::ClaimsDataPort;

use crate::dto::dashboard::DashboardResponse;
use crate::{error::ApiError, AppState};

/// Gets the dashboard tiles, charts and tables
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let data = state.claims.dashboard().await?;
    Ok(Json(DashboardResponse::from(&data)))
}
