//! Working demo handler

use std::time::Duration;

use axum::{extract::State, Json};
use validator::Validate;

use core_kernel::SubmissionId;
use domain_claims::{DemoSession, DemoSubmission, ProcessingStatus};

use crate::dto::demo::DemoSubmissionRequest;
use crate::{error::ApiError, AppState};

/// Simulates intake of an emailed claim
///
/// Waits the configured latency, then answers with the processed session.
/// A session that ends in `Failed` is reported as a 502 carrying the static
/// failure banner.
pub async fn submit_claim(
    State(state): State<AppState>,
    Json(request): Json<DemoSubmissionRequest>,
) -> Result<Json<DemoSession>, ApiError> {
    request.validate()?;
    let submission = DemoSubmission::from(request);
    submission.validate()?;

    let submission_id = SubmissionId::new_v7();
    let mut session = DemoSession::default();
    session.begin();
    tracing::info!(%submission_id, attachments = submission.attachments.len(), "Demo submission received");

    tokio::time::sleep(Duration::from_millis(state.config.demo_latency_ms)).await;

    let outcome = {
        let mut rng = rand::rng();
        state.simulator.process(&submission, submission_id, &mut rng)
    };

    session.complete(outcome);
    if session.status == ProcessingStatus::Failed {
        tracing::warn!(%submission_id, "Demo submission failed");
        return Err(ApiError::ProcessingFailed);
    }
    Ok(Json(session))
}
