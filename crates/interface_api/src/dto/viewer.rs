//! Diagram viewer DTOs

use serde::{Deserialize, Serialize};

use domain_claims::{ViewerEffect, ViewerInput, ViewerState};

/// Inputs to replay against a viewer state
///
/// A missing `state` starts from a closed viewer.
#[derive(Debug, Deserialize)]
pub struct ViewerEventsRequest {
    #[serde(default)]
    pub state: ViewerState,
    pub inputs: Vec<ViewerInput>,
}

#[derive(Debug, Serialize)]
pub struct ViewerEventsResponse {
    pub state: ViewerState,
    pub zoom_percent: u32,
    pub effects: Vec<ViewerEffect>,
}
