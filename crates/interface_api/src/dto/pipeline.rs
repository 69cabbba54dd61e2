//! Pipeline board DTOs

use serde::{Deserialize, Serialize};

use core_kernel::{Money, Timezone};
use domain_claims::display;
use domain_claims::{ClaimType, PipelineBoard, PipelineClaim, PipelineStage, Source, StageColumn};

/// Query string of `GET /pipeline`
#[derive(Debug, Default, Deserialize)]
pub struct PipelineQueryParams {
    pub search: Option<String>,
    pub source: Option<String>,
    #[serde(rename = "type")]
    pub claim_type: Option<String>,
}

/// A claim card on the board
#[derive(Debug, Serialize)]
pub struct PipelineCard {
    pub id: String,
    pub claimant: String,
    pub policy_number: String,
    pub source: Source,
    pub source_icon: &'static str,
    pub source_color: &'static str,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub type_color: &'static str,
    pub amount: Money,
    pub amount_display: String,
    pub attachments: String,
    pub updated: String,
}

impl PipelineCard {
    pub fn new(claim: &PipelineClaim, timezone: &Timezone) -> Self {
        let claim_type = claim.claim_type();
        Self {
            id: claim.id.to_string(),
            claimant: claim.claimant.clone(),
            policy_number: claim.policy_number.to_string(),
            source: claim.source,
            source_icon: display::source_icon(claim.source),
            source_color: display::source_color(claim.source),
            claim_type,
            type_color: display::type_color(claim_type),
            amount: claim.amount,
            amount_display: claim.amount.to_string(),
            attachments: claim.attachment_summary(),
            updated: timezone.format_short(claim.updated_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnResponse {
    pub stage: PipelineStage,
    pub id: &'static str,
    pub title: &'static str,
    pub text_color: &'static str,
    pub bg_color: &'static str,
    pub count: usize,
    pub claims: Vec<PipelineCard>,
}

impl ColumnResponse {
    fn new(column: &StageColumn<'_>, timezone: &Timezone) -> Self {
        let stage = column.stage;
        Self {
            stage,
            id: stage.id(),
            title: stage.title(),
            text_color: stage.text_color(),
            bg_color: stage.bg_color(),
            count: column.len(),
            claims: column.claims.iter().map(|c| PipelineCard::new(c, timezone)).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BoardResponse {
    /// Claims on the board before filtering
    pub total_claims: usize,
    /// Claims left after filtering
    pub total: usize,
    pub filters_active: bool,
    pub columns: Vec<ColumnResponse>,
}

impl BoardResponse {
    pub fn new(
        board: &PipelineBoard<'_>,
        total_claims: usize,
        filters_active: bool,
        timezone: &Timezone,
    ) -> Self {
        Self {
            total_claims,
            total: board.total(),
            filters_active,
            columns: board
                .columns()
                .iter()
                .map(|c| ColumnResponse::new(c, timezone))
                .collect(),
        }
    }
}
