//! Claims table and review DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::Money;
use domain_claims::display::{self, BadgeStyle};
use domain_claims::{Claim, ClaimStatus, ClaimType, Channel, ReviewAction, SortState};

/// Query string of `GET /claims`
#[derive(Debug, Default, Deserialize)]
pub struct ClaimsQueryParams {
    pub search: Option<String>,
    /// Column name, snake_case or camelCase
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
}

/// One row of the claims table
#[derive(Debug, Serialize)]
pub struct ClaimRow {
    pub id: String,
    pub claimant: String,
    pub policy_number: String,
    #[serde(rename = "type")]
    pub claim_type: ClaimType,
    pub type_color: &'static str,
    pub channel: Channel,
    pub channel_icon: &'static str,
    pub amount: Money,
    pub amount_display: String,
    pub status: ClaimStatus,
    pub status_badge: BadgeStyle,
    pub submission_date: NaiveDate,
}

impl From<&Claim> for ClaimRow {
    fn from(claim: &Claim) -> Self {
        let claim_type = claim.claim_type();
        Self {
            id: claim.id.to_string(),
            claimant: claim.claimant.clone(),
            policy_number: claim.policy_number.to_string(),
            claim_type,
            type_color: display::type_color(claim_type),
            channel: claim.channel,
            channel_icon: display::channel_icon(claim.channel),
            amount: claim.amount,
            amount_display: claim.amount.to_string(),
            status: claim.status,
            status_badge: display::status_badge(claim.status),
            submission_date: claim.submission_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClaimsTableResponse {
    pub search: String,
    pub sort: SortState,
    pub total: usize,
    pub rows: Vec<ClaimRow>,
}

/// Body of `POST /claims/:id/review`
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewRequest {
    pub action: ReviewAction,
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub comment: Option<String>,
}
