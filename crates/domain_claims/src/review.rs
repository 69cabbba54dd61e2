//! Reviewer actions on the claim detail page
//!
//! Actions only produce the confirmation notice. Claim records are seed data
//! and are never updated.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::claim::Claim;
use crate::error::ClaimError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewAction {
    Verify,
    FlagException,
    SendForReview,
}

impl ReviewAction {
    pub const ALL: [ReviewAction; 3] = [
        ReviewAction::Verify,
        ReviewAction::FlagException,
        ReviewAction::SendForReview,
    ];

    /// Status the reviewer is asking for
    pub fn requested_status(&self) -> &'static str {
        match self {
            ReviewAction::Verify => "Verified",
            ReviewAction::FlagException => "Exception",
            ReviewAction::SendForReview => "Review",
        }
    }

    /// Past-tense phrase used in the notice
    pub fn phrase(&self) -> &'static str {
        match self {
            ReviewAction::Verify => "verified",
            ReviewAction::FlagException => "flagged as exception",
            ReviewAction::SendForReview => "sent for adjuster review",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            ReviewAction::Verify => "Mark as Verified",
            ReviewAction::FlagException => "Flag as Exception",
            ReviewAction::SendForReview => "Send for Adjuster Review",
        }
    }
}

impl FromStr for ReviewAction {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "verify" => Ok(ReviewAction::Verify),
            "flag_exception" => Ok(ReviewAction::FlagException),
            "send_for_review" => Ok(ReviewAction::SendForReview),
            _ => Err(ClaimError::UnknownFilter(format!("review action '{}'", s))),
        }
    }
}

/// Toast shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewNotice {
    pub title: String,
    pub description: String,
    pub requested_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Builds the notice for `action` on `claim`; blank comments are dropped
pub fn review(claim: &Claim, action: ReviewAction, comment: Option<&str>) -> ReviewNotice {
    let comment = comment
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);

    tracing::info!(
        claim_id = %claim.id,
        action = action.requested_status(),
        has_comment = comment.is_some(),
        "Review action recorded"
    );

    ReviewNotice {
        title: "Status Updated".to_string(),
        description: format!("Claim {} has been {}.", claim.id, action.phrase()),
        requested_status: action.requested_status().to_string(),
        comment,
    }
}
