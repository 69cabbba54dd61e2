//! Presentation helpers: badge styles, colour classes and icon names
//!
//! Typed inputs map totally. String inputs coming from outside (stage names,
//! sources, category keys, MIME types) fall back to a neutral style.

use serde::Serialize;

use core_kernel::{Money, Percentage};
use rust_decimal_macros::dec;

use crate::claim::{CategoryKind, Channel, ClaimStatus, ClaimType};
use crate::pipeline::{PipelineStage, Source};

/// Neutral style used for anything unrecognized
pub const FALLBACK_COLOR: &str = "bg-gray-100 text-gray-800";
/// Generic icon used for anything unrecognized
pub const FALLBACK_ICON: &str = "file-text";

/// Visual description of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    pub variant: &'static str,
    pub icon: &'static str,
    pub class_name: &'static str,
}

/// Badge for a claim status; every status has a style
pub fn status_badge(status: ClaimStatus) -> BadgeStyle {
    match status {
        ClaimStatus::Pending => BadgeStyle {
            variant: "outline",
            icon: "clock",
            class_name: "border-status-pending text-status-pending bg-status-pending/5",
        },
        ClaimStatus::Verified => BadgeStyle {
            variant: "outline",
            icon: "check-circle",
            class_name: "border-status-verified text-status-verified bg-status-verified/5",
        },
        ClaimStatus::Exception => BadgeStyle {
            variant: "outline",
            icon: "alert-triangle",
            class_name: "border-status-exception text-status-exception bg-status-exception/5",
        },
        ClaimStatus::Settled => BadgeStyle {
            variant: "outline",
            icon: "dollar-sign",
            class_name: "border-status-settled text-status-settled bg-status-settled/5",
        },
    }
}

/// Confidence bucket for extracted category values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// >= 90 high, >= 80 medium, otherwise low
    pub fn of(confidence: Percentage) -> Self {
        if confidence.at_least(90) {
            ConfidenceTier::High
        } else if confidence.at_least(80) {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConfidenceTier::High => "High",
            ConfidenceTier::Medium => "Medium",
            ConfidenceTier::Low => "Low",
        }
    }

    pub fn badge(&self) -> BadgeStyle {
        match self {
            ConfidenceTier::High => BadgeStyle {
                variant: "outline",
                icon: "trending-up",
                class_name: "text-confidence-high border-confidence-high bg-confidence-high/5",
            },
            ConfidenceTier::Medium => BadgeStyle {
                variant: "outline",
                icon: "minus",
                class_name: "text-confidence-medium border-confidence-medium bg-confidence-medium/5",
            },
            ConfidenceTier::Low => BadgeStyle {
                variant: "outline",
                icon: "trending-down",
                class_name: "text-confidence-low border-confidence-low bg-confidence-low/5",
            },
        }
    }
}

/// Colour of the AI score badge on a particular row
pub fn score_badge_class(score: Percentage) -> &'static str {
    if score.at_least(95) {
        "bg-green-100 text-green-800 border-green-300"
    } else if score.at_least(90) {
        "bg-blue-100 text-blue-800 border-blue-300"
    } else if score.at_least(85) {
        "bg-yellow-100 text-yellow-800 border-yellow-300"
    } else {
        "bg-red-100 text-red-800 border-red-300"
    }
}

pub fn stage_color(stage: PipelineStage) -> &'static str {
    match stage {
        PipelineStage::Received => "bg-blue-100 text-blue-800",
        PipelineStage::AiProcessed => "bg-purple-100 text-purple-800",
        PipelineStage::CompliancePending => "bg-orange-100 text-orange-800",
        PipelineStage::Verified => "bg-green-100 text-green-800",
        PipelineStage::Settled => "bg-emerald-100 text-emerald-800",
    }
}

/// Stage colour by stage name, grey for unknown names
pub fn stage_color_for_label(label: &str) -> &'static str {
    PipelineStage::ALL
        .into_iter()
        .find(|s| s.label() == label)
        .map_or(FALLBACK_COLOR, stage_color)
}

pub fn source_color(source: Source) -> &'static str {
    match source {
        Source::Email => "bg-orange-100 text-orange-800",
        Source::Chat => "bg-purple-100 text-purple-800",
        Source::Portal => "bg-indigo-100 text-indigo-800",
        Source::Api => FALLBACK_COLOR,
    }
}

pub fn source_icon(source: Source) -> &'static str {
    match source {
        Source::Email => "mail",
        Source::Chat => "message-square",
        Source::Portal => "globe",
        Source::Api => "zap",
    }
}

/// Source icon by name, generic file icon for unknown sources
pub fn source_icon_for_label(label: &str) -> &'static str {
    label.parse::<Source>().map_or(FALLBACK_ICON, source_icon)
}

pub fn channel_icon(channel: Channel) -> &'static str {
    match channel {
        Channel::OnlineApp => "smartphone",
        Channel::Chat => "message-circle",
        Channel::Email => "mail",
    }
}

pub fn type_color(claim_type: ClaimType) -> &'static str {
    match claim_type {
        ClaimType::Medical => "bg-blue-100 text-blue-800",
        ClaimType::Vehicle => "bg-green-100 text-green-800",
    }
}

/// Category label by key; unknown keys are shown as-is
pub fn category_label(key: &str) -> String {
    CategoryKind::from_key(key).map_or_else(|| key.to_string(), |k| k.label().to_string())
}

pub fn category_icon(kind: CategoryKind) -> (&'static str, &'static str) {
    match kind {
        CategoryKind::Medicines => ("pill", "text-blue-600"),
        CategoryKind::Lab => ("test-tube", "text-green-600"),
        CategoryKind::Opd => ("stethoscope", "text-purple-600"),
        CategoryKind::Parts => ("package", "text-orange-600"),
        CategoryKind::Labor => ("wrench", "text-red-600"),
        CategoryKind::Others => ("plus", "text-gray-600"),
    }
}

/// Category icon by key; unknown keys get the generic plus icon
pub fn category_icon_for_key(key: &str) -> (&'static str, &'static str) {
    CategoryKind::from_key(key).map_or(("plus", "text-gray-600"), category_icon)
}

pub fn accuracy_color(accuracy: Percentage) -> &'static str {
    if accuracy.at_least(95) {
        "text-green-600"
    } else if accuracy.at_least(90) {
        "text-yellow-600"
    } else {
        "text-red-600"
    }
}

pub fn accuracy_status(accuracy: Percentage) -> &'static str {
    if accuracy.at_least(95) {
        "Excellent"
    } else if accuracy.at_least(90) {
        "Good"
    } else if accuracy.at_least(85) {
        "Fair"
    } else {
        "Needs Improvement"
    }
}

/// Quote/invoice variance: up to Rs 1,000 green, up to Rs 3,000 yellow
pub fn variance_color(variance: Money) -> &'static str {
    let amount = variance.amount();
    if amount <= dec!(1000) {
        "text-green-600"
    } else if amount <= dec!(3000) {
        "text-yellow-600"
    } else {
        "text-red-600"
    }
}

/// Icon for an uploaded file by MIME type
pub fn file_icon(content_type: &str) -> &'static str {
    if content_type.starts_with("image/") {
        "image"
    } else if content_type == "application/pdf" {
        FALLBACK_ICON
    } else {
        "file"
    }
}
