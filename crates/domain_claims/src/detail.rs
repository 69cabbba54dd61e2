//! Claim detail page and pipeline drawer views
//!
//! Flattens a claim's categories into the numbered breakdown table and
//! builds the summary cards above it.

use rust_decimal::Decimal;
use serde::Serialize;

use core_kernel::{Money, ParticularId, Percentage, Timezone};

use crate::claim::{CategoryKind, Claim, ClaimDetails, ClaimParticular, VehicleClaimDetails};
use crate::display::{self, ConfidenceTier};
use crate::error::ClaimError;
use crate::pipeline::{PipelineClaim, StructuredData};

/// One numbered row of the detailed breakdown table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    /// 1-based serial number
    pub sn: usize,
    pub category: CategoryKind,
    pub category_label: &'static str,
    pub category_icon: &'static str,
    pub id: ParticularId,
    pub description: String,
    pub amount: Money,
    pub ai_score: Percentage,
    pub score_class: &'static str,
    pub ai_remarks: String,
    pub document: String,
}

impl BreakdownRow {
    fn new(sn: usize, category: CategoryKind, particular: &ClaimParticular) -> Self {
        Self {
            sn,
            category,
            category_label: category.label(),
            category_icon: display::category_icon(category).0,
            id: particular.id.clone(),
            description: particular.description.clone(),
            amount: particular.amount,
            ai_score: particular.ai_score,
            score_class: display::score_badge_class(particular.ai_score),
            ai_remarks: particular.ai_remarks.clone(),
            document: particular.document.clone(),
        }
    }
}

/// Every particular of every category, in category order
pub fn breakdown(details: &ClaimDetails) -> Vec<BreakdownRow> {
    details
        .categories()
        .into_iter()
        .flat_map(|(kind, category)| category.particulars.iter().map(move |p| (kind, p)))
        .enumerate()
        .map(|(i, (kind, p))| BreakdownRow::new(i + 1, kind, p))
        .collect()
}

/// Medical summary card for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCard {
    pub category: CategoryKind,
    pub label: &'static str,
    pub value: Money,
    pub confidence: Percentage,
    pub confidence_tier: ConfidenceTier,
    pub item_count: usize,
}

/// Quotation vs invoice summary for a vehicle claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarianceSummary {
    pub quotation_approved: Money,
    pub invoice_submitted: Money,
    pub variance: Money,
    /// Percent of the quotation, one decimal place; absent for a zero quotation
    pub variance_percent: Option<Decimal>,
    pub variance_class: &'static str,
    /// Variance with an explicit `+` when the invoice exceeds the quote
    pub variance_display: String,
}

impl VarianceSummary {
    pub fn from_details(details: &VehicleClaimDetails) -> Result<Self, ClaimError> {
        Self::new(details.quotation_approved, details.invoice_submitted)
    }

    pub fn new(quotation_approved: Money, invoice_submitted: Money) -> Result<Self, ClaimError> {
        let variance = invoice_submitted.checked_sub(&quotation_approved)?;
        let variance_percent = variance.percent_of(&quotation_approved).ok();
        let over = variance.is_positive();
        Ok(Self {
            quotation_approved,
            invoice_submitted,
            variance,
            variance_percent,
            variance_class: if over { "text-status-exception" } else { "text-status-verified" },
            variance_display: if over { format!("+{}", variance) } else { variance.to_string() },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SummaryCards {
    Medical { categories: Vec<CategoryCard> },
    Vehicle(VarianceSummary),
}

pub fn summary_cards(details: &ClaimDetails) -> Result<SummaryCards, ClaimError> {
    match details {
        ClaimDetails::Medical(_) => Ok(SummaryCards::Medical {
            categories: details
                .categories()
                .into_iter()
                .map(|(kind, c)| CategoryCard {
                    category: kind,
                    label: kind.label(),
                    value: c.value,
                    confidence: c.confidence,
                    confidence_tier: ConfidenceTier::of(c.confidence),
                    item_count: c.item_count(),
                })
                .collect(),
        }),
        ClaimDetails::Vehicle(v) => Ok(SummaryCards::Vehicle(VarianceSummary::from_details(v)?)),
    }
}

/// Everything the claim detail page renders
#[derive(Debug, Clone, Serialize)]
pub struct ClaimDetailView<'a> {
    pub claim: &'a Claim,
    pub status_badge: display::BadgeStyle,
    pub channel_icon: &'static str,
    pub summary: SummaryCards,
    pub breakdown: Vec<BreakdownRow>,
}

impl<'a> ClaimDetailView<'a> {
    pub fn build(claim: &'a Claim) -> Result<Self, ClaimError> {
        Ok(Self {
            claim,
            status_badge: display::status_badge(claim.status),
            channel_icon: display::channel_icon(claim.channel),
            summary: summary_cards(&claim.details)?,
            breakdown: breakdown(&claim.details),
        })
    }
}

/// Row of the drawer's structured-data panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerField {
    pub label: &'static str,
    pub value: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Percentage>,
}

/// Pipeline claim drawer
#[derive(Debug, Clone, Serialize)]
pub struct DrawerView<'a> {
    pub claim: &'a PipelineClaim,
    pub stage_color: &'static str,
    pub source_icon: &'static str,
    pub source_color: &'static str,
    pub type_color: &'static str,
    pub created: String,
    pub updated: String,
    pub fields: Vec<DrawerField>,
}

impl<'a> DrawerView<'a> {
    pub fn build(claim: &'a PipelineClaim, timezone: &Timezone) -> Self {
        let fields = match &claim.structured_data {
            StructuredData::Medical(m) => m
                .present()
                .into_iter()
                .map(|(kind, e)| DrawerField {
                    label: kind.label(),
                    value: e.value,
                    confidence: Some(e.confidence),
                })
                .collect(),
            StructuredData::Vehicle(v) => [
                ("Quotation Approved", v.quotation_approved),
                ("Invoice Submitted", v.invoice_submitted),
                ("Variance", v.variance),
                ("Parts", v.parts),
                ("Labor", v.labor),
                ("Others", v.others),
            ]
            .into_iter()
            .map(|(label, value)| DrawerField { label, value, confidence: None })
            .collect(),
        };

        Self {
            claim,
            stage_color: display::stage_color(claim.stage),
            source_icon: display::source_icon(claim.source),
            source_color: display::source_color(claim.source),
            type_color: display::type_color(claim.claim_type()),
            created: timezone.format_long(claim.created_at),
            updated: timezone.format_long(claim.updated_at),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_variance_summary_over_quote() {
        let s = VarianceSummary::new(Money::npr(450000), Money::npr(462000)).unwrap();
        assert_eq!(s.variance, Money::npr(12000));
        assert_eq!(s.variance_percent, Some(dec!(2.7)));
        assert_eq!(s.variance_display, "+Rs 12,000");
        assert_eq!(s.variance_class, "text-status-exception");
    }

    #[test]
    fn test_variance_summary_zero_quote() {
        let s = VarianceSummary::new(Money::npr(0), Money::npr(0)).unwrap();
        assert_eq!(s.variance_percent, None);
        assert_eq!(s.variance_class, "text-status-verified");
    }
}
