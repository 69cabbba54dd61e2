//! Claims pipeline board
//!
//! Pipeline claims are grouped into five fixed stage columns. The partition is
//! a single pass over the records: every claim lands in exactly one column,
//! and columns keep the order in which claims appear in the source.
//!
//! ```text
//! Received -> AI Processed -> Compliance Pending -> Verified -> Settled
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimNumber, Money, Percentage, PolicyNumber};
use crate::claim::{CategoryKind, ClaimType};
use crate::error::ClaimError;
use crate::query::{SearchTerm, Searchable};

/// Intake source of a pipeline claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Email,
    Chat,
    Portal,
    #[serde(rename = "API")]
    Api,
}

impl Source {
    pub const ALL: [Source; 4] = [Source::Email, Source::Chat, Source::Portal, Source::Api];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Email => "Email",
            Source::Chat => "Chat",
            Source::Portal => "Portal",
            Source::Api => "API",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Source {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Source::ALL
            .into_iter()
            .find(|src| src.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClaimError::UnknownFilter(format!("source '{}'", s)))
    }
}

/// Processing stage of a pipeline claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PipelineStage {
    Received,
    #[serde(rename = "AI Processed")]
    AiProcessed,
    #[serde(rename = "Compliance Pending")]
    CompliancePending,
    Verified,
    Settled,
}

impl PipelineStage {
    /// Board column order
    pub const ALL: [PipelineStage; 5] = [
        PipelineStage::Received,
        PipelineStage::AiProcessed,
        PipelineStage::CompliancePending,
        PipelineStage::Verified,
        PipelineStage::Settled,
    ];

    /// Column position on the board
    pub fn index(&self) -> usize {
        match self {
            PipelineStage::Received => 0,
            PipelineStage::AiProcessed => 1,
            PipelineStage::CompliancePending => 2,
            PipelineStage::Verified => 3,
            PipelineStage::Settled => 4,
        }
    }

    /// Stable column id
    pub fn id(&self) -> &'static str {
        match self {
            PipelineStage::Received => "received",
            PipelineStage::AiProcessed => "ai-processed",
            PipelineStage::CompliancePending => "compliance-pending",
            PipelineStage::Verified => "verified",
            PipelineStage::Settled => "settled",
        }
    }

    /// Stage name as stored on a claim
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::Received => "Received",
            PipelineStage::AiProcessed => "AI Processed",
            PipelineStage::CompliancePending => "Compliance Pending",
            PipelineStage::Verified => "Verified",
            PipelineStage::Settled => "Settled",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            PipelineStage::Verified => "Verified ✅",
            PipelineStage::Settled => "Settled 💰",
            other => other.label(),
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            PipelineStage::Received => "text-blue-600",
            PipelineStage::AiProcessed => "text-purple-600",
            PipelineStage::CompliancePending => "text-orange-600",
            PipelineStage::Verified => "text-green-600",
            PipelineStage::Settled => "text-emerald-600",
        }
    }

    pub fn bg_color(&self) -> &'static str {
        match self {
            PipelineStage::Received => "bg-blue-50",
            PipelineStage::AiProcessed => "bg-purple-50",
            PipelineStage::CompliancePending => "bg-orange-50",
            PipelineStage::Verified => "bg-green-50",
            PipelineStage::Settled => "bg-emerald-50",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipelineAttachmentKind {
    Pdf,
    Jpg,
    Png,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineAttachment {
    pub name: String,
    pub url: String,
    pub kind: PipelineAttachmentKind,
}

/// Extracted category value with its confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEstimate {
    pub value: Money,
    pub confidence: Percentage,
}

/// Medical structured data; any category may be missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalStructuredData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medicines: Option<CategoryEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labs: Option<CategoryEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opd: Option<CategoryEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub others: Option<CategoryEstimate>,
}

impl MedicalStructuredData {
    /// Present categories in display order
    pub fn present(&self) -> Vec<(CategoryKind, CategoryEstimate)> {
        [
            (CategoryKind::Medicines, self.medicines),
            (CategoryKind::Lab, self.labs),
            (CategoryKind::Opd, self.opd),
            (CategoryKind::Others, self.others),
        ]
        .into_iter()
        .filter_map(|(kind, estimate)| estimate.map(|e| (kind, e)))
        .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleStructuredData {
    pub quotation_approved: Money,
    pub invoice_submitted: Money,
    pub variance: Money,
    pub parts: Money,
    pub labor: Money,
    pub others: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StructuredData {
    Medical(MedicalStructuredData),
    Vehicle(VehicleStructuredData),
}

/// A claim moving through the processing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineClaim {
    pub id: ClaimNumber,
    pub claimant: String,
    pub policy_number: PolicyNumber,
    pub source: Source,
    pub stage: PipelineStage,
    pub amount: Money,
    pub attachments: Vec<PipelineAttachment>,
    pub structured_data: StructuredData,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PipelineClaim {
    pub fn claim_type(&self) -> ClaimType {
        match self.structured_data {
            StructuredData::Medical(_) => ClaimType::Medical,
            StructuredData::Vehicle(_) => ClaimType::Vehicle,
        }
    }

    /// Card footer text: `1 attachment`, `2 attachments`
    pub fn attachment_summary(&self) -> String {
        let n = self.attachments.len();
        format!("{} attachment{}", n, if n == 1 { "" } else { "s" })
    }
}

impl Searchable for PipelineClaim {
    fn search_fields(&self) -> [&str; 3] {
        [self.id.as_str(), &self.claimant, self.policy_number.as_str()]
    }
}

/// Board filters: search term, source and claim type
///
/// `None` for source or type means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineFilter {
    pub search: SearchTerm,
    pub source: Option<Source>,
    pub claim_type: Option<ClaimType>,
}

impl PipelineFilter {
    pub fn matches(&self, claim: &PipelineClaim) -> bool {
        self.search.matches(claim)
            && self.source.map_or(true, |s| claim.source == s)
            && self.claim_type.map_or(true, |t| claim.claim_type() == t)
    }

    /// True when any filter narrows the board
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.source.is_some() || self.claim_type.is_some()
    }

    /// "Clear Filters"
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One stage column
#[derive(Debug, Clone)]
pub struct StageColumn<'a> {
    pub stage: PipelineStage,
    pub claims: Vec<&'a PipelineClaim>,
}

impl StageColumn<'_> {
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

/// Claims partitioned into the five stage columns
#[derive(Debug, Clone)]
pub struct PipelineBoard<'a> {
    columns: Vec<StageColumn<'a>>,
}

impl<'a> PipelineBoard<'a> {
    /// Single-pass partition of `claims` by stage
    pub fn partition(claims: &'a [PipelineClaim]) -> Self {
        let mut columns: Vec<StageColumn<'a>> = PipelineStage::ALL
            .into_iter()
            .map(|stage| StageColumn { stage, claims: Vec::new() })
            .collect();

        for claim in claims {
            columns[claim.stage.index()].claims.push(claim);
        }

        tracing::debug!(claims = claims.len(), "Partitioned pipeline board");
        Self { columns }
    }

    /// A new board with `filter` applied inside each column
    pub fn filtered(&self, filter: &PipelineFilter) -> PipelineBoard<'a> {
        let columns = self
            .columns
            .iter()
            .map(|column| StageColumn {
                stage: column.stage,
                claims: column
                    .claims
                    .iter()
                    .copied()
                    .filter(|c| filter.matches(c))
                    .collect(),
            })
            .collect();
        PipelineBoard { columns }
    }

    pub fn columns(&self) -> &[StageColumn<'a>] {
        &self.columns
    }

    pub fn column(&self, stage: PipelineStage) -> &StageColumn<'a> {
        &self.columns[stage.index()]
    }

    /// Total claims across all columns
    pub fn total(&self) -> usize {
        self.columns.iter().map(StageColumn::len).sum()
    }
}

/// Finds a pipeline claim for the detail drawer
pub fn find_pipeline_claim<'a>(
    claims: &'a [PipelineClaim],
    id: &str,
) -> Result<&'a PipelineClaim, ClaimError> {
    claims
        .iter()
        .find(|c| c.id.as_str().eq_ignore_ascii_case(id.trim()))
        .ok_or_else(|| ClaimError::ClaimNotFound(id.to_string()))
}
