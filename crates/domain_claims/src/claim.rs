//! Claim records shown in the claims table and the claim detail page

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimNumber, Money, MoneyError, ParticularId, Percentage, PolicyNumber};
use crate::error::ClaimError;

/// Line of business a claim belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimType {
    Medical,
    Vehicle,
}

impl ClaimType {
    pub const ALL: [ClaimType; 2] = [ClaimType::Medical, ClaimType::Vehicle];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimType::Medical => "Medical",
            ClaimType::Vehicle => "Vehicle",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimType {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClaimType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClaimError::UnknownFilter(format!("claim type '{}'", s)))
    }
}

/// Channel a claim was submitted through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    OnlineApp,
    Chat,
    Email,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::OnlineApp => "OnlineApp",
            Channel::Chat => "Chat",
            Channel::Email => "Email",
        }
    }
}

/// Review status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// Awaiting reviewer action
    Pending,
    /// Documents verified
    Verified,
    /// Flagged for exception handling
    Exception,
    /// Paid out
    Settled,
}

impl ClaimStatus {
    pub const ALL: [ClaimStatus; 4] = [
        ClaimStatus::Pending,
        ClaimStatus::Verified,
        ClaimStatus::Exception,
        ClaimStatus::Settled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Verified => "Verified",
            ClaimStatus::Exception => "Exception",
            ClaimStatus::Settled => "Settled",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expense bucket within a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Medicines,
    Lab,
    Opd,
    Parts,
    Labor,
    Others,
}

impl CategoryKind {
    /// Key used in structured data (`medicines`, `lab`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            CategoryKind::Medicines => "medicines",
            CategoryKind::Lab => "lab",
            CategoryKind::Opd => "opd",
            CategoryKind::Parts => "parts",
            CategoryKind::Labor => "labor",
            CategoryKind::Others => "others",
        }
    }

    /// Human label shown in summary cards and breakdown rows
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::Medicines => "Medicines",
            CategoryKind::Lab => "Laboratory",
            CategoryKind::Opd => "OPD",
            CategoryKind::Parts => "Parts",
            CategoryKind::Labor => "Labor",
            CategoryKind::Others => "Others",
        }
    }

    /// Resolves a structured-data key; `labs` is accepted as an alias of `lab`
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "medicines" => Some(CategoryKind::Medicines),
            "lab" | "labs" => Some(CategoryKind::Lab),
            "opd" => Some(CategoryKind::Opd),
            "parts" => Some(CategoryKind::Parts),
            "labor" => Some(CategoryKind::Labor),
            "others" => Some(CategoryKind::Others),
            _ => None,
        }
    }
}

/// A single line item within a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimParticular {
    pub id: ParticularId,
    pub description: String,
    pub amount: Money,
    pub ai_score: Percentage,
    pub ai_remarks: String,
    /// Filename of the supporting document
    pub document: String,
}

/// Category value with extraction confidence and optional line items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimCategory {
    pub value: Money,
    pub confidence: Percentage,
    #[serde(default)]
    pub particulars: Vec<ClaimParticular>,
}

impl ClaimCategory {
    pub fn item_count(&self) -> usize {
        self.particulars.len()
    }

    /// Sum of the particulars, which may be less than the category value
    pub fn particulars_total(&self) -> Result<Money, MoneyError> {
        Money::sum(
            self.particulars.iter().map(|p| &p.amount),
            self.value.currency(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Pdf,
    Image,
}

/// Supporting document reference; decorative, never fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub url: String,
    pub kind: AttachmentKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalCategories {
    pub medicines: ClaimCategory,
    pub lab: ClaimCategory,
    pub opd: ClaimCategory,
    pub others: ClaimCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalClaimDetails {
    pub categories: MedicalCategories,
    pub attachments: Vec<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleCategories {
    pub parts: ClaimCategory,
    pub labor: ClaimCategory,
    pub others: ClaimCategory,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleClaimDetails {
    pub quotation_approved: Money,
    pub invoice_submitted: Money,
    pub categories: VehicleCategories,
    pub attachments: Vec<Attachment>,
}

impl VehicleClaimDetails {
    /// Invoice submitted minus quotation approved
    pub fn variance(&self) -> Result<Money, MoneyError> {
        self.invoice_submitted.checked_sub(&self.quotation_approved)
    }
}

/// Type-specific claim details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ClaimDetails {
    Medical(MedicalClaimDetails),
    Vehicle(VehicleClaimDetails),
}

impl ClaimDetails {
    pub fn claim_type(&self) -> ClaimType {
        match self {
            ClaimDetails::Medical(_) => ClaimType::Medical,
            ClaimDetails::Vehicle(_) => ClaimType::Vehicle,
        }
    }

    /// Categories in display order
    pub fn categories(&self) -> Vec<(CategoryKind, &ClaimCategory)> {
        match self {
            ClaimDetails::Medical(d) => vec![
                (CategoryKind::Medicines, &d.categories.medicines),
                (CategoryKind::Lab, &d.categories.lab),
                (CategoryKind::Opd, &d.categories.opd),
                (CategoryKind::Others, &d.categories.others),
            ],
            ClaimDetails::Vehicle(d) => vec![
                (CategoryKind::Parts, &d.categories.parts),
                (CategoryKind::Labor, &d.categories.labor),
                (CategoryKind::Others, &d.categories.others),
            ],
        }
    }

    pub fn attachments(&self) -> &[Attachment] {
        match self {
            ClaimDetails::Medical(d) => &d.attachments,
            ClaimDetails::Vehicle(d) => &d.attachments,
        }
    }
}

/// A claim as listed in the claims table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimNumber,
    pub claimant: String,
    pub policy_number: PolicyNumber,
    pub channel: Channel,
    pub amount: Money,
    pub status: ClaimStatus,
    pub submission_date: NaiveDate,
    pub details: ClaimDetails,
}

impl Claim {
    pub fn claim_type(&self) -> ClaimType {
        self.details.claim_type()
    }

    pub fn is_medical(&self) -> bool {
        self.claim_type() == ClaimType::Medical
    }

    /// Sum of all category values
    pub fn categories_total(&self) -> Result<Money, MoneyError> {
        let values: Vec<Money> = self.details.categories().iter().map(|(_, c)| c.value).collect();
        Money::sum(&values, self.amount.currency())
    }
}
