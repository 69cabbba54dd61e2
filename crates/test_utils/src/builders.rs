//! Test Data Builders
//!
//! Provides builder patterns for constructing claim records with sensible
//! defaults. Tests specify only the fields they care about.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{ClaimNumber, Money, ParticularId, Percentage, PolicyNumber};

use domain_claims::claim::{
    Attachment, AttachmentKind, Channel, Claim, ClaimCategory, ClaimDetails, ClaimParticular,
    ClaimStatus, MedicalCategories, MedicalClaimDetails, VehicleCategories, VehicleClaimDetails,
};
use domain_claims::pipeline::{
    CategoryEstimate, MedicalStructuredData, PipelineAttachment, PipelineAttachmentKind,
    PipelineClaim, PipelineStage, Source, StructuredData, VehicleStructuredData,
};

use crate::fixtures::{MoneyFixtures, TemporalFixtures};

/// Creates a category with no particulars
pub fn test_category(value: i64, confidence: u8) -> ClaimCategory {
    ClaimCategory {
        value: Money::npr(value),
        confidence: Percentage::saturating(confidence),
        particulars: Vec::new(),
    }
}

/// Creates a single line item
pub fn test_particular(id: &str, amount: i64, score: u8) -> ClaimParticular {
    ClaimParticular {
        id: ParticularId::new_unchecked(id),
        description: format!("Item {}", id),
        amount: Money::npr(amount),
        ai_score: Percentage::saturating(score),
        ai_remarks: "Extracted".to_string(),
        document: "bill.pdf".to_string(),
    }
}

/// Medical details with four categories and one particular each
pub fn test_medical_details() -> ClaimDetails {
    let with_item = |value, id: &str, amount| ClaimCategory {
        particulars: vec![test_particular(id, amount, 90)],
        ..test_category(value, 90)
    };
    ClaimDetails::Medical(MedicalClaimDetails {
        categories: MedicalCategories {
            medicines: with_item(25000, "MED-001", 850),
            lab: with_item(50000, "LAB-001", 1500),
            opd: with_item(20000, "OPD-001", 850),
            others: with_item(12000, "OTH-001", 500),
        },
        attachments: vec![Attachment {
            filename: "lab_report.pdf".to_string(),
            url: "/dummy/lab_report.pdf".to_string(),
            kind: AttachmentKind::Pdf,
        }],
    })
}

/// Vehicle details for the given quotation and invoice
pub fn test_vehicle_details(quote: Money, invoice: Money) -> ClaimDetails {
    ClaimDetails::Vehicle(VehicleClaimDetails {
        quotation_approved: quote,
        invoice_submitted: invoice,
        categories: VehicleCategories {
            parts: test_category(380000, 95),
            labor: test_category(70000, 91),
            others: test_category(12000, 87),
        },
        attachments: Vec::new(),
    })
}

/// Builder for claims table records
pub struct ClaimBuilder {
    id: String,
    claimant: String,
    policy_number: String,
    channel: Channel,
    amount: Money,
    status: ClaimStatus,
    submission_date: NaiveDate,
    details: ClaimDetails,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// A pending medical claim submitted by email
    pub fn new() -> Self {
        Self {
            id: "CLM-900".to_string(),
            claimant: "Test Claimant".to_string(),
            policy_number: "HMP-2024-900".to_string(),
            channel: Channel::Email,
            amount: MoneyFixtures::npr_medical(),
            status: ClaimStatus::Pending,
            submission_date: TemporalFixtures::submission_date(),
            details: test_medical_details(),
        }
    }

    /// A vehicle claim with a Rs 12,000 variance
    pub fn vehicle() -> Self {
        Self::new()
            .with_policy_number("VCL-2024-900")
            .with_channel(Channel::OnlineApp)
            .with_amount(MoneyFixtures::npr_invoice())
            .with_details(test_vehicle_details(
                MoneyFixtures::npr_quote(),
                MoneyFixtures::npr_invoice(),
            ))
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_claimant(mut self, claimant: impl Into<String>) -> Self {
        self.claimant = claimant.into();
        self
    }

    pub fn with_policy_number(mut self, policy: impl Into<String>) -> Self {
        self.policy_number = policy.into();
        self
    }

    pub fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_submission_date(mut self, date: NaiveDate) -> Self {
        self.submission_date = date;
        self
    }

    pub fn with_details(mut self, details: ClaimDetails) -> Self {
        self.details = details;
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            id: ClaimNumber::new_unchecked(self.id),
            claimant: self.claimant,
            policy_number: PolicyNumber::new_unchecked(self.policy_number),
            channel: self.channel,
            amount: self.amount,
            status: self.status,
            submission_date: self.submission_date,
            details: self.details,
        }
    }
}

/// Builder for pipeline board records
pub struct PipelineClaimBuilder {
    id: String,
    claimant: String,
    policy_number: String,
    source: Source,
    stage: PipelineStage,
    amount: Money,
    structured_data: StructuredData,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for PipelineClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineClaimBuilder {
    /// A received medical claim from email
    pub fn new() -> Self {
        Self {
            id: "CLM-190".to_string(),
            claimant: "Test Claimant".to_string(),
            policy_number: "HMP-2024-190".to_string(),
            source: Source::Email,
            stage: PipelineStage::Received,
            amount: Money::npr(11200),
            structured_data: StructuredData::Medical(MedicalStructuredData {
                medicines: Some(CategoryEstimate {
                    value: Money::npr(2500),
                    confidence: Percentage::saturating(92),
                }),
                ..Default::default()
            }),
            created_at: TemporalFixtures::created_at(),
            updated_at: TemporalFixtures::updated_at(),
        }
    }

    /// Switches to vehicle structured data
    pub fn vehicle(mut self) -> Self {
        self.structured_data = StructuredData::Vehicle(VehicleStructuredData {
            quotation_approved: Money::npr(45000),
            invoice_submitted: Money::npr(46800),
            variance: Money::npr(1800),
            parts: Money::npr(38000),
            labor: Money::npr(7000),
            others: Money::npr(800),
        });
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_claimant(mut self, claimant: impl Into<String>) -> Self {
        self.claimant = claimant.into();
        self
    }

    pub fn with_policy_number(mut self, policy: impl Into<String>) -> Self {
        self.policy_number = policy.into();
        self
    }

    pub fn with_source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    pub fn with_stage(mut self, stage: PipelineStage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    pub fn build(self) -> PipelineClaim {
        PipelineClaim {
            id: ClaimNumber::new_unchecked(self.id),
            claimant: self.claimant,
            policy_number: PolicyNumber::new_unchecked(self.policy_number),
            source: self.source,
            stage: self.stage,
            amount: self.amount,
            attachments: vec![PipelineAttachment {
                name: "hospital_bill.pdf".to_string(),
                url: "/dummy/hospital_bill.pdf".to_string(),
                kind: PipelineAttachmentKind::Pdf,
            }],
            structured_data: self.structured_data,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
