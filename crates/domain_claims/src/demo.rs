//! Working demo: simulated intake of an emailed claim
//!
//! Nothing here reads document contents. Category values are random draws,
//! nudged by keywords in the attachment filenames, and the policy number is
//! made up. The artificial latency lives with the caller; this module only
//! produces the outcome.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use core_kernel::{Currency, Money, PolicyNumber, SubmissionId};

use crate::claim::CategoryKind;
use crate::display;
use crate::error::ClaimError;

/// Banner text shown when processing fails
pub const FAILURE_MESSAGE: &str = "Failed to process claim. Please try again.";

pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "pdf"];

/// Categories filled in by the simulation, in display order
pub const DEMO_CATEGORIES: [CategoryKind; 4] = [
    CategoryKind::Medicines,
    CategoryKind::Lab,
    CategoryKind::Opd,
    CategoryKind::Others,
];

/// Range a simulated category value is drawn from, in whole rupees
pub fn category_range(kind: CategoryKind) -> Range<i64> {
    match kind {
        CategoryKind::Medicines => 1000..6000,
        CategoryKind::Lab => 2000..10000,
        CategoryKind::Opd => 500..3500,
        _ => 500..2500,
    }
}

/// Category hinted at by a filename; the first matching keyword group wins
pub fn classify_filename(name: &str) -> Option<CategoryKind> {
    let name = name.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| name.contains(w));
    if has(&["medicine", "pharmacy"]) {
        Some(CategoryKind::Medicines)
    } else if has(&["lab", "test"]) {
        Some(CategoryKind::Lab)
    } else if has(&["opd", "consultation"]) {
        Some(CategoryKind::Opd)
    } else if has(&["other", "misc"]) {
        Some(CategoryKind::Others)
    } else {
        None
    }
}

/// Claimant name from the email local part: `ram.bahadur_thapa@x` -> `Ram Bahadur Thapa`
pub fn claimant_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_', '-'])
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `HMP-2024-NNN` or `VCL-2024-NNN`, NNN in 001..=999
pub fn generate_policy_number<R: Rng + ?Sized>(rng: &mut R) -> PolicyNumber {
    let prefix = if rng.random_bool(0.5) { "HMP" } else { "VCL" };
    let number: u16 = rng.random_range(1..=999);
    PolicyNumber::new_unchecked(format!("{}-2024-{:03}", prefix, number))
}

/// File attached to a demo submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub name: String,
    /// MIME type as reported by the client
    pub content_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
        }
    }

    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }

    pub fn is_accepted(&self) -> bool {
        self.extension()
            .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
    }
}

/// The demo form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSubmission {
    pub from_email: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub attachments: Vec<UploadedFile>,
}

impl DemoSubmission {
    /// All text fields are required; attachments must have an accepted extension
    pub fn validate(&self) -> Result<(), ClaimError> {
        for (field, value) in [
            ("from email", &self.from_email),
            ("subject", &self.subject),
            ("body", &self.body),
        ] {
            if value.trim().is_empty() {
                return Err(ClaimError::InvalidSubmission(format!("{} is required", field)));
            }
        }
        if !self.from_email.contains('@') {
            return Err(ClaimError::InvalidSubmission(format!(
                "'{}' is not an email address",
                self.from_email
            )));
        }
        if let Some(file) = self.attachments.iter().find(|f| !f.is_accepted()) {
            return Err(ClaimError::UnsupportedAttachment(file.name.clone()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    #[default]
    Idle,
    Processing,
    Processed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoCategories {
    pub medicines: Money,
    pub labs: Money,
    pub opd: Money,
    pub others: Money,
}

impl DemoCategories {
    pub fn get(&self, kind: CategoryKind) -> Option<Money> {
        match kind {
            CategoryKind::Medicines => Some(self.medicines),
            CategoryKind::Lab => Some(self.labs),
            CategoryKind::Opd => Some(self.opd),
            CategoryKind::Others => Some(self.others),
            _ => None,
        }
    }

    pub fn total(&self) -> Result<Money, ClaimError> {
        let values = [self.medicines, self.labs, self.opd, self.others];
        Ok(Money::sum(&values, Currency::NPR)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoStructuredData {
    pub claimant: String,
    pub policy_number: PolicyNumber,
    pub categories: DemoCategories,
    pub total: Money,
}

/// Attachment echoed back with its icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDescriptor {
    pub name: String,
    pub url: String,
    pub content_type: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedClaim {
    pub submission_id: SubmissionId,
    pub status: ProcessingStatus,
    pub from_email: String,
    pub subject: String,
    pub body: String,
    pub structured_data: DemoStructuredData,
    pub attachments: Vec<AttachmentDescriptor>,
}

/// Produces simulated results for demo submissions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSimulator {
    failure_rate: f64,
}

impl Default for DemoSimulator {
    fn default() -> Self {
        Self { failure_rate: 0.0 }
    }
}

impl DemoSimulator {
    /// `failure_rate` is clamped to [0, 1]
    pub fn new(failure_rate: f64) -> Self {
        let failure_rate = if failure_rate.is_nan() { 0.0 } else { failure_rate.clamp(0.0, 1.0) };
        Self { failure_rate }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }

    /// Extracts categories from filenames and fills the rest at random
    pub fn categories<R: Rng + ?Sized>(&self, files: &[UploadedFile], rng: &mut R) -> DemoCategories {
        let mut extracted: [Option<i64>; 4] = [None; 4];
        for file in files {
            if let Some(kind) = classify_filename(&file.name) {
                if let Some(slot) = DEMO_CATEGORIES.iter().position(|k| *k == kind) {
                    extracted[slot] = Some(rng.random_range(category_range(kind)));
                }
            }
        }

        let mut values = [Money::zero(Currency::NPR); 4];
        for (slot, kind) in DEMO_CATEGORIES.into_iter().enumerate() {
            let rupees = match extracted[slot] {
                Some(v) => v,
                None => rng.random_range(category_range(kind)),
            };
            values[slot] = Money::npr(rupees);
        }

        DemoCategories {
            medicines: values[0],
            labs: values[1],
            opd: values[2],
            others: values[3],
        }
    }

    /// Runs the simulation for a validated submission
    pub fn process<R: Rng + ?Sized>(
        &self,
        submission: &DemoSubmission,
        submission_id: SubmissionId,
        rng: &mut R,
    ) -> Result<ProcessedClaim, ClaimError> {
        submission.validate()?;

        if self.failure_rate > 0.0 && rng.random_bool(self.failure_rate) {
            tracing::warn!(%submission_id, "Simulated demo processing failure");
            return Err(ClaimError::ProcessingFailed(FAILURE_MESSAGE.to_string()));
        }

        let categories = self.categories(&submission.attachments, rng);
        let total = categories.total()?;
        let structured_data = DemoStructuredData {
            claimant: claimant_from_email(&submission.from_email),
            policy_number: generate_policy_number(rng),
            categories,
            total,
        };

        let attachments = submission
            .attachments
            .iter()
            .map(|file| AttachmentDescriptor {
                name: file.name.clone(),
                url: format!("/demo/uploads/{}/{}", submission_id.as_uuid(), file.name),
                content_type: file.content_type.clone(),
                icon: display::file_icon(&file.content_type).to_string(),
            })
            .collect();

        tracing::info!(
            %submission_id,
            attachments = submission.attachments.len(),
            total = %total,
            "Processed demo submission"
        );

        Ok(ProcessedClaim {
            submission_id,
            status: ProcessingStatus::Processed,
            from_email: submission.from_email.clone(),
            subject: submission.subject.clone(),
            body: submission.body.clone(),
            structured_data,
            attachments,
        })
    }
}

/// Demo page state: one submission in flight at a time, no retry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSession {
    pub status: ProcessingStatus,
    pub result: Option<ProcessedClaim>,
    pub error: Option<String>,
}

impl DemoSession {
    /// Clears any previous outcome and enters `Processing`
    pub fn begin(&mut self) {
        self.status = ProcessingStatus::Processing;
        self.result = None;
        self.error = None;
    }

    /// Records the outcome; failures always show the static banner
    pub fn complete(&mut self, outcome: Result<ProcessedClaim, ClaimError>) {
        match outcome {
            Ok(claim) => {
                self.status = ProcessingStatus::Processed;
                self.result = Some(claim);
            }
            Err(err) => {
                tracing::debug!(error = %err, "Demo submission failed");
                self.status = ProcessingStatus::Failed;
                self.error = Some(FAILURE_MESSAGE.to_string());
            }
        }
    }

    /// "Reset Form"
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_processing(&self) -> bool {
        self.status == ProcessingStatus::Processing
    }
}
