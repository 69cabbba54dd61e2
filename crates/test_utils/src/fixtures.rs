//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the claims review dashboard.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{Currency, Money, Percentage, Timezone};
use rust_decimal_macros::dec;

use domain_claims::demo::{DemoSubmission, UploadedFile};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical medical claim amount
    pub fn npr_medical() -> Money {
        Money::npr(107000)
    }

    /// A typical vehicle quotation
    pub fn npr_quote() -> Money {
        Money::npr(450000)
    }

    /// Invoice Rs 12,000 over [`MoneyFixtures::npr_quote`]
    pub fn npr_invoice() -> Money {
        Money::npr(462000)
    }

    pub fn npr_zero() -> Money {
        Money::zero(Currency::NPR)
    }

    /// A USD amount for currency mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for confidence and score values
pub struct PercentageFixtures;

impl PercentageFixtures {
    pub fn high() -> Percentage {
        Percentage::saturating(95)
    }

    pub fn medium() -> Percentage {
        Percentage::saturating(85)
    }

    pub fn low() -> Percentage {
        Percentage::saturating(70)
    }
}

/// Fixture for dates and timestamps
pub struct TemporalFixtures;

impl TemporalFixtures {
    pub fn submission_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// 2024-01-16 14:20 UTC, 20:05 in Kathmandu
    pub fn updated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 16, 14, 20, 0).unwrap()
    }

    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    }

    pub fn kathmandu() -> Timezone {
        Timezone::default()
    }
}

/// Fixture for demo form submissions
pub struct DemoFixtures;

impl DemoFixtures {
    pub fn submission() -> DemoSubmission {
        DemoSubmission {
            from_email: "ram.bahadur_thapa@example.com".to_string(),
            subject: "Medical claim for January".to_string(),
            body: "Bills from Bir Hospital attached.".to_string(),
            attachments: vec![
                UploadedFile::new("pharmacy_bill.pdf", "application/pdf"),
                UploadedFile::new("lab_test.png", "image/png"),
            ],
        }
    }

    pub fn submission_with(files: &[(&str, &str)]) -> DemoSubmission {
        DemoSubmission {
            attachments: files
                .iter()
                .map(|(name, mime)| UploadedFile::new(*name, *mime))
                .collect(),
            ..Self::submission()
        }
    }
}
