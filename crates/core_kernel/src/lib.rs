//! Core Kernel - Foundational types for the claims review dashboard
//!
//! This crate provides the building blocks shared by the domain and API crates:
//! - Money types with precise decimal arithmetic and rupee formatting
//! - Whole-number percentages for confidence and score values
//! - Reference codes and runtime identifiers
//! - Display timezone handling
//! - Port infrastructure for swappable data sources

pub mod money;
pub mod percentage;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, DigitGrouping, MoneyError, group_digits};
pub use percentage::Percentage;
pub use temporal::Timezone;
pub use identifiers::{ClaimNumber, PolicyNumber, ParticularId, SubmissionId};
pub use ports::{PortError, DomainPort, HealthCheckResult, HealthCheckable};
pub use error::CoreError;
