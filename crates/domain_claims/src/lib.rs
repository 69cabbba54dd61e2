//! Claims Review Domain
//!
//! This crate drives the claims-review dashboard: the claims table, claim
//! detail page, pipeline board, KPI dashboard, system-flow diagram viewer and
//! the working demo. Records are seed data; nothing here scores or decides.
//!
//! # Pipeline Stages
//!
//! ```text
//! Received -> AI Processed -> Compliance Pending -> Verified -> Settled
//! ```

pub mod claim;
pub mod query;
pub mod pipeline;
pub mod detail;
pub mod review;
pub mod dashboard;
pub mod display;
pub mod viewer;
pub mod demo;
pub mod catalog;
pub mod ports;
pub mod adapters;
pub mod error;

pub use claim::{
    Attachment, AttachmentKind, CategoryKind, Channel, Claim, ClaimCategory, ClaimDetails,
    ClaimParticular, ClaimStatus, ClaimType, MedicalClaimDetails, VehicleClaimDetails,
};
pub use query::{ClaimQuery, SearchTerm, Searchable, SortDirection, SortField, SortState};
pub use pipeline::{PipelineBoard, PipelineClaim, PipelineFilter, PipelineStage, Source, StageColumn};
pub use detail::{ClaimDetailView, DrawerView};
pub use review::{ReviewAction, ReviewNotice};
pub use dashboard::{DashboardData, KpiTile, ChartSlice};
pub use viewer::{ViewerEffect, ViewerInput, ViewerState};
pub use demo::{DemoSession, DemoSimulator, DemoSubmission, ProcessedClaim, ProcessingStatus, UploadedFile};
pub use ports::ClaimsDataPort;
pub use adapters::StaticCatalogAdapter;
pub use error::ClaimError;
