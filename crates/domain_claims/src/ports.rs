//! Claims Data Port
//!
//! The dashboard reads three record shapes: table claims, pipeline claims and
//! the KPI dashboard figures. `ClaimsDataPort` is the seam between those
//! shapes and wherever they come from.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::{ClaimsDataPort, StaticCatalogAdapter};
//! use std::sync::Arc;
//!
//! let port: Arc<dyn ClaimsDataPort> = Arc::new(StaticCatalogAdapter::new());
//! let claims = port.list_claims().await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError};

use crate::claim::Claim;
use crate::dashboard::DashboardData;
use crate::pipeline::PipelineClaim;

#[async_trait]
pub trait ClaimsDataPort: DomainPort + HealthCheckable {
    /// All claims in the claims table, in source order
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// A single claim by its claim number
    ///
    /// Returns `PortError::NotFound` when no claim has that id.
    async fn find_claim(&self, id: &str) -> Result<Claim, PortError>;

    /// All claims on the pipeline board
    async fn list_pipeline_claims(&self) -> Result<Vec<PipelineClaim>, PortError>;

    async fn find_pipeline_claim(&self, id: &str) -> Result<PipelineClaim, PortError>;

    /// KPI dashboard figures
    async fn dashboard(&self) -> Result<DashboardData, PortError>;
}
