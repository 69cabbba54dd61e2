//! In-memory adapter over the seed catalog

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckResult, HealthCheckable, PortError};

use crate::catalog;
use crate::claim::Claim;
use crate::dashboard::DashboardData;
use crate::pipeline::{self, PipelineClaim};
use crate::ports::ClaimsDataPort;

const SOURCE: &str = "static-catalog";

/// Serves the lazily initialized seed records
///
/// Lookups match claim numbers case-insensitively after trimming.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogAdapter;

impl StaticCatalogAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn same_id(code: &str, id: &str) -> bool {
    code.eq_ignore_ascii_case(id.trim())
}

impl DomainPort for StaticCatalogAdapter {}

impl HealthCheckable for StaticCatalogAdapter {
    fn health_check(&self) -> HealthCheckResult {
        if catalog::claims().is_empty() {
            HealthCheckResult::unhealthy(SOURCE, "claim catalog is empty")
        } else {
            HealthCheckResult::healthy(SOURCE)
        }
    }
}

#[async_trait]
impl ClaimsDataPort for StaticCatalogAdapter {
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        Ok(catalog::claims().to_vec())
    }

    async fn find_claim(&self, id: &str) -> Result<Claim, PortError> {
        catalog::claims()
            .iter()
            .find(|c| same_id(c.id.as_str(), id))
            .cloned()
            .ok_or_else(|| PortError::not_found("Claim", id.trim()))
    }

    async fn list_pipeline_claims(&self) -> Result<Vec<PipelineClaim>, PortError> {
        Ok(catalog::pipeline_claims().to_vec())
    }

    async fn find_pipeline_claim(&self, id: &str) -> Result<PipelineClaim, PortError> {
        pipeline::find_pipeline_claim(catalog::pipeline_claims(), id)
            .cloned()
            .map_err(|_| PortError::not_found("PipelineClaim", id.trim()))
    }

    async fn dashboard(&self) -> Result<DashboardData, PortError> {
        Ok(catalog::dashboard().clone())
    }
}
