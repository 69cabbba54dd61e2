//! KPI dashboard DTOs

use serde::Serialize;

use core_kernel::{Money, Percentage};
use domain_claims::dashboard::{MonthlyAccuracy, MonthlyVariance, TopMedicalClaim, TopVehicleClaim};
use domain_claims::display::{self, BadgeStyle};
use domain_claims::{ChartSlice, ClaimStatus, DashboardData, KpiTile};

#[derive(Debug, Serialize)]
pub struct TopMedicalRow {
    pub policy: String,
    pub claimant: String,
    pub amount: Money,
    pub amount_display: String,
    pub status: ClaimStatus,
    pub status_badge: BadgeStyle,
}

impl From<&TopMedicalClaim> for TopMedicalRow {
    fn from(claim: &TopMedicalClaim) -> Self {
        Self {
            policy: claim.policy.to_string(),
            claimant: claim.claimant.clone(),
            amount: claim.amount,
            amount_display: claim.amount.to_string(),
            status: claim.status,
            status_badge: display::status_badge(claim.status),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TopVehicleRow {
    pub policy: String,
    pub vehicle: String,
    pub workshop: String,
    pub quote: Money,
    pub invoice: Money,
    pub variance: Money,
    pub variance_display: String,
    pub variance_color: &'static str,
}

impl From<&TopVehicleClaim> for TopVehicleRow {
    fn from(claim: &TopVehicleClaim) -> Self {
        Self {
            policy: claim.policy.to_string(),
            vehicle: claim.vehicle.clone(),
            workshop: claim.workshop.clone(),
            quote: claim.quote,
            invoice: claim.invoice,
            variance: claim.variance,
            variance_display: claim.variance.to_string(),
            variance_color: claim.variance_color(),
        }
    }
}

/// Latest month of the accuracy trend with its status text
#[derive(Debug, Serialize)]
pub struct AccuracySummary {
    pub month: String,
    pub accuracy: Percentage,
    pub color: &'static str,
    pub status: &'static str,
}

impl From<&MonthlyAccuracy> for AccuracySummary {
    fn from(m: &MonthlyAccuracy) -> Self {
        Self {
            month: m.month.clone(),
            accuracy: m.accuracy,
            color: display::accuracy_color(m.accuracy),
            status: display::accuracy_status(m.accuracy),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MedicalSection {
    pub categories: [ChartSlice; 4],
    pub hardcopy_verification: [ChartSlice; 2],
    pub top_claims: Vec<TopMedicalRow>,
}

#[derive(Debug, Serialize)]
pub struct VehicleSection {
    pub funnel: [ChartSlice; 4],
    pub variance_trend: Vec<MonthlyVariance>,
    pub workshops: [ChartSlice; 2],
    pub top_claims: Vec<TopVehicleRow>,
}

#[derive(Debug, Serialize)]
pub struct AiSection {
    pub accuracy_trend: Vec<MonthlyAccuracy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<AccuracySummary>,
    pub overrides: [ChartSlice; 4],
    pub total_overrides: u32,
}

/// Every tile, chart series and table on the dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub kpis: Vec<KpiTile>,
    pub medical: MedicalSection,
    pub vehicle: VehicleSection,
    pub ai_performance: AiSection,
}

impl From<&DashboardData> for DashboardResponse {
    fn from(data: &DashboardData) -> Self {
        Self {
            kpis: data.global_stats.kpi_tiles(),
            medical: MedicalSection {
                categories: data.medical_category_slices(),
                hardcopy_verification: data.verification_slices(),
                top_claims: data.medical_claims.top_claims.iter().map(Into::into).collect(),
            },
            vehicle: VehicleSection {
                funnel: data.funnel_slices(),
                variance_trend: data.vehicle_claims.variance_trend.clone(),
                workshops: data.workshop_slices(),
                top_claims: data.vehicle_claims.top_claims.iter().map(Into::into).collect(),
            },
            ai_performance: AiSection {
                accuracy_trend: data.ai_performance.accuracy_trend.clone(),
                latest: data.ai_performance.latest_accuracy().map(Into::into),
                overrides: data.override_slices(),
                total_overrides: data.ai_performance.overrides.total(),
            },
        }
    }
}
