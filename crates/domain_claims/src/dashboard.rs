//! KPI dashboard figures and chart series
//!
//! The figures themselves are seed data. This module only shapes them into
//! tiles and chart slices.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{group_digits, DigitGrouping, Money, Percentage, PolicyNumber};

use crate::claim::ClaimStatus;
use crate::display;

pub const BLUE: &str = "#3B82F6";
pub const GREEN: &str = "#10B981";
pub const AMBER: &str = "#F59E0B";
pub const VIOLET: &str = "#8B5CF6";
pub const RED: &str = "#EF4444";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub total: u32,
    pub auto_processed: u32,
    pub pending_manual: u32,
    pub compliance_rate: Percentage,
    pub avg_processing_days: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalCategoryCounts {
    pub medicines: u32,
    pub laboratory: u32,
    pub opd: u32,
    pub others: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardcopyVerification {
    pub verified: u32,
    pub exceptions: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopMedicalClaim {
    pub policy: PolicyNumber,
    pub claimant: String,
    pub amount: Money,
    pub status: ClaimStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalClaimsStats {
    pub categories: MedicalCategoryCounts,
    pub hardcopy_verification: HardcopyVerification,
    pub top_claims: Vec<TopMedicalClaim>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleFunnel {
    pub quotations: u32,
    pub approved: u32,
    pub invoices: u32,
    pub settled: u32,
}

/// Average quote/invoice variance for a month, in percent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyVariance {
    pub month: String,
    pub variance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopCounts {
    pub approved: u32,
    pub non_approved: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopVehicleClaim {
    pub policy: PolicyNumber,
    /// Registration plate
    pub vehicle: String,
    pub workshop: String,
    pub quote: Money,
    pub invoice: Money,
    pub variance: Money,
}

impl TopVehicleClaim {
    pub fn variance_color(&self) -> &'static str {
        display::variance_color(self.variance)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleClaimsStats {
    pub funnel: VehicleFunnel,
    pub variance_trend: Vec<MonthlyVariance>,
    pub workshops: WorkshopCounts,
    pub top_claims: Vec<TopVehicleClaim>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAccuracy {
    pub month: String,
    pub accuracy: Percentage,
}

/// Reviewer overrides of AI output, per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideCounts {
    pub medicines: u32,
    pub labs: u32,
    pub opd: u32,
    pub vehicle_parts: u32,
}

impl OverrideCounts {
    pub fn total(&self) -> u32 {
        self.medicines + self.labs + self.opd + self.vehicle_parts
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiPerformance {
    pub accuracy_trend: Vec<MonthlyAccuracy>,
    pub overrides: OverrideCounts,
}

impl AiPerformance {
    /// Most recent month of the accuracy trend
    pub fn latest_accuracy(&self) -> Option<&MonthlyAccuracy> {
        self.accuracy_trend.last()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub global_stats: GlobalStats,
    pub medical_claims: MedicalClaimsStats,
    pub vehicle_claims: VehicleClaimsStats,
    pub ai_performance: AiPerformance,
}

/// One headline figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiTile {
    pub title: &'static str,
    pub value: String,
    pub icon: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
    pub border_color: &'static str,
}

/// One slice of a pie/bar chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

impl ChartSlice {
    const fn new(name: &'static str, value: u32, color: &'static str) -> Self {
        Self { name, value, color }
    }
}

fn count(n: u32) -> String {
    group_digits(&n.to_string(), DigitGrouping::Thousands)
}

impl GlobalStats {
    /// The five headline tiles, left to right
    pub fn kpi_tiles(&self) -> Vec<KpiTile> {
        let tile = |title, value, icon, hue: &'static str| -> KpiTile {
            let (color, bg_color, border_color) = match hue {
                "blue" => ("text-blue-600", "bg-blue-50", "border-blue-200"),
                "green" => ("text-green-600", "bg-green-50", "border-green-200"),
                "orange" => ("text-orange-600", "bg-orange-50", "border-orange-200"),
                "purple" => ("text-purple-600", "bg-purple-50", "border-purple-200"),
                _ => ("text-indigo-600", "bg-indigo-50", "border-indigo-200"),
            };
            KpiTile { title, value, icon, color, bg_color, border_color }
        };

        vec![
            tile("Total Claims", count(self.total), "file-text", "blue"),
            tile("Auto-Processed", count(self.auto_processed), "check-circle", "green"),
            tile("Pending Manual", count(self.pending_manual), "clock", "orange"),
            tile("Compliance Rate", self.compliance_rate.to_string(), "shield", "purple"),
            tile(
                "Avg Processing Time",
                format!("{} days", self.avg_processing_days.normalize()),
                "trending-up",
                "indigo",
            ),
        ]
    }
}

impl DashboardData {
    pub fn medical_category_slices(&self) -> [ChartSlice; 4] {
        let c = &self.medical_claims.categories;
        [
            ChartSlice::new("Medicines", c.medicines, BLUE),
            ChartSlice::new("Laboratory", c.laboratory, GREEN),
            ChartSlice::new("OPD", c.opd, AMBER),
            ChartSlice::new("Others", c.others, VIOLET),
        ]
    }

    pub fn verification_slices(&self) -> [ChartSlice; 2] {
        let v = &self.medical_claims.hardcopy_verification;
        [
            ChartSlice::new("Verified", v.verified, GREEN),
            ChartSlice::new("Exceptions", v.exceptions, RED),
        ]
    }

    pub fn funnel_slices(&self) -> [ChartSlice; 4] {
        let f = &self.vehicle_claims.funnel;
        [
            ChartSlice::new("Quotations", f.quotations, BLUE),
            ChartSlice::new("Approved", f.approved, GREEN),
            ChartSlice::new("Invoices", f.invoices, AMBER),
            ChartSlice::new("Settled", f.settled, VIOLET),
        ]
    }

    pub fn workshop_slices(&self) -> [ChartSlice; 2] {
        let w = &self.vehicle_claims.workshops;
        [
            ChartSlice::new("Approved", w.approved, GREEN),
            ChartSlice::new("Non-Approved", w.non_approved, RED),
        ]
    }

    pub fn override_slices(&self) -> [ChartSlice; 4] {
        let o = &self.ai_performance.overrides;
        [
            ChartSlice::new("Medicines", o.medicines, BLUE),
            ChartSlice::new("Laboratory", o.labs, GREEN),
            ChartSlice::new("OPD", o.opd, AMBER),
            ChartSlice::new("Vehicle Parts", o.vehicle_parts, VIOLET),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn stats() -> GlobalStats {
        GlobalStats {
            total: 1200,
            auto_processed: 800,
            pending_manual: 250,
            compliance_rate: Percentage::saturating(92),
            avg_processing_days: dec!(4.2),
        }
    }

    #[test]
    fn test_kpi_tile_values() {
        let tiles = stats().kpi_tiles();
        let values: Vec<&str> = tiles.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, vec!["1,200", "800", "250", "92%", "4.2 days"]);
        assert_eq!(tiles[3].icon, "shield");
        assert_eq!(tiles[4].color, "text-indigo-600");
    }

    #[test]
    fn test_override_total() {
        let o = OverrideCounts { medicines: 12, labs: 8, opd: 4, vehicle_parts: 6 };
        assert_eq!(o.total(), 30);
    }
}
