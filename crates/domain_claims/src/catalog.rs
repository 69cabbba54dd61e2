//! Seed records backing the dashboard
//!
//! Initialized once on first access and never mutated.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use core_kernel::{ClaimNumber, Money, ParticularId, Percentage, PolicyNumber};

use crate::claim::{
    Attachment, AttachmentKind, Channel, Claim, ClaimCategory, ClaimDetails, ClaimParticular,
    ClaimStatus, MedicalCategories, MedicalClaimDetails, VehicleCategories, VehicleClaimDetails,
};
use crate::dashboard::{
    AiPerformance, DashboardData, GlobalStats, HardcopyVerification, MedicalCategoryCounts,
    MedicalClaimsStats, MonthlyAccuracy, MonthlyVariance, OverrideCounts, TopMedicalClaim,
    TopVehicleClaim, VehicleClaimsStats, VehicleFunnel, WorkshopCounts,
};
use crate::pipeline::{
    CategoryEstimate, MedicalStructuredData, PipelineAttachment, PipelineAttachmentKind,
    PipelineClaim, PipelineStage, Source, StructuredData, VehicleStructuredData,
};

pub static CLAIMS: Lazy<Vec<Claim>> = Lazy::new(seed_claims);
pub static PIPELINE: Lazy<Vec<PipelineClaim>> = Lazy::new(seed_pipeline);
pub static DASHBOARD: Lazy<DashboardData> = Lazy::new(seed_dashboard);

pub fn claims() -> &'static [Claim] {
    &CLAIMS
}

pub fn pipeline_claims() -> &'static [PipelineClaim] {
    &PIPELINE
}

pub fn dashboard() -> &'static DashboardData {
    &DASHBOARD
}

fn pct(value: u8) -> Percentage {
    Percentage::saturating(value)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn timestamp(rfc3339: &str) -> DateTime<Utc> {
    rfc3339.parse().unwrap_or_default()
}

fn particular(
    id: &str,
    description: &str,
    amount: i64,
    ai_score: u8,
    ai_remarks: &str,
    document: &str,
) -> ClaimParticular {
    ClaimParticular {
        id: ParticularId::new_unchecked(id),
        description: description.to_string(),
        amount: Money::npr(amount),
        ai_score: pct(ai_score),
        ai_remarks: ai_remarks.to_string(),
        document: document.to_string(),
    }
}

fn category(value: i64, confidence: u8, particulars: Vec<ClaimParticular>) -> ClaimCategory {
    ClaimCategory {
        value: Money::npr(value),
        confidence: pct(confidence),
        particulars,
    }
}

fn attachment(filename: &str, kind: AttachmentKind) -> Attachment {
    Attachment {
        filename: filename.to_string(),
        url: format!("/dummy/{}", filename),
        kind,
    }
}

#[allow(clippy::too_many_arguments)]
fn claim(
    id: &str,
    claimant: &str,
    policy: &str,
    channel: Channel,
    amount: i64,
    status: ClaimStatus,
    submitted: NaiveDate,
    details: ClaimDetails,
) -> Claim {
    Claim {
        id: ClaimNumber::new_unchecked(id),
        claimant: claimant.to_string(),
        policy_number: PolicyNumber::new_unchecked(policy),
        channel,
        amount: Money::npr(amount),
        status,
        submission_date: submitted,
        details,
    }
}

fn seed_claims() -> Vec<Claim> {
    use AttachmentKind::{Image, Pdf};

    let claims = vec![
        claim(
            "CLM-001",
            "राम बहादुर श्रेष्ठ",
            "HMP-2024-011",
            Channel::Email,
            107000,
            ClaimStatus::Pending,
            date(2024, 1, 15),
            ClaimDetails::Medical(MedicalClaimDetails {
                categories: MedicalCategories {
                    medicines: category(25000, 92, vec![
                        particular("MED-001", "Paracetamol 500mg (Deurali-Janta Pharmaceuticals)", 850, 95, "Medicine name and dosage clearly visible", "pharmacy_bill.pdf"),
                        particular("MED-002", "Amoxicillin 250mg (Nepal Pharmaceuticals)", 1200, 92, "Brand and strength identified correctly", "pharmacy_bill.pdf"),
                        particular("MED-003", "Crocin Advance (GlaxoSmithKline Nepal)", 450, 88, "Brand name clearly extracted", "pharmacy_bill.pdf"),
                    ]),
                    lab: category(50000, 89, vec![
                        particular("LAB-001", "Complete Blood Count (CBC)", 1500, 94, "Standard test code identified", "lab_report.pdf"),
                        particular("LAB-002", "Liver Function Test (LFT)", 2800, 91, "Test panel correctly identified", "lab_report.pdf"),
                        particular("LAB-003", "Chest X-Ray (AP View)", 1200, 87, "Radiology procedure identified", "xray_report.pdf"),
                    ]),
                    opd: category(20000, 94, vec![
                        particular("OPD-001", "Dr. सुरेश कुमार पौडेल - NMC: 12547", 850, 96, "Doctor name and NMC number clearly extracted", "consultation_receipt.pdf"),
                        particular("OPD-002", "Dr. प्रिया राणा - NMC: 15832", 1200, 93, "Specialist consultation identified", "specialist_receipt.pdf"),
                    ]),
                    others: category(12000, 85, vec![
                        particular("OTH-001", "Ambulance Service (Kathmandu to Pokhara)", 8000, 88, "Transportation cost identified", "ambulance_receipt.pdf"),
                        particular("OTH-002", "Medical Certificate Fee", 500, 82, "Administrative fee extracted", "certificate_receipt.pdf"),
                    ]),
                },
                attachments: vec![
                    attachment("lab_report.pdf", Pdf),
                    attachment("hospital_bill.png", Image),
                ],
            }),
        ),
        claim(
            "CLM-002",
            "सीता देवी गुरुङ",
            "VCL-2024-108",
            Channel::OnlineApp,
            462000,
            ClaimStatus::Exception,
            date(2024, 1, 12),
            ClaimDetails::Vehicle(VehicleClaimDetails {
                quotation_approved: Money::npr(450000),
                invoice_submitted: Money::npr(462000),
                categories: VehicleCategories {
                    parts: category(380000, 95, vec![
                        particular("PRT-001", "Honda City - Front Bumper (Genuine Part)", 45000, 97, "Genuine part number verified", "parts_invoice.pdf"),
                        particular("PRT-002", "Headlight Assembly (Right Side)", 28000, 94, "OEM part identification successful", "parts_invoice.pdf"),
                    ]),
                    labor: category(70000, 91, vec![
                        particular("LBR-001", "Body Repair and Painting", 45000, 92, "Labor hours calculated correctly", "labor_receipt.pdf"),
                        particular("LBR-002", "Electrical Work", 15000, 89, "Specialist labor identified", "electrical_receipt.pdf"),
                    ]),
                    others: category(12000, 87, vec![
                        particular("OTH-001", "Towing Charges", 5000, 90, "Emergency service charge", "towing_receipt.pdf"),
                    ]),
                },
                attachments: vec![
                    attachment("workshop_quote.pdf", Pdf),
                    attachment("final_invoice.jpg", Image),
                ],
            }),
        ),
        claim(
            "CLM-003",
            "अर्जुन तामाङ",
            "HMP-2024-025",
            Channel::Chat,
            85000,
            ClaimStatus::Verified,
            date(2024, 1, 18),
            ClaimDetails::Medical(MedicalClaimDetails {
                categories: MedicalCategories {
                    medicines: category(32000, 96, vec![
                        particular("MED-001", "Insulin Injection (Novo Nordisk Nepal)", 4500, 98, "Prescription medication verified", "prescription.pdf"),
                    ]),
                    lab: category(28000, 91, vec![
                        particular("LAB-001", "HbA1c Test", 1800, 95, "Diabetes monitoring test", "lab_results.pdf"),
                    ]),
                    opd: category(15000, 89, vec![
                        particular("OPD-001", "Dr. रमेश खड्का - NMC: 18965", 850, 92, "Endocrinologist consultation", "doctor_fee.pdf"),
                    ]),
                    others: category(10000, 88, vec![
                        particular("OTH-001", "Glucose Monitor Device", 7500, 85, "Medical equipment purchase", "device_receipt.pdf"),
                    ]),
                },
                attachments: vec![
                    attachment("prescription.pdf", Pdf),
                    attachment("pharmacy_bill.jpg", Image),
                ],
            }),
        ),
        claim(
            "CLM-004",
            "पूजा श्रेष्ठ",
            "VCL-2024-089",
            Channel::OnlineApp,
            324000,
            ClaimStatus::Settled,
            date(2024, 1, 10),
            ClaimDetails::Vehicle(VehicleClaimDetails {
                quotation_approved: Money::npr(320000),
                invoice_submitted: Money::npr(324000),
                categories: VehicleCategories {
                    parts: category(250000, 98, vec![
                        particular("PRT-001", "Maruti Swift - Side Mirror (Left)", 12000, 99, "Part number matches exactly", "parts_bill.pdf"),
                    ]),
                    labor: category(60000, 94, vec![
                        particular("LBR-001", "Minor Dent Repair", 25000, 96, "Standard repair procedure", "workshop_bill.pdf"),
                    ]),
                    others: category(14000, 92, vec![
                        particular("OTH-001", "Vehicle Inspection Fee", 2000, 94, "Mandatory inspection charge", "inspection_receipt.pdf"),
                    ]),
                },
                attachments: vec![
                    attachment("garage_estimate.pdf", Pdf),
                    attachment("repair_invoice.png", Image),
                ],
            }),
        ),
        claim(
            "CLM-005",
            "कमल बस्नेत",
            "HMP-2024-033",
            Channel::Email,
            153000,
            ClaimStatus::Pending,
            date(2024, 1, 20),
            ClaimDetails::Medical(MedicalClaimDetails {
                categories: MedicalCategories {
                    medicines: category(42000, 94, vec![
                        particular("MED-001", "Atorvastatin 20mg (Cipla Nepal)", 1250, 96, "Cholesterol medication clearly identified", "medicine_receipt.pdf"),
                        particular("MED-002", "Metformin 500mg (Himalaya Drug Company)", 980, 94, "Diabetes medication verified", "medicine_receipt.pdf"),
                        particular("MED-003", "Aspirin 75mg (Bayer Nepal)", 675, 92, "Blood thinner prescription verified", "medicine_receipt.pdf"),
                    ]),
                    lab: category(75000, 87, vec![
                        particular("LAB-001", "Lipid Profile Test", 2200, 91, "Cholesterol panel test identified", "lab_report.pdf"),
                        particular("LAB-002", "ECG (Electrocardiogram)", 1500, 89, "Cardiac test procedure verified", "ecg_report.pdf"),
                        particular("LAB-003", "2D Echo Cardiography", 4500, 85, "Advanced cardiac imaging test", "echo_report.pdf"),
                    ]),
                    opd: category(26000, 92, vec![
                        particular("OPD-001", "Dr. अनिल शर्मा - NMC: 14789", 850, 95, "Cardiologist consultation verified", "cardio_consultation.pdf"),
                        particular("OPD-002", "Dr. सुनीता पाण्डे - NMC: 16234", 1200, 93, "Follow-up consultation identified", "followup_receipt.pdf"),
                    ]),
                    others: category(10000, 83, vec![
                        particular("OTH-001", "Hospital Room Charges (Norvic International Hospital)", 6000, 87, "Accommodation charges verified", "room_charges.pdf"),
                        particular("OTH-002", "Nursing Care Services", 2500, 81, "Professional care service charge", "nursing_receipt.pdf"),
                    ]),
                },
                attachments: vec![
                    attachment("medical_report.pdf", Pdf),
                    attachment("test_results.jpg", Image),
                ],
            }),
        ),
    ];

    tracing::debug!(count = claims.len(), "Loaded claim seed data");
    claims
}

fn estimate(value: i64, confidence: u8) -> Option<CategoryEstimate> {
    Some(CategoryEstimate {
        value: Money::npr(value),
        confidence: pct(confidence),
    })
}

fn pipeline_attachment(name: &str, kind: PipelineAttachmentKind) -> PipelineAttachment {
    PipelineAttachment {
        name: name.to_string(),
        url: format!("/dummy/{}", name),
        kind,
    }
}

fn vehicle_data(quote: i64, invoice: i64, parts: i64, labor: i64, others: i64) -> StructuredData {
    StructuredData::Vehicle(VehicleStructuredData {
        quotation_approved: Money::npr(quote),
        invoice_submitted: Money::npr(invoice),
        variance: Money::npr(invoice - quote),
        parts: Money::npr(parts),
        labor: Money::npr(labor),
        others: Money::npr(others),
    })
}

#[allow(clippy::too_many_arguments)]
fn pipeline_claim(
    id: &str,
    claimant: &str,
    policy: &str,
    source: Source,
    stage: PipelineStage,
    amount: i64,
    attachments: Vec<PipelineAttachment>,
    structured_data: StructuredData,
    created_at: &str,
    updated_at: &str,
) -> PipelineClaim {
    PipelineClaim {
        id: ClaimNumber::new_unchecked(id),
        claimant: claimant.to_string(),
        policy_number: PolicyNumber::new_unchecked(policy),
        source,
        stage,
        amount: Money::npr(amount),
        attachments,
        structured_data,
        created_at: timestamp(created_at),
        updated_at: timestamp(updated_at),
    }
}

fn seed_pipeline() -> Vec<PipelineClaim> {
    use PipelineAttachmentKind::{Jpg, Pdf, Png};

    vec![
        pipeline_claim(
            "CLM-101",
            "Ravi Kumar",
            "HMP-2024-123",
            Source::Email,
            PipelineStage::CompliancePending,
            11200,
            vec![
                pipeline_attachment("hospital_bill.pdf", Pdf),
                pipeline_attachment("lab_report.png", Png),
            ],
            StructuredData::Medical(MedicalStructuredData {
                medicines: estimate(2500, 92),
                labs: estimate(5000, 89),
                opd: estimate(3200, 94),
                others: None,
            }),
            "2024-01-15T10:30:00Z",
            "2024-01-16T14:20:00Z",
        ),
        pipeline_claim(
            "CLM-102",
            "Meera Singh",
            "VCL-2024-908",
            Source::Portal,
            PipelineStage::Verified,
            46800,
            vec![
                pipeline_attachment("workshop_quote.pdf", Pdf),
                pipeline_attachment("final_invoice.jpg", Jpg),
            ],
            vehicle_data(45000, 46800, 38000, 7000, 800),
            "2024-01-14T09:15:00Z",
            "2024-01-16T11:45:00Z",
        ),
        pipeline_claim(
            "CLM-103",
            "Bikash Thapa",
            "HMP-2024-124",
            Source::Chat,
            PipelineStage::Received,
            8500,
            vec![
                pipeline_attachment("prescription.pdf", Pdf),
                pipeline_attachment("medical_certificate.jpg", Jpg),
            ],
            StructuredData::Medical(MedicalStructuredData {
                medicines: estimate(3500, 88),
                opd: estimate(5000, 91),
                ..Default::default()
            }),
            "2024-01-16T16:45:00Z",
            "2024-01-16T16:45:00Z",
        ),
        pipeline_claim(
            "CLM-104",
            "Anita Gurung",
            "VCL-2024-909",
            Source::Api,
            PipelineStage::AiProcessed,
            32000,
            vec![
                pipeline_attachment("accident_report.pdf", Pdf),
                pipeline_attachment("damage_photos.png", Png),
            ],
            vehicle_data(30000, 32000, 25000, 6000, 1000),
            "2024-01-15T13:20:00Z",
            "2024-01-16T10:30:00Z",
        ),
        pipeline_claim(
            "CLM-105",
            "Prakash Sharma",
            "HMP-2024-125",
            Source::Email,
            PipelineStage::Settled,
            15600,
            vec![
                pipeline_attachment("surgery_bill.pdf", Pdf),
                pipeline_attachment("discharge_summary.pdf", Pdf),
            ],
            StructuredData::Medical(MedicalStructuredData {
                medicines: estimate(8000, 95),
                labs: estimate(4000, 93),
                opd: estimate(3600, 90),
                others: None,
            }),
            "2024-01-10T08:00:00Z",
            "2024-01-15T17:30:00Z",
        ),
        pipeline_claim(
            "CLM-106",
            "Sita Devi",
            "VCL-2024-910",
            Source::Portal,
            PipelineStage::AiProcessed,
            28000,
            vec![
                pipeline_attachment("repair_estimate.pdf", Pdf),
                pipeline_attachment("parts_list.pdf", Pdf),
            ],
            vehicle_data(28000, 28000, 22000, 5000, 1000),
            "2024-01-16T11:00:00Z",
            "2024-01-16T15:45:00Z",
        ),
    ]
}

fn top_medical(policy: &str, claimant: &str, amount: i64, status: ClaimStatus) -> TopMedicalClaim {
    TopMedicalClaim {
        policy: PolicyNumber::new_unchecked(policy),
        claimant: claimant.to_string(),
        amount: Money::npr(amount),
        status,
    }
}

fn top_vehicle(policy: &str, vehicle: &str, workshop: &str, quote: i64, invoice: i64) -> TopVehicleClaim {
    TopVehicleClaim {
        policy: PolicyNumber::new_unchecked(policy),
        vehicle: vehicle.to_string(),
        workshop: workshop.to_string(),
        quote: Money::npr(quote),
        invoice: Money::npr(invoice),
        variance: Money::npr(invoice - quote),
    }
}

fn seed_dashboard() -> DashboardData {
    let months = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
    let variances = [dec!(3.2), dec!(1.8), dec!(2.5), dec!(2.1), dec!(3.8), dec!(2.9)];
    let accuracy = [88, 90, 92, 91, 94, 96];

    DashboardData {
        global_stats: GlobalStats {
            total: 1200,
            auto_processed: 800,
            pending_manual: 250,
            compliance_rate: pct(92),
            avg_processing_days: dec!(4.2),
        },
        medical_claims: MedicalClaimsStats {
            categories: MedicalCategoryCounts {
                medicines: 320,
                laboratory: 210,
                opd: 140,
                others: 90,
            },
            hardcopy_verification: HardcopyVerification {
                verified: 700,
                exceptions: 50,
            },
            top_claims: vec![
                top_medical("HMP-2024-011", "Ram Bahadur Thapa", 12000, ClaimStatus::Verified),
                top_medical("HMP-2024-014", "Sita Devi Shrestha", 8700, ClaimStatus::Exception),
                top_medical("HMP-2024-018", "Bikash Kumar Tamang", 15600, ClaimStatus::Verified),
                top_medical("HMP-2024-022", "Anita Gurung", 9200, ClaimStatus::Verified),
                top_medical("HMP-2024-025", "Prakash Sharma", 13400, ClaimStatus::Exception),
            ],
        },
        vehicle_claims: VehicleClaimsStats {
            funnel: VehicleFunnel {
                quotations: 450,
                approved: 380,
                invoices: 320,
                settled: 300,
            },
            variance_trend: months
                .iter()
                .zip(variances)
                .map(|(month, variance)| MonthlyVariance {
                    month: month.to_string(),
                    variance,
                })
                .collect(),
            workshops: WorkshopCounts {
                approved: 260,
                non_approved: 60,
            },
            top_claims: vec![
                top_vehicle("VCL-2024-102", "Ba 1 Pa 1234", "ABC Autoworks", 45000, 46200),
                top_vehicle("VCL-2024-108", "Ba 2 Pa 9988", "XYZ Motors", 52000, 60000),
                top_vehicle("VCL-2024-115", "Ba 3 Pa 5678", "Premium Garage", 38000, 39500),
                top_vehicle("VCL-2024-122", "Ba 4 Pa 4321", "City Auto", 62000, 65000),
                top_vehicle("VCL-2024-129", "Ba 5 Pa 8765", "Express Motors", 28000, 28500),
            ],
        },
        ai_performance: AiPerformance {
            accuracy_trend: months
                .iter()
                .zip(accuracy)
                .map(|(month, accuracy)| MonthlyAccuracy {
                    month: month.to_string(),
                    accuracy: pct(accuracy),
                })
                .collect(),
            overrides: OverrideCounts {
                medicines: 12,
                labs: 8,
                opd: 4,
                vehicle_parts: 6,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(claims().len(), 5);
        assert_eq!(pipeline_claims().len(), 6);
    }

    #[test]
    fn test_seed_dates_parsed() {
        assert!(claims().iter().all(|c| c.submission_date.format("%Y").to_string() == "2024"));
        assert!(pipeline_claims().iter().all(|c| c.created_at <= c.updated_at));
        assert_eq!(
            pipeline_claims()[0].updated_at.to_rfc3339(),
            "2024-01-16T14:20:00+00:00"
        );
    }

    #[test]
    fn test_vehicle_variances() {
        let data = dashboard();
        let variances: Vec<Money> = data.vehicle_claims.top_claims.iter().map(|c| c.variance).collect();
        assert_eq!(
            variances,
            vec![Money::npr(1200), Money::npr(8000), Money::npr(1500), Money::npr(3000), Money::npr(500)]
        );
    }

    #[test]
    fn test_particular_ids_unique_within_category() {
        for claim in claims() {
            for (_, category) in claim.details.categories() {
                let mut ids: Vec<&str> = category.particulars.iter().map(|p| p.id.as_str()).collect();
                let before = ids.len();
                ids.dedup();
                assert_eq!(ids.len(), before);
            }
        }
    }
}
