//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Money, Percentage};
use proptest::prelude::*;

use domain_claims::claim::{ClaimStatus, ClaimType};
use domain_claims::pipeline::{PipelineClaim, PipelineStage, Source};
use domain_claims::query::{SortDirection, SortField};
use domain_claims::viewer::ViewerInput;

use crate::builders::PipelineClaimBuilder;

/// Strategy for whole percentages 0..=100
pub fn percentage_strategy() -> impl Strategy<Value = Percentage> {
    (0u8..=100u8).prop_map(Percentage::saturating)
}

/// Strategy for non-negative rupee amounts
pub fn npr_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(Money::npr)
}

pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(ClaimStatus::ALL.to_vec())
}

pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop::sample::select(ClaimType::ALL.to_vec())
}

pub fn stage_strategy() -> impl Strategy<Value = PipelineStage> {
    prop::sample::select(PipelineStage::ALL.to_vec())
}

pub fn source_strategy() -> impl Strategy<Value = Source> {
    prop::sample::select(Source::ALL.to_vec())
}

pub fn sort_field_strategy() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Id),
        Just(SortField::Claimant),
        Just(SortField::PolicyNumber),
        Just(SortField::Type),
        Just(SortField::Amount),
        Just(SortField::Status),
        Just(SortField::SubmissionDate),
    ]
}

pub fn sort_direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

/// Strategy for a single pipeline claim with arbitrary stage, source and type
pub fn pipeline_claim_strategy() -> impl Strategy<Value = PipelineClaim> {
    (0u32..1000, stage_strategy(), source_strategy(), any::<bool>(), npr_strategy()).prop_map(
        |(n, stage, source, vehicle, amount)| {
            let builder = PipelineClaimBuilder::new()
                .with_id(format!("CLM-{:03}", n))
                .with_stage(stage)
                .with_source(source)
                .with_amount(amount);
            let builder = if vehicle { builder.vehicle() } else { builder };
            builder.build()
        },
    )
}

/// Strategy for a pipeline board's worth of claims
pub fn pipeline_claims_strategy() -> impl Strategy<Value = Vec<PipelineClaim>> {
    prop::collection::vec(pipeline_claim_strategy(), 0..40)
}

/// Strategy for viewer inputs, including extreme zoom values
pub fn viewer_input_strategy() -> impl Strategy<Value = ViewerInput> {
    prop_oneof![
        (-500.0f64..500.0).prop_map(|delta_y| ViewerInput::Wheel { delta_y }),
        Just(ViewerInput::ZoomIn),
        Just(ViewerInput::ZoomOut),
        Just(ViewerInput::Reset),
        (-100.0f64..100.0).prop_map(|zoom| ViewerInput::SetZoom { zoom }),
        (0u8..3, -1000.0f64..1000.0, -1000.0f64..1000.0)
            .prop_map(|(button, x, y)| ViewerInput::PointerDown { button, x, y }),
        (-1000.0f64..1000.0, -1000.0f64..1000.0).prop_map(|(x, y)| ViewerInput::PointerMove { x, y }),
        Just(ViewerInput::PointerUp),
        prop::sample::select(vec!["=", "+", "-", "0", "x"])
            .prop_map(|k| ViewerInput::Key { key: k.to_string() }),
    ]
}

/// Strategy for attachment filenames, some carrying category keywords
pub fn filename_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "pharmacy", "medicine", "lab", "test", "opd", "consultation", "misc", "other", "scan",
            "invoice",
        ]),
        "[a-z]{0,6}",
        prop::sample::select(vec!["pdf", "jpg", "jpeg", "png"]),
    )
        .prop_map(|(keyword, suffix, ext)| format!("{}_{}.{}", keyword, suffix, ext))
}

/// Strategy for email addresses with `.`, `_` and `-` separated local parts
pub fn email_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..4)
        .prop_flat_map(|parts| {
            let separators = prop::collection::vec(
                prop::sample::select(vec!['.', '_', '-']),
                parts.len().saturating_sub(1),
            );
            (Just(parts), separators)
        })
        .prop_map(|(parts, seps)| {
            let mut local = parts[0].clone();
            for (part, sep) in parts[1..].iter().zip(seps) {
                local.push(sep);
                local.push_str(part);
            }
            format!("{}@example.com", local)
        })
}
