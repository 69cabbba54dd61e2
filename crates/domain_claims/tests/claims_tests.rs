//! Comprehensive tests for domain_claims

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Money, Percentage, SubmissionId};

use domain_claims::catalog;
use domain_claims::claim::{ClaimStatus, ClaimType};
use domain_claims::dashboard::DashboardData;
use domain_claims::demo::{self, DemoSession, DemoSimulator, ProcessingStatus, FAILURE_MESSAGE};
use domain_claims::detail::{self, ClaimDetailView, DrawerView, SummaryCards};
use domain_claims::display;
use domain_claims::pipeline::{PipelineBoard, PipelineFilter, PipelineStage, Source};
use domain_claims::query::{ClaimQuery, SearchTerm, SortDirection, SortField, SortState};
use domain_claims::review::{self, ReviewAction};
use domain_claims::viewer::{ViewerState, MAX_ZOOM, MIN_ZOOM};
use domain_claims::{ClaimError, ClaimsDataPort, StaticCatalogAdapter};

use test_utils::{
    assert_money_in_range, assert_partition_exact, assert_sorted, ClaimBuilder, DemoFixtures,
    PipelineClaimBuilder, TemporalFixtures,
};

// ============================================================================
// Claims Table Tests
// ============================================================================

mod query_tests {
    use super::*;

    fn ids(rows: &[&domain_claims::Claim]) -> Vec<String> {
        rows.iter().map(|c| c.id.to_string()).collect()
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let rows = ClaimQuery::default().apply(catalog::claims());
        assert_eq!(ids(&rows), vec!["CLM-005", "CLM-003", "CLM-001", "CLM-002", "CLM-004"]);
    }

    #[test]
    fn test_sort_by_amount_ascending() {
        let query = ClaimQuery::new(
            SearchTerm::default(),
            SortState::new(SortField::Amount, SortDirection::Asc),
        );
        let rows = query.apply(catalog::claims());
        assert_eq!(ids(&rows), vec!["CLM-003", "CLM-001", "CLM-005", "CLM-004", "CLM-002"]);
        assert_sorted(&rows, &query.sort);
    }

    #[test]
    fn test_search_matches_policy_number_case_insensitively() {
        let query = ClaimQuery::new(SearchTerm::new("vcl-2024"), SortState::default());
        let rows = query.apply(catalog::claims());
        assert_eq!(ids(&rows), vec!["CLM-002", "CLM-004"]);
    }

    #[test]
    fn test_search_matches_devanagari_claimant() {
        let query = ClaimQuery::new(SearchTerm::new("तामाङ"), SortState::default());
        let rows = query.apply(catalog::claims());
        assert_eq!(ids(&rows), vec!["CLM-003"]);
    }

    #[test]
    fn test_search_keeps_surrounding_spaces() {
        let inner_space = ClaimQuery::new(SearchTerm::new(" देवी "), SortState::default());
        assert_eq!(ids(&inner_space.apply(catalog::claims())), vec!["CLM-002"]);

        let padded_id = ClaimQuery::new(SearchTerm::new(" CLM-001"), SortState::default());
        assert!(padded_id.apply(catalog::claims()).is_empty());
    }

    #[test]
    fn test_search_does_not_mutate_source() {
        let before = catalog::claims().to_vec();
        let _ = ClaimQuery::new(SearchTerm::new("CLM"), SortState::new(SortField::Claimant, SortDirection::Desc))
            .apply(catalog::claims());
        assert_eq!(catalog::claims(), before.as_slice());
    }

    #[test]
    fn test_equal_keys_keep_source_order() {
        let claims = vec![
            ClaimBuilder::new().with_id("CLM-A").with_status(ClaimStatus::Pending).build(),
            ClaimBuilder::new().with_id("CLM-B").with_status(ClaimStatus::Pending).build(),
            ClaimBuilder::new().with_id("CLM-C").with_status(ClaimStatus::Pending).build(),
        ];
        let query = ClaimQuery::new(SearchTerm::default(), SortState::new(SortField::Status, SortDirection::Asc));
        assert_eq!(ids(&query.apply(&claims)), vec!["CLM-A", "CLM-B", "CLM-C"]);
    }

    #[test]
    fn test_sort_by_type() {
        let claims = vec![
            ClaimBuilder::vehicle().with_id("CLM-V").build(),
            ClaimBuilder::new().with_id("CLM-M").build(),
        ];
        let query = ClaimQuery::new(SearchTerm::default(), SortState::new(SortField::Type, SortDirection::Asc));
        assert_eq!(ids(&query.apply(&claims)), vec!["CLM-M", "CLM-V"]);
    }

    #[test]
    fn test_sort_by_date_descending() {
        let claims = vec![
            ClaimBuilder::new()
                .with_id("CLM-OLD")
                .with_submission_date(NaiveDate::from_ymd_opt(2023, 12, 1).unwrap())
                .build(),
            ClaimBuilder::new().with_id("CLM-NEW").build(),
        ];
        let rows = ClaimQuery::default().apply(&claims);
        assert_eq!(ids(&rows), vec!["CLM-NEW", "CLM-OLD"]);
    }
}

// ============================================================================
// Pipeline Board Tests
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_seed_board_columns() {
        let claims = catalog::pipeline_claims();
        let board = PipelineBoard::partition(claims);
        let counts: Vec<usize> = board.columns().iter().map(|c| c.len()).collect();
        assert_eq!(counts, vec![1, 2, 1, 1, 1]);
        assert_partition_exact(&board, claims);

        let ai: Vec<&str> = board
            .column(PipelineStage::AiProcessed)
            .claims
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(ai, vec!["CLM-104", "CLM-106"]);
    }

    #[test]
    fn test_filter_by_source_and_type() {
        let claims = catalog::pipeline_claims();
        let board = PipelineBoard::partition(claims);
        let filter = PipelineFilter {
            search: SearchTerm::default(),
            source: Some(Source::Portal),
            claim_type: Some(ClaimType::Vehicle),
        };
        let filtered = board.filtered(&filter);
        assert_eq!(filtered.total(), 2);
        assert_eq!(filtered.column(PipelineStage::Verified).len(), 1);
        assert!(filtered.column(PipelineStage::Received).is_empty());
        assert_eq!(filtered.columns().len(), 5);
    }

    #[test]
    fn test_filter_search_and_clear() {
        let claims = catalog::pipeline_claims();
        let board = PipelineBoard::partition(claims);
        let mut filter = PipelineFilter {
            search: SearchTerm::new("RAVI"),
            ..Default::default()
        };
        assert_eq!(board.filtered(&filter).total(), 1);
        assert!(filter.is_active());

        filter.clear();
        assert!(!filter.is_active());
        assert_eq!(board.filtered(&filter).total(), claims.len());
    }

    #[test]
    fn test_find_pipeline_claim() {
        let claims = catalog::pipeline_claims();
        let claim = domain_claims::pipeline::find_pipeline_claim(claims, "clm-105").unwrap();
        assert_eq!(claim.stage, PipelineStage::Settled);
        assert!(matches!(
            domain_claims::pipeline::find_pipeline_claim(claims, "CLM-001"),
            Err(ClaimError::ClaimNotFound(_))
        ));
    }

    #[test]
    fn test_built_claims_partition() {
        let claims = vec![
            PipelineClaimBuilder::new().with_id("CLM-1").with_stage(PipelineStage::Settled).build(),
            PipelineClaimBuilder::new().with_id("CLM-2").vehicle().build(),
        ];
        let board = PipelineBoard::partition(&claims);
        assert_partition_exact(&board, &claims);
        assert_eq!(board.column(PipelineStage::Settled).len(), 1);
    }
}

// ============================================================================
// Detail Page Tests
// ============================================================================

mod detail_tests {
    use super::*;

    #[test]
    fn test_breakdown_numbers_rows_across_categories() {
        let claim = &catalog::claims()[0];
        let rows = detail::breakdown(&claim.details);
        assert_eq!(rows.len(), 10);
        let sns: Vec<usize> = rows.iter().map(|r| r.sn).collect();
        assert_eq!(sns, (1..=10).collect::<Vec<_>>());
        assert_eq!(rows[3].category_label, "Laboratory");
        assert_eq!(rows[3].category_icon, "test-tube");
        assert_eq!(rows[0].score_class, "bg-green-100 text-green-800 border-green-300");
    }

    #[test]
    fn test_medical_summary_item_counts() {
        let claim = &catalog::claims()[4];
        let SummaryCards::Medical { categories } = detail::summary_cards(&claim.details).unwrap() else {
            panic!("expected medical summary");
        };
        let counts: Vec<usize> = categories.iter().map(|c| c.item_count).collect();
        assert_eq!(counts, vec![3, 3, 2, 2]);
        assert_eq!(categories[1].confidence_tier, display::ConfidenceTier::Medium);
    }

    #[test]
    fn test_vehicle_summary_variance() {
        let claim = ClaimBuilder::vehicle().build();
        let SummaryCards::Vehicle(summary) = detail::summary_cards(&claim.details).unwrap() else {
            panic!("expected vehicle summary");
        };
        assert_eq!(summary.variance, Money::npr(12000));
        assert_eq!(summary.variance_percent, Some(dec!(2.7)));
    }

    #[test]
    fn test_detail_view() {
        let claim = &catalog::claims()[1];
        let view = ClaimDetailView::build(claim).unwrap();
        assert_eq!(view.status_badge.icon, "alert-triangle");
        assert_eq!(view.channel_icon, "smartphone");
        assert_eq!(view.breakdown.len(), 5);
    }

    #[test]
    fn test_drawer_renders_local_time() {
        let claim = &catalog::pipeline_claims()[0];
        let view = DrawerView::build(claim, &TemporalFixtures::kathmandu());
        assert_eq!(view.updated, "January 16, 2024 at 08:05 PM");
        let labels: Vec<&str> = view.fields.iter().map(|f| f.label).collect();
        assert_eq!(labels, vec!["Medicines", "Laboratory", "OPD"]);
    }

    #[test]
    fn test_vehicle_drawer_fields() {
        let claim = &catalog::pipeline_claims()[1];
        let view = DrawerView::build(claim, &TemporalFixtures::kathmandu());
        assert_eq!(view.fields.len(), 6);
        assert_eq!(view.fields[2].value, Money::npr(1800));
        assert_eq!(view.source_icon, "globe");
    }
}

// ============================================================================
// Review Action Tests
// ============================================================================

mod review_tests {
    use super::*;

    #[test]
    fn test_review_notice() {
        let claim = &catalog::claims()[0];
        let notice = review::review(claim, ReviewAction::FlagException, Some("  missing stamp "));
        assert_eq!(notice.title, "Status Updated");
        assert_eq!(notice.description, "Claim CLM-001 has been flagged as exception.");
        assert_eq!(notice.requested_status, "Exception");
        assert_eq!(notice.comment.as_deref(), Some("missing stamp"));
    }

    #[test]
    fn test_review_does_not_change_status() {
        let claim = &catalog::claims()[0];
        let _ = review::review(claim, ReviewAction::Verify, None);
        assert_eq!(catalog::claims()[0].status, ClaimStatus::Pending);
    }

    #[test]
    fn test_blank_comment_dropped() {
        let claim = &catalog::claims()[2];
        let notice = review::review(claim, ReviewAction::SendForReview, Some("   "));
        assert_eq!(notice.comment, None);
        assert_eq!(notice.description, "Claim CLM-003 has been sent for adjuster review.");
    }
}

// ============================================================================
// Dashboard Tests
// ============================================================================

mod dashboard_tests {
    use super::*;

    fn data() -> &'static DashboardData {
        catalog::dashboard()
    }

    #[test]
    fn test_kpi_tiles() {
        let tiles = data().global_stats.kpi_tiles();
        let titles: Vec<&str> = tiles.iter().map(|t| t.title).collect();
        assert_eq!(
            titles,
            vec!["Total Claims", "Auto-Processed", "Pending Manual", "Compliance Rate", "Avg Processing Time"]
        );
        assert_eq!(tiles[0].value, "1,200");
    }

    #[test]
    fn test_chart_series() {
        let slices = data().override_slices();
        assert_eq!(slices[3].name, "Vehicle Parts");
        assert_eq!(data().ai_performance.overrides.total(), 30);
        assert_eq!(data().verification_slices()[1].color, "#EF4444");
        assert_eq!(data().funnel_slices().iter().map(|s| s.value).sum::<u32>(), 1450);
    }

    #[test]
    fn test_latest_accuracy() {
        let latest = data().ai_performance.latest_accuracy().unwrap();
        assert_eq!(latest.month, "Jun");
        assert_eq!(display::accuracy_status(latest.accuracy), "Excellent");
    }

    #[test]
    fn test_top_vehicle_variance_colors() {
        let colors: Vec<&str> = data()
            .vehicle_claims
            .top_claims
            .iter()
            .map(|c| c.variance_color())
            .collect();
        assert_eq!(
            colors,
            vec!["text-yellow-600", "text-red-600", "text-yellow-600", "text-yellow-600", "text-green-600"]
        );
    }
}

// ============================================================================
// Demo Tests
// ============================================================================

mod demo_tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_processed_claim_shape() {
        let mut rng = StdRng::seed_from_u64(99);
        let submission = DemoFixtures::submission();
        let id = SubmissionId::new_v7();
        let claim = DemoSimulator::default().process(&submission, id, &mut rng).unwrap();

        assert_eq!(claim.structured_data.claimant, "Ram Bahadur Thapa");
        assert_eq!(claim.attachments.len(), 2);
        assert_eq!(claim.attachments[1].icon, "image");
        assert!(claim.attachments[0].url.ends_with("/pharmacy_bill.pdf"));
        assert!(claim.attachments[0].url.contains(&id.as_uuid().to_string()));
    }

    #[test]
    fn test_rejected_attachment() {
        let mut rng = StdRng::seed_from_u64(3);
        let submission = DemoFixtures::submission_with(&[("notes.txt", "text/plain")]);
        let err = DemoSimulator::default()
            .process(&submission, SubmissionId::new_v7(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, ClaimError::UnsupportedAttachment(_)));
    }

    #[test]
    fn test_session_processes_then_resets() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut session = DemoSession::default();
        session.begin();
        session.complete(DemoSimulator::default().process(
            &DemoFixtures::submission(),
            SubmissionId::new_v7(),
            &mut rng,
        ));
        assert_eq!(session.status, ProcessingStatus::Processed);
        assert!(session.result.is_some());

        session.begin();
        assert!(session.result.is_none());
        session.complete(DemoSimulator::new(1.0).process(
            &DemoFixtures::submission(),
            SubmissionId::new_v7(),
            &mut rng,
        ));
        assert_eq!(session.error.as_deref(), Some(FAILURE_MESSAGE));
    }
}

// ============================================================================
// Data Port Tests
// ============================================================================

mod port_tests {
    use super::*;

    #[tokio::test]
    async fn test_static_adapter_serves_catalog() {
        let adapter = StaticCatalogAdapter::new();
        assert_eq!(adapter.list_claims().await.unwrap().len(), 5);
        assert_eq!(adapter.list_pipeline_claims().await.unwrap().len(), 6);
        assert_eq!(adapter.dashboard().await.unwrap().global_stats.total, 1200);
    }

    #[tokio::test]
    async fn test_not_found_maps_to_claim_error() {
        let adapter = StaticCatalogAdapter::new();
        let err: ClaimError = adapter.find_pipeline_claim("CLM-404").await.unwrap_err().into();
        assert!(matches!(err, ClaimError::ClaimNotFound(id) if id == "CLM-404"));
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use test_utils::generators::*;

    proptest! {
        #[test]
        fn partition_is_exhaustive_and_disjoint(claims in pipeline_claims_strategy()) {
            let board = PipelineBoard::partition(&claims);
            assert_partition_exact(&board, &claims);
        }

        #[test]
        fn filtered_board_is_subset(
            claims in pipeline_claims_strategy(),
            source in proptest::option::of(source_strategy()),
            claim_type in proptest::option::of(claim_type_strategy()),
        ) {
            let board = PipelineBoard::partition(&claims);
            let filter = PipelineFilter { search: SearchTerm::default(), source, claim_type };
            let filtered = board.filtered(&filter);
            prop_assert!(filtered.total() <= board.total());
            for column in filtered.columns() {
                for claim in &column.claims {
                    prop_assert!(filter.matches(claim));
                    prop_assert_eq!(claim.stage, column.stage);
                }
            }
        }

        #[test]
        fn zoom_stays_clamped(inputs in proptest::collection::vec(viewer_input_strategy(), 0..60)) {
            let mut viewer = ViewerState::opened();
            for input in inputs {
                viewer.apply(input);
                prop_assert!(viewer.zoom >= MIN_ZOOM && viewer.zoom <= MAX_ZOOM);
            }
        }

        #[test]
        fn closed_viewer_ignores_input(inputs in proptest::collection::vec(viewer_input_strategy(), 0..30)) {
            let mut viewer = ViewerState::default();
            for input in inputs {
                prop_assert_eq!(viewer.apply(input), None);
            }
            prop_assert_eq!(viewer, ViewerState::default());
        }

        #[test]
        fn repeated_toggle_flips_direction(field in sort_field_strategy(), direction in sort_direction_strategy()) {
            let mut sort = SortState::new(field, direction);
            sort.toggle(field);
            prop_assert_eq!(sort.direction, direction.toggled());
            sort.toggle(field);
            prop_assert_eq!(sort.direction, direction);
        }

        #[test]
        fn sort_output_is_ordered(field in sort_field_strategy(), direction in sort_direction_strategy()) {
            let query = ClaimQuery::new(SearchTerm::default(), SortState::new(field, direction));
            let rows = query.apply(catalog::claims());
            prop_assert_eq!(rows.len(), catalog::claims().len());
            assert_sorted(&rows, &query.sort);
        }

        #[test]
        fn search_ignores_case(term in "[a-zA-Z0-9-]{0,6}") {
            let lower = ClaimQuery::new(SearchTerm::new(term.to_lowercase()), SortState::default());
            let upper = ClaimQuery::new(SearchTerm::new(term.to_uppercase()), SortState::default());
            prop_assert_eq!(lower.apply(catalog::claims()), upper.apply(catalog::claims()));
        }

        #[test]
        fn status_badge_is_total(status in claim_status_strategy()) {
            let badge = display::status_badge(status);
            prop_assert_eq!(badge.variant, "outline");
            prop_assert!(badge.class_name.contains(&status.as_str().to_lowercase()));
        }

        #[test]
        fn score_badge_always_styled(score in percentage_strategy()) {
            prop_assert!(!display::score_badge_class(score).is_empty());
            prop_assert!(Percentage::new(score.value()).is_ok());
        }

        #[test]
        fn demo_categories_within_ranges(
            files in proptest::collection::vec(filename_strategy(), 0..6),
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let uploads: Vec<_> = files.iter().map(|f| demo::UploadedFile::new(f.clone(), "application/pdf")).collect();
            let categories = DemoSimulator::default().categories(&uploads, &mut rng);
            for kind in demo::DEMO_CATEGORIES {
                let range = demo::category_range(kind);
                let value = categories.get(kind).unwrap();
                assert_money_in_range(&value, range.start, range.end);
            }
            let total = categories.total().unwrap();
            let expected = categories.medicines.amount() + categories.labs.amount()
                + categories.opd.amount() + categories.others.amount();
            prop_assert_eq!(total.amount(), expected);
        }

        #[test]
        fn claimant_derivation_is_deterministic(email in email_strategy()) {
            let first = demo::claimant_from_email(&email);
            prop_assert_eq!(&first, &demo::claimant_from_email(&email));
            let local = email.split('@').next().unwrap();
            let parts = local.split(['.', '_', '-']).count();
            prop_assert_eq!(first.split(' ').count(), parts);
            prop_assert!(first.chars().next().map_or(true, |c| c.is_uppercase()));
        }
    }
}
