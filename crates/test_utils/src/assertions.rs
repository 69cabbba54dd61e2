//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use std::collections::HashSet;

use core_kernel::Money;
use rust_decimal::Decimal;

use domain_claims::claim::Claim;
use domain_claims::pipeline::{PipelineBoard, PipelineClaim};
use domain_claims::query::SortState;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that a Money value lies within `[min, max)` whole rupees
pub fn assert_money_in_range(money: &Money, min: i64, max: i64) {
    let amount = money.amount();
    assert!(
        amount >= Decimal::from(min) && amount < Decimal::from(max),
        "Expected amount in [{}, {}), got {}",
        min,
        max,
        money
    );
}

/// Asserts that rows are ordered under `sort`
pub fn assert_sorted(rows: &[&Claim], sort: &SortState) {
    for pair in rows.windows(2) {
        assert!(
            sort.compare(pair[0], pair[1]).is_le(),
            "Rows out of order for {:?}: {} before {}",
            sort,
            pair[0].id,
            pair[1].id
        );
    }
}

/// Asserts that every claim lands in exactly one column, the one for its stage
pub fn assert_partition_exact(board: &PipelineBoard<'_>, claims: &[PipelineClaim]) {
    assert_eq!(
        board.total(),
        claims.len(),
        "Board holds {} claims, expected {}",
        board.total(),
        claims.len()
    );

    let mut seen: HashSet<*const PipelineClaim> = HashSet::new();
    for column in board.columns() {
        for claim in &column.claims {
            assert_eq!(
                claim.stage, column.stage,
                "{} sits in the {} column but has stage {}",
                claim.id, column.stage, claim.stage
            );
            assert!(
                seen.insert(*claim as *const PipelineClaim),
                "{} appears in more than one column",
                claim.id
            );
        }
    }
}
