//! Claims table search and sort
//!
//! The table keeps a search term and a sort state. Neither mutates the
//! underlying records: [`ClaimQuery::apply`] returns borrowed rows in the
//! order they should be displayed.
//!
//! Sort semantics follow a plain comparator: text fields compare
//! lexically, amounts and dates numerically, and anything else compares as
//! equal so the original order is kept (the sort is stable).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::claim::Claim;
use crate::error::ClaimError;

/// Records that can be matched by the search box
pub trait Searchable {
    /// Fields the search term is matched against: id, claimant, policy number
    fn search_fields(&self) -> [&str; 3];
}

impl Searchable for Claim {
    fn search_fields(&self) -> [&str; 3] {
        [self.id.as_str(), &self.claimant, self.policy_number.as_str()]
    }
}

/// Case-insensitive substring search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm {
    needle: String,
}

impl SearchTerm {
    pub fn new(term: impl AsRef<str>) -> Self {
        Self {
            needle: term.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// An empty term matches everything
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Sortable columns of the claims table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Claimant,
    PolicyNumber,
    Type,
    Amount,
    Status,
    SubmissionDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Claimant => "claimant",
            SortField::PolicyNumber => "policy_number",
            SortField::Type => "type",
            SortField::Amount => "amount",
            SortField::Status => "status",
            SortField::SubmissionDate => "submission_date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ClaimError;

    /// Accepts snake_case and camelCase column names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "id" => Ok(SortField::Id),
            "claimant" => Ok(SortField::Claimant),
            "policynumber" => Ok(SortField::PolicyNumber),
            "type" => Ok(SortField::Type),
            "amount" => Ok(SortField::Amount),
            "status" => Ok(SortField::Status),
            "submissiondate" => Ok(SortField::SubmissionDate),
            _ => Err(ClaimError::UnknownSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ClaimError::UnknownFilter(format!("sort direction '{}'", s))),
        }
    }
}

/// Current sort column and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortState {
    /// Newest submissions first
    fn default() -> Self {
        Self {
            field: SortField::SubmissionDate,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Header click: the same column flips direction, a new column starts ascending
    pub fn toggle(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Compares two claims under this sort state
    pub fn compare(&self, a: &Claim, b: &Claim) -> Ordering {
        let ordering = sort_key(a, self.field).compare(&sort_key(b, self.field));
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

enum SortKey<'a> {
    Text(&'a str),
    Number(Decimal),
    Date(NaiveDate),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

fn sort_key(claim: &Claim, field: SortField) -> SortKey<'_> {
    match field {
        SortField::Id => SortKey::Text(claim.id.as_str()),
        SortField::Claimant => SortKey::Text(&claim.claimant),
        SortField::PolicyNumber => SortKey::Text(claim.policy_number.as_str()),
        SortField::Type => SortKey::Text(claim.claim_type().as_str()),
        SortField::Amount => SortKey::Number(claim.amount.amount()),
        SortField::Status => SortKey::Text(claim.status.as_str()),
        SortField::SubmissionDate => SortKey::Date(claim.submission_date),
    }
}

/// Search plus sort over the claims table
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    pub search: SearchTerm,
    pub sort: SortState,
}

impl ClaimQuery {
    pub fn new(search: SearchTerm, sort: SortState) -> Self {
        Self { search, sort }
    }

    /// Filters then sorts, leaving `claims` untouched
    pub fn apply<'a>(&self, claims: &'a [Claim]) -> Vec<&'a Claim> {
        let mut rows: Vec<&Claim> = claims.iter().filter(|c| self.search.matches(*c)).collect();
        rows.sort_by(|a, b| self.sort.compare(a, b));
        rows
    }
}
