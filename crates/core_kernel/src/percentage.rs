//! Whole-number percentages
//!
//! Confidence values, AI scores, compliance and accuracy rates are all
//! integral percentages in `0..=100`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::CoreError;

/// An integral percentage in `0..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Percentage = Percentage(0);
    pub const FULL: Percentage = Percentage(100);

    /// Creates a percentage, rejecting values above 100
    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value > 100 {
            return Err(CoreError::validation(format!(
                "percentage must be within 0..=100, got {}",
                value
            )));
        }
        Ok(Self(value))
    }

    /// Creates a percentage, saturating at 100
    pub const fn saturating(value: u8) -> Self {
        if value > 100 {
            Self(100)
        } else {
            Self(value)
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// True when the value is at or above `threshold`
    pub fn at_least(&self, threshold: u8) -> bool {
        self.0 >= threshold
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u8::deserialize(deserializer)?;
        Percentage::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
