//! Strongly-typed identifiers for domain entities
//!
//! Seed records are keyed by human-readable reference codes (`CLM-001`,
//! `HMP-2024-011`, `MED-001`). Each kind gets its own newtype so a policy
//! number can never be passed where a claim number is expected. Records
//! created at runtime (demo submissions) use UUID-backed identifiers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CoreError;

macro_rules! define_code {
    ($name:ident, $what:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a code from a string without validation
            ///
            /// Intended for compile-time seed data.
            pub fn new_unchecked(code: impl Into<String>) -> Self {
                Self(code.into())
            }

            /// Returns the code as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Human readable name of this code kind, used in error messages
            pub fn kind() -> &'static str {
                $what
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate_code(s.trim(), $what).map(|code| Self(code.to_string()))
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new_v7()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }
    };
}

/// A reference code is non-empty and made of ASCII letters, digits and dashes.
fn validate_code<'a>(code: &'a str, what: &str) -> Result<&'a str, CoreError> {
    if code.is_empty() {
        return Err(CoreError::InvalidCode(format!("{} must not be empty", what)));
    }
    if !code.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(CoreError::InvalidCode(format!(
            "{} contains invalid characters: {}",
            what, code
        )));
    }
    Ok(code)
}

define_code!(ClaimNumber, "claim number");
define_code!(PolicyNumber, "policy number");
define_code!(ParticularId, "particular id");

define_id!(SubmissionId, "SUB");
