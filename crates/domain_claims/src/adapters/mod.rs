//! Adapters for the claims data port
//!
//! - **StaticCatalogAdapter**: serves the in-memory seed catalog

pub mod static_catalog;

pub use static_catalog::StaticCatalogAdapter;
