//! Request/Response data transfer objects

pub mod claims;
pub mod dashboard;
pub mod demo;
pub mod pipeline;
pub mod viewer;
