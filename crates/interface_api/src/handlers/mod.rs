//! Request handlers, one module per page

pub mod claims;
pub mod dashboard;
pub mod demo;
pub mod health;
pub mod pipeline;
pub mod viewer;
