//! Shared primitives: error taxonomy, band configuration, pagination.

pub mod config;
pub mod errors;
pub mod paging;
