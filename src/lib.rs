//! Domain core for a health-risk prediction admin dashboard.
//!
//! The crate is pure logic: risk-signal normalization and tier
//! classification, prediction-record models, display formatting,
//! paginated user administration, prediction-history assembly, and
//! dashboard statistics. Persistence and transport live behind the
//! `UserStore` / `PredictionStore` trait seams; nothing here performs
//! I/O.

pub mod admin;
pub mod core;
pub mod format;
pub mod history;
pub mod model;
pub mod risk;
pub mod stats;


pub use crate::core::errors::{HdcError, Result};
pub use crate::risk::{
    NormalizedRisk, PresentationTag, ProbabilityTier, RawSignal, TierAssessment, WellnessTier,
    classify_probability_tier, classify_wellness_tier, normalize_percentage, normalize_signal,
    presentation_tag_for,
};
