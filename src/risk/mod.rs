//! Risk-signal normalization and tier classification.
//!
//! A prediction record carries one raw numeric signal: a probability
//! (fractional `[0,1)` or already-percentage form) or a wellness score
//! on `[0,100]`. This module converts that signal into a canonical
//! percentage, a three-band tier, and an opaque presentation tag the
//! view layer maps to icons and colors. All functions are pure and
//! total; malformed numeric input degrades to `0` rather than failing.

#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::config::RiskBandConfig;
use crate::core::errors::{HdcError, Result};

/// Raw numeric signal from a prediction record, tagged by kind.
///
/// The discrimination happens exactly once, where a record is turned
/// into a normalizer input, never re-derived per render site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawSignal {
    /// Prediction probability, fractional or percentage form.
    Probability(Option<f64>),
    /// Lifestyle wellness score on the 0-100 scale.
    WellnessScore(Option<f64>),
}

/// Risk band for probability-kind signals. Higher probability is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbabilityTier {
    Low,
    Medium,
    High,
}

/// Quality band for wellness scores. Higher score is better; the scale
/// runs opposite to [`ProbabilityTier`] and must stay that way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellnessTier {
    Poor,
    Fair,
    Good,
}

/// Tier outcome for either signal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "scale", content = "tier")]
pub enum TierAssessment {
    /// Risk band of a probability-kind signal.
    Probability(ProbabilityTier),
    /// Quality band of a wellness score.
    Wellness(WellnessTier),
}

/// Opaque symbol a renderer maps to a concrete icon and color.
///
/// One tag per tier across both scales. The core never knows about
/// icons or colors; only the view layer interprets these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationTag {
    RiskLow,
    RiskMedium,
    RiskHigh,
    WellnessPoor,
    WellnessFair,
    WellnessGood,
}

/// Normalized output: canonical percentage, tier, presentation tag.
///
/// A value object recomputed per render pass; never cached, never
/// mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRisk {
    /// Canonical percentage, always in `[0, 100]`.
    pub percentage: f64,
    /// Tier the percentage falls into, on the signal's own scale.
    #[serde(flatten)]
    pub tier: TierAssessment,
    /// Renderer-agnostic symbol for the tier.
    pub tag: PresentationTag,
}

/// Converts a raw signal value to a canonical percentage in `[0, 100]`.
///
/// Values in `[0, 1)` are read as fractions and scaled by 100; values
/// `>= 1` are read as already-expressed percentages and clamped to 100.
/// Absent, NaN, and negative inputs all degrade to `0`.
///
/// The boundary `1.0` is deliberately read as a percentage (so it stays
/// `1`, not `100`). That matches the dashboard's historical behavior
/// for records storing exact-certainty probabilities; do not change it
/// without a coordinated data migration.
#[must_use]
pub fn normalize_percentage(raw: impl Into<Option<f64>>) -> f64 {
    let Some(value) = raw.into() else {
        return 0.0;
    };
    if value.is_nan() || value < 0.0 {
        return 0.0;
    }
    if value < 1.0 {
        return value * 100.0;
    }
    value.min(100.0)
}

/// Classifies a normalized percentage with the shipped probability
/// bands (`< 30` low, `< 60` medium, `>= 60` high).
#[must_use]
pub fn classify_probability_tier(percentage: f64) -> ProbabilityTier {
    RiskBands::default().classify_probability(percentage)
}

/// Classifies a wellness score with the shipped bands (`>= 80` good,
/// `>= 60` fair, `< 60` poor).
#[must_use]
pub fn classify_wellness_tier(score: f64) -> WellnessTier {
    RiskBands::default().classify_wellness(score)
}

/// Total lookup from tier to its presentation tag.
#[must_use]
pub const fn presentation_tag_for(tier: TierAssessment) -> PresentationTag {
    match tier {
        TierAssessment::Probability(ProbabilityTier::Low) => PresentationTag::RiskLow,
        TierAssessment::Probability(ProbabilityTier::Medium) => PresentationTag::RiskMedium,
        TierAssessment::Probability(ProbabilityTier::High) => PresentationTag::RiskHigh,
        TierAssessment::Wellness(WellnessTier::Poor) => PresentationTag::WellnessPoor,
        TierAssessment::Wellness(WellnessTier::Fair) => PresentationTag::WellnessFair,
        TierAssessment::Wellness(WellnessTier::Good) => PresentationTag::WellnessGood,
    }
}

/// Normalizes a raw signal with the shipped bands.
#[must_use]
pub fn normalize_signal(signal: RawSignal) -> NormalizedRisk {
    RiskBands::default().normalize(signal)
}

/// Validated tier cutoffs.
///
/// Wraps a [`RiskBandConfig`] that is known to describe three
/// non-empty, ordered bands per scale, so classification stays a
/// gap-free partition of `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskBands {
    config: RiskBandConfig,
}

impl Default for RiskBands {
    fn default() -> Self {
        Self {
            config: RiskBandConfig::default(),
        }
    }
}

impl RiskBands {
    /// Builds bands from a config, rejecting invalid cutoffs.
    pub fn new(config: RiskBandConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The underlying cutoffs.
    #[must_use]
    pub const fn config(&self) -> &RiskBandConfig {
        &self.config
    }

    /// Probability banding: closed on each band's lower bound.
    #[must_use]
    pub fn classify_probability(&self, percentage: f64) -> ProbabilityTier {
        if percentage < self.config.probability_low_below {
            ProbabilityTier::Low
        } else if percentage < self.config.probability_high_at {
            ProbabilityTier::Medium
        } else {
            ProbabilityTier::High
        }
    }

    /// Wellness banding, inverted scale: high score is good.
    #[must_use]
    pub fn classify_wellness(&self, score: f64) -> WellnessTier {
        if score >= self.config.wellness_good_at {
            WellnessTier::Good
        } else if score >= self.config.wellness_fair_at {
            WellnessTier::Fair
        } else {
            WellnessTier::Poor
        }
    }

    /// Normalizes a signal: canonical percentage, tier on the signal's
    /// scale, presentation tag.
    #[must_use]
    pub fn normalize(&self, signal: RawSignal) -> NormalizedRisk {
        let (percentage, tier) = match signal {
            RawSignal::Probability(raw) => {
                let percentage = normalize_percentage(raw);
                (
                    percentage,
                    TierAssessment::Probability(self.classify_probability(percentage)),
                )
            }
            RawSignal::WellnessScore(raw) => {
                let percentage = normalize_percentage(raw);
                (
                    percentage,
                    TierAssessment::Wellness(self.classify_wellness(percentage)),
                )
            }
        };
        NormalizedRisk {
            percentage,
            tier,
            tag: presentation_tag_for(tier),
        }
    }
}

impl ProbabilityTier {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl WellnessTier {
    /// Stable lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
        }
    }
}

impl TierAssessment {
    /// Stable lowercase label of the inner tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Probability(tier) => tier.as_str(),
            Self::Wellness(tier) => tier.as_str(),
        }
    }
}

impl fmt::Display for TierAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a tier label from the closed six-label set.
///
/// This is the fail-fast path for out-of-set tiers: a label outside
/// the closed enumeration is a caller error, never silently defaulted.
impl FromStr for TierAssessment {
    type Err = HdcError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "low" => Ok(Self::Probability(ProbabilityTier::Low)),
            "medium" => Ok(Self::Probability(ProbabilityTier::Medium)),
            "high" => Ok(Self::Probability(ProbabilityTier::High)),
            "poor" => Ok(Self::Wellness(WellnessTier::Poor)),
            "fair" => Ok(Self::Wellness(WellnessTier::Fair)),
            "good" => Ok(Self::Wellness(WellnessTier::Good)),
            other => Err(HdcError::InvalidTier {
                label: other.to_string(),
            }),
        }
    }
}
