//! Risk band configuration: tier cutoffs with TOML deserialization.
//!
//! The shipped defaults match the dashboard's documented bands
//! (probability 30/60, wellness 60/80). Deployments may override them,
//! but `validate` rejects any override that breaks band monotonicity,
//! so classification stays a total, gap-free partition of `[0, 100]`.

use serde::{Deserialize, Serialize};

use crate::core::errors::{HdcError, Result};

/// Probability cutoffs: `< low_below` is low risk, `< high_at` is
/// medium, the rest is high. Wellness cutoffs read the other way:
/// `>= good_at` is good, `>= fair_at` is fair, the rest is poor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RiskBandConfig {
    /// Upper bound (exclusive) of the low-risk probability band.
    pub probability_low_below: f64,
    /// Lower bound (inclusive) of the high-risk probability band.
    pub probability_high_at: f64,
    /// Lower bound (inclusive) of the fair wellness band.
    pub wellness_fair_at: f64,
    /// Lower bound (inclusive) of the good wellness band.
    pub wellness_good_at: f64,
}

impl Default for RiskBandConfig {
    fn default() -> Self {
        Self {
            probability_low_below: 30.0,
            probability_high_at: 60.0,
            wellness_fair_at: 60.0,
            wellness_good_at: 80.0,
        }
    }
}

impl RiskBandConfig {
    /// Parses a TOML document and validates the resulting bands.
    pub fn from_toml(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects cutoffs that are non-finite, outside `[0, 100]`, or out
    /// of order. Equal cutoffs are rejected too: each scale must keep
    /// three non-empty bands.
    pub fn validate(&self) -> Result<()> {
        let cutoffs = [
            ("probability_low_below", self.probability_low_below),
            ("probability_high_at", self.probability_high_at),
            ("wellness_fair_at", self.wellness_fair_at),
            ("wellness_good_at", self.wellness_good_at),
        ];
        for (name, value) in cutoffs {
            if !value.is_finite() || !(0.0..=100.0).contains(&value) {
                return Err(HdcError::InvalidConfig {
                    details: format!("{name} must be a finite value in [0, 100], got {value}"),
                });
            }
        }
        if self.probability_low_below >= self.probability_high_at {
            return Err(HdcError::InvalidConfig {
                details: format!(
                    "probability cutoffs out of order: low_below {} >= high_at {}",
                    self.probability_low_below, self.probability_high_at
                ),
            });
        }
        if self.wellness_fair_at >= self.wellness_good_at {
            return Err(HdcError::InvalidConfig {
                details: format!(
                    "wellness cutoffs out of order: fair_at {} >= good_at {}",
                    self.wellness_fair_at, self.wellness_good_at
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RiskBandConfig;

    #[test]
    fn defaults_match_shipped_bands() {
        let config = RiskBandConfig::default();
        assert!((config.probability_low_below - 30.0).abs() < f64::EPSILON);
        assert!((config.probability_high_at - 60.0).abs() < f64::EPSILON);
        assert!((config.wellness_fair_at - 60.0).abs() < f64::EPSILON);
        assert!((config.wellness_good_at - 80.0).abs() < f64::EPSILON);
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = RiskBandConfig::from_toml("probability_high_at = 70.0\n")
            .expect("partial override should parse");
        assert!((config.probability_high_at - 70.0).abs() < f64::EPSILON);
        assert!((config.probability_low_below - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn out_of_order_cutoffs_are_rejected() {
        let result = RiskBandConfig::from_toml(
            "probability_low_below = 60.0\nprobability_high_at = 30.0\n",
        );
        let error = result.expect_err("inverted cutoffs must fail");
        assert_eq!(error.code(), "HDC-1001");
    }

    #[test]
    fn collapsed_band_is_rejected() {
        let result =
            RiskBandConfig::from_toml("wellness_fair_at = 80.0\nwellness_good_at = 80.0\n");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_a_parse_failure() {
        let error = RiskBandConfig::from_toml("probability_low = 30.0\n")
            .expect_err("unknown key must fail");
        assert_eq!(error.code(), "HDC-1002");
    }

    #[test]
    fn out_of_range_cutoff_is_rejected() {
        let result = RiskBandConfig::from_toml("wellness_good_at = 120.0\n");
        assert!(result.is_err());
    }
}
