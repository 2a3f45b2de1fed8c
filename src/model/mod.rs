//! Prediction record DTOs shared with the backend API.
//!
//! Field names follow the wire format (camelCase JSON). Each concrete
//! record converts to a [`RawSignal`] exactly once via
//! [`PredictionRecord::raw_signal`]; nothing downstream inspects record
//! shapes to decide which scale it is looking at.

#![allow(missing_docs)]

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{HdcError, Result};
use crate::risk::RawSignal;

/// The four prediction kinds the dashboard renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PredictionType {
    Stroke,
    Diabetes,
    HeartAttack,
    Habits,
}

impl PredictionType {
    /// All types, in the order the dashboard lists them.
    pub const ALL: [Self; 4] = [Self::Stroke, Self::Diabetes, Self::HeartAttack, Self::Habits];

    /// Wire label (camelCase, matches the JSON discriminator).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stroke => "stroke",
            Self::Diabetes => "diabetes",
            Self::HeartAttack => "heartAttack",
            Self::Habits => "habits",
        }
    }

    /// Human-readable panel heading.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Stroke => "Stroke prediction",
            Self::Diabetes => "Diabetes prediction",
            Self::HeartAttack => "Heart attack prediction",
            Self::Habits => "Lifestyle habits check",
        }
    }
}

impl fmt::Display for PredictionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictionType {
    type Err = HdcError;

    fn from_str(label: &str) -> Result<Self> {
        match label {
            "stroke" => Ok(Self::Stroke),
            "diabetes" => Ok(Self::Diabetes),
            "heartAttack" => Ok(Self::HeartAttack),
            "habits" => Ok(Self::Habits),
            other => Err(HdcError::InvalidPredictionType {
                label: other.to_string(),
            }),
        }
    }
}

/// Stroke prediction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrokeRecord {
    pub id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    /// Model output; fractional or percentage form, may be absent.
    pub prediction_probability: Option<f64>,
}

/// Diabetes prediction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiabetesRecord {
    pub id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub prediction_probability: Option<f64>,
}

/// Heart attack prediction record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeartAttackRecord {
    pub id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    pub prediction_probability: Option<f64>,
}

/// Lifestyle habits assessment record.
///
/// Carries a wellness score instead of a probability, plus the habit
/// inputs the detail panel displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitsRecord {
    pub id: u64,
    pub user_id: u64,
    pub created_at: DateTime<Utc>,
    /// Composite wellness score on the 0-100 scale, may be absent.
    pub wellness_score: Option<f64>,
    pub water_intake_glasses: u32,
    pub sleep_hours: f64,
    pub steps_per_day: u32,
    pub exercise_minutes: u32,
    pub screen_time_hours: f64,
    pub stress_level: u8,
    pub fruits_veggies_servings: u32,
}

/// Any prediction record, tagged by type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PredictionRecord {
    Stroke(StrokeRecord),
    Diabetes(DiabetesRecord),
    HeartAttack(HeartAttackRecord),
    Habits(HabitsRecord),
}

impl PredictionRecord {
    /// Which of the four kinds this record is.
    #[must_use]
    pub const fn prediction_type(&self) -> PredictionType {
        match self {
            Self::Stroke(_) => PredictionType::Stroke,
            Self::Diabetes(_) => PredictionType::Diabetes,
            Self::HeartAttack(_) => PredictionType::HeartAttack,
            Self::Habits(_) => PredictionType::Habits,
        }
    }

    /// Record identity.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Stroke(r) => r.id,
            Self::Diabetes(r) => r.id,
            Self::HeartAttack(r) => r.id,
            Self::Habits(r) => r.id,
        }
    }

    /// Owning user.
    #[must_use]
    pub const fn user_id(&self) -> u64 {
        match self {
            Self::Stroke(r) => r.user_id,
            Self::Diabetes(r) => r.user_id,
            Self::HeartAttack(r) => r.user_id,
            Self::Habits(r) => r.user_id,
        }
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        match self {
            Self::Stroke(r) => r.created_at,
            Self::Diabetes(r) => r.created_at,
            Self::HeartAttack(r) => r.created_at,
            Self::Habits(r) => r.created_at,
        }
    }

    /// The single boundary conversion from record shape to signal kind.
    #[must_use]
    pub const fn raw_signal(&self) -> RawSignal {
        match self {
            Self::Stroke(r) => RawSignal::Probability(r.prediction_probability),
            Self::Diabetes(r) => RawSignal::Probability(r.prediction_probability),
            Self::HeartAttack(r) => RawSignal::Probability(r.prediction_probability),
            Self::Habits(r) => RawSignal::WellnessScore(r.wellness_score),
        }
    }
}
