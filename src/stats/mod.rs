//! Dashboard statistics: KPI totals, per-type prediction volumes for
//! the pie chart, and the 30-day registration sparkline series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::admin::{AdminDirectory, UserStore};
use crate::core::errors::Result;
use crate::history::{PredictionArchive, PredictionStore};
use crate::model::PredictionType;

/// Prediction counts per type, plus today's volume. Feeds the pie
/// chart and the per-day KPI card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionVolume {
    /// Predictions of any type created today.
    pub per_day: u64,
    pub stroke: u64,
    pub diabetes: u64,
    pub heart: u64,
    pub habits: u64,
}

impl PredictionVolume {
    /// Sum over the four type counts.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.stroke + self.diabetes + self.heart + self.habits
    }

    /// Count for one prediction type.
    #[must_use]
    pub const fn for_type(&self, kind: PredictionType) -> u64 {
        match kind {
            PredictionType::Stroke => self.stroke,
            PredictionType::Diabetes => self.diabetes,
            PredictionType::HeartAttack => self.heart,
            PredictionType::Habits => self.habits,
        }
    }
}

/// Everything the stats overview page renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// All-time prediction count across the four types.
    pub total_predictions: u64,
    /// Per-type breakdown plus today's volume.
    pub volume: PredictionVolume,
    /// Daily registration counts, oldest first, ending today.
    pub registrations_last_30_days: Vec<u64>,
}

/// Compiles the stats overview from the two stores as of `today`.
pub fn compile_stats<P: PredictionStore, U: UserStore>(
    archive: &PredictionArchive<P>,
    directory: &AdminDirectory<U>,
    today: NaiveDate,
) -> Result<DashboardStats> {
    let records = archive.store().all()?;
    let mut volume = PredictionVolume {
        per_day: archive.predictions_on(today)?,
        ..PredictionVolume::default()
    };
    for record in &records {
        match record.prediction_type() {
            PredictionType::Stroke => volume.stroke += 1,
            PredictionType::Diabetes => volume.diabetes += 1,
            PredictionType::HeartAttack => volume.heart += 1,
            PredictionType::Habits => volume.habits += 1,
        }
    }
    let stats = DashboardStats {
        total_predictions: volume.total(),
        volume,
        registrations_last_30_days: directory.registrations_last_30_days(today)?,
    };
    debug!(
        total = stats.total_predictions,
        per_day = stats.volume.per_day,
        "compiled dashboard stats"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::PredictionVolume;
    use crate::model::PredictionType;

    #[test]
    fn total_sums_the_four_types() {
        let volume = PredictionVolume {
            per_day: 2,
            stroke: 3,
            diabetes: 5,
            heart: 7,
            habits: 11,
        };
        assert_eq!(volume.total(), 26);
        assert_eq!(volume.for_type(PredictionType::Diabetes), 5);
    }

    #[test]
    fn wire_names_match_the_stats_payload() {
        let volume = PredictionVolume::default();
        let json = serde_json::to_value(volume).expect("serialize");
        for field in ["perDay", "stroke", "diabetes", "heart", "habits"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
