//! Prediction-history assembly: per-user detail view and the paged
//! all-users view, grouped by prediction type.

#![allow(missing_docs)]

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::Result;
use crate::core::paging::{Page, PageRequest, paginate};
use crate::model::{
    DiabetesRecord, HabitsRecord, HeartAttackRecord, PredictionRecord, StrokeRecord,
};

/// Storage seam for prediction records. One store covers all four
/// record types; grouping happens here.
pub trait PredictionStore {
    /// Every record belonging to a user, any order.
    fn by_user(&self, user_id: u64) -> Result<Vec<PredictionRecord>>;
    /// Every record in the system, any order.
    fn all(&self) -> Result<Vec<PredictionRecord>>;
}

/// One user's full history, grouped by type, newest first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionHistory {
    pub strokes: Vec<StrokeRecord>,
    pub diabetes: Vec<DiabetesRecord>,
    pub heart_attacks: Vec<HeartAttackRecord>,
    pub habits: Vec<HabitsRecord>,
}

impl PredictionHistory {
    /// Total records across all four groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strokes.len() + self.diabetes.len() + self.heart_attacks.len() + self.habits.len()
    }

    /// Whether the user has no history at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The admin view: one page per type plus the current-day total the
/// stats cards read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminPredictionHistory {
    pub heart_attacks: Page<HeartAttackRecord>,
    pub diabetes: Page<DiabetesRecord>,
    pub strokes: Page<StrokeRecord>,
    pub habits: Page<HabitsRecord>,
    pub total_current_day_predictions: u64,
}

/// Read-side service over a [`PredictionStore`].
#[derive(Debug)]
pub struct PredictionArchive<S: PredictionStore> {
    store: S,
}

impl<S: PredictionStore> PredictionArchive<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store, for callers that need direct access.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Full history for one user, grouped by type, newest first.
    pub fn for_user(&self, user_id: u64) -> Result<PredictionHistory> {
        let records = self.store.by_user(user_id)?;
        let history = group_records(records);
        debug!(user_id, records = history.len(), "assembled user history");
        Ok(history)
    }

    /// Paged history across all users, plus the count of predictions
    /// made on `today` (all types combined).
    pub fn paged_history(
        &self,
        request: &PageRequest,
        today: NaiveDate,
    ) -> Result<AdminPredictionHistory> {
        let grouped = group_records(self.store.all()?);
        let total_current_day_predictions = self.predictions_on(today)?;
        Ok(AdminPredictionHistory {
            heart_attacks: paginate(&grouped.heart_attacks, request),
            diabetes: paginate(&grouped.diabetes, request),
            strokes: paginate(&grouped.strokes, request),
            habits: paginate(&grouped.habits, request),
            total_current_day_predictions,
        })
    }

    /// Predictions of any type created on the given calendar day.
    pub fn predictions_on(&self, date: NaiveDate) -> Result<u64> {
        let count = self
            .store
            .all()?
            .iter()
            .filter(|record| record.created_at().date_naive() == date)
            .count();
        Ok(count as u64)
    }
}

/// Splits a mixed record list into the four typed groups, each sorted
/// newest first with id as the tie-break.
fn group_records(mut records: Vec<PredictionRecord>) -> PredictionHistory {
    records.sort_by(|left, right| {
        right
            .created_at()
            .cmp(&left.created_at())
            .then_with(|| right.id().cmp(&left.id()))
    });
    let mut history = PredictionHistory::default();
    for record in records {
        match record {
            PredictionRecord::Stroke(r) => history.strokes.push(r),
            PredictionRecord::Diabetes(r) => history.diabetes.push(r),
            PredictionRecord::HeartAttack(r) => history.heart_attacks.push(r),
            PredictionRecord::Habits(r) => history.habits.push(r),
        }
    }
    history
}
