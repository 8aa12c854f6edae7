use std::sync::Arc;

use tracing::{debug, instrument};

use crate::error::AppError;
use crate::model::statistics::{AttendanceTally, StatusCount, Summary};
use crate::store::HrStore;

/// Aggregates over live (not soft-deleted) rows.
#[derive(Clone)]
pub struct StatisticsService {
    store: Arc<dyn HrStore>,
}

/// Averages each employee's own presence rate, so every employee weighs the
/// same regardless of how many days they have on record.
pub fn mean_of_means(tallies: &[AttendanceTally]) -> Option<f64> {
    let rates: Vec<f64> = tallies
        .iter()
        .filter(|t| t.total > 0)
        .map(|t| t.present as f64 / t.total as f64)
        .collect();

    if rates.is_empty() {
        return None;
    }
    Some(rates.iter().sum::<f64>() / rates.len() as f64)
}

impl StatisticsService {
    pub fn new(store: Arc<dyn HrStore>) -> Self {
        Self { store }
    }

    pub async fn attendance_status_counts(&self) -> Result<Vec<StatusCount>, AppError> {
        let totals = self.store.attendance_status_totals().await?;
        Ok(totals.into_counts())
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<Summary, AppError> {
        let counts = self.store.entity_counts().await?;
        let tallies = self.store.attendance_tallies().await?;
        debug!(employees_with_attendance = tallies.len(), "Computing summary");

        Ok(Summary {
            total_employees: counts.employees,
            total_departments: counts.departments,
            total_attendance_records: counts.attendance_records,
            average_attendance_per_employee: mean_of_means(&tallies),
        })
    }
}
