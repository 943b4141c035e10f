use crate::database::Database;
use crate::error::{StoreError, StoreResult};
use crate::statistics::{
    ActivityStatsByType, DashboardProgress, QuickStats, StudyMetrics, StudyProgress, UserStats,
};
use log::{debug, error};
use std::sync::{Arc, Mutex, MutexGuard};

/// Read-side statistics plus the administrative resets, over a shared store.
///
/// Calls block on the store; async callers should run them on a blocking thread.
/// Each call reads without a snapshot, so concurrent writes may be partially visible.
#[derive(Clone)]
pub struct StatisticsService {
    db: Arc<Mutex<Database>>,
}

impl StatisticsService {
    pub fn new(db: Arc<Mutex<Database>>) -> Self {
        StatisticsService { db }
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Database>> {
        self.db.lock().map_err(|_| {
            error!("Database mutex poisoned");
            StoreError::LockPoisoned
        })
    }

    pub fn user_stats(&self) -> StoreResult<UserStats> {
        let db = self.lock()?;
        let stats = db.compute_user_stats().inspect_err(|e| {
            error!("Failed to compute user statistics: {}", e);
        })?;
        debug!(
            "User statistics: {} activities, {} completed",
            stats.total_activities, stats.completed_activities
        );
        Ok(stats)
    }

    pub fn activity_stats(&self) -> StoreResult<ActivityStatsByType> {
        let db = self.lock()?;
        Ok(db.compute_activity_stats().inspect_err(|e| {
            error!("Failed to compute activity statistics: {}", e);
        })?)
    }

    pub fn study_progress(&self) -> StoreResult<StudyProgress> {
        let db = self.lock()?;
        Ok(db.compute_study_progress().inspect_err(|e| {
            error!("Failed to compute study progress: {}", e);
        })?)
    }

    /// Study minutes per activity, 0 when there are none
    pub fn average_study_time(&self) -> StoreResult<f64> {
        Ok(self.user_stats()?.average_study_time())
    }

    /// Percentage of activities completed, 0 when there are none
    pub fn completion_rate(&self) -> StoreResult<f64> {
        Ok(self.user_stats()?.completion_rate())
    }

    /// Both derived metrics from a single read
    pub fn metrics(&self) -> StoreResult<StudyMetrics> {
        Ok(self.user_stats()?.metrics())
    }

    pub fn quick_stats(&self) -> StoreResult<QuickStats> {
        let db = self.lock()?;
        let stats = db.compute_quick_stats().inspect_err(|e| {
            error!("Failed to compute dashboard stats: {}", e);
        })?;
        debug!(
            "Dashboard stats: {} words, {} studied, {} sessions, {:.2}% accuracy",
            stats.total_words, stats.words_studied, stats.study_sessions, stats.accuracy_rate
        );
        Ok(stats)
    }

    pub fn dashboard_progress(&self) -> StoreResult<DashboardProgress> {
        let db = self.lock()?;
        Ok(db.compute_dashboard_progress().inspect_err(|e| {
            error!("Failed to compute dashboard progress: {}", e);
        })?)
    }

    pub fn reset_history(&self) -> StoreResult<()> {
        let db = self.lock()?;
        Ok(db.reset_history().inspect_err(|e| {
            error!("Failed to reset study history: {}", e);
        })?)
    }

    pub fn full_reset(&self) -> StoreResult<()> {
        let db = self.lock()?;
        Ok(db.full_reset().inspect_err(|e| {
            error!("Failed to perform full reset: {}", e);
        })?)
    }
}
