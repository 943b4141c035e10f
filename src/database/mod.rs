pub mod analytics;
pub mod connection;
pub mod groups;
pub mod recorder;
pub mod reset;
pub mod review_items;
pub mod study_activities;
pub mod study_sessions;
pub mod words;

use crate::activity::{ActivityOutcome, ActivityType, StudyActivity, StudySession};
use crate::date_provider::{DateProvider, SystemDateProvider};
use crate::error::StoreResult;
use crate::seed::{self, SeedGroup};
use crate::statistics::{
    ActivityStatsByType, DashboardProgress, QuickStats, StudyProgress, UserStats,
};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, Result};
use std::sync::Arc;

pub use analytics::Analytics;
pub use groups::{Group, GroupsRepository};
pub use recorder::ActivityRecorder;
pub use reset::ResetRepository;
pub use review_items::{WordReviewItem, WordReviewItemsRepository};
pub use study_activities::StudyActivitiesRepository;
pub use study_sessions::StudySessionsRepository;
pub use words::{Word, WordsRepository};

/// Main Database struct providing access to all repositories
pub struct Database {
    pub conn: Connection,
    date_provider: Arc<dyn DateProvider>,
}

impl Database {
    pub fn new(db_path: &str) -> StoreResult<Self> {
        Self::init(db_path, Arc::new(SystemDateProvider))
    }

    pub fn with_date_provider(
        db_path: &str,
        date_provider: Arc<dyn DateProvider>,
    ) -> StoreResult<Self> {
        Self::init(db_path, date_provider)
    }

    fn init(db_path: &str, date_provider: Arc<dyn DateProvider>) -> StoreResult<Self> {
        let conn = connection::init_connection(db_path)?;
        Ok(Database {
            conn,
            date_provider,
        })
    }

    /// Helper method to get the current time (delegates to date provider)
    pub fn get_current_time(&self) -> DateTime<Utc> {
        self.date_provider.get_current_time()
    }

    // ===== Vocabulary =====

    pub fn create_group(&self, name: &str) -> Result<i64> {
        GroupsRepository::new(&self.conn).insert(name)
    }

    pub fn get_group(&self, group_id: i64) -> Result<Option<Group>> {
        GroupsRepository::new(&self.conn).get(group_id)
    }

    pub fn add_word(
        &self,
        group_id: i64,
        japanese: &str,
        romaji: &str,
        english: &str,
        parts: Option<&str>,
    ) -> Result<i64> {
        let word_id = WordsRepository::new(&self.conn).insert(japanese, romaji, english, parts)?;
        GroupsRepository::new(&self.conn).add_word(group_id, word_id)?;
        Ok(word_id)
    }

    pub fn count_words(&self) -> Result<i64> {
        WordsRepository::new(&self.conn).count()
    }

    pub fn import_seed(&self, group: &SeedGroup) -> StoreResult<i64> {
        seed::import_group(&self.conn, group)
    }

    // ===== Study Activities =====

    pub fn create_activity(&self, group_id: i64, activity_type: ActivityType) -> Result<i64> {
        let current_time = self.get_current_time();
        let repo = StudyActivitiesRepository::new(&self.conn, Box::new(move || current_time));
        repo.create(group_id, activity_type)
    }

    pub fn get_activity(&self, activity_id: i64) -> Result<Option<StudyActivity>> {
        let repo = StudyActivitiesRepository::new(&self.conn, Box::new(|| self.get_current_time()));
        repo.get(activity_id)
    }

    pub fn get_recent_activities(&self, limit: i64) -> Result<Vec<StudyActivity>> {
        let repo = StudyActivitiesRepository::new(&self.conn, Box::new(|| self.get_current_time()));
        repo.get_recent(limit)
    }

    pub fn count_activities(&self) -> Result<i64> {
        let repo = StudyActivitiesRepository::new(&self.conn, Box::new(|| self.get_current_time()));
        repo.count()
    }

    /// Completes an activity; see [`ActivityRecorder::record`]
    pub fn record_result(&self, activity_id: i64, outcome: &ActivityOutcome) -> StoreResult<i64> {
        let current_time = self.get_current_time();
        let recorder = ActivityRecorder::new(&self.conn, Box::new(move || current_time));
        recorder.record(activity_id, outcome)
    }

    // ===== Study Sessions =====

    pub fn get_session_for_activity(&self, activity_id: i64) -> Result<Option<StudySession>> {
        StudySessionsRepository::new(&self.conn).get_for_activity(activity_id)
    }

    pub fn last_session(&self) -> Result<Option<StudySession>> {
        StudySessionsRepository::new(&self.conn).last()
    }

    pub fn count_sessions(&self) -> Result<i64> {
        StudySessionsRepository::new(&self.conn).count()
    }

    pub fn count_review_items(&self) -> Result<i64> {
        WordReviewItemsRepository::new(&self.conn).count()
    }

    // ===== Reset =====

    pub fn reset_history(&self) -> Result<()> {
        ResetRepository::new(&self.conn).reset_history()
    }

    pub fn full_reset(&self) -> Result<()> {
        ResetRepository::new(&self.conn).full_reset()
    }

    // ===== Analytics Access =====

    pub fn compute_user_stats(&self) -> Result<UserStats> {
        Analytics::new(&self.conn).user_stats().compute()
    }

    pub fn compute_activity_stats(&self) -> Result<ActivityStatsByType> {
        Analytics::new(&self.conn).activity_stats().by_type()
    }

    /// Streak, the seven days ending at the provider's current date, and per-type stats
    pub fn compute_study_progress(&self) -> Result<StudyProgress> {
        let today = self.get_current_time().date_naive();
        let analytics = Analytics::new(&self.conn);
        Ok(StudyProgress {
            daily_streak: analytics.streak().calculate_consecutive_days()?,
            weekly_progress: analytics.weekly_progress().last_seven_days(today)?,
            by_activity_type: analytics.activity_stats().by_type()?,
        })
    }

    pub fn compute_quick_stats(&self) -> Result<QuickStats> {
        Analytics::new(&self.conn).dashboard().quick_stats()
    }

    pub fn compute_dashboard_progress(&self) -> Result<DashboardProgress> {
        Analytics::new(&self.conn).dashboard().progress()
    }
}
