use crate::activity::ActivityResult;
use crate::statistics::{mean_score, UserStats};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use rusqlite::Result;

pub struct UserStatsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> UserStatsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        UserStatsRepository { conn }
    }

    /// Totals across every activity, session and review item.
    /// An empty store yields all zeros and no last study date.
    pub fn compute(&self) -> Result<UserStats> {
        let (total_activities, completed_activities, last_study_date) = self.activity_counts()?;

        Ok(UserStats {
            total_study_time: self.total_study_minutes()?,
            total_activities,
            completed_activities,
            average_accuracy: mean_score(&self.all_results()?),
            words_learned: self.words_learned()?,
            last_study_date,
        })
    }

    /// (total, completed, latest created_at).
    /// Rows whose `created_at` is not a timestamp still count but never become the latest.
    pub fn activity_counts(&self) -> Result<(i64, i64, Option<DateTime<Utc>>)> {
        self.conn.query_row(
            r#"SELECT
                COUNT(*),
                COUNT(completed_at),
                MAX(CASE WHEN datetime(created_at) IS NOT NULL THEN created_at END)
            FROM study_activities"#,
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
    }

    /// Result of every activity, completed or not
    pub fn all_results(&self) -> Result<Vec<ActivityResult>> {
        let mut stmt = self
            .conn
            .prepare("SELECT accuracy_score, confidence_score, score FROM study_activities")?;
        let rows = stmt.query_map([], |row| {
            Ok(ActivityResult::from_columns(row.get(0)?, row.get(1)?, row.get(2)?))
        })?;
        rows.collect()
    }

    /// Sum of session durations in whole minutes (truncated)
    pub fn total_study_minutes(&self) -> Result<i64> {
        self.conn.query_row(
            "SELECT COALESCE(SUM(time_taken_seconds), 0) / 60 FROM study_sessions",
            [],
            |row| row.get(0),
        )
    }

    /// Distinct words answered correctly at least once
    pub fn words_learned(&self) -> Result<i64> {
        self.conn.query_row(
            "SELECT COUNT(DISTINCT word_id) FROM word_review_items WHERE correct = 1",
            [],
            |row| row.get(0),
        )
    }
}
