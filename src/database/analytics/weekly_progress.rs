use crate::statistics::DailyProgress;
use chrono::{Duration, NaiveDate};
use rusqlite::Connection;
use rusqlite::Result;
use std::collections::HashMap;

pub const WEEK_DAYS: i64 = 7;

pub struct WeeklyProgressRepository<'a> {
    conn: &'a Connection,
}

impl<'a> WeeklyProgressRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        WeeklyProgressRepository { conn }
    }

    /// Session minutes and completed activities per day for the seven days ending at
    /// `today`, newest first. Days without sessions are reported as zeros.
    pub fn last_seven_days(&self, today: NaiveDate) -> Result<Vec<DailyProgress>> {
        let start = today - Duration::days(WEEK_DAYS - 1);
        let recorded = self.daily_totals(start, today)?;

        Ok((0..WEEK_DAYS)
            .map(|offset| today - Duration::days(offset))
            .map(|date| {
                recorded
                    .get(&date)
                    .cloned()
                    .unwrap_or_else(|| DailyProgress::empty(date))
            })
            .collect())
    }

    /// Rows for the days in `[from, to]` that have at least one session
    pub fn daily_totals(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<HashMap<NaiveDate, DailyProgress>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT
                DATE(created_at) as day,
                COALESCE(SUM(time_taken_seconds), 0) / 60 as minutes,
                COUNT(DISTINCT study_activity_id) as activities
            FROM study_sessions
            WHERE DATE(created_at) BETWEEN ?1 AND ?2
            GROUP BY day"#,
        )?;

        let rows = stmt.query_map(
            [from.format("%Y-%m-%d").to_string(), to.format("%Y-%m-%d").to_string()],
            |row| {
                Ok(DailyProgress {
                    date: row.get(0)?,
                    minutes: row.get(1)?,
                    activities: row.get(2)?,
                })
            },
        )?;

        let mut by_day = HashMap::new();
        for row in rows {
            let progress = row?;
            by_day.insert(progress.date, progress);
        }
        Ok(by_day)
    }
}
