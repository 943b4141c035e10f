use chrono::NaiveDate;
use log::warn;
use rusqlite::Connection;
use rusqlite::Result;

pub struct StreakRepository<'a> {
    conn: &'a Connection,
}

impl<'a> StreakRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        StreakRepository { conn }
    }

    /// Distinct days (newest first) on which at least one completed activity was started
    pub fn days_with_completions(&self) -> Result<Vec<NaiveDate>> {
        let mut stmt = self.conn.prepare(
            r#"SELECT DISTINCT DATE(a.created_at) as study_date
            FROM study_activities a
            WHERE a.completed_at IS NOT NULL AND DATE(a.created_at) IS NOT NULL
            ORDER BY study_date DESC"#,
        )?;

        let dates: Vec<String> = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;

        Ok(dates
            .iter()
            .filter_map(|d| match NaiveDate::parse_from_str(d, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!("Ignoring unparseable study date '{}': {}", d, e);
                    None
                }
            })
            .collect())
    }

    /// Length of the run of consecutive completion days ending at the most recent one.
    /// The run is anchored at the latest completion day, wherever it falls relative
    /// to today. Returns 0 when nothing has been completed.
    pub fn calculate_consecutive_days(&self) -> Result<i64> {
        Ok(consecutive_days(&self.days_with_completions()?))
    }
}

/// Counts the run of consecutive days at the head of a newest-first, distinct list
fn consecutive_days(dates: &[NaiveDate]) -> i64 {
    let Some(mut expected) = dates.first().copied() else {
        return 0;
    };

    let mut streak = 0;
    for date in dates {
        if *date != expected {
            break;
        }
        streak += 1;
        match expected.pred_opt() {
            Some(prev) => expected = prev,
            None => break,
        }
    }
    streak
}
