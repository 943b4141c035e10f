use crate::activity::{ActivityResult, ActivityType};
use crate::statistics::{mean_score, percentage, ActivityStats, ActivityStatsByType};
use chrono::{DateTime, Utc};
use log::debug;
use rusqlite::Connection;
use rusqlite::Result;
use std::collections::HashMap;

/// `'flashcards', 'word_matching', ...` for an SQL `IN` filter
fn known_types_sql() -> String {
    ActivityType::ALL
        .iter()
        .map(|t| format!("'{}'", t.as_str()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Raw per-type rollup
struct TypeTotals {
    kind: String,
    total: i64,
    completed: i64,
    total_minutes: i64,
    last_attempt: DateTime<Utc>,
}

pub struct ActivityStatsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ActivityStatsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        ActivityStatsRepository { conn }
    }

    /// Completion, accuracy, time and last attempt for each recognised activity type.
    /// Rows whose stored type is outside the known set are never read, so a corrupt
    /// row of an unknown type cannot fail the rollup.
    pub fn by_type(&self) -> Result<ActivityStatsByType> {
        let totals = self.type_totals()?;
        let mut results = self.results_by_type()?;

        let mut stats = ActivityStatsByType::new();
        for t in totals {
            let Some(activity_type) = ActivityType::parse(&t.kind) else {
                debug!("Skipping unrecognised activity type '{}' in statistics", t.kind);
                continue;
            };
            let scores = results.remove(&t.kind).unwrap_or_default();

            stats.insert(
                activity_type,
                ActivityStats {
                    activity_type,
                    completion_rate: percentage(t.completed, t.total),
                    average_accuracy: mean_score(&scores),
                    total_time: t.total_minutes,
                    last_attempt: t.last_attempt,
                },
            );
        }

        Ok(stats)
    }

    // Each activity has at most one session (unique study_activity_id), so the join
    // does not inflate the activity counts.
    fn type_totals(&self) -> Result<Vec<TypeTotals>> {
        let mut stmt = self.conn.prepare(&format!(
            r#"SELECT
                a.type,
                COUNT(a.id) as total,
                COUNT(a.completed_at) as completed,
                COALESCE(SUM(s.time_taken_seconds), 0) / 60 as total_minutes,
                MAX(a.created_at) as last_attempt
            FROM study_activities a
            LEFT JOIN study_sessions s ON s.study_activity_id = a.id
            WHERE a.type IN ({})
            GROUP BY a.type
            ORDER BY a.type"#,
            known_types_sql()
        ))?;

        let rows = stmt.query_map([], |row| {
            Ok(TypeTotals {
                kind: row.get(0)?,
                total: row.get(1)?,
                completed: row.get(2)?,
                total_minutes: row.get(3)?,
                last_attempt: row.get(4)?,
            })
        })?;
        rows.collect()
    }

    fn results_by_type(&self) -> Result<HashMap<String, Vec<ActivityResult>>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT type, accuracy_score, confidence_score, score FROM study_activities
             WHERE type IN ({})",
            known_types_sql()
        ))?;
        let rows = stmt.query_map([], |row| {
            let kind: String = row.get(0)?;
            let result = ActivityResult::from_columns(row.get(1)?, row.get(2)?, row.get(3)?);
            Ok((kind, result))
        })?;

        let mut grouped: HashMap<String, Vec<ActivityResult>> = HashMap::new();
        for row in rows {
            let (kind, result) = row?;
            grouped.entry(kind).or_default().push(result);
        }
        Ok(grouped)
    }
}
