use crate::activity::{ActivityOutcome, ActivityType};
use crate::database::review_items::WordReviewItemsRepository;
use crate::date_provider::db_timestamp;
use crate::error::{StoreError, StoreResult, is_fk_violation};
use chrono::{DateTime, Utc};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};

/// Writes the result of a finished activity attempt.
///
/// The session row, every review item and the activity's result column are written
/// in a single transaction: either all of them are visible afterwards or none are.
pub struct ActivityRecorder<'a> {
    conn: &'a Connection,
    get_current_time: Box<dyn Fn() -> DateTime<Utc> + 'a>,
}

impl<'a> ActivityRecorder<'a> {
    pub fn new(
        conn: &'a Connection,
        get_current_time: Box<dyn Fn() -> DateTime<Utc> + 'a>,
    ) -> Self {
        ActivityRecorder {
            conn,
            get_current_time,
        }
    }

    /// Completes an activity and returns the id of the study session created for it
    pub fn record(&self, activity_id: i64, outcome: &ActivityOutcome) -> StoreResult<i64> {
        let now = (self.get_current_time)();
        let now_utc = db_timestamp(now);
        let tx = self.conn.unchecked_transaction()?;

        let (group_id, kind, completed_at): (i64, String, Option<String>) = tx
            .query_row(
                "SELECT group_id, type, completed_at FROM study_activities WHERE id = ?1",
                [activity_id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .optional()?
            .ok_or(StoreError::ActivityNotFound(activity_id))?;

        if completed_at.is_some() {
            return Err(StoreError::ActivityAlreadyCompleted(activity_id));
        }
        let activity_type =
            ActivityType::parse(&kind).ok_or_else(|| StoreError::UnknownActivityType(kind.clone()))?;

        tx.execute(
            "INSERT INTO study_sessions (group_id, study_activity_id, created_at, time_taken_seconds)
             VALUES (?1, ?2, ?3, ?4)",
            params![group_id, activity_id, now_utc, outcome.time_taken_seconds],
        )?;
        let session_id = tx.last_insert_rowid();

        let review_items = WordReviewItemsRepository::new(&tx);
        for answer in &outcome.answers {
            review_items
                .insert(session_id, answer.word_id, answer.correct, now)
                .inspect_err(|e| {
                    if is_fk_violation(e) {
                        warn!(
                            "Review item for unknown word {} rejected, rolling back activity {}",
                            answer.word_id, activity_id
                        );
                    }
                })?;
        }

        let result = activity_type.result(outcome.score);
        if let Some(column) = result.column() {
            tx.execute(
                &format!(
                    "UPDATE study_activities SET {column} = ?1, completed_at = ?2 WHERE id = ?3"
                ),
                params![result.value_or_zero(), now_utc, activity_id],
            )?;
        }

        tx.commit()?;
        debug!(
            "Recorded {} activity {} (session {}, {} answers, {}s)",
            activity_type.as_str(),
            activity_id,
            session_id,
            outcome.answers.len(),
            outcome.time_taken_seconds
        );
        Ok(session_id)
    }
}
