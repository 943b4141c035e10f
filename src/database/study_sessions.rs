use crate::activity::StudySession;
use crate::row_factories::{STUDY_SESSION_COLUMNS, StudySessionRowFactory};
use rusqlite::{params, Connection, OptionalExtension, Result};

pub struct StudySessionsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> StudySessionsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        StudySessionsRepository { conn }
    }

    pub fn get(&self, session_id: i64) -> Result<Option<StudySession>> {
        self.conn
            .query_row(
                &format!("SELECT {STUDY_SESSION_COLUMNS} FROM study_sessions WHERE id = ?1"),
                [session_id],
                StudySessionRowFactory::from_row,
            )
            .optional()
    }

    /// The session recorded for an activity attempt, if it was completed
    pub fn get_for_activity(&self, activity_id: i64) -> Result<Option<StudySession>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {STUDY_SESSION_COLUMNS} FROM study_sessions WHERE study_activity_id = ?1"
                ),
                [activity_id],
                StudySessionRowFactory::from_row,
            )
            .optional()
    }

    pub fn last(&self) -> Result<Option<StudySession>> {
        self.conn
            .query_row(
                &format!(
                    "SELECT {STUDY_SESSION_COLUMNS} FROM study_sessions
                     ORDER BY created_at DESC, id DESC LIMIT 1"
                ),
                [],
                StudySessionRowFactory::from_row,
            )
            .optional()
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM study_sessions", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_for_group(&self, group_id: i64) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM study_sessions WHERE group_id = ?1",
            [group_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// One page of a group's sessions, newest first. `page` starts at 1.
    pub fn list_for_group(&self, group_id: i64, page: i64, per_page: i64) -> Result<Vec<StudySession>> {
        let offset = (page.max(1) - 1) * per_page;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STUDY_SESSION_COLUMNS}
             FROM study_sessions
             WHERE group_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2 OFFSET ?3"
        ))?;

        let rows = stmt.query_map(
            params![group_id, per_page, offset],
            StudySessionRowFactory::from_row,
        )?;
        rows.collect()
    }

    /// 0 or 1, since an activity is completed at most once
    pub fn count_for_activity(&self, activity_id: i64) -> Result<i64> {
        self.conn.query_row(
            "SELECT COUNT(*) FROM study_sessions WHERE study_activity_id = ?1",
            [activity_id],
            |row| row.get(0),
        )
    }

    /// Paged sessions of one activity, with the same filter as `count_for_activity`
    pub fn list_for_activity(
        &self,
        activity_id: i64,
        page: i64,
        per_page: i64,
    ) -> Result<Vec<StudySession>> {
        let offset = (page.max(1) - 1) * per_page;
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STUDY_SESSION_COLUMNS}
             FROM study_sessions
             WHERE study_activity_id = ?1
             ORDER BY created_at DESC, id DESC
             LIMIT ?2 OFFSET ?3"
        ))?;

        let rows = stmt.query_map(
            params![activity_id, per_page, offset],
            StudySessionRowFactory::from_row,
        )?;
        rows.collect()
    }
}
