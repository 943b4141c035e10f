use crate::activity::{ActivityResult, StudyActivity, StudySession};
use crate::database::words::Word;
use rusqlite::Row;

/// Column list matching `StudyActivityRowFactory::from_row`
pub const STUDY_ACTIVITY_COLUMNS: &str =
    "id, group_id, type, created_at, completed_at, accuracy_score, confidence_score, score";

/// Column list matching `StudySessionRowFactory::from_row`
pub const STUDY_SESSION_COLUMNS: &str =
    "id, group_id, study_activity_id, created_at, time_taken_seconds";

/// Factory for creating StudyActivity objects from database rows
pub struct StudyActivityRowFactory;

impl StudyActivityRowFactory {
    /// Expected columns: see `STUDY_ACTIVITY_COLUMNS`
    pub fn from_row(row: &Row) -> rusqlite::Result<StudyActivity> {
        Ok(StudyActivity {
            id: row.get(0)?,
            group_id: row.get(1)?,
            kind: row.get(2)?,
            created_at: row.get(3)?,
            completed_at: row.get(4)?,
            result: ActivityResult::from_columns(row.get(5)?, row.get(6)?, row.get(7)?),
        })
    }
}

/// Factory for creating StudySession objects from database rows
pub struct StudySessionRowFactory;

impl StudySessionRowFactory {
    /// Expected columns: see `STUDY_SESSION_COLUMNS`
    pub fn from_row(row: &Row) -> rusqlite::Result<StudySession> {
        Ok(StudySession {
            id: row.get(0)?,
            group_id: row.get(1)?,
            study_activity_id: row.get(2)?,
            created_at: row.get(3)?,
            time_taken_seconds: row.get(4)?,
        })
    }
}

/// Factory for creating Word objects from database rows
pub struct WordRowFactory;

impl WordRowFactory {
    /// Expected columns: id, japanese, romaji, english, parts
    pub fn from_row(row: &Row) -> rusqlite::Result<Word> {
        Ok(Word {
            id: row.get(0)?,
            japanese: row.get(1)?,
            romaji: row.get(2)?,
            english: row.get(3)?,
            parts: row.get(4)?,
        })
    }
}
