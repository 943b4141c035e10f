use crate::date_provider::db_timestamp;
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordReviewItem {
    pub id: i64,
    pub word_id: i64,
    pub study_session_id: i64,
    pub correct: bool,
    pub created_at: DateTime<Utc>,
}

pub struct WordReviewItemsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> WordReviewItemsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        WordReviewItemsRepository { conn }
    }

    pub fn insert(
        &self,
        study_session_id: i64,
        word_id: i64,
        correct: bool,
        created_at: DateTime<Utc>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO word_review_items (word_id, study_session_id, correct, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![word_id, study_session_id, correct, db_timestamp(created_at)],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM word_review_items", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_for_session(&self, study_session_id: i64) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM word_review_items WHERE study_session_id = ?1",
            [study_session_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn list_for_session(&self, study_session_id: i64) -> Result<Vec<WordReviewItem>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, word_id, study_session_id, correct, created_at
             FROM word_review_items
             WHERE study_session_id = ?1
             ORDER BY id",
        )?;

        let rows = stmt.query_map([study_session_id], |row| {
            Ok(WordReviewItem {
                id: row.get(0)?,
                word_id: row.get(1)?,
                study_session_id: row.get(2)?,
                correct: row.get(3)?,
                created_at: row.get(4)?,
            })
        })?;
        rows.collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityOutcome, ActivityType};
    use crate::database::connection::init_connection;
    use crate::database::groups::GroupsRepository;
    use crate::database::recorder::ActivityRecorder;
    use crate::database::study_activities::StudyActivitiesRepository;
    use crate::database::study_sessions::StudySessionsRepository;
    use crate::database::words::WordsRepository;

    fn create_test_db() -> Connection {
        init_connection(":memory:").expect("Failed to create test database")
    }

    #[test]
    fn test_list_matches_count_for_session() {
        let conn = create_test_db();
        let group_id = GroupsRepository::new(&conn).insert("Numbers").unwrap();
        let words = WordsRepository::new(&conn);
        let one = words.insert("一", "ichi", "one", None).unwrap();
        let two = words.insert("二", "ni", "two", None).unwrap();

        let activity_id = StudyActivitiesRepository::new(&conn, Box::new(Utc::now))
            .create(group_id, ActivityType::WordMatching)
            .unwrap();
        ActivityRecorder::new(&conn, Box::new(Utc::now))
            .record(
                activity_id,
                &ActivityOutcome {
                    score: 50.0,
                    time_taken_seconds: 45,
                    answers: vec![
                        crate::activity::ReviewAnswer { word_id: one, correct: true },
                        crate::activity::ReviewAnswer { word_id: two, correct: false },
                    ],
                },
            )
            .unwrap();

        let session = StudySessionsRepository::new(&conn)
            .get_for_activity(activity_id)
            .unwrap()
            .unwrap();
        let repo = WordReviewItemsRepository::new(&conn);
        let items = repo.list_for_session(session.id).unwrap();

        assert_eq!(repo.count_for_session(session.id).unwrap(), 2);
        assert_eq!(items.len(), 2);
        assert!(items[0].correct);
        assert!(!items[1].correct);
        assert_eq!(items[1].word_id, two);
    }

    #[test]
    fn test_insert_requires_existing_session() {
        let conn = create_test_db();
        let word_id = WordsRepository::new(&conn)
            .insert("一", "ichi", "one", None)
            .unwrap();
        let repo = WordReviewItemsRepository::new(&conn);
        assert!(repo.insert(123, word_id, true, Utc::now()).is_err());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
