use crate::activity::{ActivityType, StudyActivity};
use crate::date_provider::db_timestamp;
use crate::row_factories::{STUDY_ACTIVITY_COLUMNS, StudyActivityRowFactory};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Result};

pub struct StudyActivitiesRepository<'a> {
    conn: &'a Connection,
    get_current_time: Box<dyn Fn() -> DateTime<Utc> + 'a>,
}

impl<'a> StudyActivitiesRepository<'a> {
    pub fn new(
        conn: &'a Connection,
        get_current_time: Box<dyn Fn() -> DateTime<Utc> + 'a>,
    ) -> Self {
        StudyActivitiesRepository {
            conn,
            get_current_time,
        }
    }

    /// Starts an attempt: no result and no completion time yet
    pub fn create(&self, group_id: i64, activity_type: ActivityType) -> Result<i64> {
        let now_utc = db_timestamp((self.get_current_time)());
        self.conn.execute(
            "INSERT INTO study_activities (group_id, type, created_at) VALUES (?1, ?2, ?3)",
            params![group_id, activity_type.as_str(), now_utc],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, activity_id: i64) -> Result<Option<StudyActivity>> {
        self.conn
            .query_row(
                &format!("SELECT {STUDY_ACTIVITY_COLUMNS} FROM study_activities WHERE id = ?1"),
                [activity_id],
                StudyActivityRowFactory::from_row,
            )
            .optional()
    }

    pub fn get_recent(&self, limit: i64) -> Result<Vec<StudyActivity>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {STUDY_ACTIVITY_COLUMNS}
             FROM study_activities
             ORDER BY created_at DESC, id DESC
             LIMIT ?1"
        ))?;

        let rows = stmt.query_map([limit], StudyActivityRowFactory::from_row)?;
        rows.collect()
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM study_activities", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_completed(&self) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM study_activities WHERE completed_at IS NOT NULL",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityResult;
    use crate::database::connection::init_connection;
    use crate::database::groups::GroupsRepository;
    use crate::database::study_sessions::StudySessionsRepository;

    fn create_test_db() -> Connection {
        init_connection(":memory:").expect("Failed to create test database")
    }

    fn create_repo(conn: &Connection) -> StudyActivitiesRepository<'_> {
        StudyActivitiesRepository::new(conn, Box::new(Utc::now))
    }

    #[test]
    fn test_create_activity_starts_pending() {
        let conn = create_test_db();
        let group_id = GroupsRepository::new(&conn).insert("Numbers").unwrap();
        let repo = create_repo(&conn);

        let id = repo.create(group_id, ActivityType::Flashcards).unwrap();
        let activity = repo.get(id).unwrap().unwrap();

        assert_eq!(activity.group_id, group_id);
        assert_eq!(activity.activity_type(), Some(ActivityType::Flashcards));
        assert!(!activity.is_completed());
        assert_eq!(activity.result, ActivityResult::Pending);
        assert_eq!(
            StudySessionsRepository::new(&conn).count_for_activity(id).unwrap(),
            0
        );
    }

    #[test]
    fn test_counts() {
        let conn = create_test_db();
        let group_id = GroupsRepository::new(&conn).insert("Numbers").unwrap();
        let repo = create_repo(&conn);

        repo.create(group_id, ActivityType::VocabularyQuiz).unwrap();
        let id = repo.create(group_id, ActivityType::VocabularyQuiz).unwrap();
        conn.execute(
            "UPDATE study_activities SET score = 70, completed_at = created_at WHERE id = ?1",
            [id],
        )
        .unwrap();

        assert_eq!(repo.count().unwrap(), 2);
        assert_eq!(repo.count_completed().unwrap(), 1);
        assert_eq!(repo.get(id).unwrap().unwrap().result, ActivityResult::Score(70.0));
    }

    #[test]
    fn test_create_for_missing_group_fails() {
        let conn = create_test_db();
        let repo = create_repo(&conn);
        assert!(repo.create(99, ActivityType::Flashcards).is_err());
    }

    #[test]
    fn test_get_recent_orders_newest_first() {
        let conn = create_test_db();
        let group_id = GroupsRepository::new(&conn).insert("Numbers").unwrap();
        let base = chrono::NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc();

        let older = StudyActivitiesRepository::new(&conn, Box::new(move || base))
            .create(group_id, ActivityType::Flashcards)
            .unwrap();
        let newer =
            StudyActivitiesRepository::new(&conn, Box::new(move || base + chrono::Duration::hours(2)))
                .create(group_id, ActivityType::WordMatching)
                .unwrap();

        let recent = create_repo(&conn).get_recent(10).unwrap();
        assert_eq!(
            recent.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![newer, older]
        );
    }
}
