use crate::statistics::{percentage, DashboardProgress, QuickStats};
use rusqlite::Connection;
use rusqlite::Result;

pub struct DashboardRepository<'a> {
    conn: &'a Connection,
}

impl<'a> DashboardRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        DashboardRepository { conn }
    }

    pub fn quick_stats(&self) -> Result<QuickStats> {
        let (correct, reviewed) = self.review_counts()?;
        Ok(QuickStats {
            total_words: self.count("SELECT COUNT(*) FROM words")?,
            words_studied: self.words_studied()?,
            study_sessions: self.count("SELECT COUNT(*) FROM study_sessions")?,
            accuracy_rate: percentage(correct, reviewed),
        })
    }

    pub fn progress(&self) -> Result<DashboardProgress> {
        Ok(DashboardProgress {
            total_words_studied: self.words_studied()?,
        })
    }

    /// Distinct words reviewed at least once
    pub fn words_studied(&self) -> Result<i64> {
        self.count("SELECT COUNT(DISTINCT word_id) FROM word_review_items")
    }

    /// (correct, total) review items
    pub fn review_counts(&self) -> Result<(i64, i64)> {
        self.conn.query_row(
            "SELECT COUNT(CASE WHEN correct = 1 THEN 1 END), COUNT(*) FROM word_review_items",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
    }

    fn count(&self, sql: &str) -> Result<i64> {
        self.conn.query_row(sql, [], |row| row.get(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{ActivityType, ReviewAnswer};
    use crate::database::analytics::fixtures::*;
    use crate::database::words::WordsRepository;

    #[test]
    fn test_empty_database() {
        let conn = create_test_db();
        let repo = DashboardRepository::new(&conn);
        assert_eq!(repo.quick_stats().unwrap(), QuickStats::empty());
        assert_eq!(repo.progress().unwrap().total_words_studied, 0);
    }

    #[test]
    fn test_sessions_without_reviews_have_zero_accuracy() {
        let conn = create_test_db();
        let group_id = group(&conn);
        WordsRepository::new(&conn).insert("一", "ichi", "one", None).unwrap();
        finished(&conn, group_id, ActivityType::Flashcards, 4.0, 60, at(2025, 1, 15, 9));

        let stats = DashboardRepository::new(&conn).quick_stats().unwrap();
        assert_eq!(stats.total_words, 1);
        assert_eq!(stats.study_sessions, 1);
        assert_eq!(stats.words_studied, 0);
        assert_eq!(stats.accuracy_rate, 0.0);
    }

    #[test]
    fn test_words_studied_counts_wrong_answers_too() {
        let conn = create_test_db();
        let group_id = group(&conn);
        let words = WordsRepository::new(&conn);
        let one = words.insert("一", "ichi", "one", None).unwrap();
        let two = words.insert("二", "ni", "two", None).unwrap();
        words.insert("三", "san", "three", None).unwrap();
        let when = at(2025, 1, 15, 10);

        let first = start(&conn, group_id, ActivityType::WordMatching, when);
        complete(
            &conn,
            first,
            50.0,
            30,
            vec![
                ReviewAnswer { word_id: one, correct: true },
                ReviewAnswer { word_id: two, correct: false },
            ],
            when,
        );
        let second = start(&conn, group_id, ActivityType::VocabularyQuiz, when);
        complete(
            &conn,
            second,
            100.0,
            30,
            vec![ReviewAnswer { word_id: one, correct: true }],
            when,
        );

        let repo = DashboardRepository::new(&conn);
        let stats = repo.quick_stats().unwrap();
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.words_studied, 2);
        assert_eq!(stats.study_sessions, 2);
        assert!((stats.accuracy_rate - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(repo.progress().unwrap().total_words_studied, 2);
    }
}
