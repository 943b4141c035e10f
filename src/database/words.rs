use crate::row_factories::WordRowFactory;
use rusqlite::{params, Connection, OptionalExtension, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    pub id: i64,
    pub japanese: String,
    pub romaji: String,
    pub english: String,
    /// Free-form annotation, kept as the raw JSON text it was imported with
    pub parts: Option<String>,
}

pub struct WordsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> WordsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        WordsRepository { conn }
    }

    pub fn insert(
        &self,
        japanese: &str,
        romaji: &str,
        english: &str,
        parts: Option<&str>,
    ) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO words (japanese, romaji, english, parts) VALUES (?1, ?2, ?3, ?4)",
            params![japanese, romaji, english, parts],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, word_id: i64) -> Result<Option<Word>> {
        self.conn
            .query_row(
                "SELECT id, japanese, romaji, english, parts FROM words WHERE id = ?1",
                [word_id],
                WordRowFactory::from_row,
            )
            .optional()
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Number of words linked to a group; agrees with `list_in_group` over all pages
    pub fn count_in_group(&self, group_id: i64) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*)
             FROM words w
             INNER JOIN words_groups wg ON wg.word_id = w.id
             WHERE wg.group_id = ?1",
            [group_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// One page of the words in a group, ordered by id. `page` starts at 1.
    pub fn list_in_group(&self, group_id: i64, page: i64, per_page: i64) -> Result<Vec<Word>> {
        let offset = (page.max(1) - 1) * per_page;
        let mut stmt = self.conn.prepare(
            "SELECT w.id, w.japanese, w.romaji, w.english, w.parts
             FROM words w
             INNER JOIN words_groups wg ON wg.word_id = w.id
             WHERE wg.group_id = ?1
             ORDER BY w.id
             LIMIT ?2 OFFSET ?3",
        )?;

        let rows = stmt.query_map(params![group_id, per_page, offset], WordRowFactory::from_row)?;
        rows.collect()
    }
}
