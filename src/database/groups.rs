use rusqlite::{params, Connection, OptionalExtension, Result};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub id: i64,
    pub name: String,
}

pub struct GroupsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> GroupsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        GroupsRepository { conn }
    }

    pub fn insert(&self, name: &str) -> Result<i64> {
        self.conn
            .execute("INSERT INTO groups (name) VALUES (?1)", [name])?;
        Ok(self.conn.last_insert_rowid())
    }

    pub fn get(&self, group_id: i64) -> Result<Option<Group>> {
        self.conn
            .query_row(
                "SELECT id, name FROM groups WHERE id = ?1",
                [group_id],
                |row| {
                    Ok(Group {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()
    }

    pub fn exists(&self, group_id: i64) -> Result<bool> {
        self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM groups WHERE id = ?1)",
            [group_id],
            |row| row.get(0),
        )
    }

    pub fn count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM groups", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Links a word to a group; linking the same pair twice is a no-op
    pub fn add_word(&self, group_id: i64, word_id: i64) -> Result<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO words_groups (word_id, group_id) VALUES (?1, ?2)",
            params![word_id, group_id],
        )?;
        Ok(())
    }

    pub fn word_count(&self, group_id: i64) -> Result<i64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM words_groups WHERE group_id = ?1",
            [group_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::init_connection;
    use crate::database::words::WordsRepository;

    fn create_test_db() -> Connection {
        init_connection(":memory:").expect("Failed to create test database")
    }

    #[test]
    fn test_insert_and_get_group() {
        let conn = create_test_db();
        let repo = GroupsRepository::new(&conn);
        let id = repo.insert("Basic Greetings").unwrap();

        let group = repo.get(id).unwrap().unwrap();
        assert_eq!(group.name, "Basic Greetings");
        assert!(repo.exists(id).unwrap());
        assert!(!repo.exists(id + 1).unwrap());
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_add_word_is_idempotent() {
        let conn = create_test_db();
        let groups = GroupsRepository::new(&conn);
        let words = WordsRepository::new(&conn);
        let group_id = groups.insert("Numbers").unwrap();
        let word_id = words.insert("一", "ichi", "one", None).unwrap();

        groups.add_word(group_id, word_id).unwrap();
        groups.add_word(group_id, word_id).unwrap();

        assert_eq!(groups.word_count(group_id).unwrap(), 1);
        assert_eq!(words.count_in_group(group_id).unwrap(), 1);
    }

    #[test]
    fn test_add_word_to_missing_group_fails() {
        let conn = create_test_db();
        let groups = GroupsRepository::new(&conn);
        let words = WordsRepository::new(&conn);
        let word_id = words.insert("一", "ichi", "one", None).unwrap();

        let err = groups.add_word(42, word_id).unwrap_err();
        assert!(crate::error::is_fk_violation(&err));
    }
}
