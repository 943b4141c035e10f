use log::info;
use rusqlite::{Connection, Result};

const HISTORY_TABLES: [&str; 3] = ["word_review_items", "study_sessions", "study_activities"];

const ALL_TABLES: [&str; 6] = [
    "word_review_items",
    "study_sessions",
    "study_activities",
    "words_groups",
    "words",
    "groups",
];

/// Administrative bulk deletes; each call is a single transaction
pub struct ResetRepository<'a> {
    conn: &'a Connection,
}

impl<'a> ResetRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        ResetRepository { conn }
    }

    /// Removes all study activities, sessions and review items, keeping words and groups
    pub fn reset_history(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        for table in HISTORY_TABLES {
            tx.execute(&format!("DELETE FROM {table}"), [])?;
        }
        tx.commit()?;
        info!("Study history reset");
        Ok(())
    }

    /// Removes every row, including words and groups, and restarts id sequences
    pub fn full_reset(&self) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        // Children first so foreign keys hold at every step
        for table in ALL_TABLES {
            tx.execute(&format!("DELETE FROM {table}"), [])?;
        }
        for table in ALL_TABLES {
            tx.execute("DELETE FROM sqlite_sequence WHERE name = ?1", [table])?;
        }
        tx.commit()?;
        info!("Full reset completed");
        Ok(())
    }
}
