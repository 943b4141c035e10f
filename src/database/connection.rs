use crate::error::StoreResult;
use log::{debug, error};
use rusqlite::Connection;

// Embed migrations from the migrations directory
refinery::embed_migrations!("migrations");

/// Opens the database, enforces foreign keys and runs migrations
pub fn init_connection(db_path: &str) -> StoreResult<Connection> {
    let mut conn = Connection::open(db_path)?;
    conn.pragma_update(None, "foreign_keys", true)?;

    match migrations::runner().run(&mut conn) {
        Ok(report) => {
            debug!(
                "Migrations completed successfully ({} applied)",
                report.applied_migrations().len()
            );
        }
        Err(e) => {
            error!("Refinery migration error: {}", e);
            return Err(e.into());
        }
    }

    Ok(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_created() {
        let conn = init_connection(":memory:").unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'
                 AND name IN ('words', 'groups', 'words_groups', 'study_activities',
                              'study_sessions', 'word_review_items')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 6);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = init_connection(":memory:").unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_migrations_are_idempotent_on_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("study.db");
        let path = path.to_str().unwrap();

        init_connection(path).unwrap();
        assert!(init_connection(path).is_ok());
    }
}
