use thiserror::Error;

/// Errors raised by the store and the components built on top of it
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("migration error: {0}")]
    Migration(#[from] refinery::Error),

    #[error("study activity {0} not found")]
    ActivityNotFound(i64),

    #[error("study activity {0} is already completed")]
    ActivityAlreadyCompleted(i64),

    #[error("unknown activity type '{0}'")]
    UnknownActivityType(String),

    #[error("invalid seed file: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Check if a rusqlite error is a FOREIGN KEY constraint violation
pub fn is_fk_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(err, _)
        if err.code == rusqlite::ffi::ErrorCode::ConstraintViolation
            && err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::init_connection;
    use crate::database::groups::GroupsRepository;
    use crate::database::words::WordsRepository;

    #[test]
    fn test_display_is_descriptive() {
        assert_eq!(
            StoreError::ActivityNotFound(7).to_string(),
            "study activity 7 not found"
        );
        assert_eq!(
            StoreError::UnknownActivityType("karaoke".to_string()).to_string(),
            "unknown activity type 'karaoke'"
        );
    }

    #[test]
    fn test_rusqlite_error_converts() {
        let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_fk_violation_is_recognised() {
        let conn = init_connection(":memory:").unwrap();
        let groups = GroupsRepository::new(&conn);
        let group_id = groups.insert("Numbers").unwrap();

        let err = groups.add_word(group_id, 9999).unwrap_err();
        assert!(is_fk_violation(&err));
    }

    #[test]
    fn test_other_constraint_failures_are_not_fk_violations() {
        let conn = init_connection(":memory:").unwrap();
        let groups = GroupsRepository::new(&conn);
        let group_id = groups.insert("Numbers").unwrap();
        let word_id = WordsRepository::new(&conn)
            .insert("一", "ichi", "one", None)
            .unwrap();
        groups.add_word(group_id, word_id).unwrap();

        let duplicate = conn
            .execute(
                "INSERT INTO words_groups (word_id, group_id) VALUES (?1, ?2)",
                [word_id, group_id],
            )
            .unwrap_err();
        assert!(matches!(
            &duplicate,
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ffi::ErrorCode::ConstraintViolation
        ));
        assert!(!is_fk_violation(&duplicate));
        assert!(!is_fk_violation(&rusqlite::Error::QueryReturnedNoRows));
    }
}
