use crate::error::StoreResult;
use log::info;
use rusqlite::{params, Connection};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A vocabulary group as found in a seed file
#[derive(Debug, Clone, Deserialize)]
pub struct SeedGroup {
    pub group_name: String,
    #[serde(default)]
    pub words: Vec<SeedWord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedWord {
    pub japanese: String,
    pub romaji: String,
    pub english: String,
    /// Arbitrary JSON, stored verbatim as text
    #[serde(default)]
    pub parts: Option<serde_json::Value>,
}

impl SeedWord {
    fn parts_text(&self) -> Option<String> {
        match &self.parts {
            None | Some(serde_json::Value::Null) => None,
            Some(value) => Some(value.to_string()),
        }
    }
}

pub fn parse(json: &str) -> StoreResult<SeedGroup> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_file(path: &Path) -> StoreResult<SeedGroup> {
    let contents = fs::read_to_string(path)?;
    parse(&contents)
}

/// Creates the group, its words and the links between them in one transaction.
/// Returns the new group id.
pub fn import_group(conn: &Connection, group: &SeedGroup) -> StoreResult<i64> {
    let tx = conn.unchecked_transaction()?;

    tx.execute("INSERT INTO groups (name) VALUES (?1)", [&group.group_name])?;
    let group_id = tx.last_insert_rowid();

    for word in &group.words {
        tx.execute(
            "INSERT INTO words (japanese, romaji, english, parts) VALUES (?1, ?2, ?3, ?4)",
            params![word.japanese, word.romaji, word.english, word.parts_text()],
        )?;
        let word_id = tx.last_insert_rowid();
        tx.execute(
            "INSERT INTO words_groups (word_id, group_id) VALUES (?1, ?2)",
            params![word_id, group_id],
        )?;
    }

    tx.commit()?;
    info!(
        "Imported group '{}' with {} words",
        group.group_name,
        group.words.len()
    );
    Ok(group_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::init_connection;
    use crate::database::groups::GroupsRepository;
    use crate::database::words::WordsRepository;
    use crate::error::StoreError;
    use std::io::Write;

    const GREETINGS: &str = r#"{
        "group_name": "Basic Greetings",
        "words": [
            {"japanese": "こんにちは", "romaji": "konnichiwa", "english": "hello",
             "parts": [{"kanji": "今", "romaji": ["kon"]}]},
            {"japanese": "さようなら", "romaji": "sayounara", "english": "goodbye"}
        ]
    }"#;

    #[test]
    fn test_import_group() {
        let conn = init_connection(":memory:").unwrap();
        let group = parse(GREETINGS).unwrap();
        let group_id = import_group(&conn, &group).unwrap();

        assert_eq!(GroupsRepository::new(&conn).word_count(group_id).unwrap(), 2);
        let words = WordsRepository::new(&conn).list_in_group(group_id, 1, 10).unwrap();
        let hello = words.iter().find(|w| w.english == "hello").unwrap();
        assert_eq!(
            hello.parts.as_deref(),
            Some(r#"[{"kanji":"今","romaji":["kon"]}]"#)
        );
        let goodbye = words.iter().find(|w| w.english == "goodbye").unwrap();
        assert!(goodbye.parts.is_none());
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = parse(r#"{"words": []}"#).unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GREETINGS.as_bytes()).unwrap();

        let group = load_file(file.path()).unwrap();
        assert_eq!(group.group_name, "Basic Greetings");
        assert_eq!(group.words.len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let err = load_file(Path::new("/nonexistent/seed.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }
}
