//! Document load and upsert queries.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    storage::SnapshotStore,
};

const SELECT_DOCUMENT_SQL: &str = "SELECT value FROM storage WHERE name = ?1";
const UPSERT_DOCUMENT_SQL: &str = "INSERT INTO storage (name, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(name) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";
const SELECT_UPDATED_AT_SQL: &str = "SELECT updated_at FROM storage WHERE name = ?1";

impl super::Database {
    /// When the document under `key` was last written.
    pub fn last_saved(&self, key: &str) -> Result<Option<Timestamp>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_UPDATED_AT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query document timestamp")?;

        Ok(raw.and_then(|value| value.parse::<Timestamp>().ok()))
    }
}

impl SnapshotStore for super::Database {
    fn load(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_DOCUMENT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to load document")
    }

    fn save(&mut self, key: &str, document: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now().to_string();
        tx.execute(UPSERT_DOCUMENT_SQL, params![key, document, &now])
            .db_context("Failed to write document")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}
