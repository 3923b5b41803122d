use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::{Connection, OptionalExtension, params};

use super::{Storage, StorageError, check_append, position_error};
use crate::error::PracticeError;
use crate::model::{Category, Dated, PracticeRecord};

const SCHEMA: &str = include_str!("../sql/schema/sqlite/00_practice_record.sql");

const SELECT_BY_CATEGORY: &str =
    "SELECT payload FROM practice_record WHERE category = ?1 ORDER BY record_id";
const INSERT_RECORD: &str =
    "INSERT INTO practice_record (category, recorded_on, payload) VALUES (?1, ?2, ?3)";
const SELECT_ID_AT: &str =
    "SELECT record_id FROM practice_record WHERE category = ?1 ORDER BY record_id LIMIT 1 OFFSET ?2";
const COUNT_BY_CATEGORY: &str = "SELECT COUNT(*) FROM practice_record WHERE category = ?1";

fn db_err(context: &str, e: &rusqlite::Error) -> StorageError {
    StorageError::new(format!("{context}: {e}"))
}

/// SQLite-backed store. Records are kept as JSON payloads, one row each.
pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Opens (or creates) the database file and applies the schema.
    ///
    /// # Errors
    /// Returns `PracticeError::Storage` if the file cannot be opened or the DDL fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PracticeError> {
        let path = path.as_ref();
        let conn = Connection::open(path)
            .map_err(|e| db_err(&format!("opening {}", path.display()), &e))?;
        log::info!("opened practice store at {}", path.display());
        Self::with_connection(conn)
    }

    /// # Errors
    /// Returns `PracticeError::Storage` if the DDL fails.
    pub fn open_in_memory() -> Result<Self, PracticeError> {
        let conn = Connection::open_in_memory().map_err(|e| db_err("opening in-memory db", &e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, PracticeError> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| db_err("applying schema", &e))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::new("sqlite connection lock poisoned"))
    }
}

impl Storage for SqliteStorage {
    fn load(&self, category: Category) -> Result<Vec<PracticeRecord>, PracticeError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(SELECT_BY_CATEGORY)
            .map_err(|e| db_err("preparing load", &e))?;
        let payloads = stmt
            .query_map(params![category.as_str()], |row| row.get::<_, String>(0))
            .map_err(|e| db_err("loading records", &e))?
            .collect::<Result<Vec<String>, _>>()
            .map_err(|e| db_err("reading record row", &e))?;

        let mut records = Vec::with_capacity(payloads.len());
        for payload in payloads {
            records.push(serde_json::from_str::<PracticeRecord>(&payload)?);
        }
        Ok(records)
    }

    fn append(&self, category: Category, record: PracticeRecord) -> Result<(), PracticeError> {
        check_append(category, &record)?;
        let payload = serde_json::to_string(&record)?;
        let recorded_on = record.date().format("%Y-%m-%d").to_string();

        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| db_err("starting append", &e))?;
        tx.execute(INSERT_RECORD, params![category.as_str(), recorded_on, payload])
            .map_err(|e| db_err("inserting record", &e))?;
        tx.commit().map_err(|e| db_err("committing append", &e))?;
        log::info!("stored {category} record for {recorded_on}");
        Ok(())
    }

    fn delete(&self, category: Category, position: usize) -> Result<(), PracticeError> {
        let mut conn = self.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| db_err("starting delete", &e))?;
        let offset = i64::try_from(position)
            .map_err(|_| PracticeError::validation(format!("position {position} is too large")))?;
        let record_id: Option<i64> = tx
            .query_row(SELECT_ID_AT, params![category.as_str(), offset], |row| row.get(0))
            .optional()
            .map_err(|e| db_err("locating record", &e))?;
        let Some(record_id) = record_id else {
            let len: i64 = tx
                .query_row(COUNT_BY_CATEGORY, params![category.as_str()], |row| row.get(0))
                .map_err(|e| db_err("counting records", &e))?;
            return Err(position_error(category, position, usize::try_from(len).unwrap_or(0)));
        };
        tx.execute("DELETE FROM practice_record WHERE record_id = ?1", params![record_id])
            .map_err(|e| db_err("deleting record", &e))?;
        tx.commit().map_err(|e| db_err("committing delete", &e))?;
        log::info!("deleted {category} record {position}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PracticeSession, TestResult};
    use chrono::NaiveDate;

    fn session(day: u32) -> PracticeRecord {
        let date = NaiveDate::from_ymd_opt(2026, 4, day).unwrap();
        PracticeRecord::Session(
            PracticeSession::new(Category::Putting, date).with_drill("lag_drill", 2),
        )
    }

    #[test]
    fn mismatched_category_rejected_before_write() {
        let store = SqliteStorage::open_in_memory().unwrap();
        let err = store.append(Category::BallStriking, session(1)).unwrap_err();
        assert!(matches!(err, PracticeError::Validation(_)));
        assert!(store.load(Category::BallStriking).unwrap().is_empty());
    }

    #[test]
    fn empty_test_rejected() {
        let store = SqliteStorage::open_in_memory().unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let record = PracticeRecord::Test(TestResult::new(date));
        assert!(store.append(Category::Testing, record).is_err());
    }
}
