use std::collections::HashMap;
use std::sync::RwLock;

use ahash::RandomState;

use super::{Storage, StorageError, check_append, position_error};
use crate::error::PracticeError;
use crate::model::{Category, PracticeRecord};

/// Process-local store; nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<HashMap<Category, Vec<PracticeRecord>, RandomState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StorageError {
    StorageError::new("memory storage lock poisoned")
}

impl Storage for MemoryStorage {
    fn load(&self, category: Category) -> Result<Vec<PracticeRecord>, PracticeError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(&category).cloned().unwrap_or_default())
    }

    fn append(&self, category: Category, record: PracticeRecord) -> Result<(), PracticeError> {
        check_append(category, &record)?;
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.entry(category).or_default().push(record);
        Ok(())
    }

    fn delete(&self, category: Category, position: usize) -> Result<(), PracticeError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        let list = records.entry(category).or_default();
        if position >= list.len() {
            return Err(position_error(category, position, list.len()));
        }
        list.remove(position);
        Ok(())
    }
}
