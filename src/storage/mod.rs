use std::error::Error;
use std::fmt;

use crate::error::PracticeError;
use crate::model::{
    Category, LoopRound, PracticeRecord, PracticeSession, PuttingTestSession, TestResult,
    WedgeLadderSession,
};

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

#[derive(Debug, Clone)]
pub struct StorageError {
    message: String,
}

impl StorageError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for StorageError {}

impl From<String> for StorageError {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for StorageError {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Record store, one ordered collection per category.
///
/// `append` and `delete` are all-or-nothing. Backend failures surface as
/// `PracticeError::Storage`; malformed records and bad positions as
/// `PracticeError::Validation`.
pub trait Storage: Send + Sync {
    /// Records of `category` in insertion order.
    ///
    /// # Errors
    /// Returns `PracticeError::Storage` if the backend cannot be read.
    fn load(&self, category: Category) -> Result<Vec<PracticeRecord>, PracticeError>;

    /// # Errors
    /// Returns `PracticeError::Validation` for a record that fails validation or
    /// belongs to another category, `PracticeError::Storage` if the write fails.
    fn append(&self, category: Category, record: PracticeRecord) -> Result<(), PracticeError>;

    /// Removes the record at `position` in load order.
    ///
    /// # Errors
    /// Returns `PracticeError::Validation` if there is no record at `position`.
    fn delete(&self, category: Category, position: usize) -> Result<(), PracticeError>;
}

/// Checks run by every backend before a write.
///
/// # Errors
/// Returns `PracticeError::Validation` when the record is malformed or its
/// category does not match `category`.
pub fn check_append(category: Category, record: &PracticeRecord) -> Result<(), PracticeError> {
    if record.category() != category {
        return Err(PracticeError::validation(format!(
            "{} record cannot be stored under {category}",
            record.category()
        )));
    }
    record.validate()
}

pub(crate) fn position_error(category: Category, position: usize, len: usize) -> PracticeError {
    PracticeError::validation(format!(
        "no {category} record at position {position} ({len} stored)"
    ))
}

/// Every record across all categories, in `Category::ALL` order.
///
/// # Errors
/// Propagates the first load failure.
pub fn load_all(storage: &dyn Storage) -> Result<Vec<PracticeRecord>, PracticeError> {
    let mut all = Vec::new();
    for category in Category::ALL {
        all.extend(storage.load(category)?);
    }
    Ok(all)
}

fn unexpected(category: Category, record: &PracticeRecord) {
    log::warn!(
        "skipping {} record stored under {category}",
        record.category()
    );
}

/// # Errors
/// Propagates load failures.
pub fn load_sessions(
    storage: &dyn Storage,
    category: Category,
) -> Result<Vec<PracticeSession>, PracticeError> {
    Ok(storage
        .load(category)?
        .into_iter()
        .filter_map(|r| match r {
            PracticeRecord::Session(s) => Some(s),
            other => {
                unexpected(category, &other);
                None
            }
        })
        .collect())
}

/// # Errors
/// Propagates load failures.
pub fn load_tests(storage: &dyn Storage) -> Result<Vec<TestResult>, PracticeError> {
    Ok(storage
        .load(Category::Testing)?
        .into_iter()
        .filter_map(|r| match r {
            PracticeRecord::Test(t) => Some(t),
            other => {
                unexpected(Category::Testing, &other);
                None
            }
        })
        .collect())
}

/// # Errors
/// Propagates load failures.
pub fn load_loop_rounds(storage: &dyn Storage) -> Result<Vec<LoopRound>, PracticeError> {
    Ok(storage
        .load(Category::ThreeHoleLoop)?
        .into_iter()
        .filter_map(|r| match r {
            PracticeRecord::LoopRound(round) => Some(round),
            other => {
                unexpected(Category::ThreeHoleLoop, &other);
                None
            }
        })
        .collect())
}

/// # Errors
/// Propagates load failures.
pub fn load_putting_tests(storage: &dyn Storage) -> Result<Vec<PuttingTestSession>, PracticeError> {
    Ok(storage
        .load(Category::PuttingTesting)?
        .into_iter()
        .filter_map(|r| match r {
            PracticeRecord::PuttingTest(p) => Some(p),
            other => {
                unexpected(Category::PuttingTesting, &other);
                None
            }
        })
        .collect())
}

/// # Errors
/// Propagates load failures.
pub fn load_wedge_ladders(storage: &dyn Storage) -> Result<Vec<WedgeLadderSession>, PracticeError> {
    Ok(storage
        .load(Category::WedgeLadder)?
        .into_iter()
        .filter_map(|r| match r {
            PracticeRecord::WedgeLadder(w) => Some(w),
            other => {
                unexpected(Category::WedgeLadder, &other);
                None
            }
        })
        .collect())
}
