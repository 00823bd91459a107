//! Persistence gateway for school records.
//!
//! Records are append-only: the gateway assigns the id and creation time and
//! never updates or deletes an entry.

use crate::domain::model::{NewSchool, SchoolRecord};
use async_trait::async_trait;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored document is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait SchoolGateway: Send + Sync {
    /// Stores a validated candidate, returning it with its new id and `created_at`.
    async fn append(&self, school: NewSchool) -> Result<SchoolRecord, StoreError>;

    /// All records in insertion order.
    async fn load_all(&self) -> Result<Vec<SchoolRecord>, StoreError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load_all().await?.len())
    }
}

/// The persisted shape shared by the file and memory stores.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SchoolDocument {
    /// Next id to hand out. Never decreases; `reconcile` fills it in when absent.
    #[serde(default)]
    pub next_id: u64,
    #[serde(default)]
    pub schools: Vec<SchoolRecord>,
}

impl Default for SchoolDocument {
    fn default() -> Self {
        Self {
            next_id: 1,
            schools: Vec::new(),
        }
    }
}

impl SchoolDocument {
    /// Repairs a counter that is missing or lags behind the stored ids.
    pub fn reconcile(&mut self) {
        let floor = self.schools.iter().map(|s| s.id).max().unwrap_or(0) + 1;
        if self.next_id < floor {
            self.next_id = floor;
        }
    }

    pub fn push(&mut self, school: NewSchool) -> SchoolRecord {
        let record = school.into_record(self.next_id, chrono::Utc::now());
        self.next_id += 1;
        self.schools.push(record.clone());
        record
    }
}
