use super::{SchoolDocument, SchoolGateway, StoreError};
use crate::domain::model::{NewSchool, SchoolRecord};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;

/// Ephemeral gateway. `fail_appends` makes every append fail, which lets
/// callers exercise the submit-failure path.
#[derive(Default)]
pub struct MemoryStore {
    doc: Mutex<SchoolDocument>,
    fail_appends: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store as if each candidate had been appended in order.
    pub fn with_schools(schools: impl IntoIterator<Item = NewSchool>) -> Self {
        let mut doc = SchoolDocument::default();
        for school in schools {
            doc.push(school);
        }
        Self {
            doc: Mutex::new(doc),
            fail_appends: AtomicBool::new(false),
        }
    }

    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl SchoolGateway for MemoryStore {
    async fn append(&self, school: NewSchool) -> Result<SchoolRecord, StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("memory store rejects writes".to_string()));
        }
        Ok(self.doc.lock().await.push(school))
    }

    async fn load_all(&self) -> Result<Vec<SchoolRecord>, StoreError> {
        Ok(self.doc.lock().await.schools.clone())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.doc.lock().await.schools.len())
    }
}
