//! Durable gateway backed by a single JSON document on local disk.

use super::{SchoolDocument, SchoolGateway, StoreError};
use crate::domain::model::{NewSchool, SchoolRecord};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Keeps the whole document in memory and rewrites the file on every append.
/// Writes land in `<path>.tmp` first and are renamed over the original, so a
/// crash mid-write leaves the previous document intact.
pub struct JsonFileStore {
    path: PathBuf,
    doc: Mutex<SchoolDocument>,
}

impl JsonFileStore {
    /// Loads the document at `path`, or starts empty if the file does not exist.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let doc = match fs::read_to_string(&path).await {
            Ok(content) => {
                let mut doc: SchoolDocument = serde_json::from_str(&content)?;
                doc.reconcile();
                info!(path = %path.display(), schools = doc.schools.len(), next_id = doc.next_id, "loaded school store");
                doc
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no school store found, starting empty");
                SchoolDocument::default()
            }
            Err(e) => return Err(e.into()),
        };
        Ok(Self {
            path,
            doc: Mutex::new(doc),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Drops every record and resets the id counter.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let mut doc = self.doc.lock().await;
        let fresh = SchoolDocument::default();
        write_document(&self.path, &fresh).await?;
        *doc = fresh;
        warn!(path = %self.path.display(), "school store reset");
        Ok(())
    }
}

#[async_trait]
impl SchoolGateway for JsonFileStore {
    async fn append(&self, school: NewSchool) -> Result<SchoolRecord, StoreError> {
        let mut doc = self.doc.lock().await;
        let record = doc.push(school);
        if let Err(e) = write_document(&self.path, &doc).await {
            doc.schools.pop();
            doc.next_id -= 1;
            return Err(e);
        }
        debug!(id = record.id, "school appended");
        Ok(record)
    }

    async fn load_all(&self) -> Result<Vec<SchoolRecord>, StoreError> {
        Ok(self.doc.lock().await.schools.clone())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        Ok(self.doc.lock().await.schools.len())
    }
}

async fn write_document(path: &Path, doc: &SchoolDocument) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let content = serde_json::to_string_pretty(doc)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, content).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
