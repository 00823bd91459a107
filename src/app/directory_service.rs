//! The directory service.
//!
//! Sits between the HTTP transport and the persistence gateway. It is
//! responsible for:
//! 1.  Running the validation rules before anything reaches storage.
//! 2.  Turning gateway failures on the add path into a single `SubmitFailed`.
//! 3.  Serving filtered listings and autosuggest from the full record set.

use crate::app::error::DirectoryError;
use crate::domain::filter::{filter_schools, FilterState, SuggestionIndex};
use crate::domain::model::{FilterField, NewSchool, SchoolRecord};
use crate::domain::validation::validate_school;
use crate::storage::SchoolGateway;
use std::sync::Arc;
use tracing::{error, info, warn};

pub struct DirectoryService {
    gateway: Arc<dyn SchoolGateway>,
    /// Suggestion universe plus the record count it was derived from. The
    /// store is append-only, so an unchanged count means an unchanged set.
    index: Option<(usize, SuggestionIndex)>,
}

impl DirectoryService {
    pub fn new(gateway: Arc<dyn SchoolGateway>) -> Self {
        Self {
            gateway,
            index: None,
        }
    }

    pub fn gateway(&self) -> &Arc<dyn SchoolGateway> {
        &self.gateway
    }

    /// Validates and stores a candidate record.
    pub async fn add_school(&mut self, school: NewSchool) -> Result<SchoolRecord, DirectoryError> {
        let errors = validate_school(&school);
        if !errors.is_empty() {
            warn!(fields = %errors, "rejected school submission");
            return Err(DirectoryError::Validation(errors));
        }

        match self.gateway.append(school).await {
            Ok(record) => {
                info!(id = record.id, name = %record.name, city = %record.city, "school added");
                self.index = None;
                Ok(record)
            }
            Err(e) => {
                error!(error = %e, "failed to store school");
                Err(DirectoryError::SubmitFailed(e))
            }
        }
    }

    pub async fn list_schools(&self) -> Result<Vec<SchoolRecord>, DirectoryError> {
        Ok(self.gateway.load_all().await?)
    }

    pub async fn get_school(&self, id: u64) -> Result<SchoolRecord, DirectoryError> {
        self.gateway
            .load_all()
            .await?
            .into_iter()
            .find(|s| s.id == id)
            .ok_or(DirectoryError::NotFound(id))
    }

    /// Records matching a committed filter, in insertion order.
    pub async fn search(&self, filter: &FilterState) -> Result<Vec<SchoolRecord>, DirectoryError> {
        let records = self.gateway.load_all().await?;
        Ok(filter_schools(&records, filter))
    }

    pub async fn suggest(
        &mut self,
        field: FilterField,
        draft: &str,
    ) -> Result<Vec<String>, DirectoryError> {
        if draft.is_empty() {
            return Ok(Vec::new());
        }
        let count = self.gateway.count().await?;
        let stale = !matches!(&self.index, Some((n, _)) if *n == count);
        if stale {
            let records = self.gateway.load_all().await?;
            self.index = Some((records.len(), SuggestionIndex::build(&records)));
        }
        Ok(self
            .index
            .as_ref()
            .map(|(_, index)| index.suggest(field, draft))
            .unwrap_or_default())
    }
}
