//! Listing filters and autosuggest over the in-memory record set.

use crate::domain::model::{FilterField, SchoolRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub mod suggest;

pub use suggest::{suggest, SuggestionIndex, MAX_SUGGESTIONS};

/// Three independent case-insensitive substring predicates. An empty string
/// places no constraint on its field.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterState {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
}

impl FilterState {
    pub fn get(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::City => &self.city,
            FilterField::State => &self.state,
        }
    }

    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let slot = match field {
            FilterField::Name => &mut self.name,
            FilterField::City => &mut self.city,
            FilterField::State => &mut self.state,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        FilterField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// True when every non-empty filter field is a case-insensitive substring of
/// the record's corresponding field.
pub fn matches(record: &SchoolRecord, filter: &FilterState) -> bool {
    FilterField::ALL.iter().all(|&field| {
        let needle = filter.get(field);
        needle.is_empty()
            || record
                .filter_value(field)
                .to_lowercase()
                .contains(&needle.to_lowercase())
    })
}

/// Stable filter: matching records in their original order.
pub fn filter_schools(records: &[SchoolRecord], filter: &FilterState) -> Vec<SchoolRecord> {
    if filter.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect()
}
