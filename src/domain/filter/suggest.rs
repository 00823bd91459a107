use crate::domain::model::{FilterField, SchoolRecord};
use std::collections::HashSet;

pub const MAX_SUGGESTIONS: usize = 5;

/// Distinct name/city/state values in first-seen order.
///
/// Built once per record-set change; `suggest` is then a scan over the
/// distinct values only. The lower-cased form is kept next to each value so
/// keystrokes do not re-fold the whole universe.
#[derive(Debug, Clone, Default)]
pub struct SuggestionIndex {
    values: [Vec<(String, String)>; 3],
}

impl SuggestionIndex {
    pub fn build(records: &[SchoolRecord]) -> Self {
        let mut index = Self::default();
        for field in FilterField::ALL {
            let mut seen: HashSet<&str> = HashSet::new();
            let slot = &mut index.values[field.slot()];
            for record in records {
                let value = record.filter_value(field);
                if value.is_empty() || !seen.insert(value) {
                    continue;
                }
                slot.push((value.to_string(), value.to_lowercase()));
            }
        }
        index
    }

    /// Number of distinct values known for a field.
    pub fn distinct_count(&self, field: FilterField) -> usize {
        self.values[field.slot()].len()
    }

    /// Up to `MAX_SUGGESTIONS` values that start with `draft`, ignoring case.
    pub fn suggest(&self, field: FilterField, draft: &str) -> Vec<String> {
        if draft.is_empty() {
            return Vec::new();
        }
        let prefix = draft.to_lowercase();
        self.values[field.slot()]
            .iter()
            .filter(|(_, folded)| folded.starts_with(&prefix))
            .map(|(value, _)| value.clone())
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}

/// One-shot variant for callers without a cached index.
pub fn suggest(records: &[SchoolRecord], field: FilterField, draft: &str) -> Vec<String> {
    SuggestionIndex::build(records).suggest(field, draft)
}
