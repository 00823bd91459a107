//! View state of the school listing.
//!
//! Keystrokes only touch the draft filter; the visible results follow the
//! committed filter, which changes on `search`, `submit_key` and `clear`.
//! Each filter input has its own suggestion list with a small state machine:
//!
//! ```text
//!   Hidden --(draft non-empty while focused)--> Shown
//!   Shown  --(draft emptied | select | clear)--> Hidden
//!   Shown  --(blur, then tick past grace)-----> Hidden
//! ```

use crate::domain::filter::{filter_schools, FilterState, SuggestionIndex};
use crate::domain::model::{FilterField, SchoolRecord};
use std::time::{Duration, Instant};

/// How long a list stays up after its input loses focus, so a click on a
/// suggestion that caused the blur still lands.
pub const SUGGESTION_BLUR_GRACE: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuggestionState {
    #[default]
    Hidden,
    Shown,
}

#[derive(Debug, Clone, Default)]
struct FieldUi {
    focused: bool,
    state: SuggestionState,
    hide_at: Option<Instant>,
}

#[derive(Debug, Default)]
pub struct SchoolBrowser {
    records: Vec<SchoolRecord>,
    index: SuggestionIndex,
    draft: FilterState,
    committed: FilterState,
    results: Vec<SchoolRecord>,
    ui: [FieldUi; 3],
}

impl SchoolBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the record set wholesale and recomputes everything derived from it.
    pub fn load(&mut self, records: Vec<SchoolRecord>) {
        self.index = SuggestionIndex::build(&records);
        self.records = records;
        self.refresh();
    }

    pub fn records(&self) -> &[SchoolRecord] {
        &self.records
    }

    pub fn results(&self) -> &[SchoolRecord] {
        &self.results
    }

    pub fn draft(&self) -> &FilterState {
        &self.draft
    }

    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    pub fn suggestion_state(&self, field: FilterField) -> SuggestionState {
        self.ui[field.slot()].state
    }

    pub fn is_shown(&self, field: FilterField) -> bool {
        self.suggestion_state(field) == SuggestionState::Shown
    }

    pub fn focus(&mut self, field: FilterField) {
        let ui = &mut self.ui[field.slot()];
        ui.focused = true;
        ui.hide_at = None;
    }

    /// Schedules the list to hide once `SUGGESTION_BLUR_GRACE` has passed.
    pub fn blur(&mut self, field: FilterField, now: Instant) {
        let ui = &mut self.ui[field.slot()];
        ui.focused = false;
        if ui.state == SuggestionState::Shown {
            ui.hide_at = Some(now + SUGGESTION_BLUR_GRACE);
        }
    }

    /// Applies any blur-triggered hides whose grace period has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for ui in self.ui.iter_mut() {
            if matches!(ui.hide_at, Some(at) if at <= now) {
                ui.state = SuggestionState::Hidden;
                ui.hide_at = None;
            }
        }
    }

    pub fn edit_draft(&mut self, field: FilterField, text: impl Into<String>) {
        self.draft.set(field, text);
        let empty = self.draft.get(field).is_empty();
        let ui = &mut self.ui[field.slot()];
        if empty {
            ui.state = SuggestionState::Hidden;
            ui.hide_at = None;
        } else if ui.focused {
            ui.state = SuggestionState::Shown;
        }
    }

    /// Suggestions for the field's current draft, empty while the list is hidden.
    pub fn suggestions(&self, field: FilterField) -> Vec<String> {
        if !self.is_shown(field) {
            return Vec::new();
        }
        self.index.suggest(field, self.draft.get(field))
    }

    /// Fills the draft with a suggestion and hides the list. The committed
    /// filter is left alone. Returns false if the list was already hidden.
    pub fn select_suggestion(&mut self, field: FilterField, value: &str) -> bool {
        if !self.is_shown(field) {
            return false;
        }
        self.draft.set(field, value);
        let ui = &mut self.ui[field.slot()];
        ui.state = SuggestionState::Hidden;
        ui.hide_at = None;
        true
    }

    /// Promotes the draft to the committed filter.
    pub fn search(&mut self) {
        self.committed = self.draft.clone();
        self.refresh();
    }

    /// Enter pressed inside a filter input.
    pub fn submit_key(&mut self, _field: FilterField) {
        self.search();
    }

    pub fn clear(&mut self) {
        self.draft = FilterState::default();
        self.committed = FilterState::default();
        for ui in self.ui.iter_mut() {
            ui.state = SuggestionState::Hidden;
            ui.hide_at = None;
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        self.results = filter_schools(&self.records, &self.committed);
    }
}
