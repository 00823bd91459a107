//! State behind the "add school" form.

use crate::app::error::DirectoryError;
use crate::domain::model::{ImagePayload, NewSchool, SchoolField, SchoolRecord};
use crate::domain::validation::{validate_school, FieldError, ValidationErrors};
use crate::storage::SchoolGateway;
use tracing::{error, info};

#[derive(Debug, Default)]
pub struct AddSchoolForm {
    candidate: NewSchool,
    errors: ValidationErrors,
    submit_error: Option<String>,
}

impl AddSchoolForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidate(&self) -> &NewSchool {
        &self.candidate
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Form-level message left by a failed append.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    /// Updates a text input and clears its error. Ignored for `Image`; use
    /// `attach_image` for that.
    pub fn set_field(&mut self, field: SchoolField, value: impl Into<String>) {
        if let Some(slot) = self.candidate.text_mut(field) {
            *slot = value.into();
            self.errors.remove(field);
        }
    }

    /// Runs the size gate, then attaches the image. On rejection the error is
    /// recorded against `image` and the candidate's image stays unset.
    pub fn attach_image(&mut self, mime: &str, bytes: &[u8]) -> Result<(), FieldError> {
        self.attach(ImagePayload::from_bytes(mime, bytes))
    }

    /// Same as `attach_image` for a `data:` URL.
    pub fn attach_data_url(&mut self, url: &str) -> Result<(), FieldError> {
        self.attach(ImagePayload::from_data_url(url))
    }

    fn attach(&mut self, payload: Result<ImagePayload, FieldError>) -> Result<(), FieldError> {
        match payload {
            Ok(image) => {
                self.candidate.image = Some(image);
                self.errors.remove(SchoolField::Image);
                Ok(())
            }
            Err(e) => {
                self.candidate.image = None;
                self.errors.insert(SchoolField::Image, e.clone());
                Err(e)
            }
        }
    }

    /// Validates and appends. The form is cleared only on success; after a
    /// gateway failure every field keeps its value for a retry.
    pub async fn submit(&mut self, gateway: &dyn SchoolGateway) -> Result<SchoolRecord, DirectoryError> {
        self.submit_error = None;
        let errors = validate_school(&self.candidate);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Err(DirectoryError::Validation(errors));
        }

        match gateway.append(self.candidate.clone()).await {
            Ok(record) => {
                info!(id = record.id, "school form submitted");
                *self = Self::default();
                Ok(record)
            }
            Err(e) => {
                error!(error = %e, "school form submit failed");
                let err = DirectoryError::SubmitFailed(e);
                self.submit_error = Some(err.to_string());
                Err(err)
            }
        }
    }
}
