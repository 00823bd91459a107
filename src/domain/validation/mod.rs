//! Field rules for candidate school records.
//!
//! Every rule is evaluated; a failing field never hides the errors of the
//! fields after it. An empty `ValidationErrors` means the record may be stored.

use crate::domain::model::{NewSchool, SchoolField, MAX_IMAGE_BYTES};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;

// ASCII digits only; `\d` matches any Unicode digit.
static CONTACT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("valid contact regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Required,
    InvalidFormat,
    TooLarge,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn required(field: SchoolField) -> Self {
        Self {
            kind: ErrorKind::Required,
            message: format!("{} is required", field.label()),
        }
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::InvalidFormat,
            message: message.into(),
        }
    }

    pub(crate) fn image_format(detail: &str) -> Self {
        Self::invalid_format(format!("Invalid image: {}", detail))
    }

    pub fn too_large(size: usize) -> Self {
        Self {
            kind: ErrorKind::TooLarge,
            message: format!(
                "Image must be at most {} bytes (got {})",
                MAX_IMAGE_BYTES, size
            ),
        }
    }

    /// `TooLarge` for a payload that was cut off before its size was known.
    pub fn too_large_unmeasured() -> Self {
        Self {
            kind: ErrorKind::TooLarge,
            message: format!("Image must be at most {} bytes", MAX_IMAGE_BYTES),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

/// Per-field failures, ordered by form position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<SchoolField, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: SchoolField) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn insert(&mut self, field: SchoolField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: SchoolField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SchoolField, &FieldError)> {
        self.0.iter().map(|(f, e)| (*f, e))
    }

    /// `field -> message`, the shape the API reports.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.0
            .iter()
            .map(|(f, e)| (f.as_str(), e.message.clone()))
            .collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, err)| format!("{}: {}", field, err))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.messages().serialize(serializer)
    }
}

pub fn is_valid_contact(contact: &str) -> bool {
    CONTACT_RE.is_match(contact)
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Size gate applied before an image is attached to a candidate record.
pub fn check_image_size(len: usize) -> Result<(), FieldError> {
    if len > MAX_IMAGE_BYTES {
        return Err(FieldError::too_large(len));
    }
    Ok(())
}

pub fn validate_school(school: &NewSchool) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in [
        SchoolField::Name,
        SchoolField::Address,
        SchoolField::City,
        SchoolField::State,
    ] {
        if school.text(field).unwrap_or_default().trim().is_empty() {
            errors.insert(field, FieldError::required(field));
        }
    }

    if school.contact.trim().is_empty() {
        errors.insert(SchoolField::Contact, FieldError::required(SchoolField::Contact));
    } else if !is_valid_contact(&school.contact) {
        errors.insert(
            SchoolField::Contact,
            FieldError::invalid_format("Contact number must be exactly 10 digits"),
        );
    }

    if school.email.trim().is_empty() {
        errors.insert(SchoolField::Email, FieldError::required(SchoolField::Email));
    } else if !is_valid_email(&school.email) {
        errors.insert(
            SchoolField::Email,
            FieldError::invalid_format("Email must look like name@domain.tld"),
        );
    }

    if school.image.is_none() {
        errors.insert(SchoolField::Image, FieldError::required(SchoolField::Image));
    }

    errors
}
