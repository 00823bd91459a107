//! Domain model for school records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

pub mod image;

pub use image::{ImagePayload, MAX_IMAGE_BYTES};

/// A stored school. Only ever produced by the persistence gateway, which assigns
/// `id` and `created_at`; never updated afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub id: u64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Ten decimal digits.
    pub contact: String,
    pub email: String,
    /// `data:<mime>;base64,...` URL of the uploaded image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

impl SchoolRecord {
    /// Value of one of the filterable fields.
    pub fn filter_value(&self, field: FilterField) -> &str {
        match field {
            FilterField::Name => &self.name,
            FilterField::City => &self.city,
            FilterField::State => &self.state,
        }
    }
}

/// A candidate record on its way through the add path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewSchool {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email: String,
    pub image: Option<ImagePayload>,
}

impl NewSchool {
    /// Text value for a field; `None` for `Image`, which is not text.
    pub fn text(&self, field: SchoolField) -> Option<&str> {
        match field {
            SchoolField::Name => Some(&self.name),
            SchoolField::Address => Some(&self.address),
            SchoolField::City => Some(&self.city),
            SchoolField::State => Some(&self.state),
            SchoolField::Contact => Some(&self.contact),
            SchoolField::Email => Some(&self.email),
            SchoolField::Image => None,
        }
    }

    /// Mutable handle to a text field; `None` for `Image`.
    pub fn text_mut(&mut self, field: SchoolField) -> Option<&mut String> {
        match field {
            SchoolField::Name => Some(&mut self.name),
            SchoolField::Address => Some(&mut self.address),
            SchoolField::City => Some(&mut self.city),
            SchoolField::State => Some(&mut self.state),
            SchoolField::Contact => Some(&mut self.contact),
            SchoolField::Email => Some(&mut self.email),
            SchoolField::Image => None,
        }
    }

    pub(crate) fn into_record(self, id: u64, created_at: DateTime<Utc>) -> SchoolRecord {
        SchoolRecord {
            id,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            contact: self.contact,
            email: self.email,
            image: self.image.map(|img| img.to_data_url()),
            created_at,
        }
    }
}

/// Every input of the add form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SchoolField {
    Name,
    Address,
    City,
    State,
    Contact,
    Email,
    Image,
}

impl SchoolField {
    pub const ALL: [SchoolField; 7] = [
        SchoolField::Name,
        SchoolField::Address,
        SchoolField::City,
        SchoolField::State,
        SchoolField::Contact,
        SchoolField::Email,
        SchoolField::Image,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchoolField::Name => "name",
            SchoolField::Address => "address",
            SchoolField::City => "city",
            SchoolField::State => "state",
            SchoolField::Contact => "contact",
            SchoolField::Email => "email",
            SchoolField::Image => "image",
        }
    }

    /// Human label used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            SchoolField::Name => "School name",
            SchoolField::Address => "Address",
            SchoolField::City => "City",
            SchoolField::State => "State",
            SchoolField::Contact => "Contact number",
            SchoolField::Email => "Email",
            SchoolField::Image => "Image",
        }
    }
}

impl fmt::Display for SchoolField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three fields the listing can be filtered and autosuggested on.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Name,
    City,
    State,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Name, FilterField::City, FilterField::State];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::City => "city",
            FilterField::State => "state",
        }
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            FilterField::Name => 0,
            FilterField::City => 1,
            FilterField::State => 2,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
