pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::browser::SchoolBrowser;
pub use app::directory_service::DirectoryService;
pub use app::error::DirectoryError;
pub use app::form::AddSchoolForm;
pub use domain::filter::{filter_schools, suggest, FilterState, SuggestionIndex};
pub use domain::model::{FilterField, ImagePayload, NewSchool, SchoolField, SchoolRecord};
pub use domain::validation::{validate_school, ErrorKind, FieldError, ValidationErrors};
pub use storage::{JsonFileStore, MemoryStore, SchoolGateway, StoreError};
