pub mod school;

pub use school::{JsonFileStore, MemoryStore, SchoolGateway, StoreError};
