//! News items: domain model, repository seam and the JSON file implementation.

pub mod domain;
pub mod repository;
pub mod file_store;

pub use domain::{CreateNewsInput, NewsDocument, NewsItem, NewsStatus, UpdateNewsInput};
pub use file_store::NewsFileStore;
pub use repository::NewsRepository;
