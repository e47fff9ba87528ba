//! Service layer for the news ticker.
//! - Storage accessor for whole-file JSON documents.
//! - News and settings domain rules, repository traits and file-backed stores.
//! - A single error type mapped to HTTP statuses by the server crate.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod news;
pub mod settings;
