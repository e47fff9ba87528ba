//! Ticker theme settings (the two brand colors).

pub mod domain;
pub mod repository;
pub mod file_store;

pub use domain::{ColorSettings, Colors, ColorsUpdate, DEFAULT_GREEN, DEFAULT_ORANGE};
pub use file_store::SettingsFileStore;
pub use repository::SettingsRepository;
