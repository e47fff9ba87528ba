//! Runtime wiring helpers
//!
//! Builds the file-backed stores from resolved storage paths so binaries and
//! tests construct them the same way.

use std::sync::Arc;

use configs::StoragePaths;

use crate::errors::ServiceError;
use crate::news::NewsFileStore;
use crate::settings::SettingsFileStore;

pub struct Stores {
    pub news: Arc<NewsFileStore>,
    pub settings: Arc<SettingsFileStore>,
}

/// Open both stores; with `seed_sample_data` a missing news file gets the welcome items.
pub async fn open_stores(paths: &StoragePaths, seed_sample_data: bool) -> Result<Stores, ServiceError> {
    let news = NewsFileStore::new(&paths.news_file);
    let settings = SettingsFileStore::new(&paths.settings_file);
    if seed_sample_data {
        news.seed_if_missing().await?;
    }
    Ok(Stores { news, settings })
}
