use std::sync::Arc;

use service::news::NewsRepository;
use service::runtime::Stores;
use service::settings::SettingsRepository;

/// Shared handler state; the stores are trait objects so tests can swap them.
#[derive(Clone)]
pub struct ServerState {
    pub news: Arc<dyn NewsRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub ticker_limit: usize,
}

impl ServerState {
    pub fn from_stores(stores: Stores, ticker_limit: usize) -> Self {
        Self { news: stores.news, settings: stores.settings, ticker_limit }
    }
}
