use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::settings::domain::{Colors, ColorsUpdate};

/// Trait abstraction for the singleton settings document.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get_colors(&self) -> Colors;
    async fn update_colors(&self, update: ColorsUpdate) -> Result<Colors, ServiceError>;
}
