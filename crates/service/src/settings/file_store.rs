use std::{path::PathBuf, sync::Arc};

use tracing::info;

use crate::errors::ServiceError;
use crate::settings::domain::{ColorSettings, Colors, ColorsUpdate};
use crate::settings::repository::SettingsRepository;
use crate::storage::JsonDocument;

/// Settings persisted as a single JSON object.
pub struct SettingsFileStore {
    doc: JsonDocument<ColorSettings>,
}

impl SettingsFileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Arc<Self> {
        Arc::new(Self { doc: JsonDocument::new(path) })
    }
}

#[async_trait::async_trait]
impl SettingsRepository for SettingsFileStore {
    async fn get_colors(&self) -> Colors {
        self.doc.read().await.colors
    }

    async fn update_colors(&self, update: ColorsUpdate) -> Result<Colors, ServiceError> {
        update.validate()?;
        let colors = self
            .doc
            .update(|settings| {
                settings.colors.merge(update);
                Ok(settings.colors.clone())
            })
            .await?;
        info!(orange = %colors.orange, green = %colors.green, "colors updated");
        Ok(colors)
    }
}
