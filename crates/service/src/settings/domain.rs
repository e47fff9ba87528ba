use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

pub const DEFAULT_ORANGE: &str = "#FF8C00";
pub const DEFAULT_GREEN: &str = "#228B22";

fn default_orange() -> String { DEFAULT_ORANGE.to_string() }
fn default_green() -> String { DEFAULT_GREEN.to_string() }

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Colors {
    #[serde(default = "default_orange")]
    pub orange: String,
    #[serde(default = "default_green")]
    pub green: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self { orange: default_orange(), green: default_green() }
    }
}

/// The settings document as stored on disk: `{"colors": {...}}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorSettings {
    #[serde(default)]
    pub colors: Colors,
}

/// Body of `PUT /api/settings/colors`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorsUpdate {
    #[serde(default)]
    pub orange: Option<String>,
    #[serde(default)]
    pub green: Option<String>,
}

impl ColorsUpdate {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.orange.is_none() && self.green.is_none() {
            return Err(ServiceError::Validation("orange or green is required".into()));
        }
        Ok(())
    }
}

impl Colors {
    /// Overwrite only the supplied keys.
    pub fn merge(&mut self, update: ColorsUpdate) {
        if let Some(orange) = update.orange {
            self.orange = orange;
        }
        if let Some(green) = update.green {
            self.green = green;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_fills_defaults() {
        let s: ColorSettings = serde_json::from_str(r##"{"colors": {"orange": "#111111"}}"##).unwrap();
        assert_eq!(s.colors.orange, "#111111");
        assert_eq!(s.colors.green, DEFAULT_GREEN);
        let empty: ColorSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, ColorSettings::default());
    }

    #[test]
    fn merge_keeps_unsupplied_key() {
        let mut c = Colors::default();
        c.merge(ColorsUpdate { orange: Some("#FF0000".into()), green: None });
        assert_eq!(c.orange, "#FF0000");
        assert_eq!(c.green, DEFAULT_GREEN);
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(matches!(ColorsUpdate::default().validate(), Err(ServiceError::Validation(_))));
        assert!(ColorsUpdate { orange: None, green: Some("#00FF00".into()) }.validate().is_ok());
    }
}
