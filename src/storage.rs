/// Settings persisted in chrome.storage.local

use crate::tab_data::NotionConfig;
use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "notion_config";

/// Root storage structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredSettings {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub database_id: String,
}

impl StoredSettings {
    pub fn new(token: String, database_id: String) -> Self {
        StoredSettings { token, database_id }
    }

    /// Credentials, or `None` while either field is blank
    pub fn to_config(&self) -> Option<NotionConfig> {
        let token = self.token.trim();
        let database_id = self.database_id.trim();

        if token.is_empty() || database_id.is_empty() {
            return None;
        }

        Some(NotionConfig {
            token: token.to_string(),
            database_id: database_id.to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.to_config().is_some()
    }
}

impl From<NotionConfig> for StoredSettings {
    fn from(config: NotionConfig) -> Self {
        StoredSettings {
            token: config.token,
            database_id: config.database_id,
        }
    }
}
