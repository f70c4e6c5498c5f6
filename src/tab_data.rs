/// Data structures for TabVault
use serde::{Deserialize, Serialize};

/// Snapshot of a browser tab at capture time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,
}

impl TabInfo {
    pub fn new(title: String, url: String) -> TabInfo {
        TabInfo {
            id: None,
            title,
            url,
            fav_icon_url: None,
        }
    }

    /// Normalize a tab as reported by `chrome.tabs.query`
    pub fn from_raw(raw: RawTab) -> TabInfo {
        TabInfo {
            id: raw.id,
            title: raw.title.unwrap_or_else(|| "Untitled".to_string()),
            url: raw.url.unwrap_or_default(),
            fav_icon_url: raw.fav_icon_url,
        }
    }
}

/// A tab as the browser hands it over; every field may be missing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTab {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub fav_icon_url: Option<String>,
}

/// Notion integration token and target database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotionConfig {
    pub token: String,
    pub database_id: String,
}

/// Tally of one batch save
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResult {
    pub success_count: usize,
    pub failed_count: usize,
}

impl SyncResult {
    pub fn total(&self) -> usize {
        self.success_count + self.failed_count
    }

    /// Message shown in the popup once a save finishes
    pub fn summary(&self) -> String {
        let mut message = format!("✅ Saved {} tabs", self.success_count);
        if self.failed_count > 0 {
            message.push_str(&format!(" ({} failed)", self.failed_count));
        }
        message
    }
}

/// Popup save status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Idle,
    Saving,
    Success,
    Error,
}

impl SaveStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            SaveStatus::Idle => "idle",
            SaveStatus::Saving => "saving",
            SaveStatus::Success => "success",
            SaveStatus::Error => "error",
        }
    }
}

/// What the popup failed to load on open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    Tabs,
    Settings,
}

impl LoadFailure {
    pub fn message(&self) -> &'static str {
        match self {
            LoadFailure::Tabs => "❌ Failed to load tabs",
            LoadFailure::Settings => "❌ Failed to load Notion settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_creation() {
        let tab = TabInfo::new("Google".to_string(), "https://google.com".to_string());

        assert_eq!(tab.id, None);
        assert_eq!(tab.url, "https://google.com");
        assert_eq!(tab.title, "Google");
        assert_eq!(tab.fav_icon_url, None);
    }

    #[test]
    fn test_from_raw_fills_missing_fields() {
        let raw: RawTab = serde_json::from_str(r#"{"id": 7}"#).unwrap();
        let tab = TabInfo::from_raw(raw);

        assert_eq!(tab.id, Some(7));
        assert_eq!(tab.title, "Untitled");
        assert_eq!(tab.url, "");
        assert_eq!(tab.fav_icon_url, None);
    }

    #[test]
    fn test_from_raw_keeps_browser_fields() {
        let raw: RawTab = serde_json::from_str(
            r#"{"id": 3, "title": "Rust", "url": "https://rust-lang.org",
                "favIconUrl": "https://rust-lang.org/favicon.ico", "pinned": true}"#,
        )
        .unwrap();
        let tab = TabInfo::from_raw(raw);

        assert_eq!(tab.title, "Rust");
        assert_eq!(tab.url, "https://rust-lang.org");
        assert_eq!(tab.fav_icon_url.as_deref(), Some("https://rust-lang.org/favicon.ico"));
    }

    #[test]
    fn test_tab_info_accepts_js_shape() {
        let tab: TabInfo =
            serde_json::from_str(r#"{"title": "Example", "url": "https://example.com"}"#).unwrap();

        assert_eq!(tab, TabInfo::new("Example".to_string(), "https://example.com".to_string()));
    }

    #[test]
    fn test_sync_result_serializes_camel_case() {
        let result = SyncResult { success_count: 2, failed_count: 1 };
        let json = serde_json::to_value(result).unwrap();

        assert_eq!(json, serde_json::json!({"successCount": 2, "failedCount": 1}));
        assert_eq!(result.total(), 3);
    }

    #[test]
    fn test_summary_without_failures() {
        let result = SyncResult { success_count: 4, failed_count: 0 };
        assert_eq!(result.summary(), "✅ Saved 4 tabs");
    }

    #[test]
    fn test_summary_with_failures() {
        let result = SyncResult { success_count: 2, failed_count: 3 };
        assert_eq!(result.summary(), "✅ Saved 2 tabs (3 failed)");
    }

    #[test]
    fn test_load_failure_messages_hide_bridge_detail() {
        assert_eq!(LoadFailure::Tabs.message(), "❌ Failed to load tabs");
        assert_eq!(LoadFailure::Settings.message(), "❌ Failed to load Notion settings");
        assert!(!LoadFailure::Tabs.message().contains("get tabs:"));
    }
}
