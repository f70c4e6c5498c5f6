/// Notion page payloads built from captured tabs

use crate::tab_data::TabInfo;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/pages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: PageProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parent {
    pub database_id: String,
}

/// Database columns a saved tab fills in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProperties {
    #[serde(rename = "Title")]
    pub title: TitleProperty,
    #[serde(rename = "URL")]
    pub url: UrlProperty,
    #[serde(rename = "Saved Date")]
    pub saved_date: DateProperty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub text: TextContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlProperty {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateProperty {
    pub date: DateValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
}

/// Build the page payload for a tab, stamped with the current time
pub fn build_page_request(tab: &TabInfo, database_id: &str) -> CreatePageRequest {
    build_page_request_at(tab, database_id, Utc::now())
}

/// Build the page payload for a tab with an explicit save time.
///
/// Title and URL are copied verbatim; Notion validates them on its side.
pub fn build_page_request_at(
    tab: &TabInfo,
    database_id: &str,
    saved_at: DateTime<Utc>,
) -> CreatePageRequest {
    CreatePageRequest {
        parent: Parent {
            database_id: database_id.to_string(),
        },
        properties: PageProperties {
            title: TitleProperty {
                title: vec![RichText {
                    text: TextContent {
                        content: tab.title.clone(),
                    },
                }],
            },
            url: UrlProperty {
                url: tab.url.clone(),
            },
            saved_date: DateProperty {
                date: DateValue {
                    start: format_timestamp(saved_at),
                },
            },
        },
    }
}

// Same shape as JS `Date.prototype.toISOString`
fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}
