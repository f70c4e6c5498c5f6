/// Notion API client and single-tab submission

use crate::notion::{CreatePageRequest, build_page_request};
use crate::tab_data::{NotionConfig, TabInfo};
use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

pub const NOTION_API_URL: &str = "https://api.notion.com/v1/pages";
pub const NOTION_VERSION: &str = "2022-06-28";

/// Diagnostic detail of a failed create-page call. Logged, never returned to callers of `save_tab`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    #[error("failed to serialize request: {0}")]
    Serialize(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("Notion returned {status}: {message}")]
    Status { status: u16, message: String },
}

/// The only error a tab save reports
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SaveError {
    #[error("Failed to save to Notion")]
    SaveFailed,
}

/// Error body returned by the Notion API
#[derive(Debug, Deserialize)]
struct NotionErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl NotionErrorBody {
    fn into_message(self) -> String {
        self.message
            .filter(|m| !m.is_empty())
            .or(self.code)
            .unwrap_or_else(|| "API Error".to_string())
    }
}

/// Something that can create one page in a Notion database
#[async_trait(?Send)]
pub trait PageCreator {
    async fn create_page(&self, token: &str, request: &CreatePageRequest) -> Result<(), ApiError>;
}

/// Talks to the real Notion API over `fetch`
#[derive(Debug, Clone)]
pub struct NotionClient {
    endpoint: String,
}

impl NotionClient {
    pub fn new() -> Self {
        NotionClient {
            endpoint: NOTION_API_URL.to_string(),
        }
    }
}

impl Default for NotionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl PageCreator for NotionClient {
    async fn create_page(&self, token: &str, request: &CreatePageRequest) -> Result<(), ApiError> {
        let response = Request::post(&self.endpoint)
            .header("Authorization", &format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .header("Notion-Version", NOTION_VERSION)
            .json(request)
            .map_err(|e| ApiError::Serialize(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if response.ok() {
            // Created page id is not needed
            return Ok(());
        }

        let status = response.status();
        let message = match response.json::<NotionErrorBody>().await {
            Ok(body) => body.into_message(),
            Err(_) => "API Error".to_string(),
        };

        Err(ApiError::Status { status, message })
    }
}

/// Save one tab as a Notion page. Every failure collapses into `SaveError::SaveFailed`.
pub async fn save_tab<C>(creator: &C, tab: &TabInfo, config: &NotionConfig) -> Result<(), SaveError>
where
    C: PageCreator + ?Sized,
{
    let request = build_page_request(tab, &config.database_id);

    creator
        .create_page(&config.token, &request)
        .await
        .map_err(|e| {
            log::error!("Failed to save tab to Notion: {}", e);
            SaveError::SaveFailed
        })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingCreator {
        result: Result<(), ApiError>,
        calls: RefCell<Vec<(String, CreatePageRequest)>>,
    }

    impl RecordingCreator {
        fn returning(result: Result<(), ApiError>) -> Self {
            RecordingCreator {
                result,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PageCreator for RecordingCreator {
        async fn create_page(
            &self,
            token: &str,
            request: &CreatePageRequest,
        ) -> Result<(), ApiError> {
            self.calls.borrow_mut().push((token.to_string(), request.clone()));
            self.result.clone()
        }
    }

    fn test_config() -> NotionConfig {
        NotionConfig {
            token: "test-token".to_string(),
            database_id: "test-db-id".to_string(),
        }
    }

    fn test_tab() -> TabInfo {
        TabInfo {
            id: Some(1),
            title: "Test Page".to_string(),
            url: "https://example.com".to_string(),
            fav_icon_url: Some("https://example.com/favicon.ico".to_string()),
        }
    }

    #[tokio::test]
    async fn test_save_tab_sends_one_request() {
        let creator = RecordingCreator::returning(Ok(()));

        let result = save_tab(&creator, &test_tab(), &test_config()).await;

        assert_eq!(result, Ok(()));
        let calls = creator.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "test-token");
        assert_eq!(calls[0].1.parent.database_id, "test-db-id");
        assert_eq!(calls[0].1.properties.title.title[0].text.content, "Test Page");
        assert_eq!(calls[0].1.properties.url.url, "https://example.com");
    }

    #[tokio::test]
    async fn test_save_tab_failure_message_is_fixed() {
        let failures = vec![
            ApiError::Transport("connection reset".to_string()),
            ApiError::Serialize("bad body".to_string()),
            ApiError::Status { status: 401, message: "API token is invalid.".to_string() },
            ApiError::Status { status: 429, message: "Rate limited".to_string() },
            ApiError::Status { status: 400, message: "body failed validation".to_string() },
        ];

        for failure in failures {
            let creator = RecordingCreator::returning(Err(failure));

            let err = save_tab(&creator, &test_tab(), &test_config()).await.unwrap_err();

            assert_eq!(err, SaveError::SaveFailed);
            assert_eq!(err.to_string(), "Failed to save to Notion");
            assert_eq!(creator.calls.borrow().len(), 1);
        }
    }

    #[test]
    fn test_error_body_message() {
        let body: NotionErrorBody = serde_json::from_str(
            r#"{"object": "error", "status": 401, "code": "unauthorized",
                "message": "API token is invalid."}"#,
        )
        .unwrap();

        assert_eq!(body.into_message(), "API token is invalid.");
    }

    #[test]
    fn test_error_body_falls_back_to_code() {
        let body: NotionErrorBody = serde_json::from_str(r#"{"code": "rate_limited"}"#).unwrap();

        assert_eq!(body.into_message(), "rate_limited");
    }

    #[test]
    fn test_error_body_empty() {
        let body: NotionErrorBody = serde_json::from_str("{}").unwrap();

        assert_eq!(body.into_message(), "API Error");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Status { status: 404, message: "Could not find database".to_string() };

        assert_eq!(err.to_string(), "Notion returned 404: Could not find database");
    }

    #[test]
    fn test_default_endpoint() {
        let client = NotionClient::default();
        assert_eq!(client.endpoint, NOTION_API_URL);
    }
}
