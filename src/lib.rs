/// TabVault - Chrome Extension that saves open tabs to a Notion database
/// Built with Rust + WASM + Yew

mod client;
mod notion;
mod storage;
mod sync;
mod tab_data;
pub mod ui;

pub use client::{ApiError, NotionClient, PageCreator, SaveError, save_tab};
pub use notion::{CreatePageRequest, build_page_request, build_page_request_at};
pub use storage::StoredSettings;
pub use sync::{BATCH_SIZE, save_multiple_tabs};
pub use tab_data::{NotionConfig, SyncResult, TabInfo};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

/// Save `tabs` to the Notion database `database_id`.
///
/// Resolves with `{ successCount, failedCount }`; individual save failures
/// are only counted. Rejects only when `tabs` is not an array of tabs.
#[wasm_bindgen]
pub async fn synchronize(
    tabs: JsValue,
    token: String,
    database_id: String,
) -> Result<JsValue, JsValue> {
    let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(tabs)?;
    let config = NotionConfig { token, database_id };

    let result = save_multiple_tabs(&NotionClient::new(), &tabs, &config).await;

    Ok(serde_wasm_bindgen::to_value(&result)?)
}

// Start the Yew app for the popup
#[wasm_bindgen]
pub fn start_popup() {
    yew::Renderer::<ui::popup::App>::new().render();
}

// Start the Yew app for the settings page
#[wasm_bindgen]
pub fn start_options() {
    yew::Renderer::<ui::options::OptionsPage>::new().render();
}
