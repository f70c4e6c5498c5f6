/// Glue to the chrome.* APIs exposed by popup.js

use crate::storage::{SETTINGS_KEY, StoredSettings};
use crate::tab_data::{RawTab, TabInfo};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getCurrentWindowTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn openOptionsPage() -> Result<(), JsValue>;
}

pub async fn get_current_tabs() -> Result<Vec<TabInfo>, String> {
    let tabs_js = getCurrentWindowTabs()
        .await
        .map_err(|e| format!("Failed to get tabs: {:?}", e))?;

    let raw: Vec<RawTab> = serde_wasm_bindgen::from_value(tabs_js)
        .map_err(|e| format!("Failed to parse tabs: {:?}", e))?;

    Ok(raw.into_iter().map(TabInfo::from_raw).collect())
}

pub async fn load_settings() -> Result<StoredSettings, String> {
    let settings_js = getStorage(SETTINGS_KEY)
        .await
        .map_err(|e| format!("Failed to get storage: {:?}", e))?;

    if settings_js.is_null() || settings_js.is_undefined() {
        return Ok(StoredSettings::default());
    }

    serde_wasm_bindgen::from_value(settings_js)
        .map_err(|e| format!("Failed to parse settings: {:?}", e))
}

pub async fn save_settings(settings: &StoredSettings) -> Result<(), String> {
    let settings_js = serde_wasm_bindgen::to_value(settings)
        .map_err(|e| format!("Failed to serialize settings: {:?}", e))?;

    setStorage(SETTINGS_KEY, settings_js)
        .await
        .map_err(|e| format!("Failed to save storage: {:?}", e))
}

pub async fn open_options_page() -> Result<(), String> {
    openOptionsPage()
        .await
        .map_err(|e| format!("Failed to open settings: {:?}", e))
}
