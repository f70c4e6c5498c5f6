/// Settings page: Notion token and database id

use crate::storage::StoredSettings;
use crate::tab_data::SaveStatus;
use crate::ui::bridge::{load_settings, save_settings};
use crate::ui::components::StatusMessage;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(OptionsPage)]
pub fn options_page() -> Html {
    let token = use_state(String::new);
    let database_id = use_state(String::new);
    let status = use_state(|| SaveStatus::Idle);
    let message = use_state(String::new);

    {
        let token = token.clone();
        let database_id = database_id.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load_settings().await {
                    Ok(settings) => {
                        token.set(settings.token);
                        database_id.set(settings.database_id);
                    }
                    Err(e) => log::error!("{}", e),
                }
            });
            || ()
        });
    }

    let on_token_input = {
        let token = token.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            token.set(input.value());
        })
    };

    let on_database_input = {
        let database_id = database_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            database_id.set(input.value());
        })
    };

    let on_save = {
        let token = token.clone();
        let database_id = database_id.clone();
        let status = status.clone();
        let message = message.clone();

        Callback::from(move |_| {
            let settings = StoredSettings::new((*token).clone(), (*database_id).clone());
            let status = status.clone();
            let message = message.clone();

            if !settings.is_configured() {
                status.set(SaveStatus::Error);
                message.set("❌ Token and database ID are both required".to_string());
                return;
            }

            status.set(SaveStatus::Saving);
            spawn_local(async move {
                match save_settings(&settings).await {
                    Ok(()) => {
                        status.set(SaveStatus::Success);
                        message.set("✅ Settings saved".to_string());
                    }
                    Err(e) => {
                        log::error!("{}", e);
                        status.set(SaveStatus::Error);
                        message.set("❌ Failed to save settings".to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="options">
            <h1 class="popup-title">{"TabVault Settings"}</h1>

            <label for="notion-token">{"Notion integration token"}</label>
            <input
                id="notion-token"
                type="password"
                value={(*token).clone()}
                oninput={on_token_input}
            />

            <label for="notion-database">{"Database ID"}</label>
            <input
                id="notion-database"
                type="text"
                value={(*database_id).clone()}
                oninput={on_database_input}
            />

            <Button
                onclick={on_save}
                disabled={*status == SaveStatus::Saving}
                variant={ButtonVariant::Primary}
            >
                {"Save"}
            </Button>

            <StatusMessage message={(*message).clone()} status={*status} />
        </div>
    }
}
