/// Popup UI for TabVault

use crate::client::NotionClient;
use crate::sync::save_multiple_tabs;
use crate::tab_data::{LoadFailure, NotionConfig, SaveStatus, TabInfo};
use crate::ui::bridge::{get_current_tabs, load_settings, open_options_page};
use crate::ui::components::{StatusMessage, TabCount};
use gloo_timers::future::TimeoutFuture;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const MESSAGE_CLEAR_MS: u32 = 3000;

#[function_component(App)]
pub fn app() -> Html {
    let tabs = use_state(Vec::<TabInfo>::new);
    let config = use_state(|| None::<NotionConfig>);
    let status = use_state(|| SaveStatus::Idle);
    let message = use_state(String::new);

    // Load settings and current tabs on mount
    {
        let tabs = tabs.clone();
        let config = config.clone();
        let status = status.clone();
        let message = message.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let mut failure = None;

                match load_settings().await {
                    Ok(settings) => config.set(settings.to_config()),
                    Err(e) => {
                        log::error!("{}", e);
                        failure = Some(LoadFailure::Settings);
                    }
                }

                match get_current_tabs().await {
                    Ok(current) => tabs.set(current),
                    Err(e) => {
                        log::error!("{}", e);
                        failure = Some(LoadFailure::Tabs);
                    }
                }

                if let Some(failure) = failure {
                    status.set(SaveStatus::Error);
                    message.set(failure.message().to_string());
                }
            });
            || ()
        });
    }

    let on_save = {
        let tabs = tabs.clone();
        let config = config.clone();
        let status = status.clone();
        let message = message.clone();

        Callback::from(move |_| {
            let Some(config) = (*config).clone() else {
                message.set("❌ Notion settings required".to_string());
                return;
            };

            let tabs = (*tabs).clone();
            let status = status.clone();
            let message = message.clone();

            status.set(SaveStatus::Saving);
            message.set("Saving...".to_string());

            spawn_local(async move {
                let result = save_multiple_tabs(&NotionClient::new(), &tabs, &config).await;

                status.set(SaveStatus::Success);
                message.set(result.summary());

                TimeoutFuture::new(MESSAGE_CLEAR_MS).await;
                status.set(SaveStatus::Idle);
                message.set(String::new());
            });
        })
    };

    let on_settings = Callback::from(|_| {
        spawn_local(async move {
            if let Err(e) = open_options_page().await {
                log::error!("{}", e);
            }
        });
    });

    let is_saving = *status == SaveStatus::Saving;

    html! {
        <div class="app">
            <header>
                <h1 class="popup-title">{"TabVault"}</h1>
            </header>

            <div class="content">
                <TabCount count={tabs.len()} />

                if config.is_none() {
                    <Alert
                        r#type={AlertType::Warning}
                        title={"⚠️ Notion settings required"}
                        inline={true}
                    >
                    </Alert>
                }

                if is_saving {
                    <Spinner />
                }

                <Button
                    onclick={on_save}
                    disabled={is_saving || config.is_none()}
                    variant={ButtonVariant::Primary}
                    block={true}
                >
                    {if is_saving { "Saving..." } else { "💾 Save all tabs" }}
                </Button>

                <StatusMessage message={(*message).clone()} status={*status} />
            </div>

            <footer>
                <Button onclick={on_settings} variant={ButtonVariant::Secondary} block={true}>
                    {"⚙️ Settings"}
                </Button>
            </footer>
        </div>
    }
}
