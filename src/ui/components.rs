/// Reusable UI components

use crate::tab_data::SaveStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabCountProps {
    pub count: usize,
}

#[function_component(TabCount)]
pub fn tab_count(props: &TabCountProps) -> Html {
    html! {
        <div class="tab-count">
            {"📊 Open tabs: "}
            <strong>{props.count}</strong>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub message: String,
    #[prop_or(SaveStatus::Idle)]
    pub status: SaveStatus,
}

#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    if props.message.is_empty() {
        return html! {};
    }

    html! {
        <div class={classes!("message", props.status.css_class())}>
            {&props.message}
        </div>
    }
}
