use crate::config::Config;
use crate::hooks::use_menu::DataState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DataState,
}

/// Replaces the whole view while loading or after a failed fetch.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    match &props.state {
        DataState::Loading => html! {
            <div class="status loading">{Config::LOADING_MESSAGE}</div>
        },
        DataState::Error(msg) => html! {
            <div class="status error">{msg}</div>
        },
        DataState::Loaded(_) => html! {},
    }
}
