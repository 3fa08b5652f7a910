use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct SearchBarProps {
    pub on_search: Callback<String>,
}

/// Free-text search box, emits its value on every input event
#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let oninput = {
        let callback = props.on_search.clone();
        Callback::from(move |e: InputEvent| {
            let input = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Some(input) = input {
                callback.emit(input.value());
            }
        })
    };

    html! {
        <div class="search">
            <input type="text" placeholder={Config::SEARCH_PLACEHOLDER} {oninput} />
        </div>
    }
}
