use yew::prelude::*;

use food_menu::components::{FilterButtons, SearchBar, SearchResult, Status};
use food_menu::config::Config;
use food_menu::hooks::use_menu::use_menu;

#[function_component(App)]
fn app() -> Html {
    let menu = use_menu();

    if menu.state.data().is_none() {
        return html! {
            <>
                <Status state={menu.state.clone()} />
                <style>{include_str!("style.css")}</style>
            </>
        };
    }

    html! {
        <>
            <div class="app-container">
                <header class="top-container">
                    <div class="logo">
                        <img src={Config::LOGO_PATH} alt="logo" />
                    </div>
                    <SearchBar on_search={menu.on_search.clone()} />
                </header>

                <FilterButtons
                    active={menu.selection.active()}
                    on_select={menu.on_category.clone()}
                />
            </div>

            <SearchResult data={menu.selection.visible().cloned()} />

            <style>
                {include_str!("style.css")}
            </style>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
