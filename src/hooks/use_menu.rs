use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::error::AppError;
use crate::models::food::{Category, Menu};
use crate::models::selection::Selection;
use crate::services::api::fetch_menu;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<Menu>),
    Error(String),
}

impl DataState {
    /// Collapses a fetch outcome into view state. Every failure cause shows
    /// the same static message.
    pub fn from_fetch(result: Result<Menu, AppError>) -> Self {
        match result {
            Ok(menu) => DataState::Loaded(Rc::new(menu)),
            Err(_) => DataState::Error(Config::FETCH_ERROR_MESSAGE.to_string()),
        }
    }

    /// Returns true if the state is loading
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    /// Returns the data if it is loaded
    pub fn data(&self) -> Option<&Rc<Menu>> {
        match self {
            DataState::Loaded(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DataState::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Handle returned by `use_menu` hook
#[derive(Clone, PartialEq)]
pub struct MenuHandle {
    pub state: DataState,
    pub selection: Selection,
    pub on_category: Callback<Category>,
    pub on_search: Callback<String>,
}

/// Loads the menu once on mount and exposes the filter/search actions.
#[hook]
pub fn use_menu() -> MenuHandle {
    let state = use_state(|| DataState::Loading);
    let selection = use_state(Selection::default);

    {
        let state = state.clone();
        let selection = selection.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            gloo::console::log!(&format!("Fetching menu from {}", Config::BASE_URL));

            spawn_local(async move {
                let result = fetch_menu().await;

                // View was torn down while the request was in flight
                if aborted_check.get() {
                    return;
                }

                match &result {
                    Ok(menu) => {
                        gloo::console::log!(&format!("Loaded {} food items", menu.len()));
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Menu fetch failed: {e}"));
                    }
                }

                let next = DataState::from_fetch(result);
                if let Some(menu) = next.data() {
                    selection.set(Selection::showing_all(menu));
                }
                state.set(next);
            });

            move || {
                aborted.set(true);
            }
        });
    }

    let on_category = {
        let state = state.clone();
        let selection = selection.clone();
        Callback::from(move |category: Category| {
            gloo::console::log!(&format!("Category selected: {category}"));
            if let Some(menu) = state.data() {
                selection.set(selection.select_category(menu, category));
            }
        })
    };

    let on_search = {
        let state = state.clone();
        let selection = selection.clone();
        Callback::from(move |query: String| {
            gloo::console::log!(&query);
            if let Some(menu) = state.data() {
                selection.set(selection.search(menu, &query));
            }
        })
    };

    MenuHandle {
        state: (*state).clone(),
        selection: (*selection).clone(),
        on_category,
        on_search,
    }
}
