use std::rc::Rc;
use yew::prelude::*;

use super::food_card::FoodCard;
use crate::models::food::FoodItem;

#[derive(Properties, PartialEq)]
pub struct SearchResultProps {
    /// `None` means the search box was cleared: an empty grid with no
    /// "no results" notice.
    pub data: Option<Rc<Vec<FoodItem>>>,
}

#[function_component(SearchResult)]
pub fn search_result(props: &SearchResultProps) -> Html {
    let cards = match props.data.as_deref().map(Vec::as_slice) {
        None => html! {},
        Some([]) => html! {
            <p class="no-results">{"No matching food"}</p>
        },
        Some(foods) => foods
            .iter()
            .enumerate()
            .map(|(i, food)| html! { <FoodCard key={i} food={food.clone()} /> })
            .collect::<Html>(),
    };

    html! {
        <section class="food-container">
            <div class="food-cards">{cards}</div>
        </section>
    }
}
