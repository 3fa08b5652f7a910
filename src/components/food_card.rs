use yew::prelude::*;

use crate::models::food::FoodItem;
use crate::services::api::ApiConfig;

#[derive(Properties, PartialEq)]
pub struct FoodCardProps {
    pub food: FoodItem,
}

#[function_component(FoodCard)]
pub fn food_card(props: &FoodCardProps) -> Html {
    let food = &props.food;
    let image = food.image().map(|path| ApiConfig::default().image_url(path));

    html! {
        <div class="food-card">
            if let Some(src) = image {
                <div class="food-image">
                    <img {src} alt={food.name.clone()} />
                </div>
            }
            <div class="food-info">
                <h3>{&food.name}</h3>
                if let Some(text) = food.text() {
                    <p>{text}</p>
                }
                if let Some(price) = food.price_label() {
                    <span class="price">{price}</span>
                }
            </div>
        </div>
    }
}
