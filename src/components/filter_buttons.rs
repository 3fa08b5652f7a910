use yew::prelude::*;

use crate::models::food::Category;

#[derive(Properties, PartialEq)]
pub struct FilterButtonsProps {
    pub active: Category,
    pub on_select: Callback<Category>,
}

/// One button per meal-time category
#[function_component(FilterButtons)]
pub fn filter_buttons(props: &FilterButtonsProps) -> Html {
    html! {
        <div class="filter-container">
            {
                Category::all().iter().map(|&category| {
                    let onclick = {
                        let callback = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| callback.emit(category))
                    };
                    let class = classes!(
                        "filter-btn",
                        (category == props.active).then_some("active")
                    );
                    html! {
                        <button key={category.keyword()} {class} {onclick}>
                            {category.label()}
                        </button>
                    }
                }).collect::<Html>()
            }
        </div>
    }
}
