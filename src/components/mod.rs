pub mod filter_buttons;
pub mod food_card;
pub mod search_bar;
pub mod search_result;
pub mod status;

pub use filter_buttons::FilterButtons;
pub use food_card::FoodCard;
pub use search_bar::SearchBar;
pub use search_result::SearchResult;
pub use status::Status;
