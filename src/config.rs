/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Endpoint serving the food list, also the prefix for card images
    pub const BASE_URL: &'static str = "http://localhost:9000";

    /// The only error text ever shown to the user
    pub const FETCH_ERROR_MESSAGE: &'static str = "UNABLE TO FETCH DATA!!";

    /// Shown while the initial fetch is in flight
    pub const LOADING_MESSAGE: &'static str = "loading...";

    pub const LOGO_PATH: &'static str = "logo.svg";

    pub const SEARCH_PLACEHOLDER: &'static str = "Search Food";
}
