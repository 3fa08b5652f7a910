use crate::config::Config;
use crate::models::{
    error::AppError,
    food::{FoodItem, Menu},
};

// API CONFIGURATION
/// Configuration for the menu API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// The endpoint the food list is fetched from.
    pub fn menu_url(&self) -> &str {
        &self.base_url
    }

    /// Resolves an item's image path against the base URL.
    pub fn image_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| Config::BASE_URL.to_string()),
        }
    }
}

// MENU CLIENT
/// HTTP client for the food menu endpoint.
pub struct MenuClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl MenuClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the full food list. Single attempt, no retry.
    pub async fn fetch_menu(&self) -> Result<Menu, AppError> {
        let response = self
            .http
            .get(self.config.menu_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        parse_menu(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

/// Parses a response body into a `Menu`. The body must be a JSON array of
/// objects that each carry a string `name` and `type`.
pub fn parse_menu(body: &str) -> Result<Menu, AppError> {
    serde_json::from_str::<Vec<FoodItem>>(body)
        .map(Menu::new)
        .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
}

// CONVENIENCE FUNCTIONS
/// Fetches the menu using default configuration.
pub async fn fetch_menu() -> Result<Menu, AppError> {
    MenuClient::new()?.fetch_menu().await
}
