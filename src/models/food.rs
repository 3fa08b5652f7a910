use super::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One menu entry as served by the backend.
///
/// Only `name` and `type` drive filtering; every other field is kept as-is so
/// the card renderer can pick out what it knows about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    #[serde(rename = "type")]
    pub food_type: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoodItem {
    pub fn new(name: impl Into<String>, food_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            food_type: food_type.into(),
            extra: Map::new(),
        }
    }

    /// Adds an opaque field, mostly useful when building fixtures.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Free-text description, if the server sent one.
    pub fn text(&self) -> Option<&str> {
        self.extra.get("text").and_then(Value::as_str)
    }

    /// Image path relative to the API base URL.
    pub fn image(&self) -> Option<&str> {
        self.extra.get("image").and_then(Value::as_str)
    }

    /// Price formatted for display. Accepts either a JSON number or string.
    pub fn price_label(&self) -> Option<String> {
        match self.extra.get("price")? {
            Value::Number(n) => Some(format!("${n}")),
            Value::String(s) if !s.is_empty() => Some(format!("${s}")),
            _ => None,
        }
    }

    fn type_contains(&self, keyword: &str) -> bool {
        self.food_type.to_lowercase().contains(keyword)
    }

    fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Meal-time categories offered as filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    All,
    Breakfast,
    Lunch,
    Dinner,
}

impl Category {
    /// Lowercase keyword matched against `FoodItem::food_type`.
    pub fn keyword(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
        }
    }

    /// All categories in button order.
    pub fn all() -> &'static [Category] {
        &[
            Category::All,
            Category::Breakfast,
            Category::Lunch,
            Category::Dinner,
        ]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

impl std::str::FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Category::All),
            "breakfast" => Ok(Category::Breakfast),
            "lunch" => Ok(Category::Lunch),
            "dinner" => Ok(Category::Dinner),
            _ => Err(AppError::ConfigError(format!("Invalid category: {s}"))),
        }
    }
}

/// The full, immutable list fetched at startup.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Menu {
    items: Vec<FoodItem>,
}

impl Menu {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose type contains the category keyword, case-insensitively.
    /// `Category::All` returns every item.
    pub fn filter_by_category(&self, category: Category) -> Vec<FoodItem> {
        match category {
            Category::All => self.items.clone(),
            other => self
                .items
                .iter()
                .filter(|food| food.type_contains(other.keyword()))
                .cloned()
                .collect(),
        }
    }

    /// Items whose name contains `query`, case-insensitively.
    ///
    /// An empty query yields `None` rather than the full or an empty list.
    pub fn search(&self, query: &str) -> Option<Vec<FoodItem>> {
        if query.is_empty() {
            return None;
        }

        let needle = query.to_lowercase();
        Some(
            self.items
                .iter()
                .filter(|food| food.name_contains(&needle))
                .cloned()
                .collect(),
        )
    }
}

impl From<Vec<FoodItem>> for Menu {
    fn from(items: Vec<FoodItem>) -> Self {
        Self::new(items)
    }
}
