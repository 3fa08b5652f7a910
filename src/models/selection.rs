use super::food::{Category, FoodItem, Menu};
use std::rc::Rc;

/// What the result grid currently shows, plus the highlighted category button.
///
/// Every transition re-derives `visible` from the full menu. A search does
/// not narrow the active category and a category click discards the search.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Selection {
    visible: Option<Rc<Vec<FoodItem>>>,
    active: Category,
}

impl Selection {
    /// Initial selection after a successful load: everything visible.
    pub fn showing_all(menu: &Menu) -> Self {
        Self {
            visible: Some(Rc::new(menu.items().to_vec())),
            active: Category::All,
        }
    }

    pub fn select_category(&self, menu: &Menu, category: Category) -> Self {
        Self {
            visible: Some(Rc::new(menu.filter_by_category(category))),
            active: category,
        }
    }

    /// Applies a search query. The active category button stays highlighted
    /// but no longer constrains the results.
    pub fn search(&self, menu: &Menu, query: &str) -> Self {
        Self {
            visible: menu.search(query).map(Rc::new),
            active: self.active,
        }
    }

    /// `None` is the cleared-search state, distinct from an empty match.
    pub fn visible(&self) -> Option<&Rc<Vec<FoodItem>>> {
        self.visible.as_ref()
    }

    pub fn active(&self) -> Category {
        self.active
    }
}
