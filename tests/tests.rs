#[cfg(test)]
mod tests {
    use food_menu::config::Config;
    use food_menu::hooks::use_menu::DataState;
    use food_menu::models::{
        error::AppError,
        food::{Category, FoodItem, Menu},
        selection::Selection,
    };
    use food_menu::services::api::parse_menu;
    use std::rc::Rc;

    // Helper function to create a small mixed menu
    fn create_test_menu() -> Menu {
        Menu::new(vec![
            FoodItem::new("Idli", "Breakfast").with_field("price", 3),
            FoodItem::new("Biryani", "Lunch").with_field("price", 8),
            FoodItem::new("Butter Chicken", "Dinner"),
            FoodItem::new("Poha", "breakfast"),
            FoodItem::new("Veg Thali", "Lunch/Dinner"),
            FoodItem::new("Chicken Biryani", "DINNER"),
        ])
    }

    fn names(items: &[FoodItem]) -> Vec<&str> {
        items.iter().map(|f| f.name.as_str()).collect()
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_data_display() {
        let error = AppError::DataError("Invalid data".to_string());
        assert_eq!(error.to_string(), "Data error: Invalid data");
    }

    // ===== FoodItem Model Tests =====

    #[test]
    fn test_food_item_deserialization_keeps_extra_fields() {
        let json = r#"{
            "name": "Idli",
            "type": "Breakfast",
            "text": "Steamed rice cakes",
            "price": 3,
            "image": "/images/idli.png"
        }"#;

        let food: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(food.name, "Idli");
        assert_eq!(food.food_type, "Breakfast");
        assert_eq!(food.text(), Some("Steamed rice cakes"));
        assert_eq!(food.image(), Some("/images/idli.png"));
        assert_eq!(food.price_label().as_deref(), Some("$3"));
    }

    #[test]
    fn test_food_item_requires_name_and_type() {
        let missing_type: Result<FoodItem, _> = serde_json::from_str(r#"{"name": "Idli"}"#);
        assert!(missing_type.is_err());
    }

    // ===== Category Filter Tests =====

    #[test]
    fn test_filter_all_restores_items() {
        let menu = create_test_menu();
        let selection = Selection::showing_all(&menu)
            .select_category(&menu, Category::Lunch)
            .select_category(&menu, Category::All);

        assert_eq!(selection.visible().unwrap().as_slice(), menu.items());
        assert_eq!(selection.active(), Category::All);
    }

    #[test]
    fn test_filter_matches_exactly_the_type_substring() {
        let menu = create_test_menu();

        for &category in Category::all().iter().filter(|c| **c != Category::All) {
            let filtered = menu.filter_by_category(category);
            let expected: Vec<_> = menu
                .items()
                .iter()
                .filter(|f| f.food_type.to_lowercase().contains(category.keyword()))
                .cloned()
                .collect();

            assert_eq!(filtered, expected, "category {category}");
        }
    }

    #[test]
    fn test_filter_dinner_includes_combined_types() {
        let menu = create_test_menu();
        let dinner = menu.filter_by_category(Category::Dinner);
        assert_eq!(
            names(&dinner),
            ["Butter Chicken", "Veg Thali", "Chicken Biryani"]
        );
    }

    #[test]
    fn test_filter_with_no_matches_is_empty() {
        let menu = Menu::new(vec![FoodItem::new("Idli", "Breakfast")]);
        let selection = Selection::showing_all(&menu).select_category(&menu, Category::Dinner);

        assert_eq!(selection.visible().map(|v| v.len()), Some(0));
        assert_eq!(selection.active(), Category::Dinner);
    }

    // ===== Search Tests =====

    #[test]
    fn test_search_matches_name_case_insensitively() {
        let menu = create_test_menu();
        let found = menu.search("BIRYANI").unwrap();
        assert_eq!(names(&found), ["Biryani", "Chicken Biryani"]);
    }

    #[test]
    fn test_search_exactly_the_name_substring() {
        let menu = create_test_menu();

        for query in ["i", "chicken", "a", "xyz", " "] {
            let found = menu.search(query).unwrap();
            let expected: Vec<_> = menu
                .items()
                .iter()
                .filter(|f| f.name.to_lowercase().contains(&query.to_lowercase()))
                .cloned()
                .collect();

            assert_eq!(found, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_empty_search_is_unset_sentinel() {
        let menu = create_test_menu();
        let selection = Selection::showing_all(&menu).search(&menu, "");

        // Neither the full list nor an empty list
        assert!(selection.visible().is_none());
    }

    #[test]
    fn test_search_with_no_matches_is_empty_not_unset() {
        let menu = create_test_menu();
        let selection = Selection::showing_all(&menu).search(&menu, "pizza");

        assert_eq!(selection.visible().map(|v| v.len()), Some(0));
    }

    // ===== Scenario Tests =====

    #[test]
    fn test_breakfast_then_search_ignores_category() {
        let menu = Menu::new(vec![
            FoodItem::new("Idli", "Breakfast"),
            FoodItem::new("Biryani", "Lunch"),
        ]);

        let selection = Selection::showing_all(&menu).select_category(&menu, Category::Breakfast);
        assert_eq!(names(selection.visible().unwrap()), ["Idli"]);

        let selection = selection.search(&menu, "bir");
        assert_eq!(names(selection.visible().unwrap()), ["Biryani"]);
    }

    #[test]
    fn test_fetch_failure_shows_static_message() {
        let state = DataState::from_fetch(Err(AppError::ApiError(
            "Network error: connection refused".to_string(),
        )));

        assert_eq!(state.error(), Some("UNABLE TO FETCH DATA!!"));
        assert_eq!(state.error(), Some(Config::FETCH_ERROR_MESSAGE));
        assert!(!state.is_loading());
        assert!(state.data().is_none());
    }

    #[test]
    fn test_bad_body_shows_static_message() {
        let state = DataState::from_fetch(parse_menu("not json"));
        assert_eq!(state, DataState::Error(Config::FETCH_ERROR_MESSAGE.to_string()));
    }

    #[test]
    fn test_empty_array_loads_empty_menu() {
        let state = DataState::from_fetch(parse_menu("[]"));

        assert!(!state.is_loading());
        assert!(state.error().is_none());

        let menu = state.data().unwrap();
        assert!(menu.is_empty());

        let selection = Selection::showing_all(menu);
        assert_eq!(selection.visible().map(|v| v.len()), Some(0));
    }

    // ===== DataState Tests =====

    #[test]
    fn test_data_state_data_extraction() {
        let menu = Rc::new(create_test_menu());
        let loaded = DataState::Loaded(menu.clone());

        assert!(loaded.data().is_some());
        assert_eq!(loaded.data().unwrap(), &menu);

        let loading = DataState::Loading;
        assert!(loading.is_loading());
        assert!(loading.data().is_none());

        let error = DataState::Error("Test error".to_string());
        assert!(error.data().is_none());
    }

    #[test]
    fn test_data_state_equality() {
        assert_eq!(DataState::Loading, DataState::Loading);

        let state1 = DataState::Loaded(Rc::new(create_test_menu()));
        let state2 = DataState::Loaded(Rc::new(create_test_menu()));
        assert_eq!(state1, state2);
    }
}
