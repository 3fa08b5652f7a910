pub mod use_menu;
