pub mod error;
pub mod food;
pub mod selection;
