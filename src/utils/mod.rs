// Utilities
pub mod error;
pub mod text_display;
