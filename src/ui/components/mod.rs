// UI Components
pub mod command_bar;
pub mod document_view;
pub mod header_bar;
pub mod kit_grid;
pub mod landing;
pub mod life_view;
pub mod panel_modal;
pub mod status_bar;
pub mod warning;

// Re-export components for convenience
pub use command_bar::CommandBar;
pub use header_bar::HeaderBar;
pub use kit_grid::KitGrid;
pub use landing::Landing;
pub use life_view::LifeView;
pub use panel_modal::{ModalContent, PanelModal};
pub use status_bar::StatusBar;
pub use warning::WarningScreen;
