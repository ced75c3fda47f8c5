// UI Layer
pub mod components;
pub mod layout;
pub mod theme;

// Re-export layout types for convenience
pub use layout::{LayoutManager, LayoutMode, Section};

// Re-export components
pub use components::{
    CommandBar, HeaderBar, KitGrid, Landing, LifeView, ModalContent, PanelModal, StatusBar,
    WarningScreen,
};

pub use theme::{Theme, ThemeManager};
