// Data Models
pub mod catalog;
pub mod content;
pub mod listeners;
pub mod selection;
pub mod tab_controller;

pub use catalog::{Catalog, ContentRef, PanelDescriptor};
pub use content::{ContentLibrary, Document};
pub use selection::{PanelSelector, SelectionController, SelectionError};
pub use tab_controller::TabController;
