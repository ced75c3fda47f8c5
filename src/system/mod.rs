// System Layer
pub mod config;
pub mod kit_file;
pub mod logging;

pub use config::KitConfig;
pub use kit_file::{LandingInfo, StudentKit};
