//! Configuration module for MindMyMoney
//!
//! - Config directory resolution
//! - Presentation settings loaded once at start-up

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::Settings;
