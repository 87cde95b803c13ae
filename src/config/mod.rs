//! Configuration module for Dime
//!
//! - Data directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::DimePaths;
pub use settings::Settings;
