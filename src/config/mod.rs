//! Configuration and path management for bizbook

pub mod paths;
pub mod settings;

pub use paths::BizbookPaths;
pub use settings::Settings;
