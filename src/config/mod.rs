//! Configuration module — settings file and unencrypted preferences.

pub mod settings;
pub mod tags;

pub use settings::Settings;
pub use tags::TagLibrary;
