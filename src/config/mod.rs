//! Configuration module for Cashbook
//!
//! - Platform path resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::CashbookPaths;
pub use settings::Settings;
