//! Configuration module for the expense tracker
//!
//! - XDG-compliant path resolution
//! - User settings persistence, including the budget configuration

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
