//! Configuration management module

pub mod parser;
pub mod validation;

// Re-export main functionality
pub use parser::{ConfigParser, load_config, display_config_summary};
pub use validation::{ConfigValidator, validate_target_url};

// Re-export from models for convenience
pub use crate::models::Config;
