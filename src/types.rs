//! Type definitions and aliases

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use crate::error::{AppError, Result};

/// What happens to probes still in flight when a round's deadline fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AbandonPolicy {
    /// Abort the orphaned probe tasks
    #[default]
    Cancel,
    /// Let orphaned probes run to completion and discard their results
    Detach,
}

impl AbandonPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AbandonPolicy::Cancel => "cancel",
            AbandonPolicy::Detach => "detach",
        }
    }
}

/// Classification of a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Every probe reported before the deadline
    Complete,
    /// The deadline fired before every probe reported
    TimedOut,
}
