//! Error types for configuration validation.
//!
//! The engine itself is total over validated input: every price sequence is
//! accepted, and the only failure a caller can observe is a malformed
//! configuration, reported before any price is read.

use thiserror::Error;

/// Specific reason a configuration was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Transaction budget below zero
    #[error("max_transactions must be non-negative, got {0}")]
    NegativeBudget(i64),

    /// Fee below zero
    #[error("fee must be non-negative, got {0}")]
    NegativeFee(i64),

    /// Only zero or one cooldown day is supported
    #[error("cooldown_days must be 0 or 1, got {0}")]
    UnsupportedCooldown(u32),
}

/// Errors surfaced by the public entry points.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProfitError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
}
