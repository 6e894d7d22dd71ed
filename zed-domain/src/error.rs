//! Error module for the ZED domain layer.
//!
//! Failures of the notification feed are absorbed inside the refresh
//! pipeline and never surfaced to consumers; these types exist for the
//! internal plumbing between the ports and the aggregator, and for
//! construction-time failures.

use crate::notifications::ports::StoreError;
use thiserror::Error;
use zed_core::CoreError;

/// A general Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// The primary error type for the domain layer.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Core error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Record store error.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Other error.
    #[error("Domain error: {0}")]
    Other(String),
}
