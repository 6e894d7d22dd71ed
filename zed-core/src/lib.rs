//! Core infrastructure layer for the ZED dashboard.
//!
//! This crate provides the foundational utilities shared by the higher
//! layers of the dashboard: configuration loading and validation, logging
//! initialization, the core error taxonomy, and shared identifier types.

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig, NotificationFeedConfig};
pub use error::{ConfigError, CoreError};
pub use types::UserId;
