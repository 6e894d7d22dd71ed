//! Configuration Management for ZED Core.
//!
//! This module provides the structures and mechanisms for handling
//! configuration within the ZED core library.
//!
//! ## Key Components:
//!
//! - [`types`]: The configuration struct definitions, [`CoreConfig`],
//!   [`LoggingConfig`], and [`NotificationFeedConfig`]. These define the
//!   schema of the configuration.
//! - [`defaults`]: Functions returning default values for the individual
//!   settings, used when a configuration file is missing or incomplete.
//! - [`loader`]: The [`ConfigLoader`], which locates, reads, parses, and
//!   validates the TOML configuration file.
//!
//! ## Configuration Loading Process:
//!
//! 1. `ConfigLoader::load()` locates `zed/config.toml` in the user's
//!    configuration directory (or `ConfigLoader::load_from()` is given an
//!    explicit path).
//! 2. If the file does not exist, a default [`CoreConfig`] is produced.
//! 3. If the file is found, its TOML content is parsed into [`CoreConfig`];
//!    parse failures map to [`crate::error::ConfigError::ParseError`].
//! 4. The resulting config is validated (log level and format strings,
//!    non-zero refresh interval and query limits); failures map to
//!    [`crate::error::ConfigError::ValidationError`].

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig, NotificationFeedConfig};
