//! Configuration Data Structures for ZED Core.
//!
//! This module defines the structures used to represent the configuration
//! of the ZED dashboard's core and domain layers. They are populated by
//! deserializing a TOML configuration file.
//!
//! # Key Structs
//! - [`CoreConfig`]: The root configuration structure.
//! - [`LoggingConfig`]: Configuration of the logging subsystem.
//! - [`NotificationFeedConfig`]: Tuning knobs of the notification feed.
//!
//! The structs use `serde` for deserialization, apply default values for
//! absent fields via [`super::defaults`], and reject unknown fields.

use super::defaults;
use serde::Deserialize;

/// Configuration settings for the logging subsystem.
///
/// Used by [`crate::logging`] to initialize the global `tracing`
/// subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// The format for console log messages.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            format: defaults::default_log_format(),
        }
    }
}

/// Tuning parameters of the notification aggregation feed.
///
/// These values bound the four record-kind queries of an aggregation pass
/// and control the cadence of the automatic background refresh.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotificationFeedConfig {
    /// Seconds between automatic feed refreshes. Must be non-zero.
    #[serde(default = "defaults::default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    /// Maximum upcoming events fetched per pass.
    #[serde(default = "defaults::default_event_limit")]
    pub event_limit: usize,
    /// Maximum due tasks fetched per pass.
    #[serde(default = "defaults::default_task_limit")]
    pub task_limit: usize,
    /// Maximum upcoming expenses fetched per pass.
    #[serde(default = "defaults::default_expense_limit")]
    pub expense_limit: usize,
    /// Maximum goals nearing deadline fetched per pass.
    #[serde(default = "defaults::default_goal_limit")]
    pub goal_limit: usize,
    /// Days ahead of today an expense record still qualifies for the feed.
    #[serde(default = "defaults::default_expense_window_days")]
    pub expense_window_days: u64,
    /// Days ahead of today a goal deadline still qualifies for the feed.
    #[serde(default = "defaults::default_goal_window_days")]
    pub goal_window_days: u64,
}

impl Default for NotificationFeedConfig {
    fn default() -> Self {
        Self {
            refresh_interval_secs: defaults::default_refresh_interval_secs(),
            event_limit: defaults::default_event_limit(),
            task_limit: defaults::default_task_limit(),
            expense_limit: defaults::default_expense_limit(),
            goal_limit: defaults::default_goal_limit(),
            expense_window_days: defaults::default_expense_window_days(),
            goal_window_days: defaults::default_goal_window_days(),
        }
    }
}

/// Root configuration structure for the ZED dashboard core.
///
/// Aggregates all core configuration sections. Designed to be deserialized
/// from a TOML file, with defaults applied for missing sections.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Logging subsystem configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Notification feed configuration.
    #[serde(default)]
    pub notifications: NotificationFeedConfig,
}
