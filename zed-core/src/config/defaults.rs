//! Default values for the ZED core configuration.
//!
//! Each function here backs a `#[serde(default = ...)]` attribute on the
//! structs in [`super::types`], so that a missing field in the TOML source
//! falls back to a sensible value.

/// Default minimum log level: `"info"`.
pub fn default_log_level() -> String {
    "info".to_string()
}

/// Default log output format: `"text"`.
pub fn default_log_format() -> String {
    "text".to_string()
}

/// Default interval between automatic notification feed refreshes: 5 minutes.
pub fn default_refresh_interval_secs() -> u64 {
    300
}

/// Default cap on upcoming events per aggregation pass.
pub fn default_event_limit() -> usize {
    5
}

/// Default cap on due tasks per aggregation pass.
pub fn default_task_limit() -> usize {
    5
}

/// Default cap on upcoming expenses per aggregation pass.
pub fn default_expense_limit() -> usize {
    5
}

/// Default cap on goals nearing their deadline per aggregation pass.
pub fn default_goal_limit() -> usize {
    3
}

/// Default look-ahead window for expense records, in days.
pub fn default_expense_window_days() -> u64 {
    7
}

/// Default look-ahead window for goal deadlines, in days.
pub fn default_goal_window_days() -> u64 {
    7
}
