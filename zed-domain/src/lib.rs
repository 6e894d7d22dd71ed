//! Domain layer for the ZED dashboard.
//!
//! This crate hosts the notification aggregation and prioritization
//! engine: given an authenticated identity, it queries four independent
//! record collections (upcoming events, due tasks, upcoming expenses,
//! goals nearing deadline) through injected capability ports, normalizes
//! each into a common notification shape, merges them into one
//! priority-ordered feed, and exposes read-state bookkeeping.

// Re-export core module
pub use zed_core as core;

pub mod error;
pub mod notifications;

pub use error::{DomainError, DomainResult};
pub use notifications::{
    FeedSnapshot, Notification, NotificationAggregator, NotificationFeedService,
    NotificationKind, NotificationPriority, PeriodicRefreshHandle,
};
pub use notifications::ports::{
    Clock, FetchWindow, IdentityProvider, RecordStore, StoreError, SystemClock,
};
pub use notifications::records::{
    EventRecord, ExpenseRecord, GoalRecord, GoalStatus, SourceRecord, TaskPriority, TaskRecord,
};
