//! Notification aggregation for the ZED dashboard.
//!
//! This module turns four heterogeneous record kinds (events, tasks,
//! expenses, goals) into a single priority-ordered notification feed:
//!
//! - [`types`]: the common [`Notification`] shape and the feed snapshot
//!   exposed to consumers.
//! - [`records`]: the source-record model as fetched from the hosted
//!   store, plus the tagged [`SourceRecord`](records::SourceRecord) union.
//! - [`ports`]: the capability traits the engine depends on (identity
//!   provider, record store, clock) and the per-pass fetch window.
//! - [`normalize`]: the kind-indexed normalization rules mapping source
//!   records to notifications.
//! - [`aggregator`]: the feed service itself: concurrent fetch, merge,
//!   stable priority sort, read-state bookkeeping, periodic refresh.

pub mod aggregator;
pub mod normalize;
pub mod ports;
pub mod records;
pub mod types;

pub use aggregator::{NotificationAggregator, NotificationFeedService, PeriodicRefreshHandle};
pub use types::{FeedSnapshot, Notification, NotificationKind, NotificationPriority};
