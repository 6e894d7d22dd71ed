//! Capability ports of the notification feed.
//!
//! The aggregator reads nothing from ambient globals: the authenticated
//! identity, the record store, and the current time all arrive through
//! the traits defined here, which makes the engine trivially testable
//! with fakes.

use crate::notifications::records::{EventRecord, ExpenseRecord, GoalRecord, TaskRecord};
use crate::notifications::types::NotificationKind;
use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};
use thiserror::Error;
use zed_core::config::NotificationFeedConfig;
use zed_core::UserId;

/// Error type of the record-store port.
///
/// Absorbed inside the refresh pipeline; never reaches feed consumers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached at all.
    #[error("Store unreachable: {0}")]
    Unavailable(String),

    /// A single kind-query was rejected or failed mid-flight.
    #[error("Query for {kind} records failed: {message}")]
    Query {
        kind: NotificationKind,
        message: String,
    },
}

/// Source of the current authenticated identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The identity all queries are scoped to, or `None` when no session
    /// is active.
    async fn current_user(&self) -> Option<UserId>;
}

/// Source of the current moment for all relative-time computation.
///
/// Injected so aggregation passes are deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Time bounds of one aggregation pass, derived from the clock and the
/// feed configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchWindow {
    pub now: DateTime<Utc>,
    pub today: NaiveDate,
    pub tomorrow: NaiveDate,
    /// Start of today; lower bound of the event query.
    pub events_from: DateTime<Utc>,
    /// Start of the day after tomorrow; exclusive upper bound of the
    /// event query ("end of tomorrow").
    pub events_until: DateTime<Utc>,
    /// Last qualifying date for expense records.
    pub expense_horizon: NaiveDate,
    /// Last qualifying date for goal deadlines.
    pub goal_horizon: NaiveDate,
}

impl FetchWindow {
    pub fn at(now: DateTime<Utc>, config: &NotificationFeedConfig) -> Self {
        let today = now.date_naive();
        let tomorrow = today + Days::new(1);
        Self {
            now,
            today,
            tomorrow,
            events_from: today.and_time(NaiveTime::MIN).and_utc(),
            events_until: (today + Days::new(2)).and_time(NaiveTime::MIN).and_utc(),
            expense_horizon: today + Days::new(config.expense_window_days),
            goal_horizon: today + Days::new(config.goal_window_days),
        }
    }
}

/// Read-only query capability over the hosted store.
///
/// Each method is one filtered, sorted, limited query scoped to a user.
/// Filtering, ordering, and capping are store-side contracts: results
/// arrive ascending by their natural date and never exceed `limit`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Events starting within `[from, until)`, ascending by start time.
    async fn upcoming_events(
        &self,
        user: &UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<EventRecord>, StoreError>;

    /// Incomplete tasks due within `[from, until]` (date-only), ascending
    /// by due date.
    async fn due_tasks(
        &self,
        user: &UserId,
        from: NaiveDate,
        until: NaiveDate,
        limit: usize,
    ) -> Result<Vec<TaskRecord>, StoreError>;

    /// Expense transactions dated within `[from, until]`, ascending by date.
    async fn upcoming_expenses(
        &self,
        user: &UserId,
        from: NaiveDate,
        until: NaiveDate,
        limit: usize,
    ) -> Result<Vec<ExpenseRecord>, StoreError>;

    /// In-progress goals with a target date on or before `deadline`,
    /// ascending by target date.
    async fn goals_nearing_deadline(
        &self,
        user: &UserId,
        deadline: NaiveDate,
        limit: usize,
    ) -> Result<Vec<GoalRecord>, StoreError>;
}
