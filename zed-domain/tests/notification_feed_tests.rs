//! End-to-end tests of the notification feed pipeline against in-memory
//! fakes of the identity, store, and clock ports.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;
use zed_core::config::NotificationFeedConfig;
use zed_core::UserId;
use zed_domain::notifications::aggregator::{NotificationAggregator, NotificationFeedService};
use zed_domain::notifications::ports::{Clock, IdentityProvider, RecordStore, StoreError};
use zed_domain::notifications::records::{
    EventRecord, ExpenseRecord, GoalRecord, GoalStatus, TaskPriority, TaskRecord,
};
use zed_domain::notifications::types::NotificationPriority;

struct StaticIdentity(Option<UserId>);

#[async_trait]
impl IdentityProvider for StaticIdentity {
    async fn current_user(&self) -> Option<UserId> {
        self.0.clone()
    }
}

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A store fake that applies the same filtering contract the hosted store
/// would: bounds, ordering, and limit per query.
#[derive(Default)]
struct InMemoryStore {
    events: Vec<EventRecord>,
    tasks: Vec<TaskRecord>,
    expenses: Vec<ExpenseRecord>,
    goals: Vec<GoalRecord>,
    fail_tasks: bool,
    passes: AtomicUsize,
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn upcoming_events(
        &self,
        _user: &UserId,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<EventRecord>, StoreError> {
        self.passes.fetch_add(1, Ordering::SeqCst);
        let mut rows: Vec<EventRecord> = self
            .events
            .iter()
            .filter(|e| e.starts_at >= from && e.starts_at < until)
            .cloned()
            .collect();
        rows.sort_by_key(|e| e.starts_at);
        rows.truncate(limit);
        Ok(rows)
    }

    async fn due_tasks(
        &self,
        _user: &UserId,
        from: NaiveDate,
        until: NaiveDate,
        limit: usize,
    ) -> Result<Vec<TaskRecord>, StoreError> {
        if self.fail_tasks {
            return Err(StoreError::Unavailable("store offline".to_string()));
        }
        let mut rows: Vec<TaskRecord> = self
            .tasks
            .iter()
            .filter(|t| t.due_date >= from && t.due_date <= until)
            .cloned()
            .collect();
        rows.sort_by_key(|t| t.due_date);
        rows.truncate(limit);
        Ok(rows)
    }

    async fn upcoming_expenses(
        &self,
        _user: &UserId,
        from: NaiveDate,
        until: NaiveDate,
        limit: usize,
    ) -> Result<Vec<ExpenseRecord>, StoreError> {
        let mut rows: Vec<ExpenseRecord> = self
            .expenses
            .iter()
            .filter(|e| e.due_date >= from && e.due_date <= until)
            .cloned()
            .collect();
        rows.sort_by_key(|e| e.due_date);
        rows.truncate(limit);
        Ok(rows)
    }

    async fn goals_nearing_deadline(
        &self,
        _user: &UserId,
        deadline: NaiveDate,
        limit: usize,
    ) -> Result<Vec<GoalRecord>, StoreError> {
        let mut rows: Vec<GoalRecord> = self
            .goals
            .iter()
            .filter(|g| g.status == GoalStatus::InProgress && g.target_date <= deadline)
            .cloned()
            .collect();
        rows.sort_by_key(|g| g.target_date);
        rows.truncate(limit);
        Ok(rows)
    }
}

fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 10, 0, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn populated_store() -> InMemoryStore {
    InMemoryStore {
        events: vec![
            EventRecord {
                id: Uuid::new_v4(),
                title: "Dentist".to_string(),
                starts_at: Utc.with_ymd_and_hms(2026, 3, 10, 14, 0, 0).unwrap(),
            },
            // Outside the event window, must not surface.
            EventRecord {
                id: Uuid::new_v4(),
                title: "Next week planning".to_string(),
                starts_at: Utc.with_ymd_and_hms(2026, 3, 17, 9, 0, 0).unwrap(),
            },
        ],
        tasks: vec![
            TaskRecord {
                id: Uuid::new_v4(),
                title: "Pay rent".to_string(),
                due_date: date(2026, 3, 11),
                due_time: None,
                priority: TaskPriority::High,
            },
            // Due beyond tomorrow, must not surface.
            TaskRecord {
                id: Uuid::new_v4(),
                title: "Quarterly review".to_string(),
                due_date: date(2026, 3, 20),
                due_time: None,
                priority: TaskPriority::High,
            },
        ],
        expenses: vec![ExpenseRecord {
            id: Uuid::new_v4(),
            description: "Groceries".to_string(),
            amount: -49.90,
            due_date: date(2026, 3, 10),
        }],
        goals: vec![
            GoalRecord {
                id: Uuid::new_v4(),
                title: "Emergency fund".to_string(),
                current_value: 400.0,
                target_value: 1000.0,
                target_date: date(2026, 3, 13),
                status: GoalStatus::InProgress,
            },
            // Completed goals never qualify.
            GoalRecord {
                id: Uuid::new_v4(),
                title: "Done goal".to_string(),
                current_value: 10.0,
                target_value: 10.0,
                target_date: date(2026, 3, 12),
                status: GoalStatus::Completed,
            },
        ],
        ..Default::default()
    }
}

fn aggregator(store: InMemoryStore) -> Arc<NotificationAggregator> {
    Arc::new(NotificationAggregator::new(
        Arc::new(StaticIdentity(Some(UserId::new("user-1")))),
        Arc::new(store),
        Arc::new(FixedClock(test_now())),
        NotificationFeedConfig::default(),
    ))
}

#[tokio::test]
async fn full_pipeline_produces_windowed_ordered_feed() {
    let feed = aggregator(populated_store());
    feed.refresh().await;

    let snapshot = feed.snapshot().await;
    assert!(!snapshot.is_loading);

    let descriptions: Vec<&str> = snapshot
        .notifications
        .iter()
        .map(|n| n.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec![
            "Dentist",
            "Pay rent",
            "R$ 49,90 - Groceries",
            "Emergency fund (40% complete)",
        ]
    );
    assert_eq!(snapshot.unread_count, 4);
    assert_eq!(
        snapshot.notifications[3].priority,
        NotificationPriority::Low
    );
}

#[tokio::test]
async fn failed_kind_query_empties_the_whole_feed() {
    let mut store = populated_store();
    store.fail_tasks = true;

    let feed = aggregator(store);
    feed.refresh().await;

    let snapshot = feed.snapshot().await;
    assert!(snapshot.notifications.is_empty());
    assert_eq!(snapshot.unread_count, 0);
    assert!(!snapshot.is_loading);
}

#[tokio::test]
async fn anonymous_session_yields_empty_feed() {
    let feed = Arc::new(NotificationAggregator::new(
        Arc::new(StaticIdentity(None)),
        Arc::new(populated_store()),
        Arc::new(FixedClock(test_now())),
        NotificationFeedConfig::default(),
    ));
    feed.refresh().await;

    let snapshot = feed.snapshot().await;
    assert!(snapshot.notifications.is_empty());
    assert_eq!(snapshot.unread_count, 0);
}

#[tokio::test(start_paused = true)]
async fn periodic_refresh_rebuilds_feed_and_discards_read_state() {
    let feed = aggregator(populated_store());
    feed.refresh().await;
    feed.mark_all_as_read().await;
    assert_eq!(feed.unread_count().await, 0);

    let _handle = feed.spawn_periodic_refresh();

    // Just past one refresh interval (default 300s).
    tokio::time::sleep(std::time::Duration::from_secs(301)).await;
    tokio::task::yield_now().await;

    let snapshot = feed.snapshot().await;
    assert_eq!(snapshot.unread_count, snapshot.notifications.len());
    assert!(snapshot.notifications.iter().all(|n| !n.read));
}

#[tokio::test(start_paused = true)]
async fn cancelled_refresh_handle_stops_the_schedule() {
    let store = Arc::new(populated_store());
    let feed = Arc::new(NotificationAggregator::new(
        Arc::new(StaticIdentity(Some(UserId::new("user-1")))),
        store.clone(),
        Arc::new(FixedClock(test_now())),
        NotificationFeedConfig::default(),
    ));
    feed.refresh().await;
    assert_eq!(store.passes.load(Ordering::SeqCst), 1);

    let handle = feed.spawn_periodic_refresh();
    tokio::time::sleep(std::time::Duration::from_secs(301)).await;
    tokio::task::yield_now().await;
    assert_eq!(store.passes.load(Ordering::SeqCst), 2);

    handle.cancel();
    tokio::task::yield_now().await;

    tokio::time::sleep(std::time::Duration::from_secs(900)).await;
    assert_eq!(store.passes.load(Ordering::SeqCst), 2);
}
