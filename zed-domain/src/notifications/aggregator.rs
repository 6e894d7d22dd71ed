//! The notification feed service.
//!
//! One aggregation pass fetches the four record kinds concurrently,
//! normalizes them in a fixed kind order (events, tasks, expenses,
//! goals), and stable-sorts the merged list by priority rank. The full
//! list is rebuilt from scratch on every pass: read state set between
//! refreshes is not preserved across them.
//!
//! Failures never reach the consumer. A missing identity or any failed
//! kind-query degrades the whole pass to an empty feed with a logged
//! error; there is no partial-success path, no retry, and no staleness
//! guard between overlapping passes (last write wins).

use crate::error::DomainResult;
use crate::notifications::normalize::normalize;
use crate::notifications::ports::{Clock, FetchWindow, IdentityProvider, RecordStore, SystemClock};
use crate::notifications::records::SourceRecord;
use crate::notifications::types::{FeedSnapshot, Notification};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use zed_core::config::NotificationFeedConfig;

/// Consumer-facing interface of the notification feed.
#[async_trait]
pub trait NotificationFeedService: Send + Sync {
    /// Re-runs the full four-way fetch-and-merge pipeline, replacing the
    /// entire list and resetting every `read` flag.
    ///
    /// Never fails from the consumer's point of view: a missing identity
    /// or an unreachable store yields an empty feed and a logged error.
    async fn refresh(&self);

    /// Sets `read = true` for the notification with the given id.
    ///
    /// A no-op when the id is not present in the current list. The unread
    /// count decreases at most once per notification and never below zero.
    async fn mark_as_read(&self, id: &str);

    /// Sets `read = true` on every notification and the unread count to zero.
    async fn mark_all_as_read(&self);

    /// Returns the current feed state: ordered list, unread count, and
    /// whether the first aggregation pass is still pending.
    async fn snapshot(&self) -> FeedSnapshot;
}

/// Default implementation of the notification feed.
///
/// All collaborators arrive through constructor injection; the service
/// reads no ambient globals.
pub struct NotificationAggregator {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
    config: NotificationFeedConfig,
    state: RwLock<FeedSnapshot>,
    closed: AtomicBool,
}

impl NotificationAggregator {
    /// Creates a new aggregator with an explicit clock.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
        config: NotificationFeedConfig,
    ) -> Self {
        Self {
            identity,
            store,
            clock,
            config,
            state: RwLock::new(FeedSnapshot::initial()),
            closed: AtomicBool::new(false),
        }
    }

    /// Creates a new aggregator driven by the wall clock.
    pub fn with_system_clock(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn RecordStore>,
        config: NotificationFeedConfig,
    ) -> Self {
        Self::new(identity, store, Arc::new(SystemClock), config)
    }

    /// Current ordered notification list.
    pub async fn notifications(&self) -> Vec<Notification> {
        self.state.read().await.notifications.clone()
    }

    /// Current unread count.
    pub async fn unread_count(&self) -> usize {
        self.state.read().await.unread_count
    }

    /// True until the first aggregation pass has completed.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading
    }

    /// Marks the feed as torn down.
    ///
    /// A closed feed no longer fetches and never applies results of a
    /// pass that is still in flight, so nothing acts on a disposed
    /// consumer.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Spawns the recurring background refresh at the configured interval.
    ///
    /// The returned handle owns the task; dropping it (or calling
    /// [`PeriodicRefreshHandle::cancel`]) aborts the schedule. The
    /// immediate first tick is skipped, initial load is an explicit
    /// `refresh()` call.
    pub fn spawn_periodic_refresh(self: &Arc<Self>) -> PeriodicRefreshHandle {
        let feed = Arc::clone(self);
        let period = Duration::from_secs(self.config.refresh_interval_secs);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if feed.is_closed() {
                    break;
                }
                debug!("Periodic notification refresh tick");
                feed.refresh().await;
            }
        });
        info!(
            interval_secs = self.config.refresh_interval_secs,
            "Periodic notification refresh scheduled"
        );
        PeriodicRefreshHandle { handle }
    }

    /// One aggregation pass: identity, concurrent four-way fetch,
    /// normalization in kind order, stable priority sort.
    async fn run_pass(&self) -> DomainResult<Vec<Notification>> {
        let Some(user) = self.identity.current_user().await else {
            debug!("No authenticated identity; notification feed is empty");
            return Ok(Vec::new());
        };

        let window = FetchWindow::at(self.clock.now(), &self.config);
        let (events, tasks, expenses, goals) = tokio::join!(
            self.store.upcoming_events(
                &user,
                window.events_from,
                window.events_until,
                self.config.event_limit,
            ),
            self.store
                .due_tasks(&user, window.today, window.tomorrow, self.config.task_limit),
            self.store.upcoming_expenses(
                &user,
                window.today,
                window.expense_horizon,
                self.config.expense_limit,
            ),
            self.store
                .goals_nearing_deadline(&user, window.goal_horizon, self.config.goal_limit),
        );
        let (events, tasks, expenses, goals) = (events?, tasks?, expenses?, goals?);

        let mut items =
            Vec::with_capacity(events.len() + tasks.len() + expenses.len() + goals.len());
        items.extend(
            events
                .into_iter()
                .map(|r| normalize(SourceRecord::Event(r), window.today)),
        );
        items.extend(
            tasks
                .into_iter()
                .map(|r| normalize(SourceRecord::Task(r), window.today)),
        );
        items.extend(
            expenses
                .into_iter()
                .map(|r| normalize(SourceRecord::Expense(r), window.today)),
        );
        items.extend(
            goals
                .into_iter()
                .map(|r| normalize(SourceRecord::Goal(r), window.today)),
        );

        // Stable sort: ties keep the events/tasks/expenses/goals fetch order.
        items.sort_by_key(|n| n.priority.rank());

        debug!(count = items.len(), user = %user, "Aggregation pass complete");
        Ok(items)
    }

    /// Replaces the feed with the result of a pass, unless the feed was
    /// closed while the pass was in flight.
    async fn apply(&self, items: Vec<Notification>) {
        if self.is_closed() {
            debug!("Feed closed while a pass was in flight; discarding results");
            return;
        }
        let mut state = self.state.write().await;
        state.unread_count = items.len();
        state.notifications = items;
        state.is_loading = false;
    }
}

#[async_trait]
impl NotificationFeedService for NotificationAggregator {
    async fn refresh(&self) {
        if self.is_closed() {
            return;
        }
        let items = match self.run_pass().await {
            Ok(items) => items,
            Err(e) => {
                error!("Notification refresh failed, degrading to an empty feed: {}", e);
                Vec::new()
            }
        };
        self.apply(items).await;
    }

    async fn mark_as_read(&self, id: &str) {
        let mut guard = self.state.write().await;
        let state = &mut *guard;
        if let Some(notification) = state.notifications.iter_mut().find(|n| n.id == id) {
            if !notification.read {
                notification.mark_as_read();
                state.unread_count = state.unread_count.saturating_sub(1);
            }
        }
    }

    async fn mark_all_as_read(&self) {
        let mut state = self.state.write().await;
        for notification in &mut state.notifications {
            notification.mark_as_read();
        }
        state.unread_count = 0;
    }

    async fn snapshot(&self) -> FeedSnapshot {
        self.state.read().await.clone()
    }
}

/// Owner handle of the recurring background refresh task.
///
/// The schedule is aborted when the handle is cancelled or dropped.
pub struct PeriodicRefreshHandle {
    handle: JoinHandle<()>,
}

impl PeriodicRefreshHandle {
    pub fn cancel(self) {
        self.handle.abort();
    }
}

impl Drop for PeriodicRefreshHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
