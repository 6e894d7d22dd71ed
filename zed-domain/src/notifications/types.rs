use serde::{Deserialize, Serialize};
use std::fmt;

// --- Enums ---

/// The record kind a notification was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationKind {
    Event,
    Task,
    Expense,
    Goal,
    /// Reserved for notifications the dashboard raises itself rather than
    /// deriving from a store record.
    System,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Event => "event",
            NotificationKind::Task => "task",
            NotificationKind::Expense => "expense",
            NotificationKind::Goal => "goal",
            NotificationKind::System => "system",
        }
    }

    /// The destination view associated with this kind, if any.
    pub fn link(&self) -> Option<&'static str> {
        match self {
            NotificationKind::Event => Some("/events"),
            NotificationKind::Task => Some("/tasks"),
            NotificationKind::Expense => Some("/finances"),
            NotificationKind::Goal => Some("/goals"),
            NotificationKind::System => None,
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Priority tier of a notification, determining its position in the feed.
///
/// Lower rank sorts first: `High` (0) before `Medium` (1) before `Low` (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotificationPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl NotificationPriority {
    /// Sort rank of the tier; used as the (stable) feed sort key.
    pub fn rank(&self) -> u8 {
        match self {
            NotificationPriority::High => 0,
            NotificationPriority::Medium => 1,
            NotificationPriority::Low => 2,
        }
    }
}

/// A normalized, prioritized representation of an upcoming record
/// surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Derived deterministically as `{kind}-{source_record_id}`, so
    /// re-fetching the same record yields the same notification identity.
    pub id: String,
    pub kind: NotificationKind,
    /// Kind-specific fixed label.
    pub title: String,
    /// Human-readable summary derived from the source record.
    pub description: String,
    /// Relative-time string computed against the aggregation clock.
    pub time_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub priority: NotificationPriority,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        source_id: impl fmt::Display,
        title: impl Into<String>,
        description: impl Into<String>,
        time_label: impl Into<String>,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            id: format!("{}-{}", kind, source_id),
            kind,
            title: title.into(),
            description: description.into(),
            time_label: time_label.into(),
            link: kind.link().map(str::to_string),
            priority,
            read: false,
        }
    }

    pub fn mark_as_read(&mut self) {
        self.read = true;
    }
}

/// Point-in-time view of the feed handed to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSnapshot {
    /// The merged, priority-ordered notification list.
    pub notifications: Vec<Notification>,
    /// Count of notifications with `read == false`.
    pub unread_count: usize,
    /// True only until the very first aggregation pass completes.
    pub is_loading: bool,
}

impl FeedSnapshot {
    /// An empty feed still awaiting its first aggregation pass.
    pub fn initial() -> Self {
        Self {
            notifications: Vec::new(),
            unread_count: 0,
            is_loading: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_kind_serde_and_links() {
        let kind = NotificationKind::Expense;
        let serialized = serde_json::to_string(&kind).unwrap();
        assert_eq!(serialized, "\"expense\"");
        let deserialized: NotificationKind = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, kind);

        assert_eq!(NotificationKind::Event.link(), Some("/events"));
        assert_eq!(NotificationKind::System.link(), None);
    }

    #[test]
    fn notification_priority_default_rank_and_serde() {
        assert_eq!(NotificationPriority::default(), NotificationPriority::Medium);
        assert!(NotificationPriority::High.rank() < NotificationPriority::Medium.rank());
        assert!(NotificationPriority::Medium.rank() < NotificationPriority::Low.rank());

        let serialized = serde_json::to_string(&NotificationPriority::High).unwrap();
        assert_eq!(serialized, "\"high\"");
    }

    #[test]
    fn notification_new_derives_identity_and_link() {
        let notif = Notification::new(
            NotificationKind::Task,
            "3f2c",
            "✅ Task",
            "Write report",
            "Due today!",
            NotificationPriority::High,
        );
        assert_eq!(notif.id, "task-3f2c");
        assert_eq!(notif.link.as_deref(), Some("/tasks"));
        assert!(!notif.read);
    }

    #[test]
    fn notification_mark_as_read() {
        let mut notif = Notification::new(
            NotificationKind::Event,
            "1",
            "📅 Event",
            "Standup",
            "Today at 09:00",
            NotificationPriority::High,
        );
        notif.mark_as_read();
        assert!(notif.read);
    }

    #[test]
    fn notification_serde_round_trip() {
        let notif = Notification::new(
            NotificationKind::Goal,
            "g1",
            "🎯 Goal",
            "Emergency fund (40% complete)",
            "Due in 3 days",
            NotificationPriority::Low,
        );
        let serialized = serde_json::to_string(&notif).unwrap();
        let deserialized: Notification = serde_json::from_str(&serialized).unwrap();
        assert_eq!(notif, deserialized);
    }

    #[test]
    fn feed_snapshot_initial() {
        let snapshot = FeedSnapshot::initial();
        assert!(snapshot.notifications.is_empty());
        assert_eq!(snapshot.unread_count, 0);
        assert!(snapshot.is_loading);
    }
}
