//! Source-record model for the notification feed.
//!
//! These structs mirror the rows the hosted store returns for the four
//! queried collections. Only the fields the normalization rules consume
//! are modeled here; everything else stays with the store.

use crate::notifications::types::NotificationKind;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event starting within the fetch window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub title: String,
    pub starts_at: DateTime<Utc>,
}

/// Urgency the user assigned to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// An incomplete task due within the fetch window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: Uuid,
    pub title: String,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: TaskPriority,
}

/// An expense-type transaction dated within the fetch window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    /// Transaction amount; expenses are stored negative, the feed renders
    /// the absolute value.
    pub amount: f64,
    pub due_date: NaiveDate,
}

/// Lifecycle status of a goal, as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GoalStatus {
    #[default]
    InProgress,
    Completed,
    Abandoned,
}

/// A goal whose target date falls on or before the fetch horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: Uuid,
    pub title: String,
    pub current_value: f64,
    pub target_value: f64,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub status: GoalStatus,
}

/// Tagged union over the four source-record kinds.
///
/// Normalization dispatches on this variant, keeping the merge and sort
/// logic kind-agnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceRecord {
    Event(EventRecord),
    Task(TaskRecord),
    Expense(ExpenseRecord),
    Goal(GoalRecord),
}

impl SourceRecord {
    pub fn kind(&self) -> NotificationKind {
        match self {
            SourceRecord::Event(_) => NotificationKind::Event,
            SourceRecord::Task(_) => NotificationKind::Task,
            SourceRecord::Expense(_) => NotificationKind::Expense,
            SourceRecord::Goal(_) => NotificationKind::Goal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn task_priority_default_and_serde() {
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
        let serialized = serde_json::to_string(&TaskPriority::High).unwrap();
        assert_eq!(serialized, "\"high\"");
    }

    #[test]
    fn goal_status_default_and_serde() {
        assert_eq!(GoalStatus::default(), GoalStatus::InProgress);
        let serialized = serde_json::to_string(&GoalStatus::InProgress).unwrap();
        assert_eq!(serialized, "\"in-progress\"");
    }

    #[test]
    fn source_record_kind_dispatch() {
        let event = SourceRecord::Event(EventRecord {
            id: Uuid::new_v4(),
            title: "Standup".to_string(),
            starts_at: Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap(),
        });
        assert_eq!(event.kind(), NotificationKind::Event);

        let goal = SourceRecord::Goal(GoalRecord {
            id: Uuid::new_v4(),
            title: "Emergency fund".to_string(),
            current_value: 400.0,
            target_value: 1000.0,
            target_date: NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
            status: GoalStatus::InProgress,
        });
        assert_eq!(goal.kind(), NotificationKind::Goal);
    }

    #[test]
    fn task_record_serde_omits_absent_due_time() {
        let task = TaskRecord {
            id: Uuid::new_v4(),
            title: "Write report".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            due_time: None,
            priority: TaskPriority::High,
        };
        let serialized = serde_json::to_string(&task).unwrap();
        assert!(!serialized.contains("due_time"));
        let deserialized: TaskRecord = serde_json::from_str(&serialized).unwrap();
        assert_eq!(task, deserialized);
    }
}
