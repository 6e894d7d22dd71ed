//! Normalization rules: one function per record kind, mapping a source
//! record to the common [`Notification`] shape.
//!
//! Priority assignment, time labels, currency formatting, and progress
//! computation all live here; the aggregator itself stays kind-agnostic.

use crate::notifications::records::{
    EventRecord, ExpenseRecord, GoalRecord, SourceRecord, TaskPriority, TaskRecord,
};
use crate::notifications::types::{Notification, NotificationKind, NotificationPriority};
use chrono::NaiveDate;

const EVENT_TITLE: &str = "📅 Event";
const TASK_TITLE: &str = "✅ Task";
const EXPENSE_TITLE: &str = "💰 Expense";
const GOAL_TITLE: &str = "🎯 Goal";

/// Position of a date relative to the aggregation day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelativeDay {
    Today,
    Tomorrow,
    Other,
}

fn relative_day(date: NaiveDate, today: NaiveDate) -> RelativeDay {
    match (date - today).num_days() {
        0 => RelativeDay::Today,
        1 => RelativeDay::Tomorrow,
        _ => RelativeDay::Other,
    }
}

/// Normalizes one source record into a notification, with `today` as the
/// reference date for all relative labels and urgency rules.
pub fn normalize(record: SourceRecord, today: NaiveDate) -> Notification {
    match record {
        SourceRecord::Event(event) => normalize_event(event, today),
        SourceRecord::Task(task) => normalize_task(task, today),
        SourceRecord::Expense(expense) => normalize_expense(expense, today),
        SourceRecord::Goal(goal) => normalize_goal(goal, today),
    }
}

/// Events are `High` when they happen today, `Medium` otherwise.
fn normalize_event(event: EventRecord, today: NaiveDate) -> Notification {
    let day = relative_day(event.starts_at.date_naive(), today);
    let time = event.starts_at.format("%H:%M");
    let time_label = match day {
        RelativeDay::Today => format!("Today at {}", time),
        RelativeDay::Tomorrow => format!("Tomorrow at {}", time),
        RelativeDay::Other => format!("{} at {}", event.starts_at.format("%d/%m/%Y"), time),
    };
    let priority = match day {
        RelativeDay::Today => NotificationPriority::High,
        _ => NotificationPriority::Medium,
    };
    Notification::new(
        NotificationKind::Event,
        event.id,
        EVENT_TITLE,
        event.title,
        time_label,
        priority,
    )
}

/// Tasks inherit `High` from their own priority field, `Medium` otherwise.
fn normalize_task(task: TaskRecord, today: NaiveDate) -> Notification {
    let day = relative_day(task.due_date, today);
    let time_label = match (day, task.due_time) {
        (RelativeDay::Today, Some(time)) => format!("Due today at {}", time.format("%H:%M")),
        (RelativeDay::Today, None) => "Due today!".to_string(),
        (RelativeDay::Tomorrow, Some(time)) => format!("Due tomorrow at {}", time.format("%H:%M")),
        (RelativeDay::Tomorrow, None) => "Due tomorrow".to_string(),
        (RelativeDay::Other, Some(time)) => format!(
            "Due {} at {}",
            task.due_date.format("%d/%m/%Y"),
            time.format("%H:%M")
        ),
        (RelativeDay::Other, None) => format!("Due {}", task.due_date.format("%d/%m/%Y")),
    };
    let priority = match task.priority {
        TaskPriority::High => NotificationPriority::High,
        _ => NotificationPriority::Medium,
    };
    Notification::new(
        NotificationKind::Task,
        task.id,
        TASK_TITLE,
        task.title,
        time_label,
        priority,
    )
}

/// Expenses are `High` when due today or tomorrow, `Medium` otherwise.
/// The description carries the formatted amount ahead of the stored text.
fn normalize_expense(expense: ExpenseRecord, today: NaiveDate) -> Notification {
    let day = relative_day(expense.due_date, today);
    let time_label = match day {
        RelativeDay::Today => "Today".to_string(),
        RelativeDay::Tomorrow => "Tomorrow".to_string(),
        RelativeDay::Other => expense.due_date.format("%d/%m/%Y").to_string(),
    };
    let priority = match day {
        RelativeDay::Today | RelativeDay::Tomorrow => NotificationPriority::High,
        RelativeDay::Other => NotificationPriority::Medium,
    };
    let description = format!(
        "{} - {}",
        format_currency(expense.amount),
        expense.description
    );
    Notification::new(
        NotificationKind::Expense,
        expense.id,
        EXPENSE_TITLE,
        description,
        time_label,
        priority,
    )
}

/// Goals are `High` only on their target day, `Low` otherwise.
fn normalize_goal(goal: GoalRecord, today: NaiveDate) -> Notification {
    let days_left = (goal.target_date - today).num_days();
    let time_label = match days_left {
        d if d < 0 => "Overdue".to_string(),
        0 => "Due today!".to_string(),
        1 => "Due tomorrow".to_string(),
        d => format!("Due in {} days", d),
    };
    let priority = if days_left == 0 {
        NotificationPriority::High
    } else {
        NotificationPriority::Low
    };
    let progress = progress_percent(goal.current_value, goal.target_value);
    let description = format!("{} ({}% complete)", goal.title, progress);
    Notification::new(
        NotificationKind::Goal,
        goal.id,
        GOAL_TITLE,
        description,
        time_label,
        priority,
    )
}

/// Formats a monetary amount as Brazilian real: absolute value, two
/// decimals, `.` thousands grouping, `,` decimal separator.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("R$ {},{:02}", grouped, frac)
}

/// Progress percentage of a goal, rounded; a non-positive target yields 0.
pub fn progress_percent(current: f64, target: f64) -> u32 {
    if target <= 0.0 {
        return 0;
    }
    ((current / target) * 100.0).round().max(0.0) as u32
}
