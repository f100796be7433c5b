use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority. Declaration order is display order: high first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Fixed sort rank: high=0, medium=1, low=2
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned at creation
    pub id: Uuid,
    /// Title text, trimmed and never empty (enforced at the store boundary)
    pub title: String,
    /// Free-form body text, may be empty
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Insertion time, immutable after creation
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
}

impl Task {
    /// Create a fresh, uncompleted task. The caller has already trimmed and
    /// non-empty-checked `title`.
    pub fn new(
        title: String,
        description: String,
        due_date: Option<DateTime<Utc>>,
        priority: Priority,
    ) -> Self {
        Task {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            created_at: Utc::now(),
            due_date,
            priority,
        }
    }
}

/// Partial field-level overwrite applied by `TaskStore::update`.
///
/// `None` leaves a field untouched. `due_date` is doubly optional: the outer
/// `Option` selects the field for patching, the inner value is the new date
/// (`None` clears it). `id` and `created_at` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ranks_are_fixed() {
        assert_eq!(Priority::High.rank(), 0);
        assert_eq!(Priority::Medium.rank(), 1);
        assert_eq!(Priority::Low.rank(), 2);
    }

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""high""#);
        let p: Priority = serde_json::from_str(r#""low""#).unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn new_task_is_uncompleted() {
        let task = Task::new("Write docs".into(), String::new(), None, Priority::Medium);
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn new_tasks_get_distinct_ids() {
        let a = Task::new("a".into(), String::new(), None, Priority::Medium);
        let b = Task::new("b".into(), String::new(), None, Priority::Medium);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn serde_defaults_on_minimal_object() {
        // Older snapshots may lack the defaulted fields
        let json = format!(
            r#"{{"id":"{}","title":"t","created_at":"2025-05-14T12:00:00Z"}}"#,
            Uuid::new_v4()
        );
        let task: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task.title, "t");
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert!(task.due_date.is_none());
        assert_eq!(task.priority, Priority::Medium);
    }
}
