use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use crate::io::storage::Storage;
use crate::model::task::{Priority, Task, TaskPatch};

/// Summary counts for the presentation surface's status row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCounts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Owns the canonical task collection and keeps the durable snapshot in
/// sync: every mutation is persisted before the next read can observe it.
///
/// The store never reorders the collection except prepend-on-create; display
/// order is the projector's job.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn Storage>,
}

impl TaskStore {
    /// Load the persisted snapshot. A missing slot yields an empty
    /// collection. A malformed payload is logged and dropped whole — no
    /// partial adoption — also yielding an empty collection.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let tasks = match storage.read() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Task>>(&payload) {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!("malformed task snapshot, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("could not read task snapshot, starting empty: {e}");
                Vec::new()
            }
        };
        TaskStore { tasks, storage }
    }

    /// The canonical collection in storage order (newest first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|t| t.completed).count();
        TaskCounts {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Prepend a new task and return its id. A title that is empty after
    /// trimming is rejected as a silent no-op (`None`).
    pub fn add(
        &mut self,
        title: &str,
        description: &str,
        due_date: Option<DateTime<Utc>>,
        priority: Priority,
    ) -> Option<Uuid> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let task = Task::new(title.to_string(), description.to_string(), due_date, priority);
        let id = task.id;
        self.tasks.insert(0, task);
        self.persist();
        Some(id)
    }

    /// Apply a partial overwrite to the task with the given id. An unknown
    /// id is a no-op, not an error.
    pub fn update(&mut self, id: Uuid, patch: &TaskPatch) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        apply_patch(task, patch);
        self.persist();
    }

    /// Delete the task with the given id. An unknown id is a no-op.
    pub fn remove(&mut self, id: Uuid) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Drop every completed task in one pass, preserving the relative order
    /// of the remainder.
    pub fn clear_completed(&mut self) {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        if self.tasks.len() != before {
            self.persist();
        }
    }

    /// Serialize the full collection into the durable slot. A failed write
    /// (e.g. quota exceeded) is a recoverable warning, never a crash; the
    /// in-memory collection stays authoritative for the session.
    fn persist(&self) {
        let payload = match serde_json::to_string_pretty(&self.tasks) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("could not serialize task snapshot: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(&payload) {
            warn!("could not persist task snapshot: {e}");
        }
    }
}

/// Field-level overwrite. A patched title that trims to empty is ignored so
/// a title can never become empty after creation.
fn apply_patch(task: &mut Task, patch: &TaskPatch) {
    if let Some(title) = &patch.title {
        let title = title.trim();
        if !title.is_empty() {
            task.title = title.to_string();
        }
    }
    if let Some(description) = &patch.description {
        task.description = description.clone();
    }
    if let Some(completed) = patch.completed {
        task.completed = completed;
    }
    if let Some(due_date) = patch.due_date {
        task.due_date = due_date;
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
}
