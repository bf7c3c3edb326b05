use tracing::{debug, warn};

use crate::error::{TaskError, TextOrigin};
use crate::task::{Task, TaskId};

/// In-memory task list plus the single-slot editing marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    editing: Option<TaskId>,
    last_id: Option<TaskId>,
    revision: u64,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    pub fn editing(&self) -> Option<TaskId> {
        self.editing
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing == Some(id)
    }

    /// Bumped on every change that alters what the page shows.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task holding the trimmed `text`.
    ///
    /// `now_millis` seeds the id; `created_at` is the already formatted
    /// creation time shown next to the task.
    pub fn add(
        &mut self,
        text: &str,
        now_millis: i64,
        created_at: impl Into<String>,
    ) -> Result<TaskId, TaskError> {
        let text = text.trim();
        if text.is_empty() {
            warn!("rejected empty task text");
            return Err(TaskError::EmptyTaskText(TextOrigin::NewTask));
        }

        let id = TaskId::next_after(self.last_id, now_millis);
        self.last_id = Some(id);
        self.tasks
            .push(Task::new(id, text.to_string(), created_at.into()));
        self.touch();

        debug!(task_id = %id, total = self.tasks.len(), "added task");
        Ok(id)
    }

    /// Removes the task with `id`. Returns `false` when no such task exists.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;

        if removed {
            if self.editing == Some(id) {
                self.editing = None;
            }
            self.touch();
            debug!(task_id = %id, total = self.tasks.len(), "deleted task");
        } else {
            debug!(task_id = %id, "delete ignored; task not found");
        }
        removed
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            debug!(task_id = %id, "toggle ignored; task not found");
            return false;
        };

        task.completed = !task.completed;
        debug!(task_id = %id, completed = task.completed, "toggled task");
        self.touch();
        true
    }

    /// Puts `id` into edit mode; any other task being edited drops back
    /// to view mode without saving.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        if !self.contains(id) {
            debug!(task_id = %id, "begin edit ignored; task not found");
            return false;
        }

        match self.editing.replace(id) {
            Some(previous) if previous != id => {
                debug!(task_id = %previous, "abandoned edit");
            }
            _ => {}
        }
        debug!(task_id = %id, "editing task");
        self.touch();
        true
    }

    /// Commits `new_text` for `id`.
    ///
    /// Empty text leaves both the stored text and the editing marker alone.
    pub fn save_edit(&mut self, id: TaskId, new_text: &str) -> Result<bool, TaskError> {
        let text = new_text.trim();
        if text.is_empty() {
            warn!(task_id = %id, "rejected empty edit");
            return Err(TaskError::EmptyTaskText(TextOrigin::Edit));
        }

        let saved = match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.text = text.to_string();
                true
            }
            None => false,
        };
        self.editing = None;
        self.touch();

        debug!(task_id = %id, saved, "finished edit");
        Ok(saved)
    }

    pub fn cancel_edit(&mut self) -> bool {
        let cancelled = self.editing.take();
        if let Some(id) = cancelled {
            debug!(task_id = %id, "cancelled edit");
            self.touch();
        }
        cancelled.is_some()
    }
}
