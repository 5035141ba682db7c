use tracing::debug;

use crate::model::task::{Task, TaskId, is_meaningful};
use crate::ops::notify::{Notifier, SubscriptionId};

/// Change emitted by [`TaskStore`] after an effective mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Added(TaskId),
    Toggled { id: TaskId, checked: bool },
    Edited(TaskId),
    Cleared { removed: Vec<TaskId> },
}

/// The ordered task list and every mutation on it.
///
/// Invalid input (blank text, unknown id) is a silent no-op: the sequence is
/// left untouched and no event is emitted.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Next id to hand out. Only ever grows, so ids freed by
    /// `clear_completed` are never reissued.
    next_id: u64,
    notifier: Notifier<TaskEvent>,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
            notifier: Notifier::default(),
        }
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store seeded with `texts`, in order. Blank entries are skipped
    /// the same way `add` skips them.
    pub fn with_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut store = Self::default();
        for text in texts {
            store.add(text.as_ref());
        }
        store
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    /// Snapshot of the list in display order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.checked).count()
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&TaskEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new unchecked task. Returns the assigned id, or `None` when
    /// `text` is blank and nothing was added.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if !is_meaningful(text) {
            return None;
        }
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(Task::new(id, text));
        debug!(task_id = %id, "task added");
        self.notifier.emit(&TaskEvent::Added(id));
        Some(id)
    }

    /// Flip the completion flag of `id`
    pub fn toggle(&mut self, id: TaskId) {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.checked = !task.checked;
        let checked = task.checked;
        debug!(task_id = %id, checked, "task toggled");
        self.notifier.emit(&TaskEvent::Toggled { id, checked });
    }

    /// Replace the text of `id`. Blank text discards the edit.
    pub fn edit_commit(&mut self, id: TaskId, text: &str) {
        if !is_meaningful(text) {
            return;
        }
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.text = text.to_string();
        debug!(task_id = %id, "task edited");
        self.notifier.emit(&TaskEvent::Edited(id));
    }

    /// Remove every checked task, keeping the others in order
    pub fn clear_completed(&mut self) {
        let removed: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|t| t.checked)
            .map(|t| t.id)
            .collect();
        if removed.is_empty() {
            return;
        }
        self.tasks.retain(|t| !t.checked);
        debug!(count = removed.len(), "completed tasks cleared");
        self.notifier.emit(&TaskEvent::Cleared { removed });
    }
}
