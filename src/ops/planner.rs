use crate::model::task::{Task, TaskId};
use crate::ops::edit_session::{EditSession, EditState, SessionEvent};
use crate::ops::notify::SubscriptionId;
use crate::ops::task_store::{TaskEvent, TaskStore};

/// Everything a front end needs: the task list, the edit session and the
/// add-input buffer, behind the intents a user can trigger.
#[derive(Debug)]
pub struct Planner {
    store: TaskStore,
    session: EditSession,
    /// Text of the add-input line. Survives failed submits.
    add_buffer: String,
}

impl Planner {
    pub fn new(store: TaskStore, dark: bool) -> Self {
        Planner {
            store,
            session: EditSession::new(dark),
            add_buffer: String::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Read side
    // -----------------------------------------------------------------------

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn edit_state(&self) -> &EditState {
        self.session.state()
    }

    pub fn is_dark(&self) -> bool {
        self.session.is_dark()
    }

    pub fn add_buffer(&self) -> &str {
        &self.add_buffer
    }

    pub fn subscribe_tasks(
        &mut self,
        listener: impl FnMut(&TaskEvent) + 'static,
    ) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn subscribe_session(
        &mut self,
        listener: impl FnMut(&SessionEvent) + 'static,
    ) -> SubscriptionId {
        self.session.subscribe(listener)
    }

    /// Drop a listener registered with `subscribe_tasks`. Returns false when
    /// `id` was not registered there.
    pub fn unsubscribe_tasks(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn unsubscribe_session(&mut self, id: SubscriptionId) -> bool {
        self.session.unsubscribe(id)
    }

    // -----------------------------------------------------------------------
    // Intents
    // -----------------------------------------------------------------------

    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        self.store.add(text)
    }

    pub fn update_add_buffer(&mut self, text: &str) {
        self.add_buffer = text.to_string();
    }

    /// Add the buffered text as a task. The buffer is cleared only when a
    /// task was actually created; blank input is left in place.
    pub fn submit_add(&mut self) -> Option<TaskId> {
        let id = self.store.add(&self.add_buffer)?;
        self.add_buffer.clear();
        Some(id)
    }

    pub fn toggle(&mut self, id: TaskId) {
        self.store.toggle(id);
    }

    pub fn open_edit(&mut self, id: TaskId) {
        self.session.open(&self.store, id);
    }

    pub fn update_edit_buffer(&mut self, text: &str) {
        self.session.update_buffer(text);
    }

    /// Always leaves the session idle, whether or not the text was accepted
    pub fn commit_edit(&mut self) {
        self.session.commit(&mut self.store);
    }

    pub fn cancel_edit(&mut self) {
        self.session.cancel();
    }

    pub fn clear_completed(&mut self) {
        self.store.clear_completed();
    }

    pub fn toggle_dark_mode(&mut self) {
        self.session.toggle_dark_mode();
    }
}
