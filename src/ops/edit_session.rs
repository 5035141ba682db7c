use tracing::debug;

use crate::model::task::TaskId;
use crate::ops::notify::{Notifier, SubscriptionId};
use crate::ops::task_store::TaskStore;

/// Whether a task is being edited, and with what pending text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        target: TaskId,
        /// Mirrors the modal's text field
        pending: String,
    },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn target(&self) -> Option<TaskId> {
        match self {
            EditState::Editing { target, .. } => Some(*target),
            EditState::Idle => None,
        }
    }

    pub fn pending_text(&self) -> Option<&str> {
        match self {
            EditState::Editing { pending, .. } => Some(pending),
            EditState::Idle => None,
        }
    }
}

/// Light/dark presentation flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DisplayMode {
    dark: bool,
}

/// Change emitted by [`EditSession`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Opened(TaskId),
    BufferChanged,
    /// Back to idle. `committed` is false for a cancel.
    Closed { committed: bool },
    DisplayModeChanged { dark: bool },
}

/// The modal edit lifecycle plus the display mode.
///
/// Holds at most one target id; opening a second edit replaces the first.
#[derive(Debug)]
pub struct EditSession {
    state: EditState,
    display: DisplayMode,
    notifier: Notifier<SessionEvent>,
}

impl EditSession {
    /// `dark` is the host's color preference at startup. It is read once;
    /// afterwards only `toggle_dark_mode` changes it.
    pub fn new(dark: bool) -> Self {
        EditSession {
            state: EditState::Idle,
            display: DisplayMode { dark },
            notifier: Notifier::default(),
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_dark(&self) -> bool {
        self.display.dark
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + 'static) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Start editing `id`, loading its current text. An unknown id still
    /// opens the modal, with an empty buffer.
    pub fn open(&mut self, store: &TaskStore, id: TaskId) {
        let pending = store.get(id).map(|t| t.text.clone()).unwrap_or_default();
        self.state = EditState::Editing {
            target: id,
            pending,
        };
        debug!(task_id = %id, "edit opened");
        self.notifier.emit(&SessionEvent::Opened(id));
    }

    /// Replace the pending text. Ignored while idle.
    pub fn update_buffer(&mut self, text: &str) {
        if let EditState::Editing { pending, .. } = &mut self.state {
            *pending = text.to_string();
            self.notifier.emit(&SessionEvent::BufferChanged);
        }
    }

    /// Write the pending text into the store and close. Blank text is
    /// discarded by the store but the session still closes.
    pub fn commit(&mut self, store: &mut TaskStore) {
        let EditState::Editing { target, pending } = std::mem::take(&mut self.state) else {
            return;
        };
        store.edit_commit(target, &pending);
        debug!(task_id = %target, "edit committed");
        self.notifier.emit(&SessionEvent::Closed { committed: true });
    }

    /// Close without touching the store
    pub fn cancel(&mut self) {
        let was_editing = self.state.is_editing();
        self.state = EditState::Idle;
        if was_editing {
            debug!("edit cancelled");
            self.notifier.emit(&SessionEvent::Closed { committed: false });
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.display.dark = !self.display.dark;
        let dark = self.display.dark;
        debug!(dark, "display mode toggled");
        self.notifier.emit(&SessionEvent::DisplayModeChanged { dark });
    }
}
