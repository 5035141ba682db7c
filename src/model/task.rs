use std::fmt;

/// Stable identity of a task. Assigned by the store, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Display text, stored exactly as entered
    pub text: String,
    /// Completion flag
    pub checked: bool,
}

impl Task {
    /// Create an unchecked task
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            checked: false,
        }
    }

    /// The checkbox shown next to the task text
    pub fn checkbox(&self) -> &'static str {
        if self.checked { "[x]" } else { "[ ]" }
    }
}

/// True when `text` has something other than whitespace in it. A byte order
/// mark (U+FEFF) counts as whitespace here, though `char::is_whitespace`
/// disagrees.
///
/// Both `add` and edit commit validate against this; the text itself is kept
/// verbatim when it passes.
pub fn is_meaningful(text: &str) -> bool {
    !text
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_is_unchecked() {
        let task = Task::new(TaskId(7), "Buy milk");
        assert_eq!(task.id, TaskId(7));
        assert_eq!(task.text, "Buy milk");
        assert!(!task.checked);
        assert_eq!(task.checkbox(), "[ ]");
    }

    #[test]
    fn meaningful_text() {
        assert!(is_meaningful("x"));
        assert!(is_meaningful("  padded  "));
        assert!(!is_meaningful(""));
        assert!(!is_meaningful("   "));
        assert!(!is_meaningful("\t\n"));
        assert!(!is_meaningful("\u{FEFF}"));
        assert!(!is_meaningful("\u{FEFF} \u{00A0}"));
        assert!(is_meaningful("\u{FEFF}x"));
    }

    #[test]
    fn task_id_displays_as_number() {
        assert_eq!(TaskId(42).to_string(), "42");
    }
}
