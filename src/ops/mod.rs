pub mod edit_session;
pub mod notify;
pub mod planner;
pub mod task_store;

pub use edit_session::{EditSession, EditState, SessionEvent};
pub use planner::Planner;
pub use task_store::{TaskEvent, TaskStore};
