use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, TaskId, UiConfig};
use crate::ops::{Planner, TaskEvent, TaskStore};

use super::input;
use super::render;
use super::theme::Theme;

/// Where keystrokes go when no edit modal is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    AddInput,
}

/// Current interaction mode, derived from focus and the edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    Add,
    Edit,
}

/// Main application state
pub struct App {
    pub planner: Planner,
    pub focus: Focus,
    /// Index into the task list
    pub cursor: usize,
    pub should_quit: bool,
    pub show_key_hints: bool,
    light_theme: Theme,
    dark_theme: Theme,
    /// Set by change listeners, cleared by the event loop after drawing
    redraw: Rc<Cell<bool>>,
    /// Last notable change, shown in the status row
    status: Rc<RefCell<Option<String>>>,
}

impl App {
    pub fn new(mut planner: Planner, ui: &UiConfig) -> Self {
        let redraw = Rc::new(Cell::new(true));
        let status = Rc::new(RefCell::new(None));

        {
            let redraw = Rc::clone(&redraw);
            let status = Rc::clone(&status);
            planner.subscribe_tasks(move |event| {
                redraw.set(true);
                if let Some(message) = task_event_message(event) {
                    *status.borrow_mut() = Some(message);
                }
            });
        }
        {
            let redraw = Rc::clone(&redraw);
            planner.subscribe_session(move |_| redraw.set(true));
        }

        App {
            planner,
            focus: Focus::List,
            cursor: 0,
            should_quit: false,
            show_key_hints: ui.show_key_hints,
            light_theme: Theme::for_mode(false, ui),
            dark_theme: Theme::for_mode(true, ui),
            redraw,
            status,
        }
    }

    pub fn from_config(config: &Config, dark: bool) -> Self {
        let store = TaskStore::with_texts(&config.tasks.initial);
        App::new(Planner::new(store, dark), &config.ui)
    }

    pub fn mode(&self) -> Mode {
        if self.planner.edit_state().is_editing() {
            Mode::Edit
        } else if self.focus == Focus::AddInput {
            Mode::Add
        } else {
            Mode::Navigate
        }
    }

    /// Theme for the current display mode
    pub fn theme(&self) -> &Theme {
        if self.planner.is_dark() {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// Id of the task under the cursor
    pub fn cursor_task_id(&self) -> Option<TaskId> {
        self.planner.tasks().get(self.cursor).map(|t| t.id)
    }

    /// Keep the cursor on a real row after the list shrank
    pub fn clamp_cursor(&mut self) {
        let len = self.planner.tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor_to(&mut self, id: TaskId) {
        if let Some(idx) = self.planner.tasks().iter().position(|t| t.id == id) {
            self.cursor = idx;
        }
    }

    pub fn status_message(&self) -> Option<String> {
        self.status.borrow().clone()
    }

    pub fn clear_status(&mut self) {
        *self.status.borrow_mut() = None;
    }

    pub fn request_redraw(&self) {
        self.redraw.set(true);
    }

    /// True once per pending redraw
    pub fn take_redraw(&self) -> bool {
        self.redraw.replace(false)
    }
}

/// Status-row text for list changes that aren't visible by themselves
pub fn task_event_message(event: &TaskEvent) -> Option<String> {
    match event {
        TaskEvent::Added(id) => Some(format!("added task {}", id)),
        TaskEvent::Cleared { removed } if removed.len() == 1 => {
            Some("cleared 1 completed task".to_string())
        }
        TaskEvent::Cleared { removed } => {
            Some(format!("cleared {} completed tasks", removed.len()))
        }
        TaskEvent::Toggled { .. } | TaskEvent::Edited(_) => None,
    }
}

/// Run the TUI application
pub fn run(config: &Config, dark: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config, dark);
    info!(tasks = app.planner.tasks().len(), dark, "starting planner");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!(tasks = app.planner.tasks().len(), "planner closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| render::render(frame, app))?;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                    // Cursor and focus moves don't go through the planner
                    app.request_redraw();
                }
                Event::Resize(_, _) => app.request_redraw(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
