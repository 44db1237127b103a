//! Main TUI application state and logic

use crate::config::{COMPLETION_BANNER, SPEED_STEP_MS};
use crate::playback::TickOutcome;
use crate::session::Session;
use crate::snapshot::ArraySnapshot;
use crate::tracer::AlgorithmKind;
use crate::ui::panes::{
    render_bars_pane, render_dataset_pane, render_idle_tree_pane, render_info_pane,
    render_status_bar, render_tree_pane, InfoRenderData, StatusRenderData,
};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// What the user is currently typing into the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    AddValue,
    Target,
}

impl InputMode {
    fn prompt(self) -> &'static str {
        match self {
            InputMode::Normal => "",
            InputMode::AddValue => "Add value",
            InputMode::Target => "Search value",
        }
    }
}

/// The main application state
pub struct App {
    /// Dataset, algorithm and playback
    pub session: Session,

    /// Source of randomized datasets
    pub rng: StdRng,

    /// Index of the dataset element targeted by `d`
    pub dataset_cursor: usize,

    pub input_mode: InputMode,
    pub input_buffer: String,

    /// Whether the complexity table is shown in the info pane
    pub show_complexity: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports an error
    pub status_is_error: bool,

    /// When playback last reached the end (drives the completion banner)
    pub completed_at: Option<Instant>,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around `session`
    pub fn new(session: Session, rng: StdRng) -> Self {
        App {
            session,
            rng,
            dataset_cursor: 0,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            show_complexity: true,
            should_quit: false,
            status_message: String::from("Ready! Press Enter to run"),
            status_is_error: false,
            completed_at: None,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick(Instant::now());

            // Use poll with timeout so playback keeps advancing without input
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance playback if due and expire the completion banner
    pub fn on_tick(&mut self, now: Instant) {
        match self.session.playback_mut().poll(now) {
            TickOutcome::Completed(_) => {
                self.completed_at = Some(now);
                self.set_status(format!("{} complete", self.session.algorithm().label()));
            }
            TickOutcome::Advanced(_) => {
                self.set_status("Playing...");
            }
            TickOutcome::Idle => {}
        }

        if self
            .completed_at
            .is_some_and(|at| now.duration_since(at) >= COMPLETION_BANNER)
        {
            self.completed_at = None;
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Main area plus status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Visualization (left) | Info (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        // Visualization (top) | Dataset strip (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[0]);

        let algorithm = self.session.algorithm();
        let playback = self.session.playback();

        if algorithm.kind() == AlgorithmKind::Tree {
            match playback.current_tree() {
                Some(snapshot) => render_tree_pane(frame, left_rows[0], snapshot),
                None => render_idle_tree_pane(
                    frame,
                    left_rows[0],
                    self.session.dataset().values(),
                ),
            }
        } else {
            let title = algorithm.label();
            match playback.current_array() {
                Some(snapshot) => render_bars_pane(frame, left_rows[0], title, snapshot),
                None => {
                    let idle = ArraySnapshot {
                        array: self.session.dataset().values().to_vec(),
                        ..Default::default()
                    };
                    render_bars_pane(frame, left_rows[0], title, &idle);
                }
            }
        }

        render_dataset_pane(
            frame,
            left_rows[1],
            self.session.dataset().values(),
            self.dataset_cursor,
        );

        render_info_pane(
            frame,
            columns[1],
            InfoRenderData {
                algorithm,
                playback,
                target: self.session.target(),
                show_complexity: self.show_complexity,
            },
        );

        let input = (self.input_mode != InputMode::Normal)
            .then(|| (self.input_mode.prompt(), self.input_buffer.as_str()));

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                current_step: playback.current_index(),
                total_steps: playback.has_trace().then(|| playback.len()),
                is_playing: playback.is_running(),
                is_complete: self.completed_at.is_some(),
                is_error: self.status_is_error,
                input,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.input_mode != InputMode::Normal {
            self.handle_input_key(key);
            return;
        }

        let now = Instant::now();
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Enter => self.run_algorithm(now),
            KeyCode::Char(' ') => {
                // Toggle playback (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = now;
                    self.toggle_pause(now);
                }
            }
            KeyCode::Backspace => {
                self.reset();
                self.set_status("Reset");
            }
            KeyCode::Left => {
                if self.session.playback_mut().step_backward() {
                    self.set_status("Stepped backward");
                } else {
                    self.set_status("Already at the first step");
                }
            }
            KeyCode::Right => {
                if self.session.playback_mut().step_forward() {
                    self.set_status("Stepped forward");
                } else {
                    self.set_status("No more steps");
                }
            }
            KeyCode::Home => {
                self.session.playback_mut().jump_to_start();
                self.set_status("Jumped to start");
            }
            KeyCode::End => {
                self.session.playback_mut().jump_to_end();
                self.set_status("Jumped to end");
            }
            KeyCode::Tab => {
                let next = self.session.algorithm().next();
                self.change_algorithm(next);
            }
            KeyCode::BackTab => {
                let prev = self.session.algorithm().prev();
                self.change_algorithm(prev);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                // Faster playback means a shorter delay
                let current = self.session.playback().speed_ms();
                let ms = self
                    .session
                    .playback_mut()
                    .set_speed(current.saturating_sub(SPEED_STEP_MS));
                self.set_status(format!("Speed {} ms", ms));
            }
            KeyCode::Char('-') => {
                let current = self.session.playback().speed_ms();
                let ms = self
                    .session
                    .playback_mut()
                    .set_speed(current + SPEED_STEP_MS);
                self.set_status(format!("Speed {} ms", ms));
            }
            KeyCode::Char('c') => {
                self.show_complexity = !self.show_complexity;
            }
            KeyCode::Char('a') => {
                self.input_mode = InputMode::AddValue;
                self.input_buffer.clear();
            }
            KeyCode::Char('/') => {
                self.input_mode = InputMode::Target;
                self.input_buffer = self.session.target().to_string();
            }
            KeyCode::Char('[') => {
                self.dataset_cursor = self.dataset_cursor.saturating_sub(1);
            }
            KeyCode::Char(']') => {
                let last = self.session.dataset().len().saturating_sub(1);
                self.dataset_cursor = (self.dataset_cursor + 1).min(last);
            }
            KeyCode::Char('d') => self.remove_selected(),
            KeyCode::Char('r') => {
                self.session.randomize(&mut self.rng);
                self.after_dataset_edit();
                self.set_status(format!("Randomized: {}", self.session.dataset()));
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
                self.set_status("Cancelled");
            }
            KeyCode::Enter => {
                let mode = self.input_mode;
                let text = std::mem::take(&mut self.input_buffer);
                self.input_mode = InputMode::Normal;
                self.commit_input(mode, &text);
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn commit_input(&mut self, mode: InputMode, text: &str) {
        match mode {
            InputMode::AddValue => match crate::tracer::search::parse_target(text) {
                Ok(value) => {
                    self.session.add(value);
                    self.after_dataset_edit();
                    self.set_status(format!("Added {}", value));
                }
                Err(e) => self.set_error(e.to_string()),
            },
            InputMode::Target => {
                self.session.set_target(text.trim());
                self.after_dataset_edit();
                self.set_status(format!("Search value set to '{}'", text.trim()));
            }
            InputMode::Normal => {}
        }
    }

    fn run_algorithm(&mut self, now: Instant) {
        self.completed_at = None;
        match self.session.run(now) {
            Ok(len) => {
                debug!(steps = len, "trace loaded");
                self.set_status(format!(
                    "Running {} ({} steps)",
                    self.session.algorithm().label(),
                    len
                ));
            }
            Err(e) => {
                debug!(error = %e, "run rejected");
                self.set_error(e.to_string());
            }
        }
    }

    fn toggle_pause(&mut self, now: Instant) {
        let playback = self.session.playback_mut();
        if playback.is_running() {
            playback.pause();
            self.set_status("Paused");
        } else if playback.resume(now) {
            self.set_status("Playing...");
        } else if !playback.has_trace() {
            self.run_algorithm(now);
        } else {
            self.set_status("Playback complete");
        }
    }

    fn change_algorithm(&mut self, algorithm: crate::tracer::Algorithm) {
        self.session.set_algorithm(algorithm);
        self.completed_at = None;
        self.set_status(format!("Selected {}", algorithm.label()));
    }

    fn remove_selected(&mut self) {
        match self.session.remove_at(self.dataset_cursor) {
            Ok(value) => {
                self.after_dataset_edit();
                self.set_status(format!("Removed {}", value));
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn after_dataset_edit(&mut self) {
        self.completed_at = None;
        let last = self.session.dataset().len().saturating_sub(1);
        self.dataset_cursor = self.dataset_cursor.min(last);
    }

    /// Drop the trace and any completion banner
    pub fn reset(&mut self) {
        self.session.reset();
        self.completed_at = None;
    }
}
