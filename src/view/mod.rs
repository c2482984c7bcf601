//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod styles;
mod surface;
mod toolbar;

pub use help::render_help_overlay;
pub use layout::{calculate_areas, render_layout, ScreenAreas};
pub use styles::{ColorConfig, SurfaceStyles};
pub use surface::{Oval, SurfaceView};
pub use toolbar::Toolbar;

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, KeyAction};
use crate::state::{
    load_state_file, save_state_file, Controller, Factor, HostEvent, HostWindow, SavedState,
    SurfaceGeometry,
};
use constants::{DOTS_PER_COLUMN, DOTS_PER_ROW, POLL_INTERVAL_MS};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    controller: Controller,
    toolbar: Toolbar,
    key_bindings: KeyBindings,
    styles: SurfaceStyles,
    help_visible: bool,
    /// Areas from the last layout pass (for mouse hit-testing)
    areas: ScreenAreas,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(styles: SurfaceStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Self::with_terminal(terminal, KeyBindings::default(), styles)
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if self.toolbar.take_redraw() {
                    self.draw()?;
                }
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app around an existing terminal and attach the controller.
    fn with_terminal(
        terminal: Terminal<B>,
        key_bindings: KeyBindings,
        styles: SurfaceStyles,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        let areas = calculate_areas(Rect::new(0, 0, size.width, size.height));

        let mut toolbar = Toolbar::new(areas.surface);
        let (width, height) = toolbar.canvas_size();
        let mut controller = Controller::new(SurfaceGeometry::new(width, height));
        controller.attach(&mut toolbar);
        debug!(
            width,
            height,
            capacity = controller.geometry().capacity(),
            "Attached controller to terminal surface"
        );

        Ok(Self {
            terminal,
            controller,
            toolbar,
            key_bindings,
            styles,
            help_visible: false,
            areas,
        })
    }

    /// Replay a saved number into the slots.
    pub fn restore(&mut self, state: &SavedState) {
        if self.controller.load(state) {
            self.toolbar.set_status(self.controller.status());
            self.toolbar.request_redraw();
        }
    }

    /// Snapshot of the entered number for persistence.
    pub fn save(&self) -> SavedState {
        self.controller.save()
    }

    /// Handle a keyboard event
    ///
    /// Returns true if the app should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if key.code == KeyCode::Esc && self.help_visible {
            self.help_visible = false;
            return false;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        // Help overlay swallows everything except toggling it and quitting
        if self.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return false;
        }

        match action {
            KeyAction::PressDigit(digit) => {
                self.controller
                    .handle(HostEvent::DigitPressed(digit), &mut self.toolbar);
            }
            KeyAction::Clear => self.controller.handle(HostEvent::Clear, &mut self.toolbar),
            KeyAction::RowUp => self.step_row(-1),
            KeyAction::RowDown => self.step_row(1),
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => return true,
        }
        false
    }

    /// Move the selected row by `delta`, clamped to rows 1..=9.
    ///
    /// With no row selected, up starts from the bottom and down from the top.
    fn step_row(&mut self, delta: i32) {
        let row = match self.controller.highlighted() {
            Some(factor) => (factor.row() as i32 + delta).clamp(1, 9),
            None if delta < 0 => 9,
            None => 1,
        };
        let factor = Factor::from_row(row as u32);
        if self.controller.highlight(factor) {
            self.toolbar.set_status(self.controller.status());
            self.toolbar.request_redraw();
        }
    }

    /// Handle a mouse event
    ///
    /// Pointer motion over the surface selects a row; left clicks on the
    /// toolbar press its buttons.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.help_visible {
            return;
        }

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Some((x, y)) = self.surface_point(mouse.column, mouse.row) {
                    self.controller
                        .handle(HostEvent::PointerMoved { x, y }, &mut self.toolbar);
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                let event = self
                    .toolbar
                    .control_at(self.areas.toolbar, mouse.column, mouse.row)
                    .and_then(|control| control.event());
                if let Some(event) = event {
                    debug!(?event, "Toolbar click");
                    self.controller.handle(event, &mut self.toolbar);
                } else if let Some((x, y)) = self.surface_point(mouse.column, mouse.row) {
                    self.controller
                        .handle(HostEvent::PointerMoved { x, y }, &mut self.toolbar);
                }
            }
            _ => {}
        }
    }

    /// Surface units under the terminal cell `(column, row)`.
    ///
    /// Each cell covers a 2x4 block of dots; the pointer is taken to sit in
    /// its middle.
    fn surface_point(&self, column: u16, row: u16) -> Option<(u32, u32)> {
        let area = self.areas.surface;
        let inside = column >= area.x
            && column < area.right()
            && row >= area.y
            && row < area.bottom();
        inside.then(|| {
            (
                u32::from(column - area.x) * DOTS_PER_COLUMN + DOTS_PER_COLUMN / 2,
                u32::from(row - area.y) * DOTS_PER_ROW + DOTS_PER_ROW / 2,
            )
        })
    }

    /// Re-fit the surface to the new terminal size.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.areas = calculate_areas(Rect::new(0, 0, width, height));
        self.toolbar.set_surface_area(self.areas.surface);

        let (width, height) = self.toolbar.canvas_size();
        if self.controller.set_geometry(SurfaceGeometry::new(width, height)) {
            self.toolbar.set_status(self.controller.status());
            self.toolbar.request_redraw();
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let areas = calculate_areas(Rect::new(0, 0, size.width, size.height));
        if areas != self.areas {
            self.handle_resize(size.width, size.height);
        }
        self.toolbar.take_redraw();

        let toolbar = &self.toolbar;
        let controller = &self.controller;
        let styles = &self.styles;
        let help_visible = self.help_visible;
        let areas = self.areas;
        self.terminal.draw(|frame| {
            render_layout(frame, areas, toolbar, controller, styles);
            if help_visible {
                render_help_overlay(frame);
            }
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
#[allow(dead_code)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing around any backend.
    pub(crate) fn new_for_test(terminal: Terminal<B>) -> Self {
        Self::with_terminal(
            terminal,
            KeyBindings::default(),
            SurfaceStyles::new(ColorConfig::from_env_and_args(true)),
        )
        .expect("test terminal has a size")
    }

    pub(crate) fn controller(&self) -> &Controller {
        &self.controller
    }

    pub(crate) fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Resolved options for a TUI session.
///
/// Carries configuration from the CLI layer (main.rs) into the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    /// Where the entered number is loaded from and saved to.
    pub state_file: PathBuf,

    /// Whether to replay the saved number on startup.
    pub restore_state: bool,

    /// Whether colours are suppressed.
    pub no_color: bool,
}

impl CliArgs {
    pub fn new(state_file: PathBuf, restore_state: bool, no_color: bool) -> Self {
        Self {
            state_file,
            restore_state,
            no_color,
        }
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, restores the saved number, runs the event loop
/// and saves the number on the way out.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(args: CliArgs) -> Result<(), TuiError> {
    let saved = if args.restore_state {
        load_saved(&args)
    } else {
        None
    };

    let styles = SurfaceStyles::new(ColorConfig::from_env_and_args(args.no_color));
    let mut app = TuiApp::new(styles)?;
    if let Some(state) = &saved {
        app.restore(state);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    let state = app.save();
    match save_state_file(&args.state_file, &state) {
        Ok(()) => info!(path = ?args.state_file, number = %state.number, "Saved state"),
        Err(e) => {
            // Terminal is restored, so stderr is visible again
            error!(error = %e, "Failed to save state");
            eprintln!("Warning: {}", e);
        }
    }

    result
}

fn load_saved(args: &CliArgs) -> Option<SavedState> {
    match load_state_file(&args.state_file) {
        Ok(Some(state)) => Some(state),
        Ok(None) => {
            debug!(path = ?args.state_file, "No saved state");
            None
        }
        Err(e) => {
            warn!(error = %e, "Ignoring unreadable saved state");
            None
        }
    }
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
