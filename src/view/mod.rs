//! TUI rendering and terminal management (impure shell)

mod list;
mod styles;

pub use crate::source::ReloadFlag;
pub use list::{SectionedList, SectionedListState};
pub use styles::{accessory_glyph, ColorConfig, ListStyles};

use crate::config::keybindings::KeyBindings;
use crate::config::KeyAction;
use crate::controller::ListController;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
    style::Style,
    text::{Line, Span},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Key hints shown at the right of the status bar.
const KEY_HINTS: &str = "r refresh  c clear  e edit  q quit";

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Display options resolved from config and CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Draw section footers.
    pub show_footers: bool,
    /// Color output.
    pub colors: ColorConfig,
}

impl ViewOptions {
    /// Create view options.
    pub fn new(show_footers: bool, colors: ColorConfig) -> Self {
        Self {
            show_footers,
            colors,
        }
    }
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::new(true, ColorConfig::from_env_and_args(false))
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B, T = ()>
where
    B: Backend,
{
    terminal: Terminal<B>,
    controller: ListController<T>,
    list_state: SectionedListState,
    key_bindings: KeyBindings,
    styles: ListStyles,
    show_footers: bool,
    reload: ReloadFlag,
    status: Option<(String, Style)>,
}

impl<T> TuiApp<CrosstermBackend<Stdout>, T> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(controller: ListController<T>, options: ViewOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(terminal, controller, options))
    }
}

impl<B, T> TuiApp<B, T>
where
    B: Backend,
{
    /// Wrap an already initialized terminal.
    ///
    /// Installs a [`ReloadFlag`] on the controller's source so refreshes
    /// trigger a redraw.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mut controller: ListController<T>,
        options: ViewOptions,
    ) -> Self {
        let reload = ReloadFlag::new();
        controller
            .source_mut()
            .set_reload_observer(Arc::new(reload.clone()));

        Self {
            terminal,
            controller,
            list_state: SectionedListState::new(),
            key_bindings: KeyBindings::default(),
            styles: ListStyles::with_color_config(options.colors),
            show_footers: options.show_footers,
            reload,
            status: None,
        }
    }

    /// Run the main event loop
    ///
    /// The list appears on entry and disappears on exit, whether the loop
    /// ends by quitting or by error. Returns when user quits (q or Ctrl+C).
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.appear();
        let result = self.event_loop();
        self.controller.will_disappear();
        result
    }

    /// Every refresh happens on this thread in response to input, so the
    /// loop blocks on the next event and draws after it; the draw consumes
    /// any reload signalled while handling it.
    fn event_loop(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            let event = event::read()?;
            if let Event::Key(key) = &event {
                if key.kind == KeyEventKind::Press && self.handle_key(*key) {
                    return Ok(());
                }
            }
            if needs_redraw(&event) {
                self.draw()?;
            }
        }
    }

    fn appear(&mut self) {
        self.controller.will_appear();
        self.list_state.reconcile(self.controller.source());
        if self.list_state.selected().is_none() {
            self.list_state.select_first(self.controller.source());
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "Key action");

        let source = self.controller.source();
        match action {
            KeyAction::SelectNext => self.list_state.select_next(source),
            KeyAction::SelectPrevious => self.list_state.select_previous(source),
            KeyAction::SelectFirst => self.list_state.select_first(source),
            KeyAction::SelectLast => self.list_state.select_last(source),
            KeyAction::Refresh => {
                self.controller.source_mut().refresh();
                self.list_state.reconcile(self.controller.source());
                let sections = self.controller.source().section_count();
                self.set_status(format!("Refreshed: {sections} sections"), None);
            }
            KeyAction::Clear => {
                self.controller.source_mut().clear();
                self.list_state.reconcile(self.controller.source());
                self.set_status("Cleared".to_string(), None);
            }
            KeyAction::TriggerEditAction => self.trigger_selected_action(),
            KeyAction::Quit => return true,
        }

        false
    }

    fn trigger_selected_action(&mut self) {
        let Some(path) = self.list_state.selected() else {
            self.set_status("Nothing selected".to_string(), None);
            return;
        };

        let source = self.controller.source();
        if !source.can_edit_row(path) {
            self.set_status(format!("Row {path} is not editable"), None);
            return;
        }

        match source.edit_actions(path).first() {
            Some(action) => {
                action.trigger(path);
                info!(action = action.title(), %path, "Edit action run from viewer");
                let style = self.styles.for_action(action.style());
                self.set_status(format!("{} on {path}", action.title()), Some(style));
            }
            None => self.set_status(format!("Row {path} has no actions"), None),
        }
    }

    fn set_status(&mut self, message: String, style: Option<Style>) {
        let style = style.unwrap_or(self.styles.status);
        self.status = Some((message, style));
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        self.reload.take();

        let source = self.controller.source();
        let list_state = &mut self.list_state;
        let styles = self.styles;
        let show_footers = self.show_footers;
        let status = &self.status;

        self.terminal.draw(|frame| {
            let [list_area, status_area] =
                Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

            let list = SectionedList::new(source)
                .styles(styles)
                .show_footers(show_footers);
            frame.render_stateful_widget(list, list_area, list_state);

            render_status_bar(frame, status_area, source.section_count(), status, styles);
        })?;

        Ok(())
    }
}

/// Key presses and resizes change what is on screen; other events do not.
fn needs_redraw(event: &Event) -> bool {
    match event {
        Event::Key(key) => key.kind == KeyEventKind::Press,
        Event::Resize(..) => true,
        _ => false,
    }
}

fn render_status_bar(
    frame: &mut Frame<'_>,
    area: ratatui::layout::Rect,
    sections: usize,
    status: &Option<(String, Style)>,
    styles: ListStyles,
) {
    let mut spans = vec![Span::raw(format!(" {sections} sections "))];
    if let Some((message, style)) = status {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(message.clone(), *style));
        spans.push(Span::raw(" "));
    }

    let used: usize = spans.iter().map(Span::width).sum();
    let padding = usize::from(area.width).saturating_sub(used + KEY_HINTS.len() + 1);
    spans.push(Span::raw(" ".repeat(padding)));
    spans.push(Span::raw(KEY_HINTS));

    frame.render_widget(Line::from(spans).style(styles.status), area);
}

/// Initialize and run the viewer over `controller`.
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_controller<T>(
    controller: ListController<T>,
    options: ViewOptions,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(controller, options)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

// ===== Test Helpers =====

#[cfg(test)]
impl<B, T> TuiApp<B, T>
where
    B: Backend,
{
    /// Run the appearance step of `run` without entering the event loop.
    pub(crate) fn appear_test(&mut self) {
        self.appear();
    }

    /// Run the disappearance step of `run`.
    pub(crate) fn disappear_test(&mut self) {
        self.controller.will_disappear();
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Render a single frame to the backend.
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn controller(&self) -> &ListController<T> {
        &self.controller
    }

    pub(crate) fn list_state(&self) -> &SectionedListState {
        &self.list_state
    }

    pub(crate) fn status_text(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub(crate) fn reload_pending(&self) -> bool {
        self.reload.is_set()
    }
}
