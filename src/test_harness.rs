//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing by wrapping
//! `TuiApp<TestBackend, CatalogEntry>` with convenient methods for simulating
//! user interactions.

use crate::catalog::{catalog_constructor, CatalogEntry};
use crate::controller::ListController;
use crate::model::IndexPath;
use crate::source::RecordingSink;
use crate::view::{ColorConfig, TuiApp, TuiError, ViewOptions};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;
use std::sync::Arc;

/// Catalog fixture shared by the acceptance tests.
pub(crate) const CATALOG_FIXTURE: &str = "tests/fixtures/catalog.jsonl";

/// Convert a ratatui buffer to a string representation.
///
/// Captures the visual output character by character, preserving layout.
/// Blank lines are removed to keep comparisons readable.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// The list appears when the harness is created, the way `TuiApp::run`
/// does before entering its loop. Stale-coordinate diagnostics are recorded
/// instead of asserted so tests can inspect them.
pub(crate) struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, CatalogEntry>,
    diagnostics: Arc<RecordingSink>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Load a catalog fixture with custom terminal size
    pub(crate) fn from_fixture_with_size(
        path: &str,
        width: u16,
        height: u16,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;

        let diagnostics = Arc::new(RecordingSink::new());
        let mut controller = ListController::with_constructor(catalog_constructor(PathBuf::from(path)));
        let source = controller.source_mut();
        source.set_diagnostic_sink(diagnostics.clone());
        source.set_fail_fast(false);

        let mut app = TuiApp::with_terminal(
            terminal,
            controller,
            ViewOptions::new(true, ColorConfig::new(false)),
        );
        app.appear_test();

        Ok(Self {
            app,
            diagnostics,
            running: true,
        })
    }

    /// Load a catalog fixture into an 60x20 terminal
    pub(crate) fn from_fixture(path: &str) -> Result<Self, TuiError> {
        Self::from_fixture_with_size(path, 60, 20)
    }

    /// Send a single key event. Returns true if the app quit.
    pub(crate) fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub(crate) fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true;
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
            self.app.disappear_test();
        }

        quit
    }

    /// Send a sequence of keys, stopping early if the app quits
    pub(crate) fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Check if app is still running
    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// Currently selected coordinates
    pub(crate) fn selected(&self) -> Option<IndexPath> {
        self.app.list_state().selected()
    }

    /// Last status bar message
    pub(crate) fn status(&self) -> Option<&str> {
        self.app.status_text()
    }

    /// The controller under test
    pub(crate) fn controller(&self) -> &ListController<CatalogEntry> {
        self.app.controller()
    }

    /// Whether the source signalled a reload not yet drawn
    pub(crate) fn reload_pending(&self) -> bool {
        self.app.reload_pending()
    }

    /// Diagnostics recorded so far
    pub(crate) fn diagnostics(&self) -> &RecordingSink {
        &self.diagnostics
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub(crate) fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
