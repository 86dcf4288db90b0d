//! Diagnostic sinks for conditions the list source absorbs instead of failing.
//!
//! The list source never panics on a stale coordinate in release builds; it
//! records a [`Diagnostic`] to its sink and returns a safe default. The
//! default sink forwards to `tracing`; tests install a [`RecordingSink`] to
//! assert on what was recorded.

use crate::model::StaleCoordinate;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// The query that hit a stale coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Query {
    /// Direct row lookup.
    RowAt,
    /// Cell population.
    CellContent,
    /// Editability check.
    CanEditRow,
    /// Edit action lookup.
    EditActions,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Query::RowAt => "row_at",
            Query::CellContent => "cell_content",
            Query::CanEditRow => "can_edit_row",
            Query::EditActions => "edit_actions",
        };
        f.write_str(name)
    }
}

/// An absorbed condition worth surfacing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A query addressed coordinates outside the current sections. Likely a
    /// race between a redraw and a refresh or clear.
    StaleCoordinate {
        /// Which query was being answered.
        query: Query,
        /// Coordinates and list length at resolution time.
        error: StaleCoordinate,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::StaleCoordinate { query, error } => {
                write!(f, "{query}: {error} (race between redraw and refresh likely)")
            }
        }
    }
}

/// Receives diagnostics from a list source.
pub trait DiagnosticSink: Send + Sync {
    /// Record one event.
    fn record(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::StaleCoordinate { query, error } => warn!(
                query = %query,
                section = error.path.section,
                row = error.path.row,
                section_count = error.section_count,
                row_count = ?error.row_count,
                "{error}"
            ),
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded diagnostics, oldest first.
    pub fn events(&self) -> Vec<Diagnostic> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded diagnostics.
    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for RecordingSink {
    fn record(&self, diagnostic: &Diagnostic) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}
