//! The list source: owner of the displayed sections and answerer of every
//! structural query the rendering surface issues.
//!
//! # Stale coordinates
//!
//! The renderer may resolve a coordinate pair it captured before `clear` or
//! `refresh` shrank the section list (e.g. a redraw scheduled against the old
//! row count). Every coordinate-addressed query is therefore bounds-checked
//! before indexing. A miss is recorded to the [`DiagnosticSink`] with the
//! coordinates and current section count, and the query answers a safe
//! default: a placeholder cell, `false`, or no actions.
//!
//! With fail-fast enabled (the default) a miss also trips a `debug_assert!`,
//! so the race is loud during development. Release builds compile the
//! assertion out and keep the graceful path.

use super::diagnostics::{Diagnostic, DiagnosticSink, Query, TracingSink};
use super::reload::ReloadObserver;
use super::styling::apply_default_style;
use crate::config::ResolvedConfig;
use crate::model::row::is_blank;
use crate::model::{
    CellDescriptor, EditAction, IndexPath, Row, Section, StaleCoordinate,
    DEFAULT_REUSE_IDENTIFIER,
};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Builds the full section list on every refresh.
pub type SectionConstructor<T> = Box<dyn FnMut() -> Vec<Section<T>>>;

/// Table-wide editability predicate.
pub type CanEditRowPredicate = Arc<dyn Fn(IndexPath) -> bool + Send + Sync>;

/// Ordered sections plus the policy for answering queries against them.
pub struct ListSource<T = ()> {
    sections: Vec<Section<T>>,
    constructor: Option<SectionConstructor<T>>,
    can_edit_row: Option<CanEditRowPredicate>,
    diagnostics: Arc<dyn DiagnosticSink>,
    reload_observer: Option<Arc<dyn ReloadObserver>>,
    fail_fast: bool,
    default_reuse_identifier: String,
}

impl<T> ListSource<T> {
    /// Empty source without a constructor.
    pub fn new() -> Self {
        Self {
            sections: Vec::new(),
            constructor: None,
            can_edit_row: None,
            diagnostics: Arc::new(TracingSink),
            reload_observer: None,
            fail_fast: true,
            default_reuse_identifier: DEFAULT_REUSE_IDENTIFIER.to_string(),
        }
    }

    /// Empty source whose `refresh` calls `constructor`.
    pub fn with_constructor<F>(constructor: F) -> Self
    where
        F: FnMut() -> Vec<Section<T>> + 'static,
    {
        let mut source = Self::new();
        source.set_constructor(constructor);
        source
    }

    /// Apply the configured reuse identifier and fail-fast policy.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new()
            .with_fail_fast(config.fail_fast_on_stale)
            .with_default_reuse_identifier(config.default_reuse_identifier.clone())
    }

    // ===== Configuration =====

    /// Install the section constructor used by `refresh`.
    pub fn set_constructor<F>(&mut self, constructor: F)
    where
        F: FnMut() -> Vec<Section<T>> + 'static,
    {
        self.constructor = Some(Box::new(constructor));
    }

    /// Install the table-wide editability predicate.
    pub fn set_can_edit_row<F>(&mut self, predicate: F)
    where
        F: Fn(IndexPath) -> bool + Send + Sync + 'static,
    {
        self.can_edit_row = Some(Arc::new(predicate));
    }

    /// Fluent form of [`set_can_edit_row`](Self::set_can_edit_row).
    pub fn with_can_edit_row<F>(mut self, predicate: F) -> Self
    where
        F: Fn(IndexPath) -> bool + Send + Sync + 'static,
    {
        self.set_can_edit_row(predicate);
        self
    }

    /// Replace the diagnostic sink.
    pub fn set_diagnostic_sink(&mut self, sink: Arc<dyn DiagnosticSink>) {
        self.diagnostics = sink;
    }

    /// Fluent form of [`set_diagnostic_sink`](Self::set_diagnostic_sink).
    pub fn with_diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Install the observer notified after sections are replaced.
    pub fn set_reload_observer(&mut self, observer: Arc<dyn ReloadObserver>) {
        self.reload_observer = Some(observer);
    }

    /// Fluent form of [`set_reload_observer`](Self::set_reload_observer).
    pub fn with_reload_observer(mut self, observer: Arc<dyn ReloadObserver>) -> Self {
        self.reload_observer = Some(observer);
        self
    }

    /// Enable or disable the debug assertion on stale coordinates.
    pub fn set_fail_fast(&mut self, fail_fast: bool) {
        self.fail_fast = fail_fast;
    }

    /// Fluent form of [`set_fail_fast`](Self::set_fail_fast).
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Whether stale coordinates trip a debug assertion.
    pub fn fail_fast(&self) -> bool {
        self.fail_fast
    }

    /// Reuse identifier for rows whose own identifier is blank.
    pub fn with_default_reuse_identifier(mut self, reuse_identifier: impl Into<String>) -> Self {
        self.default_reuse_identifier = reuse_identifier.into();
        self
    }

    /// Reuse identifier for rows whose own identifier is blank.
    pub fn default_reuse_identifier(&self) -> &str {
        &self.default_reuse_identifier
    }

    // ===== Structural queries =====

    /// Current sections.
    pub fn sections(&self) -> &[Section<T>] {
        &self.sections
    }

    /// Number of sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Rows in `section`. The renderer is expected to ask only for sections it
    /// was told exist; any other index answers 0.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections.get(section).map_or(0, Section::len)
    }

    /// Header text of `section`, `None` for an unknown section.
    pub fn header_title(&self, section: usize) -> Option<String> {
        self.sections.get(section).and_then(Section::header_title)
    }

    /// Footer text of `section`, `None` for an unknown section.
    pub fn footer_title(&self, section: usize) -> Option<String> {
        self.sections.get(section).and_then(Section::footer_title)
    }

    /// Every valid coordinate, in display order.
    pub fn index_paths(&self) -> impl Iterator<Item = IndexPath> + '_ {
        self.sections
            .iter()
            .enumerate()
            .flat_map(|(s, section)| (0..section.len()).map(move |r| IndexPath::from((s, r))))
    }

    /// Bounds-checked lookup without side effects.
    ///
    /// # Errors
    ///
    /// Returns [`StaleCoordinate`] if either index is negative or past the end.
    pub fn try_row_at(&self, path: IndexPath) -> Result<&Row<T>, StaleCoordinate> {
        let stale = |row_count| StaleCoordinate {
            path,
            section_count: self.sections.len(),
            row_count,
        };

        let section = path
            .section_index()
            .and_then(|s| self.sections.get(s))
            .ok_or_else(|| stale(None))?;

        path.row_index()
            .and_then(|r| section.get(r))
            .ok_or_else(|| stale(Some(section.len())))
    }

    /// Row at `path`, or `None` if the coordinates are stale.
    ///
    /// A miss is recorded to the diagnostic sink.
    pub fn row_at(&self, path: IndexPath) -> Option<&Row<T>> {
        self.resolve(path, Query::RowAt)
    }

    /// Populated cell for `path`; a blank placeholder if the coordinates are
    /// stale.
    pub fn cell_content(&self, path: IndexPath) -> CellDescriptor {
        match self.resolve(path, Query::CellContent) {
            Some(row) => apply_default_style(self.dequeue_cell(row), row),
            None => CellDescriptor::placeholder(),
        }
    }

    /// Whether the row at `path` is editable.
    ///
    /// A row with edit actions is always editable; otherwise the table-wide
    /// predicate decides, defaulting to not editable. Stale coordinates answer
    /// `false`.
    pub fn can_edit_row(&self, path: IndexPath) -> bool {
        let Some(row) = self.resolve(path, Query::CanEditRow) else {
            return false;
        };

        if !row.edit_actions().is_empty() {
            return true;
        }

        self.can_edit_row
            .as_ref()
            .is_some_and(|predicate| predicate(path))
    }

    /// Edit actions of the row at `path`; empty for stale coordinates.
    pub fn edit_actions(&self, path: IndexPath) -> Vec<EditAction> {
        self.resolve(path, Query::EditActions)
            .map(Row::edit_actions)
            .unwrap_or_default()
    }

    /// Reuse identifier the surface should use for `row`.
    pub fn reuse_identifier_for(&self, row: &Row<T>) -> String {
        row.reuse_identifier()
            .filter(|id| !is_blank(id))
            .unwrap_or_else(|| self.default_reuse_identifier.clone())
    }

    // ===== Lifecycle =====

    /// Rebuild the sections from the constructor and signal a reload.
    ///
    /// Not additive: previous sections are dropped first. Without a
    /// constructor the list ends up empty.
    pub fn refresh(&mut self) {
        self.clear();
        if let Some(constructor) = self.constructor.as_mut() {
            let sections = constructor();
            self.sections.extend(sections);
        }
        debug!(
            sections = self.sections.len(),
            rows = self.sections.iter().map(Section::len).sum::<usize>(),
            "List source refreshed"
        );
        self.notify_reload();
    }

    /// Drop every section.
    ///
    /// This is where per-row subscriptions attached by the caller would be
    /// released; rows are plain values here, so dropping them is all there is.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Replace the sections wholesale and signal a reload.
    pub fn set_sections(&mut self, sections: Vec<Section<T>>) {
        self.sections = sections;
        self.notify_reload();
    }

    // ===== Internals =====

    fn resolve(&self, path: IndexPath, query: Query) -> Option<&Row<T>> {
        match self.try_row_at(path) {
            Ok(row) => Some(row),
            Err(error) => {
                self.report(Diagnostic::StaleCoordinate { query, error });
                None
            }
        }
    }

    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.record(&diagnostic);
        debug_assert!(!self.fail_fast, "{diagnostic}");
    }

    fn dequeue_cell(&self, row: &Row<T>) -> CellDescriptor {
        CellDescriptor::new(self.reuse_identifier_for(row), row.cell_style())
    }

    fn notify_reload(&self) {
        if let Some(observer) = &self.reload_observer {
            observer.reload_data();
        }
    }
}

impl<T> Default for ListSource<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ListSource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListSource")
            .field("sections", &self.sections)
            .field("has_constructor", &self.constructor.is_some())
            .field("has_can_edit_row", &self.can_edit_row.is_some())
            .field("fail_fast", &self.fail_fast)
            .field("default_reuse_identifier", &self.default_reuse_identifier)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "list_source_tests.rs"]
mod tests;
