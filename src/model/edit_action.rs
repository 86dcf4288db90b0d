//! Swipe/edit actions attached to a row.

use super::IndexPath;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Callback run when an edit action is triggered.
pub type EditHandler = Arc<dyn Fn(IndexPath) + Send + Sync>;

/// Visual weight of an edit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditActionStyle {
    /// Neutral action.
    #[default]
    Normal,
    /// Destructive action (delete, remove).
    Destructive,
}

/// A titled action offered when a row is edited.
///
/// A row with at least one edit action is editable regardless of the
/// table-wide predicate.
#[derive(Clone)]
pub struct EditAction {
    title: String,
    style: EditActionStyle,
    handler: Option<EditHandler>,
}

impl EditAction {
    /// Create an action without a handler.
    pub fn new(title: impl Into<String>, style: EditActionStyle) -> Self {
        Self {
            title: title.into(),
            style,
            handler: None,
        }
    }

    /// Attach a handler.
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(IndexPath) + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
        self
    }

    /// Action title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Action style.
    pub fn style(&self) -> EditActionStyle {
        self.style
    }

    /// Run the handler for `path`. Returns false if no handler is attached.
    pub fn trigger(&self, path: IndexPath) -> bool {
        match &self.handler {
            Some(handler) => {
                handler(path);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for EditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditAction")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

// Handlers are not comparable; actions are equal when they look the same.
impl PartialEq for EditAction {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.style == other.style
    }
}
