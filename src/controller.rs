//! Appearance lifecycle glue.
//!
//! A [`ListController`] rebuilds its list every time it becomes visible and
//! drops the rows when it is hidden, so data is always fresh on screen and
//! nothing is retained off screen.

use crate::model::Section;
use crate::source::ListSource;
use tracing::debug;

/// Whether the list is currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    /// Not on screen. Initial state.
    #[default]
    Hidden,
    /// On screen.
    Visible,
}

/// Lifecycle notifications delivered by the hosting surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// The list is about to be shown.
    WillAppear,
    /// The list is about to be hidden.
    WillDisappear,
}

/// Owns a [`ListSource`] and drives its refresh/clear cycle from
/// appearance events.
///
/// Pairing of appear/disappear is not enforced: two `will_appear` calls in a
/// row simply refresh twice.
#[derive(Debug)]
pub struct ListController<T = ()> {
    source: ListSource<T>,
    appearance: Appearance,
}

impl<T> ListController<T> {
    /// Wrap an existing source.
    pub fn new(source: ListSource<T>) -> Self {
        Self {
            source,
            appearance: Appearance::Hidden,
        }
    }

    /// Controller whose source rebuilds with `constructor` on every appearance.
    pub fn with_constructor<F>(constructor: F) -> Self
    where
        F: FnMut() -> Vec<Section<T>> + 'static,
    {
        Self::new(ListSource::with_constructor(constructor))
    }

    /// The owned source.
    pub fn source(&self) -> &ListSource<T> {
        &self.source
    }

    /// Mutable access to the owned source.
    pub fn source_mut(&mut self) -> &mut ListSource<T> {
        &mut self.source
    }

    /// Give up the controller, keeping the source.
    pub fn into_source(self) -> ListSource<T> {
        self.source
    }

    /// Current appearance state.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Rebuild the list and mark it visible.
    pub fn will_appear(&mut self) {
        debug!(previous = ?self.appearance, "List will appear");
        self.appearance = Appearance::Visible;
        self.source.refresh();
    }

    /// Drop the rows and mark the list hidden.
    pub fn will_disappear(&mut self) {
        debug!(previous = ?self.appearance, "List will disappear");
        self.appearance = Appearance::Hidden;
        self.source.clear();
    }

    /// Dispatch a lifecycle event.
    pub fn handle(&mut self, event: LifecycleEvent) {
        match event {
            LifecycleEvent::WillAppear => self.will_appear(),
            LifecycleEvent::WillDisappear => self.will_disappear(),
        }
    }
}

impl<T> Default for ListController<T> {
    fn default() -> Self {
        Self::new(ListSource::new())
    }
}
