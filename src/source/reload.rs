//! Reload signalling from the list source to the rendering surface.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Notified after the list source replaced its sections.
pub trait ReloadObserver: Send + Sync {
    /// The sections changed wholesale; redraw everything.
    fn reload_data(&self);
}

/// A latch raised by each reload and consumed by the next draw.
///
/// Clones share the same latch.
#[derive(Debug, Clone, Default)]
pub struct ReloadFlag(Arc<AtomicBool>);

impl ReloadFlag {
    /// Unset latch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a reload is pending, without consuming it.
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Consume a pending reload. Returns true if one was pending.
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::AcqRel)
    }
}

impl ReloadObserver for ReloadFlag {
    fn reload_data(&self) {
        self.0.store(true, Ordering::Release);
    }
}
