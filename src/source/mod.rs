//! List source: section ownership, structural queries and refresh lifecycle.
//!
//! - `list_source`: [`ListSource`] and its race-tolerant query surface
//! - `diagnostics`: sinks for absorbed stale-coordinate conditions
//! - `reload`: redraw signalling towards the rendering surface
//! - `styling`: default population of a cell from a row

pub mod diagnostics;
pub mod list_source;
pub mod reload;
pub mod styling;

pub use diagnostics::{Diagnostic, DiagnosticSink, Query, RecordingSink, TracingSink};
pub use list_source::{CanEditRowPredicate, ListSource, SectionConstructor};
pub use reload::{ReloadFlag, ReloadObserver};
pub use styling::apply_default_style;
