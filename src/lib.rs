//! listbind
//!
//! Data binding between domain items and a sectioned, scrolling list.
//!
//! A caller describes the list as sections of rows, each row showing text and
//! decoration that is either fixed when the row is built or recomputed from a
//! bound item on every query. A [`source::ListSource`] owns the sections,
//! rebuilds them from a construction closure on refresh, and answers the
//! renderer's per-cell queries while tolerating coordinates that went stale
//! when a refresh shrank the list.
//!
//! ```
//! use listbind::model::{Row, Section};
//! use listbind::source::ListSource;
//!
//! let mut source = ListSource::with_constructor(|| {
//!     vec![Section::with_header("Greetings").row(Row::new("Hello", "world"))]
//! });
//! source.refresh();
//!
//! assert_eq!(source.section_count(), 1);
//! assert_eq!(source.row_count(0), 1);
//! ```
//!
//! The `listbind` binary renders a JSONL [`catalog`] with the [`view`]
//! widgets.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
