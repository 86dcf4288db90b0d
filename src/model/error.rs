//! Error types for listbind.
//!
//! # Error Hierarchy
//!
//! - [`StaleCoordinate`] - a coordinate pair that no longer addresses a row.
//!   Never propagated out of the query surface: `ListSource::row_at` records it
//!   as a diagnostic and callers substitute a placeholder or `false`. It is
//!   returned as an error only from `ListSource::try_row_at`.
//! - [`CatalogError`] - reading the viewer's JSONL item file.
//!   Missing or unreadable files are fatal; malformed lines are non-fatal
//!   (logged and skipped).
//! - [`AppError`] - top-level error of the `listbind` binary.
//!
//! Accessor panics are caller logic and are deliberately not caught.

use super::IndexPath;
use std::path::PathBuf;
use thiserror::Error;

/// A coordinate pair that does not address a row in the current sections.
///
/// Arises when the renderer captured coordinates before a `clear`/`refresh`
/// shrank the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "Stale coordinate: index path out of range. Current section count: {section_count} - \
     IndexPath values: {path}"
)]
pub struct StaleCoordinate {
    /// The offending coordinates.
    pub path: IndexPath,
    /// Number of sections at resolution time.
    pub section_count: usize,
    /// Rows in the addressed section, when the section itself was valid.
    pub row_count: Option<usize>,
}

/// Errors reading the item catalog consumed by the viewer.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file does not exist.
    #[error("Catalog file not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// A line is not a valid catalog entry. Non-fatal: logged and skipped.
    #[error("Invalid catalog entry at line {line}: {message}")]
    InvalidEntry {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        message: String,
    },

    /// Any other I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error of the viewer binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading the catalog failed.
    #[error("Failed to read catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(#[from] crate::view::TuiError),

    /// Neither the command line nor the config file names a catalog.
    #[error("No catalog: pass a JSONL file or set catalog_path in the config file")]
    NoCatalog,
}
