//! Positional row coordinates.
//!
//! Rows carry no identity of their own; the renderer addresses them by
//! `(section, row)`. Both components are signed so that coordinates produced
//! by renderer-side arithmetic (e.g. `selected - 1`) stay representable and are
//! rejected by bounds checks instead of wrapping.

use std::fmt;

/// A `(section, row)` coordinate pair as issued by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct IndexPath {
    /// Section index.
    pub section: i64,
    /// Row index within the section.
    pub row: i64,
}

impl IndexPath {
    /// Create a coordinate pair.
    pub const fn new(section: i64, row: i64) -> Self {
        Self { section, row }
    }

    /// Section index as `usize`, or `None` if negative.
    pub fn section_index(self) -> Option<usize> {
        usize::try_from(self.section).ok()
    }

    /// Row index as `usize`, or `None` if negative.
    pub fn row_index(self) -> Option<usize> {
        usize::try_from(self.row).ok()
    }
}

impl From<(usize, usize)> for IndexPath {
    fn from((section, row): (usize, usize)) -> Self {
        // usize values above i64::MAX cannot index a Vec anyway; saturate so
        // they stay out of range.
        Self {
            section: i64::try_from(section).unwrap_or(i64::MAX),
            row: i64::try_from(row).unwrap_or(i64::MAX),
        }
    }
}

impl fmt::Display for IndexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(section), {}(row)", self.section, self.row)
    }
}
