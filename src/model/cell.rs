//! Renderer-facing cell types.
//!
//! A [`CellDescriptor`] is what the rendering surface draws for one row. It is
//! populated from a resolved [`Row`](super::Row) and never reads back into it.

use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// Default reuse identifier for rows that do not name one.
pub const DEFAULT_REUSE_IDENTIFIER: &str = "cell";

/// Layout style of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    /// Title only.
    #[default]
    Default,
    /// Title with a secondary detail line.
    Subtitle,
}

/// Trailing decoration of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessory {
    /// No decoration.
    #[default]
    None,
    /// Chevron hinting that selecting the row navigates.
    DisclosureIndicator,
    /// Check mark.
    Checkmark,
    /// Info button.
    DetailButton,
    /// Info button followed by a chevron.
    DetailDisclosureButton,
}

/// Opaque, cheaply clonable image reference.
///
/// The terminal surface treats the payload as a short glyph drawn before the
/// title; other surfaces may treat it as a resource name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageHandle(Arc<str>);

impl ImageHandle {
    /// Create a handle from a glyph or resource name.
    pub fn new(source: impl AsRef<str>) -> Self {
        Self(Arc::from(source.as_ref()))
    }

    /// The underlying glyph or resource name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Populated cell content handed to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellDescriptor {
    /// Identifier the surface uses to recycle cell instances.
    pub reuse_identifier: String,
    /// Layout style.
    pub style: CellStyle,
    /// Primary text.
    pub text: Option<String>,
    /// Secondary text (only populated for [`CellStyle::Subtitle`]).
    pub detail_text: Option<String>,
    /// Trailing decoration.
    pub accessory: Accessory,
    /// Leading image.
    pub image: Option<ImageHandle>,
}

impl CellDescriptor {
    /// A blank cell with the given reuse identifier and style.
    pub fn new(reuse_identifier: impl Into<String>, style: CellStyle) -> Self {
        Self {
            reuse_identifier: reuse_identifier.into(),
            style,
            text: None,
            detail_text: None,
            accessory: Accessory::None,
            image: None,
        }
    }

    /// The blank cell substituted when a coordinate no longer resolves.
    pub fn placeholder() -> Self {
        Self::new(DEFAULT_REUSE_IDENTIFIER, CellStyle::Default)
    }

    /// True if nothing was populated.
    pub fn is_blank(&self) -> bool {
        self.text.is_none()
            && self.detail_text.is_none()
            && self.accessory == Accessory::None
            && self.image.is_none()
    }
}

impl Default for CellDescriptor {
    fn default() -> Self {
        Self::placeholder()
    }
}
