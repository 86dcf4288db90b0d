//! JSONL catalog: the viewer's item type and its section constructor.
//!
//! One entry per line:
//!
//! ```json
//! {"section": "Fruit", "title": "Apple", "subtitle": "Crisp", "accessory": "checkmark",
//!  "image": "🍎", "actions": [{"title": "Delete", "style": "destructive"}]}
//! ```
//!
//! Only `section` and `title` are required. Rows bind their text to the
//! entry, so a caller mutating an entry through [`Row::item_mut`] sees the
//! change on the next draw.

use crate::model::{
    Accessory, CatalogError, EditAction, EditActionStyle, ImageHandle, Row, Section,
};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// An edit action declared by a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogAction {
    /// Action label.
    pub title: String,
    /// Visual weight.
    #[serde(default)]
    pub style: EditActionStyle,
}

/// One item of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    /// Name of the section this entry is listed under.
    pub section: String,
    /// Primary text.
    pub title: String,
    /// Secondary text.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Trailing decoration.
    #[serde(default)]
    pub accessory: Accessory,
    /// Leading glyph.
    #[serde(default)]
    pub image: Option<String>,
    /// Actions offered when the row is edited.
    #[serde(default)]
    pub actions: Vec<CatalogAction>,
}

/// Parse one line.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidEntry`] if the line is not a valid entry.
pub fn parse_entry(raw: &str, line_number: usize) -> Result<CatalogEntry, CatalogError> {
    serde_json::from_str(raw).map_err(|e| CatalogError::InvalidEntry {
        line: line_number,
        message: e.to_string(),
    })
}

/// Parse every line from `reader`, skipping blank and malformed lines.
///
/// Malformed lines are logged at `WARN` and do not abort the read.
///
/// # Errors
///
/// Returns [`CatalogError::Io`] if reading fails.
pub fn parse_entries(reader: impl BufRead) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match parse_entry(&line, index + 1) {
            Ok(entry) => entries.push(entry),
            Err(error) => warn!(%error, "Skipping malformed catalog line"),
        }
    }

    Ok(entries)
}

/// Read the catalog at `path`.
///
/// # Errors
///
/// Returns [`CatalogError::FileNotFound`] if the file does not exist, or
/// [`CatalogError::Io`] for other I/O failures.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Vec<CatalogEntry>, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let entries = parse_entries(BufReader::new(File::open(path)?))?;
    debug!(path = %path.display(), entries = entries.len(), "Catalog read");
    Ok(entries)
}

fn edit_actions_for(entry: &CatalogEntry) -> Vec<EditAction> {
    entry
        .actions
        .iter()
        .map(|action| {
            let title = action.title.clone();
            EditAction::new(action.title.clone(), action.style).with_handler(move |path| {
                info!(action = %title, %path, "Edit action triggered");
            })
        })
        .collect()
}

/// Row bound to `entry`.
///
/// Text, accessory and actions are live; the image is fixed at build time.
pub fn entry_row(entry: CatalogEntry) -> Row<CatalogEntry> {
    let image = entry.image.as_deref().map(ImageHandle::new);

    let builder = Row::builder(entry)
        .title_with(|entry: &CatalogEntry| entry.title.clone())
        .subtitle_with(|entry: &CatalogEntry| entry.subtitle.clone())
        .accessory_with(|entry: &CatalogEntry| entry.accessory)
        .edit_actions_with(edit_actions_for);

    match image {
        Some(image) => builder.image(image).build(),
        None => builder.build(),
    }
}

/// Group entries into sections by name, in order of first appearance.
///
/// Each section's footer counts its rows.
pub fn build_sections(entries: Vec<CatalogEntry>) -> Vec<Section<CatalogEntry>> {
    let mut names: Vec<String> = Vec::new();
    let mut sections: Vec<Section<CatalogEntry>> = Vec::new();

    for entry in entries {
        let position = match names.iter().position(|name| *name == entry.section) {
            Some(position) => position,
            None => {
                names.push(entry.section.clone());
                sections.push(Section::with_header(entry.section.clone()));
                sections.len() - 1
            }
        };
        sections[position].push(entry_row(entry));
    }

    for section in &mut sections {
        let count = section.len();
        let noun = if count == 1 { "entry" } else { "entries" };
        section.set_footer_title(Some(format!("{count} {noun}")));
    }

    sections
}

/// Section constructor that re-reads `path` on every call.
///
/// A read failure is logged and yields an empty list, so a catalog deleted
/// while the viewer is open simply shows nothing on the next refresh.
pub fn catalog_constructor(path: PathBuf) -> impl FnMut() -> Vec<Section<CatalogEntry>> {
    move || match read_catalog(&path) {
        Ok(entries) => build_sections(entries),
        Err(error) => {
            warn!(%error, path = %path.display(), "Catalog unavailable, showing empty list");
            Vec::new()
        }
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
