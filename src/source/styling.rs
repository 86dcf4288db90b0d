//! Default cell population.

use crate::model::{CellDescriptor, CellStyle, Row};

/// Populate `cell` from `row`.
///
/// Text comes from `title()`; detail text from `subtitle()` only when the row's
/// style is [`CellStyle::Subtitle`]; the accessory from `accessory()`; the
/// image if the row has one. Fields the row does not supply are left as they
/// were on `cell`.
pub fn apply_default_style<T>(mut cell: CellDescriptor, row: &Row<T>) -> CellDescriptor {
    cell.text = Some(row.title());
    if row.cell_style() == CellStyle::Subtitle {
        cell.detail_text = row.subtitle();
    }
    cell.accessory = row.accessory();
    if let Some(image) = row.image() {
        cell.image = Some(image.clone());
    }
    cell
}
