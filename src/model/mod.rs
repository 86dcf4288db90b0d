//! Row/section data model (pure).
//!
//! Nothing in this module performs I/O or logging.

pub mod cell;
pub mod edit_action;
pub mod error;
pub mod field;
pub mod index_path;
pub mod row;
pub mod section;

// Re-export for convenience
pub use cell::{Accessory, CellDescriptor, CellStyle, ImageHandle, DEFAULT_REUSE_IDENTIFIER};
pub use edit_action::{EditAction, EditActionStyle, EditHandler};
pub use error::{AppError, CatalogError, StaleCoordinate};
pub use field::{Accessor, Field};
pub use index_path::IndexPath;
pub use row::{Row, RowBuilder};
pub use section::Section;
