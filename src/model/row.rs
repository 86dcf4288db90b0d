//! List rows.
//!
//! One generic [`Row<T>`] covers both static rows (`T = ()`, every field
//! frozen) and rows bound to an item whose fields are recomputed through
//! accessors on every read.
//!
//! # Resolution
//!
//! Each bindable field is a [`Field`]: a bound accessor wins; otherwise the
//! value captured at construction (or pinned later by a setter) is returned.
//! Setters and binders share one slot, so the most recent call wins.
//!
//! # Cell style
//!
//! [`CellStyle`] is decided once, when the row is built: `Subtitle` if both
//! title and subtitle were non-blank at that moment, unless the caller chose a
//! style explicitly. It is not re-derived when live values later change.

use super::cell::{Accessory, CellStyle, ImageHandle};
use super::edit_action::EditAction;
use super::field::Field;
use std::fmt;

/// True for `None`-like text: empty or whitespace only.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

fn derive_cell_style(title: &str, subtitle: Option<&str>) -> CellStyle {
    match subtitle {
        Some(subtitle) if !is_blank(title) && !is_blank(subtitle) => CellStyle::Subtitle,
        _ => CellStyle::Default,
    }
}

/// A single list entry.
pub struct Row<T = ()> {
    item: T,
    title: Field<T, String>,
    subtitle: Field<T, Option<String>>,
    accessory: Field<T, Accessory>,
    edit_actions: Field<T, Vec<EditAction>>,
    reuse_identifier: Field<T, Option<String>>,
    cell_style: CellStyle,
    image: Option<ImageHandle>,
}

impl Row<()> {
    /// Static row with a title and subtitle.
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Row::builder(()).title(title).subtitle(subtitle).build()
    }

    /// Static row with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Row::builder(()).title(title).build()
    }
}

impl Default for Row<()> {
    fn default() -> Self {
        Row::builder(()).build()
    }
}

impl<T> Row<T> {
    /// Start building a row bound to `item`.
    pub fn builder(item: T) -> RowBuilder<T> {
        RowBuilder::new(item)
    }

    /// Row bound to `item` whose title is computed by `title`.
    pub fn bound<F>(item: T, title: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Row::builder(item).title_with(title).build()
    }

    /// The bound item.
    pub fn item(&self) -> &T {
        &self.item
    }

    /// Mutable access to the bound item. Live fields observe the change on the
    /// next read; frozen fields do not.
    pub fn item_mut(&mut self) -> &mut T {
        &mut self.item
    }

    /// Primary text.
    pub fn title(&self) -> String {
        self.title.resolve(&self.item)
    }

    /// Secondary text.
    pub fn subtitle(&self) -> Option<String> {
        self.subtitle.resolve(&self.item)
    }

    /// Style chosen at construction.
    pub fn cell_style(&self) -> CellStyle {
        self.cell_style
    }

    /// Trailing decoration.
    pub fn accessory(&self) -> Accessory {
        self.accessory.resolve(&self.item)
    }

    /// Edit actions; empty when none were set.
    pub fn edit_actions(&self) -> Vec<EditAction> {
        self.edit_actions.resolve(&self.item)
    }

    /// Reuse identifier, if any.
    pub fn reuse_identifier(&self) -> Option<String> {
        self.reuse_identifier.resolve(&self.item)
    }

    /// Leading image.
    pub fn image(&self) -> Option<&ImageHandle> {
        self.image.as_ref()
    }

    /// Bind the title to an accessor.
    pub fn bind_title<F>(&mut self, accessor: F)
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.title = Field::live(accessor);
    }

    /// Bind the subtitle to an accessor.
    pub fn bind_subtitle<F>(&mut self, accessor: F)
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.subtitle = Field::live(accessor);
    }

    /// Pin the accessory, replacing any bound accessor.
    pub fn set_accessory(&mut self, accessory: Accessory) {
        self.accessory = Field::Frozen(accessory);
    }

    /// Bind the accessory to an accessor.
    pub fn bind_accessory<F>(&mut self, accessor: F)
    where
        F: Fn(&T) -> Accessory + Send + Sync + 'static,
    {
        self.accessory = Field::live(accessor);
    }

    /// Pin the edit actions, replacing any bound accessor.
    pub fn set_edit_actions(&mut self, actions: Vec<EditAction>) {
        self.edit_actions = Field::Frozen(actions);
    }

    /// Bind the edit actions to an accessor.
    pub fn bind_edit_actions<F>(&mut self, accessor: F)
    where
        F: Fn(&T) -> Vec<EditAction> + Send + Sync + 'static,
    {
        self.edit_actions = Field::live(accessor);
    }

    /// Pin the reuse identifier, replacing any bound accessor.
    pub fn set_reuse_identifier(&mut self, reuse_identifier: Option<String>) {
        self.reuse_identifier = Field::Frozen(reuse_identifier);
    }

    /// Bind the reuse identifier to an accessor.
    pub fn bind_reuse_identifier<F>(&mut self, accessor: F)
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.reuse_identifier = Field::live(accessor);
    }

    /// Set or remove the image.
    pub fn set_image(&mut self, image: Option<ImageHandle>) {
        self.image = image;
    }

    /// Fluent form of [`set_image`](Self::set_image).
    pub fn with_image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    /// Fluent form of [`set_accessory`](Self::set_accessory).
    pub fn with_accessory(mut self, accessory: Accessory) -> Self {
        self.set_accessory(accessory);
        self
    }

    /// Fluent form of [`set_reuse_identifier`](Self::set_reuse_identifier).
    pub fn with_reuse_identifier(mut self, reuse_identifier: impl Into<String>) -> Self {
        self.set_reuse_identifier(Some(reuse_identifier.into()));
        self
    }

    /// Fluent form of [`bind_reuse_identifier`](Self::bind_reuse_identifier).
    pub fn with_reuse_identifier_fn<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.bind_reuse_identifier(accessor);
        self
    }

    /// Fluent form of [`set_edit_actions`](Self::set_edit_actions).
    pub fn with_edit_actions(mut self, actions: Vec<EditAction>) -> Self {
        self.set_edit_actions(actions);
        self
    }
}

impl<T: Clone> Clone for Row<T> {
    fn clone(&self) -> Self {
        Self {
            item: self.item.clone(),
            title: self.title.clone(),
            subtitle: self.subtitle.clone(),
            accessory: self.accessory.clone(),
            edit_actions: self.edit_actions.clone(),
            reuse_identifier: self.reuse_identifier.clone(),
            cell_style: self.cell_style,
            image: self.image.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Row<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Row")
            .field("item", &self.item)
            .field("title", &self.title)
            .field("subtitle", &self.subtitle)
            .field("cell_style", &self.cell_style)
            .field("accessory", &self.accessory)
            .field("reuse_identifier", &self.reuse_identifier)
            .field("image", &self.image)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Row`].
///
/// Value setters freeze a field; `*_with` setters bind an accessor. `build`
/// evaluates title and subtitle once to choose the cell style.
pub struct RowBuilder<T> {
    item: T,
    title: Field<T, String>,
    subtitle: Field<T, Option<String>>,
    accessory: Field<T, Accessory>,
    edit_actions: Field<T, Vec<EditAction>>,
    reuse_identifier: Field<T, Option<String>>,
    cell_style: Option<CellStyle>,
    image: Option<ImageHandle>,
}

impl<T> RowBuilder<T> {
    fn new(item: T) -> Self {
        Self {
            item,
            title: Field::default(),
            subtitle: Field::default(),
            accessory: Field::default(),
            edit_actions: Field::default(),
            reuse_identifier: Field::default(),
            cell_style: None,
            image: None,
        }
    }

    /// Fixed title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Field::Frozen(title.into());
        self
    }

    /// Title computed from the item.
    pub fn title_with<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.title = Field::live(accessor);
        self
    }

    /// Fixed subtitle.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Field::Frozen(Some(subtitle.into()));
        self
    }

    /// Subtitle computed from the item.
    pub fn subtitle_with<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.subtitle = Field::live(accessor);
        self
    }

    /// Fixed accessory.
    pub fn accessory(mut self, accessory: Accessory) -> Self {
        self.accessory = Field::Frozen(accessory);
        self
    }

    /// Accessory computed from the item.
    pub fn accessory_with<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> Accessory + Send + Sync + 'static,
    {
        self.accessory = Field::live(accessor);
        self
    }

    /// Fixed edit actions.
    pub fn edit_actions(mut self, actions: Vec<EditAction>) -> Self {
        self.edit_actions = Field::Frozen(actions);
        self
    }

    /// Edit actions computed from the item.
    pub fn edit_actions_with<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> Vec<EditAction> + Send + Sync + 'static,
    {
        self.edit_actions = Field::live(accessor);
        self
    }

    /// Fixed reuse identifier.
    pub fn reuse_identifier(mut self, reuse_identifier: impl Into<String>) -> Self {
        self.reuse_identifier = Field::Frozen(Some(reuse_identifier.into()));
        self
    }

    /// Reuse identifier computed from the item.
    pub fn reuse_identifier_with<F>(mut self, accessor: F) -> Self
    where
        F: Fn(&T) -> Option<String> + Send + Sync + 'static,
    {
        self.reuse_identifier = Field::live(accessor);
        self
    }

    /// Explicit cell style, skipping derivation.
    pub fn cell_style(mut self, cell_style: CellStyle) -> Self {
        self.cell_style = Some(cell_style);
        self
    }

    /// Leading image.
    pub fn image(mut self, image: ImageHandle) -> Self {
        self.image = Some(image);
        self
    }

    /// Finish the row.
    pub fn build(self) -> Row<T> {
        let cell_style = self.cell_style.unwrap_or_else(|| {
            let title = self.title.resolve(&self.item);
            let subtitle = self.subtitle.resolve(&self.item);
            derive_cell_style(&title, subtitle.as_deref())
        });

        Row {
            item: self.item,
            title: self.title,
            subtitle: self.subtitle,
            accessory: self.accessory,
            edit_actions: self.edit_actions,
            reuse_identifier: self.reuse_identifier,
            cell_style,
            image: self.image,
        }
    }
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
