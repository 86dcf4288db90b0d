//! Sections: ordered groups of rows with optional header and footer text.

use super::field::Field;
use super::row::Row;
use std::fmt;

/// An ordered, mutable group of rows.
///
/// Insertion order is display order; duplicates are allowed. Header and footer
/// text follow the same frozen-or-live resolution as row fields, with
/// zero-argument accessors.
pub struct Section<T = ()> {
    rows: Vec<Row<T>>,
    header_title: Field<(), Option<String>>,
    footer_title: Field<(), Option<String>>,
}

impl<T> Section<T> {
    /// Empty section without header or footer.
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            header_title: Field::default(),
            footer_title: Field::default(),
        }
    }

    /// Empty section with a fixed header.
    pub fn with_header(header_title: impl Into<String>) -> Self {
        let mut section = Self::new();
        section.set_header_title(Some(header_title.into()));
        section
    }

    /// Empty section whose header is computed on every read.
    pub fn with_header_fn<F>(accessor: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        let mut section = Self::new();
        section.bind_header_title(accessor);
        section
    }

    /// Fluent fixed footer.
    pub fn footer(mut self, footer_title: impl Into<String>) -> Self {
        self.set_footer_title(Some(footer_title.into()));
        self
    }

    /// Fluent computed footer.
    pub fn footer_fn<F>(mut self, accessor: F) -> Self
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.bind_footer_title(accessor);
        self
    }

    /// Fluent row append.
    pub fn row(mut self, row: Row<T>) -> Self {
        self.rows.push(row);
        self
    }

    /// Header text.
    pub fn header_title(&self) -> Option<String> {
        self.header_title.resolve(&())
    }

    /// Footer text.
    pub fn footer_title(&self) -> Option<String> {
        self.footer_title.resolve(&())
    }

    /// Pin the header text, replacing any accessor.
    pub fn set_header_title(&mut self, header_title: Option<String>) {
        self.header_title = Field::Frozen(header_title);
    }

    /// Pin the footer text, replacing any accessor.
    pub fn set_footer_title(&mut self, footer_title: Option<String>) {
        self.footer_title = Field::Frozen(footer_title);
    }

    /// Compute the header on every read.
    pub fn bind_header_title<F>(&mut self, accessor: F)
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.header_title = Field::live(move |_: &()| accessor());
    }

    /// Compute the footer on every read.
    pub fn bind_footer_title<F>(&mut self, accessor: F)
    where
        F: Fn() -> Option<String> + Send + Sync + 'static,
    {
        self.footer_title = Field::live(move |_: &()| accessor());
    }

    /// Append a row.
    pub fn push(&mut self, row: Row<T>) {
        self.rows.push(row);
    }

    /// Insert a row at `index`, shifting later rows. Returns the row back if
    /// `index > len()`.
    pub fn insert(&mut self, index: usize, row: Row<T>) -> Result<(), Row<T>> {
        if index > self.rows.len() {
            return Err(row);
        }
        self.rows.insert(index, row);
        Ok(())
    }

    /// Remove and return the row at `index`, if any.
    pub fn remove(&mut self, index: usize) -> Option<Row<T>> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    /// Row at `index`.
    pub fn get(&self, index: usize) -> Option<&Row<T>> {
        self.rows.get(index)
    }

    /// Mutable row at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Row<T>> {
        self.rows.get_mut(index)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if the section has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Remove every row, keeping header and footer.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// Iterate rows in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Row<T>> {
        self.rows.iter()
    }

    /// Iterate rows mutably in display order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Row<T>> {
        self.rows.iter_mut()
    }
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Row<T>> for Section<T> {
    fn extend<I: IntoIterator<Item = Row<T>>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl<T> FromIterator<Row<T>> for Section<T> {
    fn from_iter<I: IntoIterator<Item = Row<T>>>(iter: I) -> Self {
        let mut section = Self::new();
        section.extend(iter);
        section
    }
}

impl<T> IntoIterator for Section<T> {
    type Item = Row<T>;
    type IntoIter = std::vec::IntoIter<Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Section<T> {
    type Item = &'a Row<T>;
    type IntoIter = std::slice::Iter<'a, Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<T: Clone> Clone for Section<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows.clone(),
            header_title: self.header_title.clone(),
            footer_title: self.footer_title.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Section<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Section")
            .field("header_title", &self.header_title)
            .field("footer_title", &self.footer_title)
            .field("rows", &self.rows)
            .finish()
    }
}
