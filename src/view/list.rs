//! Sectioned list widget.
//!
//! Draws a [`ListSource`] as headers, rows and footers, one terminal line
//! each. Rows are always drawn through [`ListSource::cell_content`], the same
//! query path any other surface would use.

use super::styles::{accessory_glyph, ListStyles};
use crate::model::{CellStyle, IndexPath};
use crate::source::ListSource;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{StatefulWidget, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker drawn before the selected row.
const SELECTED_MARKER: &str = "> ";
/// Indent of unselected rows and of footers.
const ROW_INDENT: &str = "  ";
/// Marker for rows that can be edited.
const EDITABLE_MARKER: &str = "✎";
/// Shown when the list has no sections.
const EMPTY_TEXT: &str = "(empty)";

/// Selection and scroll position of a [`SectionedList`].
///
/// The selection is a coordinate pair and may go stale when the list is
/// refreshed; rendering tolerates that, and [`reconcile`](Self::reconcile)
/// moves it back onto a real row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionedListState {
    selected: Option<IndexPath>,
    offset: usize,
}

impl SectionedListState {
    /// Nothing selected, scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected coordinates, possibly stale.
    pub fn selected(&self) -> Option<IndexPath> {
        self.selected
    }

    /// Index of the first visible line.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Select `path` without validating it.
    pub fn select(&mut self, path: Option<IndexPath>) {
        self.selected = path;
    }

    /// Move to the next row, crossing section boundaries. Stays on the last row.
    pub fn select_next<T>(&mut self, source: &ListSource<T>) {
        let paths: Vec<IndexPath> = source.index_paths().collect();
        self.selected = match self.position_in(&paths) {
            Some(position) => paths.get(position + 1).or(paths.last()).copied(),
            None => paths.first().copied(),
        };
    }

    /// Move to the previous row. Stays on the first row.
    pub fn select_previous<T>(&mut self, source: &ListSource<T>) {
        let paths: Vec<IndexPath> = source.index_paths().collect();
        self.selected = match self.position_in(&paths) {
            Some(position) => paths.get(position.saturating_sub(1)).copied(),
            None => paths.last().copied(),
        };
    }

    /// Select the first row, if any.
    pub fn select_first<T>(&mut self, source: &ListSource<T>) {
        self.selected = source.index_paths().next();
    }

    /// Select the last row, if any.
    pub fn select_last<T>(&mut self, source: &ListSource<T>) {
        self.selected = source.index_paths().last();
    }

    /// Repair a selection that no longer addresses a row.
    ///
    /// A stale selection moves to the last row of its section if that
    /// section still has rows, otherwise to the last row of the list, or to
    /// nothing when the list is empty. Uses the side-effect free lookup, so no
    /// stale-coordinate diagnostic is raised.
    pub fn reconcile<T>(&mut self, source: &ListSource<T>) {
        let Some(selected) = self.selected else {
            return;
        };
        if source.try_row_at(selected).is_ok() {
            return;
        }

        self.selected = selected
            .section_index()
            .filter(|&section| source.row_count(section) > 0)
            .map(|section| IndexPath::from((section, source.row_count(section) - 1)))
            .or_else(|| source.index_paths().last());
    }

    fn position_in(&self, paths: &[IndexPath]) -> Option<usize> {
        let selected = self.selected?;
        paths.iter().position(|path| *path == selected)
    }
}

/// One terminal line of the laid-out list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum DisplayLine {
    Header(String),
    Row(IndexPath),
    Footer(String),
    Spacer,
}

fn layout_lines<T>(source: &ListSource<T>, show_footers: bool) -> Vec<DisplayLine> {
    let mut lines = Vec::new();

    for section in 0..source.section_count() {
        if section > 0 {
            lines.push(DisplayLine::Spacer);
        }
        if let Some(header) = source.header_title(section) {
            lines.push(DisplayLine::Header(header));
        }
        for row in 0..source.row_count(section) {
            lines.push(DisplayLine::Row(IndexPath::from((section, row))));
        }
        if show_footers {
            if let Some(footer) = source.footer_title(section) {
                lines.push(DisplayLine::Footer(footer));
            }
        }
    }

    lines
}

/// First visible line so that `selected_line` is on screen.
fn scroll_offset(offset: usize, selected_line: Option<usize>, height: usize, total: usize) -> usize {
    let offset = offset.min(total.saturating_sub(height));
    match selected_line {
        Some(line) if line < offset => line,
        Some(line) if line >= offset + height => line + 1 - height,
        _ => offset,
    }
}

/// Cut `text` to `max_width` columns, ending with an ellipsis when cut.
pub(crate) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_width - 1 {
            break;
        }
        truncated.push(ch);
        used += width;
    }
    truncated.push('…');
    truncated
}

fn fit_spans(spans: Vec<Span<'static>>, max_width: usize) -> Vec<Span<'static>> {
    let mut remaining = max_width;
    let mut fitted = Vec::with_capacity(spans.len());

    for span in spans {
        if remaining == 0 {
            break;
        }
        let width = span.content.width();
        if width <= remaining {
            remaining -= width;
            fitted.push(span);
        } else {
            fitted.push(Span::styled(
                truncate_to_width(&span.content, remaining),
                span.style,
            ));
            remaining = 0;
        }
    }

    fitted
}

/// Widget drawing a [`ListSource`].
#[derive(Debug)]
pub struct SectionedList<'a, T> {
    source: &'a ListSource<T>,
    styles: ListStyles,
    show_footers: bool,
}

impl<'a, T> SectionedList<'a, T> {
    /// Widget over `source` with default styles and footers shown.
    pub fn new(source: &'a ListSource<T>) -> Self {
        Self {
            source,
            styles: ListStyles::default(),
            show_footers: true,
        }
    }

    /// Use `styles`.
    pub fn styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Draw section footers or not.
    pub fn show_footers(mut self, show_footers: bool) -> Self {
        self.show_footers = show_footers;
        self
    }

    fn render_row(&self, path: IndexPath, selected: bool, area: Rect, buf: &mut Buffer) {
        let cell = self.source.cell_content(path);
        let width = usize::from(area.width);

        let mut trailing = Vec::new();
        if self.source.can_edit_row(path) {
            trailing.push(EDITABLE_MARKER);
        }
        let glyph = accessory_glyph(cell.accessory);
        if !glyph.is_empty() {
            trailing.push(glyph);
        }
        let trailing = trailing.join(" ");
        let trailing_width = trailing.width();

        let mut spans = vec![Span::raw(if selected {
            SELECTED_MARKER
        } else {
            ROW_INDENT
        })];
        if let Some(image) = &cell.image {
            spans.push(Span::raw(format!("{image} ")));
        }
        spans.push(Span::styled(
            cell.text.unwrap_or_default(),
            self.styles.title,
        ));
        if cell.style == CellStyle::Subtitle {
            if let Some(detail) = cell.detail_text {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(detail, self.styles.detail));
            }
        }

        let gap = usize::from(trailing_width > 0);
        let left_width = width.saturating_sub(trailing_width + gap);
        let line = Line::from(fit_spans(spans, left_width));
        let line = if selected {
            line.style(self.styles.selected)
        } else {
            line
        };
        line.render(area, buf);

        if trailing_width > 0 && trailing_width <= width {
            let x = area.right() - trailing_width as u16;
            buf.set_string(x, area.y, &trailing, self.styles.accessory);
        }
    }
}

impl<T> StatefulWidget for SectionedList<'_, T> {
    type State = SectionedListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        let lines = layout_lines(self.source, self.show_footers);
        if lines.is_empty() {
            state.offset = 0;
            Line::styled(EMPTY_TEXT, self.styles.footer).render(area, buf);
            return;
        }

        let height = usize::from(area.height);
        let selected_line = state
            .selected
            .and_then(|path| lines.iter().position(|line| *line == DisplayLine::Row(path)));
        state.offset = scroll_offset(state.offset, selected_line, height, lines.len());

        let width = usize::from(area.width);
        for (i, line) in lines.iter().skip(state.offset).take(height).enumerate() {
            let line_area = Rect::new(area.x, area.y + i as u16, area.width, 1);
            match line {
                DisplayLine::Header(text) => {
                    Line::styled(truncate_to_width(text, width), self.styles.header)
                        .render(line_area, buf);
                }
                DisplayLine::Row(path) => {
                    self.render_row(*path, state.selected == Some(*path), line_area, buf);
                }
                DisplayLine::Footer(text) => {
                    let text = truncate_to_width(text, width.saturating_sub(ROW_INDENT.len()));
                    Line::from(vec![
                        Span::raw(ROW_INDENT),
                        Span::styled(text, self.styles.footer),
                    ])
                    .render(line_area, buf);
                }
                DisplayLine::Spacer => {}
            }
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
