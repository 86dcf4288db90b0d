//! List styling configuration.
//!
//! Headers, footers, detail text and accessories get distinct colors; the
//! selected row is drawn reversed.

use crate::model::{Accessory, EditActionStyle};
use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Colors switched on or off explicitly.
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ListStyles =====

/// Styles used by [`SectionedList`](super::SectionedList).
///
/// With colors disabled only modifiers remain, so the selection and headers
/// stay distinguishable on monochrome terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStyles {
    /// Section header text.
    pub header: Style,
    /// Section footer text.
    pub footer: Style,
    /// Row title.
    pub title: Style,
    /// Row detail text.
    pub detail: Style,
    /// Accessory glyphs and the editable marker.
    pub accessory: Style,
    /// Patch applied to the selected row.
    pub selected: Style,
    /// Bottom status bar.
    pub status: Style,
    /// Status messages about destructive actions.
    pub destructive: Style,
}

impl ListStyles {
    /// Styles with the default color scheme, honoring `NO_COLOR`.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Styles for the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let monochrome = Self {
            header: Style::default().add_modifier(Modifier::BOLD),
            footer: Style::default().add_modifier(Modifier::ITALIC),
            title: Style::default(),
            detail: Style::default().add_modifier(Modifier::DIM),
            accessory: Style::default(),
            selected: Style::default().add_modifier(Modifier::REVERSED),
            status: Style::default().add_modifier(Modifier::REVERSED),
            destructive: Style::default().add_modifier(Modifier::BOLD),
        };

        if !config.colors_enabled() {
            return monochrome;
        }

        Self {
            header: monochrome.header.fg(Color::Cyan),
            footer: monochrome.footer.fg(Color::DarkGray),
            detail: Style::default().fg(Color::Gray),
            accessory: Style::default().fg(Color::Blue),
            destructive: monochrome.destructive.fg(Color::Red),
            ..monochrome
        }
    }

    /// Style for a status message about an action of `style`.
    pub fn for_action(&self, style: EditActionStyle) -> Style {
        match style {
            EditActionStyle::Normal => self.status,
            EditActionStyle::Destructive => self.status.patch(self.destructive),
        }
    }
}

impl Default for ListStyles {
    fn default() -> Self {
        Self::new()
    }
}

/// Glyph drawn at the trailing edge of a row.
pub fn accessory_glyph(accessory: Accessory) -> &'static str {
    match accessory {
        Accessory::None => "",
        Accessory::DisclosureIndicator => "›",
        Accessory::Checkmark => "✓",
        Accessory::DetailButton => "ⓘ",
        Accessory::DetailDisclosureButton => "ⓘ ›",
    }
}

// ===== Tests =====
