//! Colours for the work surface and toolbar.

use crate::model::BoneKind;
use ratatui::style::{Color, Modifier, Style};

/// Dimmed text for hints and separators.
pub const MUTED_TEXT: Style = Style::new().fg(Color::DarkGray);

// ===== ColorConfig =====

/// Whether colour output is enabled.
///
/// Disabled by:
/// - `--no-color` CLI flag or `no_color` in the config file
/// - `NO_COLOR` environment variable (any value)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the resolved flag and environment.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== SurfaceStyles =====

/// Palette for everything drawn on the canvas and toolbar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStyles {
    pub bone_line: Color,
    pub index_line: Color,
    pub blank_line: Color,
    pub digit: Style,
    pub label: Style,
    pub start_circle: Color,
    pub end_circle: Color,
    pub oval: Color,
    pub button: Style,
    pub status: Style,
}

impl SurfaceStyles {
    pub fn new(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                bone_line: Color::Gray,
                index_line: Color::Cyan,
                blank_line: Color::DarkGray,
                digit: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
                label: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                start_circle: Color::Red,
                end_circle: Color::Red,
                oval: Color::Yellow,
                button: Style::new().fg(Color::Green),
                status: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                bone_line: Color::Reset,
                index_line: Color::Reset,
                blank_line: Color::Reset,
                digit: Style::new().add_modifier(Modifier::BOLD),
                label: Style::new(),
                start_circle: Color::Reset,
                end_circle: Color::Reset,
                oval: Color::Reset,
                button: Style::new(),
                status: Style::new().add_modifier(Modifier::BOLD),
            }
        }
    }

    /// Line colour for a strip.
    pub fn line_for(&self, kind: BoneKind) -> Color {
        match kind {
            BoneKind::Digit(_) => self.bone_line,
            BoneKind::Index => self.index_line,
            BoneKind::Blank => self.blank_line,
        }
    }

    /// Glyph style for a strip.
    pub fn glyph_for(&self, kind: BoneKind) -> Style {
        match kind {
            BoneKind::Index => self.label,
            BoneKind::Digit(_) | BoneKind::Blank => self.digit,
        }
    }
}

impl Default for SurfaceStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}
