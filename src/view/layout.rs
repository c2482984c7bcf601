//! Screen layout: toolbar on top, work surface in the middle, key hints at
//! the bottom.

use super::constants::{STATUS_BAR_HEIGHT, TOOLBAR_HEIGHT};
use super::styles::{SurfaceStyles, MUTED_TEXT};
use super::surface::SurfaceView;
use super::toolbar::Toolbar;
use crate::state::Controller;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenAreas {
    pub toolbar: Rect,
    pub surface: Rect,
    pub status: Rect,
}

/// Split the frame into toolbar, surface and hint bar.
pub fn calculate_areas(frame_area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TOOLBAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        toolbar: chunks[0],
        surface: chunks[1],
        status: chunks[2],
    }
}

/// Render every region of the screen.
pub fn render_layout(
    frame: &mut Frame,
    areas: ScreenAreas,
    toolbar: &Toolbar,
    controller: &Controller,
    styles: &SurfaceStyles,
) {
    toolbar.render(frame, areas.toolbar, styles);
    frame.render_widget(SurfaceView::new(controller, styles), areas.surface);
    render_hint_bar(frame, areas.status);
}

fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let hints = Line::from(vec![Span::styled(
        " 0-9 add bone | c clear | ↑/↓ select row | ? help | q quit",
        MUTED_TEXT,
    )]);
    frame.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn areas_stack_toolbar_surface_and_hints() {
        let areas = calculate_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.toolbar, Rect::new(0, 0, 80, TOOLBAR_HEIGHT));
        assert_eq!(areas.surface, Rect::new(0, 3, 80, 20));
        assert_eq!(areas.status, Rect::new(0, 23, 80, STATUS_BAR_HEIGHT));
    }

    #[test]
    fn tiny_terminal_gives_empty_surface() {
        let areas = calculate_areas(Rect::new(0, 0, 10, 4));
        assert_eq!(areas.surface.height, 0);
    }
}
