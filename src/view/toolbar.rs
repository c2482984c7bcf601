//! Terminal toolbar: the shell side of [`HostWindow`].
//!
//! Holds the controls the controller registered, the status text and the
//! pending repaint flag. Buttons are laid out left to right on the middle
//! line of a bordered block; the same layout drives rendering and mouse
//! hit-testing so clicks always land on what is drawn.

use super::constants::{DOTS_PER_COLUMN, DOTS_PER_ROW};
use super::styles::{SurfaceStyles, MUTED_TEXT};
use crate::state::{HostWindow, ToolbarControl};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Gap between adjacent controls, in columns.
const CONTROL_GAP: u16 = 1;

#[derive(Debug, Clone, Default)]
pub struct Toolbar {
    controls: Vec<ToolbarControl>,
    status: String,
    surface_area: Rect,
    redraw_requested: bool,
}

impl Toolbar {
    pub fn new(surface_area: Rect) -> Self {
        Self {
            surface_area,
            ..Self::default()
        }
    }

    /// Track the terminal area the work surface occupies.
    pub fn set_surface_area(&mut self, area: Rect) {
        self.surface_area = area;
    }

    pub fn controls(&self) -> &[ToolbarControl] {
        &self.controls
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Consume a pending repaint request.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Where each control sits when the toolbar occupies `area`.
    ///
    /// Controls that do not fit are omitted. The status label takes whatever
    /// width remains.
    pub fn control_rects(&self, area: Rect) -> Vec<(ToolbarControl, Rect)> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if inner.width == 0 || inner.height == 0 {
            return Vec::new();
        }

        let right = inner.right();
        let mut x = inner.x;
        let mut rects = Vec::with_capacity(self.controls.len());
        for &control in &self.controls {
            if x >= right {
                break;
            }
            let width = match control {
                ToolbarControl::StatusLabel => right - x,
                other => label_for(other, "").chars().count() as u16,
            };
            if x + width > right {
                break;
            }
            rects.push((control, Rect::new(x, inner.y, width, 1)));
            x = x.saturating_add(width + CONTROL_GAP);
        }
        rects
    }

    /// Control under the terminal cell `(column, row)`.
    pub fn control_at(&self, area: Rect, column: u16, row: u16) -> Option<ToolbarControl> {
        self.control_rects(area)
            .into_iter()
            .find(|(_, rect)| {
                column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
            })
            .map(|(control, _)| control)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, styles: &SurfaceStyles) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(MUTED_TEXT)
            .title(" Napier's Bones ");

        let mut spans = Vec::new();
        let mut cursor = block.inner(area).x;
        for (control, rect) in self.control_rects(area) {
            if rect.x > cursor {
                spans.push(Span::raw(" ".repeat(usize::from(rect.x - cursor))));
            }
            let style = match control {
                ToolbarControl::DigitButton(_) | ToolbarControl::ClearButton => styles.button,
                ToolbarControl::Separator => MUTED_TEXT,
                ToolbarControl::StatusLabel => styles.status,
            };
            spans.push(Span::styled(label_for(control, &self.status), style));
            cursor = rect.right();
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

fn label_for(control: ToolbarControl, status: &str) -> String {
    match control {
        ToolbarControl::DigitButton(digit) => format!("[{}]", digit),
        ToolbarControl::ClearButton => format!("[{}]", control.tooltip()),
        ToolbarControl::Separator => "│".to_string(),
        ToolbarControl::StatusLabel => status.to_string(),
    }
}

impl HostWindow for Toolbar {
    fn canvas_size(&self) -> (u32, u32) {
        (
            u32::from(self.surface_area.width) * DOTS_PER_COLUMN,
            u32::from(self.surface_area.height) * DOTS_PER_ROW,
        )
    }

    fn add_toolbar_control(&mut self, control: ToolbarControl) {
        self.controls.push(control);
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Digit;
    use crate::state::{Controller, HostEvent, SurfaceGeometry};

    fn attached_toolbar() -> Toolbar {
        let mut toolbar = Toolbar::new(Rect::new(0, 3, 80, 20));
        let mut controller = Controller::new(SurfaceGeometry::new(0, 0));
        controller.attach(&mut toolbar);
        toolbar
    }

    #[test]
    fn canvas_size_counts_braille_dots() {
        let toolbar = Toolbar::new(Rect::new(0, 3, 80, 20));
        assert_eq!(toolbar.canvas_size(), (160, 80));
    }

    #[test]
    fn attach_registers_digits_clear_and_status() {
        let toolbar = attached_toolbar();
        let controls = toolbar.controls();
        assert_eq!(controls.len(), 14);
        assert_eq!(controls[0], ToolbarControl::DigitButton(Digit::ALL[0]));
        assert_eq!(controls[11], ToolbarControl::ClearButton);
        assert_eq!(controls[13], ToolbarControl::StatusLabel);
    }

    #[test]
    fn attach_requests_a_redraw_once() {
        let mut toolbar = attached_toolbar();
        assert!(toolbar.take_redraw());
        assert!(!toolbar.take_redraw());
    }

    #[test]
    fn buttons_sit_on_the_inner_line() {
        let toolbar = attached_toolbar();
        let area = Rect::new(0, 0, 80, 3);
        let rects = toolbar.control_rects(area);
        assert_eq!(rects[0].1, Rect::new(1, 1, 3, 1));
        assert_eq!(rects[1].1, Rect::new(5, 1, 3, 1));
    }

    #[test]
    fn click_on_digit_button_resolves_its_event() {
        let toolbar = attached_toolbar();
        let area = Rect::new(0, 0, 80, 3);
        let control = toolbar.control_at(area, 6, 1);
        assert_eq!(control, Some(ToolbarControl::DigitButton(Digit::ALL[1])));
        assert_eq!(
            control.and_then(ToolbarControl::event),
            Some(HostEvent::DigitPressed(Digit::ALL[1]))
        );
    }

    #[test]
    fn click_on_clear_button_resolves_clear() {
        let toolbar = attached_toolbar();
        let area = Rect::new(0, 0, 80, 3);
        let (_, rect) = toolbar
            .control_rects(area)
            .into_iter()
            .find(|(c, _)| *c == ToolbarControl::ClearButton)
            .expect("clear button laid out");
        assert_eq!(
            toolbar.control_at(area, rect.x + 2, 1),
            Some(ToolbarControl::ClearButton)
        );
    }

    #[test]
    fn click_on_border_hits_nothing() {
        let toolbar = attached_toolbar();
        assert_eq!(toolbar.control_at(Rect::new(0, 0, 80, 3), 2, 0), None);
    }

    #[test]
    fn narrow_toolbar_drops_controls_that_do_not_fit() {
        let toolbar = attached_toolbar();
        let rects = toolbar.control_rects(Rect::new(0, 0, 12, 3));
        assert_eq!(rects.len(), 2);
    }
}
