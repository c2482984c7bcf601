//! Help overlay widget.
//!
//! Shows a centered modal with the keyboard shortcuts and a short note on
//! reading a product off the bones. Triggered by '?', dismissed by 'Esc' or
//! '?'.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(vec![Span::styled(
        " Press Esc or ? to close ",
        super::styles::MUTED_TEXT.add_modifier(Modifier::DIM),
    )]))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Rect of `percent_x` by `percent_y` of `area`, centered within it.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(Color::White);

    let shortcut = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<12}", key), key_style),
            Span::styled(desc, desc_style),
        ])
    };

    vec![
        Line::from(vec![Span::styled("Bones", category_style)]),
        shortcut("0-9", "Place the bone for that digit"),
        shortcut("c/Delete", "Clear all bones"),
        Line::from(""),
        Line::from(vec![Span::styled("Reading", category_style)]),
        shortcut("mouse", "Hover a row to multiply by it"),
        shortcut("k/↑ j/↓", "Select the row above or below"),
        Line::from(""),
        Line::from(vec![Span::styled("Application", category_style)]),
        shortcut("?", "Toggle this help"),
        shortcut("q/Ctrl+c", "Quit (the number is saved)"),
        Line::from(""),
        Line::from(vec![Span::styled("How to read", category_style)]),
        Line::from(Span::styled(
            "  Add the digits inside each oval, right to left, carrying into the next oval.",
            desc_style,
        )),
    ]
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
