//! Tests for the TUI event handling and frame rendering.

use super::*;
use crate::model::Digit;
use crate::state::ToolbarControl;
use ratatui::backend::TestBackend;

fn create_test_app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    TuiApp::new_for_test(terminal)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_digits(app: &mut TuiApp<TestBackend>, digits: &str) {
    for ch in digits.chars() {
        app.handle_key(key(KeyCode::Char(ch)));
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn screen_text(app: &TuiApp<TestBackend>) -> String {
    let buffer = app.terminal().backend().buffer();
    let area = buffer.area();
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn tui_error_from_io_error() {
    let io_err = io::Error::other("test error");
    let tui_err: TuiError = io_err.into();
    assert!(matches!(tui_err, TuiError::Io(_)));
}

#[test]
fn handle_key_q_returns_true() {
    let mut app = create_test_app();
    assert!(app.handle_key(key(KeyCode::Char('q'))), "'q' should trigger quit");
}

#[test]
fn handle_key_ctrl_c_returns_true() {
    let mut app = create_test_app();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.handle_key(ctrl_c), "Ctrl+C should trigger quit");
}

#[test]
fn handle_key_unbound_returns_false() {
    let mut app = create_test_app();
    assert!(!app.handle_key(key(KeyCode::Char('z'))));
}

#[test]
fn attaching_fits_surface_below_toolbar() {
    let app = create_test_app();
    let geometry = app.controller().geometry();
    assert_eq!((geometry.width(), geometry.height()), (160, 80));
    assert_eq!(geometry.capacity(), 19);
    assert_eq!(app.toolbar().controls().len(), 14);
}

#[test]
fn digit_keys_place_bones_in_order() {
    let mut app = create_test_app();
    type_digits(&mut app, "4713");
    assert_eq!(app.controller().number().to_string(), "4713");
}

#[test]
fn hovering_a_row_reads_off_the_product() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");

    // Terminal row 9 is surface row 6, dots 24..28, inside table row 3.
    app.handle_mouse(mouse(MouseEventKind::Moved, 10, 9));

    assert_eq!(app.controller().status(), "3 × 25 = 75");
    assert_eq!(app.toolbar().status(), "3 × 25 = 75");
}

#[test]
fn status_is_drawn_in_the_toolbar() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_mouse(mouse(MouseEventKind::Moved, 10, 9));
    app.draw().unwrap();

    let text = screen_text(&app);
    let toolbar_line = text.lines().nth(1).unwrap_or_default();
    assert!(
        toolbar_line.contains("3 × 25 = 75"),
        "toolbar line was {:?}",
        toolbar_line
    );
    assert!(toolbar_line.contains("[Clear]"));
}

#[test]
fn hovering_the_header_row_hides_the_result() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_mouse(mouse(MouseEventKind::Moved, 10, 9));
    app.handle_mouse(mouse(MouseEventKind::Moved, 10, 3));

    assert_eq!(app.controller().status(), "");
    assert!(app.controller().markers().is_hidden());
}

#[test]
fn hovering_the_toolbar_changes_nothing() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_mouse(mouse(MouseEventKind::Moved, 10, 9));
    app.handle_mouse(mouse(MouseEventKind::Moved, 10, 1));
    assert_eq!(app.controller().status(), "3 × 25 = 75");
}

#[test]
fn clicking_digit_buttons_places_bones() {
    let mut app = create_test_app();
    // Buttons are "[d]" plus a gap, starting inside the left border.
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1 + 4 * 8 + 1, 1));
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 1 + 4 * 3 + 1, 1));
    assert_eq!(app.controller().number().to_string(), "83");
}

#[test]
fn clicking_clear_button_empties_the_slots() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_key(key(KeyCode::Down));

    let toolbar_area = app.areas.toolbar;
    let (_, rect) = app
        .toolbar()
        .control_rects(toolbar_area)
        .into_iter()
        .find(|(control, _)| *control == ToolbarControl::ClearButton)
        .unwrap();
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y));

    assert!(app.controller().number().is_empty());
    assert_eq!(app.toolbar().status(), "");
    assert!(app.controller().markers().is_hidden());
}

#[test]
fn c_key_clears() {
    let mut app = create_test_app();
    type_digits(&mut app, "99");
    app.handle_key(key(KeyCode::Char('c')));
    assert!(app.controller().number().is_empty());
}

#[test]
fn down_arrow_starts_at_first_row() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.controller().status(), "1 × 25 = 25");
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.controller().status(), "2 × 25 = 50");
}

#[test]
fn up_arrow_starts_at_last_row_and_stops_at_first() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.controller().status(), "9 × 25 = 225");

    for _ in 0..20 {
        app.handle_key(key(KeyCode::Char('k')));
    }
    assert_eq!(app.controller().status(), "1 × 25 = 25");
}

#[test]
fn question_mark_toggles_help() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Char('?')));
    assert!(app.help_visible);
    app.handle_key(key(KeyCode::Char('?')));
    assert!(!app.help_visible);
}

#[test]
fn escape_closes_help() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Char('?')));
    assert!(!app.handle_key(key(KeyCode::Esc)));
    assert!(!app.help_visible);
}

#[test]
fn help_overlay_blocks_digits_and_mouse() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Char('?')));
    type_digits(&mut app, "12");
    app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 2, 1));
    assert!(app.controller().number().is_empty());
}

#[test]
fn help_overlay_still_allows_quit() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Char('?')));
    assert!(app.handle_key(key(KeyCode::Char('q'))));
}

#[test]
fn help_overlay_is_drawn() {
    let mut app = create_test_app();
    app.handle_key(key(KeyCode::Char('?')));
    app.draw().unwrap();
    assert!(screen_text(&app).contains("Press Esc or ? to close"));
}

#[test]
fn resize_drops_digits_that_no_longer_fit() {
    let mut app = create_test_app();
    type_digits(&mut app, "123456");

    app.terminal.backend_mut().resize(20, 24);
    app.handle_resize(20, 24);

    // 20 columns is 40 dots: five 8-dot slots, one of them the index strip.
    assert_eq!(app.controller().geometry().capacity(), 4);
    assert_eq!(app.controller().number().to_string(), "1234");
}

#[test]
fn resize_keeps_the_selected_row() {
    let mut app = create_test_app();
    type_digits(&mut app, "25");
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));

    app.terminal.backend_mut().resize(100, 40);
    app.handle_resize(100, 40);

    assert_eq!(app.controller().status(), "2 × 25 = 50");
    assert_eq!(app.toolbar().status(), "2 × 25 = 50");
}

#[test]
fn draw_picks_up_backend_size_changes() {
    let mut app = create_test_app();
    app.terminal.backend_mut().resize(40, 24);
    app.draw().unwrap();
    assert_eq!(app.controller().geometry().width(), 80);
}

#[test]
fn restore_replays_saved_number() {
    let mut app = create_test_app();
    app.restore(&SavedState::new("4713"));
    assert_eq!(app.controller().number().to_string(), "4713");
    assert_eq!(app.save().number, "4713");
}

#[test]
fn restore_ignores_garbage() {
    let mut app = create_test_app();
    type_digits(&mut app, "12");
    app.restore(&SavedState::new("not a number"));
    assert_eq!(app.controller().number().to_string(), "12");
}

#[test]
fn capacity_limit_ignores_extra_digits() {
    let mut app = create_test_app();
    type_digits(&mut app, &"7".repeat(25));
    assert_eq!(app.controller().number().len(), 19);
}

#[test]
fn cli_args_new_stores_all_fields() {
    let args = CliArgs::new(PathBuf::from("/tmp/state.json"), false, true);
    assert_eq!(args.state_file, PathBuf::from("/tmp/state.json"));
    assert!(!args.restore_state);
    assert!(args.no_color);
}

#[test]
fn surface_point_maps_cells_to_dot_centres() {
    let app = create_test_app();
    assert_eq!(app.surface_point(0, 3), Some((1, 2)));
    assert_eq!(app.surface_point(5, 4), Some((11, 6)));
    assert_eq!(app.surface_point(0, 2), None);
    assert_eq!(app.surface_point(0, 23), None);
}

#[test]
fn digit_type_round_trips_through_bindings() {
    let mut app = create_test_app();
    for digit in Digit::ALL {
        app.handle_key(key(KeyCode::Char(digit.as_char())));
    }
    assert_eq!(app.controller().number().len(), 10);
    assert_eq!(app.controller().number().to_string(), "123456789");
}
