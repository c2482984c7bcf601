//! Acceptance tests: the applet driven through its public API.
//!
//! A recording host stands in for the terminal so every scenario runs
//! headless.

use napier::model::Digit;
use napier::state::{
    Controller, Factor, HostEvent, HostWindow, SavedState, SlotImage, SurfaceGeometry,
    ToolbarControl,
};

#[derive(Default)]
struct RecordingHost {
    size: (u32, u32),
    controls: Vec<ToolbarControl>,
    status: String,
    redraws: usize,
}

impl RecordingHost {
    fn with_size(width: u32, height: u32) -> Self {
        Self {
            size: (width, height),
            ..Self::default()
        }
    }
}

impl HostWindow for RecordingHost {
    fn canvas_size(&self) -> (u32, u32) {
        self.size
    }

    fn add_toolbar_control(&mut self, control: ToolbarControl) {
        self.controls.push(control);
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn request_redraw(&mut self) {
        self.redraws += 1;
    }
}

fn digit(value: u8) -> Digit {
    Digit::new(value).unwrap()
}

/// Full-scale surface: 1010x1001 units fits ten slots, nine digits.
fn attached() -> (Controller, RecordingHost) {
    let mut host = RecordingHost::with_size(1010, 1001);
    let mut controller = Controller::new(SurfaceGeometry::new(0, 0));
    controller.attach(&mut host);
    (controller, host)
}

fn press(controller: &mut Controller, host: &mut RecordingHost, digits: &str) {
    for ch in digits.chars() {
        let d = Digit::from_char(ch).unwrap();
        controller.handle(HostEvent::DigitPressed(d), host);
    }
}

fn hover_row(controller: &mut Controller, host: &mut RecordingHost, row: u32) {
    let y = controller.geometry().row_y(row) + 50;
    controller.handle(HostEvent::PointerMoved { x: 300, y }, host);
}

#[test]
fn reading_three_times_twenty_five() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "25");
    assert_eq!(controller.number().to_string(), "25");

    hover_row(&mut controller, &mut host, 3);
    assert_eq!(host.status, "3 × 25 = 75");
}

#[test]
fn every_factor_reads_the_right_product() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "4713");

    for row in 1..=9u32 {
        hover_row(&mut controller, &mut host, row);
        assert_eq!(host.status, format!("{} × 4713 = {}", row, 4713 * row));
    }
}

#[test]
fn pressing_at_capacity_changes_nothing() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "123456789");
    let slots_before = controller.slots().to_vec();
    let redraws_before = host.redraws;

    press(&mut controller, &mut host, "5");

    assert_eq!(controller.number().to_string(), "123456789");
    assert_eq!(controller.slots(), slots_before.as_slice());
    assert_eq!(host.redraws, redraws_before);
}

#[test]
fn clear_resets_everything_but_the_index_strip() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "907");
    hover_row(&mut controller, &mut host, 4);

    controller.handle(HostEvent::Clear, &mut host);

    assert!(controller.number().is_zero());
    assert_eq!(controller.slots()[0].image, SlotImage::Index);
    assert!(controller.slots()[1..]
        .iter()
        .all(|slot| slot.image == SlotImage::Blank));
    assert_eq!(host.status, "");
    assert!(controller.markers().is_hidden());
}

#[test]
fn header_row_and_zero_value_hide_the_result() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "12");
    hover_row(&mut controller, &mut host, 0);
    assert_eq!(host.status, "");
    assert!(controller.markers().is_hidden());

    controller.handle(HostEvent::Clear, &mut host);
    press(&mut controller, &mut host, "00");
    hover_row(&mut controller, &mut host, 5);
    assert_eq!(host.status, "");
    assert!(controller.markers().is_hidden());
}

#[test]
fn markers_bracket_the_bones_on_the_selected_row() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "25");
    hover_row(&mut controller, &mut host, 3);

    let markers = controller.markers();
    assert_eq!(markers.start.map(|p| (p.x, p.y)), Some((105, 312)));
    assert_eq!(markers.end.map(|p| (p.x, p.y)), Some((246, 342)));
    assert_eq!(markers.ovals.len(), 1);
}

#[test]
fn saved_number_restores_identical_slots() {
    let (mut typed, mut host) = attached();
    press(&mut typed, &mut host, "4713");
    let saved = typed.save();
    assert_eq!(saved.number, "4713");

    let (mut restored, _) = attached();
    assert!(restored.load(&saved));
    assert_eq!(restored.slots(), typed.slots());
    assert_eq!(restored.number(), typed.number());
}

#[test]
fn saved_state_survives_the_file_system() {
    let path = std::env::temp_dir().join("napier_acceptance_state.json");
    let _ = std::fs::remove_file(&path);

    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "4713");
    napier::state::save_state_file(&path, &controller.save()).unwrap();

    let loaded = napier::state::load_state_file(&path).unwrap().unwrap();
    assert_eq!(loaded.number, "4713");
    assert!(loaded.saved_at.is_some());

    let (mut restored, _) = attached();
    assert!(restored.load(&loaded));
    assert_eq!(restored.number().to_string(), "4713");

    std::fs::remove_file(path).ok();
}

#[test]
fn invalid_saved_numbers_are_ignored() {
    for number in ["abc", "", "0", "000", "12a"] {
        let (mut controller, _) = attached();
        assert!(
            !controller.load(&SavedState::new(number)),
            "{:?} should be ignored",
            number
        );
        assert!(controller.number().is_empty());
    }
}

#[test]
fn keyboard_row_selection_matches_pointer() {
    let (mut by_pointer, mut host) = attached();
    press(&mut by_pointer, &mut host, "36");
    hover_row(&mut by_pointer, &mut host, 7);

    let (mut by_key, mut key_host) = attached();
    press(&mut by_key, &mut key_host, "36");
    by_key.highlight(Factor::from_row(7));

    assert_eq!(by_key.status(), by_pointer.status());
    assert_eq!(by_key.markers(), by_pointer.markers());
    assert_eq!(by_key.status(), "7 × 36 = 252");
}

#[test]
fn bones_are_generated_once_per_digit() {
    let (mut controller, mut host) = attached();
    press(&mut controller, &mut host, "77777");
    assert_eq!(controller.cache().len(), 1);
    assert!(controller.cache().get(digit(7)).is_some());
}
