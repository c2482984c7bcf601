//! Interaction controller.
//!
//! Owns the entered number, the slot row, the read-off markers and the
//! status text. Every operation is a plain state transition that reports
//! whether the surface needs repainting; rendering only ever borrows the
//! controller immutably.

use super::cache::BoneCache;
use super::geometry::{Factor, Point, SurfaceGeometry};
use super::host::{HostEvent, HostWindow, ToolbarControl};
use super::persistence::SavedState;
use crate::model::{BoneImage, Digit, EnteredNumber};
use tracing::{debug, info, warn};

/// What a slot currently displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotImage {
    /// The fixed row-label strip (slot 0 only).
    Index,
    /// Empty placeholder.
    Blank,
    /// A digit's bone.
    Bone(Digit),
}

/// Fixed position on the surface holding one image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub x: u32,
    pub image: SlotImage,
}

/// Read-off markers for the highlighted row.
///
/// Positions are top-left corners; a `None`/empty marker is off-canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    /// Around the tens digit of the first bone.
    pub start: Option<Point>,
    /// Around the units digit of the last bone.
    pub end: Option<Point>,
    /// One per boundary between consecutive bones, grouping each diagonal.
    pub ovals: Vec<Point>,
}

impl Markers {
    pub fn is_hidden(&self) -> bool {
        self.start.is_none() && self.end.is_none() && self.ovals.is_empty()
    }
}

/// The applet's authoritative state.
#[derive(Debug, Clone)]
pub struct Controller {
    geometry: SurfaceGeometry,
    number: EnteredNumber,
    slots: Vec<Slot>,
    cache: BoneCache,
    markers: Markers,
    highlighted: Option<Factor>,
    status: String,
}

impl Controller {
    pub fn new(geometry: SurfaceGeometry) -> Self {
        Self {
            geometry,
            number: EnteredNumber::new(),
            slots: build_slots(&geometry),
            cache: BoneCache::new(geometry.scale()),
            markers: Markers::default(),
            highlighted: None,
            status: String::new(),
        }
    }

    /// Register toolbar controls and adopt the host's canvas size.
    pub fn attach(&mut self, host: &mut impl HostWindow) {
        for digit in Digit::ALL {
            host.add_toolbar_control(ToolbarControl::DigitButton(digit));
        }
        host.add_toolbar_control(ToolbarControl::Separator);
        host.add_toolbar_control(ToolbarControl::ClearButton);
        host.add_toolbar_control(ToolbarControl::Separator);
        host.add_toolbar_control(ToolbarControl::StatusLabel);

        let (width, height) = host.canvas_size();
        self.set_geometry(SurfaceGeometry::new(width, height));
        host.set_status(&self.status);
        host.request_redraw();
    }

    /// Apply one host event, pushing status and repaint requests back.
    pub fn handle(&mut self, event: HostEvent, host: &mut impl HostWindow) {
        let changed = match event {
            HostEvent::DigitPressed(digit) => self.press_digit(digit),
            HostEvent::Clear => self.clear(),
            HostEvent::PointerMoved { x, y } => self.pointer_moved(x, y),
        };
        if changed {
            host.set_status(&self.status);
            host.request_redraw();
        }
    }

    /// Append `digit` as the next bone.
    ///
    /// Silently ignored when every slot is taken. Returns whether anything
    /// changed.
    pub fn press_digit(&mut self, digit: Digit) -> bool {
        if self.number.len() >= self.geometry.capacity() {
            debug!(
                digit = digit.value(),
                capacity = self.geometry.capacity(),
                "Slots full, ignoring digit"
            );
            return false;
        }

        self.number.push(digit);
        self.cache.get_or_generate(digit);
        let slot = self.number.len();
        self.slots[slot].image = SlotImage::Bone(digit);
        debug!(digit = digit.value(), slot, number = %self.number, "Placed bone");

        if self.highlighted.is_some() {
            self.place_markers();
        }
        true
    }

    /// Remove every bone and the result.
    pub fn clear(&mut self) -> bool {
        let changed = !self.number.is_empty() || !self.status.is_empty() || !self.markers.is_hidden();
        self.number.clear();
        for slot in self.slots.iter_mut().skip(1) {
            slot.image = SlotImage::Blank;
        }
        self.markers = Markers::default();
        self.status.clear();
        changed
    }

    /// Track the pointer: the row under `y` selects the factor. `x` does not
    /// matter since every bone shares the same rows.
    pub fn pointer_moved(&mut self, _x: u32, y: u32) -> bool {
        self.highlight(self.geometry.factor_at(y))
    }

    /// Select a row directly (keyboard navigation).
    pub fn highlight(&mut self, factor: Option<Factor>) -> bool {
        let before = (self.markers.clone(), self.status.clone());
        self.highlighted = factor;
        self.place_markers();
        before != (self.markers.clone(), self.status.clone())
    }

    /// Re-fit the surface, regenerating bones at the new scale.
    ///
    /// Entered digits are replayed into the new slots; any that no longer fit
    /// are dropped.
    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) -> bool {
        if geometry == self.geometry {
            return false;
        }
        let digits = self.number.digits().to_vec();
        self.geometry = geometry;
        self.cache.rescale(geometry.scale());
        self.slots = build_slots(&geometry);
        self.number.clear();

        let capacity = geometry.capacity();
        if digits.len() > capacity {
            warn!(
                entered = digits.len(),
                capacity, "Surface shrank, dropping trailing digits"
            );
        }
        for digit in digits.into_iter().take(capacity) {
            self.press_digit(digit);
        }
        self.place_markers();
        true
    }

    /// Snapshot for persistence.
    pub fn save(&self) -> SavedState {
        SavedState::new(self.number.value_string())
    }

    /// Rebuild the slots from a saved number by replaying its digits.
    ///
    /// Non-numeric or zero values are treated as no previous state.
    pub fn load(&mut self, state: &SavedState) -> bool {
        let text = state.number.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            warn!(number = %state.number, "Ignoring non-numeric saved number");
            return false;
        }

        let saved: EnteredNumber = text.chars().filter_map(Digit::from_char).collect();
        if saved.is_zero() {
            return false;
        }

        self.clear();
        let value = saved.value_string();
        for digit in value.chars().filter_map(Digit::from_char) {
            self.press_digit(digit);
        }
        info!(number = %self.number, "Restored saved number");
        true
    }

    pub fn geometry(&self) -> &SurfaceGeometry {
        &self.geometry
    }

    pub fn number(&self) -> &EnteredNumber {
        &self.number
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Row the markers refer to, if one is selected.
    pub fn highlighted(&self) -> Option<Factor> {
        self.highlighted
    }

    /// Result text, e.g. `3 × 25 = 75`; empty when nothing is read off.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn cache(&self) -> &BoneCache {
        &self.cache
    }

    /// Image currently shown by `slot`.
    pub fn image_for(&self, slot: &Slot) -> &BoneImage {
        match slot.image {
            SlotImage::Index => self.cache.index_strip(),
            SlotImage::Blank => self.cache.blank(),
            SlotImage::Bone(digit) => self.cache.get(digit).unwrap_or(self.cache.blank()),
        }
    }

    fn place_markers(&mut self) {
        let factor = match self.highlighted {
            Some(factor) if !self.number.is_zero() => factor,
            _ => {
                self.markers = Markers::default();
                self.status.clear();
                return;
            }
        };

        let count = self.number.len();
        self.markers = Markers {
            start: Some(self.geometry.start_circle_at(factor)),
            end: Some(self.geometry.end_circle_at(count, factor)),
            ovals: (1..count)
                .map(|slot| self.geometry.oval_at(slot, factor))
                .collect(),
        };
        self.status = format!(
            "{} × {} = {}",
            factor.value(),
            self.number,
            self.number.times(factor.digit())
        );
    }
}

fn build_slots(geometry: &SurfaceGeometry) -> Vec<Slot> {
    (0..geometry.slot_count().max(1))
        .map(|index| Slot {
            index,
            x: geometry.slot_x(index),
            image: if index == 0 {
                SlotImage::Index
            } else {
                SlotImage::Blank
            },
        })
        .collect()
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
