//! Work surface geometry.
//!
//! Everything is measured in surface units (one braille dot in the terminal
//! shell). The scale is fixed by fitting one bone to the surface height;
//! every other size follows from it.

use crate::model::bone::{BONE_HEIGHT, BONE_WIDTH, ROW_COUNT, ROW_PITCH};
use crate::model::Digit;

/// Marker sizes and offsets at scale 1.0, relative to a slot's left edge and
/// the selected row's top edge.
const START_CIRCLE_OFFSET: (f64, f64) = (4.0, 12.0);
const END_CIRCLE_OFFSET: (f64, f64) = (44.0, 42.0);
const OVAL_OFFSET: (f64, f64) = (42.0, 2.0);
const CIRCLE_SIZE: f64 = 45.0;
const OVAL_SIZE: (f64, f64) = (129.0, 92.0);

/// A position on the surface (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Selected multiplier row, 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Factor(u8);

impl Factor {
    /// Row 0 is the header and rows past 9 do not exist.
    pub fn from_row(row: u32) -> Option<Self> {
        if (1..ROW_COUNT as u32).contains(&row) {
            Some(Self(row as u8))
        } else {
            None
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn row(self) -> u32 {
        u32::from(self.0)
    }

    pub fn digit(self) -> Digit {
        Digit::ALL[self.0 as usize]
    }
}

/// Derived layout of the work surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    width: u32,
    height: u32,
    scale: f64,
    bone_width: u32,
    bone_height: u32,
    row_pitch: f64,
    slot_count: usize,
}

impl SurfaceGeometry {
    /// Fit bones to a `width × height` surface.
    pub fn new(width: u32, height: u32) -> Self {
        let scale = f64::from(height) / BONE_HEIGHT;
        let bone_width = ((BONE_WIDTH * scale) as u32).max(1);
        let bone_height = (BONE_HEIGHT * scale) as u32;
        let row_pitch = ROW_PITCH * scale;
        let slot_count = (width / bone_width) as usize;
        Self {
            width,
            height,
            scale,
            bone_width,
            bone_height,
            row_pitch,
            slot_count,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn bone_width(&self) -> u32 {
        self.bone_width
    }

    pub fn bone_height(&self) -> u32 {
        self.bone_height
    }

    /// Height of one table row, truncated. Kept separate from the bone
    /// width even though the two are close at every scale.
    pub fn row_height(&self) -> u32 {
        (self.row_pitch as u32).max(1)
    }

    /// Slots that fit side by side, including the index strip.
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    /// Maximum number of entered digits.
    pub fn capacity(&self) -> usize {
        self.slot_count.saturating_sub(1)
    }

    /// Left edge of slot `index`.
    pub fn slot_x(&self, index: usize) -> u32 {
        index as u32 * self.bone_width
    }

    /// Top edge of table row `row`.
    pub fn row_y(&self, row: u32) -> u32 {
        (f64::from(row) * self.row_pitch) as u32
    }

    /// Row under a vertical pointer position.
    ///
    /// Uses the unrounded pitch so rows line up with the drawn bones.
    pub fn factor_at(&self, y: u32) -> Option<Factor> {
        if self.row_pitch <= 0.0 {
            return None;
        }
        Factor::from_row((f64::from(y) / self.row_pitch) as u32)
    }

    /// Scale a length given in units at scale 1.0, truncating.
    pub fn scaled(&self, units: f64) -> u32 {
        (units * self.scale) as u32
    }

    pub fn start_circle_at(&self, factor: Factor) -> Point {
        self.marker_at(1, factor, START_CIRCLE_OFFSET)
    }

    pub fn end_circle_at(&self, last_slot: usize, factor: Factor) -> Point {
        self.marker_at(last_slot, factor, END_CIRCLE_OFFSET)
    }

    /// Oval bridging slot `slot` and the slot to its right.
    pub fn oval_at(&self, slot: usize, factor: Factor) -> Point {
        self.marker_at(slot, factor, OVAL_OFFSET)
    }

    pub fn circle_size(&self) -> u32 {
        self.scaled(CIRCLE_SIZE)
    }

    /// Oval `(width, height)`.
    pub fn oval_size(&self) -> (u32, u32) {
        (self.scaled(OVAL_SIZE.0), self.scaled(OVAL_SIZE.1))
    }

    fn marker_at(&self, slot: usize, factor: Factor, offset: (f64, f64)) -> Point {
        Point::new(
            self.slot_x(slot) + self.scaled(offset.0),
            self.row_y(factor.row()) + self.scaled(offset.1),
        )
    }
}
