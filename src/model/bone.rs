//! Bone table generation.
//!
//! A bone is a vertical strip of ten boxes. Row 0 holds the bare digit;
//! row `i` (1..=9) holds `i × d` split by a diagonal, tens in the upper-left
//! triangle and units in the lower-right one. Reading adjacent bones along
//! the diagonals gives the product of a multi-digit number by `i`.
//!
//! All geometry is expressed in surface units at scale 1.0 and multiplied by
//! the caller's scale, so the same image serves the terminal canvas and the
//! SVG export.

use super::digit::Digit;

/// Width of one bone at scale 1.0.
pub const BONE_WIDTH: f64 = 101.0;

/// Vertical distance between the tops of two consecutive rows at scale 1.0.
pub const ROW_PITCH: f64 = 100.0;

/// Side of one box at scale 1.0.
pub const BOX_SIZE: f64 = 99.0;

/// Header row plus the nine multiples.
pub const ROW_COUNT: usize = 10;

/// Height of one bone at scale 1.0.
pub const BONE_HEIGHT: f64 = ROW_PITCH * ROW_COUNT as f64 + 1.0;

/// Glyph height relative to the box.
const GLYPH_SIZE: f64 = 40.0;

/// Glyph centres inside a box, relative to its top-left corner.
const HEADER_CENTRE: (f64, f64) = (50.0, 50.0);
const TENS_CENTRE: (f64, f64) = (25.0, 35.0);
const UNITS_CENTRE: (f64, f64) = (70.0, 68.0);

/// What a strip depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneKind {
    /// Multiplication table of one digit.
    Digit(Digit),
    /// Fixed leftmost strip with the row labels.
    Index,
    /// Empty placeholder outline.
    Blank,
}

/// Content of one row of a strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoneCell {
    /// A single centred glyph (bone header or index label).
    Single(char),
    /// Two digits separated by the diagonal.
    Split { tens: u8, units: u8 },
}

impl BoneCell {
    /// Numeric value of a split cell.
    pub fn product(self) -> Option<u8> {
        match self {
            BoneCell::Split { tens, units } => Some(tens * 10 + units),
            BoneCell::Single(_) => None,
        }
    }
}

/// A primitive of the vector image, in scaled surface units (y grows down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Element {
    /// Square outline with its top-left corner at `(x, y)`.
    Box { x: f64, y: f64, size: f64 },
    /// Rectangular outline.
    Frame {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Straight line segment.
    Diagonal { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// A glyph centred on `(x, y)`.
    Glyph { x: f64, y: f64, size: f64, text: char },
}

/// Immutable rendered strip.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneImage {
    kind: BoneKind,
    scale: f64,
    cells: Vec<BoneCell>,
    elements: Vec<Element>,
}

impl BoneImage {
    pub fn kind(&self) -> BoneKind {
        self.kind
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn width(&self) -> f64 {
        BONE_WIDTH * self.scale
    }

    pub fn height(&self) -> f64 {
        BONE_HEIGHT * self.scale
    }

    /// Row contents; empty for a blank strip.
    pub fn cells(&self) -> &[BoneCell] {
        &self.cells
    }

    pub fn cell(&self, row: usize) -> Option<BoneCell> {
        self.cells.get(row).copied()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// Generate the multiplication table strip for `digit`.
///
/// Deterministic and side-effect free; callers cache the result per digit.
pub fn generate(digit: Digit, scale: f64) -> BoneImage {
    let d = digit.value();
    let cells = (0..ROW_COUNT)
        .map(|row| {
            if row == 0 {
                BoneCell::Single(digit.as_char())
            } else {
                let product = row as u8 * d;
                BoneCell::Split {
                    tens: product / 10,
                    units: product % 10,
                }
            }
        })
        .collect();
    build(BoneKind::Digit(digit), cells, scale)
}

/// The index strip: `×` over the row labels 1–9.
pub fn index_strip(scale: f64) -> BoneImage {
    let cells = (0..ROW_COUNT)
        .map(|row| {
            if row == 0 {
                BoneCell::Single('×')
            } else {
                BoneCell::Single((b'0' + row as u8) as char)
            }
        })
        .collect();
    build(BoneKind::Index, cells, scale)
}

/// Outline shown in slots that hold no bone yet.
pub fn blank_strip(scale: f64) -> BoneImage {
    let elements = vec![Element::Frame {
        x: scale,
        y: scale,
        width: BOX_SIZE * scale,
        height: (BONE_HEIGHT - 2.0) * scale,
    }];
    BoneImage {
        kind: BoneKind::Blank,
        scale,
        cells: Vec::new(),
        elements,
    }
}

fn build(kind: BoneKind, cells: Vec<BoneCell>, scale: f64) -> BoneImage {
    let mut elements = Vec::with_capacity(cells.len() * 4);
    for (row, cell) in cells.iter().enumerate() {
        let top = row as f64 * ROW_PITCH + 1.0;
        elements.push(Element::Box {
            x: scale,
            y: top * scale,
            size: BOX_SIZE * scale,
        });
        match *cell {
            BoneCell::Single(text) => elements.push(glyph(HEADER_CENTRE, top, text, scale)),
            BoneCell::Split { tens, units } => {
                elements.push(Element::Diagonal {
                    x1: scale,
                    y1: (top + BOX_SIZE - 1.0) * scale,
                    x2: BOX_SIZE * scale,
                    y2: top * scale,
                });
                elements.push(glyph(TENS_CENTRE, top, (b'0' + tens) as char, scale));
                elements.push(glyph(UNITS_CENTRE, top, (b'0' + units) as char, scale));
            }
        }
    }
    BoneImage {
        kind,
        scale,
        cells,
        elements,
    }
}

fn glyph(centre: (f64, f64), top: f64, text: char, scale: f64) -> Element {
    Element::Glyph {
        x: centre.0 * scale,
        y: (top + centre.1) * scale,
        size: GLYPH_SIZE * scale,
        text,
    }
}
