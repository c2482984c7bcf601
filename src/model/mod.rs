//! Domain model types (pure).
//!
//! Digits, bone tables and the lattice arithmetic they encode.

pub mod bone;
pub mod digit;
pub mod error;
pub mod key_action;
pub mod lattice;
pub mod svg;

// Re-export for convenience
pub use bone::{generate, BoneCell, BoneImage, BoneKind, Element};
pub use digit::{Digit, InvalidDigit};
pub use error::{AppError, ExportError, StateError};
pub use key_action::KeyAction;
pub use lattice::{lattice_product, EnteredNumber};
pub use svg::to_svg;
