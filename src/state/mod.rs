//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod cache;
pub mod controller;
pub mod geometry;
pub mod host;
pub mod persistence;

// Re-export for convenience
pub use cache::BoneCache;
pub use controller::{Controller, Markers, Slot, SlotImage};
pub use geometry::{Factor, Point, SurfaceGeometry};
pub use host::{HostEvent, HostWindow, ToolbarControl};
pub use persistence::{load_state_file, save_state_file, SavedState};
