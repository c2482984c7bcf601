//! Layout dimension constants for TUI rendering.

/// Height of the toolbar in lines (border + buttons).
pub const TOOLBAR_HEIGHT: u16 = 3;

/// Height of the key hint bar at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Braille dots per terminal column. One dot is one surface unit.
pub const DOTS_PER_COLUMN: u32 = 2;

/// Braille dots per terminal row.
pub const DOTS_PER_ROW: u32 = 4;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// How long the event loop blocks before checking for a pending repaint.
pub const POLL_INTERVAL_MS: u64 = 250;
