//! Domain-level keyboard actions independent of key bindings.

use super::digit::Digit;

/// User intent behind a key press.
///
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Append a bone for this digit. Default: 0-9
    PressDigit(Digit),
    /// Remove every bone. Default: c
    Clear,
    /// Highlight the row above the current one. Default: k/↑
    RowUp,
    /// Highlight the row below the current one. Default: j/↓
    RowDown,
    /// Show or hide the keyboard shortcuts. Default: ?
    Help,
    /// Exit, saving the entered number. Default: q/Ctrl+c
    Quit,
}
