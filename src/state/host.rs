//! Host window capability.
//!
//! The controller never talks to a concrete toolkit. Whatever hosts it (the
//! terminal shell, or a recording double in tests) implements [`HostWindow`]
//! and forwards user input as [`HostEvent`]s.

use crate::model::Digit;

/// A control the controller asks the host to place on its toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarControl {
    /// Button emitting [`HostEvent::DigitPressed`].
    DigitButton(Digit),
    /// Button emitting [`HostEvent::Clear`].
    ClearButton,
    /// Visual gap between groups.
    Separator,
    /// Read-only label showing the status text.
    StatusLabel,
}

impl ToolbarControl {
    /// Event emitted when the control is activated, if any.
    pub fn event(self) -> Option<HostEvent> {
        match self {
            ToolbarControl::DigitButton(d) => Some(HostEvent::DigitPressed(d)),
            ToolbarControl::ClearButton => Some(HostEvent::Clear),
            ToolbarControl::Separator | ToolbarControl::StatusLabel => None,
        }
    }

    /// Hover text.
    pub fn tooltip(self) -> &'static str {
        match self {
            ToolbarControl::DigitButton(d) => d.name(),
            ToolbarControl::ClearButton => "Clear",
            ToolbarControl::Separator | ToolbarControl::StatusLabel => "",
        }
    }
}

/// User input delivered to the controller, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    DigitPressed(Digit),
    Clear,
    PointerMoved { x: u32, y: u32 },
}

/// What the controller needs from its host.
pub trait HostWindow {
    /// Current drawing surface size `(width, height)` in surface units.
    fn canvas_size(&self) -> (u32, u32);

    /// Append a control to the toolbar.
    fn add_toolbar_control(&mut self, control: ToolbarControl);

    /// Replace the status label text.
    fn set_status(&mut self, text: &str);

    /// Ask for the surface to be repainted from current state.
    fn request_redraw(&mut self);
}
