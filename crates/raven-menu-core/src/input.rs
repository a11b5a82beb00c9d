//! Platform independent input events.

use crate::dispatch::Activation;
use crate::services::Point;

/// Keyboard commands understood by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Home,
    End,
    Activate,
    Cancel,
    /// Make the menu background more opaque
    OpacityUp,
    /// Make the menu background more transparent
    OpacityDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
    WheelUp,
    WheelDown,
}

impl PointerButton {
    pub fn is_wheel(&self) -> bool {
        matches!(self, Self::WheelUp | Self::WheelDown)
    }
}

/// One event from the windowing collaborator.
///
/// Pointer positions are screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyAction),
    Button { button: PointerButton, position: Point },
    Motion(Point),
    /// The window needs repainting (expose, resize)
    Expose,
}

/// What handling a single event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    SelectionMoved,
    ViewportShifted,
    Activated(Activation),
    /// Background opacity changed
    Cosmetic,
    /// Show the window again without any state change
    Remap,
    /// Leave without running anything
    Exit,
}

impl Outcome {
    /// Exit status when the menu should terminate after this event
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Outcome::Exit => Some(0),
            Outcome::Activated(activation) => activation.exit_code(),
            _ => None,
        }
    }

    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Outcome::Unchanged | Outcome::Exit)
    }
}
