//! Platform-neutral input events consumed by the dispatch loop

use std::fmt;

/// Identifier of a key or mouse button, scoped per [`DeviceClass`]
pub type InputCode = u16;

/// Device class an [`InputCode`] belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Keyboard,
    Mouse,
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceClass::Keyboard => f.write_str("keyboard"),
            DeviceClass::Mouse => f.write_str("mouse"),
        }
    }
}

/// Kind of a raw hook event
///
/// Mouse kinds follow the hook naming: `MouseHold` is the button-pressed
/// notification and `MouseDown` is the "clicked" notification that some
/// hooks emit after the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    KeyDown,
    KeyHold,
    KeyUp,
    MouseDown,
    MouseUp,
    MouseHold,
}

impl EventKind {
    /// Device class this kind of event originates from
    pub fn device(self) -> DeviceClass {
        match self {
            EventKind::KeyDown | EventKind::KeyHold | EventKind::KeyUp => DeviceClass::Keyboard,
            EventKind::MouseDown | EventKind::MouseUp | EventKind::MouseHold => DeviceClass::Mouse,
        }
    }
}

/// A single input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub kind: EventKind,
    pub code: InputCode,
}

impl InputEvent {
    pub fn new(kind: EventKind, code: InputCode) -> Self {
        Self { kind, code }
    }

    pub fn device(&self) -> DeviceClass {
        self.kind.device()
    }
}
