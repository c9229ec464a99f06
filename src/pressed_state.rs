//! Pressed-state tracking for keyboard keys and mouse buttons

use std::collections::HashMap;

use crate::event::{DeviceClass, EventKind, InputCode, InputEvent};

/// How mouse events map onto the pressed state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MousePressPolicy {
    /// Only `MouseHold` counts as pressed; `MouseDown` and `MouseUp` both
    /// release.
    ///
    /// Hooks that report drags emit a plain down event while the pointer
    /// moves with the button held, so a down event alone is not a reliable
    /// press. This asymmetry is intentional.
    #[default]
    HoldOnly,
    /// `MouseDown` and `MouseHold` both count as pressed
    DownIsPress,
}

/// Last known down/up state per device class and code
///
/// Codes never seen report "not pressed". Writes are last-write-wins.
#[derive(Debug, Default)]
pub struct PressedState {
    keyboard: HashMap<InputCode, bool>,
    mouse: HashMap<InputCode, bool>,
    policy: MousePressPolicy,
}

impl PressedState {
    pub fn new(policy: MousePressPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> MousePressPolicy {
        self.policy
    }

    pub fn set_pressed(&mut self, device: DeviceClass, code: InputCode, pressed: bool) {
        self.map_mut(device).insert(code, pressed);
    }

    pub fn is_pressed(&self, device: DeviceClass, code: InputCode) -> bool {
        let map = match device {
            DeviceClass::Keyboard => &self.keyboard,
            DeviceClass::Mouse => &self.mouse,
        };
        map.get(&code).copied().unwrap_or(false)
    }

    /// Classify an event and update the state
    pub fn apply(&mut self, event: &InputEvent) {
        let pressed = match event.kind {
            EventKind::KeyDown | EventKind::KeyHold => true,
            EventKind::KeyUp => false,
            EventKind::MouseHold => true,
            EventKind::MouseDown => self.policy == MousePressPolicy::DownIsPress,
            EventKind::MouseUp => false,
        };
        self.set_pressed(event.device(), event.code, pressed);
    }

    fn map_mut(&mut self, device: DeviceClass) -> &mut HashMap<InputCode, bool> {
        match device {
            DeviceClass::Keyboard => &mut self.keyboard,
            DeviceClass::Mouse => &mut self.mouse,
        }
    }
}
