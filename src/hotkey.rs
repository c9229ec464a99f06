//! Hotkey bindings and their evaluation

use tracing::debug;

use crate::combination::{all_pressed, Combination};
use crate::event::DeviceClass;
use crate::pressed_state::PressedState;
use crate::ClickerError;

/// Action fired by a satisfied binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Start the click loop unless it is already running
    StartClicking,
    /// Stop the click loop; no-op when stopped
    StopClicking,
}

/// Keyboard combination + mouse combination + action
#[derive(Debug, Clone)]
pub struct HotkeyBinding {
    pub keyboard: Combination,
    pub mouse: Combination,
    pub action: Action,
}

impl HotkeyBinding {
    /// Both combinations must be fully held
    pub fn is_satisfied(&self, state: &PressedState) -> bool {
        all_pressed(state, &self.keyboard) && all_pressed(state, &self.mouse)
    }
}

/// Registered bindings, evaluated in registration order
#[derive(Debug, Default)]
pub struct HotkeyRegistry {
    bindings: Vec<HotkeyBinding>,
}

impl HotkeyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start = alt + left mouse button, Stop = ctrl + q
    pub fn with_default_bindings() -> Result<Self, ClickerError> {
        let mut registry = Self::new();
        registry.register(&["alt"], &["mleft"], Action::StartClicking)?;
        registry.register::<&str>(&["ctrl", "q"], &[], Action::StopClicking)?;
        Ok(registry)
    }

    /// Resolve names once and add a binding
    pub fn register<S: AsRef<str>>(
        &mut self,
        keyboard: &[S],
        mouse: &[S],
        action: Action,
    ) -> Result<(), ClickerError> {
        let binding = HotkeyBinding {
            keyboard: Combination::from_names(DeviceClass::Keyboard, keyboard)?,
            mouse: Combination::from_names(DeviceClass::Mouse, mouse)?,
            action,
        };
        debug!(
            "Registered {:?}: keyboard={:?} mouse={:?}",
            action,
            binding.keyboard.codes(),
            binding.mouse.codes()
        );
        self.bindings.push(binding);
        Ok(())
    }

    pub fn bindings(&self) -> &[HotkeyBinding] {
        &self.bindings
    }

    /// Invoke `fire` for every satisfied binding, in registration order
    pub fn evaluate_all(&self, state: &PressedState, mut fire: impl FnMut(Action)) {
        for binding in &self.bindings {
            if binding.is_satisfied(state) {
                fire(binding.action);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, InputEvent};

    fn fired(registry: &HotkeyRegistry, state: &PressedState) -> Vec<Action> {
        let mut actions = Vec::new();
        registry.evaluate_all(state, |action| actions.push(action));
        actions
    }

    #[test]
    fn test_default_bindings() {
        let registry = HotkeyRegistry::with_default_bindings().unwrap();
        let bindings = registry.bindings();
        assert_eq!(bindings.len(), 2);
        assert_eq!(bindings[0].action, Action::StartClicking);
        assert_eq!(bindings[0].keyboard.codes(), &[56]);
        assert_eq!(bindings[0].mouse.codes(), &[1]);
        assert_eq!(bindings[1].action, Action::StopClicking);
        assert_eq!(bindings[1].keyboard.codes(), &[29, 16]);
        assert!(bindings[1].mouse.is_empty());
    }

    #[test]
    fn test_nothing_fires_on_empty_state() {
        let registry = HotkeyRegistry::with_default_bindings().unwrap();
        assert!(fired(&registry, &PressedState::default()).is_empty());
    }

    #[test]
    fn test_start_needs_keyboard_and_mouse() {
        let registry = HotkeyRegistry::with_default_bindings().unwrap();
        let mut state = PressedState::default();

        state.apply(&InputEvent::new(EventKind::KeyDown, 56));
        assert!(fired(&registry, &state).is_empty());

        state.apply(&InputEvent::new(EventKind::MouseHold, 1));
        assert_eq!(fired(&registry, &state), vec![Action::StartClicking]);
    }

    #[test]
    fn test_stop_fires_with_empty_mouse_combination() {
        let registry = HotkeyRegistry::with_default_bindings().unwrap();
        let mut state = PressedState::default();
        state.apply(&InputEvent::new(EventKind::KeyDown, 29));
        state.apply(&InputEvent::new(EventKind::KeyDown, 16));
        assert_eq!(fired(&registry, &state), vec![Action::StopClicking]);
    }

    #[test]
    fn test_all_matching_bindings_fire_in_order() {
        let mut registry = HotkeyRegistry::new();
        registry.register(&["ctrl"], &[], Action::StopClicking).unwrap();
        registry.register(&["ctrl"], &["mleft"], Action::StartClicking).unwrap();

        let mut state = PressedState::default();
        state.set_pressed(DeviceClass::Keyboard, 29, true);
        state.set_pressed(DeviceClass::Mouse, 1, true);

        assert_eq!(
            fired(&registry, &state),
            vec![Action::StopClicking, Action::StartClicking]
        );
    }

    #[test]
    fn test_unknown_name_fails_registration() {
        let mut registry = HotkeyRegistry::new();
        let result = registry.register(&["alt"], &["mfourth"], Action::StartClicking);
        assert!(matches!(
            result,
            Err(ClickerError::UnknownInput { device: DeviceClass::Mouse, .. })
        ));
        assert!(registry.bindings().is_empty());
    }
}
