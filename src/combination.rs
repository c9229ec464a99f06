//! Key/button combinations and the matcher over [`PressedState`]

use crate::event::{DeviceClass, InputCode};
use crate::keymap::name_to_code;
use crate::pressed_state::PressedState;
use crate::ClickerError;

/// Ordered set of codes for one device class that must all be held
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    device: DeviceClass,
    codes: Vec<InputCode>,
}

impl Combination {
    /// Build from raw codes, dropping duplicates while keeping order
    pub fn from_codes(device: DeviceClass, codes: impl IntoIterator<Item = InputCode>) -> Self {
        let mut unique = Vec::new();
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Self {
            device,
            codes: unique,
        }
    }

    /// Resolve names through the key map
    ///
    /// Fails on the first name the key map does not know.
    pub fn from_names<S: AsRef<str>>(device: DeviceClass, names: &[S]) -> Result<Self, ClickerError> {
        let codes = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                name_to_code(device, name).ok_or_else(|| ClickerError::UnknownInput {
                    device,
                    name: name.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_codes(device, codes))
    }

    pub fn device(&self) -> DeviceClass {
        self.device
    }

    pub fn codes(&self) -> &[InputCode] {
        &self.codes
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// True when every code of the combination is held; empty is always true
pub fn all_pressed(state: &PressedState, combination: &Combination) -> bool {
    combination
        .codes
        .iter()
        .all(|&code| state.is_pressed(combination.device, code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_combination_always_matches() {
        let empty = Combination::from_codes(DeviceClass::Keyboard, Vec::new());
        let mut state = PressedState::default();
        assert!(all_pressed(&state, &empty));

        state.set_pressed(DeviceClass::Keyboard, 16, true);
        assert!(all_pressed(&state, &empty));
    }

    #[test]
    fn test_all_required_codes_must_be_held() {
        let combo = Combination::from_names(DeviceClass::Keyboard, &["ctrl", "q"]).unwrap();
        let mut state = PressedState::default();

        state.set_pressed(DeviceClass::Keyboard, 29, true);
        assert!(!all_pressed(&state, &combo));

        state.set_pressed(DeviceClass::Keyboard, 16, true);
        assert!(all_pressed(&state, &combo));

        // Releasing any single code breaks the match
        state.set_pressed(DeviceClass::Keyboard, 29, false);
        assert!(!all_pressed(&state, &combo));
        state.set_pressed(DeviceClass::Keyboard, 29, true);
        state.set_pressed(DeviceClass::Keyboard, 16, false);
        assert!(!all_pressed(&state, &combo));
    }

    #[test]
    fn test_extra_held_keys_do_not_block() {
        let combo = Combination::from_names(DeviceClass::Keyboard, &["alt"]).unwrap();
        let mut state = PressedState::default();
        state.set_pressed(DeviceClass::Keyboard, 56, true);
        state.set_pressed(DeviceClass::Keyboard, 42, true);
        assert!(all_pressed(&state, &combo));
    }

    #[test]
    fn test_matcher_reads_its_own_device_class() {
        let combo = Combination::from_names(DeviceClass::Mouse, &["mleft"]).unwrap();
        let mut state = PressedState::default();
        state.set_pressed(DeviceClass::Keyboard, 1, true);
        assert!(!all_pressed(&state, &combo));

        state.set_pressed(DeviceClass::Mouse, 1, true);
        assert!(all_pressed(&state, &combo));
    }

    #[test]
    fn test_duplicates_are_dropped_in_order() {
        let combo = Combination::from_names(DeviceClass::Keyboard, &["q", "ctrl", "Q"]).unwrap();
        assert_eq!(combo.codes(), &[16, 29]);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = Combination::from_names(DeviceClass::Keyboard, &["ctrl", "hyper"]).unwrap_err();
        match err {
            ClickerError::UnknownInput { device, name } => {
                assert_eq!(device, DeviceClass::Keyboard);
                assert_eq!(name, "hyper");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
