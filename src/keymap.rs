//! Key and button name tables
//!
//! Keyboard codes are Linux evdev key codes, mouse codes are X11 button
//! numbers. Each table is the single source of truth for both name lookup
//! and translation of rdev events.

use rdev::{Button, Key};

use crate::event::{DeviceClass, InputCode};

/// Keyboard names, rdev keys and evdev codes
const KEYBOARD: &[(&str, Key, InputCode)] = &[
    ("esc", Key::Escape, 1),
    ("1", Key::Num1, 2),
    ("2", Key::Num2, 3),
    ("3", Key::Num3, 4),
    ("4", Key::Num4, 5),
    ("5", Key::Num5, 6),
    ("6", Key::Num6, 7),
    ("7", Key::Num7, 8),
    ("8", Key::Num8, 9),
    ("9", Key::Num9, 10),
    ("0", Key::Num0, 11),
    ("-", Key::Minus, 12),
    ("=", Key::Equal, 13),
    ("backspace", Key::Backspace, 14),
    ("tab", Key::Tab, 15),
    ("q", Key::KeyQ, 16),
    ("w", Key::KeyW, 17),
    ("e", Key::KeyE, 18),
    ("r", Key::KeyR, 19),
    ("t", Key::KeyT, 20),
    ("y", Key::KeyY, 21),
    ("u", Key::KeyU, 22),
    ("i", Key::KeyI, 23),
    ("o", Key::KeyO, 24),
    ("p", Key::KeyP, 25),
    ("[", Key::LeftBracket, 26),
    ("]", Key::RightBracket, 27),
    ("enter", Key::Return, 28),
    ("ctrl", Key::ControlLeft, 29),
    ("a", Key::KeyA, 30),
    ("s", Key::KeyS, 31),
    ("d", Key::KeyD, 32),
    ("f", Key::KeyF, 33),
    ("g", Key::KeyG, 34),
    ("h", Key::KeyH, 35),
    ("j", Key::KeyJ, 36),
    ("k", Key::KeyK, 37),
    ("l", Key::KeyL, 38),
    (";", Key::SemiColon, 39),
    ("'", Key::Quote, 40),
    ("`", Key::BackQuote, 41),
    ("shift", Key::ShiftLeft, 42),
    ("\\", Key::BackSlash, 43),
    ("z", Key::KeyZ, 44),
    ("x", Key::KeyX, 45),
    ("c", Key::KeyC, 46),
    ("v", Key::KeyV, 47),
    ("b", Key::KeyB, 48),
    ("n", Key::KeyN, 49),
    ("m", Key::KeyM, 50),
    (",", Key::Comma, 51),
    (".", Key::Dot, 52),
    ("/", Key::Slash, 53),
    ("rshift", Key::ShiftRight, 54),
    ("alt", Key::Alt, 56),
    ("space", Key::Space, 57),
    ("capslock", Key::CapsLock, 58),
    ("f1", Key::F1, 59),
    ("f2", Key::F2, 60),
    ("f3", Key::F3, 61),
    ("f4", Key::F4, 62),
    ("f5", Key::F5, 63),
    ("f6", Key::F6, 64),
    ("f7", Key::F7, 65),
    ("f8", Key::F8, 66),
    ("f9", Key::F9, 67),
    ("f10", Key::F10, 68),
    ("numlock", Key::NumLock, 69),
    ("scrolllock", Key::ScrollLock, 70),
    ("f11", Key::F11, 87),
    ("f12", Key::F12, 88),
    ("rctrl", Key::ControlRight, 97),
    ("printscreen", Key::PrintScreen, 99),
    ("ralt", Key::AltGr, 100),
    ("home", Key::Home, 102),
    ("up", Key::UpArrow, 103),
    ("pageup", Key::PageUp, 104),
    ("left", Key::LeftArrow, 105),
    ("right", Key::RightArrow, 106),
    ("end", Key::End, 107),
    ("down", Key::DownArrow, 108),
    ("pagedown", Key::PageDown, 109),
    ("insert", Key::Insert, 110),
    ("delete", Key::Delete, 111),
    ("pause", Key::Pause, 119),
    ("cmd", Key::MetaLeft, 125),
    ("meta", Key::MetaLeft, 125),
    ("rcmd", Key::MetaRight, 126),
];

/// Mouse names, rdev buttons and X11 button numbers
const MOUSE: &[(&str, Button, InputCode)] = &[
    ("mleft", Button::Left, 1),
    ("mmiddle", Button::Middle, 2),
    ("mcenter", Button::Middle, 2),
    ("mright", Button::Right, 3),
];

/// Resolve a human-readable name to its code for the given device class
///
/// Lookup is case-insensitive. Returns `None` for unknown names.
pub fn name_to_code(device: DeviceClass, name: &str) -> Option<InputCode> {
    let name = name.to_ascii_lowercase();
    match device {
        DeviceClass::Keyboard => KEYBOARD
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, _, code)| *code),
        DeviceClass::Mouse => MOUSE
            .iter()
            .find(|(n, _, _)| *n == name)
            .map(|(_, _, code)| *code),
    }
}

/// Translate an rdev key into a keyboard code
pub fn key_to_code(key: Key) -> Option<InputCode> {
    KEYBOARD
        .iter()
        .find(|(_, k, _)| *k == key)
        .map(|(_, _, code)| *code)
}

/// Translate an rdev button into a mouse code
///
/// Unnamed buttons keep their raw X11 number.
pub fn button_to_code(button: Button) -> Option<InputCode> {
    match button {
        Button::Unknown(n) => Some(InputCode::from(n)),
        _ => MOUSE
            .iter()
            .find(|(_, b, _)| *b == button)
            .map(|(_, _, code)| *code),
    }
}
