//! comboclick - Hotkey-driven rapid auto-clicker
//!
//! This library provides components for:
//! - Tracking which keys and mouse buttons are held
//! - Matching hotkey combinations and firing start/stop actions
//! - Running a background click loop at a fixed position
//! - Global input listening and X11 input simulation

pub mod click_loop;
pub mod combination;
pub mod config;
pub mod dispatch;
pub mod event;
pub mod hotkey;
pub mod input_listener;
pub mod input_simulator;
pub mod keymap;
pub mod pressed_state;

pub use click_loop::{ClickLoop, RateSample, RunReport};
pub use combination::{all_pressed, Combination};
pub use config::Config;
pub use dispatch::Dispatcher;
pub use event::{DeviceClass, EventKind, InputCode, InputEvent};
pub use hotkey::{Action, HotkeyBinding, HotkeyRegistry};
pub use input_listener::InputListener;
pub use input_simulator::{MouseControl, X11Mouse};
pub use pressed_state::{MousePressPolicy, PressedState};

use thiserror::Error;

/// Main error type for comboclick
#[derive(Error, Debug)]
pub enum ClickerError {
    #[error("Unknown {device} input name: '{name}'")]
    UnknownInput { device: DeviceClass, name: String },

    #[error("Input event source closed")]
    EventSourceClosed,

    #[error("Failed to access input devices: {0}")]
    InputAccess(String),

    #[error("Failed to send input event: {0}")]
    SendEvent(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Click worker failed: {0}")]
    Worker(String),
}
