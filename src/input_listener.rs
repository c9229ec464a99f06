//! Global input listening using rdev

use std::collections::HashSet;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use rdev::{listen, Event, EventType};
use tracing::{error, info, trace};

use crate::event::{EventKind, InputCode, InputEvent};
use crate::keymap::{button_to_code, key_to_code};

/// Translates rdev events into [`InputEvent`]s
///
/// rdev reports auto-repeat as repeated key presses; a press for a key that
/// is already down becomes `KeyHold`. Button presses are the hook's pressed
/// notification and map to `MouseHold`. Motion, wheel and unmapped keys are
/// dropped.
#[derive(Debug, Default)]
pub struct EventTranslator {
    keys_down: HashSet<InputCode>,
}

impl EventTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn translate(&mut self, event_type: &EventType) -> Option<InputEvent> {
        match *event_type {
            EventType::KeyPress(key) => {
                let code = key_to_code(key)?;
                let kind = if self.keys_down.insert(code) {
                    EventKind::KeyDown
                } else {
                    EventKind::KeyHold
                };
                Some(InputEvent::new(kind, code))
            }
            EventType::KeyRelease(key) => {
                let code = key_to_code(key)?;
                self.keys_down.remove(&code);
                Some(InputEvent::new(EventKind::KeyUp, code))
            }
            EventType::ButtonPress(button) => {
                Some(InputEvent::new(EventKind::MouseHold, button_to_code(button)?))
            }
            EventType::ButtonRelease(button) => {
                Some(InputEvent::new(EventKind::MouseUp, button_to_code(button)?))
            }
            EventType::MouseMove { .. } | EventType::Wheel { .. } => None,
        }
    }
}

/// Input listener that captures global keyboard and mouse events
pub struct InputListener {
    /// Sender for translated events
    sender: mpsc::Sender<InputEvent>,
}

impl InputListener {
    /// Create a new InputListener with the given channel sender
    pub fn new(sender: mpsc::Sender<InputEvent>) -> Self {
        Self { sender }
    }

    /// Start listening for input events in a background thread
    ///
    /// The sender is dropped when the hook fails, which the dispatch loop
    /// sees as a closed event source. The hook may keep its callback alive,
    /// so the callback only borrows the sender through a shared slot.
    ///
    /// Returns a JoinHandle for the listener thread.
    pub fn start(self) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            info!("Input listener started");

            let slot = Arc::new(Mutex::new(Some(self.sender)));
            let callback_slot = slot.clone();
            let mut translator = EventTranslator::new();

            let callback = move |event: Event| {
                let Some(input) = translator.translate(&event.event_type) else {
                    return;
                };
                trace!("Input event: {:?}", input);

                let Ok(guard) = callback_slot.lock() else {
                    return;
                };
                if let Some(sender) = guard.as_ref() {
                    if let Err(e) = sender.send(input) {
                        error!("Failed to send input event: {}", e);
                    }
                }
            };

            if let Err(e) = listen(callback) {
                error!("Error in input listener: {:?}", e);
            }

            // Close the channel
            if let Ok(mut guard) = slot.lock() {
                guard.take();
            };
        })
    }
}

/// Create a channel for input events and return both ends
pub fn create_event_channel() -> (mpsc::Sender<InputEvent>, mpsc::Receiver<InputEvent>) {
    mpsc::channel()
}
