//! Event dispatch loop
//!
//! The single consumer of the input-event channel. Each event updates the
//! pressed state, then every binding is evaluated and the fired actions are
//! applied to the click loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::click_loop::ClickLoop;
use crate::event::InputEvent;
use crate::hotkey::{Action, HotkeyRegistry};
use crate::pressed_state::PressedState;
use crate::ClickerError;

/// How often the shutdown flag is checked while no events arrive
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Owns the pressed state, the bindings and the click loop
pub struct Dispatcher {
    state: PressedState,
    registry: HotkeyRegistry,
    clicker: ClickLoop,
}

impl Dispatcher {
    pub fn new(state: PressedState, registry: HotkeyRegistry, clicker: ClickLoop) -> Self {
        Self {
            state,
            registry,
            clicker,
        }
    }

    pub fn state(&self) -> &PressedState {
        &self.state
    }

    pub fn clicker(&self) -> &ClickLoop {
        &self.clicker
    }

    pub fn clicker_mut(&mut self) -> &mut ClickLoop {
        &mut self.clicker
    }

    /// Process one event
    pub fn handle(&mut self, event: InputEvent) {
        self.state.apply(&event);

        let clicker = &mut self.clicker;
        self.registry.evaluate_all(&self.state, |action| match action {
            Action::StartClicking => {
                debug!("Start clicking - entered");
                clicker.start();
            }
            Action::StopClicking => {
                if clicker.stop() {
                    info!("Stopping click loop");
                }
            }
        });
    }

    /// Drain events until `running` is cleared or the source closes
    ///
    /// A closed source is fatal and returns [`ClickerError::EventSourceClosed`].
    /// Any click run is stopped and joined before returning.
    pub fn run(
        &mut self,
        receiver: &Receiver<InputEvent>,
        running: &AtomicBool,
    ) -> Result<(), ClickerError> {
        let result = loop {
            if !running.load(Ordering::SeqCst) {
                break Ok(());
            }

            match receiver.recv_timeout(POLL_INTERVAL) {
                Ok(event) => self.handle(event),
                Err(RecvTimeoutError::Timeout) => {
                    // No event, continue loop
                }
                Err(RecvTimeoutError::Disconnected) => {
                    warn!("Input listener disconnected");
                    break Err(ClickerError::EventSourceClosed);
                }
            }
        };

        if let Some(Err(e)) = self.clicker.finish() {
            warn!("Click loop ended with error: {}", e);
        }

        result
    }
}
