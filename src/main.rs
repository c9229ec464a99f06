//! comboclick - Hotkey-driven rapid auto-clicker
//!
//! Hold Alt and press the left mouse button to start clicking at the current
//! pointer position. Press Ctrl+Q to stop.

use comboclick::{
    input_listener::{create_event_channel, InputListener},
    ClickLoop, ClickerError, Config, Dispatcher, HotkeyRegistry, PressedState, X11Mouse,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), ClickerError> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let level = if config.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .init();

    info!("comboclick starting...");
    info!(
        "Config: click_wait={}ms, log_every={}, mouse_policy={:?}",
        config.click_wait_ms, config.log_every, config.mouse_policy
    );

    // Resolve hotkeys before touching any device
    let registry = HotkeyRegistry::with_default_bindings()?;

    // Set up Ctrl+C handler for graceful shutdown
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        info!("Shutdown signal received");
        running_clone.store(false, Ordering::SeqCst);
    })
    .map_err(|e| ClickerError::InputAccess(format!("Failed to set Ctrl+C handler: {}", e)))?;

    // Create mouse controller
    let mouse = match X11Mouse::new() {
        Ok(mouse) => mouse,
        Err(e) => {
            error!("Input simulation needs an X11 display (DISPLAY must be set)");
            return Err(e);
        }
    };

    let clicker = ClickLoop::new(Arc::new(mouse), &config);
    let mut dispatcher = Dispatcher::new(PressedState::new(config.mouse_policy), registry, clicker);

    // Create channel for input events
    let (sender, receiver) = create_event_channel();

    // Start input listener in background thread
    let listener = InputListener::new(sender);
    let _listener_handle = listener.start();

    info!("Input listener ready");
    info!("Hold Alt + left click to start clicking, Ctrl+Q to stop");
    info!("Press Ctrl+C to exit");

    let result = dispatcher.run(&receiver, &running);

    info!("comboclick shutting down...");

    result
}
