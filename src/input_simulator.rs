//! Input simulation using X11 XTest
//!
//! Queries the pointer position and sends synthetic motion and button events
//! through the XTest extension. Works for X11 sessions and XWayland.

use tracing::info;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{
    ConnectionExt as _, Window, BUTTON_PRESS_EVENT, BUTTON_RELEASE_EVENT, MOTION_NOTIFY_EVENT,
};
use x11rb::protocol::xtest::ConnectionExt as _;
use x11rb::rust_connection::RustConnection;
use x11rb::CURRENT_TIME;

use crate::ClickerError;

/// X11 button number of the left mouse button
const LEFT_BUTTON: u8 = 1;

/// Trait for mouse control implementations
pub trait MouseControl: Send + Sync {
    /// Current pointer position in root window coordinates
    fn position(&self) -> Result<(i32, i32), ClickerError>;

    /// Move the pointer to an absolute position
    fn move_to(&self, x: i32, y: i32) -> Result<(), ClickerError>;

    /// Left click (press and release) at the current position
    fn click(&self) -> Result<(), ClickerError>;
}

/// XTest-based mouse controller
pub struct X11Mouse {
    conn: RustConnection,
    root: Window,
}

impl X11Mouse {
    /// Connect to the X server named by `$DISPLAY`
    pub fn new() -> Result<Self, ClickerError> {
        info!("Connecting to X11 for input simulation...");

        let (conn, screen_num) = x11rb::connect(None)
            .map_err(|e| ClickerError::InputAccess(format!("Failed to connect to X11: {}", e)))?;
        let root = conn.setup().roots[screen_num].root;

        // Verify the XTest extension is present
        conn.xtest_get_version(2, 2)
            .map_err(send_error)?
            .reply()
            .map_err(|e| ClickerError::InputAccess(format!("XTest extension unavailable: {}", e)))?;

        info!("X11 input simulation ready");
        Ok(Self { conn, root })
    }

    fn fake_button(&self, event_type: u8) -> Result<(), ClickerError> {
        self.conn
            .xtest_fake_input(event_type, LEFT_BUTTON, CURRENT_TIME, x11rb::NONE, 0, 0, 0)
            .map_err(send_error)?;
        Ok(())
    }
}

impl MouseControl for X11Mouse {
    fn position(&self) -> Result<(i32, i32), ClickerError> {
        let reply = self
            .conn
            .query_pointer(self.root)
            .map_err(send_error)?
            .reply()
            .map_err(send_error)?;
        Ok((i32::from(reply.root_x), i32::from(reply.root_y)))
    }

    fn move_to(&self, x: i32, y: i32) -> Result<(), ClickerError> {
        let x = i16::try_from(x)
            .map_err(|_| ClickerError::SendEvent(format!("x coordinate {} out of range", x)))?;
        let y = i16::try_from(y)
            .map_err(|_| ClickerError::SendEvent(format!("y coordinate {} out of range", y)))?;

        // detail 0 = absolute motion
        self.conn
            .xtest_fake_input(MOTION_NOTIFY_EVENT, 0, CURRENT_TIME, self.root, x, y, 0)
            .map_err(send_error)?;
        self.conn.flush().map_err(send_error)?;
        Ok(())
    }

    fn click(&self) -> Result<(), ClickerError> {
        self.fake_button(BUTTON_PRESS_EVENT)?;
        self.fake_button(BUTTON_RELEASE_EVENT)?;
        // Round-trip so the server has processed the click before the next one
        self.conn
            .get_input_focus()
            .map_err(send_error)?
            .reply()
            .map_err(send_error)?;
        Ok(())
    }
}

fn send_error(e: impl std::fmt::Display) -> ClickerError {
    ClickerError::SendEvent(format!("X11 request failed: {}", e))
}
