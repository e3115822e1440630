//! X11 Placement Module
//!
//! Live X server backend for window placement. Each operation opens its own
//! connection, runs its fixed request sequence and drops the connection.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::randr::{ConnectionExt as _, Crtc};
use x11rb::protocol::xproto::{
    Atom, ClientMessageEvent, ConfigureWindowAux, ConnectionExt as _, EventMask, Timestamp, Window,
};
use x11rb::rust_connection::RustConnection;
use x11rb::NONE;

use super::protocol::{ScreenResources, WindowSystem};
use super::{NativeWindow, PlacementError, PlacementProvider};
use crate::shared::Geometry;

/// A short-lived connection to the X server
pub struct X11Session {
    conn: RustConnection,
    root: Window,
}

impl X11Session {
    /// Connect to `$DISPLAY` and remember the default screen's root window.
    pub fn connect() -> Result<Self, PlacementError> {
        let (conn, screen_num) = x11rb::connect(None)?;
        let root = conn.setup().roots[screen_num].root;
        debug!("Connected to X server, screen {}, root window {}", screen_num, root);
        Ok(Self { conn, root })
    }
}

impl WindowSystem for X11Session {
    fn root(&self) -> Window {
        self.root
    }

    fn intern_atom(&self, name: &str) -> Result<Option<Atom>, PlacementError> {
        let atom = self.conn.intern_atom(true, name.as_bytes())?.reply()?.atom;
        Ok((atom != NONE).then_some(atom))
    }

    fn screen_resources(&self) -> Result<ScreenResources, PlacementError> {
        let reply = self.conn.randr_get_screen_resources(self.root)?.reply()?;
        Ok(ScreenResources {
            crtcs: reply.crtcs,
            config_timestamp: reply.config_timestamp,
        })
    }

    fn crtc_geometry(&self, crtc: Crtc, config_timestamp: Timestamp) -> Result<Geometry, PlacementError> {
        let reply = self.conn.randr_get_crtc_info(crtc, config_timestamp)?.reply()?;
        Ok(reply.into())
    }

    fn input_focus(&self) -> Result<Window, PlacementError> {
        Ok(self.conn.get_input_focus()?.reply()?.focus)
    }

    fn window_geometry(&self, window: Window) -> Result<Geometry, PlacementError> {
        Ok(self.conn.get_geometry(window)?.reply()?.into())
    }

    fn send_client_message(
        &self,
        destination: Window,
        window: Window,
        message_type: Atom,
        data: [u32; 5],
    ) -> Result<(), PlacementError> {
        let event = ClientMessageEvent::new(32, window, message_type, data);
        self.conn
            .send_event(
                false,
                destination,
                EventMask::SUBSTRUCTURE_REDIRECT | EventMask::SUBSTRUCTURE_NOTIFY,
                event,
            )?
            .check()?;
        Ok(())
    }

    fn move_window(&self, window: Window, x: i32, y: i32) -> Result<(), PlacementError> {
        self.conn
            .configure_window(window, &ConfigureWindowAux::new().x(x).y(y))?
            .check()?;
        Ok(())
    }
}

/// Placement provider for X11 sessions
#[derive(Debug, Default)]
pub struct X11Placement;

impl PlacementProvider for X11Placement {
    fn name(&self) -> &'static str {
        "x11"
    }

    fn set_always_on_top(&self, window: NativeWindow) -> Result<(), PlacementError> {
        let session = X11Session::connect()?;
        super::set_always_on_top(&session, window)
    }

    fn place_top_right(&self, window: NativeWindow, width: u32) -> Result<(), PlacementError> {
        let session = X11Session::connect()?;
        super::place_top_right(&session, window, width).map(|_| ())
    }
}
