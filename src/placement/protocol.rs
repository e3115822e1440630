//! Protocol Module
//!
//! The handful of request/reply exchanges window placement needs, behind a
//! trait so the placement logic can run against a live X server or an
//! in-memory stand-in.

use x11rb::protocol::randr::Crtc;
use x11rb::protocol::xproto::{Atom, Timestamp, Window};

use super::PlacementError;
use crate::shared::Geometry;

/// Reply of RandR GetScreenResources, reduced to what placement reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenResources {
    /// Display controllers in server order
    pub crtcs: Vec<Crtc>,
    /// Configuration timestamp to pass back with GetCrtcInfo
    pub config_timestamp: Timestamp,
}

/// Blocking request/reply access to a window system connection.
///
/// Every method issues one request and waits for its reply (or, for
/// requests without a reply, checks it), so errors surface at the call site.
pub trait WindowSystem {
    /// Root window of the default screen
    fn root(&self) -> Window;

    /// InternAtom with `only_if_exists` set; `None` when the server does
    /// not know the name.
    fn intern_atom(&self, name: &str) -> Result<Option<Atom>, PlacementError>;

    /// RandR GetScreenResources on the root window
    fn screen_resources(&self) -> Result<ScreenResources, PlacementError>;

    /// RandR GetCrtcInfo
    fn crtc_geometry(&self, crtc: Crtc, config_timestamp: Timestamp) -> Result<Geometry, PlacementError>;

    /// GetInputFocus
    fn input_focus(&self) -> Result<Window, PlacementError>;

    /// GetGeometry
    fn window_geometry(&self, window: Window) -> Result<Geometry, PlacementError>;

    /// SendEvent of a 32-bit ClientMessage about `window` to `destination`,
    /// selecting substructure redirect and notify.
    fn send_client_message(
        &self,
        destination: Window,
        window: Window,
        message_type: Atom,
        data: [u32; 5],
    ) -> Result<(), PlacementError>;

    /// ConfigureWindow with only the X and Y fields set
    fn move_window(&self, window: Window, x: i32, y: i32) -> Result<(), PlacementError>;
}
