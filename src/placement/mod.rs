//! Placement Module
//!
//! Keeps the note window pinned above other windows and parked in the
//! top-right corner of whichever monitor holds input focus.
//!
//! The operations are written against [`protocol::WindowSystem`]; the
//! application only sees a [`PlacementProvider`] chosen once at startup.

pub mod atoms;
pub mod protocol;
#[cfg(target_os = "linux")]
pub mod x11;

use raw_window_handle::RawWindowHandle;
use thiserror::Error;
use tracing::{debug, info};
use x11rb::errors::{ConnectError, ConnectionError, ReplyError};

use crate::config::PlacementConfig;
use crate::shared::Geometry;
use atoms::{WmStateAtoms, NET_WM_STATE_ADD};
use protocol::WindowSystem;

/// Placement failures. None of these are fatal to the editor.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("failed to connect to X server: {0}")]
    Connect(#[from] ConnectError),
    #[error("X connection error: {0}")]
    Connection(#[from] ConnectionError),
    #[error("X request failed: {0}")]
    Reply(#[from] ReplyError),
    #[error("atom {0} is not known to the X server")]
    AtomNotFound(String),
}

/// The application's own top-level window.
///
/// Kept apart from plain window ids so the focused window used for monitor
/// lookup can never be handed to a mutating request by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeWindow(pub u32);

impl NativeWindow {
    /// Extract the X11 window id from a toolkit window handle
    pub fn from_raw(raw: RawWindowHandle) -> Option<Self> {
        match raw {
            RawWindowHandle::Xlib(handle) => Some(Self(handle.window as u32)),
            RawWindowHandle::Xcb(handle) => Some(Self(handle.window.get())),
            _ => None,
        }
    }
}

/// Window placement capability, one implementation per platform
pub trait PlacementProvider: Send {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Ask the window manager to keep `window` above all others
    fn set_always_on_top(&self, window: NativeWindow) -> Result<(), PlacementError>;

    /// Move `window` (of the given width) to the top-right corner of the
    /// monitor holding input focus
    fn place_top_right(&self, window: NativeWindow, width: u32) -> Result<(), PlacementError>;
}

/// Provider for platforms (or configurations) without placement support
#[derive(Debug, Default)]
pub struct NoopPlacement;

impl PlacementProvider for NoopPlacement {
    fn name(&self) -> &'static str {
        "none"
    }

    fn set_always_on_top(&self, window: NativeWindow) -> Result<(), PlacementError> {
        debug!("Placement disabled, not pinning window {}", window.0);
        Ok(())
    }

    fn place_top_right(&self, window: NativeWindow, _width: u32) -> Result<(), PlacementError> {
        debug!("Placement disabled, not moving window {}", window.0);
        Ok(())
    }
}

/// Pick the placement provider for this platform
pub fn select(config: &PlacementConfig) -> Box<dyn PlacementProvider> {
    if !config.enabled {
        info!("Window placement disabled by configuration");
        return Box::new(NoopPlacement);
    }
    platform_provider()
}

#[cfg(target_os = "linux")]
fn platform_provider() -> Box<dyn PlacementProvider> {
    Box::new(x11::X11Placement)
}

#[cfg(not(target_os = "linux"))]
fn platform_provider() -> Box<dyn PlacementProvider> {
    Box::new(NoopPlacement)
}

/// Send `_NET_WM_STATE_ADD _NET_WM_STATE_ABOVE` for `window` to the root
/// window. The window manager applies it on its own schedule.
pub fn set_always_on_top<W: WindowSystem + ?Sized>(
    ws: &W,
    window: NativeWindow,
) -> Result<(), PlacementError> {
    let atoms = WmStateAtoms::resolve(ws)?;
    let data = [NET_WM_STATE_ADD, atoms.net_wm_state_above, 0, 0, 0];
    ws.send_client_message(ws.root(), window.0, atoms.net_wm_state, data)?;
    debug!("Requested _NET_WM_STATE_ABOVE for window {}", window.0);
    Ok(())
}

/// Find the first active CRTC containing the focused window's origin.
///
/// Returns `None` when no CRTC matches; there is no fallback monitor.
pub fn resolve_target_monitor<W: WindowSystem + ?Sized>(
    ws: &W,
) -> Result<Option<Geometry>, PlacementError> {
    let resources = ws.screen_resources()?;
    let focus = ws.input_focus()?;
    let mut origin = None;

    for &crtc in &resources.crtcs {
        let monitor = ws.crtc_geometry(crtc, resources.config_timestamp)?;
        if !monitor.is_active() {
            continue;
        }

        let focused = match origin {
            Some(geometry) => geometry,
            None => {
                let geometry = ws.window_geometry(focus)?;
                origin = Some(geometry);
                geometry
            }
        };

        if monitor.contains_inclusive(focused.x, focused.y) {
            debug!("Focused window {} is on CRTC {} {:?}", focus, crtc, monitor);
            return Ok(Some(monitor));
        }
    }

    Ok(None)
}

/// Move `window` so its right edge meets the right edge of the focused
/// monitor and its top edge meets the monitor's top.
///
/// Returns the position requested, or `None` when no monitor matched and
/// nothing was sent.
pub fn place_top_right<W: WindowSystem + ?Sized>(
    ws: &W,
    window: NativeWindow,
    width: u32,
) -> Result<Option<(i32, i32)>, PlacementError> {
    let Some(monitor) = resolve_target_monitor(ws)? else {
        debug!("No monitor contains the focused window, leaving window {} in place", window.0);
        return Ok(None);
    };

    let (x, y) = monitor.top_right_origin(width);
    ws.move_window(window.0, x, y)?;
    debug!("Moved window {} to ({}, {})", window.0, x, y);
    Ok(Some((x, y)))
}
