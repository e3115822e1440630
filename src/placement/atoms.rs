//! Atom resolution for the EWMH window state hints placement sends.

use tracing::debug;
use x11rb::protocol::xproto::Atom;

use super::protocol::WindowSystem;
use super::PlacementError;

pub const NET_WM_STATE: &str = "_NET_WM_STATE";
pub const NET_WM_STATE_ABOVE: &str = "_NET_WM_STATE_ABOVE";

/// `_NET_WM_STATE` client message action: add the property
pub const NET_WM_STATE_ADD: u32 = 1;

/// Atoms needed to ask the window manager for the "above" state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WmStateAtoms {
    pub net_wm_state: Atom,
    pub net_wm_state_above: Atom,
}

impl WmStateAtoms {
    /// Resolve both atoms. Nothing is cached; every call asks the server.
    pub fn resolve<W: WindowSystem + ?Sized>(ws: &W) -> Result<Self, PlacementError> {
        Ok(Self {
            net_wm_state: intern(ws, NET_WM_STATE)?,
            net_wm_state_above: intern(ws, NET_WM_STATE_ABOVE)?,
        })
    }
}

/// Intern a single atom that must already exist on the server
pub fn intern<W: WindowSystem + ?Sized>(ws: &W, name: &str) -> Result<Atom, PlacementError> {
    let atom = ws
        .intern_atom(name)?
        .ok_or_else(|| PlacementError::AtomNotFound(name.to_string()))?;
    debug!("Interned {} = {}", name, atom);
    Ok(atom)
}
