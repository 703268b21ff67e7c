//! Active window lookup over X11 (EWMH)
//!
//! Each query opens its own connection so the answer always reflects the
//! window manager's current state.

use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, AtomEnum, ConnectionExt, Window};
use x11rb::rust_connection::RustConnection;
use tracing::debug;

use super::{ActiveWindow, ResolveError, WindowSystem};

/// Longest `WM_CLASS` value read, in 32-bit units
const WM_CLASS_LENGTH: u32 = 256;

/// Queries the X server named by `$DISPLAY`
#[derive(Debug, Default, Clone, Copy)]
pub struct X11WindowSystem;

impl X11WindowSystem {
    pub fn new() -> Self {
        Self
    }
}

impl WindowSystem for X11WindowSystem {
    fn active_window(&self) -> Result<ActiveWindow, ResolveError> {
        let (conn, screen_num) = x11rb::connect(None).map_err(x11_err)?;
        let root = conn
            .setup()
            .roots
            .get(screen_num)
            .map(|screen| screen.root)
            .ok_or_else(|| ResolveError::WindowSystem(format!("no screen {screen_num}")))?;

        let active_atom = intern(&conn, b"_NET_ACTIVE_WINDOW")?;
        let pid_atom = intern(&conn, b"_NET_WM_PID")?;

        let id = read_u32(&conn, root, active_atom, AtomEnum::WINDOW.into())?
            .filter(|&window| window != x11rb::NONE)
            .ok_or(ResolveError::NoActiveWindow)?;

        let pid = read_u32(&conn, id, pid_atom, AtomEnum::CARDINAL.into())?
            .ok_or(ResolveError::MissingPid { window: id })?;

        let class = conn
            .get_property(
                false,
                id,
                AtomEnum::WM_CLASS,
                AtomEnum::STRING,
                0,
                WM_CLASS_LENGTH,
            )
            .map_err(x11_err)?
            .reply()
            .map_err(x11_err)?;
        let class_group = class_group_name(&class.value);

        debug!(window = id, pid, %class_group, "active window");

        Ok(ActiveWindow {
            id,
            pid,
            class_group,
        })
    }
}

fn x11_err(e: impl std::fmt::Display) -> ResolveError {
    ResolveError::WindowSystem(e.to_string())
}

fn intern(conn: &RustConnection, name: &[u8]) -> Result<Atom, ResolveError> {
    Ok(conn
        .intern_atom(false, name)
        .map_err(x11_err)?
        .reply()
        .map_err(x11_err)?
        .atom)
}

/// First 32-bit value of a property, if set
fn read_u32(
    conn: &RustConnection,
    window: Window,
    property: Atom,
    kind: Atom,
) -> Result<Option<u32>, ResolveError> {
    let reply = conn
        .get_property(false, window, property, kind, 0, 1)
        .map_err(x11_err)?
        .reply()
        .map_err(x11_err)?;
    Ok(reply.value32().and_then(|mut values| values.next()))
}

/// Class group name from a raw `WM_CLASS` value.
///
/// The property holds two NUL-terminated strings, instance then class.
/// The class is the group name; a lone instance string stands in for it.
pub(super) fn class_group_name(raw: &[u8]) -> String {
    let mut parts = raw
        .split(|&b| b == 0)
        .filter(|part| !part.is_empty())
        .map(|part| String::from_utf8_lossy(part).into_owned());
    let instance = parts.next();
    parts.next().or(instance).unwrap_or_default()
}
