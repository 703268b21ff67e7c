//! Window module: which application has focus
//!
//! Reads the focused window from the X server, looks up the owning
//! process's command name in procfs and maps the pair to the category
//! name used for shortcut lookup.

mod process;
mod resolver;
mod rules;
mod x11;

pub use process::ProcFs;
pub use resolver::{ActiveApplication, Resolver};
pub use rules::RuleSet;
pub use x11::X11WindowSystem;

/// The focused window as reported by the window manager
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveWindow {
    pub id: u32,
    /// Owning process (`_NET_WM_PID`)
    pub pid: u32,
    /// Class part of `WM_CLASS`
    pub class_group: String,
}

/// Reports the focused window
pub trait WindowSystem {
    fn active_window(&self) -> Result<ActiveWindow, ResolveError>;
}

/// Reports a process's command name
pub trait ProcessTable {
    /// Raw command name, including any trailing newline
    fn command_name(&self, pid: u32) -> Result<String, ResolveError>;
}

/// Why the active application could not be determined
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("window system unavailable: {0}")]
    WindowSystem(String),

    #[error("no window has focus")]
    NoActiveWindow,

    #[error("window {window:#x} does not report a process id")]
    MissingPid { window: u32 },

    #[error("process {pid} is no longer available")]
    ProcessUnavailable {
        pid: u32,
        #[source]
        source: std::io::Error,
    },
}
