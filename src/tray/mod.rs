//! Tray module: the status-area icon and its menu

mod indicator;

pub use indicator::TrayIndicator;
