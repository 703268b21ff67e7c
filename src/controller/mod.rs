//! Controller module: reacts to tray menu actions

mod dispatch;

pub use dispatch::Controller;
