pub mod panel;
pub mod reconcile;
pub mod screen;
pub mod thread;

pub use screen::{ChatScreen, RosterKind};
