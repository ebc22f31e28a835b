//! Event handling module.
//!
//! Terminal events are the only input: key presses are mapped to hotkey
//! actions and applied to the state on the main thread.

pub mod terminal;
