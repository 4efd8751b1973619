//! Keyboard and mouse input
//!
//! Window events are collected by [`InputState`] and handed to the frame
//! update as a [`FrameInput`] that only speaks in [`Action`]s.

pub mod bindings;
pub mod state;

pub use bindings::{Action, KeyBindings};
pub use state::{FrameInput, InputState};
