//! Keypad front end.
//!
//! This module provides:
//! - The twenty-key layout and key metadata
//! - The input buffer state machine driven by key presses
//! - Circular hit-testing of pointer presses
//! - A presentation interface with a text-terminal implementation

mod geometry;
mod key;
pub mod session;
mod state;
mod surface;

pub use geometry::{KeyGeometry, Point};
pub use key::{Key, KeyRole, LAYOUT};
pub use state::{ERROR_TEXT, Keypad};
pub use surface::{KeypadSurface, TerminalSurface};
