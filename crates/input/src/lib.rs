//! Terminal input module.
//!
//! This module is independent of any rendering. It maps `crossterm` key events
//! into [`crate::types::InputAction`] and tracks the board cursor those actions
//! move.

pub mod cursor;
pub mod map;

pub use pairs_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
