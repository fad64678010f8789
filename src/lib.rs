//! Pairs: a terminal memory-matching game (workspace facade crate).
//!
//! The engine lives in `pairs-core`; this package re-exports the workspace
//! crates under stable paths and adds the application layer: environment
//! configuration and a file-backed custom-game provider.

pub mod config;
pub mod content;

pub use pairs_core as core;
pub use pairs_input as input;
pub use pairs_term as term;
pub use pairs_types as types;
