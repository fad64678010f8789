//! Terminal rendering for the pairs game.
//!
//! A pure [`BoardView`] draws a [`core::GameSnapshot`] into a [`FrameBuffer`];
//! [`TerminalRenderer`] flushes that framebuffer through crossterm. The engine
//! never sees either.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use pairs_core as core;
pub use pairs_types as types;

pub use board_view::{face_label, BoardView, HudView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_full_into, TerminalRenderer};
