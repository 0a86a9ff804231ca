//! Rendering module - view models for the Shadow Chess board
//!
//! Nothing here holds state or talks to the server. Front ends (the Leptos web
//! client and the terminal client) build a [`BoardView`] from the session and draw
//! what [`SquareView::render`] returns.
//!
//! # Architecture
//!
//! - `board` - board and square view models, palette
//! - `pieces` - piece icon lookup
//! - `text` - plain-text rendering used by the terminal client

pub mod board;
pub mod pieces;
pub mod text;

pub use board::*;
pub use pieces::{icon_for, piece_icon, BOSS_ICON};
