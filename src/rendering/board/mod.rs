//! Board rendering module
//!
//! View models for the board and its squares, plus the shared palette.

pub mod board;
pub mod board_theme;
pub mod square;

// Re-export all public items
pub use board::*;
pub use board_theme::BoardTheme;
pub use square::*;
