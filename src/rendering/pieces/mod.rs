//! Chess pieces rendering module
//!
//! Icon lookup and text glyphs for pieces.

pub mod pieces;

// Re-export all public items
pub use pieces::*;
