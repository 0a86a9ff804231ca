//! Error types for game module
//!
//! Raised when a server snapshot does not satisfy the shape the client renders from.

/// Schema violations found while turning a wire snapshot into a [`GameState`](super::GameState)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Fog grid is not 8 rows of 8 columns
    #[error("Fog grid must be 8x8, got {rows} rows (row {row} has {cols} columns)")]
    FogShape { rows: usize, row: usize, cols: usize },

    /// Piece placed outside the board
    #[error("Piece coordinate ({x}, {y}) is outside the board")]
    CoordinateOutOfRange { x: i64, y: i64 },

    /// Two live pieces reported on one square
    #[error("More than one piece reported at ({x}, {y})")]
    DuplicatePiece { x: u8, y: u8 },

    /// Hit points outside `0..=hp_max` or a non-positive maximum
    #[error("Piece at ({x}, {y}) has invalid hit points {hp}/{hp_max}")]
    InvalidHp { x: u8, y: u8, hp: i64, hp_max: i64 },
}

/// Result type alias for snapshot validation
pub type ValidationResult<T> = Result<T, ValidationError>;
