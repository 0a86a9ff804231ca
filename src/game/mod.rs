//! Client-side game logic
//!
//! - `types` - validated snapshot types converted from the wire protocol
//! - `selection` - the click-driven selection state machine
//! - `session` - the session controller that owns cached state and talks to the server
//! - `polling` - scoped polling lifecycle for native builds

pub mod error;
pub mod selection;
pub mod session;
pub mod types;

#[cfg(feature = "native")]
pub mod polling;

pub use error::{ValidationError, ValidationResult};
pub use selection::{ClickAction, Selection};
pub use session::{SessionController, SessionPhase, SessionState};
pub use types::{Coord, FogGrid, GameState, Move, Piece, PieceKind, Team, Winner, BOARD_SIZE};

#[cfg(feature = "native")]
pub use polling::ActiveSession;
