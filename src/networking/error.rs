//! Error types for the networking module
//!
//! Every failure the remote game client can hit is one of these values. None of them
//! is fatal: the session keeps the last good snapshot and the next poll tries again.

use crate::game::error::ValidationError;

/// Errors returned by [`GameApi`](super::GameApi) operations
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, aborted body, ...
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-success status and no usable body
    #[error("Server returned HTTP {0}")]
    Status(u16),

    /// Body was not the JSON shape the protocol describes
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body parsed but the snapshot breaks the board invariants
    #[error("Invalid game state: {0}")]
    Schema(#[from] ValidationError),

    /// Server reported success without including the new state
    #[error("Response reported success but carried no state")]
    MissingState,

    /// Server declined the reset
    #[error("Reset was rejected by the server")]
    ResetRejected,
}

/// Result type alias for remote game operations
pub type ClientResult<T> = Result<T, ClientError>;
