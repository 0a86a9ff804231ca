//! Remote game authority access
//!
//! [`GameApi`] is the seam between the session controller and the server. The
//! production implementation is [`HttpGameClient`]; tests drive the controller with
//! scripted implementations instead.

pub mod client;
pub mod error;

pub use client::{GameApi, HttpGameClient, MoveOutcome};
pub use error::{ClientError, ClientResult};
