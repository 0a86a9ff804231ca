//! Core module - client configuration and shared error types
//!
//! - [`ClientSettings`] - API root, poll interval, display preferences
//! - `settings_persistence` - JSON settings file in the user's config dir (native only)
//! - [`CoreError`] - settings I/O and serialization failures

pub mod error;
pub mod resources;

#[cfg(feature = "native")]
pub mod settings_persistence;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use resources::*;
