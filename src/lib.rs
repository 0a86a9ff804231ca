//! Shadow Chess client
//!
//! Browser and terminal front end for a fog-of-war chess variant whose rules all
//! live on a remote server. This crate holds the parts every front end shares:
//!
//! - `networking` - the remote game client
//! - `game` - snapshot types, selection state machine, session controller
//! - `rendering` - pure board/square view models and icon lookup
//! - `core` - settings and shared errors

pub mod core;
pub mod game;
pub mod networking;
pub mod rendering;
