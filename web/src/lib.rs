//! Browser front end for Shadow Chess
//!
//! - `session` - binds a [`SessionController`](shadowchess::game::SessionController)
//!   to a Leptos signal and owns the polling interval
//! - `square` - one board cell
//! - `app` - the board, status bar and log panel

pub mod app;
pub mod session;
pub mod square;
