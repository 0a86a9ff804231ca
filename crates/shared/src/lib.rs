//! Wire protocol shared between the Shadow Chess client and the game server.

pub mod protocol;
