//! JSON payloads exchanged with the game server.
//!
//! Field names follow the server's wire format (`turno`, `piezas`, `niebla`, ...).
//! Enumerated values (`turno`, `team`, `tipo`, `winner`) are kept as the raw strings
//! the server sent so a payload re-serializes exactly as received; interpretation
//! happens on the client side.

use serde::{Deserialize, Serialize};

/// Team tag for the human side.
pub const TEAM_PLAYER: &str = "JUGADOR";
/// Team tag the server uses for the AI side. The client treats any tag other than
/// [`TEAM_PLAYER`] as the opponent, so this is only matched in tests and fixtures.
pub const TEAM_AI: &str = "IA";
/// Winner tag reported when the human side wins.
pub const WINNER_PLAYER: &str = "PLAYER";

pub const TIPO_PEON: &str = "PEON";
pub const TIPO_CABALLO: &str = "CABALLO";
pub const TIPO_ALFIL: &str = "ALFIL";
pub const TIPO_TORRE: &str = "TORRE";
pub const TIPO_REINA: &str = "REINA";
pub const TIPO_REY: &str = "REY";

/// Body of `GET /api/game/state`, and the `state` member of move/reset responses.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GameStateDto {
    pub turno: String,
    pub game_over: bool,
    #[serde(default)]
    pub winner: Option<String>,
    pub piezas: Vec<PieceDto>,
    pub niebla: Vec<Vec<bool>>,
    #[serde(default)]
    pub logs: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u8>,
}

/// One live piece as reported by the server.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PieceDto {
    pub x: i64,
    pub y: i64,
    pub tipo: String,
    pub team: String,
    pub hp: i64,
    pub hp_max: i64,
    #[serde(default)]
    pub es_boss: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
}

/// Body of `POST /api/game/move`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveRequest {
    pub from_x: u8,
    pub from_y: u8,
    pub to_x: u8,
    pub to_y: u8,
}

/// Response of `POST /api/game/move`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MoveResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response of `POST /api/game/reset`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ResetResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<GameStateDto>,
}
