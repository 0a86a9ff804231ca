//! Type definitions for the client-side view of a Shadow Chess game
//!
//! These are the validated counterparts of the wire payloads in [`shared::protocol`].
//! A [`GameState`] is an immutable snapshot: the client never edits one, it only
//! replaces it with the next snapshot the server hands out.

use shared::protocol::{
    GameStateDto, MoveRequest, PieceDto, TEAM_PLAYER, TIPO_ALFIL, TIPO_CABALLO, TIPO_PEON,
    TIPO_REINA, TIPO_REY, TIPO_TORRE, WINNER_PLAYER,
};
use std::collections::HashSet;
use std::fmt;

use super::error::{ValidationError, ValidationResult};

/// Width and height of the board
pub const BOARD_SIZE: u8 = 8;

/// A square on the board
///
/// `x` is the column and `y` the row, both in `0..8`. Row 0 is the opponent's back rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
}

impl Coord {
    /// Create a coordinate, or `None` when either component is off the board
    pub fn new(x: u8, y: u8) -> Option<Self> {
        if x < BOARD_SIZE && y < BOARD_SIZE {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    /// Dark squares are the ones where `x + y` is odd
    pub fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    /// All 64 squares in row-major order (`y` outer, `x` inner)
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord { x, y }))
    }

    /// Row-major index in `0..64`
    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    fn from_wire(x: i64, y: i64) -> ValidationResult<Self> {
        let coord = match (u8::try_from(x), u8::try_from(y)) {
            (Ok(cx), Ok(cy)) => Coord::new(cx, cy),
            _ => None,
        };
        coord.ok_or(ValidationError::CoordinateOutOfRange { x, y })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Side of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    /// The human at this client
    Player,
    /// The server-side AI
    Opponent,
}

impl Team {
    /// `JUGADOR` is the player; every other tag (`IA`, `ENEMIGO`) is the opponent
    pub fn from_wire(tag: &str) -> Self {
        if tag == TEAM_PLAYER {
            Team::Player
        } else {
            Team::Opponent
        }
    }
}

/// Chess type of a piece
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    /// A type tag this client does not know; kept verbatim
    Unrecognized(String),
}

impl PieceKind {
    pub fn from_wire(tag: &str) -> Self {
        match tag {
            TIPO_PEON => PieceKind::Pawn,
            TIPO_CABALLO => PieceKind::Knight,
            TIPO_ALFIL => PieceKind::Bishop,
            TIPO_TORRE => PieceKind::Rook,
            TIPO_REINA => PieceKind::Queen,
            TIPO_REY => PieceKind::King,
            other => PieceKind::Unrecognized(other.to_string()),
        }
    }

    /// Human-readable name used for alt text and tooltips
    pub fn label(&self) -> &str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
            PieceKind::Unrecognized(tag) => tag,
        }
    }
}

/// A live piece in a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub coord: Coord,
    pub kind: PieceKind,
    pub team: Team,
    pub hp: u32,
    pub hp_max: u32,
    pub is_boss: bool,
    /// Damage dealt per hit, when the server reports it
    pub damage: Option<u32>,
    /// Display name, when the server reports it
    pub name: Option<String>,
}

impl Piece {
    pub fn is_player(&self) -> bool {
        self.team == Team::Player
    }
}

impl TryFrom<PieceDto> for Piece {
    type Error = ValidationError;

    fn try_from(dto: PieceDto) -> ValidationResult<Self> {
        let coord = Coord::from_wire(dto.x, dto.y)?;
        let invalid_hp = || ValidationError::InvalidHp {
            x: coord.x,
            y: coord.y,
            hp: dto.hp,
            hp_max: dto.hp_max,
        };
        if dto.hp_max <= 0 || dto.hp < 0 || dto.hp > dto.hp_max {
            return Err(invalid_hp());
        }
        let hp = u32::try_from(dto.hp).map_err(|_| invalid_hp())?;
        let hp_max = u32::try_from(dto.hp_max).map_err(|_| invalid_hp())?;

        Ok(Piece {
            coord,
            kind: PieceKind::from_wire(&dto.tipo),
            team: Team::from_wire(&dto.team),
            hp,
            hp_max,
            is_boss: dto.es_boss,
            damage: dto.damage.and_then(|d| u32::try_from(d).ok()),
            name: dto.nombre,
        })
    }
}

/// Which side won a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Player,
    Opponent,
}

/// Per-square visibility, indexed `[y][x]`; `true` means the contents are unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FogGrid([[bool; BOARD_SIZE as usize]; BOARD_SIZE as usize]);

impl FogGrid {
    /// A grid with every square visible
    pub fn clear() -> Self {
        FogGrid::default()
    }

    pub fn is_fogged(&self, coord: Coord) -> bool {
        self.0[coord.y as usize][coord.x as usize]
    }

    pub fn set(&mut self, coord: Coord, fogged: bool) {
        self.0[coord.y as usize][coord.x as usize] = fogged;
    }

    fn from_rows(rows: Vec<Vec<bool>>) -> ValidationResult<Self> {
        let size = BOARD_SIZE as usize;
        let row_count = rows.len();
        let mut grid = [[false; BOARD_SIZE as usize]; BOARD_SIZE as usize];

        if row_count != size {
            return Err(ValidationError::FogShape {
                rows: row_count,
                row: 0,
                cols: rows.first().map_or(0, Vec::len),
            });
        }
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(ValidationError::FogShape {
                    rows: row_count,
                    row: y,
                    cols: row.len(),
                });
            }
            grid[y].copy_from_slice(&row);
        }
        Ok(FogGrid(grid))
    }
}

/// A validated snapshot of the remote game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub turn: Team,
    pub game_over: bool,
    /// Only set when `game_over` is true
    pub winner: Option<Winner>,
    pub pieces: Vec<Piece>,
    pub fog: FogGrid,
    /// Event log in the order the server sent it
    pub logs: Vec<String>,
}

impl GameState {
    /// Piece at a coordinate, ignoring fog
    ///
    /// Rendering and input code should use [`GameState::visible_piece_at`].
    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.coord == coord)
    }

    /// Piece at a coordinate, or `None` when the square is fogged
    pub fn visible_piece_at(&self, coord: Coord) -> Option<&Piece> {
        if self.fog.is_fogged(coord) {
            return None;
        }
        self.piece_at(coord)
    }

    pub fn is_fogged(&self, coord: Coord) -> bool {
        self.fog.is_fogged(coord)
    }

    /// True when a PLAYER piece is visible at `coord`
    pub fn has_player_piece_at(&self, coord: Coord) -> bool {
        self.visible_piece_at(coord).is_some_and(Piece::is_player)
    }

    pub fn is_player_turn(&self) -> bool {
        self.turn == Team::Player
    }
}

impl TryFrom<GameStateDto> for GameState {
    type Error = ValidationError;

    fn try_from(dto: GameStateDto) -> ValidationResult<Self> {
        let fog = FogGrid::from_rows(dto.niebla)?;

        let mut seen = HashSet::with_capacity(dto.piezas.len());
        let mut pieces = Vec::with_capacity(dto.piezas.len());
        for raw in dto.piezas {
            let piece = Piece::try_from(raw)?;
            if !seen.insert(piece.coord) {
                return Err(ValidationError::DuplicatePiece {
                    x: piece.coord.x,
                    y: piece.coord.y,
                });
            }
            pieces.push(piece);
        }

        let winner = if dto.game_over {
            dto.winner.as_deref().map(|tag| {
                if tag == WINNER_PLAYER {
                    Winner::Player
                } else {
                    Winner::Opponent
                }
            })
        } else {
            None
        };

        Ok(GameState {
            turn: Team::from_wire(&dto.turno),
            game_over: dto.game_over,
            winner,
            pieces,
            fog,
            logs: dto.logs,
        })
    }
}

/// A move request from one square to another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub fn new(from: Coord, to: Coord) -> Self {
        Move { from, to }
    }
}

impl From<Move> for MoveRequest {
    fn from(mv: Move) -> Self {
        MoveRequest {
            from_x: mv.from.x,
            from_y: mv.from.y,
            to_x: mv.to.x,
            to_y: mv.to.y,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
