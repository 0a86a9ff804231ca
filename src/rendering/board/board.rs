//! Board view
//!
//! Derives the full 8×8 grid of [`SquareView`]s plus the turn indicator, game-over
//! banner and log panel from a session. Pure: building a view never touches the
//! controller.

use super::square::SquareView;
use crate::game::selection::Selection;
use crate::game::session::SessionState;
use crate::game::types::{Coord, GameState, Move, Winner, BOARD_SIZE};

/// Whose move the board shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnIndicator {
    PlayerToMove,
    OpponentThinking,
}

impl TurnIndicator {
    pub fn label(self) -> &'static str {
        match self {
            TurnIndicator::PlayerToMove => "Your turn",
            TurnIndicator::OpponentThinking => "Opponent thinking...",
        }
    }
}

/// Banner shown once the game is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverBanner {
    Victory,
    Defeat,
}

impl GameOverBanner {
    pub fn label(self) -> &'static str {
        match self {
            GameOverBanner::Victory => "VICTORY!",
            GameOverBanner::Defeat => "DEFEAT!",
        }
    }
}

/// Everything needed to draw a loaded game
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    /// Row-major, 64 entries
    squares: Vec<SquareView>,
    pub turn: TurnIndicator,
    pub banner: Option<GameOverBanner>,
    pub logs: Vec<String>,
}

impl BoardView {
    /// Build the view for `game` with the given selection and last move
    ///
    /// Fogged squares get no piece, selection or last-move flag, whatever the
    /// snapshot's piece list says.
    pub fn build(game: &GameState, selection: &Selection, last_move: Option<Move>) -> Self {
        let squares = Coord::all()
            .map(|coord| {
                let fogged = game.is_fogged(coord);
                let on_last_move =
                    last_move.is_some_and(|mv| mv.from == coord || mv.to == coord);
                SquareView {
                    coord,
                    piece: game.visible_piece_at(coord).cloned(),
                    fogged,
                    selected: !fogged && selection.is_at(coord),
                    last_move: !fogged && on_last_move,
                }
            })
            .collect();

        let turn = if game.is_player_turn() {
            TurnIndicator::PlayerToMove
        } else {
            TurnIndicator::OpponentThinking
        };

        let banner = if game.game_over {
            Some(match game.winner {
                Some(Winner::Player) => GameOverBanner::Victory,
                _ => GameOverBanner::Defeat,
            })
        } else {
            None
        };

        BoardView {
            squares,
            turn,
            banner,
            logs: game.logs.clone(),
        }
    }

    /// View for a session, or `None` until a snapshot is loaded
    pub fn from_session(state: &SessionState, highlight_last_move: bool) -> Option<Self> {
        let game = state.game.as_ref()?;
        let last_move = if highlight_last_move {
            state.last_move
        } else {
            None
        };
        Some(Self::build(game, &state.selection, last_move))
    }

    pub fn square(&self, coord: Coord) -> &SquareView {
        &self.squares[coord.index()]
    }

    pub fn squares(&self) -> &[SquareView] {
        &self.squares
    }

    /// Rows from `y = 0` to `y = 7`
    pub fn rows(&self) -> impl Iterator<Item = &[SquareView]> {
        self.squares.chunks(BOARD_SIZE as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{FogGrid, Piece, PieceKind, Team};

    fn coord(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn piece(x: u8, y: u8, team: Team) -> Piece {
        Piece {
            coord: coord(x, y),
            kind: PieceKind::Rook,
            team,
            hp: 4,
            hp_max: 8,
            is_boss: false,
            damage: None,
            name: None,
        }
    }

    fn game() -> GameState {
        GameState {
            turn: Team::Player,
            game_over: false,
            winner: None,
            pieces: vec![piece(0, 7, Team::Player), piece(0, 0, Team::Opponent)],
            fog: FogGrid::clear(),
            logs: vec!["first".to_string(), "second".to_string()],
        }
    }

    #[test]
    fn test_grid_is_8x8_row_major() {
        let view = BoardView::build(&game(), &Selection::default(), None);
        assert_eq!(view.squares().len(), 64);
        let rows: Vec<_> = view.rows().collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[7][0].coord, coord(0, 7));
        assert!(view.square(coord(0, 7)).piece.is_some());
        assert!(view.square(coord(4, 4)).piece.is_none());
    }

    #[test]
    fn test_fog_strips_cell_contents() {
        let mut state = game();
        state.fog.set(coord(0, 0), true);
        let mut selection = Selection::default();
        selection.select(coord(0, 0));
        let mv = Move::new(coord(1, 1), coord(0, 0));

        let view = BoardView::build(&state, &selection, Some(mv));
        let cell = view.square(coord(0, 0));
        assert!(cell.fogged);
        assert!(cell.piece.is_none());
        assert!(!cell.selected);
        assert!(!cell.last_move);
        assert!(view.square(coord(1, 1)).last_move);
    }

    #[test]
    fn test_turn_banner_and_logs() {
        let mut state = game();
        let view = BoardView::build(&state, &Selection::default(), None);
        assert_eq!(view.turn, TurnIndicator::PlayerToMove);
        assert_eq!(view.banner, None);
        assert_eq!(view.logs, vec!["first".to_string(), "second".to_string()]);

        state.turn = Team::Opponent;
        state.game_over = true;
        state.winner = Some(Winner::Player);
        let view = BoardView::build(&state, &Selection::default(), None);
        assert_eq!(view.turn, TurnIndicator::OpponentThinking);
        assert_eq!(view.banner, Some(GameOverBanner::Victory));

        state.winner = Some(Winner::Opponent);
        let view = BoardView::build(&state, &Selection::default(), None);
        assert_eq!(view.banner, Some(GameOverBanner::Defeat));
    }

    #[test]
    fn test_from_session_respects_highlight_setting() {
        let mut session = SessionState {
            game: Some(game()),
            last_move: Some(Move::new(coord(0, 6), coord(0, 5))),
            ..SessionState::default()
        };
        let view = BoardView::from_session(&session, true).unwrap();
        assert!(view.square(coord(0, 5)).last_move);

        let view = BoardView::from_session(&session, false).unwrap();
        assert!(!view.square(coord(0, 5)).last_move);

        session.game = None;
        assert!(BoardView::from_session(&session, true).is_none());
    }
}
