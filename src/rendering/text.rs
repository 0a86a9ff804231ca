//! Plain-text board for the terminal client
//!
//! ```text
//!      0  1  2  3  4  5  6  7
//!   0  r  .  #  #  .  .  .  .
//!   ...
//!   6 [P] .  .  .  .  .  .  .
//! ```
//!
//! `#` is fog, `.` an empty square, `[ ]` the selection and `( )` the last move.

use super::board::{BoardView, SquareBorder, SquareRender};
use super::pieces::piece_glyph;
use crate::game::session::{SessionPhase, SessionState};
use std::fmt::Write;

/// Render a loaded board, its status line and the log panel
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for x in 0..8 {
        let _ = write!(out, " {} ", x);
    }
    out.push('\n');

    for (y, row) in view.rows().enumerate() {
        let _ = write!(out, "{:>3} ", y);
        for square in row {
            let cell = match square.render() {
                SquareRender::Fogged => " # ".to_string(),
                SquareRender::Visible { border, .. } => {
                    let glyph = square.piece.as_ref().map_or('.', piece_glyph);
                    match border {
                        SquareBorder::Selected => format!("[{}]", glyph),
                        SquareBorder::LastMove => format!("({})", glyph),
                        SquareBorder::None => format!(" {} ", glyph),
                    }
                }
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }

    out.push('\n');
    match view.banner {
        Some(banner) => {
            let _ = writeln!(out, "*** {} ***", banner.label());
        }
        None => {
            let _ = writeln!(out, "{}", view.turn.label());
        }
    }

    for line in &view.logs {
        let _ = writeln!(out, "  > {}", line);
    }
    out
}

/// Render whatever the session currently has to show
pub fn render_session(state: &SessionState, highlight_last_move: bool) -> String {
    match state.phase {
        SessionPhase::Loading => "Loading...\n".to_string(),
        SessionPhase::Error => format!(
            "Error: {}\n",
            state.error.as_deref().unwrap_or("failed to load game state")
        ),
        SessionPhase::Ready => match BoardView::from_session(state, highlight_last_move) {
            Some(view) => {
                let mut out = render_board(&view);
                if let Some(reason) = &state.rejection {
                    let _ = writeln!(out, "Last move rejected: {}", reason);
                }
                out
            }
            None => "No game state\n".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::selection::Selection;
    use crate::game::types::{Coord, FogGrid, GameState, Move, Piece, PieceKind, Team};

    fn coord(x: u8, y: u8) -> Coord {
        Coord::new(x, y).unwrap()
    }

    fn game() -> GameState {
        let mut fog = FogGrid::clear();
        fog.set(coord(4, 0), true);
        GameState {
            turn: Team::Player,
            game_over: false,
            winner: None,
            pieces: vec![
                Piece {
                    coord: coord(0, 6),
                    kind: PieceKind::Pawn,
                    team: Team::Player,
                    hp: 10,
                    hp_max: 10,
                    is_boss: false,
                    damage: None,
                    name: None,
                },
                Piece {
                    coord: coord(4, 0),
                    kind: PieceKind::King,
                    team: Team::Opponent,
                    hp: 30,
                    hp_max: 30,
                    is_boss: true,
                    damage: None,
                    name: None,
                },
            ],
            fog,
            logs: vec!["Partida iniciada".to_string()],
        }
    }

    #[test]
    fn test_fog_hides_boss_in_text() {
        let view = BoardView::build(&game(), &Selection::default(), None);
        let text = render_board(&view);
        assert!(!text.contains('X'));
        assert!(text.contains(" # "));
        assert!(text.contains(" P "));
        assert!(text.contains("Your turn"));
        assert!(text.contains("> Partida iniciada"));
    }

    #[test]
    fn test_selection_and_last_move_markers() {
        let mut selection = Selection::default();
        selection.select(coord(0, 6));
        let mv = Move::new(coord(1, 7), coord(2, 5));
        let view = BoardView::build(&game(), &selection, Some(mv));
        let text = render_board(&view);
        assert!(text.contains("[P]"));
        assert!(text.contains("(.)"));
    }

    #[test]
    fn test_session_phases() {
        let loading = SessionState::default();
        assert_eq!(render_session(&loading, true), "Loading...\n");

        let failed = SessionState {
            phase: SessionPhase::Error,
            error: Some("Failed to load game state: Server returned HTTP 500".to_string()),
            ..SessionState::default()
        };
        assert!(render_session(&failed, true).starts_with("Error: Failed to load"));
    }
}
