//! Selection state for the piece the player is about to move
//!
//! The selection is only a coordinate. It never owns the piece it points at, so
//! every new snapshot must be checked with [`Selection::revalidate`].

use super::types::{Coord, GameState, Move};

/// Currently selected square, if any
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    selected: Option<Coord>,
}

/// What a click asks the session to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// Nothing to do
    Ignored,
    /// A player piece became selected
    Selected(Coord),
    /// The selected piece was clicked again
    Deselected,
    /// Send a move; on rejection select `reselect` (if any) instead of clearing
    SubmitMove { mv: Move, reselect: Option<Coord> },
}

impl Selection {
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn is_selected(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_at(&self, coord: Coord) -> bool {
        self.selected == Some(coord)
    }

    pub fn select(&mut self, coord: Coord) {
        self.selected = Some(coord);
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Drop the selection if its square no longer shows a player piece
    ///
    /// Returns `true` when the selection was cleared.
    pub fn revalidate(&mut self, state: &GameState) -> bool {
        match self.selected {
            Some(coord) if !state.has_player_piece_at(coord) => {
                self.selected = None;
                true
            }
            _ => false,
        }
    }

    /// Advance the selection state machine for a click on `coord`
    ///
    /// Fogged squares count as empty: a piece hidden by fog is never selectable and
    /// never becomes the fallback selection after a rejected move.
    pub fn on_click(&mut self, state: &GameState, coord: Coord) -> ClickAction {
        let clicked_player_piece = state.has_player_piece_at(coord);

        match self.selected {
            None if clicked_player_piece => {
                self.selected = Some(coord);
                ClickAction::Selected(coord)
            }
            None => ClickAction::Ignored,
            Some(from) if from == coord => {
                self.selected = None;
                ClickAction::Deselected
            }
            Some(from) => ClickAction::SubmitMove {
                mv: Move::new(from, coord),
                reselect: clicked_player_piece.then_some(coord),
            },
        }
    }

    /// Settle the selection after the server answered a move
    pub fn on_move_result(&mut self, accepted: bool, reselect: Option<Coord>) {
        self.selected = if accepted { None } else { reselect };
    }
}
