//! Piece icon resolution
//!
//! Maps a piece's type, team and boss flag to an image under `/images/`. The player
//! uses the white set, the opponent the black set. Boss pieces always use the boss
//! artwork. Unknown types resolve to no icon so the square still renders.

use crate::game::types::{Piece, PieceKind, Team};

/// Artwork for boss pieces, regardless of type
pub const BOSS_ICON: &str = "/images/boss.png";

/// Image path for a piece, or `None` for an unrecognized type
pub fn piece_icon(kind: &PieceKind, team: Team, is_boss: bool) -> Option<&'static str> {
    if is_boss {
        return Some(BOSS_ICON);
    }

    let path = match (kind, team) {
        (PieceKind::Pawn, Team::Player) => "/images/peon_blanco.png",
        (PieceKind::Pawn, Team::Opponent) => "/images/peon_negro.png",
        (PieceKind::Knight, Team::Player) => "/images/caballo_blanco.png",
        (PieceKind::Knight, Team::Opponent) => "/images/caballo_negro.png",
        (PieceKind::Bishop, Team::Player) => "/images/alfil_blanco.png",
        (PieceKind::Bishop, Team::Opponent) => "/images/alfil_negro.png",
        (PieceKind::Rook, Team::Player) => "/images/torre_blanca.png",
        (PieceKind::Rook, Team::Opponent) => "/images/torre_negra.png",
        (PieceKind::Queen, Team::Player) => "/images/reina_blanca.png",
        (PieceKind::Queen, Team::Opponent) => "/images/reina_negra.png",
        (PieceKind::King, Team::Player) => "/images/rey_blanco.png",
        (PieceKind::King, Team::Opponent) => "/images/rey_negro.png",
        (PieceKind::Unrecognized(_), _) => return None,
    };
    Some(path)
}

/// Icon for a piece value
pub fn icon_for(piece: &Piece) -> Option<&'static str> {
    piece_icon(&piece.kind, piece.team, piece.is_boss)
}

/// Single-character symbol for the text board
///
/// Uppercase for the player, lowercase for the opponent, `X` for a boss,
/// `?` for an unrecognized type.
pub fn piece_glyph(piece: &Piece) -> char {
    if piece.is_boss {
        return 'X';
    }
    let glyph = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
        PieceKind::Unrecognized(_) => return '?',
    };
    match piece.team {
        Team::Player => glyph.to_ascii_uppercase(),
        Team::Opponent => glyph,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boss_overrides_type() {
        assert_eq!(
            piece_icon(&PieceKind::King, Team::Opponent, true),
            Some(BOSS_ICON)
        );
        assert_eq!(
            piece_icon(&PieceKind::Unrecognized("DRAGON".into()), Team::Opponent, true),
            Some(BOSS_ICON)
        );
    }

    #[test]
    fn test_team_picks_color_set() {
        assert_eq!(
            piece_icon(&PieceKind::Pawn, Team::Player, false),
            Some("/images/peon_blanco.png")
        );
        assert_eq!(
            piece_icon(&PieceKind::Rook, Team::Opponent, false),
            Some("/images/torre_negra.png")
        );
        assert_eq!(
            piece_icon(&PieceKind::Queen, Team::Player, false),
            Some("/images/reina_blanca.png")
        );
    }

    #[test]
    fn test_unrecognized_type_has_no_icon() {
        assert_eq!(
            piece_icon(&PieceKind::Unrecognized("DRAGON".into()), Team::Player, false),
            None
        );
    }

    #[test]
    fn test_every_known_kind_has_icons_for_both_teams() {
        let kinds = [
            PieceKind::Pawn,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Rook,
            PieceKind::Queen,
            PieceKind::King,
        ];
        for kind in kinds {
            let white = piece_icon(&kind, Team::Player, false).unwrap();
            let black = piece_icon(&kind, Team::Opponent, false).unwrap();
            assert_ne!(white, black, "{:?} should differ by team", kind);
        }
    }
}
