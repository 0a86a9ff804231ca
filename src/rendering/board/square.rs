//! Square view
//!
//! A [`SquareView`] is the descriptor for one cell. [`SquareView::render`] turns it
//! into what is actually drawn. A fogged square renders as [`SquareRender::Fogged`],
//! which carries no piece, HP, selection or last-move data at all.

use super::board_theme::BoardTheme;
use crate::game::types::{Coord, Piece};
use crate::rendering::pieces::icon_for;

/// Input for one board cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareView {
    pub coord: Coord,
    pub piece: Option<Piece>,
    pub fogged: bool,
    pub selected: bool,
    pub last_move: bool,
}

/// Background shade of a visible square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareShade {
    Light,
    Dark,
}

impl SquareShade {
    pub fn color(self) -> &'static str {
        match self {
            SquareShade::Light => BoardTheme::LIGHT_SQUARE,
            SquareShade::Dark => BoardTheme::DARK_SQUARE,
        }
    }
}

/// Outline drawn around a visible square; selection wins over last move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareBorder {
    None,
    Selected,
    LastMove,
}

impl SquareBorder {
    pub fn css(self) -> &'static str {
        match self {
            SquareBorder::None => "none",
            SquareBorder::Selected => "2px solid yellow",
            SquareBorder::LastMove => "2px solid red",
        }
    }
}

/// Color band of an HP bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HpTone {
    /// More than half health left
    Healthy,
    /// Half health or less
    Critical,
}

impl HpTone {
    pub fn color(self) -> &'static str {
        match self {
            HpTone::Healthy => BoardTheme::HP_HEALTHY,
            HpTone::Critical => BoardTheme::HP_CRITICAL,
        }
    }
}

/// Health bar for a visible piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HpBar {
    fraction: f32,
}

impl HpBar {
    pub fn new(hp: u32, hp_max: u32) -> Self {
        let fraction = if hp_max == 0 {
            0.0
        } else {
            (hp as f32 / hp_max as f32).clamp(0.0, 1.0)
        };
        HpBar { fraction }
    }

    /// Filled share in `[0, 1]`
    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Filled share in `[0, 100]`
    pub fn percent(&self) -> f32 {
        self.fraction * 100.0
    }

    pub fn tone(&self) -> HpTone {
        if self.fraction > 0.5 {
            HpTone::Healthy
        } else {
            HpTone::Critical
        }
    }
}

/// What is drawn for a visible piece
#[derive(Debug, Clone, PartialEq)]
pub struct PieceRender {
    /// Image path, `None` for a type without artwork
    pub icon: Option<&'static str>,
    pub label: String,
    pub hp: HpBar,
    pub tooltip: String,
}

impl PieceRender {
    fn from_piece(piece: &Piece) -> Self {
        let name = piece.name.as_deref().unwrap_or_else(|| piece.kind.label());
        let mut tooltip = format!("{} {}/{} HP", name, piece.hp, piece.hp_max);
        if let Some(damage) = piece.damage {
            tooltip.push_str(&format!(", {} DMG", damage));
        }
        PieceRender {
            icon: icon_for(piece),
            label: piece.kind.label().to_string(),
            hp: HpBar::new(piece.hp, piece.hp_max),
            tooltip,
        }
    }
}

/// Rendered form of a square
#[derive(Debug, Clone, PartialEq)]
pub enum SquareRender {
    /// Opaque placeholder; nothing about the square is revealed
    Fogged,
    Visible {
        shade: SquareShade,
        border: SquareBorder,
        highlighted: bool,
        piece: Option<PieceRender>,
    },
}

impl SquareView {
    pub fn shade(&self) -> SquareShade {
        if self.coord.is_dark() {
            SquareShade::Dark
        } else {
            SquareShade::Light
        }
    }

    pub fn render(&self) -> SquareRender {
        if self.fogged {
            return SquareRender::Fogged;
        }

        let border = if self.selected {
            SquareBorder::Selected
        } else if self.last_move {
            SquareBorder::LastMove
        } else {
            SquareBorder::None
        };

        SquareRender::Visible {
            shade: self.shade(),
            border,
            highlighted: self.selected,
            piece: self.piece.as_ref().map(PieceRender::from_piece),
        }
    }
}
