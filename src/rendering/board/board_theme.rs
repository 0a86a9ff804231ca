//! Board palette
//!
//! CSS color values shared by every front end that draws the board.

/// Colors for squares, fog, borders and HP bars
pub struct BoardTheme;

impl BoardTheme {
    pub const LIGHT_SQUARE: &'static str = "#f0d9b5";
    pub const DARK_SQUARE: &'static str = "#b58863";
    pub const FOG: &'static str = "#14141e";
    pub const SELECTED_FILL: &'static str = "rgba(255, 255, 0, 0.5)";
    pub const SELECTED_BORDER: &'static str = "yellow";
    pub const LAST_MOVE_BORDER: &'static str = "red";
    pub const FRAME: &'static str = "#5c4033";

    pub const HP_HEALTHY: &'static str = "green";
    pub const HP_CRITICAL: &'static str = "red";
    pub const HP_TRACK: &'static str = "black";

    pub const VICTORY: &'static str = "green";
    pub const DEFEAT: &'static str = "red";
}
