//! World Dimensions
//!
//! Screen and sprite sizes the simulation is laid out against. Captured once
//! at startup from the window and the loaded sprite sheets, so the game state
//! can be built and stepped without a rendering context.

/// Scarfy's sheet is a single row of this many frames
pub const SCARFY_SHEET_COLUMNS: f32 = 6.0;
/// Nebula sheet is a square grid with this many cells per side
pub const NEBULA_SHEET_GRID: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldDims {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Size of one player animation frame
    pub player_frame: (f32, f32),
    /// Size of one obstacle animation frame
    pub obstacle_frame: (f32, f32),
}

impl WorldDims {
    /// Derive frame sizes from the raw sprite sheet dimensions
    pub fn from_sheets(
        screen_width: f32,
        screen_height: f32,
        scarfy_sheet: (f32, f32),
        nebula_sheet: (f32, f32),
    ) -> Self {
        Self {
            screen_width,
            screen_height,
            player_frame: (scarfy_sheet.0 / SCARFY_SHEET_COLUMNS, scarfy_sheet.1),
            obstacle_frame: (nebula_sheet.0 / NEBULA_SHEET_GRID, nebula_sheet.1 / NEBULA_SHEET_GRID),
        }
    }

    /// Y coordinate at which a sprite of `sprite_height` stands on the ground
    pub fn ground_y(&self, sprite_height: f32) -> f32 {
        self.screen_height - sprite_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sheets() {
        // Stock art: scarfy.png is 768x128, the nebula sheet 800x800
        let dims = WorldDims::from_sheets(800.0, 600.0, (768.0, 128.0), (800.0, 800.0));
        assert_eq!(dims.player_frame, (128.0, 128.0));
        assert_eq!(dims.obstacle_frame, (100.0, 100.0));
        assert_eq!(dims.ground_y(128.0), 472.0);
    }
}
