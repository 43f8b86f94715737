use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Total grid dimensions, including the one-cell wall border.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Builds the full grid for a playable area, adding the wall border.
    #[must_use]
    pub fn with_border(playable_width: u16, playable_height: u16) -> Self {
        Self {
            width: playable_width.saturating_add(2 * WALL_THICKNESS),
            height: playable_height.saturating_add(2 * WALL_THICKNESS),
        }
    }

    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    /// Returns the number of cells inside the wall border.
    #[must_use]
    pub fn interior_cells(self) -> usize {
        let inner = |side: u16| usize::from(side.saturating_sub(2 * WALL_THICKNESS));
        inner(self.width) * inner(self.height)
    }
}

/// Default playable width in cells.
pub const DEFAULT_BOARD_WIDTH: u16 = 50;

/// Default playable height in cells.
pub const DEFAULT_BOARD_HEIGHT: u16 = 50;

/// Thickness of the wall border on every side.
pub const WALL_THICKNESS: u16 = 1;

/// Snakes never start shorter than this.
pub const MIN_SNAKE_LENGTH: usize = 3;

/// Free cells kept between a fresh snake and the walls along its axis.
pub const SPAWN_BUFFER_ALONG: u16 = 2;

/// Free cells kept between a fresh snake and the walls across its axis.
pub const SPAWN_BUFFER_ACROSS: u16 = 1;

/// Tick interval at level zero, in milliseconds.
pub const BASE_TIMEOUT_MS: u64 = 340;

/// Milliseconds shaved off the tick interval per level.
pub const TIMEOUT_STEP_PER_LEVEL_MS: u64 = 8;

/// The tick interval never drops below this.
pub const MIN_TIMEOUT_MS: u64 = 60;

/// Random apple samples tried before falling back to a free-cell scan.
pub const MAX_APPLE_SAMPLES: usize = 256;

/// Gameplay parameters for one game instance.
///
/// `width` and `height` describe the playable area; the wall border is added
/// on top of them.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub snake_length: usize,
    /// Fixed seed for snake and apple placement; random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            snake_length: MIN_SNAKE_LENGTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Applies optional dimensions. When only one is given, the other mirrors it.
    #[must_use]
    pub fn with_dimensions(mut self, width: Option<u16>, height: Option<u16>) -> Self {
        match (width, height) {
            (Some(width), Some(height)) => {
                self.width = width;
                self.height = height;
            }
            (Some(side), None) | (None, Some(side)) => {
                self.width = side;
                self.height = side;
            }
            (None, None) => {}
        }
        self
    }

    /// Full grid size, walls included.
    #[must_use]
    pub fn grid_size(&self) -> GridSize {
        GridSize::with_border(self.width, self.height)
    }

    /// Requested snake length, raised to the minimum.
    #[must_use]
    pub fn effective_snake_length(&self) -> usize {
        self.snake_length.max(MIN_SNAKE_LENGTH)
    }
}

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub apple: Color,
    pub wall: Color,
    pub play_bg: Color,
    pub hud_label: Color,
    pub hud_value: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on black.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::LightGreen,
    snake_body: Color::Green,
    apple: Color::Red,
    wall: Color::Gray,
    play_bg: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    apple: Color::Yellow,
    wall: Color::Blue,
    play_bg: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "Neon",
    snake_head: Color::White,
    snake_body: Color::Magenta,
    apple: Color::Yellow,
    wall: Color::Magenta,
    play_bg: Color::Black,
    hud_label: Color::DarkGray,
    hud_value: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Upper half-block glyph; two grid rows share one terminal row.
pub const GLYPH_HALF_UPPER: &str = "▀";

#[cfg(test)]
mod tests {
    use super::{GameConfig, GridSize, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

    #[test]
    fn default_board_adds_wall_border() {
        let size = GameConfig::default().grid_size();

        assert_eq!(size.width, DEFAULT_BOARD_WIDTH + 2);
        assert_eq!(size.height, DEFAULT_BOARD_HEIGHT + 2);
        assert_eq!(size.interior_cells(), 50 * 50);
    }

    #[test]
    fn single_dimension_is_mirrored() {
        let config = GameConfig::default().with_dimensions(Some(12), None);
        assert_eq!((config.width, config.height), (12, 12));

        let config = GameConfig::default().with_dimensions(None, Some(7));
        assert_eq!((config.width, config.height), (7, 7));

        let config = GameConfig::default().with_dimensions(Some(20), Some(9));
        assert_eq!((config.width, config.height), (20, 9));
    }

    #[test]
    fn short_snakes_are_raised_to_minimum() {
        let config = GameConfig {
            snake_length: 1,
            ..GameConfig::default()
        };
        assert_eq!(config.effective_snake_length(), 3);

        let config = GameConfig {
            snake_length: 6,
            ..GameConfig::default()
        };
        assert_eq!(config.effective_snake_length(), 6);
    }

    #[test]
    fn grid_cell_counts() {
        let size = GridSize {
            width: 12,
            height: 7,
        };

        assert_eq!(size.total_cells(), 84);
        assert_eq!(size.interior_cells(), 50);
    }
}
