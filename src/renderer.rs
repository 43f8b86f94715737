use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;

use crate::board::Board;
use crate::config::{GridSize, Theme, GLYPH_HALF_UPPER};
use crate::snake::Point;
use crate::terminal_view::{Screen, TerminalView};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full game frame from the board and the view's overlay state.
pub fn render(frame: &mut Frame<'_>, board: &Board, view: &TerminalView) {
    let area = frame.area();
    let play_area = render_hud(frame, area, board, view);
    let theme = view.theme();

    let cells = cell_colors(board, view.shows_pieces(), theme);
    let grid = grid_rect(play_area, board.size());
    draw_cells(frame, grid, board.size(), &cells);

    match view.screen() {
        Screen::Splash => render_start_menu(frame, play_area, theme),
        Screen::Paused => render_pause_menu(frame, play_area, theme),
        Screen::GameOver => render_game_over_menu(
            frame,
            play_area,
            view.score(),
            view.level(),
            view.best_score(),
            theme,
        ),
        Screen::Playing => {}
    }
}

/// Color of every grid cell, row-major. Snake and apple are left out on the
/// splash and game-over screens.
fn cell_colors(board: &Board, show_pieces: bool, theme: &Theme) -> Vec<Color> {
    let size = board.size();
    let mut cells = vec![theme.play_bg; size.total_cells()];
    let mut paint = |point: Point, color: Color| {
        if let Some(idx) = cell_index(size, point) {
            cells[idx] = color;
        }
    };

    for wall in board.walls() {
        paint(*wall, theme.wall);
    }

    if show_pieces {
        paint(board.apple, theme.apple);
        for segment in board.snake.tail() {
            paint(*segment, theme.snake_body);
        }
        paint(board.snake.head(), theme.snake_head);
    }

    cells
}

fn cell_index(size: GridSize, point: Point) -> Option<usize> {
    let x = usize::try_from(point.x).ok()?;
    let y = usize::try_from(point.y).ok()?;
    let width = usize::from(size.width);

    if x >= width || y >= usize::from(size.height) {
        return None;
    }

    Some(y * width + x)
}

/// Terminal area for the grid: one column per cell, two cell rows per
/// terminal row, centered and clipped to `area`.
fn grid_rect(area: Rect, size: GridSize) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.div_ceil(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_cells(frame: &mut Frame<'_>, grid: Rect, size: GridSize, cells: &[Color]) {
    let width = usize::from(size.width);
    let height = usize::from(size.height);
    let buffer = frame.buffer_mut();

    for row in 0..grid.height {
        let top_y = usize::from(row) * 2;
        for col in 0..grid.width {
            let x = usize::from(col);
            let top = cells[top_y * width + x];
            let bottom = if top_y + 1 < height {
                cells[(top_y + 1) * width + x]
            } else {
                Color::Reset
            };

            buffer.set_string(
                grid.x + col,
                grid.y + row,
                GLYPH_HALF_UPPER,
                Style::new().fg(top).bg(bottom),
            );
        }
    }
}
