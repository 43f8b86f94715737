use crate::board::Board;
use crate::config::{Theme, THEMES};
use crate::view::View;

/// Which overlay, if any, covers the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Splash,
    Playing,
    Paused,
    GameOver,
}

/// [`View`] for the ratatui front end.
///
/// Frames are drawn from the board every loop iteration; this type keeps what
/// the board alone cannot tell: the current overlay and the score of the last
/// round, which the board has already reset once the game is over.
#[derive(Debug, Clone)]
pub struct TerminalView {
    screen: Screen,
    score: u32,
    level: u32,
    best_score: u32,
    ticks: u64,
    theme_idx: usize,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            screen: Screen::Splash,
            score: 0,
            level: 1,
            best_score: 0,
            ticks: 0,
            theme_idx: 0,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Score shown in the HUD; survives the reset at game over.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Best score seen since launch.
    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Ticks in the current round.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// True when snake and apple should be drawn.
    #[must_use]
    pub fn shows_pieces(&self) -> bool {
        matches!(self.screen, Screen::Playing | Screen::Paused)
    }

    #[must_use]
    pub fn theme(&self) -> &'static Theme {
        &THEMES[self.theme_idx]
    }

    pub fn cycle_theme(&mut self) {
        self.theme_idx = (self.theme_idx + 1) % THEMES.len();
    }
}

impl View for TerminalView {
    fn start(&mut self, board: &Board) {
        self.screen = Screen::Playing;
        self.score = board.score;
        self.level = board.level;
        self.ticks = 0;
    }

    fn update(&mut self, board: &Board, grow: bool) {
        self.ticks += 1;
        if grow {
            self.score = board.score;
            self.level = board.level;
            self.best_score = self.best_score.max(self.score);
        }
    }

    fn pause(&mut self, _board: &Board) {
        self.screen = Screen::Paused;
    }

    fn resume(&mut self, _board: &Board) {
        self.screen = Screen::Playing;
    }

    fn over(&mut self, _board: &Board) {
        self.screen = Screen::GameOver;
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::config::{GameConfig, THEMES};
    use crate::view::View;

    use super::{Screen, TerminalView};

    fn board() -> Board {
        Board::new(&GameConfig {
            width: 10,
            height: 10,
            seed: Some(21),
            ..GameConfig::default()
        })
        .expect("valid board")
    }

    #[test]
    fn overlays_follow_callbacks() {
        let board = board();
        let mut view = TerminalView::new();
        assert_eq!(view.screen(), Screen::Splash);
        assert!(!view.shows_pieces());

        view.start(&board);
        assert_eq!(view.screen(), Screen::Playing);
        view.pause(&board);
        assert_eq!(view.screen(), Screen::Paused);
        assert!(view.shows_pieces());
        view.resume(&board);
        assert_eq!(view.screen(), Screen::Playing);
        view.over(&board);
        assert_eq!(view.screen(), Screen::GameOver);
        assert!(!view.shows_pieces());
    }

    #[test]
    fn final_score_survives_reset() {
        let mut board = board();
        let mut view = TerminalView::new();
        view.start(&board);

        board.eat_apple();
        board.eat_apple();
        view.update(&board, true);
        view.update(&board, false);

        board.reset_progress();
        view.over(&board);

        assert_eq!((view.score(), view.level()), (3, 3));
        assert_eq!(view.best_score(), 3);
        assert_eq!(view.ticks(), 2);

        view.start(&board);
        assert_eq!((view.score(), view.level(), view.ticks()), (0, 1, 0));
        assert_eq!(view.best_score(), 3);
    }

    #[test]
    fn theme_cycle_wraps() {
        let mut view = TerminalView::new();
        let first = view.theme().name;

        for _ in 0..THEMES.len() {
            view.cycle_theme();
        }

        assert_eq!(view.theme().name, first);
    }
}
