use std::time::Duration;

use log::{debug, error, info};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::input::Direction;
use crate::timer::{TickTimer, TimerHandle};
use crate::view::View;

/// Current high-level gameplay state.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Running,
    Paused,
    Over,
}

/// One game session: the board, its tick schedule and the attached view.
///
/// A game starts out [`GameStatus::Over`], showing the splash until the first
/// [`Game::start`].
#[derive(Debug)]
pub struct Game<V: View> {
    board: Board,
    status: GameStatus,
    snake_length: usize,
    timer: TickTimer,
    pending_tick: Option<TimerHandle>,
    view: V,
}

impl<V: View> Game<V> {
    /// Builds the board for `config` and attaches `view`.
    pub fn new(config: &GameConfig, view: V) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(config)?,
            status: GameStatus::Over,
            snake_length: config.effective_snake_length(),
            timer: TickTimer::new(),
            pending_tick: None,
            view,
        })
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Over
    }

    /// Delay between ticks at the current level.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.board.timeout()
    }

    /// Time left before the scheduled tick, if one is pending.
    #[must_use]
    pub fn next_tick_in(&self) -> Option<Duration> {
        self.timer.remaining()
    }

    /// Starts a new round with a fresh snake and apple.
    ///
    /// On a placement error the game stays over.
    pub fn start(&mut self) -> Result<(), GameError> {
        if let Err(err) = self.board.reset_round(self.snake_length) {
            error!("cannot start game: {err}");
            return Err(err);
        }

        self.status = GameStatus::Running;
        info!(
            "game started, snake at {:?} facing {}",
            self.board.snake.head(),
            self.board.snake.direction()
        );

        self.view.start(&self.board);
        self.schedule_tick();
        Ok(())
    }

    /// Freezes a running game. No tick fires until [`Game::resume`].
    pub fn pause(&mut self) {
        if self.status != GameStatus::Running {
            debug!("pause ignored while {:?}", self.status);
            return;
        }

        self.status = GameStatus::Paused;
        self.view.pause(&self.board);
        self.cancel_tick();
    }

    pub fn resume(&mut self) {
        if self.status != GameStatus::Paused {
            debug!("resume ignored while {:?}", self.status);
            return;
        }

        self.status = GameStatus::Running;
        self.view.resume(&self.board);
        self.schedule_tick();
    }

    /// Ends the game and resets score and level.
    pub fn over(&mut self) {
        info!(
            "game over with score {} at level {}",
            self.board.score, self.board.level
        );

        self.status = GameStatus::Over;
        self.board.reset_progress();
        self.view.over(&self.board);
        self.cancel_tick();
    }

    /// Turns the snake unless the game is paused. Returns whether it turned.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if self.is_paused() {
            debug!("turn {direction} rejected while paused");
            return false;
        }

        self.board.snake.turn(direction);
        true
    }

    /// The single confirm key: start when over, resume when paused, pause
    /// when running.
    pub fn confirm(&mut self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Over => self.start()?,
            GameStatus::Paused => self.resume(),
            GameStatus::Running => self.pause(),
        }
        Ok(())
    }

    /// Feeds elapsed time to the tick schedule, ticking when it comes due.
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(fired) = self.timer.advance(elapsed) else {
            return;
        };

        if self.pending_tick == Some(fired) {
            self.pending_tick = None;
            self.tick();
        }
    }

    /// Advances the simulation by one step.
    ///
    /// Crash beats score: a tongue on a wall or the tail ends the game before
    /// the apple is considered. Eating raises the level before the next tick is
    /// scheduled, so the speed-up applies immediately.
    pub fn tick(&mut self) {
        if self.status != GameStatus::Running {
            debug!("tick skipped while {:?}", self.status);
            return;
        }

        if self.board.will_crash() {
            self.over();
            return;
        }

        let grow = self.board.will_score();
        if grow {
            self.board.eat_apple();
        }

        self.board.snake.move_forward(grow);

        if grow {
            match self.board.place_apple() {
                Some(apple) => self.board.apple = apple,
                None => {
                    info!("snake fills the board");
                    self.over();
                    return;
                }
            }
        }

        self.view.update(&self.board, grow);
        self.schedule_tick();
    }

    fn schedule_tick(&mut self) {
        self.cancel_tick();
        let timeout = self.timeout();
        self.pending_tick = Some(self.timer.schedule(timeout));
        debug!("next tick in {} ms", timeout.as_millis());
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.pending_tick.take() {
            self.timer.cancel(handle);
        }
    }
}
