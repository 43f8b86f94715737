use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::time::Duration;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::apple::spawn_position;
use crate::config::{
    GameConfig, GridSize, BASE_TIMEOUT_MS, MIN_SNAKE_LENGTH, MIN_TIMEOUT_MS, SPAWN_BUFFER_ACROSS,
    SPAWN_BUFFER_ALONG, TIMEOUT_STEP_PER_LEVEL_MS, WALL_THICKNESS,
};
use crate::error::GameError;
use crate::input::Direction;
use crate::snake::{Point, Snake};

/// Cells a snake occupies across its own axis.
const SNAKE_WIDTH: i32 = 1;

/// Grid, walls, snake, apple and scoring for one game.
#[derive(Debug, Clone)]
pub struct Board {
    pub snake: Snake,
    pub apple: Point,
    pub score: u32,
    pub level: u32,
    size: GridSize,
    walls: BTreeSet<Point>,
    rng: StdRng,
}

impl Board {
    /// Builds the walled grid and places a first snake and apple.
    ///
    /// Fails when the board cannot hold the configured snake in every
    /// orientation, so that later placements never depend on the random facing.
    pub fn new(config: &GameConfig) -> Result<Self, GameError> {
        let size = config.grid_size();
        let length = config.effective_snake_length();

        if let Some(direction) = Direction::ALL
            .into_iter()
            .find(|direction| head_ranges(size, length, *direction).is_none())
        {
            return Err(too_small(size, length, direction));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = random_snake(&mut rng, size, length)?;
        let apple = spawn_position(&mut rng, size, &snake).ok_or(GameError::NoFreeCell)?;

        debug!(
            "board {}x{} ready, snake of length {length}",
            size.width, size.height
        );

        Ok(Self {
            snake,
            apple,
            score: 0,
            level: 1,
            size,
            walls: place_walls(size),
            rng,
        })
    }

    /// Full grid size, walls included.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// The wall perimeter, ordered column by column.
    #[must_use]
    pub fn walls(&self) -> &BTreeSet<Point> {
        &self.walls
    }

    #[must_use]
    pub fn is_wall(&self, point: Point) -> bool {
        self.walls.contains(&point)
    }

    /// Places a snake of `length` at a random spot and facing, clear of walls.
    pub fn place_snake(&mut self, length: usize) -> Result<Snake, GameError> {
        random_snake(&mut self.rng, self.size, length)
    }

    /// Picks a free interior cell for an apple, or `None` if there is none.
    pub fn place_apple(&mut self) -> Option<Point> {
        spawn_position(&mut self.rng, self.size, &self.snake)
    }

    /// Replaces the snake and the apple for a new round.
    pub fn reset_round(&mut self, length: usize) -> Result<(), GameError> {
        self.snake = self.place_snake(length)?;
        self.apple = self.place_apple().ok_or(GameError::NoFreeCell)?;
        Ok(())
    }

    /// Back to score 0 and level 1.
    pub fn reset_progress(&mut self) {
        self.score = 0;
        self.level = 1;
    }

    /// True if the next move runs into a wall or the current tail.
    ///
    /// The tail is taken before the move: the tip still counts even though a
    /// snake that is not growing leaves it on this tick.
    #[must_use]
    pub fn will_crash(&self) -> bool {
        let tongue = self.snake.tongue();
        self.is_wall(tongue) || self.snake.tail_contains(tongue)
    }

    /// True if the next move lands on the apple.
    #[must_use]
    pub fn will_score(&self) -> bool {
        self.snake.tongue() == self.apple
    }

    /// Credits the current level and moves up one.
    pub fn eat_apple(&mut self) {
        self.score += self.level;
        self.level += 1;
        info!("apple eaten, score {} level {}", self.score, self.level);
    }

    /// Delay before the next tick at the current level.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        timeout_for_level(self.level)
    }
}

/// Tick interval for `level`: 340 ms minus 8 ms per level, never below 60 ms.
#[must_use]
pub fn timeout_for_level(level: u32) -> Duration {
    let speedup_ms = u64::from(level).saturating_mul(TIMEOUT_STEP_PER_LEVEL_MS);
    let timeout_ms = BASE_TIMEOUT_MS
        .saturating_sub(speedup_ms)
        .max(MIN_TIMEOUT_MS);
    Duration::from_millis(timeout_ms)
}

/// Builds the closed one-cell perimeter for `size`.
#[must_use]
pub fn place_walls(size: GridSize) -> BTreeSet<Point> {
    let width = i32::from(size.width);
    let height = i32::from(size.height);
    let mut walls = BTreeSet::new();

    for x in 0..width {
        if x == 0 || x == width - 1 {
            walls.extend((0..height).map(|y| Point { x, y }));
        } else {
            walls.insert(Point { x, y: 0 });
            walls.insert(Point { x, y: height - 1 });
        }
    }

    walls
}

/// Returns true if a snake of `length` facing `direction` fits with its buffers.
#[must_use]
pub fn fits_snake(size: GridSize, length: usize, direction: Direction) -> bool {
    head_ranges(size, length, direction).is_some()
}

fn random_snake<R: Rng + ?Sized>(
    rng: &mut R,
    size: GridSize,
    length: usize,
) -> Result<Snake, GameError> {
    let length = length.max(MIN_SNAKE_LENGTH);
    let direction = Direction::ALL[rng.gen_range(0..Direction::ALL.len())];
    let Some((xs, ys)) = head_ranges(size, length, direction) else {
        return Err(too_small(size, length, direction));
    };

    let head = Point {
        x: rng.gen_range(xs),
        y: rng.gen_range(ys),
    };

    Snake::new(head, direction, length).map_err(GameError::from)
}

/// Valid head coordinates `(x, y)` for a snake of `length` facing `direction`.
///
/// The whole body plus a buffer of two cells along its axis and one cell
/// across it stays clear of the walls.
fn head_ranges(
    size: GridSize,
    length: usize,
    direction: Direction,
) -> Option<(RangeInclusive<i32>, RangeInclusive<i32>)> {
    let length = i32::try_from(length).ok()?;
    let wall = i32::from(WALL_THICKNESS);
    let along = i32::from(SPAWN_BUFFER_ALONG);
    let across = i32::from(SPAWN_BUFFER_ACROSS);

    let (long_side, cross_side) = if direction.is_vertical() {
        (i32::from(size.height), i32::from(size.width))
    } else {
        (i32::from(size.width), i32::from(size.height))
    };

    if long_side - wall * 2 - length < along * 2
        || cross_side - wall * 2 - SNAKE_WIDTH < across * 2
    {
        return None;
    }

    let cross = (wall + across)..=(cross_side - wall * 2 - across);
    let long = match direction {
        // Tail trails towards the far wall.
        Direction::North | Direction::West => {
            (wall + along)..=(long_side - wall - length - along)
        }
        // Tail trails towards the near wall.
        Direction::South | Direction::East => (length + along)..=(long_side - wall * 2 - along),
    };

    Some(if direction.is_vertical() {
        (cross, long)
    } else {
        (long, cross)
    })
}

fn too_small(size: GridSize, length: usize, direction: Direction) -> GameError {
    GameError::BoardTooSmall {
        width: size.width,
        height: size.height,
        length,
        direction,
    }
}
