use std::fmt;
use std::io;
use std::str::FromStr;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::SnakeError;

/// Cardinal facing directions on the grid. `y` grows southwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All four directions in their canonical `N`, `S`, `W`, `E` order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Returns the one-cell `(dx, dy)` offset for this direction.
    #[must_use]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::West => (-1, 0),
            Self::East => (1, 0),
        }
    }

    /// Returns true for `North` and `South`.
    #[must_use]
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// Single-letter symbol used in settings and logs.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
            Self::West => "W",
            Self::East => "E",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Direction {
    type Err = SnakeError;

    /// Accepts exactly one of `N`, `S`, `W`, `E`.
    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "N" => Ok(Self::North),
            "S" => Ok(Self::South),
            "W" => Ok(Self::West),
            "E" => Ok(Self::East),
            other => Err(SnakeError::InvalidDirection(other.to_owned())),
        }
    }
}

/// High-level input events consumed by the game loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    /// Starts when over, resumes when paused, pauses when running.
    Confirm,
    CycleTheme,
    Quit,
}

/// Translates one key press into a game input.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<GameInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(GameInput::Quit);
    }

    let input = match key.code {
        KeyCode::Up | KeyCode::Char('k' | 'w') => GameInput::Direction(Direction::North),
        KeyCode::Down | KeyCode::Char('j' | 's') => GameInput::Direction(Direction::South),
        KeyCode::Left | KeyCode::Char('h' | 'a') => GameInput::Direction(Direction::West),
        KeyCode::Right | KeyCode::Char('l' | 'd') => GameInput::Direction(Direction::East),
        KeyCode::Enter | KeyCode::Char(' ') => GameInput::Confirm,
        KeyCode::Char('t') => GameInput::CycleTheme,
        KeyCode::Esc | KeyCode::Char('q') => GameInput::Quit,
        _ => return None,
    };

    Some(input)
}

/// Polls the terminal for keyboard input.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for a key press and returns the mapped input.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key(key)),
            _ => Ok(None),
        }
    }
}
