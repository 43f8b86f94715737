use std::collections::VecDeque;

use crate::config::MIN_SNAKE_LENGTH;
use crate::error::SnakeError;
use crate::input::Direction;

/// Grid position in cell coordinates. `(0, 0)` is the top-left wall corner.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point `distance` cells away along `direction`.
    #[must_use]
    pub fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * distance,
            y: self.y + dy * distance,
        }
    }
}

/// The player's snake: a head, a facing direction and the trailing body.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    direction: Direction,
    head: Point,
    /// Body segments behind the head, head-adjacent first.
    tail: VecDeque<Point>,
}

impl Snake {
    /// Creates a straight snake with its head at `head`, trailing away from
    /// `direction`. Lengths below the minimum are raised to it.
    pub fn new(head: Point, direction: Direction, length: usize) -> Result<Self, SnakeError> {
        if head.x <= 0 || head.y <= 0 {
            return Err(SnakeError::HeadNotPositive {
                x: head.x,
                y: head.y,
            });
        }

        let length = length.max(MIN_SNAKE_LENGTH);
        let behind = direction.opposite();
        let tail = (1..length)
            .map(|distance| head.offset(behind, distance as i32))
            .collect();

        Ok(Self {
            direction,
            head,
            tail,
        })
    }

    /// Same as [`Snake::new`], with the direction given as `N`, `S`, `W` or `E`.
    pub fn from_symbol(x: i32, y: i32, symbol: &str, length: usize) -> Result<Self, SnakeError> {
        let direction = symbol.parse()?;
        Self::new(Point::new(x, y), direction, length)
    }

    /// Faces the snake towards `direction`. Reversing into the body is allowed
    /// here and ends the game on the next tick.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Parses `symbol` and turns; leaves the direction untouched on error.
    pub fn turn_symbol(&mut self, symbol: &str) -> Result<(), SnakeError> {
        self.turn(symbol.parse()?);
        Ok(())
    }

    /// The cell right in front of the head.
    #[must_use]
    pub fn tongue(&self) -> Point {
        self.head.offset(self.direction, 1)
    }

    /// Advances one cell. The old head becomes the first tail segment and the
    /// last one is dropped unless `grow` is set.
    pub fn move_forward(&mut self, grow: bool) {
        let next_head = self.tongue();

        self.tail.push_front(self.head);
        if !grow {
            let _ = self.tail.pop_back();
        }
        self.head = next_head;
    }

    #[must_use]
    pub fn head(&self) -> Point {
        self.head
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Iterates over the body segments from head-adjacent to tip.
    pub fn tail(&self) -> impl Iterator<Item = &Point> {
        self.tail.iter()
    }

    /// Returns the last body segment.
    #[must_use]
    pub fn tail_tip(&self) -> Option<Point> {
        self.tail.back().copied()
    }

    #[must_use]
    pub fn tail_len(&self) -> usize {
        self.tail.len()
    }

    /// Returns true if a body segment, head excluded, sits on `point`.
    #[must_use]
    pub fn tail_contains(&self, point: Point) -> bool {
        self.tail.contains(&point)
    }

    /// Returns true if the head or any body segment sits on `point`.
    #[must_use]
    pub fn occupies(&self, point: Point) -> bool {
        self.head == point || self.tail_contains(point)
    }

    /// Head plus tail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always false; a snake has at least a head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SnakeError;
    use crate::input::Direction;

    use super::{Point, Snake};

    fn tail_of(snake: &Snake) -> Vec<Point> {
        snake.tail().copied().collect()
    }

    #[test]
    fn tail_trails_behind_each_facing() {
        let head = Point::new(5, 5);
        let cases = [
            (Direction::North, [Point::new(5, 6), Point::new(5, 7)]),
            (Direction::South, [Point::new(5, 4), Point::new(5, 3)]),
            (Direction::West, [Point::new(6, 5), Point::new(7, 5)]),
            (Direction::East, [Point::new(4, 5), Point::new(3, 5)]),
        ];

        for (direction, expected) in cases {
            let snake = Snake::new(head, direction, 3).expect("valid snake");
            assert_eq!(tail_of(&snake), expected.to_vec(), "facing {direction}");
        }
    }

    #[test]
    fn short_length_uses_minimum() {
        let snake = Snake::new(Point::new(4, 4), Direction::East, 1).expect("valid snake");
        assert_eq!(snake.len(), 3);

        let snake = Snake::new(Point::new(9, 4), Direction::East, 5).expect("valid snake");
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.tail_tip(), Some(Point::new(5, 4)));
    }

    #[test]
    fn head_must_have_positive_coordinates() {
        assert_eq!(
            Snake::new(Point::new(0, 4), Direction::North, 3),
            Err(SnakeError::HeadNotPositive { x: 0, y: 4 })
        );
        assert!(Snake::new(Point::new(3, -1), Direction::North, 3).is_err());
    }

    #[test]
    fn symbol_construction_rejects_unknown_direction() {
        assert_eq!(
            Snake::from_symbol(3, 3, "Q", 3),
            Err(SnakeError::InvalidDirection("Q".to_owned()))
        );

        let snake = Snake::from_symbol(3, 3, "S", 3).expect("valid snake");
        assert_eq!(snake.direction(), Direction::South);
    }

    #[test]
    fn tongue_is_one_cell_ahead_after_any_turn() {
        let head = Point::new(10, 10);
        let mut snake = Snake::new(head, Direction::North, 3).expect("valid snake");

        for direction in Direction::ALL {
            snake.turn(direction);
            let tongue = snake.tongue();
            let (dx, dy) = direction.delta();

            assert_eq!(tongue, Point::new(head.x + dx, head.y + dy));
            assert_eq!((tongue.x - head.x).abs() + (tongue.y - head.y).abs(), 1);
        }

        snake.turn(Direction::North);
        assert_eq!(snake.tongue(), Point::new(10, 9));
        snake.turn(Direction::West);
        assert_eq!(snake.tongue(), Point::new(9, 10));
    }

    #[test]
    fn invalid_turn_keeps_direction() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::West, 3).expect("valid snake");

        assert!(snake.turn_symbol("up").is_err());
        assert_eq!(snake.direction(), Direction::West);

        snake.turn_symbol("N").expect("valid symbol");
        assert_eq!(snake.direction(), Direction::North);
    }

    #[test]
    fn move_without_growth_drops_tip() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::East, 3).expect("valid snake");
        let tongue = snake.tongue();

        snake.move_forward(false);

        assert_eq!(snake.head(), tongue);
        assert_eq!(tail_of(&snake), vec![Point::new(5, 5), Point::new(4, 5)]);
    }

    #[test]
    fn move_with_growth_keeps_tip() {
        let mut snake = Snake::new(Point::new(5, 5), Direction::East, 3).expect("valid snake");
        let tongue = snake.tongue();

        snake.move_forward(true);

        assert_eq!(snake.head(), tongue);
        assert_eq!(
            tail_of(&snake),
            vec![Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)]
        );
    }

    #[test]
    fn occupies_covers_head_and_tail() {
        let snake = Snake::new(Point::new(5, 5), Direction::North, 3).expect("valid snake");

        assert!(snake.occupies(Point::new(5, 5)));
        assert!(snake.occupies(Point::new(5, 7)));
        assert!(!snake.tail_contains(Point::new(5, 5)));
        assert!(!snake.occupies(Point::new(6, 5)));
    }
}
