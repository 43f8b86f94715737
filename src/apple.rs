use log::warn;
use rand::Rng;

use crate::config::{GridSize, MAX_APPLE_SAMPLES};
use crate::snake::{Point, Snake};

/// Picks a uniformly random interior cell, walls excluded.
#[must_use]
pub fn random_interior_point<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Point {
    let max_x = i32::from(bounds.width) - 2;
    let max_y = i32::from(bounds.height) - 2;

    Point {
        x: rng.gen_range(1..=max_x),
        y: rng.gen_range(1..=max_y),
    }
}

/// Finds a free interior cell for the next apple.
///
/// Samples at random first; once [`MAX_APPLE_SAMPLES`] draws have all landed on
/// the snake, picks uniformly among the remaining free cells. Returns `None`
/// when the snake covers the whole interior.
#[must_use]
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Point> {
    if bounds.interior_cells() == 0 {
        return None;
    }

    for _ in 0..MAX_APPLE_SAMPLES {
        let candidate = random_interior_point(rng, bounds);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    warn!(
        "apple sampling missed {MAX_APPLE_SAMPLES} times on a {}x{} board, scanning free cells",
        bounds.width, bounds.height
    );

    let candidates = free_cells(bounds, snake);
    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}

fn free_cells(bounds: GridSize, snake: &Snake) -> Vec<Point> {
    let mut candidates = Vec::new();

    for y in 1..i32::from(bounds.height) - 1 {
        for x in 1..i32::from(bounds.width) - 1 {
            let point = Point { x, y };
            if !snake.occupies(point) {
                candidates.push(point);
            }
        }
    }

    candidates
}
