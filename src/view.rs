use crate::board::Board;

/// Presentation side of the game.
///
/// [`crate::game::Game`] calls these after each state transition, with the
/// board already updated. Every callback must be provided.
pub trait View {
    /// A new round began: fresh snake and apple, score 0, level 1.
    fn start(&mut self, board: &Board);

    /// One tick went through. With `grow` set the snake ate, so the apple,
    /// score and level changed too.
    fn update(&mut self, board: &Board, grow: bool);

    fn pause(&mut self, board: &Board);

    fn resume(&mut self, board: &Board);

    /// The snake crashed. Score and level are already reset.
    fn over(&mut self, board: &Board);
}
