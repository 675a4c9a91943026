use crate::*;
pub use random::*;
pub use scripted::*;

mod random;
mod scripted;

/// Supplies the computer's move for each new round.
pub trait MoveSource {
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}
