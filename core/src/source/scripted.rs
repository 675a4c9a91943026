use alloc::vec::Vec;

use super::*;

/// Replays a fixed list of moves, starting over once it runs out.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedMoveSource {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoveSource {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        let moves: Vec<_> = moves.into_iter().collect();
        if moves.is_empty() {
            log::warn!("Empty move script, every round will draw {}", Move::Rock);
        }
        Self { moves, cursor: 0 }
    }

    pub fn repeat(mv: Move) -> Self {
        Self::new([mv])
    }
}

impl MoveSource for ScriptedMoveSource {
    fn next_move(&mut self) -> Move {
        let Some(&mv) = self.moves.get(self.cursor) else {
            return Move::Rock;
        };
        self.cursor = (self.cursor + 1) % self.moves.len();
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles_through_the_script() {
        let mut source = ScriptedMoveSource::new([Move::Paper, Move::Rock]);

        assert_eq!(source.next_move(), Move::Paper);
        assert_eq!(source.next_move(), Move::Rock);
        assert_eq!(source.next_move(), Move::Paper);
    }

    #[test]
    fn empty_script_falls_back_to_rock() {
        let mut source = ScriptedMoveSource::new(core::iter::empty::<Move>());

        assert_eq!(source.next_move(), Move::Rock);
        assert_eq!(source.next_move(), Move::Rock);
    }

    #[test]
    fn works_through_a_mutable_reference() {
        fn draw_one<S: MoveSource>(mut source: S) -> Move {
            source.next_move()
        }

        let mut source = ScriptedMoveSource::new([Move::Scissors, Move::Paper]);

        assert_eq!(draw_one(&mut source), Move::Scissors);
        assert_eq!(source.next_move(), Move::Paper);
    }
}
