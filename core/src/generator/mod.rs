use crate::*;
pub use random::*;

mod random;

/// Strategy for deciding where the mines go on a fresh board.
pub trait MineLayoutGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout;
}
