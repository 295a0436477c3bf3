use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

use super::*;

/// Places mines uniformly at random using an injected random source.
///
/// Exactly `config.mines()` distinct cells are drawn from the flat cell indices, so placement takes
/// bounded time even on boards that are almost entirely mines.
#[derive(Clone, Debug)]
pub struct RandomLayoutGenerator<R> {
    rng: R,
}

impl<R: Rng> RandomLayoutGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomLayoutGenerator<SmallRng> {
    /// Reproducible generator, the same seed and config always give the same layout.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MineLayoutGenerator for RandomLayoutGenerator<R> {
    fn generate(mut self, config: BoardConfig) -> MineLayout {
        let (rows, cols) = config.size();
        let total_cells = usize::from(config.total_cells());
        let mines = usize::from(config.mines());

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        for flat_index in index::sample(&mut self.rng, total_cells, mines) {
            let row = flat_index / usize::from(cols);
            let col = flat_index % usize::from(cols);
            mine_mask[[row, col]] = true;
        }

        log::debug!("Placed {} mines on a {}x{} board", mines, rows, cols);
        MineLayout::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rows: Coord, cols: Coord, mines: CellCount) -> BoardConfig {
        BoardConfig::new(rows, cols, mines).unwrap()
    }

    #[test]
    fn places_exact_mine_count() {
        for difficulty in Difficulty::ALL {
            let layout = RandomLayoutGenerator::from_seed(7).generate(difficulty.config());
            assert_eq!(layout.config(), difficulty.config());
            let placed = layout.mine_mask.iter().filter(|&&is_mine| is_mine).count();
            assert_eq!(placed, usize::from(difficulty.config().mines()));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let a = RandomLayoutGenerator::from_seed(42).generate(config(16, 16, 40));
        let b = RandomLayoutGenerator::from_seed(42).generate(config(16, 16, 40));
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let a = RandomLayoutGenerator::from_seed(1).generate(config(16, 16, 40));
        let b = RandomLayoutGenerator::from_seed(2).generate(config(16, 16, 40));
        assert_ne!(a, b);
    }

    #[test]
    fn dense_board_leaves_one_safe_cell() {
        let layout = RandomLayoutGenerator::from_seed(3).generate(config(3, 3, 8));
        assert_eq!(layout.mine_count(), 8);
        assert_eq!(layout.config().safe_cells(), 1);
    }

    #[test]
    fn mine_free_board() {
        let layout = RandomLayoutGenerator::from_seed(3).generate(config(4, 5, 0));
        assert_eq!(layout.mine_count(), 0);
        assert_eq!(layout.size(), (4, 5));
    }

    #[test]
    fn accepts_borrowed_rng() {
        let mut rng = SmallRng::seed_from_u64(9);
        let layout = RandomLayoutGenerator::new(&mut rng).generate(config(8, 8, 10));
        assert_eq!(layout.mine_count(), 10);
    }
}
