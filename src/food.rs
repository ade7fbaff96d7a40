//! Food item: one cell that relocates once it has been consumed.

use rand::Rng;
use tracing::debug;

use crate::config::{CANVAS_WIDTH, CELL_SIZE};
use crate::grid::Cell;

pub struct Food {
    cell: Cell,
    consumed: bool,
}

impl Food {
    /// Starts consumed so the first tick places it somewhere on the board.
    pub fn new() -> Self {
        Food { cell: Cell::new(0, 0), consumed: true }
    }

    /// Food already placed at a specific cell.
    pub fn at(cell: Cell) -> Self {
        Food { cell, consumed: false }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }

    /// Called by the mediator when the snake's head lands on the food.
    pub fn mark_consumed(&mut self) {
        self.consumed = true;
    }

    /// Relocate-if-consumed. Returns the new cell when the food moved.
    ///
    /// The new position is uniform over {0, 10, ..., 580} on each axis: the
    /// outermost row and column are excluded. The cell may land under the
    /// snake's body; that is accepted behavior, not a bug.
    pub fn tick(&mut self, rng: &mut impl Rng) -> Option<Cell> {
        if !self.consumed {
            return None;
        }
        let quads = CANVAS_WIDTH / CELL_SIZE;
        self.cell = Cell::new(
            rng.gen_range(0..quads - 1) * CELL_SIZE,
            rng.gen_range(0..quads - 1) * CELL_SIZE,
        );
        self.consumed = false;
        debug!(x = self.cell.x, y = self.cell.y, "food relocated");
        Some(self.cell)
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CANVAS_HEIGHT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn relocates_only_while_consumed() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut food = Food::new();
        assert!(food.is_consumed());

        let placed = food.tick(&mut rng);
        assert!(placed.is_some());
        assert!(!food.is_consumed());

        // Not consumed: stays put.
        let cell = food.cell();
        assert_eq!(food.tick(&mut rng), None);
        assert_eq!(food.cell(), cell);

        food.mark_consumed();
        assert!(food.tick(&mut rng).is_some());
    }

    #[test]
    fn cells_are_aligned_and_inside_the_interior() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut food = Food::new();
        for _ in 0..500 {
            food.mark_consumed();
            food.tick(&mut rng);
            let c = food.cell();
            assert_eq!(c.x % CELL_SIZE, 0);
            assert_eq!(c.y % CELL_SIZE, 0);
            assert!(c.x >= 0 && c.x <= CANVAS_WIDTH - 2 * CELL_SIZE);
            assert!(c.y >= 0 && c.y <= CANVAS_HEIGHT - 2 * CELL_SIZE);
        }
    }
}
