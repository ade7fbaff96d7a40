//! Snake state machine: movement, wraparound, growth and self-collision.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::config::CELL_SIZE;
use crate::grid::{crossed_edge, wrap_entry, Cell, Direction};
use crate::mediator::ConsumptionListener;

/// What one tick did to the board, for the render sink.
pub struct StepReport {
    /// Head cell after the move.
    pub new_head: Cell,
    /// Cells the body no longer occupies (dropped tail and any cut segments).
    pub vacated: Vec<Cell>,
    /// Whether the head landed on the food this tick.
    pub ate: bool,
}

pub struct Snake {
    /// Body cells, head at the front.
    segments: VecDeque<Cell>,
    direction: Direction,
    /// Set when a direction change has been accepted this tick; cleared at
    /// the end of every tick. Blocks a second turn within the same step.
    pending_turn: bool,
}

impl Snake {
    /// A snake of `len` segments laid out behind `head` against `direction`.
    pub fn new(head: Cell, len: usize, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let segments = (0..len.max(1) as i32)
            .map(|i| Cell::new(head.x - dx * i * CELL_SIZE, head.y - dy * i * CELL_SIZE))
            .collect();
        Snake { segments, direction, pending_turn: false }
    }

    pub fn head(&self) -> Cell {
        *self.segments.front().unwrap()
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Request a turn. Ignored (not an error) when it would reverse the
    /// current direction or when a change was already accepted this tick.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.pending_turn || new_direction.is_opposite(self.direction) {
            trace!(?new_direction, "direction change rejected");
            return;
        }
        self.direction = new_direction;
        self.pending_turn = true;
    }

    /// One simulation step. `food` is the food's current cell; `listener` is
    /// told when the head lands on it.
    pub fn tick(&mut self, food: Cell, listener: &mut dyn ConsumptionListener) -> StepReport {
        // Wraparound and normal movement are mutually exclusive: crossing an
        // edge re-enters on the opposite boundary, and that re-entry *is*
        // this tick's step.
        let head = self.head();
        let new_head = match crossed_edge(&head, self.direction) {
            Some(edge) => wrap_entry(&head, edge),
            None => head.step(self.direction),
        };

        self.segments.push_front(new_head);
        let old_tail = self.segments.pop_back().unwrap();

        let mut vacated = Vec::new();
        let ate = new_head.overlaps(&food);
        if ate {
            listener.on_food_consumed();
            // Undo the tail drop: the snake grows by one this tick.
            self.segments.push_back(old_tail);
        } else {
            vacated.push(old_tail);
        }

        // First body segment (lowest index, closest to the head) matching the
        // new head cuts the body from there on. The game continues with the
        // shortened snake; there is no game-over state.
        if let Some(hit) = self.segments.iter().skip(1).position(|c| *c == new_head) {
            let cut = self.segments.split_off(hit + 1);
            debug!(cut = cut.len(), remaining = self.segments.len(), "self collision");
            vacated.extend(cut);
        }

        self.pending_turn = false;
        StepReport { new_head, vacated, ate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    struct Nobody;
    impl ConsumptionListener for Nobody {
        fn on_food_consumed(&mut self) {}
    }

    struct Counter(u32);
    impl ConsumptionListener for Counter {
        fn on_food_consumed(&mut self) {
            self.0 += 1;
        }
    }

    // Food parked where these snakes never go.
    const NO_FOOD: Cell = Cell { x: 50, y: 50 };

    #[test]
    fn new_snake_lies_behind_its_head() {
        let snake = Snake::new(Cell::new(300, 300), 3, Right);
        let body: Vec<_> = snake.segments().iter().copied().collect();
        assert_eq!(body, vec![
            Cell::new(300, 300),
            Cell::new(290, 300),
            Cell::new(280, 300),
        ]);
    }

    #[test]
    fn tick_advances_head_one_step_and_keeps_length() {
        let mut snake = Snake::new(Cell::new(300, 300), 3, Right);
        let report = snake.tick(NO_FOOD, &mut Nobody);
        assert_eq!(report.new_head, Cell::new(310, 300));
        assert_eq!(report.vacated, vec![Cell::new(280, 300)]);
        assert!(!report.ate);
        assert_eq!(snake.segments().len(), 3);
    }

    #[test]
    fn tick_wraps_at_the_right_edge() {
        let mut snake = Snake::new(Cell::new(590, 300), 2, Right);
        let report = snake.tick(NO_FOOD, &mut Nobody);
        assert_eq!(report.new_head, Cell::new(0, 300));
        assert_eq!(snake.segments().len(), 2);
    }

    #[test]
    fn tick_wraps_at_the_top_edge_keeping_x() {
        let mut snake = Snake::new(Cell::new(120, 0), 2, Up);
        let report = snake.tick(NO_FOOD, &mut Nobody);
        assert_eq!(report.new_head, Cell::new(120, 590));
    }

    #[test]
    fn eating_grows_by_one_and_notifies_once() {
        let mut snake = Snake::new(Cell::new(300, 300), 3, Right);
        let mut counter = Counter(0);
        let report = snake.tick(Cell::new(310, 300), &mut counter);
        assert!(report.ate);
        assert!(report.vacated.is_empty());
        assert_eq!(counter.0, 1);
        assert_eq!(snake.segments().len(), 4);
        // Tail stayed where it was.
        assert_eq!(*snake.segments().back().unwrap(), Cell::new(280, 300));
    }

    #[test]
    fn reversal_is_rejected() {
        let mut snake = Snake::new(Cell::new(300, 300), 3, Right);
        snake.set_direction(Left);
        assert_eq!(snake.direction(), Right);
    }

    #[test]
    fn at_most_one_direction_change_per_tick() {
        let mut snake = Snake::new(Cell::new(300, 300), 3, Right);
        snake.set_direction(Up);
        snake.set_direction(Down); // second change this tick, also a reversal
        assert_eq!(snake.direction(), Up);

        snake.tick(NO_FOOD, &mut Nobody);
        // Flag cleared at the tick boundary: a new turn is accepted again.
        snake.set_direction(Left);
        assert_eq!(snake.direction(), Left);
    }

    #[test]
    fn self_collision_cuts_at_the_first_match() {
        let mut snake = Snake::new(Cell::new(300, 300), 5, Right);

        snake.set_direction(Up);
        snake.tick(NO_FOOD, &mut Nobody);
        snake.set_direction(Left);
        snake.tick(NO_FOOD, &mut Nobody);
        snake.set_direction(Down);
        let report = snake.tick(NO_FOOD, &mut Nobody);

        // The head curled back onto the body at index 4: everything from
        // there on is cut, leaving exactly 4 segments.
        assert_eq!(report.new_head, Cell::new(290, 300));
        assert_eq!(snake.segments().len(), 4);
        assert!(report.vacated.contains(&Cell::new(290, 300)));
    }
}
