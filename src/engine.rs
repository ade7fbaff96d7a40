//! The simulation engine: one `tick()` is the scheduler's per-interval work.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::config::{
    CANVAS_HEIGHT, CANVAS_WIDTH, INITIAL_SNAKE_LENGTH, MIN_TICK_INTERVAL_MS, SPEED_UP_STEP_MS,
    TICK_INTERVAL_MS,
};
use crate::food::Food;
use crate::grid::{Cell, Direction};
use crate::mediator::Mediator;
use crate::score::Score;
use crate::snake::{Snake, StepReport};

/// Current tick interval. Shrinks on speed-ups, never below the floor.
pub struct SpeedControl {
    interval_ms: u64,
}

impl SpeedControl {
    pub fn new() -> Self {
        SpeedControl { interval_ms: TICK_INTERVAL_MS }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn speed_up(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_sub(SPEED_UP_STEP_MS)
            .max(MIN_TICK_INTERVAL_MS);
        debug!(interval_ms = self.interval_ms, "speed up");
    }
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the render sink needs to repaint after one tick.
pub struct TickEvents {
    pub step: StepReport,
    /// Old and new food cells when the food relocated this tick.
    pub food_moved: Option<(Cell, Cell)>,
    pub score: u32,
    /// The score re-render hook: true on consumption ticks only.
    pub score_changed: bool,
}

pub struct Engine {
    pub snake: Snake,
    pub food: Food,
    score: Score,
    speed: SpeedControl,
    rng: StdRng,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic engine for tests and replays.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        let center = Cell::new(CANVAS_WIDTH / 2, CANVAS_HEIGHT / 2);
        Engine {
            snake: Snake::new(center, INITIAL_SNAKE_LENGTH, Direction::Right),
            food: Food::new(),
            score: Score::new(),
            speed: SpeedControl::new(),
            rng,
        }
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn interval_ms(&self) -> u64 {
        self.speed.interval_ms()
    }

    /// Forward a turn request from the input source to the snake.
    pub fn request_direction(&mut self, dir: Direction) {
        self.snake.set_direction(dir);
    }

    /// One simulation step: snake tick, then food relocation if it was
    /// consumed, then the score re-render decision.
    pub fn tick(&mut self) -> TickEvents {
        let food_cell = self.food.cell();
        let step = {
            let mut mediator = Mediator {
                score: &mut self.score,
                speed: &mut self.speed,
                food: &mut self.food,
            };
            self.snake.tick(food_cell, &mut mediator)
        };

        let food_moved = self.food.tick(&mut self.rng).map(|new| (food_cell, new));

        TickEvents {
            score: self.score.value(),
            score_changed: step.ate,
            step,
            food_moved,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
