//! Game configuration constants

/// Playfield width in pixels
pub const CANVAS_WIDTH: i32 = 600;

/// Playfield height in pixels
pub const CANVAS_HEIGHT: i32 = 600;

/// Cell size (snake segment / food square) in pixels
pub const CELL_SIZE: i32 = 10;

/// Initial simulation tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 100;

/// How much the tick interval shrinks on each speed-up
pub const SPEED_UP_STEP_MS: u64 = 10;

/// Lower bound for the tick interval
pub const MIN_TICK_INTERVAL_MS: u64 = 20;

/// A speed-up fires every time the score reaches a multiple of this
pub const SPEED_UP_SCORE_STEP: u32 = 15;

/// Snake length at the start of a game
pub const INITIAL_SNAKE_LENGTH: usize = 2;
