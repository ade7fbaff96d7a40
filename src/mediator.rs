//! Consumption orchestration: keeps the snake decoupled from score, food
//! and speed control.

use tracing::debug;

use crate::config::SPEED_UP_SCORE_STEP;
use crate::engine::SpeedControl;
use crate::food::Food;
use crate::score::Score;

/// Told by the snake when its head lands on the food.
pub trait ConsumptionListener {
    fn on_food_consumed(&mut self);
}

/// Borrows the engine's collaborators for the duration of one tick. The
/// ordering below is significant: the speed threshold is evaluated on the
/// post-increment score, and the food relocates on its own next tick.
pub struct Mediator<'a> {
    pub score: &'a mut Score,
    pub speed: &'a mut SpeedControl,
    pub food: &'a mut Food,
}

impl ConsumptionListener for Mediator<'_> {
    fn on_food_consumed(&mut self) {
        self.score.increment();
        let score = self.score.value();
        debug!(score, "food consumed");
        if score % SPEED_UP_SCORE_STEP == 0 {
            self.speed.speed_up();
        }
        self.food.mark_consumed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MIN_TICK_INTERVAL_MS, SPEED_UP_STEP_MS, TICK_INTERVAL_MS};

    fn consume(score: &mut Score, speed: &mut SpeedControl, food: &mut Food) {
        Mediator { score, speed, food }.on_food_consumed();
    }

    #[test]
    fn consumption_bumps_score_and_marks_food() {
        let mut score = Score::new();
        let mut speed = SpeedControl::new();
        let mut food = Food::new();
        let mut rng = rand::rngs::mock::StepRng::new(0, 1);
        food.tick(&mut rng);

        consume(&mut score, &mut speed, &mut food);
        assert_eq!(score.value(), 1);
        assert!(food.is_consumed());
        assert_eq!(speed.interval_ms(), TICK_INTERVAL_MS);
    }

    #[test]
    fn speed_up_fires_once_per_multiple_of_fifteen() {
        let mut score = Score::new();
        let mut speed = SpeedControl::new();
        let mut food = Food::new();

        for _ in 0..30 {
            consume(&mut score, &mut speed, &mut food);
        }
        // Thresholds crossed at 15 and 30, nowhere else.
        assert_eq!(score.value(), 30);
        assert_eq!(speed.interval_ms(), TICK_INTERVAL_MS - 2 * SPEED_UP_STEP_MS);
    }

    #[test]
    fn interval_never_drops_below_the_floor() {
        let mut score = Score::new();
        let mut speed = SpeedControl::new();
        let mut food = Food::new();

        for _ in 0..15 * 100 {
            consume(&mut score, &mut speed, &mut food);
        }
        assert_eq!(speed.interval_ms(), MIN_TICK_INTERVAL_MS);
    }
}
