//! Terminal front end: fixed-delay scheduler loop, input mapping and
//! rendering. All game state mutation happens inside the loop body.

use std::{thread::sleep, time::Duration};

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::engine::{Engine, TickEvents};
use crate::grid::Direction::{self, *};
use crate::term::{RenderSink, TermManager};

pub struct Game {
    engine: Engine,
    term: TermManager,
    paused: bool,
}

impl Game {
    pub fn new() -> Result<Self> {
        Ok(Game { engine: Engine::new(), term: TermManager::new()?, paused: false })
    }

    pub fn run(&mut self) -> Result<()> {
        self.term.setup()?;

        let outcome = self.show_intro().and_then(|quit| {
            if quit {
                Ok(())
            } else {
                self.play()
            }
        });

        // Leave the terminal usable even when the loop errored out.
        let restored = self.term.restore();
        outcome?;
        restored
    }

    /// Returns true when the player quit from the intro screen.
    fn show_intro(&mut self) -> Result<bool> {
        self.term.show_message(&[
            "Arrow keys or WASD to move",
            "Esc to pause",
            "CTRL+C to quit",
            "",
            "Press any key to begin",
        ])?;

        let key = self.term.read_key_blocking()?;
        self.term.hide_message()?;
        Ok(is_ctrl_c(&key))
    }

    fn play(&mut self) -> Result<()> {
        self.term.draw_borders()?;
        self.draw_initial_state()?;

        info!(interval_ms = self.engine.interval_ms(), "game started");

        loop {
            sleep(Duration::from_millis(self.engine.interval_ms()));

            for key_ev in self.term.read_key_events_queue()? {
                match &key_ev {
                    ev if is_ctrl_c(ev) => {
                        info!(score = self.engine.score(), "quit");
                        return Ok(());
                    }
                    KeyEvent { code, modifiers: _ } => match code {
                        KeyCode::Char('w') | KeyCode::Up => self.request(Up),
                        KeyCode::Char('a') | KeyCode::Left => self.request(Left),
                        KeyCode::Char('s') | KeyCode::Down => self.request(Down),
                        KeyCode::Char('d') | KeyCode::Right => self.request(Right),
                        KeyCode::Esc => self.toggle_pause()?,
                        _ => {}
                    },
                }
            }

            if self.paused {
                continue;
            }

            let events = self.engine.tick();
            self.render(&events)?;
        }
    }

    ///////////////////////////////////////////////////////////////////////////

    fn request(&mut self, dir: Direction) {
        if !self.paused {
            self.engine.request_direction(dir);
        }
    }

    fn draw_initial_state(&mut self) -> Result<()> {
        for cell in self.engine.snake.segments() {
            self.term.draw_snake_cell(*cell)?;
        }
        self.term.draw_score(self.engine.score())?;
        self.term.flush()
    }

    fn render(&mut self, events: &TickEvents) -> Result<()> {
        for cell in &events.step.vacated {
            self.term.clear_cell(*cell)?;
        }

        // A vacating segment may have been sitting on the food (food can
        // spawn under the body); put the food glyph back.
        let food_cell = self.engine.food.cell();
        if !self.engine.food.is_consumed() && events.step.vacated.contains(&food_cell) {
            self.term.draw_food_cell(food_cell)?;
        }

        if let Some((old, new)) = events.food_moved {
            // The old food cell is usually under the new head; clearing it
            // first keeps the draw below authoritative.
            self.term.clear_cell(old)?;
            self.term.draw_food_cell(new)?;
        }

        self.term.draw_snake_cell(events.step.new_head)?;

        if events.score_changed {
            self.term.draw_score(events.score)?;
        }

        self.term.flush()
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press Esc to resume", "or Ctrl+C to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}
