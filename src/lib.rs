//! Wraparound snake: a fixed-grid arcade snake where the board edges wrap
//! and running into yourself cuts the body instead of ending the game.
//!
//! The simulation lives in [`engine`], [`snake`], [`food`], [`score`] and
//! [`mediator`]; [`game`] and [`term`] are the terminal front end.

pub mod config;
pub mod engine;
pub mod food;
pub mod game;
pub mod grid;
pub mod mediator;
pub mod score;
pub mod snake;
pub mod term;
