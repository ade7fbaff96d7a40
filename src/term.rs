//! Crossterm adapter: maps grid cells to terminal characters and delivers
//! key events to the game loop.

use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE};
use crate::grid::Cell;

/// Playfield size in characters, one character per grid cell.
pub const GRID_COLS: u16 = (CANVAS_WIDTH / CELL_SIZE) as u16;
pub const GRID_ROWS: u16 = (CANVAS_HEIGHT / CELL_SIZE) as u16;

const SNAKE_CHAR: char = '█';
const FOOD_CHAR: char = 'O';
const EMPTY_CHAR: char = ' ';

/// The drawing surface the game loop paints through. Implemented here for
/// the terminal; the simulation itself never draws.
pub trait RenderSink {
    fn draw_snake_cell(&mut self, cell: Cell) -> Result<()>;
    fn draw_food_cell(&mut self, cell: Cell) -> Result<()>;
    fn clear_cell(&mut self, cell: Cell) -> Result<()>;
    fn draw_score(&mut self, score: u32) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

pub struct TermManager {
    stdout: Stdout,
    /// Shadow copy of the bordered board, used to restore whatever a message
    /// box painted over.
    screen: Vec<char>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: (u16, u16),
    width: u16,
    height: u16,
}

// The bordered board is (GRID_COLS + 2) x (GRID_ROWS + 2) characters with
// the playfield origin at character (1, 1).
const BOARD_COLS: u16 = GRID_COLS + 2;
const BOARD_ROWS: u16 = GRID_ROWS + 2;

impl TermManager {
    pub fn new() -> Result<Self> {
        let (w, h) = terminal::size().context("reading terminal size")?;
        ensure!(
            w >= BOARD_COLS && h >= BOARD_ROWS,
            "terminal too small: need {}x{} characters, have {}x{}",
            BOARD_COLS,
            BOARD_ROWS,
            w,
            h
        );

        let screen = vec![EMPTY_CHAR; BOARD_COLS as usize * BOARD_ROWS as usize];
        Ok(TermManager { stdout: stdout(), screen, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("entering alt screen")?;
        terminal::enable_raw_mode().context("enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking)?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        execute!(self.stdout, LeaveAlternateScreen).context("leaving alt screen")?;
        Ok(())
    }

    /// Drain every key event currently queued, without blocking.
    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(1))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn draw_borders(&mut self) -> Result<()> {
        for x in 0..BOARD_COLS {
            let ch = if x == 0 || x == BOARD_COLS - 1 { '+' } else { '-' };
            self.print_at((x, 0), ch)?;
            self.print_at((x, BOARD_ROWS - 1), ch)?;
        }

        for y in 1..BOARD_ROWS - 1 {
            self.print_at((0, y), '|')?;
            self.print_at((BOARD_COLS - 1, y), '|')?;
        }

        self.flush_out()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.current_msg.is_some() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as u16;
        let msg_width = (lines.iter().map(|x| x.len()).max().unwrap_or(0) + 2) as u16;
        let center = (BOARD_COLS / 2, BOARD_ROWS / 2);
        let top_left = (center.0 - msg_width / 2, center.1 - msg_height / 2);

        // Top and bottom padding rows
        for y in [top_left.1, top_left.1 + msg_height - 1] {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, y), EMPTY_CHAR)?;
            }
        }

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as u16 + 1;
            for (x_diff, ch) in padded.char_indices() {
                self.print_at_no_save((top_left.0 + x_diff as u16, y), ch)?;
            }
        }

        self.current_msg = Some(Message { top_left, width: msg_width, height: msg_height });
        self.flush_out()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };

        // Put back what the message box covered, from the shadow buffer.
        for y_diff in 0..msg.height {
            for x_diff in 0..msg.width {
                let (x, y) = (msg.top_left.0 + x_diff, msg.top_left.1 + y_diff);
                let ch = self.screen[BOARD_COLS as usize * y as usize + x as usize];
                self.print_at_no_save((x, y), ch)?;
            }
        }

        self.flush_out()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn print_at(&mut self, pos: (u16, u16), ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        self.screen[BOARD_COLS as usize * pos.1 as usize + pos.0 as usize] = ch;
        Ok(())
    }

    fn print_at_no_save(&mut self, pos: (u16, u16), ch: char) -> Result<()> {
        // Used for message boxes, which must not overwrite the shadow buffer
        // they will be restored from.
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn print_cell(&mut self, cell: Cell, ch: char) -> Result<()> {
        let pos = cell_to_char(cell);
        self.print_at(pos, ch)
    }

    fn flush_out(&mut self) -> Result<()> {
        self.stdout.flush().context("flushing stdout")
    }
}

impl RenderSink for TermManager {
    fn draw_snake_cell(&mut self, cell: Cell) -> Result<()> {
        self.print_cell(cell, SNAKE_CHAR)
    }

    fn draw_food_cell(&mut self, cell: Cell) -> Result<()> {
        self.print_cell(cell, FOOD_CHAR)
    }

    fn clear_cell(&mut self, cell: Cell) -> Result<()> {
        self.print_cell(cell, EMPTY_CHAR)
    }

    fn draw_score(&mut self, score: u32) -> Result<()> {
        let text = format!(" Score: {} ", score);
        for (i, ch) in text.char_indices() {
            self.print_at((2 + i as u16, 0), ch)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_out()
    }
}

/// Playfield cell to terminal character position, inside the border.
fn cell_to_char(cell: Cell) -> (u16, u16) {
    (1 + (cell.x / CELL_SIZE) as u16, 1 + (cell.y / CELL_SIZE) as u16)
}
