//! Grid geometry: cells, directions and edge arithmetic. Pure, no state.

use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE};

/// One grid-aligned square on the playfield. Coordinates are pixels in
/// multiples of [`CELL_SIZE`], within `[0, CANVAS_WIDTH) x [0, CANVAS_HEIGHT)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The cell one step away in `dir`. May fall outside the grid; callers
    /// check bounds with [`crossed_edge`] before using it as a head position.
    pub fn step(&self, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        Cell::new(self.x + dx * CELL_SIZE, self.y + dy * CELL_SIZE)
    }

    /// Axis-aligned bounding-box overlap between two cell squares.
    pub fn overlaps(&self, other: &Cell) -> bool {
        self.x < other.x + CELL_SIZE
            && self.x + CELL_SIZE > other.x
            && self.y < other.y + CELL_SIZE
            && self.y + CELL_SIZE > other.y
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit displacement in grid steps.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }
}

/// Which edge the head would cross by taking one step from `head` in `dir`,
/// if any. Names the edge that was hit, not the travel direction.
pub fn crossed_edge(head: &Cell, dir: Direction) -> Option<Direction> {
    let next = head.step(dir);
    if next.x >= CANVAS_WIDTH {
        Some(Direction::Right)
    } else if next.x < 0 {
        Some(Direction::Left)
    } else if next.y < 0 {
        Some(Direction::Up)
    } else if next.y >= CANVAS_HEIGHT {
        Some(Direction::Down)
    } else {
        None
    }
}

/// Entry cell on the opposite boundary after crossing `edge`. The
/// perpendicular coordinate is carried over from `head` unchanged.
pub fn wrap_entry(head: &Cell, edge: Direction) -> Cell {
    match edge {
        Direction::Right => Cell::new(0, head.y),
        Direction::Left => Cell::new(CANVAS_WIDTH - CELL_SIZE, head.y),
        Direction::Up => Cell::new(head.x, CANVAS_HEIGHT - CELL_SIZE),
        Direction::Down => Cell::new(head.x, 0),
    }
}
