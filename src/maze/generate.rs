//! Randomized depth-first maze carving
//!
//! A maze starts with every passage closed. Carving walks the grid depth
//! first from a random start cell, visiting neighbors in shuffled order and
//! opening a passage only when it leads into an unvisited cell. The open
//! passages therefore always form a spanning tree over the cells.

use serde::Serialize;

use super::grid::{Cell, Direction, Grid};
use super::rng::{self, RandomSource};
use crate::error::{MazeError, check_count};

/// Which passage matrix a wall between two cells lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    /// Between (r, c) and (r + 1, c)
    Horizontal,
    /// Between (r, c) and (r, c + 1)
    Vertical,
}

/// A carved maze: visited flags plus the two passage matrices
///
/// `horizontals[r][c]` is open when there is no wall below cell (r, c);
/// `verticals[r][c]` is open when there is no wall right of cell (r, c).
///
/// Only `MazeGenerator` builds one, so every `Maze` is a spanning tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Maze {
    rows: usize,
    cols: usize,
    visited: Grid<bool>,
    horizontals: Grid<bool>,
    verticals: Grid<bool>,
}

impl Maze {
    /// A maze with every passage closed and nothing visited
    fn closed(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            visited: Grid::filled(rows, cols, false),
            horizontals: Grid::filled(rows - 1, cols, false),
            verticals: Grid::filled(rows, cols - 1, false),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Passages between vertically adjacent cells, `(rows - 1) x cols`
    pub fn horizontals(&self) -> &Grid<bool> {
        &self.horizontals
    }

    /// Passages between horizontally adjacent cells, `rows x (cols - 1)`
    pub fn verticals(&self) -> &Grid<bool> {
        &self.verticals
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.visited.get(cell.row, cell.col).copied().unwrap_or(false)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.count_true()
    }

    /// The in-bounds neighbor of `cell` in direction `dir`
    pub fn neighbor(&self, cell: Cell, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = cell.row.checked_add_signed(dr)?;
        let col = cell.col.checked_add_signed(dc)?;
        (row < self.rows && col < self.cols).then_some(Cell::new(row, col))
    }

    /// Locate the passage entry separating `cell` from its neighbor in `dir`
    fn passage_slot(&self, cell: Cell, dir: Direction) -> Option<(Axis, usize, usize)> {
        self.neighbor(cell, dir)?;
        Some(match dir {
            Direction::Up => (Axis::Horizontal, cell.row - 1, cell.col),
            Direction::Down => (Axis::Horizontal, cell.row, cell.col),
            Direction::Left => (Axis::Vertical, cell.row, cell.col - 1),
            Direction::Right => (Axis::Vertical, cell.row, cell.col),
        })
    }

    fn passages(&self, axis: Axis) -> &Grid<bool> {
        match axis {
            Axis::Horizontal => &self.horizontals,
            Axis::Vertical => &self.verticals,
        }
    }

    /// Whether the ball could move from `cell` toward `dir`
    pub fn is_open(&self, cell: Cell, dir: Direction) -> bool {
        self.passage_slot(cell, dir)
            .and_then(|(axis, r, c)| self.passages(axis).get(r, c).copied())
            .unwrap_or(false)
    }

    fn open(&mut self, cell: Cell, dir: Direction) {
        let Some((axis, r, c)) = self.passage_slot(cell, dir) else {
            return;
        };
        let passages = match axis {
            Axis::Horizontal => &mut self.horizontals,
            Axis::Vertical => &mut self.verticals,
        };
        if let Some(slot) = passages.get_mut(r, c) {
            *slot = true;
        }
    }

    pub fn open_passage_count(&self) -> usize {
        self.horizontals.count_true() + self.verticals.count_true()
    }

    /// Closed passages, i.e. interior walls
    pub fn closed_passage_count(&self) -> usize {
        self.horizontals.count_false() + self.verticals.count_false()
    }

    /// Cells reachable from `start` through open passages
    pub fn reachable_from(&self, start: Cell) -> usize {
        if self.visited.get(start.row, start.col).is_none() {
            return 0;
        }
        let mut seen = Grid::filled(self.rows, self.cols, false);
        let mut stack = vec![start];
        let mut count = 0;

        while let Some(cell) = stack.pop() {
            let Some(flag) = seen.get_mut(cell.row, cell.col) else {
                continue;
            };
            if *flag {
                continue;
            }
            *flag = true;
            count += 1;

            for dir in Direction::ALL {
                if self.is_open(cell, dir) {
                    if let Some(next) = self.neighbor(cell, dir) {
                        stack.push(next);
                    }
                }
            }
        }

        count
    }

    /// Connected with exactly `cells - 1` open passages
    pub fn is_spanning_tree(&self) -> bool {
        self.open_passage_count() + 1 == self.cell_count()
            && self.reachable_from(Cell::new(0, 0)) == self.cell_count()
    }

    /// Text rendering: `o` marks the ball spawn, `X` the goal
    pub fn to_ascii(&self) -> String {
        let goal = Cell::new(self.rows - 1, self.cols - 1);
        let mut out = String::new();

        out.push('+');
        for _ in 0..self.cols {
            out.push_str("---+");
        }
        out.push('\n');

        for row in 0..self.rows {
            out.push('|');
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                out.push_str(if row == 0 && col == 0 {
                    " o "
                } else if cell == goal {
                    " X "
                } else {
                    "   "
                });
                out.push(if self.is_open(cell, Direction::Right) {
                    ' '
                } else {
                    '|'
                });
            }
            out.push('\n');

            out.push('+');
            for col in 0..self.cols {
                if self.is_open(Cell::new(row, col), Direction::Down) {
                    out.push_str("   +");
                } else {
                    out.push_str("---+");
                }
            }
            out.push('\n');
        }

        out
    }
}

/// One pending cell on the carving stack
#[derive(Debug, Clone, Copy)]
struct Frame {
    cell: Cell,
    order: [Direction; 4],
    next: usize,
}

/// Carves spanning-tree mazes of a fixed size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeGenerator {
    rows: usize,
    cols: usize,
}

impl MazeGenerator {
    /// Rejects zero rows or columns
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        check_count("rows", rows)?;
        check_count("cols", cols)?;
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Carve a maze with a `Pcg32` seeded from `seed`
    pub fn generate_seeded(&self, seed: u64) -> Result<Maze, MazeError> {
        let maze = self.generate(&mut rng::seeded(seed))?;
        log::info!(
            "Carved {}x{} maze from seed {}",
            self.rows,
            self.cols,
            seed
        );
        Ok(maze)
    }

    /// Carve a maze drawing from `rng`
    ///
    /// Draw order: start row, start column, then one four-way shuffle per
    /// cell in the order cells are first entered. A failing source aborts
    /// the whole carve.
    pub fn generate<R>(&self, rng: &mut R) -> Result<Maze, MazeError>
    where
        R: RandomSource + ?Sized,
    {
        let mut maze = Maze::closed(self.rows, self.cols);
        let start = Cell::new(rng.next_index(self.rows)?, rng.next_index(self.cols)?);

        let mut stack = Vec::with_capacity(maze.cell_count());
        stack.push(Self::enter(&mut maze, start, rng)?);

        while let Some(frame) = stack.last_mut() {
            if frame.next == frame.order.len() {
                stack.pop();
                continue;
            }
            let dir = frame.order[frame.next];
            frame.next += 1;
            let cell = frame.cell;

            let Some(next) = maze.neighbor(cell, dir) else {
                continue;
            };
            if maze.is_visited(next) {
                continue;
            }

            maze.open(cell, dir);
            let frame = Self::enter(&mut maze, next, rng)?;
            stack.push(frame);
        }

        log::debug!(
            "Maze carved: start=({}, {}), open passages={}",
            start.row,
            start.col,
            maze.open_passage_count()
        );
        Ok(maze)
    }

    /// Mark `cell` visited and shuffle the order its neighbors are tried in
    fn enter<R>(maze: &mut Maze, cell: Cell, rng: &mut R) -> Result<Frame, MazeError>
    where
        R: RandomSource + ?Sized,
    {
        if let Some(flag) = maze.visited.get_mut(cell.row, cell.col) {
            *flag = true;
        }
        let mut order = Direction::ALL;
        rng::shuffle(&mut order, rng)?;
        Ok(Frame {
            cell,
            order,
            next: 0,
        })
    }
}
