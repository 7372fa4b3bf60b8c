use super::player::Seat;

pub const DEFAULT_WIDTH: usize = 6;
pub const DEFAULT_HEIGHT: usize = 7;

/// A cell coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }
}

/// Four cells that form a winning line, in order from the anchor outward.
pub type WinningLine = [Position; 4];

/// Line directions as (row step, column step), in the order they are tried
/// at each anchor: horizontal, vertical, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<Seat>>,
}

impl Board {
    /// Create a new empty board. Any size is accepted; on boards narrower or
    /// shorter than four no line can ever be completed.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        let len = width
            .checked_mul(height)
            .unwrap_or_else(|| panic!("board of {width}x{height} cells is too large"));
        Board {
            width,
            height,
            cells: vec![None; len],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the seat occupying a cell, or `None` for empty and out-of-bounds
    /// cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Seat> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells[row * self.width + col]
    }

    /// Lowest empty row in a column, scanning from the bottom up.
    /// Returns `None` when the column is full or does not exist.
    pub fn find_open_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + col].is_none())
    }

    /// Mark a cell as occupied.
    ///
    /// The cell must be empty; callers get the row from [`Board::find_open_row`]
    /// in the same turn. Only debug builds check this; release builds
    /// overwrite.
    pub fn place(&mut self, row: usize, col: usize, seat: Seat) {
        let idx = row * self.width + col;
        debug_assert!(
            self.cells[idx].is_none(),
            "cell ({row}, {col}) is already occupied"
        );
        self.cells[idx] = Some(seat);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Scan the whole board for four in a row held by `seat`.
    ///
    /// Anchors are visited in row-major order and, at each anchor, the four
    /// directions in [`DIRECTIONS`] order. The first complete line is
    /// returned and the scan stops there.
    pub fn check_win(&self, seat: Seat) -> Option<WinningLine> {
        for row in 0..self.height {
            for col in 0..self.width {
                for &(dr, dc) in &DIRECTIONS {
                    if let Some(line) = self.line_from(row, col, dr, dc, seat) {
                        return Some(line);
                    }
                }
            }
        }
        None
    }

    /// The four cells starting at (row, col) and stepping by (dr, dc), if they
    /// are all on the board and all held by `seat`.
    fn line_from(
        &self,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        seat: Seat,
    ) -> Option<WinningLine> {
        let mut line = [Position::new(row, col); 4];
        for (i, slot) in line.iter_mut().enumerate() {
            let r = row.checked_add_signed(dr * i as isize)?;
            let c = col.checked_add_signed(dc * i as isize)?;
            if self.get(r, c) != Some(seat) {
                return None;
            }
            *slot = Position::new(r, c);
        }
        Some(line)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
