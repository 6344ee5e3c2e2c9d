//! Tile grid: loading, validation and cell queries.
use std::path::Path;

use crate::error::GridError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Solid,
}

/// Rectangular table of cells addressed by (column, row).
///
/// Construction rejects empty and ragged input, so every `Grid` has at least
/// one cell and uniform rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let height = rows.len();
        if height == 0 {
            return Err(GridError::NoRows);
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(GridError::ZeroWidth);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged { row, expected: width, found: r.len() });
            }
            cells.extend(r);
        }
        Ok(Self { cells, width, height })
    }

    /// Builds a grid from the 0/1 integer table form.
    pub fn from_bits(rows: &[&[u8]]) -> Result<Self, GridError> {
        let rows = rows
            .iter()
            .map(|r| r.iter().map(|&b| if b == 0 { Cell::Empty } else { Cell::Solid }).collect())
            .collect();
        Self::from_rows(rows)
    }

    /// Parses a text map: one row per non-empty line, `1`/`#` solid,
    /// `0`/`.`/space empty.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut rows = Vec::new();
        for line in text.lines() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let row = rows.len();
            let mut cells = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '1' | '#' => Cell::Solid,
                    '0' | '.' | ' ' => Cell::Empty,
                    _ => return Err(GridError::UnknownCell { row, col, ch }),
                };
                cells.push(cell);
            }
            rows.push(cells);
        }
        Self::from_rows(rows)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// The 7x10 demo level: solid border plus a small inner structure.
    pub fn sample() -> Self {
        const MAP: [[u8; 7]; 10] = [
            [1, 1, 1, 1, 1, 1, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 0, 1, 1, 1, 0, 1],
            [1, 0, 0, 1, 0, 0, 1],
            [1, 0, 1, 1, 1, 0, 1],
            [1, 0, 0, 0, 0, 0, 1],
            [1, 1, 1, 1, 1, 1, 1],
        ];
        let cells = MAP
            .iter()
            .flatten()
            .map(|&b| if b == 0 { Cell::Empty } else { Cell::Solid })
            .collect();
        Self { cells, width: 7, height: 10 }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.width && (row as usize) < self.height
    }

    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(self.cells[row as usize * self.width + col as usize])
    }

    /// Out-of-bounds cells are never solid.
    #[inline]
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        self.cell(col, row) == Some(Cell::Solid)
    }

    /// Overwrites a cell between frames; out-of-bounds writes are ignored.
    pub fn set(&mut self, col: i32, row: i32, cell: Cell) -> bool {
        if !self.in_bounds(col, row) {
            return false;
        }
        self.cells[row as usize * self.width + col as usize] = cell;
        true
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }
}
