//! Time encoder
//!
//! Turns an hour and minute into the 4x4 BCD bit grid shown by the face.
//! Each column holds one digit of the zero-padded "HHMM" string, most
//! significant bit in the top row.

/// Number of rows and columns in the grid
pub const GRID_SIZE: usize = 4;

/// 4x4 matrix of BCD bits.
///
/// Row `i`, column `j` holds bit `3 - i` of digit `j`, where the digits are
/// tens of hour, units of hour, tens of minute and units of minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitGrid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl DigitGrid {
    /// Encode a time of day.
    ///
    /// Inputs come from a validated clock reading; out-of-range values are a
    /// caller bug.
    pub fn encode(hour: u8, minute: u8) -> Self {
        debug_assert!(hour < 24, "hour out of range");
        debug_assert!(minute < 60, "minute out of range");

        let digits = [hour / 10, hour % 10, minute / 10, minute % 10];
        let mut cells = [[false; GRID_SIZE]; GRID_SIZE];

        for (row, cells_row) in cells.iter_mut().enumerate() {
            for (cell, digit) in cells_row.iter_mut().zip(digits) {
                *cell = (digit >> (3 - row)) & 0x01 == 1;
            }
        }

        Self { cells }
    }

    /// Whether the cell at `row`, `col` is lit
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Reassemble the digit stored in column `col`
    pub fn column(&self, col: usize) -> u8 {
        (0..GRID_SIZE).fold(0, |acc, row| (acc << 1) | self.cells[row][col] as u8)
    }

    /// All four digits, left to right
    pub fn digits(&self) -> [u8; GRID_SIZE] {
        [self.column(0), self.column(1), self.column(2), self.column(3)]
    }

    /// Iterate over `(row, col, lit)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells_row)| {
            cells_row
                .iter()
                .enumerate()
                .map(move |(col, &lit)| (row, col, lit))
        })
    }
}

/// Encode a time of day into its BCD grid
pub fn encode(hour: u8, minute: u8) -> DigitGrid {
    DigitGrid::encode(hour, minute)
}
