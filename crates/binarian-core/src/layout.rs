//! Fixed screen layout of the face
//!
//! Coordinates are for a 144x168 screen. Hosts with a larger panel draw
//! into a translated target.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};

use crate::encoder::GRID_SIZE;

/// Size of the face
pub const SCREEN_SIZE: Size = Size::new(144, 168);

/// Region holding the circle grid
pub const TIME_REGION: Rectangle = Rectangle::new(Point::new(12, 3), Size::new(132, 109));

/// Region holding the date line
pub const DATE_REGION: Rectangle = Rectangle::new(Point::new(0, 131), Size::new(144, 37));

/// Radius of one grid circle
pub const CELL_RADIUS: u32 = 12;

// Circle centres relative to the time region. Hours and minutes are split
// by a wider gap between columns 1 and 2.
const COLUMN_X: [i32; GRID_SIZE] = [12, 40, 80, 108];
const ROW_Y: [i32; GRID_SIZE] = [15, 42, 70, 96];

/// Absolute centre of the circle for grid cell `row`, `col`
pub fn cell_center(row: usize, col: usize) -> Point {
    TIME_REGION.top_left + Point::new(COLUMN_X[col], ROW_Y[row])
}

/// Bounding box of the circle for grid cell `row`, `col`
pub fn cell_bounds(row: usize, col: usize) -> Rectangle {
    Rectangle::with_center(cell_center(row, col), Size::new_equal(CELL_RADIUS * 2 + 1))
}
