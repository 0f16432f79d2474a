use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Grid cell, identified by (row, col). Ordering is row-major, which is the
/// tie-break order used everywhere in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(pub i32, pub i32);

impl Cell {
    pub const ZERO: Cell = Cell(0, 0);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    pub fn is_adjacent(self, other: Cell) -> bool {
        (self.0 - other.0).abs() + (self.1 - other.1).abs() == 1
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, other: Cell) -> Cell {
        Cell(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, other: Cell) -> Cell {
        Cell(self.0 - other.0, self.1 - other.1)
    }
}

impl AddAssign for Cell {
    fn add_assign(&mut self, other: Cell) {
        self.0 += other.0;
        self.1 += other.1;
    }
}

impl SubAssign for Cell {
    fn sub_assign(&mut self, other: Cell) {
        self.0 -= other.0;
        self.1 -= other.1;
    }
}

impl From<(i32, i32)> for Cell {
    fn from(tuple: (i32, i32)) -> Self {
        Cell(tuple.0, tuple.1)
    }
}

impl From<Cell> for (i32, i32) {
    fn from(val: Cell) -> Self {
        (val.0, val.1)
    }
}

/// One of the four grid directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Way {
    Left,
    Right,
    Top,
    Bottom,
}

impl Way {
    pub const ALL: [Way; 4] = [Way::Left, Way::Right, Way::Top, Way::Bottom];

    pub fn offset(self) -> Cell {
        match self {
            Way::Left => Cell(0, -1),
            Way::Right => Cell(0, 1),
            Way::Top => Cell(-1, 0),
            Way::Bottom => Cell(1, 0),
        }
    }

    pub fn reverse(self) -> Way {
        match self {
            Way::Left => Way::Right,
            Way::Right => Way::Left,
            Way::Top => Way::Bottom,
            Way::Bottom => Way::Top,
        }
    }
}
