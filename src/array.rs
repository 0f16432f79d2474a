use std::ops;

use crate::cell::Cell;

/// Row-major grid storage backed by a flat buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn cell_to_idx(&self, pos: Cell) -> Option<usize> {
        let Cell(r, c) = pos;
        if r < 0 || c < 0 {
            return None;
        }
        let (r, c) = (r as usize, c as usize);

        if r >= self.rows || c >= self.cols {
            return None;
        }

        Some(r * self.cols + c)
    }

    pub fn idx_to_cell(&self, idx: usize) -> Option<Cell> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Cell((idx / self.cols) as i32, (idx % self.cols) as i32))
    }

    pub fn get(&self, pos: Cell) -> Option<&T> {
        self.cell_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Cell) -> Option<&mut T> {
        self.cell_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_cell(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, rows: usize, cols: usize) -> Self {
        Self {
            buf: vec![item; rows * cols],
            rows,
            cols,
        }
    }

    pub fn fill(&mut self, value: T) {
        self.buf.fill(value);
    }
}

impl<T> ops::Index<Cell> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        self.cell_to_idx(index)
            .and_then(|i| self.buf.get(i))
            .expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Cell> for Array2D<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        self.cell_to_idx(index)
            .and_then(|i| self.buf.get_mut(i))
            .expect("Index out of bounds")
    }
}
