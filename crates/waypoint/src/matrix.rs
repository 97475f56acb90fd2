//! Dense square matrices.
//!
//! Both the adjacency storage and the Floyd-Warshall state are dense `n x n`
//! grids indexed by slot. [`Matrix`] keeps them in a single row-major
//! `Vec<T>` so a cell is `data[row * size + col]`.

use std::ops::{Index, IndexMut};

/// A square, row-major matrix of `size * size` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    size: usize,
    data: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a `size x size` matrix with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    #[must_use]
    pub fn filled(size: usize, fill: T) -> Self {
        match Self::try_filled(size, fill) {
            Some(matrix) => matrix,
            None => panic!("matrix size {size} overflows usize"),
        }
    }

    /// Like [`filled`](Self::filled), but `None` if `size * size` overflows.
    #[must_use]
    pub fn try_filled(size: usize, fill: T) -> Option<Self> {
        let cells = size.checked_mul(size)?;
        Some(Self {
            size,
            data: vec![fill; cells],
        })
    }
}

impl<T> Matrix<T> {
    /// Number of rows (and columns).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Borrow a cell, or `None` if either index is out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.size && col < self.size {
            self.data.get(row * self.size + col)
        } else {
            None
        }
    }

    /// Borrow one row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= size`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Iterate over rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.data.chunks(self.size.max(1)).take(self.size)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.size && col < self.size, "matrix index out of range");
        &self.data[row * self.size + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.size && col < self.size, "matrix index out of range");
        &mut self.data[row * self.size + col]
    }
}
