//! A single face of the cube and the pure rotations over it.

use crate::notation::Modifier;
use itertools::Itertools;
use std::ops::Index;

/// An n×n grid of stickers stored row-major. Indexed by `(row, col)`.
///
/// Rows of the four side faces are counted from the edge they share with U.
/// U is read with B at the top, D with F at the top, and every face is read as
/// seen from outside the cube.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    size: usize,
    stickers: Vec<char>,
}

impl FaceGrid {
    pub fn filled(size: usize, color: char) -> FaceGrid {
        FaceGrid {
            size,
            stickers: vec![color; size * size],
        }
    }

    /// Build a grid from rows. Returns `None` unless the rows form a square.
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Option<FaceGrid> {
        let size = rows.len();

        if rows.iter().any(|row| row.as_ref().len() != size) {
            return None;
        }

        Some(FaceGrid {
            size,
            stickers: rows.iter().flat_map(|row| row.as_ref().iter().copied()).collect(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn row(&self, row: usize) -> &[char] {
        &self.stickers[row * self.size..(row + 1) * self.size]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [char] {
        &mut self.stickers[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.stickers.chunks_exact(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(<[char]>::to_vec).collect()
    }

    pub fn stickers(&self) -> &[char] {
        &self.stickers
    }

    pub fn is_uniform(&self) -> bool {
        self.stickers.iter().all_equal()
    }

    /// `new[i][j] = old[n-1-j][i]`
    #[must_use]
    pub fn rotated_cw(&self) -> FaceGrid {
        let n = self.size;
        self.remapped(|i, j| (n - 1 - j, i))
    }

    /// `new[i][j] = old[j][n-1-i]`
    #[must_use]
    pub fn rotated_ccw(&self) -> FaceGrid {
        let n = self.size;
        self.remapped(|i, j| (j, n - 1 - i))
    }

    /// `new[i][j] = old[n-1-i][n-1-j]`
    #[must_use]
    pub fn rotated_half(&self) -> FaceGrid {
        let mut stickers = self.stickers.clone();
        stickers.reverse();

        FaceGrid {
            size: self.size,
            stickers,
        }
    }

    #[must_use]
    pub fn rotated(&self, modifier: Modifier) -> FaceGrid {
        match modifier {
            Modifier::Clockwise => self.rotated_cw(),
            Modifier::CounterClockwise => self.rotated_ccw(),
            Modifier::Half => self.rotated_half(),
        }
    }

    /// Consume the grid, turning it if `turn` says so
    pub(crate) fn turned(self, turn: Option<Modifier>) -> FaceGrid {
        match turn {
            None => self,
            Some(modifier) => self.rotated(modifier),
        }
    }

    fn remapped(&self, source_of: impl Fn(usize, usize) -> (usize, usize)) -> FaceGrid {
        let n = self.size;

        FaceGrid {
            size: n,
            stickers: (0..n)
                .flat_map(|i| (0..n).map(move |j| (i, j)))
                .map(|(i, j)| self[source_of(i, j)])
                .collect(),
        }
    }
}

impl Index<(usize, usize)> for FaceGrid {
    type Output = char;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.size, "column {col} out of range");
        &self.stickers[row * self.size + col]
    }
}
