use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

use crate::util::result::ResultExtension;

/// Two relations over sets of different sizes were combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMismatch {
    pub left: usize,
    pub right: usize,
}

impl Display for SizeMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Can't combine relations over {} and {} elements!", self.left, self.right)
    }
}

impl Error for SizeMismatch {}

/// The rows passed to [`RelationMatrix::from_rows`] don't form a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotSquare {
    pub row: usize,
    pub len: usize,
    pub expected: usize,
}

impl Display for NotSquare {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Row {} has {} cells, expected {}!", self.row, self.len, self.expected)
    }
}

impl Error for NotSquare {}

/// A binary relation over the elements `0..n`, stored as an `n` by `n` boolean matrix. The cell
/// at row `x` and column `y` is set when `x` is related to `y`.
///
/// Elements are numbered from zero in code and from one whenever a relation is displayed.
///
/// The set operators are implemented on references: `&a | &b` is the union, `&a & &b` the
/// intersection, `&a - &b` the difference, `&a ^ &b` the symmetric difference and `!&a` the
/// complement. All binary operations panic if the relations have different sizes, use
/// [`RelationMatrix::try_combine`] to avoid this.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct RelationMatrix {
    size: usize,
    cells: Vec<bool>,
}

impl RelationMatrix {
    /// Creates the empty relation over `size` elements.
    pub fn new(size: usize) -> RelationMatrix {
        RelationMatrix {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Creates a relation containing every pair `(x, y)` for which `related` returns true.
    pub fn from_fn(size: usize, related: impl Fn(usize, usize) -> bool) -> RelationMatrix {
        RelationMatrix {
            size,
            cells: (0..size * size).map(|cell| related(cell / size, cell % size)).collect(),
        }
    }

    /// Creates a relation from rows of cells, where any non-zero cell is set.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<RelationMatrix, NotSquare> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(NotSquare { row, len: values.len(), expected: size });
            }
            cells.extend(values.iter().map(|&value| value != 0));
        }
        Ok(RelationMatrix { size, cells })
    }

    /// The relation where every element is related only to itself.
    pub fn identity(size: usize) -> RelationMatrix {
        RelationMatrix::from_fn(size, |x, y| x == y)
    }

    /// The relation where every element is related to every element.
    pub fn full(size: usize) -> RelationMatrix {
        RelationMatrix::from_fn(size, |_, _| true)
    }

    /// The number of elements in the underlying set.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if `x` is related to `y`. Elements outside the set are never related.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size && self.cells[x * self.size + y]
    }

    /// # Panics
    /// Panics if either element lies outside the set.
    pub fn set(&mut self, x: usize, y: usize, related: bool) {
        assert!(x < self.size && y < self.size, "Pair ({x}, {y}) lies outside a set of {} elements!", self.size);
        self.cells[x * self.size + y] = related;
    }

    /// The number of related pairs.
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Iterates over every related pair, row by row.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(|(cell, _)| (cell / self.size, cell % self.size))
    }

    /// The elements that `x` is related to.
    pub fn successors(&self, x: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size).filter(move |&y| self.get(x, y))
    }

    /// Combines two relations of the same size cell by cell.
    pub fn try_combine(
        &self,
        other: &RelationMatrix,
        combine: impl Fn(bool, bool) -> bool,
    ) -> Result<RelationMatrix, SizeMismatch> {
        self.check_size(other)?;
        Ok(RelationMatrix {
            size: self.size,
            cells: self.cells.iter()
                .zip(&other.cells)
                .map(|(&left, &right)| combine(left, right))
                .collect(),
        })
    }

    /// Returns true if every pair of `self` is also in `other`.
    ///
    /// # Panics
    /// Panics if the relations have different sizes.
    pub fn is_subset(&self, other: &RelationMatrix) -> bool {
        self.check_size(other).throw();
        self.cells.iter().zip(&other.cells).all(|(&left, &right)| !left || right)
    }

    /// Returns true if `self` is a subset of `other` and the two differ.
    ///
    /// # Panics
    /// Panics if the relations have different sizes.
    pub fn is_proper_subset(&self, other: &RelationMatrix) -> bool {
        self.is_subset(other) && self != other
    }

    pub fn union(&self, other: &RelationMatrix) -> RelationMatrix {
        self.try_combine(other, |left, right| left || right).throw()
    }

    pub fn intersection(&self, other: &RelationMatrix) -> RelationMatrix {
        self.try_combine(other, |left, right| left && right).throw()
    }

    /// The pairs of `self` that aren't in `other`.
    pub fn difference(&self, other: &RelationMatrix) -> RelationMatrix {
        self.try_combine(other, |left, right| left && !right).throw()
    }

    /// The pairs in exactly one of the two relations.
    pub fn symmetric_difference(&self, other: &RelationMatrix) -> RelationMatrix {
        self.try_combine(other, |left, right| left != right).throw()
    }

    pub fn complement(&self) -> RelationMatrix {
        RelationMatrix {
            size: self.size,
            cells: self.cells.iter().map(|cell| !cell).collect(),
        }
    }

    /// The relation with every pair reversed.
    pub fn inverse(&self) -> RelationMatrix {
        RelationMatrix::from_fn(self.size, |x, y| self.get(y, x))
    }

    /// The composition of `self` and `other`: `x` is related to `y` when there is some `z` with
    /// `(x, z)` in `self` and `(z, y)` in `other`.
    ///
    /// # Panics
    /// Panics if the relations have different sizes.
    pub fn compose(&self, other: &RelationMatrix) -> RelationMatrix {
        self.compose_counted(other, &mut 0)
    }

    /// Composes the two relations, adding one to `comparisons` for every intermediate element
    /// examined. The search for a given cell stops at the first intermediate element found.
    pub(crate) fn compose_counted(&self, other: &RelationMatrix, comparisons: &mut usize) -> RelationMatrix {
        self.check_size(other).throw();
        let size = self.size;
        let mut result = RelationMatrix::new(size);
        for x in 0..size {
            for y in 0..size {
                for z in 0..size {
                    *comparisons += 1;
                    if self.get(x, z) && other.get(z, y) {
                        result.cells[x * size + y] = true;
                        break;
                    }
                }
            }
        }
        result
    }

    /// Subset test that adds one to `comparisons` for every cell examined, stopping at the first
    /// pair missing from `other`.
    pub(crate) fn is_subset_counted(&self, other: &RelationMatrix, comparisons: &mut usize) -> bool {
        self.check_size(other).throw();
        for (&left, &right) in self.cells.iter().zip(&other.cells) {
            *comparisons += 1;
            if left && !right {
                return false;
            }
        }
        true
    }

    fn check_size(&self, other: &RelationMatrix) -> Result<(), SizeMismatch> {
        if self.size == other.size {
            Ok(())
        } else {
            Err(SizeMismatch { left: self.size, right: other.size })
        }
    }
}

impl BitOr for &RelationMatrix {
    type Output = RelationMatrix;

    fn bitor(self, rhs: Self) -> RelationMatrix {
        self.union(rhs)
    }
}

impl BitAnd for &RelationMatrix {
    type Output = RelationMatrix;

    fn bitand(self, rhs: Self) -> RelationMatrix {
        self.intersection(rhs)
    }
}

impl Sub for &RelationMatrix {
    type Output = RelationMatrix;

    fn sub(self, rhs: Self) -> RelationMatrix {
        self.difference(rhs)
    }
}

impl BitXor for &RelationMatrix {
    type Output = RelationMatrix;

    fn bitxor(self, rhs: Self) -> RelationMatrix {
        self.symmetric_difference(rhs)
    }
}

impl Not for &RelationMatrix {
    type Output = RelationMatrix;

    fn not(self) -> RelationMatrix {
        self.complement()
    }
}

impl Debug for RelationMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationMatrix")
            .field("size", &self.size)
            .field("pairs", &self.pairs().collect::<Vec<_>>())
            .finish()
    }
}

impl Display for RelationMatrix {
    /// Rows of `0`s and `1`s, headed by the 1-based element numbers.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let width = self.size.to_string().len();

        write!(f, "{:width$}", "")?;
        for column in 1..=self.size {
            write!(f, " {column:>width$}")?;
        }
        writeln!(f)?;

        for x in 0..self.size {
            write!(f, "{:>width$}", x + 1)?;
            for y in 0..self.size {
                write!(f, " {:>width$}", u8::from(self.get(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
