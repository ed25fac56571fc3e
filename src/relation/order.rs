use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::RelationMatrix;

/// Some elements could never be placed because each of them is preceded by another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cycle {
    /// The elements left over once no more could be placed.
    pub remaining: Vec<usize>,
}

impl Display for Cycle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Relation contains a cycle through {} elements!", self.remaining.len())
    }
}

impl Error for Cycle {}

impl RelationMatrix {
    /// The domination (cover) relation of an order: `x` dominates `y` when `x` precedes `y` with
    /// nothing in between. Loops are dropped.
    pub fn domination(&self) -> RelationMatrix {
        let size = self.size();
        let mut cover = self.clone();
        for x in 0..size {
            cover.set(x, x, false);
        }
        for middle in 0..size {
            for x in 0..size {
                if !self.get(x, middle) || x == middle {
                    continue;
                }
                for y in self.successors(middle).filter(|&y| y != middle) {
                    cover.set(x, y, false);
                }
            }
        }
        cover
    }

    /// Sorts the elements into levels: the first level holds the elements nothing precedes, the
    /// next those preceded only by the first level, and so on. Elements within a level are in
    /// ascending order. Loops are ignored, so loose and strict orders give the same levels.
    pub fn topological_levels(&self) -> Result<Vec<Vec<usize>>, Cycle> {
        let size = self.size();
        let mut in_degrees: Vec<usize> = (0..size)
            .map(|y| (0..size).filter(|&x| x != y && self.get(x, y)).count())
            .collect();
        let mut placed = vec![false; size];
        let mut levels = Vec::new();
        let mut placed_count = 0;

        while placed_count < size {
            let level: Vec<usize> = (0..size)
                .filter(|&x| !placed[x] && in_degrees[x] == 0)
                .collect();
            if level.is_empty() {
                return Err(Cycle {
                    remaining: (0..size).filter(|&x| !placed[x]).collect(),
                });
            }

            for &x in &level {
                placed[x] = true;
                for y in self.successors(x).filter(|&y| y != x) {
                    in_degrees[y] -= 1;
                }
            }
            placed_count += level.len();
            levels.push(level);
        }
        Ok(levels)
    }
}
