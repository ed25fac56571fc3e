use derive_more::{Display, IsVariant};

use super::RelationMatrix;

/// The ways [`RelationMatrix::transitive_closure`] can compute a closure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum ClosureAlgorithm {
    /// Start from `S = A∘A`. While `S` isn't contained in the closure `C`, add it to `C` and
    /// replace it with `S∘C`.
    #[display("composition")]
    Composition,
    /// While `C∘C` isn't contained in `C`, add it to `C`.
    #[display("squared composition")]
    SquaredComposition,
    /// Warshall's algorithm: for each intermediate `z`, link every `x` before `z` to every `y`
    /// after it.
    #[display("Warshall")]
    Warshall,
}

/// The work done computing a closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosureStats {
    /// The number of relation compositions performed.
    pub compositions: usize,
    /// The number of cell comparisons performed, including those inside compositions and subset
    /// tests.
    pub comparisons: usize,
}

impl RelationMatrix {
    /// Returns the smallest transitive relation containing `self`, along with the number of
    /// operations `algorithm` needed to find it.
    pub fn transitive_closure(&self, algorithm: ClosureAlgorithm) -> (RelationMatrix, ClosureStats) {
        let mut stats = ClosureStats::default();
        let closure = match algorithm {
            ClosureAlgorithm::Composition => self.closure_by_composition(&mut stats),
            ClosureAlgorithm::SquaredComposition => self.closure_by_squaring(&mut stats),
            ClosureAlgorithm::Warshall => self.closure_by_warshall(&mut stats),
        };
        (closure, stats)
    }

    fn closure_by_composition(&self, stats: &mut ClosureStats) -> RelationMatrix {
        let mut closure = self.clone();
        let mut step = self.compose_counted(self, &mut stats.comparisons);
        stats.compositions += 1;

        while !step.is_subset_counted(&closure, &mut stats.comparisons) {
            closure = closure.union(&step);
            step = step.compose_counted(&closure, &mut stats.comparisons);
            stats.compositions += 1;
        }
        closure
    }

    fn closure_by_squaring(&self, stats: &mut ClosureStats) -> RelationMatrix {
        let mut closure = self.clone();
        let mut square = closure.compose_counted(&closure, &mut stats.comparisons);
        stats.compositions += 1;

        while !square.is_subset_counted(&closure, &mut stats.comparisons) {
            closure = closure.union(&square);
            square = closure.compose_counted(&closure, &mut stats.comparisons);
            stats.compositions += 1;
        }
        closure
    }

    fn closure_by_warshall(&self, stats: &mut ClosureStats) -> RelationMatrix {
        let size = self.size();
        let mut closure = self.clone();
        for z in 0..size {
            for x in 0..size {
                stats.comparisons += 1;
                if !closure.get(x, z) {
                    continue;
                }
                for y in 0..size {
                    stats.comparisons += 1;
                    if closure.get(z, y) {
                        closure.set(x, y, true);
                    }
                }
            }
        }
        closure
    }
}
