use std::error::Error;
use std::fmt::{self, Display, Formatter};

use super::RelationMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotEquivalence;

impl Display for NotEquivalence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Relation isn't an equivalence!")
    }
}

impl Error for NotEquivalence {}

/// The partition of a set into the equivalence classes of a relation. Classes are ordered by
/// their smallest element, and each class is sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactorSet(pub Vec<Vec<usize>>);

impl FactorSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for FactorSet {
    /// Renders as `{{1,2,3},{4}}` with 1-based elements.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, class) in self.0.iter().enumerate() {
            if index != 0 {
                write!(f, ",")?;
            }
            let members: Vec<_> = class.iter().map(|element| (element + 1).to_string()).collect();
            write!(f, "{{{}}}", members.join(","))?;
        }
        write!(f, "}}")
    }
}

impl RelationMatrix {
    /// Numbers the equivalence class of every element, starting from 1 in order of each class's
    /// smallest member.
    pub fn classes(&self) -> Result<Vec<usize>, NotEquivalence> {
        if !self.is_equivalence() {
            return Err(NotEquivalence);
        }

        let mut classes = vec![0; self.size()];
        let mut count = 0;
        for x in 0..self.size() {
            if classes[x] == 0 {
                count += 1;
                for y in self.successors(x) {
                    classes[y] = count;
                }
            }
        }
        Ok(classes)
    }

    pub fn factor_set(&self) -> Result<FactorSet, NotEquivalence> {
        let classes = self.classes()?;
        let count = classes.iter().copied().max().unwrap_or(0);

        let mut partition = vec![Vec::new(); count];
        for (element, class) in classes.into_iter().enumerate() {
            partition[class - 1].push(element);
        }
        Ok(FactorSet(partition))
    }
}
