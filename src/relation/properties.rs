use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

use super::RelationMatrix;

/// The outcome of checking a relation for a property.
///
/// `witnesses` lists the pairs responsible for a failure, so the property holds exactly when
/// there are none. What a witness means depends on the property checked, see the individual
/// methods of [`RelationMatrix`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub holds: bool,
    pub witnesses: Vec<(usize, usize)>,
}

impl Verdict {
    fn from_witnesses(witnesses: impl IntoIterator<Item = (usize, usize)>) -> Verdict {
        let witnesses: Vec<_> = witnesses.into_iter().collect();
        Verdict {
            holds: witnesses.is_empty(),
            witnesses,
        }
    }
}

impl Display for Verdict {
    /// `holds`, or `fails at (1, 2), (2, 1)` with 1-based elements.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.holds {
            return write!(f, "holds");
        }
        write!(f, "fails at ")?;
        for (index, (x, y)) in self.witnesses.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", x + 1, y + 1)?;
        }
        Ok(())
    }
}

impl RelationMatrix {
    /// Every element is related to itself. Witnesses are the missing `(x, x)` pairs.
    pub fn reflexive(&self) -> Verdict {
        Verdict::from_witnesses((0..self.size()).filter(|&x| !self.get(x, x)).map(|x| (x, x)))
    }

    /// No element is related to itself. Witnesses are the present `(x, x)` pairs.
    pub fn antireflexive(&self) -> Verdict {
        Verdict::from_witnesses((0..self.size()).filter(|&x| self.get(x, x)).map(|x| (x, x)))
    }

    /// Every pair appears in both directions. Witnesses are the pairs `(x, y)` whose reverse is
    /// missing.
    pub fn symmetric(&self) -> Verdict {
        Verdict::from_witnesses(self.pairs().filter(|&(x, y)| !self.get(y, x)))
    }

    /// No two distinct elements are related in both directions. Witnesses are the pairs
    /// `(x, y)` with `x < y` present in both directions. Loops are permitted.
    pub fn antisymmetric(&self) -> Verdict {
        Verdict::from_witnesses(self.pairs().filter(|&(x, y)| x < y && self.get(y, x)))
    }

    /// Whenever `(x, y)` and `(y, z)` are related, so is `(x, z)`. Witnesses are the missing
    /// `(x, z)` pairs.
    pub fn transitive(&self) -> Verdict {
        let mut missing = BTreeSet::new();
        for (x, y) in self.pairs() {
            missing.extend(self.successors(y).filter(|&z| !self.get(x, z)).map(|z| (x, z)));
        }
        Verdict::from_witnesses(missing)
    }

    /// Whenever `(x, y)` and `(y, z)` are related, `(x, z)` is not. Witnesses are the present
    /// `(x, z)` pairs.
    pub fn antitransitive(&self) -> Verdict {
        let mut present = BTreeSet::new();
        for (x, y) in self.pairs() {
            present.extend(self.successors(y).filter(|&z| self.get(x, z)).map(|z| (x, z)));
        }
        Verdict::from_witnesses(present)
    }

    /// Every two distinct elements are related in at least one direction. Witnesses are the
    /// unrelated pairs `(x, y)` with `x < y`.
    pub fn connex(&self) -> Verdict {
        let size = self.size();
        Verdict::from_witnesses(
            (0..size)
                .flat_map(|x| (x + 1..size).map(move |y| (x, y)))
                .filter(|&(x, y)| !self.get(x, y) && !self.get(y, x)),
        )
    }

    /// Reflexive, symmetric and transitive.
    pub fn is_equivalence(&self) -> bool {
        self.reflexive().holds && self.symmetric().holds && self.transitive().holds
    }

    /// Antisymmetric and transitive.
    pub fn is_order(&self) -> bool {
        self.antisymmetric().holds && self.transitive().holds
    }

    pub fn is_loose_order(&self) -> bool {
        self.is_order() && self.reflexive().holds
    }

    pub fn is_strict_order(&self) -> bool {
        self.is_order() && self.antireflexive().holds
    }

    pub fn is_linear_order(&self) -> bool {
        self.is_order() && self.connex().holds
    }

    pub fn is_loose_linear_order(&self) -> bool {
        self.is_loose_order() && self.connex().holds
    }

    pub fn is_strict_linear_order(&self) -> bool {
        self.is_strict_order() && self.connex().holds
    }
}
