use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::{Formula, TruthTable, UnexpectedChar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    pub name: char,
    pub negated: bool,
}

impl Literal {
    pub const fn positive(name: char) -> Literal {
        Literal { name, negated: false }
    }

    pub const fn negative(name: char) -> Literal {
        Literal { name, negated: true }
    }

    pub const fn complement(self) -> Literal {
        Literal { name: self.name, negated: !self.negated }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "!")?;
        }
        write!(f, "{}", self.name)
    }
}

/// A disjunction of literals. The empty clause is false.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause(pub BTreeSet<Literal>);

impl Clause {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Contains some literal alongside its complement, so it is always true.
    pub fn is_tautology(&self) -> bool {
        self.0.iter().any(|literal| !literal.negated && self.0.contains(&literal.complement()))
    }

    /// Every clause that follows from `self` and `other` by cancelling one complementary pair.
    pub fn resolve(&self, other: &Clause) -> Vec<Clause> {
        self.0.iter()
            .filter(|literal| other.0.contains(&literal.complement()))
            .map(|literal| {
                let complement = literal.complement();
                Clause(
                    self.0.iter()
                        .chain(&other.0)
                        .filter(|candidate| **candidate != *literal && **candidate != complement)
                        .copied()
                        .collect(),
                )
            })
            .collect()
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Clause(iter.into_iter().collect())
    }
}

impl FromStr for Clause {
    type Err = UnexpectedChar;

    /// Parses literals separated by `|`, such as `A | !B`.
    fn from_str(input: &str) -> Result<Clause, UnexpectedChar> {
        let mut clause = Clause::default();
        let mut negated = false;
        let mut negating = false;
        let mut expect_literal = true;

        for (position, found) in input.chars().enumerate() {
            match found {
                c if c.is_whitespace() => {},
                '!' if expect_literal => {
                    negated = !negated;
                    negating = true;
                },
                '|' if !expect_literal => expect_literal = true,
                c if c.is_ascii_alphabetic() && expect_literal => {
                    clause.0.insert(Literal { name: c.to_ascii_uppercase(), negated });
                    negated = false;
                    negating = false;
                    expect_literal = false;
                },
                _ => return Err(UnexpectedChar { found, position }),
            }
        }

        // A trailing '!' or '|' is still waiting for its literal.
        let end = input.chars().count();
        if negating {
            return Err(UnexpectedChar { found: '!', position: end });
        }
        if expect_literal && !clause.is_empty() {
            return Err(UnexpectedChar { found: '|', position: end });
        }
        Ok(clause)
    }
}

impl Display for Clause {
    /// `{A, !B}`, with `{}` for the empty clause.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (index, literal) in self.0.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{literal}")?;
        }
        write!(f, "}}")
    }
}

/// One resolution that produced a clause not seen before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub left: Clause,
    pub right: Clause,
    pub resolvent: Clause,
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {} => {}", self.left, self.right, self.resolvent)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refutation {
    /// Whether the empty clause was derived, proving the clauses can't all hold.
    pub refuted: bool,
    pub steps: Vec<Step>,
}

/// Resolves every pair of clauses, adding the results, until either the empty clause appears or
/// no new clauses can be derived. Tautological resolvents are discarded.
pub fn refute(clauses: &[Clause]) -> Refutation {
    let mut known: BTreeSet<Clause> = clauses.iter().cloned().collect();
    let mut steps = Vec::new();

    if known.contains(&Clause::default()) {
        return Refutation { refuted: true, steps };
    }

    loop {
        let mut derived = BTreeSet::new();
        for (index, left) in known.iter().enumerate() {
            for right in known.iter().skip(index + 1) {
                for resolvent in left.resolve(right) {
                    if resolvent.is_tautology() || known.contains(&resolvent) || derived.contains(&resolvent) {
                        continue;
                    }
                    let refuted = resolvent.is_empty();
                    steps.push(Step {
                        left: left.clone(),
                        right: right.clone(),
                        resolvent: resolvent.clone(),
                    });
                    if refuted {
                        return Refutation { refuted, steps };
                    }
                    derived.insert(resolvent);
                }
            }
        }

        if derived.is_empty() {
            return Refutation { refuted: false, steps };
        }
        known.extend(derived);
    }
}

pub fn refutes(clauses: &[Clause]) -> bool {
    refute(clauses).refuted
}

/// The `knowledge` clauses together imply the `goal` clause: adding the negation of every goal
/// literal leads to a refutation.
pub fn entails(knowledge: &[Clause], goal: &Clause) -> bool {
    let mut clauses = knowledge.to_vec();
    clauses.extend(goal.0.iter().map(|literal| Clause::from_iter([literal.complement()])));
    refutes(&clauses)
}

/// The `premises` together imply `goal`, checked by resolution over the canonical normal forms of
/// the premises and of the negated goal.
pub fn formula_entails(premises: &[Formula], goal: &Formula) -> bool {
    let mut clauses: Vec<Clause> = premises.iter()
        .flat_map(|premise| TruthTable::new(premise).cnf_clauses())
        .collect();
    clauses.extend(TruthTable::new(&goal.negated()).cnf_clauses());
    refutes(&clauses)
}
