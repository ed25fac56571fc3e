use std::fmt::{self, Display, Formatter};
use std::ops::Add;

use super::ForwardList;

/// A single `coefficient * x^power` term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub coefficient: i64,
    pub power: u32,
}

/// A polynomial in one variable, stored as a linked list of non-zero terms sorted by descending
/// power. No two terms share a power.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: ForwardList<Term>,
}

impl Polynomial {
    pub const fn new() -> Polynomial {
        Polynomial {
            terms: ForwardList::new(),
        }
    }

    /// Adds `coefficient * x^power` to the polynomial. A term with an existing power is merged into
    /// it, and a term that cancels out is removed entirely.
    pub fn add_term(&mut self, coefficient: i64, power: u32) {
        if coefficient == 0 {
            return;
        }

        match self.terms.iter_mut().find(|term| term.power == power) {
            Some(term) => {
                term.coefficient += coefficient;
                if term.coefficient == 0 {
                    self.terms.retain(|term| term.power != power);
                }
            },
            None => {
                self.terms.insert_where(
                    Term { coefficient, power },
                    |new, existing| new.power > existing.power,
                );
            },
        }
    }

    /// Returns the highest power with a non-zero coefficient, or None for the zero polynomial.
    pub fn degree(&self) -> Option<u32> {
        self.terms.front().map(|term| term.power)
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms.iter()
            .map(|term| term.coefficient as f64 * x.powi(term.power as i32))
            .sum()
    }
}

impl FromIterator<(i64, u32)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (i64, u32)>>(iter: I) -> Self {
        let mut polynomial = Polynomial::new();
        for (coefficient, power) in iter {
            polynomial.add_term(coefficient, power);
        }
        polynomial
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        let mut sum = self.clone();
        for term in rhs.terms() {
            sum.add_term(term.coefficient, term.power);
        }
        sum
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (index, Term { coefficient, power }) in self.terms().enumerate() {
            match (index, coefficient.is_negative()) {
                (0, _) => write!(f, "{coefficient}")?,
                (_, false) => write!(f, " + {coefficient}")?,
                (_, true) => write!(f, " - {}", coefficient.unsigned_abs())?,
            }
            write!(f, "*x^{power}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_are_sorted_by_power() {
        let mut poly = Polynomial::new();
        poly.add_term(4, 1);
        poly.add_term(3, 4);
        poly.add_term(1, 0);
        poly.add_term(2, 3);
        poly.add_term(0, 7);

        assert_eq!(poly.to_string(), "3*x^4 + 2*x^3 + 4*x^1 + 1*x^0");
        assert_eq!(poly.degree(), Some(4), "Zero coefficients shouldn't add a term.");
    }

    #[test]
    fn test_like_terms_merge_and_cancel() {
        let mut poly: Polynomial = [(2, 2), (5, 1), (-3, 2)].into_iter().collect();
        assert_eq!(poly.to_string(), "-1*x^2 + 5*x^1");

        poly.add_term(1, 2);
        assert_eq!(poly.to_string(), "5*x^1", "A cancelled term should be removed.");
        poly.add_term(-5, 1);
        assert!(poly.is_zero());
        assert_eq!(poly.to_string(), "0");
    }

    #[test]
    fn test_add_and_evaluate() {
        let a: Polynomial = [(1, 2), (-2, 0)].into_iter().collect();
        let b: Polynomial = [(3, 1), (2, 0)].into_iter().collect();
        let sum = &a + &b;

        assert_eq!(sum.to_string(), "1*x^2 + 3*x^1");
        assert_eq!(sum.evaluate(2.0), 10.0);
        assert_eq!(a.to_string(), "1*x^2 - 2*x^0");
    }
}
