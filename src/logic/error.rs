use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnexpectedChar {
    pub found: char,
    pub position: usize,
}

impl Display for UnexpectedChar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected character {:?} at position {}!", self.found, self.position)
    }
}

impl Error for UnexpectedChar {}

/// A parenthesis without a partner. The position is that of the unmatched parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnbalancedParens {
    pub position: usize,
}

impl Display for UnbalancedParens {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unbalanced parenthesis at position {}!", self.position)
    }
}

impl Error for UnbalancedParens {}

/// An operator is missing an operand, or the formula is empty. The position is that of the
/// operator, or the length of the input when there is no operator to blame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingOperand {
    pub position: usize,
}

impl Display for MissingOperand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Missing operand at position {}!", self.position)
    }
}

impl Error for MissingOperand {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum ParseError {
    UnexpectedChar(UnexpectedChar),
    UnbalancedParens(UnbalancedParens),
    MissingOperand(MissingOperand),
}

/// A formula was evaluated without a value for one of its variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnassignedVariable {
    pub name: char,
}

impl Display for UnassignedVariable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Variable {} has no value!", self.name)
    }
}

impl Error for UnassignedVariable {}
