use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display, Formatter};

use super::{MissingOperand, ParseError, UnassignedVariable, UnbalancedParens, UnexpectedChar};

/// A propositional formula over single letter variables.
///
/// Formulas are written with `!` for negation, `&` for conjunction, `|` for disjunction, `0` and
/// `1` for the constants and parentheses for grouping. Negation binds tightest, then conjunction,
/// then disjunction. Two operands written next to each other are joined by an implied `&`, so
/// `AB | !C` reads as `(A & B) | !C`. Variables are case insensitive and stored in upper case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Const(bool),
    Var(char),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Operand(Leaf),
    Not,
    And,
    Or,
    Open,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leaf {
    Const(bool),
    Var(char),
}

impl Token {
    const fn precedence(self) -> u8 {
        match self {
            Token::Not => 3,
            Token::And => 2,
            Token::Or => 1,
            _ => 0,
        }
    }

    const fn ends_operand(self) -> bool {
        matches!(self, Token::Operand(_) | Token::Close)
    }

    const fn starts_operand(self) -> bool {
        matches!(self, Token::Operand(_) | Token::Open | Token::Not)
    }
}

impl Formula {
    pub fn parse(input: &str) -> Result<Formula, ParseError> {
        let tokens = tokenize(input)?;
        let postfix = to_postfix(tokens)?;

        let mut operands: Vec<Formula> = Vec::new();
        for (position, token) in postfix {
            let missing = MissingOperand { position };
            let formula = match token {
                Token::Operand(Leaf::Const(value)) => Formula::Const(value),
                Token::Operand(Leaf::Var(name)) => Formula::Var(name),
                Token::Not => Formula::Not(Box::new(operands.pop().ok_or(missing)?)),
                Token::And | Token::Or => {
                    let right = Box::new(operands.pop().ok_or(missing)?);
                    let left = Box::new(operands.pop().ok_or(missing)?);
                    if token == Token::And {
                        Formula::And(left, right)
                    } else {
                        Formula::Or(left, right)
                    }
                },
                Token::Open | Token::Close => continue,
            };
            operands.push(formula);
        }

        match (operands.pop(), operands.is_empty()) {
            (Some(formula), true) => Ok(formula),
            _ => Err(MissingOperand { position: input.chars().count() }.into()),
        }
    }

    /// The variables that appear in the formula, in alphabetical order.
    pub fn variables(&self) -> BTreeSet<char> {
        fn collect(formula: &Formula, variables: &mut BTreeSet<char>) {
            match formula {
                Formula::Const(_) => {},
                Formula::Var(name) => {
                    variables.insert(*name);
                },
                Formula::Not(inner) => collect(inner, variables),
                Formula::And(left, right) | Formula::Or(left, right) => {
                    collect(left, variables);
                    collect(right, variables);
                },
            }
        }

        let mut variables = BTreeSet::new();
        collect(self, &mut variables);
        variables
    }

    /// Evaluates the formula with the provided value for each variable.
    pub fn evaluate(&self, assignment: &BTreeMap<char, bool>) -> Result<bool, UnassignedVariable> {
        Ok(match self {
            Formula::Const(value) => *value,
            Formula::Var(name) => *assignment.get(name).ok_or(UnassignedVariable { name: *name })?,
            Formula::Not(inner) => !inner.evaluate(assignment)?,
            Formula::And(left, right) => left.evaluate(assignment)? && right.evaluate(assignment)?,
            Formula::Or(left, right) => left.evaluate(assignment)? || right.evaluate(assignment)?,
        })
    }

    /// Returns the negation of the formula.
    pub fn negated(&self) -> Formula {
        Formula::Not(Box::new(self.clone()))
    }

    const fn precedence(&self) -> u8 {
        match self {
            Formula::Const(_) | Formula::Var(_) | Formula::Not(_) => 3,
            Formula::And(..) => 2,
            Formula::Or(..) => 1,
        }
    }

    fn fmt_child(&self, child: &Formula, f: &mut Formatter<'_>) -> fmt::Result {
        if child.precedence() < self.precedence() {
            write!(f, "({child})")
        } else {
            write!(f, "{child}")
        }
    }
}

impl Display for Formula {
    /// Writes the formula back out with only the parentheses that precedence requires.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Formula::Const(value) => write!(f, "{}", u8::from(*value)),
            Formula::Var(name) => write!(f, "{name}"),
            Formula::Not(inner) => {
                write!(f, "!")?;
                self.fmt_child(inner, f)
            },
            Formula::And(left, right) | Formula::Or(left, right) => {
                self.fmt_child(left, f)?;
                write!(f, "{}", if matches!(self, Formula::And(..)) { " & " } else { " | " })?;
                self.fmt_child(right, f)
            },
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, UnexpectedChar> {
    let mut tokens: Vec<(usize, Token)> = Vec::new();
    for (position, found) in input.chars().enumerate() {
        let token = match found {
            c if c.is_whitespace() => continue,
            c if c.is_ascii_alphabetic() => Token::Operand(Leaf::Var(c.to_ascii_uppercase())),
            '0' => Token::Operand(Leaf::Const(false)),
            '1' => Token::Operand(Leaf::Const(true)),
            '!' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '(' => Token::Open,
            ')' => Token::Close,
            _ => return Err(UnexpectedChar { found, position }),
        };

        if let Some(&(_, previous)) = tokens.last()
            && previous.ends_operand()
            && token.starts_operand()
        {
            tokens.push((position, Token::And));
        }
        tokens.push((position, token));
    }
    Ok(tokens)
}

/// Reorders the tokens into postfix form with the shunting-yard algorithm. Parentheses are
/// dropped from the output.
fn to_postfix(tokens: Vec<(usize, Token)>) -> Result<Vec<(usize, Token)>, UnbalancedParens> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut operators: Vec<(usize, Token)> = Vec::new();

    for (position, token) in tokens {
        match token {
            Token::Operand(_) => output.push((position, token)),
            Token::Open | Token::Not => operators.push((position, token)),
            Token::Close => loop {
                match operators.pop() {
                    Some((_, Token::Open)) => break,
                    Some(operator) => output.push(operator),
                    None => return Err(UnbalancedParens { position }),
                }
            },
            Token::And | Token::Or => {
                while let Some(&(_, top)) = operators.last()
                    && top != Token::Open
                    && top.precedence() >= token.precedence()
                {
                    output.extend(operators.pop());
                }
                operators.push((position, token));
            },
        }
    }

    while let Some((position, operator)) = operators.pop() {
        if operator == Token::Open {
            return Err(UnbalancedParens { position });
        }
        output.push((position, operator));
    }
    Ok(output)
}
