use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use super::{Clause, Formula, Literal};

/// Which rows [`TruthTable::display`] writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    All,
    TrueOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// The value of each variable, in the order of [`TruthTable::variables`].
    pub values: Vec<bool>,
    pub result: bool,
}

/// The value of a formula under every assignment of its variables. Variables are sorted
/// alphabetically and rows count up in binary, with the first variable as the most significant
/// bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    formula: Formula,
    variables: Vec<char>,
    rows: Vec<Row>,
}

impl TruthTable {
    pub fn new(formula: &Formula) -> TruthTable {
        let variables: Vec<char> = formula.variables().into_iter().collect();
        let count = variables.len();

        let rows = (0..1usize << count)
            .map(|bits| {
                let values: Vec<bool> = (0..count)
                    .map(|index| bits & (1 << (count - 1 - index)) != 0)
                    .collect();
                let assignment: BTreeMap<char, bool> = variables.iter()
                    .copied()
                    .zip(values.iter().copied())
                    .collect();
                // Every variable of the formula is assigned.
                let result = formula.evaluate(&assignment).unwrap_or(false);
                Row { values, result }
            })
            .collect();

        TruthTable {
            formula: formula.clone(),
            variables,
            rows,
        }
    }

    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The rows where the formula is true.
    pub fn satisfying(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.result)
    }

    /// True under no assignment.
    pub fn is_contradiction(&self) -> bool {
        self.satisfying().next().is_none()
    }

    /// True under every assignment.
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// The canonical conjunctive normal form: one clause per falsifying row, ruling that row out.
    pub fn cnf_clauses(&self) -> Vec<Clause> {
        self.rows.iter()
            .filter(|row| !row.result)
            .map(|row| {
                self.variables.iter()
                    .zip(&row.values)
                    .map(|(&name, &value)| Literal { name, negated: value })
                    .collect()
            })
            .collect()
    }

    /// Displays the table, writing either every row or only the satisfying ones.
    pub fn display(&self, mode: TableMode) -> TableDisplay<'_> {
        TableDisplay { table: self, mode }
    }
}

pub struct TableDisplay<'a> {
    table: &'a TruthTable,
    mode: TableMode,
}

impl Display for TableDisplay<'_> {
    /// ```text
    /// A | B | A & B
    /// --------------
    /// 1 | 1 | 1
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let table = self.table;
        for name in &table.variables {
            write!(f, "{name} | ")?;
        }
        writeln!(f, "{}", table.formula)?;
        writeln!(f, "{}", "-".repeat(table.variables.len() * 4 + 10))?;

        for row in &table.rows {
            if self.mode == TableMode::TrueOnly && !row.result {
                continue;
            }
            for value in &row.values {
                write!(f, "{} | ", u8::from(*value))?;
            }
            writeln!(f, "{}", u8::from(row.result))?;
        }
        Ok(())
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display(TableMode::All))
    }
}
