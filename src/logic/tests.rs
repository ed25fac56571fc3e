#![cfg(test)]

use std::collections::BTreeMap;

use super::resolution::{entails, formula_entails, refute, refutes};
use super::*;

fn parse(input: &str) -> Formula {
    Formula::parse(input).unwrap()
}

fn clause(input: &str) -> Clause {
    input.parse().unwrap()
}

fn assign(pairs: &[(char, bool)]) -> BTreeMap<char, bool> {
    pairs.iter().copied().collect()
}

#[test]
fn test_precedence() {
    let formula = parse("a | b & !c");
    assert_eq!(formula.to_string(), "A | B & !C", "& should bind tighter than |.");
    assert_eq!(
        formula,
        Formula::Or(
            Box::new(Formula::Var('A')),
            Box::new(Formula::And(
                Box::new(Formula::Var('B')),
                Box::new(Formula::Not(Box::new(Formula::Var('C')))),
            )),
        )
    );
    assert_eq!(parse("(A | B) & C").to_string(), "(A | B) & C");
    assert_eq!(parse("!(A & B)").to_string(), "!(A & B)");
    assert_eq!(parse("!!A").to_string(), "!!A");
}

#[test]
fn test_implicit_conjunction() {
    assert_eq!(parse("AB | !C"), parse("A & B | !C"));
    assert_eq!(parse("A(B | C)"), parse("A & (B | C)"));
    assert_eq!(parse("A !B"), parse("A & !B"));
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        Formula::parse("A + B"),
        Err(UnexpectedChar { found: '+', position: 2 }.into())
    );
    assert_eq!(Formula::parse("(A & B"), Err(UnbalancedParens { position: 0 }.into()));
    assert_eq!(Formula::parse("A & B)"), Err(UnbalancedParens { position: 5 }.into()));
    assert_eq!(Formula::parse("A &"), Err(MissingOperand { position: 2 }.into()));
    assert_eq!(Formula::parse("!"), Err(MissingOperand { position: 0 }.into()));
    assert!(Formula::parse("").is_err_and(|error| error.is_missing_operand()));
    assert!(Formula::parse("()").is_err_and(|error| error.is_missing_operand()));
}

#[test]
fn test_evaluate() {
    let formula = parse("A & !B | C");
    assert_eq!(formula.variables().into_iter().collect::<String>(), "ABC");
    assert_eq!(formula.evaluate(&assign(&[('A', true), ('B', false), ('C', false)])), Ok(true));
    assert_eq!(formula.evaluate(&assign(&[('A', true), ('B', true), ('C', false)])), Ok(false));
    assert_eq!(
        formula.evaluate(&assign(&[('A', true)])),
        Err(UnassignedVariable { name: 'B' })
    );
    assert_eq!(parse("1 & !0").evaluate(&BTreeMap::new()), Ok(true));
}

#[test]
fn test_truth_table() {
    let table = TruthTable::new(&parse("A & B"));
    assert_eq!(table.variables(), &['A', 'B']);
    assert_eq!(table.rows().len(), 4);
    assert_eq!(table.satisfying().count(), 1);
    assert_eq!(
        table.to_string(),
        "A | B | A & B\n------------------\n0 | 0 | 0\n0 | 1 | 0\n1 | 0 | 0\n1 | 1 | 1\n"
    );
    assert_eq!(
        table.display(TableMode::TrueOnly).to_string(),
        "A | B | A & B\n------------------\n1 | 1 | 1\n"
    );

    assert!(TruthTable::new(&parse("A & !A")).is_contradiction());
    assert!(TruthTable::new(&parse("A | !A")).is_tautology());
    assert!(!TruthTable::new(&parse("A | B")).is_tautology());
    assert!(TruthTable::new(&parse("1")).is_tautology(), "A constant has a single row.");
}

#[test]
fn test_cnf_clauses() {
    let table = TruthTable::new(&parse("A | B"));
    assert_eq!(table.cnf_clauses(), vec![clause("A | B")]);

    let table = TruthTable::new(&parse("A & B"));
    assert_eq!(table.cnf_clauses(), vec![clause("A | B"), clause("A | !B"), clause("!A | B")]);
    assert!(TruthTable::new(&parse("A | !A")).cnf_clauses().is_empty());
}

#[test]
fn test_clauses() {
    let c = clause("a | !b");
    assert_eq!(c, Clause::from_iter([Literal::positive('A'), Literal::negative('B')]));
    assert_eq!(c.to_string(), "{A, !B}");
    assert_eq!(Clause::default().to_string(), "{}");
    assert!(clause("A | !A").is_tautology());
    assert_eq!(c.resolve(&clause("B | C")), vec![clause("A | C")]);
    assert!(c.resolve(&clause("A")).is_empty());

    assert_eq!("A | 1".parse::<Clause>(), Err(UnexpectedChar { found: '1', position: 4 }));
    assert_eq!("A |".parse::<Clause>(), Err(UnexpectedChar { found: '|', position: 3 }));
    assert_eq!("!".parse::<Clause>(), Err(UnexpectedChar { found: '!', position: 1 }));
    assert_eq!("!!".parse::<Clause>(), Err(UnexpectedChar { found: '!', position: 2 }));
    assert_eq!(
        "A | !".parse::<Clause>(),
        Err(UnexpectedChar { found: '!', position: 5 }),
        "A negation without a literal shouldn't leave an empty clause behind."
    );
    assert_eq!(clause("!!A"), clause("A"));
}

#[test]
fn test_resolution() {
    // Modus ponens: A and A -> B give B.
    let knowledge = [clause("A"), clause("!A | B")];
    assert!(entails(&knowledge, &clause("B")));
    assert!(!entails(&knowledge, &clause("C")));
    assert!(!refutes(&knowledge));

    let proof = refute(&[clause("A | B"), clause("!A"), clause("!B")]);
    assert!(proof.refuted);
    assert!(proof.steps.last().is_some_and(|step| step.resolvent.is_empty()));
    assert!(refutes(&[Clause::default()]));
}

#[test]
fn test_formula_entailment() {
    let premises = [parse("!A | B"), parse("!B | C")];
    assert!(formula_entails(&premises, &parse("!A | C")), "Implication is transitive.");
    assert!(!formula_entails(&premises, &parse("A | C")));
    assert!(formula_entails(&[], &parse("A | !A")));
}
