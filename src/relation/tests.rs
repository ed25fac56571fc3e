#![cfg(test)]

use super::points::{DIAMOND_13, GRID_3X3};
use super::*;
use crate::util::panic::assert_panics;

fn less_than(size: usize) -> RelationMatrix {
    RelationMatrix::from_fn(size, |x, y| x < y)
}

#[test]
fn test_set_operations() {
    let evens = RelationMatrix::from_fn(4, |x, y| x % 2 == 0 && y % 2 == 0);
    let diagonal = RelationMatrix::identity(4);

    let union = &evens | &diagonal;
    assert_eq!(union.len(), 6, "The pairs (0, 0) and (2, 2) are in both relations.");
    assert_eq!((&evens & &diagonal).pairs().collect::<Vec<_>>(), vec![(0, 0), (2, 2)]);
    assert_eq!((&evens - &diagonal).pairs().collect::<Vec<_>>(), vec![(0, 2), (2, 0)]);
    assert_eq!((&evens ^ &diagonal).len(), 4);
    assert_eq!((!&RelationMatrix::full(4)), RelationMatrix::new(4));
    assert_eq!((!&diagonal).len(), 12);

    assert!(diagonal.is_subset(&union));
    assert!(diagonal.is_proper_subset(&union));
    assert!(!union.is_proper_subset(&union));
    assert_eq!(less_than(3).inverse(), RelationMatrix::from_fn(3, |x, y| x > y));

    assert_eq!(
        evens.try_combine(&RelationMatrix::new(3), |a, b| a || b),
        Err(SizeMismatch { left: 4, right: 3 })
    );
    assert_panics!({ evens.union(&RelationMatrix::new(5)); });
}

#[test]
fn test_compose() {
    let successor = RelationMatrix::from_fn(5, |x, y| y == x + 1);
    let twice = successor.compose(&successor);
    assert_eq!(twice, RelationMatrix::from_fn(5, |x, y| y == x + 2));
    assert_eq!(successor.compose(&RelationMatrix::identity(5)), successor);
}

#[test]
fn test_lab_relations() {
    const N: usize = 10;
    let a = RelationMatrix::from_fn(N, |x, y| y > x + 5 || x > y + 5);
    let b = RelationMatrix::from_fn(N, |x, y| x % 2 == 0 && y % 2 == 0);
    let c = RelationMatrix::from_fn(N, |x, y| x.abs_diff(y) > 5);

    assert_eq!(a, c, "Both describe elements more than 5 apart.");
    let d = &(&a.compose(&b.inverse()) & &a) - &c;
    assert!(d.is_empty(), "Anything in A is also in C, so nothing survives the difference.");
    assert!(a.symmetric().holds);
}

#[test]
fn test_properties() {
    let identity = RelationMatrix::identity(3);
    assert!(identity.reflexive().holds);
    assert!(identity.symmetric().holds);
    assert!(identity.antisymmetric().holds, "Loops don't break antisymmetry.");
    assert!(identity.transitive().holds);
    assert!(identity.is_equivalence());
    assert!(!identity.connex().holds);

    let order = less_than(4);
    assert!(order.antireflexive().holds);
    assert!(order.antisymmetric().holds);
    assert!(order.transitive().holds);
    assert!(order.connex().holds);
    assert!(order.is_strict_linear_order());
    assert!(!order.is_loose_order());
    assert!(RelationMatrix::from_fn(4, |x, y| x <= y).is_loose_linear_order());

    let verdict = order.symmetric();
    assert!(!verdict.holds);
    assert_eq!(verdict.witnesses.len(), 6);
    assert_eq!(order.reflexive().to_string(), "fails at (1, 1), (2, 2), (3, 3), (4, 4)");
    assert_eq!(order.transitive().to_string(), "holds");
    assert_eq!(order.antitransitive().witnesses, vec![(0, 2), (0, 3), (1, 3)]);

    let chain = RelationMatrix::from_fn(3, |x, y| y == x + 1);
    assert_eq!(chain.transitive().witnesses, vec![(0, 2)]);
    assert!(chain.antitransitive().holds);

    let both_ways = RelationMatrix::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
    assert_eq!(both_ways.antisymmetric().witnesses, vec![(0, 1)]);
}

#[test]
fn test_closure_algorithms_agree() {
    let successor = RelationMatrix::from_fn(6, |x, y| y == x + 1);
    for algorithm in [
        ClosureAlgorithm::Composition,
        ClosureAlgorithm::SquaredComposition,
        ClosureAlgorithm::Warshall,
    ] {
        let (closure, stats) = successor.transitive_closure(algorithm);
        assert_eq!(closure, less_than(6), "The {algorithm} closure of successor should be <.");
        assert!(stats.comparisons > 0);
    }
}

#[test]
fn test_closure_stats() {
    let single = RelationMatrix::from_fn(10, |x, y| x == 0 && y == 0);

    let (closure, stats) = single.transitive_closure(ClosureAlgorithm::Composition);
    assert_eq!(closure, single, "The relation is already transitive.");
    assert_eq!(stats, ClosureStats { compositions: 1, comparisons: 1091 });

    let (_, stats) = single.transitive_closure(ClosureAlgorithm::SquaredComposition);
    assert_eq!(stats, ClosureStats { compositions: 1, comparisons: 1091 });

    let (_, stats) = single.transitive_closure(ClosureAlgorithm::Warshall);
    assert_eq!(stats, ClosureStats { compositions: 0, comparisons: 110 });
}

#[test]
fn test_closure_stats_over_several_rounds() {
    // 0 -> 1 -> 2 -> 3 needs two rounds before the closure stops growing.
    let successor = RelationMatrix::from_fn(4, |x, y| y == x + 1);

    let (closure, stats) = successor.transitive_closure(ClosureAlgorithm::Composition);
    assert_eq!(closure, less_than(4));
    assert_eq!(stats, ClosureStats { compositions: 3, comparisons: 211 });

    let (closure, stats) = successor.transitive_closure(ClosureAlgorithm::SquaredComposition);
    assert_eq!(closure, less_than(4));
    assert_eq!(
        stats,
        ClosureStats { compositions: 3, comparisons: 202 },
        "Squaring composes the larger closure, which finds related pairs sooner."
    );

    let (_, stats) = successor.transitive_closure(ClosureAlgorithm::Warshall);
    assert_eq!(stats, ClosureStats { compositions: 0, comparisons: 40 });
}

#[test]
fn test_equivalence_classes() {
    let relation = RelationMatrix::from_fn(10, |x, y| (x < 3 && y < 3) || (x > 3 && y > 3) || x == y);
    assert!(relation.is_equivalence());
    assert_eq!(relation.classes(), Ok(vec![1, 1, 1, 2, 3, 3, 3, 3, 3, 3]));

    let factor_set = relation.factor_set().unwrap();
    assert_eq!(factor_set.len(), 3);
    assert_eq!(factor_set.to_string(), "{{1,2,3},{4},{5,6,7,8,9,10}}");

    assert_eq!(less_than(3).classes(), Err(NotEquivalence));
    assert_eq!(RelationMatrix::new(0).factor_set().map(|set| set.to_string()), Ok(String::from("{}")));
}

#[test]
fn test_norm_order_levels() {
    let order = PointSet::from(&GRID_3X3[..]).norm_order();
    assert!(order.is_strict_order());
    assert!(!order.is_linear_order(), "Points at the same distance are incomparable.");

    let cover = order.domination();
    assert!(cover.get(4, 1), "The origin is directly below (-1, 0).");
    assert!(!cover.get(4, 0), "The origin only reaches the corners through an edge.");
    assert!(cover.get(1, 0));
    assert_eq!(cover.len(), 4 + 4 * 4);

    assert_eq!(
        cover.topological_levels(),
        Ok(vec![vec![4], vec![1, 3, 5, 7], vec![0, 2, 6, 8]])
    );
    assert_eq!(
        PointSet::from(&DIAMOND_13[..]).norm_order().domination().topological_levels(),
        Ok(vec![vec![6], vec![2, 5, 7, 10], vec![1, 3, 9, 11], vec![0, 4, 8, 12]])
    );
}

#[test]
fn test_topological_cycle() {
    let cycle = RelationMatrix::from_rows(&[[0u8, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
    assert_eq!(cycle.topological_levels(), Err(Cycle { remaining: vec![0, 1, 2] }));

    let tail = RelationMatrix::from_rows(&[[0u8, 1, 0], [0, 0, 1], [0, 1, 0]]).unwrap();
    assert_eq!(tail.topological_levels(), Err(Cycle { remaining: vec![1, 2] }));
}

#[test]
fn test_topological_levels_ignore_loops() {
    let loose = RelationMatrix::from_fn(3, |x, y| x <= y);
    assert!(loose.is_loose_order());
    assert_eq!(loose.topological_levels(), Ok(vec![vec![0], vec![1], vec![2]]));
    assert_eq!(
        loose.topological_levels(),
        less_than(3).topological_levels(),
        "A loose order should level like its strict counterpart."
    );
}

#[test]
fn test_rows_and_display() {
    let relation = RelationMatrix::from_rows(&[[0u8, 1], [0, 0]]).unwrap();
    assert_eq!(relation.to_string(), "  1 2\n1 0 1\n2 0 0\n");
    assert!(relation.get(0, 1));
    assert!(!relation.get(5, 1), "Elements outside the set are never related.");

    assert_eq!(
        RelationMatrix::from_rows(&[vec![0u8, 1], vec![1]]),
        Err(NotSquare { row: 1, len: 1, expected: 2 })
    );

    let wide = RelationMatrix::identity(10).to_string();
    assert!(
        wide.starts_with("    1  2  3"),
        "Columns should be padded to the widest label, after a corner as wide as the row labels."
    );
    assert!(wide.ends_with("10  0  0  0  0  0  0  0  0  0  1\n"));
}
