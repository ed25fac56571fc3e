#![cfg(test)]

use super::*;

fn graph(rows: &[[u8; 7]; 7]) -> RelationMatrix {
    RelationMatrix::from_rows(rows).unwrap()
}

/// The lab sequences, numbered from one.
const SEQUENCES: [&[usize]; 5] = [
    &[3, 5, 6, 7, 1, 2],
    &[3, 6, 7, 1, 2, 6, 5],
    &[4, 3, 6, 5, 4],
    &[5, 5, 7, 6, 3, 5],
    &[5, 3, 6, 7, 1, 6, 5],
];

fn zero_based(sequence: &[usize]) -> Vec<usize> {
    sequence.iter().map(|vertex| vertex - 1).collect()
}

#[test]
fn test_classify_lab_sequences() {
    let g1 = graph(&G1);
    let g2 = graph(&G2);
    assert!(g1.symmetric().holds && g2.symmetric().holds);

    let kinds: Vec<_> = SEQUENCES.iter().map(|s| classify(&g1, &zero_based(s))).collect();
    assert_eq!(kinds, vec![
        RouteKind::SimpleChain,
        RouteKind::Chain,
        RouteKind::SimpleCycle,
        RouteKind::NotRoute,
        RouteKind::NotRoute,
    ]);

    let kinds: Vec<_> = SEQUENCES.iter().map(|s| classify(&g2, &zero_based(s))).collect();
    assert_eq!(kinds, vec![
        RouteKind::SimpleChain,
        RouteKind::NotRoute,
        RouteKind::NotRoute,
        RouteKind::NotRoute,
        RouteKind::Cycle,
    ]);
}

#[test]
fn test_predicates() {
    let g1 = graph(&G1);
    assert_eq!(classify(&g1, &[0, 1, 0]), RouteKind::Route, "The edge 1-2 is used twice.");
    assert!(is_route(&g1, &[3]));
    assert!(!is_route(&g1, &[]));
    assert!(!is_route(&g1, &[0, 9]));
    assert!(!is_cycle(&g1, &[3]), "A lone vertex has no edges to form a cycle.");
    assert!(is_simple_cycle(&g1, &[2, 3, 4, 2]));
    assert!(is_chain(&g1, &[2, 3, 4, 2, 5]));
    assert!(!is_simple_chain(&g1, &[2, 3, 4, 2, 5]));
    assert_eq!(RouteKind::SimpleCycle.to_string(), "simple cycle");
}

#[test]
fn test_simple_paths() {
    let g1 = graph(&G1);
    assert_eq!(simple_paths_of_length(&g1, 0, 2), vec![vec![0, 1], vec![0, 6]]);
    assert_eq!(
        simple_paths_of_length(&g1, 0, 3),
        vec![vec![0, 1, 5], vec![0, 1, 6], vec![0, 6, 1], vec![0, 6, 5]]
    );
    assert!(simple_paths_of_length(&g1, 0, 8).is_empty(), "There are only 7 vertices.");
    for path in simple_paths_of_length(&g1, 2, 7) {
        assert!(is_simple_chain(&g1, &path));
    }
}

#[test]
fn test_walk_counts_agree() {
    for rows in [&G1, &G2] {
        let g = graph(rows);
        for edges in 0..=5 {
            assert_eq!(
                walk_count_matrix(&g, edges),
                walk_count_matrix_by_power(&g, edges),
                "Both counts should agree for walks of {edges} edges."
            );
        }

        let squares = walk_count_matrix(&g, 2);
        for vertex in 0..7 {
            let degree = g.successors(vertex).count() as u64;
            assert_eq!(squares[vertex][vertex], degree, "Each edge gives one walk there and back.");
        }
    }
}

#[test]
fn test_walks_between() {
    let g1 = graph(&G1);
    assert_eq!(walks_between(&g1, 0, 0, 2), vec![vec![0, 1, 0], vec![0, 6, 0]]);

    let counts = walk_count_matrix(&g1, 3);
    assert_eq!(walks_between(&g1, 2, 5, 3).len() as u64, counts[2][5]);
    assert_eq!(walks_between(&g1, 4, 4, 0), vec![vec![4]]);
}

#[test]
fn test_maximal_simple_chains() {
    let g2 = graph(&G2);
    let chains = maximal_simple_chains(&g2, 4);
    assert!(!chains.is_empty());
    for chain in &chains {
        assert_eq!(chain[0], 4);
        assert!(is_simple_chain(&g2, chain));
        let last = chain[chain.len() - 1];
        assert!(
            g2.successors(last).all(|next| chain.contains(&next)),
            "{chain:?} could still be extended."
        );
    }
    assert!(chains.iter().any(|chain| chain.len() == 7), "G2 has a Hamiltonian path from 5.");
}
