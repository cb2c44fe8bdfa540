//! Behavioural tests for the public component-query API.

mod common;

use common::{canonical_pair, graph_from_list};
use concomp_core::{DisjointSetUnion, Graph};
use rstest::rstest;

#[rstest]
#[case::isolated_vertex(1, vec![vec![]], vec![0])]
#[case::single_edge(2, vec![vec![1], vec![0]], vec![0, 0])]
#[case::two_disjoint_pairs(4, vec![vec![1], vec![0], vec![3], vec![2]], vec![0, 0, 1, 1])]
#[case::star(4, vec![vec![1, 2, 3], vec![0], vec![0], vec![0]], vec![0, 0, 0, 0])]
#[case::five_isolated(5, vec![vec![], vec![], vec![], vec![], vec![]], vec![0, 1, 2, 3, 4])]
#[case::four_components(5, vec![vec![1], vec![0], vec![], vec![], vec![]], vec![0, 0, 1, 2, 3])]
fn queries_report_expected_components(
    #[case] vertex_count: usize,
    #[case] adjacency: Vec<Vec<usize>>,
    #[case] expected: Vec<usize>,
) {
    let graph = graph_from_list(vertex_count, adjacency);
    let (naive, dsu) = canonical_pair(&graph);
    assert_eq!(naive, expected);
    assert_eq!(dsu, expected);
}

#[test]
fn every_construction_form_yields_the_same_partition() {
    let from_list = graph_from_list(5, vec![vec![1, 2], vec![0], vec![0, 3], vec![2], vec![]]);
    let from_matrix = Graph::from_adjacency_matrix(&[
        [0, 1, 1, 0, 0],
        [1, 0, 0, 0, 0],
        [1, 0, 0, 1, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0],
    ]);
    let from_edges = Graph::from_edges(5, [(0, 1), (0, 2), (2, 3)]);
    let mut incremental = Graph::new(4);
    incremental.add_vertex();
    for (u, v) in [(2, 3), (0, 2), (1, 0)] {
        incremental.add_edge(u, v).expect("edge within range");
    }

    let expected = (vec![0, 0, 0, 0, 1], vec![0, 0, 0, 0, 1]);
    for graph in [&from_list, &from_matrix, &from_edges, &incremental] {
        assert_eq!(canonical_pair(graph), expected);
    }
    assert_eq!(from_list.edges(), from_matrix.edges());
}

#[test]
fn growing_a_graph_until_connected() {
    let mut graph = Graph::new(4);
    let mut added = 0;
    for (u, v) in [(0, 1), (2, 3), (1, 0), (3, 1)] {
        graph.add_edge(u, v).expect("edge within range");
        added += 1;
        if graph.component_dsu().is_connected() {
            break;
        }
    }
    assert_eq!(added, 4);
    assert_eq!(graph.component_naive().component_count(), 1);
}

#[test]
fn dsu_unions_through_a_shared_member() {
    let mut dsu = DisjointSetUnion::new(5);
    for element in [0, 1, 2] {
        dsu.union(dsu.find(element), dsu.find(4));
    }
    assert_eq!(dsu.components(), vec![2, 2, 2, 3, 2]);

    let before = dsu.components();
    dsu.union(dsu.find(0), dsu.find(1));
    assert_eq!(dsu.components(), before);
}
