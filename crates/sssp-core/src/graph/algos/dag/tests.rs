use super::*;
use crate::graph::algos::shared::fixtures::*;
use crate::graph::bellman_ford;

/// Every edge `u -> v` must have `u` popped before `v`.
fn assert_topological(graph: &Graph, order: &[VertexId]) {
    let mut position = vec![0; graph.vertex_count()];
    for (i, &v) in order.iter().enumerate() {
        position[v] = i;
    }
    for (u, v, _) in graph.edges() {
        assert!(
            position[u] > position[v],
            "edge {u} -> {v} violates post-order"
        );
    }
}

#[test]
fn test_topological_order_example() {
    let g = example_graph();
    let order = topological_order(&g);
    assert_eq!(order, vec![6, 0, 2, 4, 1, 3, 5, 7]);
    assert_topological(&g, &order);
}

#[test]
fn test_topological_order_isolated_vertices() {
    let g = Graph::from_edges(vec![(2, 1, 1)], 4);
    assert_eq!(topological_order(&g), vec![0, 1, 2, 3]);
}

#[test]
fn test_topological_order_cyclic_input_lists_each_vertex_once() {
    let g = Graph::from_edges(vec![(0, 1, 1), (1, 2, 1), (2, 0, -5), (2, 3, 1)], 4);
    let order = topological_order(&g);
    assert_eq!(order, vec![3, 2, 1, 0]);
}

#[test]
fn test_topological_order_deep_chain() {
    let n = 200_000;
    let g = Graph::from_edges((0..n - 1).map(|i| (i, i + 1, 1)), n);
    let order = topological_order(&g);
    assert_eq!(order.len(), n);
    assert_eq!(order.first(), Some(&(n - 1)));
    assert_eq!(order.last(), Some(&0));
}

#[test]
fn test_dag_example_graph() {
    let g = example_graph();
    let result = dag_shortest_paths(&g, EXAMPLE_SOURCE);

    assert_eq!(result.algorithm, Algorithm::Dag);
    assert_eq!(result.distance, EXAMPLE_DISTANCES);
    assert_eq!(result.parent, EXAMPLE_PARENTS);
    assert_eq!(result.relaxations, 9);
    assert_shortest_path_properties(&g, &result);
}

#[test]
fn test_dag_matches_bellman_ford_with_negative_edges() {
    let g = Graph::from_edges(
        vec![(0, 1, 5), (0, 2, 3), (1, 3, -4), (2, 3, 2), (3, 4, 1), (2, 4, 7)],
        5,
    );
    let dag = dag_shortest_paths(&g, 0);
    let exact = bellman_ford(&g, 0);
    assert_eq!(dag.distance, exact.distance);
    assert_eq!(dag.parent, exact.parent);
    assert_shortest_path_properties(&g, &dag);
}

#[test]
fn test_dag_matches_bellman_ford_non_negative() {
    let g = Graph::from_edges(
        vec![
            (0, 1, 2),
            (0, 2, 6),
            (1, 2, 3),
            (1, 3, 9),
            (2, 3, 1),
            (2, 4, 8),
            (3, 4, 2),
            (0, 4, 20),
        ],
        6,
    );
    for source in 0..g.vertex_count() {
        assert_eq!(
            dag_shortest_paths(&g, source).distance,
            bellman_ford(&g, source).distance,
            "source {source}"
        );
    }
}

#[test]
fn test_dag_deep_chain() {
    let n = 200_000;
    let g = Graph::from_edges((0..n - 1).map(|i| (i, i + 1, -1)), n);
    let result = dag_shortest_paths(&g, 0);
    assert_eq!(result.distance(n - 1), Some(-(n as i64 - 1)));
    assert_eq!(result.path_to(n - 1).map(|p| p.len()), Some(n));
}

#[test]
fn test_dag_source_mid_graph() {
    let g = example_graph();
    let result = dag_shortest_paths(&g, 1);
    assert_eq!(
        result.distance,
        vec![None, Some(0), Some(-4), None, Some(1), None, Some(8), None]
    );
    assert_shortest_path_properties(&g, &result);
}

#[test]
fn test_dag_cyclic_input_misses_vertices_silently() {
    // 1 -> 0 -> 2 -> 1 is a cycle; order puts 2 and 0 before 1 is relaxed
    let g = Graph::from_edges(vec![(1, 0, -3), (0, 2, 4), (2, 1, 1)], 3);
    let result = dag_shortest_paths(&g, 1);
    assert_eq!(result.distance, vec![Some(-3), Some(0), None]);
    assert_eq!(bellman_ford(&g, 1).distance(2), Some(1));
}
