use super::*;
use crate::graph::algos::shared::fixtures::*;

#[test]
fn test_breadth_example_graph() {
    let g = example_graph();
    let result = breadth_relaxation(&g, EXAMPLE_SOURCE);

    assert_eq!(result.algorithm, Algorithm::Breadth);
    assert_eq!(result.distance, EXAMPLE_DISTANCES);
    assert_eq!(result.parent, EXAMPLE_PARENTS);
    assert_shortest_path_properties(&g, &result);
}

#[test]
fn test_breadth_reprocesses_improved_vertices() {
    // 1 is first reached directly (-1), then improved through 5 (-4 + 2),
    // and its out-edges are relaxed a second time.
    let g = example_graph();
    let result = breadth_relaxation(&g, EXAMPLE_SOURCE);
    assert_eq!(result.relaxations, 12);
    assert_eq!(result.path_to(2), Some(vec![7, 5, 1, 2]));
}

#[test]
fn test_breadth_more_work_than_topological_order() {
    let g = example_graph();
    let breadth = breadth_relaxation(&g, EXAMPLE_SOURCE);
    let dag = crate::graph::dag_shortest_paths(&g, EXAMPLE_SOURCE);
    assert!(breadth.relaxations > dag.relaxations);
}

#[test]
fn test_breadth_fifo_tie_break() {
    let g = tie_graph();
    let result = breadth_relaxation(&g, 0);
    assert_eq!(result.distance, vec![Some(0), Some(1), Some(2), Some(1)]);
    assert_eq!(result.parent, vec![None, Some(0), Some(3), Some(0)]);
}

#[test]
fn test_breadth_varying_positive_weights() {
    // Direct 0 -> 1 costs 10, the detour through 2 costs 2
    let g = Graph::from_edges(vec![(0, 1, 10), (0, 2, 1), (2, 1, 1), (1, 3, 1)], 4);
    let result = breadth_relaxation(&g, 0);
    assert_eq!(result.distance, vec![Some(0), Some(2), Some(1), Some(3)]);
    assert_eq!(result.path_to(3), Some(vec![0, 2, 1, 3]));
    assert_eq!(result.relaxations, 5);
    assert_shortest_path_properties(&g, &result);
}

#[test]
fn test_breadth_positive_cycle_terminates() {
    let g = Graph::from_edges(vec![(0, 1, 1), (1, 2, 1), (2, 0, 1), (2, 3, 4)], 4);
    let result = breadth_relaxation(&g, 0);
    assert_eq!(result.distance, vec![Some(0), Some(1), Some(2), Some(6)]);
    assert_eq!(result.parent(0), None);
    assert_shortest_path_properties(&g, &result);
}

#[test]
fn test_breadth_parallel_edges() {
    let g = Graph::from_edges(vec![(0, 1, 5), (0, 1, 2)], 2);
    let result = breadth_relaxation(&g, 0);
    assert_eq!(result.distance(1), Some(2));
    assert_eq!(result.relaxations, 2);
}

#[test]
fn test_breadth_unreachable() {
    let g = split_graph();
    let result = breadth_relaxation(&g, 2);
    assert_eq!(result.distance, vec![None, None, Some(0), Some(1)]);
    assert_eq!(result.path_to(0), None);
}

#[test]
fn test_breadth_single_vertex() {
    let g = Graph::from_edges(Vec::new(), 1);
    let result = breadth_relaxation(&g, 0);
    assert_eq!(result.distance, vec![Some(0)]);
    assert_eq!(result.parent, vec![None]);
}

#[test]
#[should_panic]
fn test_breadth_destination_out_of_range_panics() {
    let g = Graph::from_edges(vec![(0, 5, 1)], 2);
    breadth_relaxation(&g, 0);
}
