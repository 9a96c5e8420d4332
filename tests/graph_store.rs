//! Graph store tests: vertex/edge lifecycle, mirroring and cascades.

use std::collections::HashSet;

use graph_store::{is_connected, Edge, Graph, GraphError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Undirected graph with vertices 1..=n.
fn undirected_with(n: u64) -> Graph {
    let mut graph = Graph::new(false);
    for id in 1..=n {
        graph.add_vertex(id).unwrap();
    }
    graph
}

/// Directed graph with vertices 1..=n.
fn directed_with(n: u64) -> Graph {
    let mut graph = Graph::new(true);
    for id in 1..=n {
        graph.add_vertex(id).unwrap();
    }
    graph
}

// ==================== Construction ====================

#[test]
fn test_new_graph_is_empty() {
    init_logger();
    let graph = Graph::new(false);
    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.is_directed());
    assert!(graph.vertices().next().is_none());

    let graph = Graph::new(true);
    assert!(graph.is_directed());
}

#[test]
fn test_with_capacity() {
    let graph = Graph::with_capacity(true, 64).unwrap();
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.is_directed());
}

// ==================== Vertices ====================

#[test]
fn test_add_and_remove_vertex() {
    init_logger();
    let mut graph = Graph::new(false);

    graph.add_vertex(2).unwrap();
    assert_eq!(graph.vertex_count(), 1);
    let vertex = graph.vertex(2).unwrap();
    assert_eq!(vertex.id(), 2);
    assert_eq!(vertex.neighbor_count(), 0);

    assert_eq!(graph.remove_vertex(2).unwrap(), 0);
    assert_eq!(graph.vertex_count(), 0);
    assert!(graph.vertex(2).is_none());
}

#[test]
fn test_add_vertex_already_exists() {
    let mut graph = Graph::new(false);
    graph.add_vertex(2).unwrap();

    assert_eq!(graph.add_vertex(2), Err(GraphError::VertexExists(2)));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_remove_missing_vertex() {
    let mut graph = undirected_with(3);
    graph.add_edge(1, 2, 1.0).unwrap();

    assert_eq!(graph.remove_vertex(9), Err(GraphError::VertexNotFound(9)));
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_add_vertex_multiple() {
    let mut graph = Graph::new(false);
    for i in 1..100u64 {
        graph.add_vertex(i).unwrap();
        assert_eq!(graph.vertex_count(), i as usize);
    }
    for i in (1..100u64).rev() {
        graph.remove_vertex(i).unwrap();
        assert_eq!(graph.vertex_count(), i as usize - 1);
    }
}

#[test]
fn test_vertex_ids_match_vertices() {
    let graph = undirected_with(10);
    let ids: Vec<u64> = graph.vertex_ids().collect();
    let from_vertices: Vec<u64> = graph.vertices().map(|v| v.id()).collect();
    assert_eq!(ids, from_vertices);

    let mut sorted = ids.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (1..=10).collect::<Vec<_>>());
}

#[test]
fn test_random_vertex_sequences_track_count() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut graph = Graph::new(true);
    let mut model: HashSet<u64> = HashSet::new();

    for _ in 0..2000 {
        let id = rng.gen_range(0..64u64);
        if rng.gen_bool(0.5) {
            let result = graph.add_vertex(id);
            if model.insert(id) {
                assert_eq!(result, Ok(()));
            } else {
                assert_eq!(result, Err(GraphError::VertexExists(id)));
            }
        } else {
            let result = graph.remove_vertex(id);
            if model.remove(&id) {
                assert!(result.is_ok());
            } else {
                assert_eq!(result, Err(GraphError::VertexNotFound(id)));
            }
        }
        assert_eq!(graph.vertex_count(), model.len());
    }
}

// ==================== Edges ====================

#[test]
fn test_undirected_edge_is_mirrored() {
    init_logger();
    let mut graph = undirected_with(2);
    graph.add_edge(1, 2, 0.5).unwrap();

    assert_eq!(graph.neighbor_count(1).unwrap(), 1);
    assert_eq!(graph.neighbor_count(2).unwrap(), 1);
    assert_eq!(graph.edge(1, 2), Some(&Edge::new(1, 2, 0.5)));
    assert_eq!(graph.edge(2, 1), Some(&Edge::new(2, 1, 0.5)));
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.check_invariants());
}

#[test]
fn test_undirected_reverse_edge_already_exists() {
    let mut graph = undirected_with(2);
    graph.add_edge(1, 2, 0.5).unwrap();

    assert_eq!(
        graph.add_edge(2, 1, 0.5),
        Err(GraphError::EdgeExists {
            source_id: 2,
            dest_id: 1
        })
    );
    assert_eq!(
        graph.add_edge(1, 2, 0.7),
        Err(GraphError::EdgeExists {
            source_id: 1,
            dest_id: 2
        })
    );
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge(1, 2).unwrap().weight, 0.5);
}

#[test]
fn test_undirected_remove_via_mirror() {
    let mut graph = undirected_with(2);
    graph.add_edge(1, 2, 0.5).unwrap();

    let removed = graph.remove_edge(2, 1).unwrap();
    assert_eq!(removed, Edge::new(2, 1, 0.5));
    assert_eq!(graph.neighbor_count(1).unwrap(), 0);
    assert_eq!(graph.neighbor_count(2).unwrap(), 0);
    assert!(!graph.is_connected(1, 2));
    assert!(!graph.is_connected(2, 1));
}

#[test]
fn test_directed_edge_is_one_way() {
    let mut graph = directed_with(2);
    graph.add_edge(1, 2, 3.0).unwrap();

    assert!(graph.is_connected(1, 2));
    assert!(!graph.is_connected(2, 1));
    assert_eq!(graph.neighbor_count(2).unwrap(), 0);
    assert!(graph.neighbors(2).unwrap().is_empty());

    // The reverse direction is a distinct edge.
    graph.add_edge(2, 1, 4.0).unwrap();
    assert_eq!(graph.edge(2, 1).unwrap().weight, 4.0);
    assert_eq!(graph.edge(1, 2).unwrap().weight, 3.0);
    assert_eq!(
        graph.remove_edge(1, 2).unwrap(),
        Edge::new(1, 2, 3.0)
    );
    assert!(graph.is_connected(2, 1));
}

#[test]
fn test_undirected_self_loop_single_record() {
    let mut graph = undirected_with(1);
    graph.add_edge(1, 1, 2.5).unwrap();

    assert_eq!(graph.neighbor_count(1).unwrap(), 1);
    assert_eq!(
        graph.add_edge(1, 1, 2.5),
        Err(GraphError::EdgeExists {
            source_id: 1,
            dest_id: 1
        })
    );
    assert!(graph.check_invariants());

    graph.remove_edge(1, 1).unwrap();
    assert_eq!(graph.neighbor_count(1).unwrap(), 0);
}

#[test]
fn test_edge_with_missing_vertex() {
    let mut graph = undirected_with(2);

    assert_eq!(graph.add_edge(1, 3, 1.0), Err(GraphError::VertexNotFound(3)));
    assert_eq!(graph.add_edge(3, 1, 1.0), Err(GraphError::VertexNotFound(3)));
    assert_eq!(graph.remove_edge(4, 1), Err(GraphError::VertexNotFound(4)));
    assert_eq!(graph.remove_edge(1, 4), Err(GraphError::VertexNotFound(4)));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_missing_edge() {
    let mut graph = directed_with(2);
    graph.add_edge(1, 2, 1.0).unwrap();

    assert_eq!(
        graph.remove_edge(2, 1),
        Err(GraphError::EdgeNotFound {
            source_id: 2,
            dest_id: 1
        })
    );
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_nan_weight_rejected() {
    let mut graph = undirected_with(2);
    let result = graph.add_edge(1, 2, f64::NAN);
    assert!(matches!(result, Err(GraphError::InvalidParameters(_))));
    assert_eq!(graph.edge_count(), 0);

    // Infinite weights are allowed.
    graph.add_edge(1, 2, f64::INFINITY).unwrap();
}

#[test]
fn test_is_connected_helper() {
    let mut graph = directed_with(3);
    graph.add_edge(1, 3, 0.25).unwrap();

    let one = graph.vertex(1).unwrap();
    let two = graph.vertex(2).unwrap();
    let three = graph.vertex(3).unwrap();
    assert_eq!(is_connected(one, three), Some(&Edge::new(1, 3, 0.25)));
    assert!(is_connected(one, two).is_none());
    assert!(is_connected(three, one).is_none());
}

#[test]
fn test_neighbors_of_missing_vertex() {
    let graph = undirected_with(1);
    assert_eq!(graph.neighbors(5), Err(GraphError::VertexNotFound(5)));
    assert_eq!(graph.neighbor_count(5), Err(GraphError::VertexNotFound(5)));
    assert!(!graph.is_connected(5, 1));
    assert!(graph.edge(1, 5).is_none());
}

// ==================== Cascading removal ====================

#[test]
fn test_remove_vertex_cascades_undirected() {
    init_logger();
    let mut graph = undirected_with(4);
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(1, 3, 1.0).unwrap();
    graph.add_edge(1, 1, 1.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();
    graph.add_edge(3, 4, 1.0).unwrap();
    let before = graph.edge_count();
    assert_eq!(before, 9);

    // Two mirrored edges (4 records) plus the self-loop.
    let released = graph.remove_vertex(1).unwrap();
    assert_eq!(released, 5);
    assert_eq!(graph.edge_count(), before - released);
    assert_eq!(graph.vertex_count(), 3);

    for vertex in graph.vertices() {
        assert!(vertex.neighbors().iter().all(|e| e.dest_id != 1));
    }
    assert_eq!(graph.neighbor_count(2).unwrap(), 1);
    assert_eq!(graph.neighbor_count(3).unwrap(), 2);
    assert!(graph.check_invariants());
}

#[test]
fn test_remove_vertex_cascades_directed() {
    let mut graph = directed_with(3);
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.add_edge(2, 1, 1.0).unwrap();
    graph.add_edge(3, 1, 1.0).unwrap();
    graph.add_edge(2, 3, 1.0).unwrap();

    let released = graph.remove_vertex(1).unwrap();
    assert_eq!(released, 3);
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_connected(2, 3));
    for vertex in graph.vertices() {
        assert!(vertex.neighbors().iter().all(|e| e.dest_id != 1));
    }
    assert!(graph.check_invariants());

    // The ID can be reused with a clean neighbor list.
    graph.add_vertex(1).unwrap();
    assert_eq!(graph.neighbor_count(1).unwrap(), 0);
    assert!(!graph.is_connected(2, 1));
}

#[test]
fn test_clear_keeps_directionality() {
    let mut graph = directed_with(5);
    graph.add_edge(1, 2, 1.0).unwrap();
    graph.clear();

    assert_eq!(graph.vertex_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.is_directed());
    graph.add_vertex(1).unwrap();
}

// ==================== Randomised consistency ====================

#[test]
fn test_random_mutations_preserve_invariants() {
    init_logger();
    for directed in [false, true] {
        let mut rng = StdRng::seed_from_u64(42);
        let mut graph = Graph::new(directed);
        let mut edges: HashSet<(u64, u64)> = HashSet::new();

        for _ in 0..3000 {
            let a = rng.gen_range(0..20u64);
            let b = rng.gen_range(0..20u64);
            let key = if directed || a <= b { (a, b) } else { (b, a) };
            match rng.gen_range(0..4) {
                0 => {
                    let _ = graph.add_vertex(a);
                }
                1 => {
                    if graph.remove_vertex(a).is_ok() {
                        edges.retain(|&(s, d)| s != a && d != a);
                    }
                }
                2 => match graph.add_edge(a, b, rng.gen_range(0.0..10.0)) {
                    Ok(()) => assert!(edges.insert(key)),
                    Err(GraphError::EdgeExists { .. }) => assert!(edges.contains(&key)),
                    Err(GraphError::VertexNotFound(_)) => {}
                    Err(e) => panic!("unexpected error {:?}", e),
                },
                _ => match graph.remove_edge(a, b) {
                    Ok(_) => assert!(edges.remove(&key)),
                    Err(GraphError::EdgeNotFound { .. }) => assert!(!edges.contains(&key)),
                    Err(GraphError::VertexNotFound(_)) => {}
                    Err(e) => panic!("unexpected error {:?}", e),
                },
            }

            let expected_records: usize = edges
                .iter()
                .map(|&(s, d)| if directed || s == d { 1 } else { 2 })
                .sum();
            assert_eq!(graph.edge_count(), expected_records);
            assert!(graph.check_invariants());
        }
    }
}
