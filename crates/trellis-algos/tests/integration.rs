use rand::rngs::StdRng;
use rand::SeedableRng;
use trellis_algos::{bfs, dfs, dijkstra, find_components, randomize};
use trellis_core::{DirectedGraph, Graph, UndirectedGraph};
use uuid::Uuid;

fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort_unstable();
    values
}

mod traversal_tests {
    use super::*;

    #[test]
    fn test_bfs_and_dfs_agree_on_membership() {
        let mut rng = StdRng::seed_from_u64(19);
        let mut graph = DirectedGraph::new();
        let vertices: Vec<u32> = (0..10).collect();
        randomize(&mut graph, &vertices, 18, &mut rng).unwrap();

        let breadth = sorted(bfs(&graph));
        let depth = sorted(dfs(&graph));

        assert_eq!(breadth, depth);
        assert_eq!(breadth.len(), graph.vertex_count());
    }

    #[test]
    fn test_traversal_covers_generated_graph() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut graph = UndirectedGraph::new();
        let vertices: Vec<u32> = (0..7).collect();
        randomize(&mut graph, &vertices, 5, &mut rng).unwrap();

        let order = bfs(&graph);

        assert_eq!(sorted(order), vertices);
    }
}

mod component_tests {
    use super::*;

    #[test]
    fn test_separate_pools_never_merge() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut graph = UndirectedGraph::new();
        let left: Vec<u32> = (0..5).collect();
        let right: Vec<u32> = (10..15).collect();

        randomize(&mut graph, &left, 6, &mut rng).unwrap();
        // Edges already in the graph count toward the target, so the second
        // request asks for the running total.
        randomize(&mut graph, &right, 12, &mut rng).unwrap();

        assert_eq!(graph.edge_count(), 12);

        let components = find_components(&graph);
        let total: usize = components.iter().map(|c| c.len()).sum();
        assert_eq!(total, 10);
        for component in &components {
            let lefties = component.iter().filter(|v| **v < 5).count();
            assert!(lefties == 0 || lefties == component.len());
        }
    }

    #[test]
    fn test_component_count_after_vertex_removal() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();

        assert_eq!(find_components(&graph).len(), 1);

        graph.remove_vertex(&"b");

        assert_eq!(find_components(&graph).len(), 2);
    }
}

mod shortest_path_tests {
    use super::*;

    #[test]
    fn test_random_graph_paths_are_consistent() {
        let mut rng = StdRng::seed_from_u64(31);
        let mut graph = DirectedGraph::new();
        let vertices: Vec<u32> = (0..8).collect();
        randomize(&mut graph, &vertices, 20, &mut rng).unwrap();

        let paths = dijkstra(&graph, &0).unwrap();

        for target in graph.vertices() {
            let distance = paths.distance_to(&target);
            match paths.path_to(&target) {
                Some(path) => {
                    assert_eq!(path.first(), Some(&0));
                    assert_eq!(path.last(), Some(&target));
                    let mut total = 0.0;
                    for pair in path.windows(2) {
                        total += graph.weight(&pair[0], &pair[1]).unwrap();
                    }
                    assert_eq!(total, distance);
                }
                None => assert_eq!(distance, f64::INFINITY),
            }
        }
    }

    #[test]
    fn test_distances_survive_graph_edits() {
        let mut graph = UndirectedGraph::new();
        graph.add_edge_weighted("a", "b", 2.0).unwrap();
        graph.add_edge_weighted("b", "c", 2.0).unwrap();

        let before = dijkstra(&graph, &"a").unwrap();
        graph.add_edge_weighted("a", "c", 1.0).unwrap();
        let after = dijkstra(&graph, &"a").unwrap();

        // The old result is an owned snapshot, not a live view.
        assert_eq!(before.distance_to(&"c"), 4.0);
        assert_eq!(after.distance_to(&"c"), 1.0);
    }
}

mod randomizer_tests {
    use super::*;

    #[test]
    fn test_uuid_graph_end_to_end() {
        let mut rng = StdRng::seed_from_u64(4);
        let vertices: Vec<Uuid> = (0..6).map(|_| Uuid::new_v4()).collect();
        let mut graph = UndirectedGraph::new();

        randomize(&mut graph, &vertices, 9, &mut rng).unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 9);

        let order = bfs(&graph);
        assert_eq!(order.len(), 6);

        let components = find_components(&graph);
        let total: usize = components.iter().map(|c| c.len()).sum();
        assert_eq!(total, 6);

        let paths = dijkstra(&graph, &vertices[0]).unwrap();
        assert_eq!(paths.distance_to(&vertices[0]), 0.0);
    }

    #[test]
    fn test_generated_undirected_edges_are_mirrored() {
        let mut rng = StdRng::seed_from_u64(29);
        let mut graph = UndirectedGraph::new();
        let vertices: Vec<u32> = (0..6).collect();

        randomize(&mut graph, &vertices, 8, &mut rng).unwrap();

        for a in &vertices {
            for b in graph.neighbors(a) {
                assert!(graph.contains_edge(&b, a));
                assert_eq!(graph.weight(a, &b), graph.weight(&b, a));
            }
        }
    }
}
