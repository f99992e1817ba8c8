/// Every graph representation should pass the tests for the traits it implements.
///
/// `$dedups` states whether the representation collapses repeated insertions of the same edge
/// (and enumerates neighbors in ascending order) or keeps every insertion as its own entry
/// (enumerated newest first).
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $dedups:literal, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{
                algo::*, ops::*, repr::*, testing::test_graph_ops, Edge, GraphError, Node, NumNodes,
                MAX_VERTICES,
            };
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;
            use itertools::Itertools;

            /// Creates a list of `m` random edges for nodes `0..n` (possibly with loops and duplicates)
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m: usize) -> Vec<Edge> {
                (0..m)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            /// Neighborhoods the representation is expected to report after inserting `edges`
            fn expected_neighborhoods(n: NumNodes, edges: &[Edge]) -> Vec<Vec<Node>> {
                let mut nbs = vec![Vec::new(); n as usize];
                for &Edge(u, v) in edges {
                    nbs[u as usize].push(v);
                    nbs[v as usize].push(u);
                }

                for nb in nbs.iter_mut() {
                    if $dedups {
                        nb.sort_unstable();
                        nb.dedup();
                    } else {
                        nb.reverse();
                    }
                }
                nbs
            }

            $(
                test_graph_ops!($graph<$dedups>: $trait);
            )*
        }
    };
    ($graph:ident<$dedups:literal>: GraphNew) => {
        #[test]
        fn graph_new() {
            for n in 0..=MAX_VERTICES {
                let graph = <$graph>::try_new(n).unwrap();

                assert_eq!(graph.number_of_edges(), 0);
                assert_eq!(graph.number_of_nodes(), n);
                assert_eq!(graph.capacity(), MAX_VERTICES);
                assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
            }

            assert!(matches!(
                <$graph>::try_new(MAX_VERTICES + 1),
                Err(GraphError::InvalidVertexCount { .. })
            ));

            for capacity in [0, 1, 32, 100] {
                assert!(<$graph>::try_with_capacity(capacity, capacity).is_ok());
                assert!(<$graph>::try_with_capacity(capacity + 1, capacity).is_err());
            }
        }
    };
    ($graph:ident<$dedups:literal>: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in 1..=MAX_VERTICES {
                for m in [0, n as usize, 2 * n as usize, 5 * n as usize] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m);
                        let graph = <$graph>::from_edges(n, edges.iter()).unwrap();
                        let expected = expected_neighborhoods(n, &edges);

                        let num_edges = if $dedups {
                            edges.iter().map(|e| e.normalized()).unique().count()
                        } else {
                            edges.len()
                        };
                        assert_eq!(graph.number_of_edges() as usize, num_edges);

                        for u in graph.vertices() {
                            assert_eq!(graph.neighbors_of(u).collect_vec(), expected[u as usize]);
                            assert_eq!(graph.degree_of(u) as usize, expected[u as usize].len());

                            for v in graph.vertices() {
                                let uv = graph.neighbors_of(u).filter(|&w| w == v).count();
                                let vu = graph.neighbors_of(v).filter(|&w| w == u).count();
                                if u != v {
                                    assert_eq!(uv, vu);
                                }
                                assert_eq!(graph.has_edge(u, v), uv > 0);
                                assert_eq!(graph.has_edge(u, v), graph.has_edge(v, u));
                            }
                        }

                        for Edge(u, v) in edges {
                            assert!(graph.has_edge(u, v));
                            assert!(graph.has_edge(v, u));
                        }
                    }
                }
            }
        }
    };
    ($graph:ident<$dedups:literal>: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(4);

            for n in 1..=MAX_VERTICES {
                for _ in 0..10 {
                    let mut graph = <$graph>::try_new(n).unwrap();
                    let mut seen = Vec::new();

                    for Edge(u, v) in random_edges(rng, n, 3 * n as usize) {
                        let is_new = !seen.contains(&Edge(u, v).normalized());
                        seen.push(Edge(u, v).normalized());

                        assert_eq!(graph.add_edge(u, v).unwrap(), !$dedups || is_new);
                    }

                    let snapshot = graph.clone();
                    let invalid = rng.random_range(n..2 * MAX_VERTICES);
                    let valid = rng.random_range(0..n);

                    assert_eq!(
                        graph.add_edge(valid, invalid),
                        Err(GraphError::InvalidVertexIndex { vertex: invalid, num_vertices: n })
                    );
                    assert_eq!(
                        graph.add_edge(invalid, valid),
                        Err(GraphError::InvalidVertexIndex { vertex: invalid, num_vertices: n })
                    );
                    assert_eq!(graph, snapshot);
                }
            }
        }
    };
    ($graph:ident<$dedups:literal>: Traversal) => {
        /// Reference preorder in its textbook recursive form
        fn recursive_dfs(graph: &$graph, u: Node, visited: &mut Vec<bool>, order: &mut Vec<Node>) {
            visited[u as usize] = true;
            order.push(u);
            for v in graph.neighbors_of(u) {
                if !visited[v as usize] {
                    recursive_dfs(graph, v, visited, order);
                }
            }
        }

        /// Hop distances from `start` computed by relaxing all edges until nothing changes
        fn distances(graph: &$graph, start: Node) -> Vec<Option<usize>> {
            let mut dist = vec![None; graph.len()];
            dist[start as usize] = Some(0);
            loop {
                let mut changed = false;
                for Edge(u, v) in graph.edges(false) {
                    if let Some(du) = dist[u as usize] {
                        if dist[v as usize].is_none_or(|dv| du + 1 < dv) {
                            dist[v as usize] = Some(du + 1);
                            changed = true;
                        }
                    }
                }
                if !changed {
                    return dist;
                }
            }
        }

        #[test]
        fn test_traversal() {
            let rng = &mut Pcg64Mcg::seed_from_u64(5);

            for n in 1..=MAX_VERTICES {
                for m in [0, n as usize / 2, n as usize, 2 * n as usize] {
                    for _ in 0..10 {
                        let graph = <$graph>::from_edges(n, random_edges(rng, n, m)).unwrap();
                        let start = rng.random_range(0..n);

                        let dist = distances(&graph, start);
                        let reachable = graph
                            .vertices()
                            .filter(|&u| dist[u as usize].is_some())
                            .collect_vec();

                        let bfs = graph.bfs_order(start).unwrap();
                        assert_eq!(bfs[0], start);
                        assert_eq!(bfs.iter().copied().sorted().collect_vec(), reachable);
                        assert!(bfs
                            .iter()
                            .tuple_windows()
                            .all(|(&u, &v)| dist[u as usize] <= dist[v as usize]));

                        let dfs = graph.dfs_order(start).unwrap();
                        assert_eq!(dfs.iter().copied().sorted().collect_vec(), reachable);

                        let mut visited = vec![false; graph.len()];
                        let mut order = Vec::new();
                        recursive_dfs(&graph, start, &mut visited, &mut order);
                        assert_eq!(dfs, order);
                    }
                }

                assert!(graph_with_nodes(n).bfs(n).is_err());
                assert!(graph_with_nodes(n).dfs(n).is_err());
            }
        }

        fn graph_with_nodes(n: NumNodes) -> $graph {
            <$graph>::try_new(n).unwrap()
        }
    };
}

pub(crate) use test_graph_ops;
