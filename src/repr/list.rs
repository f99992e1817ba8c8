use std::{iter::Copied, iter::Rev, slice::Iter};

use log::{debug, trace};

use super::*;

/// The neighbor sequence of a single vertex in a [`ListGraph`].
///
/// Entries are enumerated most-recently-added-first, i.e. adding a neighbor *prepends* it.
/// Internally they are stored oldest-first so that prepending is a push.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListNeighborhood {
    entries: Vec<Node>,
}

impl ListNeighborhood {
    /// Creates an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries, counting parallel edges individually
    pub fn num_of_neighbors(&self) -> NumNodes {
        self.entries.len() as NumNodes
    }

    /// Returns an iterator over all entries, newest first
    pub fn neighbors(&self) -> Rev<Copied<Iter<'_, Node>>> {
        self.entries.iter().copied().rev()
    }

    /// Returns *true* if `v` occurs at least once
    pub fn has_neighbor(&self, v: Node) -> bool {
        self.entries.contains(&v)
    }

    /// Puts `v` in front of all existing entries without checking for duplicates
    pub fn prepend(&mut self, v: Node) {
        self.entries.push(v);
    }
}

/// An undirected graph stored as one neighbor sequence per vertex.
///
/// Every call of `add_edge(u, v)` prepends `v` to the sequence of `u` and `u` to the sequence
/// of `v`, so both directions own their own entry. Edges are **not** deduplicated: adding
/// the same edge twice produces two parallel entries in each sequence. This differs from
/// [`MatrixGraph`] where insertion is idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListGraph {
    nbs: Vec<ListNeighborhood>,
    capacity: NumNodes,
    num_edges: NumEdges,
}

impl ListGraph {
    /// Returns the neighbor sequence of `u`
    /// ** Panics if `u >= n` **
    pub fn neighborhood(&self, u: Node) -> &ListNeighborhood {
        &self.nbs[u as usize]
    }
}

impl GraphNodeOrder for ListGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn capacity(&self) -> NumNodes {
        self.capacity
    }
}

impl GraphEdgeOrder for ListGraph {
    /// Number of successful `add_edge` calls, duplicates included
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for ListGraph {
    type NeighborIter<'a> = Rev<Copied<Iter<'a, Node>>>;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl AdjacencyTest for ListGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        debug_assert!(v < self.number_of_nodes());
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl GraphNew for ListGraph {
    fn try_with_capacity(n: NumNodes, capacity: NumNodes) -> GraphResult<Self> {
        check_vertex_count(n, capacity)?;
        debug!("new adjacency list with {n} of at most {capacity} vertices");
        Ok(Self {
            nbs: vec![ListNeighborhood::new(); n as usize],
            capacity,
            num_edges: 0,
        })
    }
}

impl GraphEdgeEditing for ListGraph {
    /// Prepends `v` to the sequence of `u`, then `u` to the sequence of `v`.
    /// Always creates new entries and thus returns `Ok(true)` on success.
    fn add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        self.nbs[u as usize].prepend(v);
        self.nbs[v as usize].prepend(u);
        self.num_edges += 1;
        trace!("list edge ({u},{v}) added");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn new_rejects_too_many_vertices() {
        assert_eq!(
            ListGraph::try_new(11).unwrap_err(),
            GraphError::InvalidVertexCount {
                count: 11,
                capacity: MAX_VERTICES
            }
        );
        let graph = ListGraph::try_with_capacity(3, 3).unwrap();
        assert_eq!(graph.capacity(), 3);
        assert!(graph.vertices().all(|u| graph.degree_of(u) == 0));
    }

    #[test]
    fn edges_are_prepended() {
        let graph = ListGraph::from_edges(4, [(0, 1), (0, 2), (0, 3)]).unwrap();
        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![3, 2, 1]);
        assert_eq!(graph.neighbors_of(2).collect_vec(), vec![0]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut graph = ListGraph::try_new(3).unwrap();
        assert!(graph.add_edge(0, 1).unwrap());
        assert!(graph.add_edge(1, 0).unwrap());

        assert_eq!(graph.neighbors_of(0).collect_vec(), vec![1, 1]);
        assert_eq!(graph.neighbors_of(1).collect_vec(), vec![0, 0]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree_of(0), 2);
    }

    #[test]
    fn self_loop_creates_two_entries() {
        let mut graph = ListGraph::try_new(2).unwrap();
        graph.add_edge(1, 1).unwrap();
        assert_eq!(graph.neighborhood(1).num_of_neighbors(), 2);
        assert!(graph.has_self_loop(1));
    }

    #[test]
    fn add_edge_rejects_out_of_range() {
        let mut graph = ListGraph::from_edges(5, [(0, 1)]).unwrap();
        let snapshot = graph.clone();

        assert_eq!(
            graph.add_edge(0, 7),
            Err(GraphError::InvalidVertexIndex {
                vertex: 7,
                num_vertices: 5
            })
        );
        assert!(graph.add_edge(5, 0).is_err());
        assert_eq!(graph, snapshot);
        assert!(graph.try_has_edge(0, 5).is_err());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn has_edge_panics_on_foreign_neighbor() {
        let graph = ListGraph::from_edges(3, [(0, 1)]).unwrap();
        graph.has_edge(0, 3);
    }

    #[test]
    fn from_edges_stops_at_invalid_edge() {
        assert_eq!(
            ListGraph::from_edges(3, [(0, 1), (1, 3)]).unwrap_err(),
            GraphError::InvalidVertexIndex {
                vertex: 3,
                num_vertices: 3
            }
        );
    }
}
