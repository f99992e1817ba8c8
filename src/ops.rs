use std::ops::Range;

use itertools::Itertools;
use log::trace;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the maximum number of nodes this graph was configured for
    fn capacity(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `u` if it is a vertex of the graph and `GraphError::InvalidVertexIndex` otherwise
    fn check_vertex(&self, u: Node) -> GraphResult<Node> {
        if u < self.number_of_nodes() {
            Ok(u)
        } else {
            trace!(
                "rejecting vertex {u} (graph has {} vertices)",
                self.number_of_nodes()
            );
            Err(GraphError::InvalidVertexIndex {
                vertex: u,
                num_vertices: self.number_of_nodes(),
            })
        }
    }
}

/// Returns `GraphError::InvalidVertexCount` if `n` nodes do not fit into `capacity`
pub fn check_vertex_count(n: NumNodes, capacity: NumNodes) -> GraphResult<()> {
    if n <= capacity {
        Ok(())
    } else {
        Err(GraphError::InvalidVertexCount { count: n, capacity })
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for neighborhoods & edges.
///
/// This is the only capability the traversals in [`crate::algo`] rely on: the
/// order in which `neighbors_of` yields nodes determines the traversal order.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    type NeighborIter<'a>: Iterator<Item = Node> + 'a
    where
        Self: 'a;

    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_>;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the neighborhood of `u` or an error if `u` is not a vertex
    fn try_neighbors_of(&self, u: Node) -> GraphResult<Self::NeighborIter<'_>> {
        Ok(self.neighbors_of(self.check_vertex(u)?))
    }

    /// Returns an iterator over all degrees in node order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns all edges in the graph in sorted order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn ordered_edges(&self, only_normalized: bool) -> Vec<Edge> {
        self.edges(only_normalized).sorted().collect_vec()
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Same as `has_edge` but reports out-of-range endpoints as an error
    fn try_has_edge(&self, u: Node, v: Node) -> GraphResult<bool> {
        Ok(self.has_edge(self.check_vertex(u)?, self.check_vertex(v)?))
    }

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with `n` singleton nodes that may hold at most `capacity` nodes.
    /// Fails if `n > capacity`.
    fn try_with_capacity(n: NumNodes, capacity: NumNodes) -> GraphResult<Self>;

    /// Creates an empty graph with `n` singleton nodes and capacity [`MAX_VERTICES`].
    /// Fails if `n > MAX_VERTICES`.
    fn try_new(n: NumNodes) -> GraphResult<Self> {
        Self::try_with_capacity(n, MAX_VERTICES)
    }
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew {
    /// Adds the undirected edge `{u, v}` to the graph.
    /// Returns `Ok(true)` if a new adjacency was created and `Ok(false)` if the
    /// representation already stored the edge and left itself unchanged.
    ///
    /// # Errors
    /// Returns `GraphError::InvalidVertexIndex` if `u >= n` or `v >= n`; the graph is unchanged.
    fn add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool>;

    /// Adds all edges in the collection and stops at the first invalid one
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) -> GraphResult<()> {
        for Edge(u, v) in edges.into_iter().map(|d| d.into()) {
            self.add_edge(u, v)?;
        }
        Ok(())
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and a collection of Edges
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> GraphResult<Self>;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(
        n: NumNodes,
        edges: impl IntoIterator<Item = impl Into<Edge>>,
    ) -> GraphResult<Self> {
        let mut graph = Self::try_new(n)?;
        graph.add_edges(edges)?;
        Ok(graph)
    }
}
