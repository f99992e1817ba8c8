use log::{debug, trace};
use stream_bitset::prelude::{
    BitmaskSliceStream, BitmaskStreamConsumer, BitmaskStreamToIndices, ToBitmaskStream,
};

use super::*;

/// An undirected graph stored as a square adjacency matrix.
///
/// Row `u` is a bitset of `n` bits where bit `v` is set iff `{u, v}` is an edge.
/// The matrix is kept symmetric; the diagonal is only set by explicit self-loops.
/// Neighbors are enumerated in ascending order, testing an edge is `O(1)`, enumerating
/// a neighborhood is `O(n)`.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph {
    rows: Vec<NodeBitSet>,
    capacity: NumNodes,
    num_edges: NumEdges,
}

/// Iterator over the set bits of one matrix row in ascending order
pub type MatrixNeighbors<'a> = BitmaskStreamToIndices<BitmaskSliceStream<'a>, Node, true>;

impl GraphNodeOrder for MatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.rows.len() as NumNodes
    }

    fn capacity(&self) -> NumNodes {
        self.capacity
    }
}

impl GraphEdgeOrder for MatrixGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for MatrixGraph {
    type NeighborIter<'a> = MatrixNeighbors<'a>;

    fn neighbors_of(&self, u: Node) -> Self::NeighborIter<'_> {
        self.rows[u as usize].bitmask_stream().iter_set_bits()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.rows[u as usize].cardinality()
    }
}

impl AdjacencyTest for MatrixGraph {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        debug_assert!(v < self.number_of_nodes());
        self.rows[u as usize].get_bit(v)
    }
}

impl GraphNew for MatrixGraph {
    fn try_with_capacity(n: NumNodes, capacity: NumNodes) -> GraphResult<Self> {
        check_vertex_count(n, capacity)?;
        debug!("new adjacency matrix with {n} of at most {capacity} vertices");
        Ok(Self {
            rows: (0..n).map(|_| NodeBitSet::new(n)).collect(),
            capacity,
            num_edges: 0,
        })
    }
}

impl GraphEdgeEditing for MatrixGraph {
    /// Sets both `(u, v)` and `(v, u)`. Adding an edge that is already present is a no-op
    /// and returns `Ok(false)`.
    fn add_edge(&mut self, u: Node, v: Node) -> GraphResult<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;

        if self.has_edge(u, v) {
            trace!("matrix already contains edge ({u},{v})");
            return Ok(false);
        }

        self.rows[u as usize].set_bit(v);
        self.rows[v as usize].set_bit(u);
        self.num_edges += 1;
        trace!("matrix edge ({u},{v}) added");
        Ok(true)
    }
}
