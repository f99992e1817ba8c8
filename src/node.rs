/*!
# Node Representation

Vertices are plain indices `0..n` stored as `Node = u32`.
Every graph in this crate additionally has a fixed upper bound on `n`, its *capacity*,
which defaults to [`MAX_VERTICES`].
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `n - 1`
pub type Node = u32;

/// Number of nodes of a graph
pub type NumNodes = Node;

/// Default capacity of every graph representation
pub const MAX_VERTICES: NumNodes = 10;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;
