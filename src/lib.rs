/*!
`adjgraphs` is a small library contrasting the two classic ways of storing an
unweighted, undirected graph and traversing it with BFS and DFS.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
Every graph has a fixed *capacity*, an upper bound on `n` chosen at construction
([`MAX_VERTICES`] unless configured otherwise via [`GraphNew::try_with_capacity`](ops::GraphNew::try_with_capacity)).
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`; since all graphs are undirected,
`Edge(u, v)` and `Edge(v, u)` describe the same edge.

### Available Representations

- [`MatrixGraph`](crate::repr::MatrixGraph): a symmetric bit matrix, neighbors in ascending order,
  inserting an existing edge is a no-op.
- [`ListGraph`](crate::repr::ListGraph): one neighbor sequence per vertex, neighbors newest first,
  inserting an existing edge adds a parallel entry.

# Errors

Vertex counts beyond the capacity and vertices outside `0..n` are reported as [`GraphError`]
before anything is modified; no operation indexes out of bounds on caller input.

# Usage

```rust
use adjgraphs::{prelude::*, algo::*};

let edges = [(0, 1), (0, 4), (1, 2), (1, 3), (1, 4), (3, 4)];

let matrix = MatrixGraph::from_edges(5, edges).unwrap();
assert_eq!(matrix.bfs_order(0).unwrap(), vec![0, 1, 4, 2, 3]);
assert_eq!(matrix.dfs_order(0).unwrap(), vec![0, 1, 2, 3, 4]);

let list = ListGraph::from_edges(5, edges).unwrap();
assert_eq!(list.bfs_order(0).unwrap(), vec![0, 4, 1, 3, 2]);
assert_eq!(list.dfs_order(0).unwrap(), vec![0, 4, 3, 1, 2]);

assert!(matrix.bfs(7).is_err());
```

In most use-cases, `use adjgraphs::{prelude::*, algo::*};` suffices for your needs.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `adjgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation
/// traits, text output as well as both representations.
pub mod prelude {
    pub use super::{edge::*, error::*, io::TextWrite, node::*, ops::*, repr::*};
}
