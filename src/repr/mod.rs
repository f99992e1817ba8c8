/*!
# Graph Representations

Two storage backends for undirected graphs with a bounded number of vertices:

- [`MatrixGraph`]: a symmetric bit matrix. Edge tests are `O(1)`, neighborhoods are scanned
  in ascending order in `O(n)`, and inserting an existing edge is a no-op.
- [`ListGraph`]: one neighbor sequence per vertex. Neighborhoods are enumerated
  most-recently-added-first in `O(deg)`, edge tests are `O(deg)`, and duplicate insertions
  produce parallel entries.

Both share the traits of [`crate::ops`] and therefore support the traversals of [`crate::algo`].
*/

use crate::{ops::*, *};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

crate::testing::test_graph_ops!(
    test_matrix,
    MatrixGraph,
    true,
    (GraphNew, AdjacencyList, GraphEdgeEditing, Traversal)
);

crate::testing::test_graph_ops!(
    test_list,
    ListGraph,
    false,
    (GraphNew, AdjacencyList, GraphEdgeEditing, Traversal)
);
