/*!
# Graph Algorithms

Traversals built on top of the graph representations in this crate:
```rust
use adjgraphs::algo::*;
```
gives access to [`BFS`], [`DFS`] and the [`Traversal`] trait implemented for every graph.
Traversals are provided as **iterators**, making it easy to consume results lazily.
*/

mod traversal;

use crate::prelude::*;

pub use traversal::*;
